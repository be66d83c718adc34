//! Projections from scanned documents to dashboard rows.

use crate::graph::BacklinkSource;
use crate::note::display_title;
use crate::types::{ActiveProject, NoteStatus, NoteType, TodoItem};
use crate::vault::Document;
use std::cmp::Ordering;

/// Open todos, highest-priority quadrant first.
///
/// A document qualifies when its type is `todo`, its status is not closed and
/// both domain and quadrant are present. Within a quadrant, dated todos come
/// first in ascending due order; undated ones keep their scan order.
pub fn project_todos(docs: &[Document]) -> Vec<TodoItem> {
    let mut todos: Vec<TodoItem> = docs
        .iter()
        .filter_map(|doc| {
            let meta = doc.metadata.as_ref()?;
            if meta.note_type != Some(NoteType::Todo) {
                return None;
            }
            if meta.status.is_some_and(NoteStatus::is_closed) {
                return None;
            }
            let domain = meta.domain?;
            let quadrant = meta.quadrant?;

            Some(TodoItem {
                path: doc.path.clone(),
                title: display_title(&doc.basename),
                domain,
                quadrant,
                due: meta.due.clone(),
                status: meta.status.unwrap_or(NoteStatus::Active),
            })
        })
        .collect();

    // sort_by is stable, so undated ties keep input order.
    todos.sort_by(|a, b| {
        a.quadrant
            .rank()
            .cmp(&b.quadrant.rank())
            .then_with(|| compare_due(&a.due, &b.due))
    });
    todos
}

/// Notes whose status is `project`, with their backlink counts.
pub fn project_active_projects(
    docs: &[Document],
    backlinks: &dyn BacklinkSource,
) -> Vec<ActiveProject> {
    docs.iter()
        .filter_map(|doc| {
            let meta = doc.metadata.as_ref()?;
            if meta.status != Some(NoteStatus::Project) {
                return None;
            }
            let domain = meta.domain?;

            Some(ActiveProject {
                path: doc.path.clone(),
                title: display_title(&doc.basename),
                domain,
                linked_count: backlinks.backlink_count(&doc.path),
            })
        })
        .collect()
}

fn compare_due(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::NoteMetadata;
    use crate::types::{Domain, Quadrant};
    use pretty_assertions::assert_eq;
    use std::path::{Path, PathBuf};

    fn todo(path: &str, quadrant: Option<Quadrant>, due: Option<&str>) -> Document {
        Document::new(
            path,
            Some(NoteMetadata {
                note_type: Some(NoteType::Todo),
                domain: Some(Domain::Business),
                quadrant,
                due: due.map(str::to_string),
                ..NoteMetadata::default()
            }),
        )
    }

    fn titles(todos: &[TodoItem]) -> Vec<&str> {
        todos.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_todo_ordering() {
        let docs = vec![
            todo("t/2024-01-01 - A.md", Some(Quadrant::Schedule), Some("2024-05-01")),
            todo("t/2024-01-01 - B.md", Some(Quadrant::DoFirst), None),
            todo("t/2024-01-01 - C.md", Some(Quadrant::DoFirst), Some("2024-04-01")),
            todo("t/2024-01-01 - D.md", Some(Quadrant::Drop), None),
            todo("t/2024-01-01 - E.md", Some(Quadrant::DoFirst), Some("2024-03-01")),
            todo("t/2024-01-01 - F.md", Some(Quadrant::DoFirst), None),
        ];
        let todos = project_todos(&docs);
        assert_eq!(titles(&todos), vec!["E", "C", "B", "F", "A", "D"]);
    }

    #[test]
    fn test_todo_filtering() {
        let mut resolved = todo("r.md", Some(Quadrant::DoFirst), None);
        resolved.metadata.as_mut().unwrap().status = Some(NoteStatus::Resolved);
        let mut archived = todo("a.md", Some(Quadrant::DoFirst), None);
        archived.metadata.as_mut().unwrap().status = Some(NoteStatus::Archived);
        let mut no_domain = todo("d.md", Some(Quadrant::DoFirst), None);
        no_domain.metadata.as_mut().unwrap().domain = None;
        let mut not_todo = todo("i.md", Some(Quadrant::DoFirst), None);
        not_todo.metadata.as_mut().unwrap().note_type = Some(NoteType::Idea);

        let docs = vec![
            resolved,
            archived,
            no_domain,
            not_todo,
            todo("q.md", None, None),
            Document::new("plain.md", None),
            todo("ok.md", Some(Quadrant::Delegate), None),
        ];
        let todos = project_todos(&docs);
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].path, PathBuf::from("ok.md"));
        assert_eq!(todos[0].status, NoteStatus::Active);
    }

    #[test]
    fn test_title_strips_date_prefix() {
        let docs = vec![todo(
            "Business/Todos/2024-02-03 - Call Bob.md",
            Some(Quadrant::DoFirst),
            None,
        )];
        assert_eq!(project_todos(&docs)[0].title, "Call Bob");
    }

    #[test]
    fn test_active_projects_with_backlinks() {
        let project = |path: &str, domain: Option<Domain>| {
            Document::new(
                path,
                Some(NoteMetadata {
                    status: Some(NoteStatus::Project),
                    domain,
                    ..NoteMetadata::default()
                }),
            )
        };
        let docs = vec![
            project("Business/Ideas/2024-01-01 - Box.md", Some(Domain::Business)),
            project("Personal/Ideas/Orphan.md", None),
            project("Personal/Ideas/Garden.md", Some(Domain::Personal)),
            todo("t.md", Some(Quadrant::DoFirst), None),
        ];

        let counts = |path: &Path| if path.ends_with("2024-01-01 - Box.md") { 3 } else { 0 };
        let projects = project_active_projects(&docs, &counts);

        assert_eq!(
            projects,
            vec![
                ActiveProject {
                    path: PathBuf::from("Business/Ideas/2024-01-01 - Box.md"),
                    title: "Box".to_string(),
                    domain: Domain::Business,
                    linked_count: 3,
                },
                ActiveProject {
                    path: PathBuf::from("Personal/Ideas/Garden.md"),
                    title: "Garden".to_string(),
                    domain: Domain::Personal,
                    linked_count: 0,
                },
            ]
        );
    }
}
