//! Integration tests for the Launchpad CLI against throwaway vaults.

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Run the launchpad binary against `vault` and return (stdout, stderr, code).
fn run_launchpad(vault: &Path, args: &[&str]) -> (String, String, i32) {
    let binary = env!("CARGO_BIN_EXE_launchpad");

    let output = Command::new(binary)
        .arg("--vault")
        .arg(vault)
        .args(args)
        .env("XDG_CONFIG_HOME", vault.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute launchpad");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_json(vault: &Path, args: &[&str]) -> Value {
    let (stdout, stderr, code) = run_launchpad(vault, args);
    assert_eq!(code, 0, "stderr: {}", stderr);
    serde_json::from_str(&stdout).expect("stdout is JSON")
}

fn write(vault: &Path, rel: &str, content: &str) {
    let path = vault.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

mod new_command {
    use super::*;

    #[test]
    fn creates_todo_in_folder() {
        let dir = TempDir::new().unwrap();
        let json = run_json(
            dir.path(),
            &[
                "new", "--domain", "personal", "--type", "todo", "--title", "Dentist", "--important",
            ],
        );

        assert_eq!(json["created"], true);
        let path = json["path"].as_str().unwrap();
        assert!(path.starts_with("Personal/Todos/"));
        assert!(path.ends_with(" - Dentist.md"));

        let content = fs::read_to_string(dir.path().join(path)).unwrap();
        assert!(content.starts_with("---\n"));
        assert!(content.contains("type: todo"));
        assert!(content.contains("eisenhower: schedule"));
    }

    #[test]
    fn second_create_leaves_note_alone() {
        let dir = TempDir::new().unwrap();
        let args = ["new", "--domain", "lists", "--type", "scratch", "--title", "Notes"];

        let first = run_json(dir.path(), &args);
        let path = dir.path().join(first["path"].as_str().unwrap());
        fs::write(&path, "edited by hand").unwrap();

        let second = run_json(dir.path(), &args);
        assert_eq!(second["created"], false);
        assert_eq!(fs::read_to_string(&path).unwrap(), "edited by hand");
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let json = run_json(
            dir.path(),
            &[
                "new", "--domain", "business", "--type", "idea", "--title", "Kiosk", "--dry-run",
            ],
        );

        assert_eq!(json["action"], "create");
        assert!(json["content"].as_str().unwrap().contains("type: idea"));
        assert!(!dir.path().join("Business").exists());
    }

    #[test]
    fn rejects_type_outside_domain() {
        let dir = TempDir::new().unwrap();
        let (_, stderr, code) = run_launchpad(
            dir.path(),
            &["new", "--domain", "lists", "--type", "idea", "--title", "Nope"],
        );
        assert_eq!(code, 4);
        assert!(stderr.contains("Error:"));
    }

    #[test]
    fn rejects_blank_title() {
        let dir = TempDir::new().unwrap();
        let (_, _, code) = run_launchpad(
            dir.path(),
            &["new", "--domain", "personal", "--type", "reference", "--title", "  "],
        );
        assert_eq!(code, 4);
    }
}

mod dashboard_command {
    use super::*;

    #[test]
    fn lists_todos_and_projects() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "Personal/Todos/2024-01-01 - Later.md",
            "---\ntype: todo\ndomain: personal\neisenhower: schedule\nstatus: active\n---\n",
        );
        write(
            dir.path(),
            "Business/Todos/2024-01-02 - Now.md",
            "---\ntype: todo\ndomain: business\neisenhower: do-first\nstatus: active\n---\n",
        );
        write(
            dir.path(),
            "Business/Todos/2024-01-03 - Finished.md",
            "---\ntype: todo\ndomain: business\neisenhower: do-first\nstatus: resolved\n---\n",
        );
        write(
            dir.path(),
            "Business/Ideas/2024-01-04 - Kiosk.md",
            "---\ntype: idea\ndomain: business\nstatus: project\n---\n",
        );
        write(dir.path(), "Log.md", "Met about [[2024-01-04 - Kiosk]].\n");

        let json = run_json(dir.path(), &["dashboard"]);

        let todos = json["todos"].as_array().unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0]["title"], "Now");
        assert_eq!(todos[1]["title"], "Later");

        let projects = json["active_projects"].as_array().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0]["title"], "Kiosk");
        assert_eq!(projects[0]["linked_count"], 1);

        assert!(json["greeting"].as_str().unwrap().starts_with("Good "));
    }

    #[test]
    fn hidden_sections_follow_settings() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            ".launchpad/settings.toml",
            "show_todos = false\nuser_name = \"Robin\"\n",
        );

        let json = run_json(dir.path(), &["dashboard"]);
        assert!(json.get("todos").is_none());
        assert!(json["greeting"].as_str().unwrap().ends_with("Robin"));
    }
}

mod promote_command {
    use super::*;

    #[test]
    fn promotes_created_idea() {
        let dir = TempDir::new().unwrap();
        let created = run_json(
            dir.path(),
            &["new", "--domain", "personal", "--type", "idea", "--title", "Garden"],
        );
        let path = created["path"].as_str().unwrap().to_string();

        let json = run_json(dir.path(), &["promote", &path]);
        assert_eq!(json["status"], "project");

        let content = fs::read_to_string(dir.path().join(&path)).unwrap();
        assert!(content.contains("status: project"));
        assert!(!content.contains("status: active"));

        let dashboard = run_json(dir.path(), &["dashboard"]);
        assert_eq!(dashboard["active_projects"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn missing_note_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (_, _, code) = run_launchpad(dir.path(), &["promote", "Nope.md"]);
        assert_eq!(code, 2);
    }
}

mod other_commands {
    use super::*;

    #[test]
    fn types_lists_three_domains() {
        let dir = TempDir::new().unwrap();
        let json = run_json(dir.path(), &["types"]);
        let domains = json["domains"].as_array().unwrap();
        assert_eq!(domains.len(), 3);
        assert_eq!(domains[0]["id"], "business");
    }

    #[test]
    fn search_ranks_matching_notes() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Road trip.md", "");
        write(dir.path(), "Groceries.md", "");

        let json = run_json(dir.path(), &["search", "road"]);
        let results = json["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["name"], "Road trip");
    }

    #[test]
    fn recent_open_persists() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "A.md", "");

        let json = run_json(dir.path(), &["recent", "open", "A.md"]);
        assert_eq!(json["files"][0]["path"], "A.md");

        let listed = run_json(dir.path(), &["recent"]);
        assert_eq!(listed["files"].as_array().unwrap().len(), 1);

        let cleared = run_json(dir.path(), &["recent", "clear"]);
        assert!(cleared["files"].as_array().unwrap().is_empty());
    }

    #[test]
    fn capture_needs_terminal() {
        let dir = TempDir::new().unwrap();
        let (_, stderr, code) = run_launchpad(dir.path(), &["capture"]);
        assert_eq!(code, 4);
        assert!(stderr.contains("launchpad new"));
    }

    #[test]
    fn missing_vault_fails() {
        let dir = TempDir::new().unwrap();
        let (_, _, code) = run_launchpad(&dir.path().join("nowhere"), &["dashboard"]);
        assert_eq!(code, 1);
    }
}
