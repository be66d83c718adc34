//! Interactive capture wizard on the terminal.

use crate::capture::{CaptureState, CaptureStep};
use crate::cli::new::NewResponse;
use crate::cli::output::Output;
use crate::creator::NoteCreator;
use crate::error::{LaunchpadError, Result};
use crate::registry;
use crate::types::{Domain, NoteType};
use crate::vault::Vault;
use std::io::{BufRead, Write};

fn stdin_is_terminal() -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::io::AsRawFd;
        unsafe { libc::isatty(std::io::stdin().as_raw_fd()) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}

pub fn run(vault: &Vault, output: &Output) -> Result<()> {
    if !stdin_is_terminal() {
        return Err(LaunchpadError::InvalidCapture(
            "capture needs a terminal; use `launchpad new` instead".to_string(),
        ));
    }

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut prompt = std::io::stderr();

    let Some(state) = run_wizard(&mut input, &mut prompt)? else {
        output.info("Capture cancelled");
        return Ok(());
    };

    let creator = NoteCreator::new(vault.clone());
    match creator.create_note(&state)? {
        Some(outcome) => output.print(&NewResponse::from_outcome(&outcome)),
        None => Err(LaunchpadError::InvalidCapture("incomplete capture".to_string())),
    }
}

enum Answer {
    Value(String),
    Back,
    Quit,
}

fn ask<R: BufRead, W: Write>(input: &mut R, prompt: &mut W, question: &str) -> Result<Answer> {
    write!(prompt, "{} ", question)?;
    prompt.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Answer::Quit);
    }
    Ok(match line.trim() {
        "q" | "quit" => Answer::Quit,
        "b" | "back" => Answer::Back,
        other => Answer::Value(other.to_string()),
    })
}

fn yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

/// Pick from a numbered list; returns the chosen index.
fn pick(answer: &str, len: usize) -> Option<usize> {
    answer
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}

/// Drive a [`CaptureState`] from line-based input. `Ok(None)` when the user
/// quits or input ends before the capture completes.
pub fn run_wizard<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> Result<Option<CaptureState>> {
    let mut state = CaptureState::new();
    writeln!(prompt, "Quick capture ('b' to go back, 'q' to quit)")?;

    while !state.is_complete() {
        match state.step {
            CaptureStep::Domain => {
                for (i, d) in registry::all_domains().iter().enumerate() {
                    writeln!(prompt, "  {}. {} {}", i + 1, d.emoji, d.label)?;
                }
                match ask(input, prompt, "Domain:")? {
                    Answer::Quit => return Ok(None),
                    Answer::Back => {}
                    Answer::Value(v) => match pick(&v, Domain::ALL.len()) {
                        Some(i) => state.choose_domain(Domain::ALL[i])?,
                        None => writeln!(prompt, "Pick a number from the list")?,
                    },
                }
            }
            CaptureStep::Type => {
                let Some(domain) = state.domain.and_then(registry::domain_config) else {
                    state.back();
                    continue;
                };
                for (i, nt) in domain.note_types.iter().enumerate() {
                    writeln!(prompt, "  {}. {} {}", i + 1, nt.emoji, nt.label)?;
                }
                match ask(input, prompt, "Type:")? {
                    Answer::Quit => return Ok(None),
                    Answer::Back => state.back(),
                    Answer::Value(v) => match pick(&v, domain.note_types.len()) {
                        Some(i) => {
                            let config = &domain.note_types[i];
                            if domain.id == Domain::Business && config.id == NoteType::Idea {
                                if let Answer::Value(a) =
                                    ask(input, prompt, "Sparked by something broken? [y/N]")?
                                {
                                    state.choose_problem_spark(yes(&a))?;
                                }
                            }
                            state.choose_note_type(config.id)?;
                        }
                        None => writeln!(prompt, "Pick a number from the list")?,
                    },
                }
            }
            CaptureStep::Quadrant => {
                let important = match ask(input, prompt, "Important? [y/N]")? {
                    Answer::Quit => return Ok(None),
                    Answer::Back => {
                        state.back();
                        continue;
                    }
                    Answer::Value(v) => yes(&v),
                };
                let urgent = match ask(input, prompt, "Urgent? [y/N]")? {
                    Answer::Quit => return Ok(None),
                    Answer::Back => continue,
                    Answer::Value(v) => yes(&v),
                };
                state.choose_quadrant(important, urgent)?;
                if let Some(q) = state.quadrant {
                    let label = q.label();
                    writeln!(prompt, "  {} {} ({})", label.emoji, label.label, label.description)?;
                }
            }
            CaptureStep::Details => {
                let title = match ask(input, prompt, "Title:")? {
                    Answer::Quit => return Ok(None),
                    Answer::Back => {
                        state.back();
                        continue;
                    }
                    Answer::Value(v) if v.is_empty() => {
                        writeln!(prompt, "A title is required")?;
                        continue;
                    }
                    Answer::Value(v) => v,
                };
                let due = match ask(input, prompt, "Due date (YYYY-MM-DD, optional):")? {
                    Answer::Quit => return Ok(None),
                    Answer::Back => continue,
                    Answer::Value(v) => Some(v),
                };
                let store = if state.note_type == Some(NoteType::Shopping) {
                    match ask(input, prompt, "Store (optional):")? {
                        Answer::Quit => return Ok(None),
                        Answer::Back => continue,
                        Answer::Value(v) => Some(v),
                    }
                } else {
                    None
                };
                state.fill_details(&title, due, store)?;
            }
            CaptureStep::Done => {}
        }
    }

    Ok(Some(state))
}
