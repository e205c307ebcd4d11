use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::widget::{ChatTransport, ChatWidget, Entry, EntryRole, HttpTransport};

const WIDTH: usize = 80;

/// Lays out an entry the way the web widget does: user messages on the
/// right, assistant replies and errors on the left with a marker.
fn render_entry(entry: &Entry) -> String {
    let time = entry.time_label();
    match entry.role {
        EntryRole::User => entry
            .content
            .lines()
            .chain(std::iter::once(time.as_str()))
            .map(|line| format!("{:>width$}", line, width = WIDTH))
            .collect::<Vec<_>>()
            .join("\n"),
        EntryRole::Assistant | EntryRole::Error => {
            let marker = if entry.role == EntryRole::Error {
                "[!]"
            } else {
                "[bot]"
            };
            format!("{} {}\n      {}", marker, entry.content, time)
        }
    }
}

/// `/1` through `/3` pick a suggested question.
fn suggestion_index(line: &str) -> Option<usize> {
    let n: usize = line.strip_prefix('/')?.parse().ok()?;
    n.checked_sub(1)
}

fn print_suggestions<T: ChatTransport>(widget: &ChatWidget<T>) {
    let suggestions = widget.suggested_questions();
    if suggestions.is_empty() {
        return;
    }
    println!("Try asking:");
    for (idx, question) in suggestions.iter().enumerate() {
        println!("  /{} {}", idx + 1, question);
    }
}

pub async fn run(url: &str) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut widget = ChatWidget::new(HttpTransport::new(url));

    for entry in widget.history().iter() {
        println!("{}", render_entry(entry));
    }
    print_suggestions(&widget);

    loop {
        let prompt = if widget.config_warning().is_some() {
            "(!) >>> "
        } else {
            ">>> "
        };
        let readline = rl.readline(prompt);
        match readline {
            Ok(line) => {
                match suggestion_index(line.trim()) {
                    Some(idx) => {
                        if !widget.choose_suggestion(idx) {
                            println!("No suggestion /{}", idx + 1);
                            continue;
                        }
                    }
                    None => widget.set_input(&line),
                }

                let Some(request) = widget.begin_submit() else {
                    continue;
                };
                let _ = rl.add_history_entry(line.as_str());
                if let Some(entry) = widget.history().last() {
                    println!("{}", render_entry(entry));
                }
                println!("[bot] Thinking...");

                let had_warning = widget.config_warning().is_some();
                let result = widget.transport().send(&request.messages).await;
                widget.complete(result);

                if let Some(entry) = widget.history().last() {
                    println!("{}", render_entry(entry));
                }
                if let (false, Some(warning)) = (had_warning, widget.config_warning()) {
                    println!("\n{}\n", warning);
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_index() {
        assert_eq!(suggestion_index("/1"), Some(0));
        assert_eq!(suggestion_index("/3"), Some(2));
        assert_eq!(suggestion_index("/0"), None);
        assert_eq!(suggestion_index("What is an NFT?"), None);
        assert_eq!(suggestion_index("/x"), None);
    }

    #[test]
    fn test_render_user_entry_is_right_aligned() {
        let entry = Entry::new(EntryRole::User, "hello");
        let rendered = render_entry(&entry);
        let first = rendered.lines().next().unwrap();
        assert_eq!(first.len(), WIDTH);
        assert!(first.ends_with("hello"));
    }

    #[test]
    fn test_render_error_entry_has_marker() {
        let entry = Entry::new(EntryRole::Error, "Network error");
        assert!(render_entry(&entry).starts_with("[!] Network error"));
    }
}
