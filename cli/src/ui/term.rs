//! Terminal implementation of the `Interact` seam.
//!
//! Prompts render to stderr so stdout stays clean for piping. Password
//! entry switches the terminal into raw mode and never echoes the token.

use std::io::{BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use super::{Interact, PickItem};

#[derive(Debug, Default, Clone)]
pub struct TermInteract;

impl TermInteract {
    pub fn new() -> Self {
        Self
    }
}

fn read_line_blocking() -> Option<String> {
    let mut line = String::new();
    let n = std::io::stdin().lock().read_line(&mut line).ok()?;
    if n == 0 {
        return None;
    }
    let line = line.trim().to_string();
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

fn read_password_blocking() -> Option<String> {
    terminal::enable_raw_mode().ok()?;
    let mut buf = String::new();
    let entered = loop {
        match event::read() {
            Ok(Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            })) => match code {
                KeyCode::Enter => break true,
                KeyCode::Esc => break false,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => break false,
                KeyCode::Backspace => {
                    buf.pop();
                }
                KeyCode::Char(c) => buf.push(c),
                _ => {}
            },
            Ok(_) => {}
            Err(_) => break false,
        }
    };
    let _ = terminal::disable_raw_mode();
    eprintln!();

    if !entered {
        return None;
    }
    let token = buf.trim().to_string();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

fn render_prompt(prompt: &str, placeholder: &str) {
    let mut err = std::io::stderr().lock();
    if !placeholder.is_empty() {
        let _ = writeln!(err, "{}", placeholder);
    }
    let _ = write!(err, "{} ", prompt);
    let _ = err.flush();
}

#[async_trait::async_trait]
impl Interact for TermInteract {
    async fn input(&self, prompt: &str, placeholder: &str) -> Option<String> {
        render_prompt(prompt, placeholder);
        tokio::task::spawn_blocking(read_line_blocking)
            .await
            .ok()
            .flatten()
    }

    async fn input_password(&self, prompt: &str) -> Option<String> {
        render_prompt(prompt, "");
        tokio::task::spawn_blocking(read_password_blocking)
            .await
            .ok()
            .flatten()
    }

    async fn pick(&self, placeholder: &str, items: &[PickItem]) -> Option<usize> {
        {
            let mut err = std::io::stderr().lock();
            if !placeholder.is_empty() {
                let _ = writeln!(err, "{}", placeholder);
            }
            for (idx, item) in items.iter().enumerate() {
                let mark = if item.picked { "x" } else { " " };
                let _ = writeln!(err, "  [{}] {}. {}", mark, idx + 1, item.label);
                if !item.detail.is_empty() {
                    let _ = writeln!(err, "         {}", item.detail);
                }
            }
            let _ = write!(err, "number> ");
            let _ = err.flush();
        }

        let line = tokio::task::spawn_blocking(read_line_blocking)
            .await
            .ok()
            .flatten()?;
        let choice: usize = line.trim().parse().ok()?;
        if choice == 0 || choice > items.len() {
            return None;
        }
        Some(choice - 1)
    }

    async fn info(&self, message: &str, actions: &[&str]) -> Option<usize> {
        {
            let mut err = std::io::stderr().lock();
            let _ = writeln!(err, "{}", message);
            if actions.is_empty() {
                return None;
            }
            for (idx, action) in actions.iter().enumerate() {
                let _ = write!(err, "  [{}] {}", idx + 1, action);
            }
            let _ = writeln!(err, "  [Enter] dismiss");
            let _ = write!(err, "action> ");
            let _ = err.flush();
        }

        let line = tokio::task::spawn_blocking(read_line_blocking)
            .await
            .ok()
            .flatten()?;
        let choice: usize = line.trim().parse().ok()?;
        if choice == 0 || choice > actions.len() {
            return None;
        }
        Some(choice - 1)
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "todocap.ui", "{}", message);
        eprintln!("warning: {}", message);
    }
}
