//! Interactive UI seam.
//!
//! Flows talk to the user through the `Interact` trait: single-line prompts,
//! masked token entry, a flat quick-pick list, and notifications with
//! optional action buttons. The terminal implementation lives in `term`;
//! tests drive flows with a scripted fake.

pub mod term;

pub use term::TermInteract;

/// One row of a quick-pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    pub label: String,
    pub detail: String,
    pub picked: bool,
}

impl PickItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: String::new(),
            picked: false,
        }
    }
}

#[async_trait::async_trait]
pub trait Interact: Send + Sync {
    /// Solicits one line of text. `None` means the user abandoned the
    /// prompt (empty input counts as abandoning).
    async fn input(&self, prompt: &str, placeholder: &str) -> Option<String>;

    /// Like `input` but without echoing what is typed.
    async fn input_password(&self, prompt: &str) -> Option<String>;

    /// Presents a flat list and returns the chosen index, or `None` when
    /// dismissed.
    async fn pick(&self, placeholder: &str, items: &[PickItem]) -> Option<usize>;

    /// Informational notification with optional action buttons; returns the
    /// index of the chosen action, if any.
    async fn info(&self, message: &str, actions: &[&str]) -> Option<usize>;

    /// Warning notification. Fire-and-forget, no actions.
    fn warn(&self, message: &str);
}
