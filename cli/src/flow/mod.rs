//! User flows: one suspend-resume chain per command (prompt, gateway call,
//! notify). An abandoned prompt aborts the flow silently.

pub mod capture;
pub mod open;
pub mod project;
pub mod tasks;
pub mod token;

use todocap_core::api as core_api;

use crate::ui::Interact;

/// Resolves the API token for this invocation: environment or store first,
/// otherwise a masked prompt whose answer is persisted. `None` means the
/// user declined and the flow should stop without a message.
pub async fn require_token(ctx: &core_api::AppContext, ui: &dyn Interact) -> Option<String> {
    if let Some(token) = ctx.stored_token() {
        return Some(token);
    }

    let token = ui.input_password("Enter your API token:").await?;
    if let Err(e) = ctx.tokens().store(&token) {
        tracing::warn!(target: "todocap.flow", "failed to store token: {e}");
    }
    Some(token)
}
