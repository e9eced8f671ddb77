//! Token flow: store or replace the API token.

use todocap_core::api as core_api;

use crate::ui::Interact;

pub async fn run(
    ctx: &core_api::AppContext,
    ui: &dyn Interact,
) -> Result<i32, core_api::CliError> {
    let Some(token) = ui.input_password("Enter your API token:").await else {
        return Ok(0);
    };

    ctx.tokens()
        .store(&token)
        .map_err(core_api::CliError::Anyhow)?;
    ui.info("Token saved", &[]).await;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::testing::ScriptedInteract;
    use todocap_core::api as core_api;

    #[tokio::test]
    async fn test_token_is_stored() {
        let dir = tempfile::tempdir().unwrap();
        let ctx =
            core_api::AppContext::new(core_api::AppConfig::default(), dir.path().to_path_buf());
        let ui = ScriptedInteract::new();
        ui.push_password(Some("new-token"));

        let exit = run(&ctx, &ui).await.unwrap();
        assert_eq!(exit, 0);
        assert_eq!(ctx.tokens().load().as_deref(), Some("new-token"));
        assert_eq!(ui.messages(), vec!["Token saved"]);
    }

    #[tokio::test]
    async fn test_declined_prompt_stores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let ctx =
            core_api::AppContext::new(core_api::AppConfig::default(), dir.path().to_path_buf());
        let ui = ScriptedInteract::new();
        ui.push_password(None);

        let exit = run(&ctx, &ui).await.unwrap();
        assert_eq!(exit, 0);
        assert_eq!(ctx.tokens().load(), None);
        assert!(ui.messages().is_empty());
    }
}
