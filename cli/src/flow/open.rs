//! Open flow: jump to the bound project in the companion app.

use todocap_core::api as core_api;

use super::{project, require_token};
use crate::commands::cli::ScopedArgs;
use crate::ui::Interact;

pub async fn run(
    ctx: &core_api::AppContext,
    ui: &dyn Interact,
    args: &ScopedArgs,
) -> Result<i32, core_api::CliError> {
    let Some(token) = require_token(ctx, ui).await else {
        return Ok(0);
    };
    let gateway = ctx.gateway(&token)?;

    let scope = args.scope.into();
    let Some(project_id) =
        project::get_or_create_project_id(ctx, ui, &gateway, scope, args.project_id.as_deref())
            .await
    else {
        return Ok(0);
    };

    let url = core_api::project_link(&ctx.cfg().gateway.app_scheme, &project_id);
    if let Err(e) = core_api::open_external(&url) {
        tracing::warn!(target: "todocap.flow", "failed to open {url}: {e}");
        ui.warn("There was an error opening the project");
    }
    Ok(0)
}
