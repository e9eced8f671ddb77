//! Capture flow: turn one line of text into a remote task.

use todocap_core::api as core_api;

use super::{project, require_token};
use crate::commands::cli::CaptureArgs;
use crate::ui::Interact;

pub async fn run(
    ctx: &core_api::AppContext,
    ui: &dyn Interact,
    args: &CaptureArgs,
) -> Result<i32, core_api::CliError> {
    let Some(token) = require_token(ctx, ui).await else {
        return Ok(0);
    };
    let gateway = ctx.gateway(&token)?;

    let scope = args.scoped.scope.into();
    let Some(project_id) = project::get_or_create_project_id(
        ctx,
        ui,
        &gateway,
        scope,
        args.scoped.project_id.as_deref(),
    )
    .await
    else {
        return Ok(0);
    };

    let (file_link, line) = match (&args.file, args.line) {
        (Some(path), Some(line)) => {
            let abs = if path.is_absolute() {
                path.clone()
            } else {
                std::env::current_dir()
                    .map(|d| d.join(path))
                    .unwrap_or_else(|_| path.clone())
            };
            (
                core_api::file_link(&ctx.cfg().gateway.editor_scheme, &abs, line),
                line,
            )
        }
        _ => (String::new(), 0),
    };

    let hint = if file_link.is_empty() {
        "Try @label and !!1-4".to_string()
    } else {
        format!("Try @label and !!1-4 • Line {}", line)
    };
    let Some(input) = ui.input("Enter todo:", &hint).await else {
        return Ok(0);
    };

    let parsed = core_api::parse(&input);
    let payload = core_api::CreateTask {
        content: parsed.title,
        project_id,
        description: file_link,
        labels: parsed.labels,
        priority: parsed.priority.to_api(),
    };

    let task = match gateway.create_task(payload).await {
        Ok(task) => task,
        Err(e) => {
            tracing::debug!(target: "todocap.flow", stage = "capture.create.err", error = %e);
            ui.warn("There was an error creating the task");
            return Ok(0);
        }
    };

    match ui.info("Task created", &["Edit", "Undo"]).await {
        Some(0) => {
            let url = core_api::task_link(&ctx.cfg().gateway.app_scheme, &task.id);
            if let Err(e) = core_api::open_external(&url) {
                tracing::warn!(target: "todocap.flow", "failed to open {url}: {e}");
            }
        }
        Some(1) => match gateway.delete_task(&task.id).await {
            Ok(()) => {
                ui.info("Task deleted", &[]).await;
            }
            Err(e) => {
                tracing::debug!(target: "todocap.flow", stage = "capture.undo.err", error = %e);
                ui.warn("There was an error deleting the task");
            }
        },
        _ => {}
    }

    Ok(0)
}
