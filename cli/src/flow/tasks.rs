//! Task browsing flow: quick-pick over the bound project's tasks, then
//! open-in-app or completion toggling for the selected task.

use todocap_core::api as core_api;

use super::{project, require_token};
use crate::commands::cli::ScopedArgs;
use crate::ui::{Interact, PickItem};

const CONTENT_PREVIEW_LIMIT: usize = 45;

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

    let tasks = match gateway.list_tasks(&project_id).await {
        Ok(tasks) => tasks,
        Err(e) => {
            tracing::debug!(target: "todocap.flow", stage = "tasks.list.err", error = %e);
            ui.warn("There was an error loading tasks");
            return Ok(0);
        }
    };

    let items: Vec<PickItem> = tasks.iter().map(task_pick_item).collect();
    let Some(choice) = ui.pick("", &items).await else {
        return Ok(0);
    };

    show_edit_task(ctx, ui, &gateway, &tasks[choice]).await;
    Ok(0)
}

async fn show_edit_task(
    ctx: &core_api::AppContext,
    ui: &dyn Interact,
    gateway: &core_api::GatewayClient,
    task: &core_api::Task,
) {
    let toggle = if task.is_completed {
        "Uncomplete"
    } else {
        "Complete"
    };
    let preview = trim_content(&task.content, CONTENT_PREVIEW_LIMIT);

    match ui.info(&preview, &["Open", toggle]).await {
        Some(0) => {
            let url = core_api::task_link(&ctx.cfg().gateway.app_scheme, &task.id);
            if let Err(e) = core_api::open_external(&url) {
                tracing::warn!(target: "todocap.flow", "failed to open {url}: {e}");
            }
        }
        Some(1) => {
            let (result, message) = if task.is_completed {
                (
                    gateway.reopen_task(&task.id).await,
                    "Task marked as not completed",
                )
            } else {
                (gateway.close_task(&task.id).await, "Task marked as completed")
            };
            match result {
                Ok(()) => {
                    ui.info(message, &[]).await;
                }
                Err(e) => {
                    tracing::debug!(target: "todocap.flow", stage = "tasks.toggle.err", error = %e);
                    ui.warn("There was an error updating the task");
                }
            }
        }
        _ => {}
    }
}

/// Quick-pick row for a task: completion marker plus content as the label,
/// priority and labels as the detail line, pre-checked when completed.
pub fn task_pick_item(task: &core_api::Task) -> PickItem {
    let label = if task.is_completed {
        format!("✔️ {}", task.content)
    } else {
        task.content.clone()
    };
    PickItem {
        label,
        detail: task_detail(task),
        picked: task.is_completed,
    }
}

fn task_detail(task: &core_api::Task) -> String {
    let labels = task
        .labels
        .iter()
        .map(|l| format!("@{}", l))
        .collect::<Vec<_>>()
        .join(" • ");

    let priority = core_api::Priority::from_api(task.priority);
    let priority = if priority.is_set() {
        format!("P{}", priority.user())
    } else {
        String::new()
    };

    let sep = if !priority.is_empty() && !labels.is_empty() {
        " • "
    } else {
        ""
    };
    format!("{}{}{}", priority, sep, labels)
}

fn trim_content(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let mut out: String = s.chars().take(max_len).collect();
        out.push('…');
        out
    } else {
        s.to_string()
    }
}
