//! Project resolution: explicit id, then bound config, then an interactive
//! picker over the remote project list (with a "create new" escape hatch).
//! A picked or created project is bound back into the scope's config file.

use todocap_core::api as core_api;

use crate::ui::{Interact, PickItem};

const CREATE_NEW_LABEL: &str = "Create a new project";

pub async fn get_or_create_project_id(
    ctx: &core_api::AppContext,
    ui: &dyn Interact,
    gateway: &core_api::GatewayClient,
    scope: core_api::Scope,
    explicit: Option<&str>,
) -> Option<String> {
    if let Some(id) = explicit {
        return Some(id.to_string());
    }

    if scope == core_api::Scope::Project && std::env::current_dir().is_err() {
        ui.warn("Not within a workspace");
        return None;
    }

    if let Some(id) = ctx.cfg().project_id.clone() {
        return Some(id);
    }

    let projects = match gateway.list_projects().await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::debug!(target: "todocap.flow", stage = "project.list.err", error = %e);
            ui.warn("There was an error loading projects");
            return None;
        }
    };

    let mut items: Vec<PickItem> = projects
        .iter()
        .map(|p| PickItem::new(p.name.clone()))
        .collect();
    items.push(PickItem::new(CREATE_NEW_LABEL));

    let choice = ui
        .pick("Choose a project for this workspace", &items)
        .await?;

    let project_id = if choice < projects.len() {
        projects[choice].id.clone()
    } else {
        let name = ui.input("Enter project name:", "").await?;
        match gateway.create_project(&name).await {
            Ok(project) => project.id,
            Err(e) => {
                tracing::debug!(target: "todocap.flow", stage = "project.create.err", error = %e);
                ui.warn("There was an error creating the project");
                return None;
            }
        }
    };

    if let Err(e) = ctx.bind_project_id(scope, &project_id) {
        tracing::warn!(target: "todocap.flow", "failed to bind project id: {e}");
    }
    Some(project_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::testing::ScriptedInteract;
    use mockito::Server;
    use todocap_core::api as core_api;

    fn test_ctx(base_url: &str, data_dir: std::path::PathBuf) -> core_api::AppContext {
        let mut cfg = core_api::AppConfig::default();
        cfg.gateway.base_url = base_url.to_string();
        core_api::AppContext::new(cfg, data_dir)
    }

    #[tokio::test]
    async fn test_explicit_id_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx("http://localhost:1", dir.path().to_path_buf());
        let gateway = ctx.gateway("tok").unwrap();
        let ui = ScriptedInteract::new();

        let id = get_or_create_project_id(&ctx, &ui, &gateway, core_api::Scope::Global, Some("p9"))
            .await;
        assert_eq!(id.as_deref(), Some("p9"));
    }

    #[tokio::test]
    async fn test_bound_config_id_skips_picker() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = core_api::AppConfig::default();
        cfg.project_id = Some("bound".to_string());
        let ctx = core_api::AppContext::new(cfg, dir.path().to_path_buf());
        let gateway = ctx.gateway("tok").unwrap();
        let ui = ScriptedInteract::new();

        let id =
            get_or_create_project_id(&ctx, &ui, &gateway, core_api::Scope::Global, None).await;
        assert_eq!(id.as_deref(), Some("bound"));
    }

    #[tokio::test]
    async fn test_picker_selects_project_and_binds_it() {
        let mut server = Server::new_async().await;
        let _list = server
            .mock("GET", "/rest/v2/projects")
            .with_status(200)
            .with_body(r#"[{"id":"p1","name":"Inbox"},{"id":"p2","name":"Work"}]"#)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx(&server.url(), dir.path().to_path_buf());
        let gateway = ctx.gateway("tok").unwrap();
        let ui = ScriptedInteract::new();
        ui.push_pick(Some(1));

        let id =
            get_or_create_project_id(&ctx, &ui, &gateway, core_api::Scope::Global, None).await;
        assert_eq!(id.as_deref(), Some("p2"));

        // last picker row is always the create-new escape hatch
        let lists = ui.pick_lists.lock().unwrap().clone();
        assert_eq!(lists[0].last().unwrap().label, "Create a new project");

        let bound = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
        assert!(bound.contains("project_id = \"p2\""));
    }

    #[tokio::test]
    async fn test_create_new_project_via_picker() {
        let mut server = Server::new_async().await;
        let _list = server
            .mock("GET", "/rest/v2/projects")
            .with_status(200)
            .with_body(r#"[{"id":"p1","name":"Inbox"}]"#)
            .create_async()
            .await;
        let _create = server
            .mock("POST", "/rest/v2/projects")
            .match_body(mockito::Matcher::Json(serde_json::json!({"name": "Side"})))
            .with_status(200)
            .with_body(r#"{"id":"p7","name":"Side"}"#)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx(&server.url(), dir.path().to_path_buf());
        let gateway = ctx.gateway("tok").unwrap();
        let ui = ScriptedInteract::new();
        ui.push_pick(Some(1)); // index past the project list
        ui.push_input(Some("Side"));

        let id =
            get_or_create_project_id(&ctx, &ui, &gateway, core_api::Scope::Global, None).await;
        assert_eq!(id.as_deref(), Some("p7"));
    }

    #[tokio::test]
    async fn test_list_failure_warns_and_aborts() {
        let mut server = Server::new_async().await;
        let _list = server
            .mock("GET", "/rest/v2/projects")
            .with_status(500)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx(&server.url(), dir.path().to_path_buf());
        let gateway = ctx.gateway("tok").unwrap();
        let ui = ScriptedInteract::new();

        let id =
            get_or_create_project_id(&ctx, &ui, &gateway, core_api::Scope::Global, None).await;
        assert_eq!(id, None);
        assert_eq!(ui.warnings(), vec!["There was an error loading projects"]);
    }

    #[tokio::test]
    async fn test_abandoned_picker_aborts_silently() {
        let mut server = Server::new_async().await;
        let _list = server
            .mock("GET", "/rest/v2/projects")
            .with_status(200)
            .with_body(r#"[{"id":"p1","name":"Inbox"}]"#)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx(&server.url(), dir.path().to_path_buf());
        let gateway = ctx.gateway("tok").unwrap();
        let ui = ScriptedInteract::new();
        ui.push_pick(None);

        let id =
            get_or_create_project_id(&ctx, &ui, &gateway, core_api::Scope::Global, None).await;
        assert_eq!(id, None);
        assert!(ui.warnings().is_empty());
    }
}
