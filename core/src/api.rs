//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `todocap_core::api` instead of reaching into
//! internal modules.

pub use crate::capture::{parse, ParsedCapture, Priority};
pub use crate::config::{
    bind_project_id_at, get_data_dir, load_default, AppConfig, GatewayConfig, LoggingConfig, Scope,
};
pub use crate::context::AppContext;
pub use crate::error::CliError;
pub use crate::gateway::{
    CreateProject, CreateTask, GatewayClient, GatewayHttpError, GatewayHttpErrorKind, Project,
    Task,
};
pub use crate::link::{file_link, open_external, project_link, task_link};
pub use crate::secrets::TokenStore;
