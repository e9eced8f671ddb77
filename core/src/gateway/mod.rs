pub mod client;
pub mod models;

pub use client::{GatewayClient, GatewayHttpError, GatewayHttpErrorKind};
pub use models::{CreateProject, CreateTask, Project, Task};
