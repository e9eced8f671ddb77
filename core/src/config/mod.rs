pub mod load;
pub mod types;

pub use load::{bind_project_id_at, get_data_dir, load_default};
pub use types::{AppConfig, GatewayConfig, LoggingConfig, Scope};
