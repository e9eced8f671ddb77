//! todocap-core
//!
//! Core logic for the todocap terminal capture client: the free-text capture
//! parser, the task-API gateway client, configuration, the token store, and
//! link builders. The `cli` crate wires these to the interactive terminal.

pub mod api;
pub mod capture;
pub mod config;
pub mod context;
pub mod error;
pub mod gateway;
pub mod link;
pub mod secrets;
