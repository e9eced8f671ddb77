//! todocap-cli library - exposes modules for unit tests

pub mod commands;
pub mod flow;
pub mod ui;
