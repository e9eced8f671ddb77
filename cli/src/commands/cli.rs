use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use todocap_core::api as core_api;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeArg {
    /// Bind the chosen project to ./config.toml
    Project,
    /// Bind the chosen project to the user-wide config
    Global,
}

impl From<ScopeArg> for core_api::Scope {
    fn from(value: ScopeArg) -> Self {
        match value {
            ScopeArg::Project => core_api::Scope::Project,
            ScopeArg::Global => core_api::Scope::Global,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "todocap",
    version,
    about = "Quick-capture tasks to a Todoist-style API from the terminal",
    arg_required_else_help = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ScopedArgs {
    #[arg(long, value_enum, default_value_t = ScopeArg::Project)]
    pub scope: ScopeArg,

    /// Use this project id directly, skipping config and the picker.
    #[arg(long)]
    pub project_id: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CaptureArgs {
    #[command(flatten)]
    pub scoped: ScopedArgs,

    /// Attach a deep link to this file in the task description.
    #[arg(long, requires = "line")]
    pub file: Option<PathBuf>,

    /// 1-based line number for --file.
    #[arg(long, requires = "file")]
    pub line: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Capture one line of text as a remote task (`Try @label and !!1-4`)
    Capture(CaptureArgs),
    /// Browse tasks in the bound project and toggle completion
    Tasks(ScopedArgs),
    /// Open the bound project in the companion app
    Open(ScopedArgs),
    /// Store or replace the API token
    Token,
}
