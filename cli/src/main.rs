use clap::Parser;
mod commands;
mod flow;
mod ui;
use commands::cli;
use std::path::Path;
use todocap_core::api as core_api;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, core_api::CliError> {
    let args = cli::Args::parse();
    let cfg = core_api::load_default().map_err(|e| core_api::CliError::Config(e.to_string()))?;
    let data_dir =
        core_api::get_data_dir().map_err(|e| core_api::CliError::Config(e.to_string()))?;
    init_tracing(&cfg.logging, &data_dir).map_err(core_api::CliError::Command)?;

    let ctx = core_api::AppContext::new(cfg, data_dir);
    let interact = ui::TermInteract::new();

    dispatch(args.command, &ctx, &interact).await
}

fn exit_code_for_error(e: &core_api::CliError) -> i32 {
    // 0: success (silent aborts included)
    // 11: config error
    // 20: command / IO error
    // 50: internal/uncategorized
    match e {
        core_api::CliError::Config(_) => 11,
        core_api::CliError::Command(_) => 20,
        core_api::CliError::Io(_) => 20,
        core_api::CliError::Anyhow(_) => 50,
    }
}

async fn dispatch(
    cmd: cli::Commands,
    ctx: &core_api::AppContext,
    interact: &ui::TermInteract,
) -> Result<i32, core_api::CliError> {
    match cmd {
        cli::Commands::Capture(capture_args) => flow::capture::run(ctx, interact, &capture_args).await,
        cli::Commands::Tasks(scoped_args) => flow::tasks::run(ctx, interact, &scoped_args).await,
        cli::Commands::Open(scoped_args) => flow::open::run(ctx, interact, &scoped_args).await,
        cli::Commands::Token => flow::token::run(ctx, interact).await,
    }
}

fn init_tracing(logging: &core_api::LoggingConfig, data_dir: &Path) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if logging.file {
        let dir = match logging
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(d) => std::path::PathBuf::from(d),
            None => data_dir.join("logs"),
        };

        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let file_name = format!("todocap.{}.log", std::process::id());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
