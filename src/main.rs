use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use coinvest_lib::bootstrap::{
    apply_env_overrides, resolve_config, tracing::init_tracing_subscriber, wire_dependencies,
};
use coinvest_lib::commands::{run, Cli};
use cv_app::app_paths::AppPaths;
use cv_app::ApiSettings;
use cv_core::ports::AppDirsPort;
use cv_infra::DirsAppDirsAdapter;

#[tokio::main]
async fn main() -> ExitCode {
    match real_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn real_main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve the application data directory")?;
    let paths = AppPaths::from_app_dirs(&app_dirs);

    let config = apply_env_overrides(resolve_config(cli.config.clone(), &paths.config_path)?);

    let log_dir = if config.log_dir.as_os_str().is_empty() {
        paths.logs_dir.clone()
    } else {
        config.log_dir.clone()
    };
    init_tracing_subscriber(&log_dir, cli.verbose).context("Failed to initialize tracing")?;

    let settings = ApiSettings::from_config(&config, &paths)?;
    let deps = wire_dependencies(settings)?;

    run(cli.command, deps).await
}
