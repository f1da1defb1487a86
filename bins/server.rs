use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> std::process::ExitCode {
    dotenv().ok();
    let cfg = configs::AppConfig::load_and_validate();
    let log_format = cfg.as_ref().map(|c| c.logging.format.clone()).unwrap_or_else(|_| "compact".into());
    common::utils::logging::init_logging(&log_format);
    info!(service = "restaurant-platform", event = "logger_init", format = %log_format, "tracing subscriber initialized");

    let instance_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "restaurant-platform", event = "panic", %instance_id, pid, message = %info, "unhandled panic occurred");
    }));

    // config.toml first, then TOKIO_WORKER_THREADS
    let worker_threads = match &cfg {
        Ok(c) => c.server.worker_threads,
        Err(e) => {
            error!(event = "config_invalid", error = %e, "configuration rejected");
            return std::process::ExitCode::FAILURE;
        }
    }
    .or_else(|| std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "restaurant-platform",
        event = "start",
        %instance_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "server starting"
    );

    // server::run owns graceful shutdown on Ctrl+C
    rt.block_on(async move {
        match server::run().await {
            Ok(()) => {
                info!(event = "stop", %instance_id, pid, "server stopped");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(event = "run_failed", error = %e, "server exited with error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
