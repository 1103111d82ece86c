use log_tail::{Error, TailConfig, TailWaiter, WatchSubscription};
use std::env;
use std::process;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file_path>", args[0]);
        process::exit(1);
    }

    let file_path = &args[1];

    // LOG_TAIL_CONFIG may point at a TOML file with waiter settings.
    let config = match env::var("LOG_TAIL_CONFIG") {
        Ok(path) => match TailConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                error!(path = %path, error = %e, "failed to load config");
                process::exit(1);
            }
        },
        Err(_) => TailConfig::default(),
    };

    let waiter = match TailWaiter::new(config) {
        Ok(waiter) => waiter,
        Err(e) => {
            error!(error = %e, "invalid config");
            process::exit(1);
        }
    };

    let (mut subscription, file_name) = match WatchSubscription::watch_file_dir(file_path) {
        Ok(watch) => watch,
        Err(e) => {
            error!(error = %e, "error setting up file watcher");
            process::exit(1);
        }
    };

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        ctrl_c.cancel();
    });

    info!(
        file = %file_path,
        period_ms = waiter.config().force_check_period_ms,
        "waiting for log events"
    );
    loop {
        match waiter.wait(&cancel, &file_name, &mut subscription).await {
            Ok(outcome) => println!("{:?}", outcome),
            Err(Error::Cancelled) => break,
            Err(e) => {
                error!(error = %e, "stopped waiting for log events");
                process::exit(1);
            }
        }
    }
}
