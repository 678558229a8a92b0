#[cfg(feature = "debug-tracing")]
use std::sync::Mutex;

#[cfg(feature = "debug-tracing")]
use tracing_appender::non_blocking::WorkerGuard;
#[cfg(feature = "debug-tracing")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "debug-tracing")]
static TRACING_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

#[cfg(feature = "debug-tracing")]
pub fn init_tracing() {
    let file_appender = tracing_appender::rolling::daily("./logs", "hebrew-switcher.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hebrew_switcher=debug,hebrew_switcher_core=debug"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_thread_names(true);

    if subscriber.try_init().is_ok() {
        if let Ok(mut slot) = TRACING_GUARD.lock() {
            *slot = Some(guard);
        }
        tracing::info!("tracing initialized");
    }
}

#[cfg(not(feature = "debug-tracing"))]
pub fn init_tracing() {}
