use std::sync::Once;

pub const LOG_FILTER_ENV: &str = "PLENARY_FMT_LOG";

static TRACING_INIT: Once = Once::new();

/// Installs a stderr subscriber, but only when `PLENARY_FMT_LOG` is set
/// (e.g. `PLENARY_FMT_LOG=plenary_fmt=trace`). Without it nothing is
/// registered and tracing calls are no-ops.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let Ok(filter) = EnvFilter::try_from_env(LOG_FILTER_ENV) else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
