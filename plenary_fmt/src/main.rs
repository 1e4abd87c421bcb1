use plenary_fmt::config::{PlenaryFmtConfig, load_config};
use plenary_fmt::driver::{FormatOptions, run};

fn load_config_or_default() -> PlenaryFmtConfig {
    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    match load_config(&cwd) {
        Ok((config, path)) => {
            tracing::debug!(path = ?path, "config loaded");
            config
        }
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable config");
            PlenaryFmtConfig::default()
        }
    }
}

fn main() {
    plenary_fmt::logging::init_tracing();
    if let Err(err) = plenary_fmt::signals::exit_cleanly_on_interrupt() {
        tracing::warn!(error = %err, "could not install interrupt handler");
    }

    let config = load_config_or_default();
    let options = FormatOptions::resolve(&config);
    tracing::debug!(
        version = plenary_fmt::core_version(),
        columns = options.columns,
        color = options.color,
        stdout_tty = plenary_fmt::format::terminal::is_output_terminal(),
        "options resolved"
    );

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    match run(stdin, stdout, &options) {
        Ok(stats) => tracing::debug!(?stats, "done"),
        Err(err) if err.is_downstream_closed() => tracing::debug!("stdout closed early"),
        Err(err) => tracing::warn!(error = %err, "stopped early"),
    }
}
