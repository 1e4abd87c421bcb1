use std::io::IsTerminal;

use terminal_size::{Height, Width, terminal_size_of};

pub const DEFAULT_COLUMNS: usize = 120;

pub fn is_output_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Size of the terminal attached to stdout. Piped stdout reports nothing,
/// even when stderr is still a terminal.
pub fn detect_terminal_size_cols_rows() -> Option<(usize, usize)> {
    let stdout = std::io::stdout();
    if !stdout.is_terminal() {
        return None;
    }
    terminal_size_of(stdout)
        .map(|(Width(w), Height(h))| (usize::from(w), usize::from(h)))
        .filter(|(cols, _)| *cols > 0)
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
}

/// Precedence: forced width, `COLUMNS`, detected terminal, fallback.
pub fn resolve_columns_from(
    forced: Option<usize>,
    columns_env: Option<&str>,
    detected: Option<usize>,
    fallback: usize,
) -> usize {
    forced
        .filter(|n| *n > 0)
        .or_else(|| parse_positive(columns_env))
        .or(detected.filter(|n| *n > 0))
        .unwrap_or(fallback)
}

pub fn resolve_columns(forced: Option<usize>, fallback: usize) -> usize {
    let columns_env = std::env::var("COLUMNS").ok();
    resolve_columns_from(
        forced,
        columns_env.as_deref(),
        detect_terminal_size_cols_rows().map(|(cols, _)| cols),
        fallback,
    )
}

/// Decides whether the dim decoration is emitted. Unlike most CLIs this stays
/// on for piped output; only the usual opt-outs turn it off.
pub fn color_enabled_from(forced: Option<bool>, env: impl Fn(&str) -> Option<String>) -> bool {
    if let Some(forced) = forced {
        return forced;
    }

    let no_color = env("NO_COLOR").is_some_and(|value| !value.trim().is_empty());
    if no_color {
        return false;
    }

    let clicolor_disabled = env("CLICOLOR").is_some_and(|value| value.trim() == "0");
    if clicolor_disabled {
        return false;
    }

    let is_dumb_term = env("TERM").is_some_and(|value| value.trim() == "dumb");

    let force_color = match env("FORCE_COLOR").map(|s| s.trim().to_string()) {
        None => None,
        Some(force_value) if force_value.is_empty() => None,
        Some(force_value) if force_value == "0" => Some(false),
        Some(_) => Some(true),
    };

    if is_dumb_term && force_color != Some(true) {
        return false;
    }

    force_color.unwrap_or(true)
}

pub fn color_enabled(forced: Option<bool>) -> bool {
    color_enabled_from(forced, |key| std::env::var(key).ok())
}
