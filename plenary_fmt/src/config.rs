use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::FormatError;
use crate::format::classify::SectionHeuristics;
use crate::format::terminal::DEFAULT_COLUMNS;

pub const CONFIG_PATH_ENV: &str = "PLENARY_FMT_CONFIG";

/// On-disk configuration. Every key is optional; missing keys keep the
/// built-in heuristics tuned for plenary's busted-style output.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlenaryFmtConfig {
    pub lookahead_window: Option<usize>,
    pub divider_min_len: Option<usize>,
    pub header_prefix: Option<String>,
    pub indicators: Option<Vec<String>>,
    pub noise_markers: Option<Vec<String>>,
    pub default_columns: Option<usize>,
    pub columns: Option<usize>,
    pub color: Option<bool>,
}

impl PlenaryFmtConfig {
    pub fn heuristics(&self) -> SectionHeuristics {
        let defaults = SectionHeuristics::default();
        SectionHeuristics {
            lookahead_window: self.lookahead_window.unwrap_or(defaults.lookahead_window),
            divider_min_len: self
                .divider_min_len
                .filter(|n| *n > 0)
                .unwrap_or(defaults.divider_min_len),
            header_prefix: self
                .header_prefix
                .clone()
                .unwrap_or(defaults.header_prefix),
            indicators: self.indicators.clone().unwrap_or(defaults.indicators),
            noise_markers: self
                .noise_markers
                .as_ref()
                .map(|markers| markers.iter().map(|m| m.to_lowercase()).collect())
                .unwrap_or(defaults.noise_markers),
        }
    }

    pub fn fallback_columns(&self) -> usize {
        self.default_columns
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_COLUMNS)
    }
}

pub fn find_repo_root(start: &Path) -> PathBuf {
    git2::Repository::discover(start)
        .ok()
        .and_then(|repo| repo.workdir().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| start.to_path_buf())
}

pub fn discover_config_path(repo_root: &Path) -> Option<PathBuf> {
    let names = [
        "plenary-fmt.toml",
        "plenary-fmt.config.json",
        "plenary-fmt.config.json5",
        "plenary-fmt.config.yaml",
        "plenary-fmt.config.yml",
        ".plenary-fmtrc.json",
        ".plenary-fmtrc.yaml",
    ];
    names
        .into_iter()
        .map(|name| repo_root.join(name))
        .find(|p| p.is_file())
}

/// Explicit `PLENARY_FMT_CONFIG` first, then discovery under the repo root.
pub fn resolve_config_path(cwd: &Path) -> Option<PathBuf> {
    std::env::var(CONFIG_PATH_ENV)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(|| discover_config_path(&find_repo_root(cwd)))
}

pub fn load_config_from_path(path: &Path) -> Result<PlenaryFmtConfig, FormatError> {
    let ext = path
        .extension()
        .and_then(|x| x.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let raw = std::fs::read_to_string(path).map_err(|source| FormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_error = |message: String| FormatError::ConfigParse {
        path: path.to_path_buf(),
        message,
    };

    match ext.as_str() {
        "toml" => {
            toml::from_str::<PlenaryFmtConfig>(&raw).map_err(|err| parse_error(err.to_string()))
        }
        "yaml" | "yml" => serde_yaml::from_str::<PlenaryFmtConfig>(&raw)
            .map_err(|err| parse_error(err.to_string())),
        _ => json5::from_str::<PlenaryFmtConfig>(&raw)
            .or_else(|_| serde_json::from_str::<PlenaryFmtConfig>(&raw))
            .map_err(|err| parse_error(err.to_string())),
    }
}

/// Loads the effective config; returns the path it came from, if any.
pub fn load_config(cwd: &Path) -> Result<(PlenaryFmtConfig, Option<PathBuf>), FormatError> {
    match resolve_config_path(cwd) {
        Some(path) => load_config_from_path(&path).map(|cfg| (cfg, Some(path))),
        None => Ok((PlenaryFmtConfig::default(), None)),
    }
}
