//! Decides whether a `Testing:` section produced any result lines.
//!
//! Plenary prints a divider and a `Testing: <file>` header for every spec
//! file it loads, including files that register no tests. Those headers are
//! noise; this module spots them by peeking a bounded number of lines ahead.

pub const DEFAULT_LOOKAHEAD_WINDOW: usize = 15;
pub const DEFAULT_DIVIDER_MIN_LEN: usize = 10;
pub const DEFAULT_HEADER_PREFIX: &str = "Testing:";

pub const DEFAULT_INDICATORS: [&str; 12] = [
    "✓", "✗", "Success", "Failure", "passed", "failed", "it(", "describe(", "PASS", "FAIL", "Error",
    "pending",
];

pub const DEFAULT_NOISE_MARKERS: [&str; 1] = ["initialized"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeuristics {
    pub lookahead_window: usize,
    pub divider_min_len: usize,
    pub header_prefix: String,
    pub indicators: Vec<String>,
    /// Stored lowercase; matched against the lowercased line.
    pub noise_markers: Vec<String>,
}

impl Default for SectionHeuristics {
    fn default() -> Self {
        Self {
            lookahead_window: DEFAULT_LOOKAHEAD_WINDOW,
            divider_min_len: DEFAULT_DIVIDER_MIN_LEN,
            header_prefix: DEFAULT_HEADER_PREFIX.to_string(),
            indicators: DEFAULT_INDICATORS.iter().map(|s| s.to_string()).collect(),
            noise_markers: DEFAULT_NOISE_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SectionHeuristics {
    /// A divider is a line whose trimmed text opens with a run of at least
    /// `divider_min_len` `=` characters.
    pub fn is_divider(&self, line: &str) -> bool {
        line.trim().chars().take_while(|c| *c == '=').count() >= self.divider_min_len
    }

    pub fn is_section_header(&self, line: &str) -> bool {
        line.trim().starts_with(self.header_prefix.as_str())
    }

    fn is_noise(&self, trimmed: &str) -> bool {
        if trimmed.is_empty() {
            return true;
        }
        let lowered = trimmed.to_lowercase();
        self.noise_markers
            .iter()
            .any(|marker| lowered.contains(marker.as_str()))
    }

    fn has_result_indicator(&self, trimmed: &str) -> bool {
        self.indicators
            .iter()
            .any(|indicator| trimmed.contains(indicator.as_str()))
    }

    /// Scans at most `lookahead_window` lines from `start_index`.
    ///
    /// Content past the window is never seen, so a section whose first
    /// `lookahead_window` lines are all blank or init notices reads as empty.
    pub fn is_empty_section(&self, lines: &[String], start_index: usize) -> bool {
        let end = start_index
            .saturating_add(self.lookahead_window)
            .min(lines.len());
        let mut content_lines = 0usize;

        for (index, line) in lines.iter().enumerate().take(end).skip(start_index) {
            let trimmed = line.trim();
            if self.is_noise(trimmed) {
                continue;
            }
            if index > start_index && self.is_divider(trimmed) {
                return content_lines == 0;
            }
            if self.has_result_indicator(trimmed) {
                return false;
            }
            content_lines += 1;
        }

        content_lines == 0
    }
}

pub fn is_empty_section(lines: &[String], start_index: usize) -> bool {
    SectionHeuristics::default().is_empty_section(lines, start_index)
}
