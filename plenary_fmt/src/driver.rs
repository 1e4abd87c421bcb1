use std::io::{BufRead, Read, Write};

use crate::config::PlenaryFmtConfig;
use crate::error::FormatError;
use crate::format::ansi;
use crate::format::classify::SectionHeuristics;
use crate::format::status_line::StatusLine;
use crate::format::terminal;

/// Everything the driver needs, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub columns: usize,
    pub color: bool,
    pub heuristics: SectionHeuristics,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            columns: terminal::DEFAULT_COLUMNS,
            color: true,
            heuristics: SectionHeuristics::default(),
        }
    }
}

impl FormatOptions {
    pub fn with_columns(columns: usize) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Queries the terminal and the environment once.
    pub fn resolve(config: &PlenaryFmtConfig) -> Self {
        Self {
            columns: terminal::resolve_columns(config.columns, config.fallback_columns()),
            color: terminal::color_enabled(config.color),
            heuristics: config.heuristics(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatStats {
    pub lines_in: usize,
    pub lines_out: usize,
    pub sections_dimmed: usize,
    pub lines_wrapped: usize,
}

/// Splits raw input into lines, dropping only the `\n` terminator.
pub fn split_input_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n')
        .map(|line| line.strip_suffix('\n').unwrap_or(line).to_string())
        .collect()
}

/// Walks `lines` once and hands each output line to `emit` as soon as it is
/// decided. Stops at the first `emit` error.
pub fn format_lines<E>(
    lines: &[String],
    options: &FormatOptions,
    mut emit: impl FnMut(&str) -> Result<(), E>,
) -> Result<FormatStats, E> {
    let heuristics = &options.heuristics;
    let mut stats = FormatStats {
        lines_in: lines.len(),
        ..FormatStats::default()
    };
    let mut out = |line: &str, stats: &mut FormatStats| -> Result<(), E> {
        emit(line)?;
        stats.lines_out += 1;
        Ok(())
    };

    let mut i = 0usize;
    while i < lines.len() {
        let line = lines[i].as_str();

        if heuristics.is_divider(line)
            && let Some(header) = lines.get(i + 1)
            && heuristics.is_section_header(header)
            && heuristics.is_empty_section(lines, i + 2)
        {
            tracing::trace!(header = header.trim(), "dimming empty section");
            out(&ansi::dim_gray_if(line, options.color), &mut stats)?;
            out(&ansi::dim_gray_if(header, options.color), &mut stats)?;
            stats.sections_dimmed += 1;
            i += 2;
            continue;
        }

        if let Some(wrapped) = StatusLine::parse(line).and_then(|s| s.wrap_to(options.columns)) {
            tracing::trace!(line = i, parts = wrapped.len(), "wrapping status line");
            for part in &wrapped {
                out(part, &mut stats)?;
            }
            stats.lines_wrapped += 1;
            i += 1;
            continue;
        }

        out(line, &mut stats)?;
        i += 1;
    }

    Ok(stats)
}

/// Convenience for callers that want the whole result in memory.
pub fn format_to_vec(lines: &[String], options: &FormatOptions) -> Vec<String> {
    let mut out: Vec<String> = vec![];
    let result: Result<FormatStats, std::convert::Infallible> =
        format_lines(lines, options, |line| {
            out.push(line.to_string());
            Ok(())
        });
    match result {
        Ok(_) => out,
        Err(never) => match never {},
    }
}

pub fn format_text(text: &str, options: &FormatOptions) -> String {
    format_to_vec(&split_input_lines(text), options)
        .into_iter()
        .map(|line| line + "\n")
        .collect()
}

/// Reads all of `reader`, then writes the reformatted lines to `writer`, one
/// whole line per write.
pub fn run(
    mut reader: impl BufRead,
    mut writer: impl Write,
    options: &FormatOptions,
) -> Result<FormatStats, FormatError> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw).map_err(FormatError::Read)?;
    let text = String::from_utf8_lossy(&raw);
    let lines = split_input_lines(&text);
    tracing::debug!(lines = lines.len(), "input read");

    let stats = format_lines(&lines, options, |line| {
        let mut record = String::with_capacity(line.len() + 1);
        record.push_str(line);
        record.push('\n');
        writer.write_all(record.as_bytes())
    })
    .map_err(FormatError::Write)?;
    writer.flush().map_err(FormatError::Write)?;
    Ok(stats)
}
