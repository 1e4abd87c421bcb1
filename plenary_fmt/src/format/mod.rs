pub mod ansi;
pub mod classify;
pub mod status_line;
pub mod terminal;
pub mod wrap;
