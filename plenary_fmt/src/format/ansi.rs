const GRAY: &str = "\u{1b}[90m";
const RESET: &str = "\u{1b}[0m";

/// Gray foreground followed by a full reset, used to de-emphasize a line.
pub fn dim_gray(text: &str) -> String {
    format!("{GRAY}{text}{RESET}")
}

pub fn dim_gray_if(text: &str, enabled: bool) -> String {
    if enabled {
        dim_gray(text)
    } else {
        text.to_string()
    }
}
