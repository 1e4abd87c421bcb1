/// Widths here are `char` counts. Wide glyphs are counted as one column.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Greedy word wrap that keeps continuation lines aligned.
///
/// `text` comes back untouched when it already fits in `max_width`.
/// Otherwise words are packed left to right: leading whitespace of `text`
/// prefixes the first line, every later line starts with `indent_width`
/// spaces, and a word that cannot fit even on a fresh line is placed on its
/// own line as-is. Words are never split.
pub fn wrap_with_indent(text: &str, indent_width: usize, max_width: usize) -> Vec<String> {
    if char_len(text) <= max_width {
        return vec![text.to_string()];
    }

    let body = text.trim_start();
    let initial_indent = &text[..text.len() - body.len()];
    let words = body.split_whitespace().collect::<Vec<_>>();
    if words.is_empty() {
        return vec![text.to_string()];
    }

    let indent = " ".repeat(indent_width);
    let mut lines: Vec<String> = vec![];
    let mut current = initial_indent.to_string();
    let mut current_len = char_len(initial_indent);

    for (index, word) in words.iter().enumerate() {
        let word_len = char_len(word);
        let separator = usize::from(index > 0);
        let candidate_len = current_len + separator + word_len;

        if candidate_len <= max_width {
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_len = candidate_len;
            continue;
        }

        if !current.trim().is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        current = format!("{indent}{word}");
        current_len = indent_width + word_len;
    }

    if !current.trim().is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        vec![text.to_string()]
    } else {
        lines
    }
}
