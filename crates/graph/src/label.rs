/// Default character budget per label line
pub const DEFAULT_LABEL_MAX_CHARS: usize = 15;

/// Insert line breaks so that no line exceeds `max_chars` characters,
/// except a single word that is longer than the budget on its own.
///
/// Words are packed greedily; the first word always stays on the first line.
pub fn wrap_label(text: &str, max_chars: usize) -> String {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return text.to_string();
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current = first.to_string();
    let mut current_len = first.chars().count();

    for word in words {
        let word_len = word.chars().count();
        if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    lines.push(current);
    lines.join("\n")
}
