/// Greedy word wrap to `width` columns (counted in chars).
///
/// Words never split across lines unless a single word is wider than
/// the column, in which case it is hard-broken. Empty input and zero
/// width both produce no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            for chunk in chunk_chars(word, width) {
                if chunk.chars().count() == width {
                    lines.push(chunk);
                } else {
                    current_len = chunk.chars().count();
                    current = chunk;
                }
            }
            continue;
        }

        let needed = if current.is_empty() { word_len } else { word_len + 1 };
        if current_len + needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
            current.push_str(word);
            current_len += word_len;
        } else {
            if !current.is_empty() {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn chunk_chars(word: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}
