use unicode_width::UnicodeWidthStr;

/// Word-wrap text to the given display width.
///
/// Paragraph breaks (blank lines) are preserved. Words wider than the
/// width are split at character boundaries rather than overflowing.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut out = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            out.push(String::new());
            continue;
        }
        wrap_line(line, width, &mut out);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_w = 0;

    for word in line.split_whitespace() {
        let word_w = word.width();
        let sep_w = if current.is_empty() { 0 } else { 1 };

        if current_w + sep_w + word_w <= width {
            if sep_w == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_w += sep_w + word_w;
            continue;
        }

        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
            current_w = 0;
        }

        if word_w <= width {
            current.push_str(word);
            current_w = word_w;
        } else {
            // Break an overlong word at character boundaries
            for ch in word.chars() {
                let ch_w = UnicodeWidthStr::width(ch.to_string().as_str());
                if current_w + ch_w > width && !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                    current_w = 0;
                }
                current.push(ch);
                current_w += ch_w;
            }
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
}

/// Truncate a string to the given display width, appending an ellipsis
/// if anything was cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut w = 0;
    for ch in text.chars() {
        let ch_w = UnicodeWidthStr::width(ch.to_string().as_str());
        if w + ch_w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        w += ch_w;
    }
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_simple() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_preserves_paragraphs() {
        let lines = wrap_text("one two\n\nthree", 20);
        assert_eq!(lines, vec!["one two", "", "three"]);
    }

    #[test]
    fn test_wrap_overlong_word() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate_to_width("short", 10), "short");
    }

    #[test]
    fn test_truncate_cuts_with_ellipsis() {
        assert_eq!(truncate_to_width("a longer string", 8), "a longe\u{2026}");
    }
}
