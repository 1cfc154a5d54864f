//! Escape sequence handling for already-styled input

/// Remove ANSI escape sequences (CSI such as SGR colors, and OSC) from `s`
#[must_use]
pub fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    // Parameters run until the final byte, a letter.
                    for c in chars.by_ref() {
                        if c.is_ascii_alphabetic() {
                            break;
                        }
                    }
                    continue;
                }
                Some(']') => {
                    chars.next();
                    // Terminated by BEL or ST (ESC \)
                    while let Some(c) = chars.next() {
                        if c == '\x07' {
                            break;
                        }
                        if c == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                    continue;
                }
                _ => {}
            }
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_sgr_sequences() {
        assert_eq!(strip_ansi_codes("\u{1b}[1;38;5;212mpink\u{1b}[0m"), "pink");
    }

    #[test]
    fn test_strips_osc_sequences() {
        assert_eq!(strip_ansi_codes("\u{1b}]0;title\u{7}text"), "text");
        assert_eq!(strip_ansi_codes("\u{1b}]8;;url\u{1b}\\link"), "link");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(strip_ansi_codes("日本 abc"), "日本 abc");
    }
}
