//! Reading piped input

use std::io::{self, BufRead, IsTerminal as _, Read};

/// Read all of `reader`, dropping one trailing newline
pub fn read_text<R: Read>(mut reader: R) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Read non-empty lines from `reader`
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .collect()
}

/// Lines piped on stdin, or nothing when stdin is a terminal
pub fn piped_lines() -> io::Result<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }
    read_lines(stdin.lock())
}

/// Text piped on stdin, or an empty string when stdin is a terminal
pub fn piped_text() -> io::Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    read_text(stdin.lock())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn test_read_text_trims_one_newline() {
        assert_eq!(read_text("a\nb\n".as_bytes()).unwrap(), "a\nb");
        assert_eq!(read_text("a\r\n\n".as_bytes()).unwrap(), "a\r\n");
        assert_eq!(read_text("".as_bytes()).unwrap(), "");
    }

    #[test]
    fn test_read_lines_skips_blank_lines() {
        let lines = read_lines("one\n\n  \ntwo\n".as_bytes()).unwrap();
        assert_eq!(lines, vec!["one", "two"]);
    }
}
