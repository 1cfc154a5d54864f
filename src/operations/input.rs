//! `gum input`: single-line text prompt

use crate::cli::InputArgs;
use crate::prompt::{self, Prompt, Step, is_abort_key};
use crate::style::{Style, paint, parse_color};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{Attribute, ContentStyle};
use std::io::Write;

/// Editing state for `gum input`
#[derive(Debug, Clone)]
pub struct InputPrompt {
    value: Vec<char>,
    cursor: usize,
    /// Maximum length; 0 for unlimited
    char_limit: usize,
    prompt: String,
    prompt_style: Style,
    placeholder: String,
    password: bool,
}

impl InputPrompt {
    /// Create a prompt pre-filled with `value`, cursor at the end
    #[must_use]
    pub fn new(value: &str, char_limit: usize) -> Self {
        let mut chars: Vec<char> = value.chars().collect();
        if char_limit > 0 {
            chars.truncate(char_limit);
        }
        Self {
            cursor: chars.len(),
            value: chars,
            char_limit,
            prompt: "> ".to_owned(),
            prompt_style: Style::default(),
            placeholder: String::new(),
            password: false,
        }
    }

    /// Prompt text and its style (builder pattern)
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>, style: Style) -> Self {
        self.prompt = prompt.into();
        self.prompt_style = style;
        self
    }

    /// Placeholder shown while empty (builder pattern)
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Mask the value with '*' (builder pattern)
    #[must_use]
    pub const fn with_password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    /// Current value
    #[must_use]
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    fn insert(&mut self, c: char) {
        if self.char_limit > 0 && self.value.len() >= self.char_limit {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.value.remove(self.cursor);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    fn delete_to_start(&mut self) {
        self.value.drain(..self.cursor);
        self.cursor = 0;
    }

    /// Delete the word before the cursor, along with the spaces after it
    fn delete_word(&mut self) {
        let mut start = self.cursor;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        self.value.drain(start..self.cursor);
        self.cursor = start;
    }

    fn shown(&self) -> Vec<char> {
        if self.password {
            vec!['*'; self.value.len()]
        } else {
            self.value.clone()
        }
    }
}

impl Prompt for InputPrompt {
    type Output = String;

    fn view(&self) -> Vec<String> {
        let mut reverse = ContentStyle::new();
        reverse.attributes.set(Attribute::Reverse);
        let mut faint = ContentStyle::new();
        faint.attributes.set(Attribute::Dim);

        let prompt = self.prompt_style.render(&self.prompt);
        if self.value.is_empty() {
            let mut placeholder = self.placeholder.chars();
            let first = placeholder.next().map_or_else(|| " ".to_owned(), String::from);
            let rest: String = placeholder.collect();
            return vec![format!(
                "{prompt}{}{}",
                paint(&reverse, &first),
                paint(&faint, &rest)
            )];
        }

        let shown = self.shown();
        let before: String = shown[..self.cursor].iter().collect();
        let under = shown.get(self.cursor).map_or_else(|| " ".to_owned(), |c| c.to_string());
        let after: String = shown.get(self.cursor + 1..).unwrap_or_default().iter().collect();
        vec![format!("{prompt}{before}{}{after}", paint(&reverse, &under))]
    }

    fn handle_key(&mut self, key: KeyEvent) -> Step<Self::Output> {
        if is_abort_key(&key) {
            return Step::Abort;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => return Step::Submit(self.value()),
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = self.value.len(),
            KeyCode::Char('u') if ctrl => self.delete_to_start(),
            KeyCode::Char('w') if ctrl => self.delete_word(),
            KeyCode::Char('h') if ctrl => self.backspace(),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.value.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.len(),
            _ => {}
        }
        Step::Continue
    }
}

/// Run `gum input` and print the submitted value to `out`
pub fn execute_input<W: Write>(args: &InputArgs, out: &mut W) -> Result<()> {
    let prompt_style = Style::foreground(parse_color(&args.prompt_foreground)?);
    let prompt = InputPrompt::new(&args.value, args.char_limit)
        .with_prompt(args.prompt.clone(), prompt_style)
        .with_placeholder(args.placeholder.clone())
        .with_password(args.password);

    let value = prompt::run(prompt, args.timeout.duration())?;
    writeln!(out, "{value}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::test_keys::{ch, ctrl, key};

    fn type_text(prompt: &mut InputPrompt, text: &str) {
        for c in text.chars() {
            prompt.handle_key(ch(c));
        }
    }

    #[test]
    fn test_typing_and_submit() {
        let mut prompt = InputPrompt::new("", 0);
        type_text(&mut prompt, "hello");
        assert_eq!(
            prompt.handle_key(key(KeyCode::Enter)),
            Step::Submit("hello".to_owned())
        );
    }

    #[test]
    fn test_editing_in_the_middle() {
        let mut prompt = InputPrompt::new("helo", 0);
        prompt.handle_key(key(KeyCode::Left));
        prompt.handle_key(ch('l'));
        assert_eq!(prompt.value(), "hello");

        prompt.handle_key(key(KeyCode::Home));
        prompt.handle_key(key(KeyCode::Delete));
        assert_eq!(prompt.value(), "ello");

        prompt.handle_key(ctrl('e'));
        prompt.handle_key(key(KeyCode::Backspace));
        assert_eq!(prompt.value(), "ell");
    }

    #[test]
    fn test_char_limit() {
        let mut prompt = InputPrompt::new("abcdef", 3);
        assert_eq!(prompt.value(), "abc");
        type_text(&mut prompt, "xyz");
        assert_eq!(prompt.value(), "abc");
    }

    #[test]
    fn test_delete_word_and_line() {
        let mut prompt = InputPrompt::new("git commit  ", 0);
        prompt.handle_key(ctrl('w'));
        assert_eq!(prompt.value(), "git ");

        prompt.handle_key(ctrl('u'));
        assert_eq!(prompt.value(), "");
    }

    #[test]
    fn test_password_masks_view() {
        let prompt = InputPrompt::new("secret", 0).with_password(true);
        let view = prompt.view().join("");
        assert!(view.contains("******"));
        assert!(!view.contains("secret"));
    }

    #[test]
    fn test_abort() {
        let mut prompt = InputPrompt::new("draft", 0);
        assert_eq!(prompt.handle_key(ctrl('c')), Step::Abort);
        assert_eq!(prompt.handle_key(key(KeyCode::Esc)), Step::Abort);
    }
}
