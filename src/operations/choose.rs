//! `gum choose`: pick one or more options from a list

use crate::cli::ChooseArgs;
use crate::error::GumError;
use crate::prompt::{self, Prompt, Step, is_abort_key};
use crate::style::{Style, accent, display_width, parse_color};
use crate::utils::stdin::piped_lines;
use anyhow::{Context as _, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io::Write;
use tracing::debug;

const SELECTED_PREFIX: &str = "✓ ";
const UNSELECTED_PREFIX: &str = "• ";

/// Selection state for `gum choose`
#[derive(Debug, Clone)]
pub struct ChoosePrompt {
    options: Vec<String>,
    selected: Vec<bool>,
    cursor: usize,
    /// Maximum number of picks; `None` for unlimited
    limit: Option<usize>,
    height: usize,
    offset: usize,
    header: String,
    cursor_prefix: String,
    cursor_style: Style,
}

impl ChoosePrompt {
    /// Build a prompt over `options`
    ///
    /// Options listed in `preselected` start selected; in single-pick mode the
    /// cursor starts on the first of them instead.
    pub fn new(
        options: Vec<String>,
        preselected: &[String],
        limit: Option<usize>,
    ) -> Result<Self, GumError> {
        if options.is_empty() {
            return Err(GumError::invalid_argument("no options provided"));
        }
        if limit == Some(0) {
            return Err(GumError::invalid_argument("--limit must be at least 1"));
        }

        let mut prompt = Self {
            selected: vec![false; options.len()],
            options,
            cursor: 0,
            limit,
            height: 10,
            offset: 0,
            header: String::new(),
            cursor_prefix: "> ".to_owned(),
            cursor_style: Style::default(),
        };

        let picks: Vec<usize> = preselected
            .iter()
            .filter_map(|wanted| prompt.options.iter().position(|o| o == wanted))
            .collect();
        if prompt.is_multi() {
            for index in picks {
                if prompt.can_select_more() {
                    prompt.selected[index] = true;
                }
            }
        } else if let Some(&first) = picks.first() {
            prompt.cursor = first;
        }
        prompt.scroll_to_cursor();
        Ok(prompt)
    }

    /// Number of visible rows (builder pattern)
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height.max(1);
        self.scroll_to_cursor();
        self
    }

    /// Header shown above the options (builder pattern)
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Cursor prefix and its style (builder pattern)
    #[must_use]
    pub fn with_cursor(mut self, prefix: impl Into<String>, style: Style) -> Self {
        self.cursor_prefix = prefix.into();
        self.cursor_style = style;
        self
    }

    const fn is_multi(&self) -> bool {
        !matches!(self.limit, Some(1))
    }

    fn selected_count(&self) -> usize {
        self.selected.iter().filter(|s| **s).count()
    }

    fn can_select_more(&self) -> bool {
        self.limit.is_none_or(|limit| self.selected_count() < limit)
    }

    fn scroll_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.height {
            self.offset = self.cursor + 1 - self.height;
        }
    }

    fn move_cursor(&mut self, up: bool) {
        let last = self.options.len() - 1;
        self.cursor = match (up, self.cursor) {
            (true, 0) => last,
            (true, n) => n - 1,
            (false, n) if n == last => 0,
            (false, n) => n + 1,
        };
        self.scroll_to_cursor();
    }

    fn toggle(&mut self) {
        let index = self.cursor;
        if self.selected[index] {
            self.selected[index] = false;
        } else if self.can_select_more() {
            self.selected[index] = true;
        }
    }

    fn submit(&self) -> Vec<String> {
        if !self.is_multi() || self.selected_count() == 0 {
            return vec![self.options[self.cursor].clone()];
        }
        self.options
            .iter()
            .zip(&self.selected)
            .filter(|(_, picked)| **picked)
            .map(|(option, _)| option.clone())
            .collect()
    }
}

impl Prompt for ChoosePrompt {
    type Output = Vec<String>;

    fn view(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.height + 1);
        if !self.header.is_empty() {
            lines.push(self.header.clone());
        }

        let blank = " ".repeat(display_width(&self.cursor_prefix));
        let end = (self.offset + self.height).min(self.options.len());
        for index in self.offset..end {
            let prefix = if index == self.cursor {
                self.cursor_style.render(&self.cursor_prefix)
            } else {
                blank.clone()
            };
            let mark = match (self.is_multi(), self.selected[index]) {
                (false, _) => String::new(),
                (true, true) => accent(SELECTED_PREFIX),
                (true, false) => UNSELECTED_PREFIX.to_owned(),
            };
            lines.push(format!("{prefix}{mark}{}", self.options[index]));
        }
        lines
    }

    fn handle_key(&mut self, key: KeyEvent) -> Step<Self::Output> {
        if is_abort_key(&key) {
            return Step::Abort;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(true),
            KeyCode::Char('p') if ctrl => self.move_cursor(true),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(false),
            KeyCode::Char('n') if ctrl => self.move_cursor(false),
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor = 0;
                self.scroll_to_cursor();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor = self.options.len() - 1;
                self.scroll_to_cursor();
            }
            KeyCode::Char('a') if ctrl && self.is_multi() => {
                for index in 0..self.options.len() {
                    if !self.selected[index] && self.can_select_more() {
                        self.selected[index] = true;
                    }
                }
            }
            KeyCode::Char(' ' | 'x') | KeyCode::Tab if self.is_multi() => self.toggle(),
            KeyCode::Enter => return Step::Submit(self.submit()),
            _ => {}
        }
        Step::Continue
    }
}

/// Run `gum choose` and print each pick to `out` on its own line
pub fn execute_choose<W: Write>(args: &ChooseArgs, out: &mut W) -> Result<()> {
    let options = if args.options.is_empty() {
        piped_lines().context("Failed to read options from stdin")?
    } else {
        args.options.clone()
    };
    let limit = if args.no_limit { None } else { Some(args.limit) };
    let cursor_style = Style::foreground(parse_color(&args.cursor_foreground)?);

    let prompt = ChoosePrompt::new(options, &args.selected, limit)?
        .with_height(args.height)
        .with_header(args.header.clone())
        .with_cursor(args.cursor.clone(), cursor_style);

    let picks = prompt::run(prompt, args.timeout.duration())?;
    debug!(count = picks.len(), "options chosen");
    for pick in picks {
        writeln!(out, "{pick}")?;
    }
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::prompt::test_keys::{ch, ctrl, key};

    fn options(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    #[test]
    fn test_single_pick_submits_cursor() {
        let mut prompt = ChoosePrompt::new(options(&["a", "b", "c"]), &[], Some(1)).unwrap();
        assert_eq!(prompt.handle_key(key(KeyCode::Down)), Step::Continue);
        assert_eq!(prompt.handle_key(ch('j')), Step::Continue);
        assert_eq!(
            prompt.handle_key(key(KeyCode::Enter)),
            Step::Submit(vec!["c".to_owned()])
        );
    }

    #[test]
    fn test_cursor_wraps_around() {
        let mut prompt = ChoosePrompt::new(options(&["a", "b"]), &[], Some(1)).unwrap();
        prompt.handle_key(key(KeyCode::Up));
        assert_eq!(
            prompt.handle_key(key(KeyCode::Enter)),
            Step::Submit(vec!["b".to_owned()])
        );
    }

    #[test]
    fn test_preselected_moves_cursor_in_single_mode() {
        let mut prompt =
            ChoosePrompt::new(options(&["a", "b", "c"]), &options(&["b"]), Some(1)).unwrap();
        assert_eq!(
            prompt.handle_key(key(KeyCode::Enter)),
            Step::Submit(vec!["b".to_owned()])
        );
    }

    #[test]
    fn test_multi_pick_respects_limit() {
        let mut prompt = ChoosePrompt::new(options(&["a", "b", "c"]), &[], Some(2)).unwrap();
        prompt.handle_key(ch(' '));
        prompt.handle_key(key(KeyCode::Down));
        prompt.handle_key(ch('x'));
        prompt.handle_key(key(KeyCode::Down));
        prompt.handle_key(ch(' '));
        assert_eq!(
            prompt.handle_key(key(KeyCode::Enter)),
            Step::Submit(options(&["a", "b"]))
        );
    }

    #[test]
    fn test_select_all_without_limit() {
        let mut prompt = ChoosePrompt::new(options(&["a", "b", "c"]), &[], None).unwrap();
        prompt.handle_key(ctrl('a'));
        assert_eq!(
            prompt.handle_key(key(KeyCode::Enter)),
            Step::Submit(options(&["a", "b", "c"]))
        );
    }

    #[test]
    fn test_abort_keys_abort() {
        let mut prompt = ChoosePrompt::new(options(&["a"]), &[], Some(1)).unwrap();
        assert_eq!(prompt.handle_key(key(KeyCode::Esc)), Step::Abort);
        assert_eq!(prompt.handle_key(ctrl('c')), Step::Abort);
    }

    #[test]
    fn test_view_scrolls_with_cursor() {
        let mut prompt = ChoosePrompt::new(options(&["a", "b", "c", "d"]), &[], Some(1))
            .unwrap()
            .with_height(2);
        assert_eq!(prompt.view(), vec!["> a", "  b"]);
        prompt.handle_key(key(KeyCode::End));
        assert_eq!(prompt.view(), vec!["  c", "> d"]);
    }

    #[test]
    fn test_wide_cursor_prefix_blank_matches_columns() {
        let prompt = ChoosePrompt::new(options(&["a", "b"]), &[], Some(1))
            .unwrap()
            .with_cursor("👉", Style::default());
        assert_eq!(prompt.view(), vec!["👉a", "  b"]);
    }

    #[test]
    fn test_empty_options_rejected() {
        assert!(ChoosePrompt::new(Vec::new(), &[], Some(1)).is_err());
        assert!(ChoosePrompt::new(options(&["a"]), &[], Some(0)).is_err());
    }
}
