//! `gum confirm`: yes/no question answered through the exit status

use crate::cli::ConfirmArgs;
use crate::error::GumError;
use crate::prompt::{self, Prompt, Step, is_abort_key};
use crate::style::{Spacing, Style, parse_color};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use crossterm::style::Color;
use tracing::debug;

/// Answer state for `gum confirm`
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    question: String,
    affirmative: String,
    negative: String,
    choice: bool,
    selected: Style,
    unselected: Style,
}

impl ConfirmPrompt {
    #[must_use]
    pub fn new(question: impl Into<String>, default: bool) -> Self {
        let button = |background| Style {
            foreground: Some(Color::AnsiValue(254)),
            background: Some(background),
            padding: Spacing {
                top: 0,
                right: 2,
                bottom: 0,
                left: 2,
            },
            margin: Spacing {
                top: 0,
                right: 1,
                bottom: 0,
                left: 0,
            },
            ..Style::default()
        };
        Self {
            question: question.into(),
            affirmative: "Yes".to_owned(),
            negative: "No".to_owned(),
            choice: default,
            selected: button(Color::AnsiValue(212)),
            unselected: button(Color::AnsiValue(235)),
        }
    }

    /// Button labels (builder pattern)
    #[must_use]
    pub fn with_labels(mut self, affirmative: impl Into<String>, negative: impl Into<String>) -> Self {
        self.affirmative = affirmative.into();
        self.negative = negative.into();
        self
    }

    /// Background of the highlighted button (builder pattern)
    #[must_use]
    pub fn with_selected_background(mut self, background: Option<Color>) -> Self {
        self.selected.background = background;
        self
    }

    fn button(&self, label: &str, highlighted: bool) -> String {
        let style = if highlighted {
            &self.selected
        } else {
            &self.unselected
        };
        style.render(label)
    }
}

impl Prompt for ConfirmPrompt {
    type Output = bool;

    fn view(&self) -> Vec<String> {
        vec![
            self.question.clone(),
            String::new(),
            format!(
                "{}{}",
                self.button(&self.affirmative, self.choice),
                self.button(&self.negative, !self.choice)
            ),
        ]
    }

    fn handle_key(&mut self, key: KeyEvent) -> Step<Self::Output> {
        if is_abort_key(&key) {
            return Step::Abort;
        }
        match key.code {
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('h' | 'l') => self.choice = !self.choice,
            KeyCode::Char('y' | 'Y') => return Step::Submit(true),
            KeyCode::Char('n' | 'N') => return Step::Submit(false),
            KeyCode::Enter => return Step::Submit(self.choice),
            _ => {}
        }
        Step::Continue
    }
}

/// Run `gum confirm`; a negative answer becomes [`GumError::Declined`]
pub fn execute_confirm(args: &ConfirmArgs) -> Result<()> {
    let prompt = ConfirmPrompt::new(args.prompt.clone(), args.default)
        .with_labels(args.affirmative.clone(), args.negative.clone())
        .with_selected_background(parse_color(&args.selected_background)?);

    let confirmed = prompt::run(prompt, args.timeout.duration())?;
    debug!(confirmed, "confirmation answered");
    if confirmed {
        Ok(())
    } else {
        Err(GumError::Declined.into())
    }
}
