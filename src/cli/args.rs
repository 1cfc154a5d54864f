use crate::cli::defaults::{
    DEFAULT_ACCENT, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, DEFAULT_MARGIN, DEFAULT_PADDING,
    DEFAULT_UNDERLINE,
};
use crate::error::GumError;
use crate::style::{Align, Spacing, Style, parse_color};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

/// Command-line arguments for gum
#[derive(Parser, Debug, Clone)]
#[command(name = "gum")]
#[command(about = "A tool for glamorous shell scripts.")]
#[command(long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Sub-commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Choose an option from a list of choices
    Choose(ChooseArgs),

    /// Ask a user to confirm an action
    Confirm(ConfirmArgs),

    /// Prompt for some input
    Input(InputArgs),

    /// Apply coloring, spacing and alignment to text
    Style(StyleCommandArgs),
}

/// Styling flags shared by `gum style`
#[derive(Args, Debug, Clone)]
pub struct StyleArgs {
    /// Foreground color (0-255 or #RRGGBB)
    #[arg(long, env = "FOREGROUND", value_name = "COLOR", default_value = DEFAULT_FOREGROUND)]
    pub foreground: String,

    /// Background color (0-255 or #RRGGBB)
    #[arg(long, env = "BACKGROUND", value_name = "COLOR", default_value = DEFAULT_BACKGROUND)]
    pub background: String,

    /// Space outside the text: 1 to 4 values in CSS order
    #[arg(long, env = "MARGIN", value_name = "SPACING", default_value = DEFAULT_MARGIN)]
    pub margin: Spacing,

    /// Space inside the background: 1 to 4 values in CSS order
    #[arg(long, env = "PADDING", value_name = "SPACING", default_value = DEFAULT_PADDING)]
    pub padding: Spacing,

    /// Underline text
    #[arg(long, env = "UNDERLINE", default_value = DEFAULT_UNDERLINE)]
    pub underline: bool,

    /// Bold text
    #[arg(long, env = "BOLD")]
    pub bold: bool,

    /// Italicize text
    #[arg(long, env = "ITALIC")]
    pub italic: bool,

    /// Text alignment
    #[arg(long, env = "ALIGN", value_enum, default_value_t = Align::Left)]
    pub align: Align,

    /// Minimum block width, padding included
    #[arg(long, env = "WIDTH", value_name = "COLUMNS", value_parser = clap::value_parser!(u16))]
    pub width: Option<u16>,
}

impl StyleArgs {
    /// Resolve the flags into a renderable style
    pub fn to_style(&self) -> Result<Style, GumError> {
        Ok(Style {
            foreground: parse_color(&self.foreground)?,
            background: parse_color(&self.background)?,
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            align: self.align,
            width: self.width.map(usize::from),
            padding: self.padding,
            margin: self.margin,
        })
    }
}

/// Arguments for `gum style`
#[derive(Args, Debug, Clone)]
pub struct StyleCommandArgs {
    /// Text to style; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Flags shared by the interactive prompts
#[derive(Args, Debug, Clone, Default)]
pub struct TimeoutArgs {
    /// Give up after this many seconds (0 waits forever)
    #[arg(long, env = "GUM_TIMEOUT", value_name = "SECONDS", default_value_t = 0)]
    pub timeout: u64,
}

impl TimeoutArgs {
    #[must_use]
    pub const fn duration(&self) -> Option<Duration> {
        match self.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// Arguments for `gum choose`
#[derive(Args, Debug, Clone)]
pub struct ChooseArgs {
    /// Options to choose from; read from stdin lines when omitted
    #[arg(value_name = "OPTIONS")]
    pub options: Vec<String>,

    /// Maximum number of options to pick
    #[arg(long, env = "GUM_CHOOSE_LIMIT", default_value_t = 1)]
    pub limit: usize,

    /// Pick any number of options
    #[arg(long, conflicts_with = "limit")]
    pub no_limit: bool,

    /// Options selected up front
    #[arg(long, value_name = "OPTION", value_delimiter = ',')]
    pub selected: Vec<String>,

    /// Number of visible options
    #[arg(long, env = "GUM_CHOOSE_HEIGHT", default_value_t = 10)]
    pub height: usize,

    /// Prefix shown next to the highlighted option
    #[arg(long, env = "GUM_CHOOSE_CURSOR", default_value = "> ")]
    pub cursor: String,

    /// Header shown above the options
    #[arg(long, env = "GUM_CHOOSE_HEADER", default_value = "")]
    pub header: String,

    /// Cursor color
    #[arg(
        long = "cursor.foreground",
        env = "GUM_CHOOSE_CURSOR_FOREGROUND",
        value_name = "COLOR",
        default_value = DEFAULT_ACCENT
    )]
    pub cursor_foreground: String,

    #[command(flatten)]
    pub timeout: TimeoutArgs,
}

/// Arguments for `gum confirm`
#[derive(Args, Debug, Clone)]
pub struct ConfirmArgs {
    /// Question to ask
    #[arg(value_name = "PROMPT", default_value = "Are you sure?")]
    pub prompt: String,

    /// Label of the "yes" button
    #[arg(long, default_value = "Yes")]
    pub affirmative: String,

    /// Label of the "no" button
    #[arg(long, default_value = "No")]
    pub negative: String,

    /// Initially highlighted answer
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub default: bool,

    /// Background of the highlighted button
    #[arg(
        long = "selected.background",
        env = "GUM_CONFIRM_SELECTED_BACKGROUND",
        value_name = "COLOR",
        default_value = DEFAULT_ACCENT
    )]
    pub selected_background: String,

    #[command(flatten)]
    pub timeout: TimeoutArgs,
}

/// Arguments for `gum input`
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text shown while the input is empty
    #[arg(long, env = "GUM_INPUT_PLACEHOLDER", default_value = "Type something...")]
    pub placeholder: String,

    /// Prompt shown before the input
    #[arg(long, env = "GUM_INPUT_PROMPT", default_value = "> ")]
    pub prompt: String,

    /// Initial value
    #[arg(long, default_value = "")]
    pub value: String,

    /// Maximum number of characters (0 for no limit)
    #[arg(long, env = "GUM_INPUT_CHAR_LIMIT", default_value_t = 400)]
    pub char_limit: usize,

    /// Mask the input with '*'
    #[arg(long)]
    pub password: bool,

    /// Prompt color
    #[arg(
        long = "prompt.foreground",
        env = "GUM_INPUT_PROMPT_FOREGROUND",
        value_name = "COLOR",
        default_value = DEFAULT_FOREGROUND
    )]
    pub prompt_foreground: String,

    #[command(flatten)]
    pub timeout: TimeoutArgs,
}
