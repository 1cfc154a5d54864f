//! Named defaults shared by every styled flag

/// Background color; empty means the terminal's own
pub const DEFAULT_BACKGROUND: &str = "";

/// Foreground color; empty means the terminal's own
pub const DEFAULT_FOREGROUND: &str = "";

/// Margin shorthand, vertical then horizontal
pub const DEFAULT_MARGIN: &str = "0 0";

/// Padding shorthand, vertical then horizontal
pub const DEFAULT_PADDING: &str = "0 0";

pub const DEFAULT_UNDERLINE: &str = "false";

/// Accent used for cursors and the selected confirm button
pub const DEFAULT_ACCENT: &str = "212";
