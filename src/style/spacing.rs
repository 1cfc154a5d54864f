//! CSS-like spacing shorthand used by `--margin` and `--padding`

use crate::error::GumError;
use std::str::FromStr;

/// Largest accepted value for a single side
pub const MAX_SPACING: usize = 1024;

/// Space around a block, in cells (columns for left/right, lines for top/bottom)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacing {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Spacing {
    #[must_use]
    pub const fn horizontal(&self) -> usize {
        self.left.saturating_add(self.right)
    }
}

impl FromStr for Spacing {
    type Err = GumError;

    /// Parse one to four whitespace-separated values in CSS order
    ///
    /// `"1"` sets every side, `"1 2"` is vertical then horizontal,
    /// `"1 2 3"` is top, horizontal, bottom and `"1 2 3 4"` is top, right,
    /// bottom, left.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|part| match part.parse::<usize>() {
                Ok(value) if value <= MAX_SPACING => Ok(value),
                Ok(_) => Err(GumError::invalid_argument(format!(
                    "spacing value '{part}' in '{s}' exceeds {MAX_SPACING}"
                ))),
                Err(_) => Err(GumError::invalid_argument(format!(
                    "invalid spacing value '{part}' in '{s}'"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (top, right, bottom, left) = match *values.as_slice() {
            [all] => (all, all, all, all),
            [vertical, horizontal] => (vertical, horizontal, vertical, horizontal),
            [top, horizontal, bottom] => (top, horizontal, bottom, horizontal),
            [top, right, bottom, left] => (top, right, bottom, left),
            _ => {
                return Err(GumError::invalid_argument(format!(
                    "invalid spacing '{s}': expected 1 to 4 values"
                )));
            }
        };

        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn test_default_shorthand_is_zero() {
        assert_eq!("0 0".parse::<Spacing>().unwrap(), Spacing::default());
    }

    #[test]
    fn test_css_order() {
        let one: Spacing = "2".parse().unwrap();
        assert_eq!((one.top, one.right, one.bottom, one.left), (2, 2, 2, 2));

        let two: Spacing = "1 4".parse().unwrap();
        assert_eq!((two.top, two.right, two.bottom, two.left), (1, 4, 1, 4));

        let three: Spacing = "1 2 3".parse().unwrap();
        assert_eq!((three.top, three.right, three.bottom, three.left), (1, 2, 3, 2));

        let four: Spacing = "1 2 3 4".parse().unwrap();
        assert_eq!((four.top, four.right, four.bottom, four.left), (1, 2, 3, 4));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!("".parse::<Spacing>().is_err());
        assert!("1 2 3 4 5".parse::<Spacing>().is_err());
        assert!("one".parse::<Spacing>().is_err());
        assert!("-1".parse::<Spacing>().is_err());
    }

    #[test]
    fn test_rejects_values_past_the_cap() {
        assert!("1024".parse::<Spacing>().is_ok());
        assert!("0 1025".parse::<Spacing>().is_err());

        let err = "0 18446744073709551615".parse::<Spacing>().unwrap_err();
        assert!(err.to_string().contains("exceeds 1024"));
        assert!(matches!(err, GumError::InvalidArgument { .. }));
    }
}
