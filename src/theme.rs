//! Color themes for rendered output.
//!
//! A [`Theme`] assigns a [`Style`] to each semantic category the renderer
//! emits (nil, integer, float, string, bool, timestamp) plus the timestamp
//! layout. Styling goes through the `colored` crate, which already honors
//! `NO_COLOR` and non-tty output, so a colorized theme degrades to plain
//! text when piped.
//!
//! ## Examples
//!
//! ```rust
//! use prettify::{Printer, Theme, Value};
//!
//! // A style-free theme produces the raw text.
//! let printer = Printer::default().with_theme(Theme::plain());
//! assert_eq!(printer.format(&Value::Int(42)), "42");
//! ```

use colored::{Color, Colorize};
use std::borrow::Cow;

pub(crate) const DEFAULT_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// A single foreground style, or no styling at all.
///
/// With no color configured, [`Style::paint`] is the identity function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Style(Option<Color>);

impl Style {
    /// A style that leaves text unchanged.
    #[must_use]
    pub const fn none() -> Self {
        Style(None)
    }

    /// A foreground-color style.
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Style(Some(color))
    }

    /// Returns `text` wrapped in this style's escape codes, or unchanged
    /// when no color is configured.
    #[must_use]
    pub fn paint<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.0 {
            Some(color) => Cow::Owned(text.color(color).to_string()),
            None => Cow::Borrowed(text),
        }
    }
}

/// Style assignments per semantic category, plus the timestamp layout.
///
/// # Examples
///
/// ```rust
/// use colored::Color;
/// use prettify::{Style, Theme};
///
/// let theme = Theme {
///     integer: Style::fg(Color::Red),
///     ..Theme::plain()
/// };
/// assert_eq!(theme.string.paint("x"), "x");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub nil: Style,
    pub integer: Style,
    pub float: Style,
    pub string: Style,
    pub bool: Style,
    pub time: Style,
    /// chrono format string used for [`crate::Value::Timestamp`].
    pub time_layout: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            nil: Style::fg(Color::Red),
            integer: Style::fg(Color::Blue),
            float: Style::fg(Color::Cyan),
            string: Style::fg(Color::Green),
            bool: Style::fg(Color::Yellow),
            time: Style::fg(Color::Magenta),
            time_layout: DEFAULT_TIME_LAYOUT.to_string(),
        }
    }
}

impl Theme {
    /// A theme with no styling in any category.
    #[must_use]
    pub fn plain() -> Self {
        Theme {
            nil: Style::none(),
            integer: Style::none(),
            float: Style::none(),
            string: Style::none(),
            bool: Style::none(),
            time: Style::none(),
            time_layout: DEFAULT_TIME_LAYOUT.to_string(),
        }
    }

    /// Replaces the timestamp layout.
    #[must_use]
    pub fn with_time_layout(mut self, layout: &str) -> Self {
        self.time_layout = layout.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unstyled_paint_is_identity() {
        let style = Style::none();
        assert_eq!(style.paint("hello"), "hello");
        assert!(matches!(style.paint("hello"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_plain_theme_has_no_styles() {
        let theme = Theme::plain();
        assert_eq!(theme.nil, Style::none());
        assert_eq!(theme.integer, Style::none());
        assert_eq!(theme.float, Style::none());
        assert_eq!(theme.string, Style::none());
        assert_eq!(theme.bool, Style::none());
        assert_eq!(theme.time, Style::none());
    }

    #[test]
    fn test_time_layout_override() {
        let theme = Theme::plain().with_time_layout("%H:%M");
        assert_eq!(theme.time_layout, "%H:%M");
    }
}
