//! The printer: rendering configuration and the recursive renderer.
//!
//! A [`Printer`] holds every formatting knob (indent unit, nil marker,
//! compact flags, depth limit, key sort mode, hexadecimal mode, theme,
//! fallback handler) and renders a [`Value`] tree into text. A printer is
//! read-only during rendering and can be built once and reused across calls
//! and threads.
//!
//! ## Usage
//!
//! Most users go through the crate-level functions:
//!
//! ```rust
//! use prettify::{value, format};
//!
//! let text = format(&value!({"a": 1}));
//! ```
//!
//! Constructing a printer directly gives full control:
//!
//! ```rust
//! use prettify::{Printer, SortKeys, value};
//!
//! let printer = Printer::plain()
//!     .with_compact_map(true)
//!     .with_sort_keys(SortKeys::Descending);
//! let text = printer.format(&value!({"a": 1, "b": 2}));
//! assert_eq!(text, "{\"b\": 2, \"a\": 1}");
//! ```
//!
//! ## Rendering rules
//!
//! - Scalars render inline, styled per the theme; rendering a scalar never
//!   emits a newline or indentation.
//! - Mappings and sequences open with `{` / `[`, indent children one unit
//!   deeper, and close at the parent's indentation. Empty ones render as
//!   `{}` / `[]` at any level.
//! - A mapping value that is a non-empty container or record moves to its
//!   own line, one unit deeper than its key.
//! - A non-empty sequence consisting entirely of bytes renders as a hex
//!   dump unless compact sequences are on.
//! - Records always separate their fields with newlines; the compact flags
//!   apply to mappings and sequences only.
//! - With a depth limit set, values at the limit render their default
//!   scalar form (`Display`) instead of descending.
//!
//! The renderer is purely recursive with no cycle detection; the owned
//! [`Value`] tree cannot contain cycles, so recursion is bounded by the
//! input's structural depth.

use crate::hexdump::{hex_dump, GROUP_SIZE};
use crate::{Key, Record, Result, Theme, Value, ValueMap};
use std::fmt;
use std::io;
use std::sync::Arc;

const DEFAULT_INDENT: &str = "  ";
const DEFAULT_NIL_STRING: &str = "nil";

/// Key ordering applied when rendering a mapping.
///
/// `Unsorted` uses the map's insertion order, which is deterministic per
/// run. The sorted modes use [`Key`]'s natural ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortKeys {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

type Fallback = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Rendering configuration.
///
/// [`Printer::default`] matches the out-of-the-box printer: colorized
/// theme, two-space indent, `nil` marker, ascending key sort, hexadecimal
/// bytes. [`Printer::plain`] is the same without colors, which is what
/// tests and non-terminal output usually want.
///
/// # Examples
///
/// ```rust
/// use prettify::{Printer, Value};
///
/// let printer = Printer::plain().with_nil_string("<none>");
/// assert_eq!(printer.format(&Value::Null), "<none>");
/// ```
#[derive(Clone)]
pub struct Printer {
    pub theme: Theme,
    /// Indent unit repeated per nesting level.
    pub indent: String,
    /// Text emitted for null and absent values.
    pub nil_string: String,
    /// Separate sequence elements with spaces instead of newlines.
    pub compact_seq: bool,
    /// Separate mapping entries with spaces instead of newlines.
    pub compact_map: bool,
    /// Maximum nesting level; 0 means unlimited.
    pub max_level: usize,
    pub sort_keys: SortKeys,
    /// Render byte scalars as `0x`-prefixed lowercase hex.
    pub hexadecimal: bool,
    fallback: Option<Fallback>,
}

impl Default for Printer {
    fn default() -> Self {
        Printer {
            theme: Theme::default(),
            indent: DEFAULT_INDENT.to_string(),
            nil_string: DEFAULT_NIL_STRING.to_string(),
            compact_seq: false,
            compact_map: false,
            max_level: 0,
            sort_keys: SortKeys::Ascending,
            hexadecimal: true,
            fallback: None,
        }
    }
}

impl fmt::Debug for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer")
            .field("theme", &self.theme)
            .field("indent", &self.indent)
            .field("nil_string", &self.nil_string)
            .field("compact_seq", &self.compact_seq)
            .field("compact_map", &self.compact_map)
            .field("max_level", &self.max_level)
            .field("sort_keys", &self.sort_keys)
            .field("hexadecimal", &self.hexadecimal)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl Printer {
    /// Creates the default printer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a printer with no color styling.
    #[must_use]
    pub fn plain() -> Self {
        Printer {
            theme: Theme::plain(),
            ..Default::default()
        }
    }

    /// Replaces the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the indent unit (default two spaces).
    #[must_use]
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    /// Sets the nil marker (default `nil`).
    #[must_use]
    pub fn with_nil_string(mut self, nil_string: &str) -> Self {
        self.nil_string = nil_string.to_string();
        self
    }

    /// Renders sequences on one line, elements separated by `, `.
    #[must_use]
    pub fn with_compact_seq(mut self, compact: bool) -> Self {
        self.compact_seq = compact;
        self
    }

    /// Renders mappings on one line, entries separated by `, `.
    #[must_use]
    pub fn with_compact_map(mut self, compact: bool) -> Self {
        self.compact_map = compact;
        self
    }

    /// Limits descent depth; 0 (the default) means unlimited.
    #[must_use]
    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
        self
    }

    /// Sets the key sort mode for mappings.
    #[must_use]
    pub fn with_sort_keys(mut self, sort_keys: SortKeys) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    /// Toggles hexadecimal rendering of byte scalars (default on).
    #[must_use]
    pub fn with_hexadecimal(mut self, hexadecimal: bool) -> Self {
        self.hexadecimal = hexadecimal;
        self
    }

    /// Installs a handler for [`Value::Unsupported`]; its output is written
    /// verbatim in place of the `unsupported:` marker.
    #[must_use]
    pub fn with_fallback<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.fallback = Some(Arc::new(handler));
        self
    }

    /// Strips all color styling, keeping every other setting.
    #[must_use]
    pub fn no_color(mut self) -> Self {
        let layout = self.theme.time_layout.clone();
        self.theme = Theme::plain().with_time_layout(&layout);
        self
    }

    /// Renders `value` to a string, no trailing newline.
    #[must_use]
    pub fn format(&self, value: &Value) -> String {
        let mut out = String::with_capacity(256);
        self.render(&mut out, value, 0);
        out
    }

    /// Renders `value` to a string with a trailing newline.
    #[must_use]
    pub fn format_line(&self, value: &Value) -> String {
        let mut out = self.format(value);
        out.push('\n');
        out
    }

    /// Renders `value` and writes it to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails. Rendering itself
    /// cannot fail.
    pub fn print_to<W: io::Write>(&self, mut writer: W, value: &Value) -> Result<()> {
        writer.write_all(self.format(value).as_bytes())?;
        Ok(())
    }

    /// Renders `value` plus a trailing newline and writes it to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn println_to<W: io::Write>(&self, mut writer: W, value: &Value) -> Result<()> {
        writer.write_all(self.format_line(value).as_bytes())?;
        Ok(())
    }

    /// Renders `value` to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn print(&self, value: &Value) -> Result<()> {
        self.print_to(io::stdout(), value)
    }

    /// Renders `value` plus a trailing newline to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn println(&self, value: &Value) -> Result<()> {
        self.println_to(io::stdout(), value)
    }

    /// Recursively renders `value` at the given nesting level.
    fn render(&self, out: &mut String, value: &Value, level: usize) {
        if matches!(value, Value::Null) {
            self.write_nil(out);
            return;
        }

        if self.max_level > 0 && level >= self.max_level {
            out.push_str(&value.to_string());
            return;
        }

        match value {
            Value::Null => {}
            Value::Int(i) => self.write_integer(out, &i.to_string()),
            Value::UInt(u) => self.write_integer(out, &u.to_string()),
            Value::Byte(b) => {
                let text = if self.hexadecimal {
                    format!("0x{:x}", b)
                } else {
                    b.to_string()
                };
                self.write_integer(out, &text);
            }
            Value::Float(f) => self.write_float(out, *f),
            Value::String(s) => self.write_string(out, s),
            Value::Bool(b) => self.write_bool(out, *b),
            Value::Timestamp(t) => {
                let text = t.format(&self.theme.time_layout).to_string();
                out.push_str(&self.theme.time.paint(&text));
            }
            Value::Verbatim(s) => out.push_str(s),
            Value::Boxed(Some(inner)) => self.render(out, inner, level),
            Value::Boxed(None) => self.write_nil(out),
            Value::Map(map) => self.render_map(out, map, level),
            Value::Seq(seq) => self.render_seq(out, seq, level),
            Value::Record(record) => self.render_record(out, record, level),
            Value::Unsupported(text) => match &self.fallback {
                Some(handler) => out.push_str(&handler(value)),
                None => {
                    out.push_str("unsupported:");
                    out.push_str(text);
                }
            },
        }
    }

    fn render_map(&self, out: &mut String, map: &ValueMap, level: usize) {
        let len = map.len();
        if len == 0 {
            out.push_str("{}");
            return;
        }

        let cur = self.indent.repeat(level);
        let next = self.indent.repeat(level + 1);
        let (nl, inner) = if self.compact_map { ("", " ") } else { ("\n", "\n") };

        out.push('{');
        out.push_str(nl);

        let mut entries: Vec<(&Key, &Value)> = map.iter().collect();
        match self.sort_keys {
            SortKeys::Unsorted => {}
            SortKeys::Ascending => entries.sort_by(|a, b| a.0.cmp(b.0)),
            SortKeys::Descending => entries.sort_by(|a, b| b.0.cmp(a.0)),
        }

        for (i, (key, value)) in entries.iter().enumerate() {
            if !self.compact_map {
                out.push_str(&next);
            }
            self.render_key(out, key);
            out.push_str(": ");
            // Non-empty nested structure moves to its own line, one unit
            // deeper than the key.
            if !value.is_primitive() && !value.is_empty() {
                out.push_str(nl);
                out.push_str(&next);
                out.push_str(&self.indent);
                self.render(out, value, level + 2);
            } else {
                self.render(out, value, level + 1);
            }
            if i < len - 1 {
                out.push(',');
                out.push_str(inner);
            } else {
                out.push_str(nl);
            }
        }

        if !self.compact_map {
            out.push_str(&cur);
        }
        out.push('}');
    }

    fn render_seq(&self, out: &mut String, seq: &[Value], level: usize) {
        let len = seq.len();
        if len == 0 {
            out.push_str("[]");
            return;
        }

        let cur = self.indent.repeat(level);
        let next = self.indent.repeat(level + 1);
        let (start, end, inner) = if self.compact_seq {
            ("", "", " ")
        } else {
            ("\n", "\n", "\n")
        };

        out.push('[');
        out.push_str(start);

        let bytes = if self.compact_seq { None } else { byte_seq(seq) };
        match bytes {
            Some(bytes) => hex_dump(out, &bytes, GROUP_SIZE, &next),
            None => {
                for (i, element) in seq.iter().enumerate() {
                    if !self.compact_seq {
                        out.push_str(&next);
                    }
                    self.render(out, element, level + 1);
                    if i < len - 1 {
                        out.push(',');
                        out.push_str(inner);
                    } else {
                        out.push_str(end);
                    }
                }
            }
        }

        if !self.compact_seq {
            out.push_str(&cur);
        }
        out.push(']');
    }

    fn render_record(&self, out: &mut String, record: &Record, level: usize) {
        if !record.is_accessible() {
            out.push_str("protected");
            return;
        }
        if record.is_empty() {
            out.push_str("{}");
            return;
        }

        let cur = self.indent.repeat(level);
        let next = self.indent.repeat(level + 1);
        let len = record.len();

        out.push_str("{\n");
        for (i, (name, value)) in record.fields().iter().enumerate() {
            out.push_str(&next);
            out.push_str(name);
            out.push_str(": ");
            self.render(out, value, level + 1);
            if i < len - 1 {
                out.push_str(",\n");
            } else {
                out.push('\n');
            }
        }
        out.push_str(&cur);
        out.push('}');
    }

    fn render_key(&self, out: &mut String, key: &Key) {
        match key {
            Key::Bool(b) => self.write_bool(out, *b),
            Key::Int(i) => self.write_integer(out, &i.to_string()),
            Key::UInt(u) => self.write_integer(out, &u.to_string()),
            Key::Str(s) => self.write_string(out, s),
        }
    }

    fn write_nil(&self, out: &mut String) {
        out.push_str(&self.theme.nil.paint(&self.nil_string));
    }

    fn write_integer(&self, out: &mut String, text: &str) {
        out.push_str(&self.theme.integer.paint(text));
    }

    fn write_float(&self, out: &mut String, value: f64) {
        out.push_str(&self.theme.float.paint(&value.to_string()));
    }

    fn write_string(&self, out: &mut String, value: &str) {
        out.push_str(&self.theme.string.paint(&format!("{:?}", value)));
    }

    fn write_bool(&self, out: &mut String, value: bool) {
        let text = if value { "true" } else { "false" };
        out.push_str(&self.theme.bool.paint(text));
    }
}

/// Returns the raw bytes if every element of the sequence is a byte.
fn byte_seq(seq: &[Value]) -> Option<Vec<u8>> {
    seq.iter()
        .map(|v| match v {
            Value::Byte(b) => Some(*b),
            _ => None,
        })
        .collect()
}
