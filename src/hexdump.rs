//! Hex-dump rendering of byte sequences.
//!
//! Byte sequences render as fixed-width rows instead of one bracketed
//! element per byte: a decimal offset column, two lowercase hex digits per
//! byte, and a printable-ASCII preview column. Sixteen bytes per row:
//!
//! ```text
//! 0000 68  65  6c  6c  6f  0a  ...                'hello.'
//! ```

use std::fmt::Write;

/// Bytes per hex-dump row.
pub const GROUP_SIZE: usize = 16;

/// Writes `bytes` as hex-dump rows into `out`.
///
/// Each row is `indent`, a 4-digit zero-padded decimal offset, a space,
/// then `group` slots of either `xx` plus two spaces (one per byte) or four
/// blank spaces (short final row), then two spaces and the quoted preview,
/// then a newline. Row count is `ceil(bytes.len() / group)`; a length that
/// is an exact multiple of `group` ends with a full row, not an empty one.
///
/// # Examples
///
/// ```rust
/// use prettify::hexdump::hex_dump;
///
/// let mut out = String::new();
/// hex_dump(&mut out, b"hi", 16, "");
/// assert_eq!(
///     out,
///     "0000 68  69                                                            'hi'\n"
/// );
/// ```
pub fn hex_dump(out: &mut String, bytes: &[u8], group: usize, indent: &str) {
    for (row, chunk) in bytes.chunks(group).enumerate() {
        out.push_str(indent);
        let _ = write!(out, "{:04} ", row * group);
        for byte in chunk {
            let _ = write!(out, "{:02x}  ", byte);
        }
        for _ in chunk.len()..group {
            out.push_str("    ");
        }
        out.push_str("  '");
        out.push_str(&preview(chunk));
        out.push_str("'\n");
    }
}

/// Returns one character per byte, substituting `.` for anything outside
/// the printable ASCII range 32..=126.
pub fn preview(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if (32..=126).contains(&b) {
                b as char
            } else {
                '.'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_masks_non_printable() {
        assert_eq!(preview(b"abc"), "abc");
        assert_eq!(preview(&[0, 31, 32, 126, 127, 255]), ".. ~..");
    }

    #[test]
    fn test_preview_boundaries() {
        assert_eq!(preview(&[31]), ".");
        assert_eq!(preview(&[32]), " ");
        assert_eq!(preview(&[126]), "~");
        assert_eq!(preview(&[127]), ".");
    }

    #[test]
    fn test_single_partial_row() {
        let mut out = String::new();
        hex_dump(&mut out, &[1, 2, 3], 16, "");
        assert_eq!(
            out,
            "0000 01  02  03                                                        '...'\n"
        );
    }

    #[test]
    fn test_seventeen_bytes_two_rows() {
        let bytes: Vec<u8> = (1..=17).collect();
        let mut out = String::new();
        hex_dump(&mut out, &bytes, 16, "");
        let want = "\
0000 01  02  03  04  05  06  07  08  09  0a  0b  0c  0d  0e  0f  10    '................'
0016 11                                                                '.'
";
        assert_eq!(out, want);
    }

    #[test]
    fn test_exact_multiple_ends_with_full_row() {
        let bytes = [0u8; 32];
        let mut out = String::new();
        hex_dump(&mut out, &bytes, 16, "");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0000 00  "));
        assert!(lines[1].starts_with("0016 00  "));
        assert!(lines[1].ends_with("'................'"));
    }

    #[test]
    fn test_indent_prefixes_every_row() {
        let bytes: Vec<u8> = (0..20).collect();
        let mut out = String::new();
        hex_dump(&mut out, &bytes, 16, "    ");
        for line in out.lines() {
            assert!(line.starts_with("    "));
        }
    }

    #[test]
    fn test_offsets_are_decimal() {
        let bytes = [0u8; 40];
        let mut out = String::new();
        hex_dump(&mut out, &bytes, 16, "");
        let offsets: Vec<_> = out
            .lines()
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(offsets, vec!["0000", "0016", "0032"]);
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let mut out = String::new();
        hex_dump(&mut out, &[], 16, "  ");
        assert!(out.is_empty());
    }
}
