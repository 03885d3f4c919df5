//! Applying a directive to a plain string argument.

use core::fmt::{self, Write};

use alloc::string::String;

use super::{Flag, FormatSpec};

const LOWER_HEX: &[u8; 16] = b"0123456789abcdef";
const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Writes `s` to `out` the way a printf-style formatter renders a string
/// argument under `spec`.
///
/// | verb | output |
/// |---|---|
/// | `v`, `s` | the string, truncated to `precision` chars; `#v` quotes it like `q` |
/// | `q` | a double-quoted, escaped string; `+` escapes all non-ASCII, `#` prefers a back-quoted raw string |
/// | `x`, `X` | two hex digits per byte, at most `precision` bytes; ` ` separates bytes, `#` adds `0x` |
/// | other | `%!<verb>(string=<s under v>)` |
///
/// The result is padded to `width` chars, on the left unless `-` is set, with
/// `0` when `0` is set and `-` is not.
///
/// # Examples
///
/// ```
/// use chained_error::{write_plain, FormatSpec};
///
/// let mut out = String::new();
/// write_plain(&mut out, &FormatSpec::parse("%5s").unwrap(), "m").unwrap();
/// assert_eq!(out, "    m");
/// ```
pub fn write_plain(out: &mut dyn Write, spec: &FormatSpec, s: &str) -> fmt::Result {
    match spec.verb {
        'v' if spec.has(Flag::Sharp) => pad(out, spec, &quote(truncate_chars(s, spec.precision), false)),
        'v' | 's' => pad(out, spec, truncate_chars(s, spec.precision)),
        'q' => {
            let text = truncate_chars(s, spec.precision);
            let quoted = if spec.has(Flag::Sharp) && can_backquote(text) {
                let mut raw = String::with_capacity(text.len() + 2);
                raw.push('`');
                raw.push_str(text);
                raw.push('`');
                raw
            } else {
                quote(text, spec.has(Flag::Plus))
            };
            pad(out, spec, &quoted)
        },
        'x' => pad(out, spec, &hex(s, spec, LOWER_HEX, 'x')),
        'X' => pad(out, spec, &hex(s, spec, UPPER_HEX, 'X')),
        verb => {
            out.write_str("%!")?;
            out.write_char(verb)?;
            out.write_str("(string=")?;
            let mut inner = FormatSpec { verb: 'v', ..*spec };
            inner.flags.remove(Flag::Sharp);
            write_plain(out, &inner, s)?;
            out.write_char(')')
        },
    }
}

fn pad(out: &mut dyn Write, spec: &FormatSpec, s: &str) -> fmt::Result {
    let len = s.chars().count();
    let fill = spec.width.map_or(0, |width| width.saturating_sub(len));
    if fill == 0 {
        return out.write_str(s);
    }

    if spec.has(Flag::Minus) {
        out.write_str(s)?;
        write_fill(out, ' ', fill)
    } else {
        let c = if spec.has(Flag::Zero) { '0' } else { ' ' };
        write_fill(out, c, fill)?;
        out.write_str(s)
    }
}

fn write_fill(out: &mut dyn Write, c: char, count: usize) -> fmt::Result {
    for _ in 0..count {
        out.write_char(c)?;
    }
    Ok(())
}

fn truncate_chars(s: &str, precision: Option<usize>) -> &str {
    match precision.and_then(|p| s.char_indices().nth(p)) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn hex(s: &str, spec: &FormatSpec, digits: &[u8; 16], x: char) -> String {
    let bytes = match spec.precision {
        Some(p) if p < s.len() => &s.as_bytes()[..p],
        _ => s.as_bytes(),
    };
    let sharp = spec.has(Flag::Sharp);
    let space = spec.has(Flag::Space);

    let mut out = String::with_capacity(bytes.len() * 5);
    if bytes.is_empty() {
        return out;
    }
    if sharp {
        out.push('0');
        out.push(x);
    }
    for (i, byte) in bytes.iter().enumerate() {
        if space && i > 0 {
            out.push(' ');
            if sharp {
                out.push('0');
                out.push(x);
            }
        }
        out.push(digits[(byte >> 4) as usize] as char);
        out.push(digits[(byte & 0x0f) as usize] as char);
    }
    out
}

fn can_backquote(s: &str) -> bool {
    !s.chars()
        .any(|c| (c < ' ' && c != '\t') || c == '`' || c == '\u{7f}' || c == '\u{feff}')
}

fn quote(s: &str, ascii_only: bool) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            ' '..='~' => out.push(c),
            c if c.is_ascii() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            },
            c if !ascii_only && is_printable(c) => out.push(c),
            c if (c as u32) < 0x10000 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            },
            c => {
                let _ = write!(out, "\\U{:08x}", c as u32);
            },
        }
    }
    out.push('"');
    out
}

/// Non-ASCII separators (Zs, Zl, Zp).
const SEPARATORS: &[(u32, u32)] = &[
    (0x00a0, 0x00a0),
    (0x1680, 0x1680),
    (0x2000, 0x200a),
    (0x2028, 0x2029),
    (0x202f, 0x202f),
    (0x205f, 0x205f),
    (0x3000, 0x3000),
];

/// Format characters (Cf).
const FORMAT: &[(u32, u32)] = &[
    (0x00ad, 0x00ad),
    (0x0600, 0x0605),
    (0x061c, 0x061c),
    (0x06dd, 0x06dd),
    (0x070f, 0x070f),
    (0x0890, 0x0891),
    (0x08e2, 0x08e2),
    (0x180e, 0x180e),
    (0x200b, 0x200f),
    (0x202a, 0x202e),
    (0x2060, 0x2064),
    (0x2066, 0x206f),
    (0xfeff, 0xfeff),
    (0xfff9, 0xfffb),
    (0x110bd, 0x110bd),
    (0x110cd, 0x110cd),
    (0x13430, 0x1343f),
    (0x1bca0, 0x1bca3),
    (0x1d173, 0x1d17a),
    (0xe0001, 0xe0001),
    (0xe0020, 0xe007f),
];

/// Private use areas (Co).
const PRIVATE_USE: &[(u32, u32)] = &[(0xe000, 0xf8ff), (0xf0000, 0xffffd), (0x100000, 0x10fffd)];

fn in_ranges(ranges: &[(u32, u32)], cp: u32) -> bool {
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Whether `c` may appear unescaped inside a quoted string.
///
/// Controls, non-ASCII separators, format and private use characters and
/// noncharacters are escaped. Other unassigned code points are not tracked
/// and print as-is.
fn is_printable(c: char) -> bool {
    let cp = c as u32;
    let noncharacter = (0xfdd0..=0xfdef).contains(&cp) || cp & 0xfffe == 0xfffe;
    !(c.is_control()
        || noncharacter
        || in_ranges(SEPARATORS, cp)
        || in_ranges(FORMAT, cp)
        || in_ranges(PRIVATE_USE, cp))
}
