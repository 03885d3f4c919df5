//! Printf-style format directives.
//!
//! A [`FormatSpec`] is the explicit form of a directive like `%+5.2x`: a set of
//! [`Flags`], an optional width, an optional precision and a verb. It can be
//! parsed from text, written back as text in canonical form, captured from a
//! live [`core::fmt::Formatter`], and applied to a plain string with
//! [`write_plain`].
//!
//! # Examples
//!
//! ```
//! use chained_error::{Flag, FormatSpec};
//!
//! let spec = FormatSpec::parse("%0-+8.3s").unwrap();
//! assert!(spec.has(Flag::Minus));
//! assert_eq!(spec.width, Some(8));
//!
//! // Flags always come back in `+ - # space 0` order.
//! assert_eq!(spec.directive(), "%+-08.3s");
//! ```

use core::fmt::{self, Display, Write};
use core::iter::Peekable;
use core::str::{CharIndices, FromStr};

use alloc::string::{String, ToString};

mod error;
mod flags;
mod plain;

pub use error::DirectiveError;
pub use flags::{Flag, Flags};
pub use plain::write_plain;

/// An explicit format directive.
///
/// Reconstruction through [`Display`] (or [`FormatSpec::directive`]) emits `%`,
/// the flags in canonical order, the width, `.` and the precision, then the
/// verb. Reconstruction normalizes flag order; everything else is lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    pub flags: Flags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub verb: char,
}

impl FormatSpec {
    /// A directive with no flags, width or precision.
    #[inline]
    pub const fn new(verb: char) -> Self {
        Self { flags: Flags::EMPTY, width: None, precision: None, verb }
    }

    /// `%+v`, the verbose chain report.
    #[inline]
    pub const fn verbose() -> Self {
        Self { flags: Flags::EMPTY.with(Flag::Plus), width: None, precision: None, verb: 'v' }
    }

    /// `%#v`, the raw structural dump.
    #[inline]
    pub const fn debug_dump() -> Self {
        Self { flags: Flags::EMPTY.with(Flag::Sharp), width: None, precision: None, verb: 'v' }
    }

    #[inline]
    pub const fn with_flag(mut self, flag: Flag) -> Self {
        self.flags = self.flags.with(flag);
        self
    }

    #[inline]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    #[inline]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    #[inline]
    pub const fn has(&self, flag: Flag) -> bool {
        self.flags.contains(flag)
    }

    /// True for `%+v` and its width/precision variants.
    #[inline]
    pub const fn is_verbose(&self) -> bool {
        self.verb == 'v' && self.has(Flag::Plus)
    }

    /// True for `%#v` and its variants. Checked before [`is_verbose`](Self::is_verbose).
    #[inline]
    pub const fn is_debug_dump(&self) -> bool {
        self.verb == 'v' && self.has(Flag::Sharp)
    }

    /// Reconstructs the canonical directive text.
    #[must_use]
    pub fn directive(&self) -> String {
        self.to_string()
    }

    /// Parses a directive such as `%-#08.3q`.
    ///
    /// Flags may appear in any order and may repeat. A `.` without digits
    /// means a precision of zero.
    pub fn parse(directive: &str) -> Result<Self, DirectiveError> {
        let rest = directive.strip_prefix('%').ok_or(DirectiveError::MissingPercent)?;
        let mut chars = rest.char_indices().peekable();

        let mut flags = Flags::EMPTY;
        while let Some(flag) = chars.peek().and_then(|&(_, c)| Flag::from_char(c)) {
            flags.insert(flag);
            chars.next();
        }

        let width = parse_number(&mut chars)?;
        let precision = match chars.next_if(|&(_, c)| c == '.') {
            Some(_) => Some(parse_number(&mut chars)?.unwrap_or(0)),
            None => None,
        };

        let (_, verb) = chars.next().ok_or(DirectiveError::MissingVerb)?;
        if let Some((offset, _)) = chars.next() {
            return Err(DirectiveError::TrailingInput { offset: offset + 1 });
        }

        Ok(Self { flags, width, precision, verb })
    }

    /// Captures the options of a live formatter as a directive with `verb`.
    ///
    /// `{:+}` maps to `+`, left alignment (`{:<}`) to `-`, `{:#}` to `#` and
    /// `{:0}` to `0`. Fill characters and centering have no directive
    /// equivalent and are dropped.
    pub fn from_formatter(f: &fmt::Formatter<'_>, verb: char) -> Self {
        let mut flags = Flags::EMPTY;
        if f.sign_plus() {
            flags.insert(Flag::Plus);
        }
        if matches!(f.align(), Some(fmt::Alignment::Left)) {
            flags.insert(Flag::Minus);
        }
        if f.alternate() {
            flags.insert(Flag::Sharp);
        }
        if f.sign_aware_zero_pad() {
            flags.insert(Flag::Zero);
        }
        Self { flags, width: f.width(), precision: f.precision(), verb }
    }
}

impl Default for FormatSpec {
    /// `%v`.
    fn default() -> Self {
        Self::new('v')
    }
}

impl Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('%')?;
        Display::fmt(&self.flags, f)?;
        if let Some(width) = self.width {
            write!(f, "{}", width)?;
        }
        if let Some(precision) = self.precision {
            write!(f, ".{}", precision)?;
        }
        f.write_char(self.verb)
    }
}

impl FromStr for FormatSpec {
    type Err = DirectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_number(chars: &mut Peekable<CharIndices<'_>>) -> Result<Option<usize>, DirectiveError> {
    let mut value: Option<usize> = None;
    while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
        let digit = (c as u8 - b'0') as usize;
        let next = value
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or(DirectiveError::NumberOverflow)?;
        value = Some(next);
    }
    Ok(value)
}
