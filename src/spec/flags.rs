//! Formatting flags and the set that carries them.

use core::fmt::{self, Display, Write};

/// A single printf-style flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// `+`: verbose output for `v`, forced sign or ASCII-only quoting elsewhere.
    Plus,
    /// `-`: pad on the right instead of the left.
    Minus,
    /// `#`: alternate form.
    Sharp,
    /// ` `: space-separated hex bytes.
    Space,
    /// `0`: pad with leading zeros.
    Zero,
}

impl Flag {
    /// Every flag, in the order they are written back into a directive.
    pub const CANONICAL: [Flag; 5] = [Flag::Plus, Flag::Minus, Flag::Sharp, Flag::Space, Flag::Zero];

    /// Returns the directive character for this flag.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Flag::Plus => '+',
            Flag::Minus => '-',
            Flag::Sharp => '#',
            Flag::Space => ' ',
            Flag::Zero => '0',
        }
    }

    /// Maps a directive character back to its flag.
    #[inline]
    pub const fn from_char(c: char) -> Option<Flag> {
        match c {
            '+' => Some(Flag::Plus),
            '-' => Some(Flag::Minus),
            '#' => Some(Flag::Sharp),
            ' ' => Some(Flag::Space),
            '0' => Some(Flag::Zero),
            _ => None,
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of active [`Flag`]s.
///
/// Insertion order is not remembered: iteration and [`Display`] always
/// follow [`Flag::CANONICAL`].
///
/// # Examples
///
/// ```
/// use chained_error::{Flag, Flags};
///
/// let flags: Flags = [Flag::Zero, Flag::Plus].into_iter().collect();
/// assert!(flags.contains(Flag::Plus));
/// assert_eq!(flags.to_string(), "+0");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flags(u8);

impl Flags {
    /// The empty set.
    pub const EMPTY: Flags = Flags(0);

    #[inline]
    pub const fn contains(self, flag: Flag) -> bool {
        self.0 & flag.bit() != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn insert(&mut self, flag: Flag) {
        self.0 |= flag.bit();
    }

    #[inline]
    pub fn remove(&mut self, flag: Flag) {
        self.0 &= !flag.bit();
    }

    /// Returns a copy of the set with `flag` added.
    #[inline]
    pub const fn with(self, flag: Flag) -> Self {
        Flags(self.0 | flag.bit())
    }

    /// Iterates the active flags in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Flag> {
        Flag::CANONICAL.into_iter().filter(move |flag| self.contains(*flag))
    }
}

impl FromIterator<Flag> for Flags {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        let mut flags = Flags::EMPTY;
        for flag in iter {
            flags.insert(flag);
        }
        flags
    }
}

impl Extend<Flag> for Flags {
    fn extend<I: IntoIterator<Item = Flag>>(&mut self, iter: I) {
        for flag in iter {
            self.insert(flag);
        }
    }
}

impl Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in self.iter() {
            f.write_char(flag.as_char())?;
        }
        Ok(())
    }
}
