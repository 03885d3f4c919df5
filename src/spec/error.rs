use core::fmt::{self, Display};

/// Reasons a textual directive such as `%+5.2x` could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveError {
    /// The directive does not start with `%`.
    MissingPercent,
    /// Flags, width or precision were not followed by a verb.
    MissingVerb,
    /// Characters remain after the verb; `offset` is the byte index of the first one.
    TrailingInput { offset: usize },
    /// Width or precision does not fit in `usize`.
    NumberOverflow,
}

impl Display for DirectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPercent => f.write_str("directive must start with '%'"),
            Self::MissingVerb => f.write_str("directive is missing its verb"),
            Self::TrailingInput { offset } => {
                write!(f, "unexpected input after verb at byte {}", offset)
            },
            Self::NumberOverflow => f.write_str("width or precision is too large"),
        }
    }
}

impl core::error::Error for DirectiveError {}
