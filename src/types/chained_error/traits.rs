use core::error::Error;
use core::fmt::{self, Debug, Display, Write};

use alloc::string::ToString;

use super::ChainedError;

/// `{}` is the compact form, padded like a plain string; `{:+}` the verbose
/// report; `{:#}` the raw structure, same as `{:#?}`.
impl Display for ChainedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return Debug::fmt(self, f);
        }
        if !f.sign_plus() {
            return f.pad(&self.compact_string());
        }

        self.write_head(f)?;
        let Some(cause) = &self.cause else {
            return Ok(());
        };
        match cause.as_formatter() {
            Some(inner) => inner.fmt_display(f),
            None => {
                f.pad(&cause.to_string())?;
                f.write_char('\n')
            },
        }
    }
}

impl Debug for ChainedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedError")
            .field("message", &self.message)
            .field("detail", &self.detail)
            .field("cause", &self.cause)
            .finish()
    }
}

impl Error for ChainedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause()
    }
}

impl From<&str> for ChainedError {
    #[inline]
    fn from(message: &str) -> Self {
        Self::msg(message)
    }
}

impl From<alloc::string::String> for ChainedError {
    #[inline]
    fn from(message: alloc::string::String) -> Self {
        Self::msg(message)
    }
}
