//! The wrapped cause of a [`ChainedError`].

use core::error::Error;
use core::fmt::{self, Debug, Display};

use alloc::boxed::Box;

use crate::types::{ChainedError, ErrorFormatter};

/// An exclusively owned cause, tagged by whether it can render itself verbosely.
pub enum Cause {
    /// A cause implementing [`ErrorFormatter`]; verbose reports cascade into it.
    Formatter(Box<dyn ErrorFormatter + Send + Sync>),
    /// Any other error; rendered through its `Display` string only.
    Plain(Box<dyn Error + Send + Sync>),
}

impl Cause {
    #[inline]
    pub fn plain<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Plain(Box::new(error))
    }

    #[inline]
    pub fn formatter<E>(error: E) -> Self
    where
        E: ErrorFormatter + Send + Sync + 'static,
    {
        Self::Formatter(Box::new(error))
    }

    /// Returns the cause as a standard error, for chain walking.
    #[inline]
    pub fn as_error(&self) -> &(dyn Error + 'static) {
        match self {
            Self::Formatter(error) => &**error,
            Self::Plain(error) => &**error,
        }
    }

    /// Returns the verbose-capable view of this cause, if it has one.
    ///
    /// A [`ChainedError`] stored as [`Cause::Plain`] is still recognised.
    pub fn as_formatter(&self) -> Option<&(dyn ErrorFormatter + 'static)> {
        match self {
            Self::Formatter(error) => Some(&**error as &(dyn ErrorFormatter + 'static)),
            Self::Plain(error) => error
                .downcast_ref::<ChainedError>()
                .map(|chained| chained as &(dyn ErrorFormatter + 'static)),
        }
    }

    #[inline]
    pub fn supports_verbose(&self) -> bool {
        self.as_formatter().is_some()
    }

    /// Moves the cause out as a plain boxed error.
    pub fn into_boxed(self) -> Box<dyn Error + Send + Sync> {
        match self {
            Self::Formatter(error) => error,
            Self::Plain(error) => error,
        }
    }
}

impl Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_error(), f)
    }
}

impl Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_error(), f)
    }
}

impl From<ChainedError> for Cause {
    #[inline]
    fn from(error: ChainedError) -> Self {
        Self::Formatter(Box::new(error))
    }
}

impl From<Box<dyn Error + Send + Sync>> for Cause {
    #[inline]
    fn from(error: Box<dyn Error + Send + Sync>) -> Self {
        Self::Plain(error)
    }
}
