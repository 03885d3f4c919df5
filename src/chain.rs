//! Walking an error and its ancestors through `source()`.
//!
//! These helpers work on any `dyn Error`, so a [`ChainedError`](crate::ChainedError)
//! chain that bottoms out in, say, an `io::Error` can be searched for it.
//!
//! # Examples
//!
//! ```
//! use chained_error::{chain, ChainedError};
//! use std::io;
//!
//! let err = ChainedError::msg("loading config")
//!     .with_cause(ChainedError::msg("reading file").with_source(io::Error::other("denied")));
//!
//! assert!(chain::contains::<io::Error>(&err));
//! assert_eq!(chain::root_cause(&err).to_string(), "denied");
//! assert_eq!(err.chain().count(), 3);
//! ```

use core::error::Error;
use core::iter::FusedIterator;

use smallvec::SmallVec;

/// Links collected from a [`Chain`]. Short chains stay inline.
pub type LinkVec<'a> = SmallVec<[&'a (dyn Error + 'static); 4]>;

/// Iterator over an error followed by each successive `source()`.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub fn new(head: &'a (dyn Error + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Iterates `error` and all of its ancestors.
#[inline]
pub fn chain<'a>(error: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain::new(error)
}

/// Returns the first link of the chain whose concrete type is `K`.
pub fn find<'a, K>(error: &'a (dyn Error + 'static)) -> Option<&'a K>
where
    K: Error + 'static,
{
    chain(error).find_map(|link| link.downcast_ref::<K>())
}

/// Whether `error` or any ancestor is a `K`.
#[inline]
pub fn contains<K>(error: &(dyn Error + 'static)) -> bool
where
    K: Error + 'static,
{
    find::<K>(error).is_some()
}

/// Returns the innermost link of the chain.
pub fn root_cause<'a>(error: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    chain(error).last().unwrap_or(error)
}
