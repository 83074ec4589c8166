//! Turn fallible transformations into ones that always return.
//!
//! A lifted function reports failure through [`Either::Left`] instead of
//! through its return type, so a chain of iterator adapters keeps going past
//! a bad element:
//!
//! ```
//! use carryon::{lift, Either};
//!
//! let out: Vec<_> = vec!["1", "x", "3"]
//!     .into_iter()
//!     .map(lift(|s: &str| s.parse::<i32>()))
//!     .collect();
//!
//! assert_eq!(out.len(), 3);
//! assert!(out[1].is_left());
//! assert_eq!(out[2], Either::Right(3));
//! ```

use crate::{Either, FailureContext};

/// Wrap `f` so its error lands on the left side instead of being returned.
pub fn lift<I, O, E, F>(mut f: F) -> impl FnMut(I) -> Either<E, O>
where
    F: FnMut(I) -> Result<O, E>,
{
    move |input| f(input).into()
}

/// Like [`lift`], but a failure also carries the input that caused it.
///
/// `f` only borrows its input so the input can be handed back on failure.
pub fn lift_with_input<I, O, E, F>(mut f: F) -> impl FnMut(I) -> Either<FailureContext<E, I>, O>
where
    F: FnMut(&I) -> Result<O, E>,
{
    move |input| match f(&input) {
        Ok(out) => Either::Right(out),
        Err(error) => Either::Left(FailureContext::new(error, input)),
    }
}
