//! Keep a pipeline of transformations running when one element fails.
//!
//! The core is [`Either`], a value that is a failure ([`Either::Left`]) or a
//! success ([`Either::Right`]), and [`lift`], which turns a function returning
//! `Result` into one returning `Either` so it can be mapped over a sequence
//! without the first failure ending it. [`lift_with_input`] also hands back
//! the input that failed, bundled in a [`FailureContext`].
//!
//! [`items`] and [`showcase`] drive the core over a sample item list.

extern crate console;
extern crate log;
extern crate nom;
extern crate thiserror;

pub mod context;
pub mod either;
pub mod items;
pub mod lift;
pub mod showcase;

pub use context::FailureContext;
pub use either::Either;
pub use lift::{lift, lift_with_input};

/// An error that can be reported as a one line headline followed by detail
pub trait HeadlineError {
    fn headline(&self) -> String;

    fn body(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase::{shout, ItemError};

    #[test]
    fn uppercase_sequence_with_gap() {
        let items = vec![Some("One"), Some("Two"), None, Some("Four")];

        let out: Vec<_> = items.into_iter().map(lift(shout)).collect();

        assert_eq!(
            out,
            vec![
                Either::Right("ONE".to_string()),
                Either::Right("TWO".to_string()),
                Either::Left(ItemError::Missing),
                Either::Right("FOUR".to_string()),
            ]
        );
    }

    #[test]
    fn gap_with_input() {
        let items = vec![Some("One"), None];

        let out: Vec<_> = items
            .into_iter()
            .map(lift_with_input(|item: &Option<&str>| shout(*item)))
            .collect();

        assert_eq!(out[0], Either::Right("ONE".to_string()));
        assert_eq!(
            out[1],
            Either::Left(FailureContext::new(ItemError::Missing, None))
        );
    }
}
