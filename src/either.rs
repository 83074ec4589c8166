//! A value holding exactly one of two possibilities

use std::fmt::{self, Display};

/// Either a `Left` or a `Right`, never both.
///
/// By convention the left side carries a failure and the right side carries
/// a successful value. Unlike a pair of optional fields, either side may hold
/// any value of its type, including `None` or an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// Failure side
    Left(L),
    /// Success side
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn left(value: L) -> Self {
        Self::Left(value)
    }

    pub fn right(value: R) -> Self {
        Self::Right(value)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The left payload, if this is a `Left`
    pub fn get_left(&self) -> Option<&L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// The right payload, if this is a `Right`
    pub fn get_right(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Apply `f` to the left payload.
    ///
    /// Returns `None` without calling `f` if this is a `Right`.
    pub fn map_left<T>(&self, f: impl FnOnce(&L) -> T) -> Option<T> {
        self.get_left().map(f)
    }

    /// Apply `f` to the right payload.
    ///
    /// Returns `None` without calling `f` if this is a `Left`.
    pub fn map_right<T>(&self, f: impl FnOnce(&R) -> T) -> Option<T> {
        self.get_right().map(f)
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Collapse both sides into a single value
    pub fn either<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }

    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(l) => Err(l),
            Self::Right(r) => Ok(r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(res: Result<R, L>) -> Self {
        match res {
            Ok(r) => Self::Right(r),
            Err(l) => Self::Left(l),
        }
    }
}

impl<L: Display, R: Display> Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(l) => write!(f, "Left({})", l),
            Self::Right(r) => write!(f, "Right({})", r),
        }
    }
}
