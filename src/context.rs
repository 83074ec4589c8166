use std::fmt::{self, Debug, Display};

/// An error together with the input that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureContext<E, I> {
    pub error: E,
    pub input: I,
}

impl<E, I> FailureContext<E, I> {
    pub fn new(error: E, input: I) -> Self {
        Self { error, input }
    }

    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn into_parts(self) -> (E, I) {
        (self.error, self.input)
    }
}

impl<E: Display, I: Debug> Display for FailureContext<E, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (input: {:?})", self.error, self.input)
    }
}
