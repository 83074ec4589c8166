//! Item lists fed through the showcase pipelines.
//!
//! An item list is an ordered sequence of `Option<String>`, where `None`
//! stands for a missing element. See [`parse_items`] for the text format.

mod parse;
pub use parse::*;

use std::{io::Read, path::Path};

use thiserror::Error;

use crate::HeadlineError;

/// The list the showcase runs over when no item file is given
pub const SAMPLE_ITEMS: [Option<&str>; 8] = [
    Some("One"),
    Some("Two"),
    Some("Three"),
    Some("Ahoj"),
    Some("Gee"),
    None,
    Some("Nothing"),
    Some("Else"),
];

pub fn sample_items() -> Vec<Option<String>> {
    SAMPLE_ITEMS
        .iter()
        .map(|item| item.map(str::to_string))
        .collect()
}

#[derive(Debug)]
/// Possible errors from reading an item list
pub struct ItemsError {
    file_name: Option<String>,
    ty: ItemsErrorType,
}

impl ItemsError {
    pub fn attach_file(mut self, filename: String) -> Self {
        self.file_name.replace(filename);
        self
    }

    pub fn type_ref(&self) -> &ItemsErrorType {
        &self.ty
    }
}

impl From<std::io::Error> for ItemsError {
    fn from(e: std::io::Error) -> Self {
        Self {
            file_name: None,
            ty: ItemsErrorType::IoError(e),
        }
    }
}

impl From<ItemsErrorType> for ItemsError {
    fn from(e: ItemsErrorType) -> Self {
        Self {
            file_name: None,
            ty: e,
        }
    }
}

impl std::fmt::Display for ItemsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file_name {
            Some(name) => write!(f, "{} in {}", self.ty, name),
            None => write!(f, "{}", self.ty),
        }
    }
}

impl std::error::Error for ItemsError {}

#[derive(Debug, Error)]
/// Different kinds of error encountered while reading an item list
///
/// See [`ItemsError::type_ref`]
pub enum ItemsErrorType {
    #[error("Quoted item on line {line} is never closed")]
    /// A `"` was opened but the line ended first
    UnterminatedQuote { line: usize, text: String },

    #[error("Unexpected text after quoted item on line {line}")]
    /// Something other than whitespace or a comment followed a quoted item
    TrailingText { line: usize, text: String },

    #[error("Could not read item list")]
    /// Could not open or read the file
    IoError(std::io::Error),
}

impl HeadlineError for ItemsError {
    fn headline(&self) -> String {
        let filename = move || {
            if let Some(filename) = &self.file_name {
                format!(" while reading file {}", filename)
            } else {
                String::new()
            }
        };

        format!("{}{}", self.ty, filename())
    }

    fn body(&self) -> String {
        match &self.ty {
            ItemsErrorType::IoError(e) => format!("{}", e),
            ItemsErrorType::UnterminatedQuote { line, text }
            | ItemsErrorType::TrailingText { line, text } => format!("{:>4} | {}", line, text),
        }
    }
}

/// Read a file as an item list
pub fn read_items(file: impl AsRef<Path>) -> Result<Vec<Option<String>>, ItemsError> {
    let file = file.as_ref();

    let mut f = std::fs::File::open(file)
        .map_err(ItemsError::from)
        .map_err(|e| e.attach_file(format!("{}", file.display())))?;

    let mut text = String::new();
    f.read_to_string(&mut text)
        .map_err(ItemsError::from)
        .map_err(|e| e.attach_file(format!("{}", file.display())))?;

    parse_items(&text).map_err(|e| e.attach_file(format!("{}", file.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_one_gap() {
        let items = sample_items();

        assert_eq!(items.len(), 8);
        assert_eq!(items.iter().filter(|i| i.is_none()).count(), 1);
        assert_eq!(items[5], None);
        assert_eq!(items[0].as_deref(), Some("One"));
    }

    #[test]
    fn missing_file_names_the_file() {
        let err = read_items("definitely/not/here.items").unwrap_err();

        assert!(matches!(err.type_ref(), ItemsErrorType::IoError(_)));
        assert!(err.headline().contains("definitely/not/here.items"));
    }

    #[test]
    fn malformed_line_is_reported() {
        let err = parse_items("One\n\"Two\n").unwrap_err();

        match err.type_ref() {
            ItemsErrorType::UnterminatedQuote { line, text } => {
                assert_eq!(*line, 2);
                assert_eq!(text, "\"Two");
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(err.body().contains("\"Two"));
    }
}
