use super::*;
use log::debug;
use log::info;

use nom::{
    branch::alt,
    bytes::complete::{is_not, take_till},
    character::complete::{char, not_line_ending, space0},
    combinator::{all_consuming, cut, eof, map, opt, peek, recognize, value},
    sequence::{delimited, preceded, terminated},
    IResult,
};

/// A line holding only this marks a missing item
pub const MISSING_MARKER: char = '~';
pub const COMMENT_MARKER: char = '#';
const QUOTE: char = '"';

fn comment(input: &str) -> IResult<&str, &str> {
    preceded(char(COMMENT_MARKER), not_line_ending)(input)
}

fn end_of_entry(input: &str) -> IResult<&str, &str> {
    preceded(space0, alt((eof, recognize(comment))))(input)
}

fn missing(input: &str) -> IResult<&str, Option<&str>> {
    value(None, terminated(char(MISSING_MARKER), peek(end_of_entry)))(input)
}

// Once a quote is opened the line must close it, no falling back to a bare item
fn quoted(input: &str) -> IResult<&str, Option<&str>> {
    map(
        preceded(
            char(QUOTE),
            cut(terminated(take_till(|c: char| c == QUOTE), char(QUOTE))),
        ),
        Some,
    )(input)
}

fn bare(input: &str) -> IResult<&str, Option<&str>> {
    map(is_not("#"), |s: &str| Some(s.trim_end()))(input)
}

/// A single line, `None` if it carries no item at all
fn entry(input: &str) -> IResult<&str, Option<Option<&str>>> {
    delimited(space0, opt(alt((missing, quoted, bare))), end_of_entry)(input)
}

/// Parse an item list, one item per line.
///
/// - blank lines and `#` comments are skipped
/// - `~` on its own is a missing item
/// - `"..."` is taken verbatim, so it may hold `#`, `~` or be empty
/// - anything else is the item text with surrounding whitespace removed
pub fn parse_items(text: &str) -> Result<Vec<Option<String>>, ItemsError> {
    info!("Beginning item list parse");

    let mut items = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        match all_consuming(entry)(line) {
            Ok((_, Some(item))) => {
                debug!("Line {}: {:?}", line_no, item);
                items.push(item.map(str::to_string));
            }
            Ok((_, None)) => debug!("Line {}: skipped", line_no),
            Err(nom::Err::Failure(_)) => {
                return Err(ItemsErrorType::UnterminatedQuote {
                    line: line_no,
                    text: line.to_string(),
                }
                .into());
            }
            Err(_) => {
                return Err(ItemsErrorType::TrailingText {
                    line: line_no,
                    text: line.to_string(),
                }
                .into());
            }
        }
    }

    info!("Finished item list parse with {} items", items.len());

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[Option<&str>]) -> Vec<Option<String>> {
        items.iter().map(|i| i.map(str::to_string)).collect()
    }

    #[test]
    fn bare_and_missing() {
        let text = "One\nTwo\n~\nFour\n";

        let items = parse_items(text).expect("Failed to parse");

        assert_eq!(items, owned(&[Some("One"), Some("Two"), None, Some("Four")]));
    }

    #[test]
    fn skips_blank_and_comments() {
        let text = "# header\n\n  One  \n   \nTwo # trailing note\n~ # gap\r\n";

        let items = parse_items(text).expect("Failed to parse");

        assert_eq!(items, owned(&[Some("One"), Some("Two"), None]));
    }

    #[test]
    fn quoted_is_verbatim() {
        let text = "\"  spaced\"\n\"#hash\"\n\"~\"\n\"\" # empty";

        let items = parse_items(text).expect("Failed to parse");

        assert_eq!(
            items,
            owned(&[Some("  spaced"), Some("#hash"), Some("~"), Some("")])
        );
    }

    #[test]
    fn tilde_inside_text_is_an_item() {
        let items = parse_items("~ not missing\n~~").expect("Failed to parse");

        assert_eq!(items, owned(&[Some("~ not missing"), Some("~~")]));
    }

    #[test]
    fn unterminated_quote() {
        let err = parse_items("One\n\n\"Three").unwrap_err();

        match err.type_ref() {
            ItemsErrorType::UnterminatedQuote { line, .. } => assert_eq!(*line, 3),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn text_after_quote() {
        let err = parse_items("\"One\" Two").unwrap_err();

        match err.type_ref() {
            ItemsErrorType::TrailingText { line, text } => {
                assert_eq!(*line, 1);
                assert_eq!(text, "\"One\" Two");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn empty_text_is_empty_list() {
        assert!(parse_items("").expect("Failed to parse").is_empty());
    }
}
