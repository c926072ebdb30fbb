//! Flow memorization text tools
//!
//! Reduces a passage to the first letter of every word (the classic
//! memory-aid format) and parses verse-numbered text into cards. Line
//! structure, digits, and punctuation survive the reduction untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Regex for runs of letters (one word, compiled once)
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+").unwrap());

/// Regex for a leading verse marker: `4` or `3:16` followed by whitespace
static MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+:\d+|\d+)\s+(.*)$").unwrap());

/// A parsed verse card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    /// Verse marker as written (`"4"`, `"3:16"`); `None` for a heading that
    /// precedes the first marker
    pub number: Option<String>,
    pub text: String,
}

/// Replace every word with its first letter, preserving line structure.
pub fn reduce_text(text: &str) -> String {
    text.split('\n')
        .map(|line| WORD_RE.replace_all(line, |caps: &Captures<'_>| caps[0][..1].to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split verse-numbered text into ordered cards.
///
/// A line starting with a verse marker opens a new card; unmarked lines
/// continue the current one. Text before the first marker becomes a single
/// heading card with no number.
pub fn parse_verses(text: &str) -> Vec<Verse> {
    let mut verses = Vec::new();
    let mut current_number: Option<String> = None;
    let mut current_text = String::new();
    let mut header = String::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = MARKER_RE.captures(line) {
            if !current_text.is_empty() {
                let text = std::mem::take(&mut current_text);
                verses.push(Verse { number: current_number.take(), text: text.trim().to_string() });
            } else if !header.is_empty() && verses.is_empty() {
                verses.push(Verse { number: None, text: header.trim().to_string() });
            }
            current_number = Some(caps[1].to_string());
            current_text = caps[2].to_string();
        } else if current_number.is_some() {
            current_text.push(' ');
            current_text.push_str(line);
        } else {
            if !header.is_empty() {
                header.push(' ');
            }
            header.push_str(line);
        }
    }

    if !current_text.is_empty() {
        verses.push(Verse { number: current_number, text: current_text.trim().to_string() });
    } else if !header.is_empty() && verses.is_empty() {
        verses.push(Verse { number: None, text: header });
    }

    verses
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reduce_keeps_punctuation_and_digits() {
        assert_eq!(
            reduce_text("1 The Lord is my shepherd, I lack nothing."),
            "1 T L i m s, I l n."
        );
    }

    #[test]
    fn reduce_preserves_line_structure() {
        let input = "Psalm 23\n\n1 The Lord is my shepherd";
        let output = reduce_text(input);
        assert_eq!(output.split('\n').count(), 3);
        assert_eq!(output, "P 23\n\n1 T L i m s");
    }

    #[test]
    fn reduce_of_empty_input_is_empty() {
        assert_eq!(reduce_text(""), "");
    }

    #[test]
    fn parse_splits_on_verse_markers() {
        let verses = parse_verses("1 In the beginning\n2 And the earth");
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].number.as_deref(), Some("1"));
        assert_eq!(verses[0].text, "In the beginning");
        assert_eq!(verses[1].number.as_deref(), Some("2"));
    }

    #[test]
    fn parse_accepts_chapter_verse_markers() {
        let verses = parse_verses("3:16 For God so loved the world");
        assert_eq!(verses[0].number.as_deref(), Some("3:16"));
    }

    #[test]
    fn parse_joins_continuation_lines() {
        let input = "4 Even though I walk\nthrough the darkest valley,\n5 You prepare a table";
        let verses = parse_verses(input);
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].text, "Even though I walk through the darkest valley,");
    }

    #[test]
    fn parse_keeps_leading_heading_as_card() {
        let input = "Psalm 23\n\n1 The Lord is my shepherd\n2 He makes me lie down";
        let verses = parse_verses(input);
        assert_eq!(verses.len(), 3);
        assert_eq!(verses[0], Verse { number: None, text: "Psalm 23".to_string() });
        assert_eq!(verses[1].number.as_deref(), Some("1"));
    }

    #[test]
    fn parse_heading_only_input() {
        let verses = parse_verses("A Psalm of David");
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].number, None);
    }

    #[test]
    fn parse_of_empty_input_is_empty() {
        assert!(parse_verses("").is_empty());
        assert!(parse_verses("\n\n").is_empty());
    }
}
