//! Reading string pairs for batch comparison.
//!
//! One pair per line. The first comma or tab separates the two values; if
//! there is none, whitespace does. Blank lines and `#` comments are skipped.
//!
//! ```text
//! # plate read, plate expected
//! MH12AB1234,MH12AB1235
//! hello	hellp
//! world worl
//! ```

use crate::error::BatchError;
use std::io::BufRead;

/// Parse pairs from text
pub fn parse_pairs(input: &str) -> Result<Vec<(String, String)>, BatchError> {
    input
        .lines()
        .enumerate()
        .filter_map(|(index, line)| parse_line(index + 1, line).transpose())
        .collect()
}

/// Read pairs from any buffered reader (a file, stdin)
pub fn read_pairs(
    reader: impl BufRead,
    source_name: &str,
) -> Result<Vec<(String, String)>, BatchError> {
    let mut pairs = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| BatchError::ReadInput {
            source_name: source_name.to_string(),
            source,
        })?;
        if let Some(pair) = parse_line(index + 1, &line)? {
            pairs.push(pair);
        }
    }

    tracing::debug!(source = source_name, pairs = pairs.len(), "Read pairs");
    Ok(pairs)
}

fn parse_line(line_number: usize, line: &str) -> Result<Option<(String, String)>, BatchError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let malformed = || BatchError::MalformedLine {
        line: line_number,
        content: trimmed.to_string(),
    };

    let (a, b) = match trimmed.split_once([',', '\t']) {
        Some(split) => split,
        None => trimmed.split_once(char::is_whitespace).ok_or_else(malformed)?,
    };

    let (a, b) = (a.trim(), b.trim());
    if b.contains([',', '\t']) || b.split_whitespace().count() > 1 {
        return Err(malformed());
    }

    Ok(Some((a.to_string(), b.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_separators() {
        let pairs = parse_pairs("AB,AC\nhello\thellp\nworld worl\n").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("AB".to_string(), "AC".to_string()),
                ("hello".to_string(), "hellp".to_string()),
                ("world".to_string(), "worl".to_string()),
            ]
        );
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let pairs = parse_pairs("# header\n\n  MH12AB1234 , MH12AB1235  \n").unwrap();
        assert_eq!(pairs, vec![("MH12AB1234".to_string(), "MH12AB1235".to_string())]);
    }

    #[test]
    fn comma_allows_an_empty_side() {
        let pairs = parse_pairs("AB1234,\n").unwrap();
        assert_eq!(pairs, vec![("AB1234".to_string(), String::new())]);
    }

    #[test]
    fn single_value_is_malformed() {
        let err = parse_pairs("AB,AC\nONLYONE\n").unwrap_err();
        match err {
            BatchError::MalformedLine { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "ONLYONE");
            }
            other => panic!("Unexpected error: {}", other),
        }
    }

    #[test]
    fn three_values_is_malformed() {
        assert!(parse_pairs("A,B,C").is_err());
        assert!(parse_pairs("A B C").is_err());
    }

    #[test]
    fn reads_from_buffered_reader() {
        let input = std::io::Cursor::new("test,best\nstring,strung\n");
        let pairs = read_pairs(input, "memory").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].1, "strung");
    }
}
