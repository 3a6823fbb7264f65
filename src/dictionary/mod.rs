//! Candidate dictionary loading
//!
//! The dictionary is a newline-delimited text file, one candidate password per
//! line. Blank lines are ignored and dictionary order is preserved, since the
//! selector breaks ties by position.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load candidates from a file
///
/// Returns a vector of valid Word instances, skipping blank or invalid lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letter_oracle::dictionary::load_from_file;
///
/// let words = load_from_file("passwords.txt").unwrap();
/// println!("Loaded {} candidates", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

/// Parse dictionary text already held in memory
#[must_use]
pub fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use letter_oracle::dictionary::words_from_slice;
///
/// let words = words_from_slice(&["cat", "dog", "bat"]);
/// assert_eq!(words.len(), 3);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["hunter2", "letmein", "qwerty"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "hunter2");
        assert_eq!(words[1].text(), "letmein");
        assert_eq!(words[2].text(), "qwerty");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["abc", "", "two words", "xyz"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "abc");
        assert_eq!(words[1].text(), "xyz");
    }

    #[test]
    fn parse_lines_skips_blank_lines() {
        let words = parse_lines("alpha\n\n  \nbeta\r\ngamma  \n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn parse_lines_empty_input() {
        assert!(parse_lines("").is_empty());
    }

    #[test]
    fn load_from_file_reads_candidates() {
        let path = std::env::temp_dir().join(format!(
            "letter_oracle_dictionary_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "aab\nabc\n\nxyz\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, words_from_slice(&["aab", "abc", "xyz"]));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file("/definitely/not/here/passwords.txt");
        assert!(result.is_err());
    }
}
