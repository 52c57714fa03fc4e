#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selection is empty")]
    Empty,

    #[error("selection is {len} chars, limit is below {max}")]
    TooLong { len: usize, max: usize },
}

/// Trim `raw` and accept it only if it has at least one and fewer than
/// `max_len` characters.
pub fn validate_selection(raw: &str, max_len: usize) -> Result<&str, SelectionError> {
    let word = raw.trim();
    let len = word.chars().count();

    if len == 0 {
        return Err(SelectionError::Empty);
    }
    if len >= max_len {
        return Err(SelectionError::TooLong { len, max: max_len });
    }

    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(validate_selection("", 50), Err(SelectionError::Empty));
        assert_eq!(validate_selection("a", 50), Ok("a"));

        let ok = "a".repeat(49);
        assert_eq!(validate_selection(&ok, 50), Ok(ok.as_str()));

        let long = "a".repeat(50);
        assert_eq!(
            validate_selection(&long, 50),
            Err(SelectionError::TooLong { len: 50, max: 50 })
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(validate_selection("  run \n", 50), Ok("run"));
        assert_eq!(validate_selection(" \t\n ", 50), Err(SelectionError::Empty));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 49 two-byte chars
        let word = "é".repeat(49);
        assert!(validate_selection(&word, 50).is_ok());
    }
}
