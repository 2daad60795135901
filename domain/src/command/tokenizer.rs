//! Shell-style command tokenizer

use super::error::TokenizeError;

/// Split command text into words, honoring single and double quotes and
/// backslash escapes.
pub fn tokenize(content: &str) -> Result<Vec<String>, TokenizeError> {
    shell_words::split(content).map_err(|_| TokenizeError::UnbalancedQuotes)
}

/// Words following the command name.
///
/// The first word is the command itself (`!anipoll`) and is dropped.
pub fn command_arguments(content: &str) -> Result<Vec<String>, TokenizeError> {
    let mut words = tokenize(content)?;
    if !words.is_empty() {
        words.remove(0);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace() {
        assert_eq!(
            tokenize("!anipoll  -s fall\textra").unwrap(),
            vec!["!anipoll", "-s", "fall", "extra"]
        );
    }

    #[test]
    fn test_quotes_group_words() {
        assert_eq!(
            tokenize(r#"!anipoll -t "Best of Fall" 'Other Show'"#).unwrap(),
            vec!["!anipoll", "-t", "Best of Fall", "Other Show"]
        );
    }

    #[test]
    fn test_unterminated_quote_fails() {
        assert_eq!(
            tokenize(r#"!anipoll -t "Best of"#).unwrap_err(),
            TokenizeError::UnbalancedQuotes
        );
        assert!(tokenize("!anipoll 'open").is_err());
    }

    #[test]
    fn test_command_name_is_dropped() {
        assert_eq!(
            command_arguments("!anipoll extra1 extra2").unwrap(),
            vec!["extra1", "extra2"]
        );
    }

    #[test]
    fn test_empty_command() {
        assert!(command_arguments("").unwrap().is_empty());
        assert!(command_arguments("   ").unwrap().is_empty());
        assert!(command_arguments("!anipoll").unwrap().is_empty());
    }
}
