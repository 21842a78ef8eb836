use pathfind_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a ladder word: trimmed, lowercased, non-empty, no inner whitespace
pub fn parse_word(s: &str) -> std::result::Result<String, String> {
    let word = s.trim();
    if word.is_empty() {
        return Err("word must not be empty".to_string());
    }
    if word.chars().any(char::is_whitespace) {
        return Err(format!("word must not contain whitespace: {word:?}"));
    }
    Ok(word.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("json").unwrap(), OutputFormat::Json);
        assert!(parse_format("records")
            .unwrap_err()
            .contains("unknown format: records"));
    }

    #[test]
    fn test_parse_word_lowercases() {
        assert_eq!(parse_word(" Sleep ").unwrap(), "sleep");
    }

    #[test]
    fn test_parse_word_rejects_blank_and_spaces() {
        assert!(parse_word("   ").is_err());
        assert!(parse_word("two words").is_err());
    }
}
