//! Shell-like line splitting
//!
//! Whitespace separates words outside quotes. `"` and `'` open a quoted span
//! that runs to the matching quote, and a backslash escapes the next
//! character wherever it appears. Quoted spans glued to other text join
//! the same word.

use crate::error::{ParseError, ParseResult};

/// Whether a raw line should be skipped before tokenizing (blank or `#` comment)
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Split a line into words
pub fn tokenize(line: &str) -> ParseResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    // Set once a word has started, so `""` still yields an empty word
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(next) => {
                    current.push(next);
                    in_word = true;
                }
                None => return Err(ParseError::DanglingEscape(line.to_string())),
            },
            q if Some(q) == quote => quote = None,
            c if quote.is_some() => current.push(c),
            '"' | '\'' => {
                quote = Some(c);
                in_word = true;
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(quote) = quote {
        return Err(ParseError::UnclosedQuote {
            quote,
            line: line.to_string(),
        });
    }

    if in_word {
        words.push(current);
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_quoted_value() {
        let words = tokenize(r#"@var name "hello world""#).unwrap();
        assert_eq!(words, vec!["@var", "name", "hello world"]);
    }

    #[test]
    fn test_tokenize_single_quotes() {
        let words = tokenize("echo 'a  b' c").unwrap();
        assert_eq!(words, vec!["echo", "a  b", "c"]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        let words = tokenize("  cargo \t build   --release ").unwrap();
        assert_eq!(words, vec!["cargo", "build", "--release"]);
    }

    #[test]
    fn test_unterminated_quote() {
        let result = tokenize(r#"echo "oops"#);
        assert_eq!(
            result,
            Err(ParseError::UnclosedQuote {
                quote: '"',
                line: r#"echo "oops"#.to_string()
            })
        );
    }

    #[test]
    fn test_backslash_escapes() {
        assert_eq!(tokenize(r"a\ b c").unwrap(), vec!["a b", "c"]);
        assert_eq!(tokenize(r#"say "x\"y""#).unwrap(), vec!["say", "x\"y"]);
        assert_eq!(tokenize(r"say 'it\'s'").unwrap(), vec!["say", "it's"]);
    }

    #[test]
    fn test_dangling_escape() {
        assert!(matches!(
            tokenize(r"echo \"),
            Err(ParseError::DanglingEscape(_))
        ));
    }

    #[test]
    fn test_adjacent_quotes_concatenate() {
        assert_eq!(tokenize(r#"pre"mid"'post'"#).unwrap(), vec!["premidpost"]);
    }

    #[test]
    fn test_empty_quotes() {
        assert_eq!(tokenize(r#"@var x """#).unwrap(), vec!["@var", "x", ""]);
        assert_eq!(tokenize(r#"a"" b"#).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_template_braces_survive() {
        assert_eq!(
            tokenize("@echo {{greeting}} world").unwrap(),
            vec!["@echo", "{{greeting}}", "world"]
        );
    }

    #[test]
    fn test_is_skippable() {
        assert!(is_skippable(""));
        assert!(is_skippable("   \t"));
        assert!(is_skippable("  # note"));
        assert!(!is_skippable("echo # not a comment"));
    }
}
