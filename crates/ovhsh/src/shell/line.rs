//! Command line splitting and completion helpers.
//!
//! Lines are split with POSIX shell quoting rules, so `record "my host"`
//! yields two tokens.

use crate::error::Result;

pub fn tokenize(line: &str) -> Result<Vec<String>> {
    Ok(shell_words::split(line)?)
}

/// Split a partially typed line into the finished tokens and the token
/// under the cursor. `None` when the line has an unterminated quote.
pub fn split_for_completion(line: &str) -> Option<(Vec<String>, String)> {
    let mut tokens = shell_words::split(line).ok()?;
    let cursor_on_new_token = line.is_empty() || line.ends_with(char::is_whitespace);
    let partial = if cursor_on_new_token {
        String::new()
    } else {
        tokens.pop().unwrap_or_default()
    };
    Some((tokens, partial))
}

/// Text before a trailing `?` completion query. The `?` must stand alone,
/// so `record www?` is a command whose last token is `www?`.
pub fn completion_query(line: &str) -> Option<&str> {
    let before = line.strip_suffix('?')?;
    if before.is_empty() || before.ends_with(char::is_whitespace) {
        Some(before)
    } else {
        None
    }
}

/// Re-join tokens into a line, quoting where needed.
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|token| shell_words::quote(token.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find the longest common prefix among strings.
pub fn longest_common_prefix(items: &[String]) -> String {
    let Some((first, rest)) = items.split_first() else {
        return String::new();
    };
    let mut prefix = first.clone();
    for item in rest {
        let common: usize = prefix
            .chars()
            .zip(item.chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum();
        prefix.truncate(common);
        if prefix.is_empty() {
            break;
        }
    }
    prefix
}

#[cfg(test)]
mod tests {
    use super::{
        completion_query, join_tokens, longest_common_prefix, split_for_completion, tokenize,
    };

    #[test]
    fn tokenize_honours_quotes() {
        let tokens = tokenize(r#"domain example.com record "my host" delete"#).expect("split");
        assert_eq!(
            tokens,
            vec!["domain", "example.com", "record", "my host", "delete"]
        );
        assert!(tokenize("domain \"open").is_err());
    }

    #[test]
    fn split_for_completion_tracks_cursor_token() {
        let (tokens, partial) = split_for_completion("domain li").expect("split");
        assert_eq!(tokens, vec!["domain"]);
        assert_eq!(partial, "li");

        let (tokens, partial) = split_for_completion("domain ").expect("split");
        assert_eq!(tokens, vec!["domain"]);
        assert_eq!(partial, "");

        let (tokens, partial) = split_for_completion("").expect("split");
        assert!(tokens.is_empty());
        assert_eq!(partial, "");
    }

    #[test]
    fn question_mark_must_stand_alone() {
        assert_eq!(completion_query("?"), Some(""));
        assert_eq!(completion_query("domain ?"), Some("domain "));
        assert_eq!(completion_query("domain example.com record www?"), None);
        assert_eq!(completion_query("domain list"), None);
    }

    #[test]
    fn join_quotes_tokens_with_spaces() {
        assert_eq!(join_tokens(&["record", "my host"]), "record 'my host'");
    }

    #[test]
    fn common_prefix_of_candidates() {
        let items = vec!["help".to_string(), "history".to_string()];
        assert_eq!(longest_common_prefix(&items), "h");
        let items = vec!["AAAA".to_string(), "A".to_string()];
        assert_eq!(longest_common_prefix(&items), "A");
        assert_eq!(longest_common_prefix(&[]), "");
    }
}
