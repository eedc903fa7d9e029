//! token::words
//!
//! Shell-style word splitting.
//!
//! Splits on whitespace outside quotes. Single- and double-quoted spans
//! join into the surrounding word and the quotes themselves are stripped,
//! so `--msg="hello world"` is one token with the value `--msg=hello world`.
//! Escape-sequence handling is out of scope; an unterminated quote is
//! lenient and consumes to the end of the input.

/// Split `text` into shell-style word tokens.
///
/// # Example
///
/// ```
/// use cmdroute::token::tokenize;
///
/// assert_eq!(tokenize("deploy <env>"), vec!["deploy", "<env>"]);
/// assert_eq!(tokenize("say 'hello world'"), vec!["say", "hello world"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in text.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    tokens.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        tokens.push(current);
    }
    tokens
}
