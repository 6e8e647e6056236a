/// Removes every ASCII punctuation character from `text`.
///
/// The set is fixed and locale independent: ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Token separator: Unicode whitespace plus the ASCII information separators
/// U+001C..=U+001F, which `char::is_whitespace` does not cover.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strips punctuation and prepares `text` for whitespace tokenization.
pub fn normalize(text: &str) -> Tokens {
    Tokens {
        cleaned: strip_punctuation(text),
    }
}

/// Cleaned text that can be iterated into tokens any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokens {
    cleaned: String,
}

impl Tokens {
    pub fn iter(&self) -> TokenIter<'_> {
        TokenIter {
            rest: &self.cleaned,
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn as_str(&self) -> &str {
        &self.cleaned
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(ToOwned::to_owned).collect()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a str;
    type IntoIter = TokenIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the separator-delimited tokens of a [`Tokens`].
#[derive(Debug, Clone)]
pub struct TokenIter<'a> {
    rest: &'a str,
}

impl<'a> Iterator for TokenIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.find(|c: char| !is_separator(c))?;
        let tail = &self.rest[start..];
        let end = tail.find(is_separator).unwrap_or(tail.len());
        let (token, rest) = tail.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_all_ascii_punctuation() {
        let all = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
        assert_eq!(strip_punctuation(all), "");
        assert_eq!(strip_punctuation("don't stop-me now."), "dont stopme now");
    }

    #[test]
    fn keeps_non_ascii_symbols() {
        assert_eq!(strip_punctuation("café — «ok»"), "café — «ok»");
    }

    #[test]
    fn splits_on_whitespace_runs_and_keeps_case() {
        let tokens = normalize("  Hello,\tWorld!!\n\nagain ");
        assert_eq!(tokens.to_vec(), vec!["Hello", "World", "again"]);
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn splits_on_ascii_information_separators() {
        let tokens = normalize("a\u{1c}b\u{1d}c\u{1e}\u{1f}d");
        assert_eq!(tokens.to_vec(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn splits_on_unicode_whitespace() {
        let tokens = normalize("one\u{a0}two\u{2028}three\u{85}four");
        assert_eq!(tokens.to_vec(), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn tokens_are_restartable() {
        let tokens = normalize("a b c");
        let first: Vec<_> = tokens.iter().collect();
        let second: Vec<_> = (&tokens).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_and_punctuation_only_input_yield_no_tokens() {
        assert!(normalize("").is_empty());
        assert!(normalize("... !!! --").is_empty());
    }
}
