//! Concrete equivalence predicates.
//!
//! [`NormalizedText`] follows the usual license-matching conventions: texts
//! that differ only in letter case, whitespace layout, quote and dash
//! glyphs, list bullets, or the spelling of the copyright symbol compare
//! equal.

use crate::error::{EquivalenceError, Result};
use crate::traits::EquivalencePredicate;

/// Default upper bound on the size of a text accepted for comparison.
pub const DEFAULT_MAX_TEXT_LEN: usize = 1024 * 1024;

/// Byte-for-byte equality.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactText;

impl EquivalencePredicate for ExactText {
    fn is_equivalent(&self, a: &str, b: &str) -> Result<bool> {
        Ok(a == b)
    }
}

/// Equality after normalization.
#[derive(Clone, Debug)]
pub struct NormalizedText {
    ignore_url_scheme: bool,
    max_text_len: usize,
}

impl NormalizedText {
    pub fn new() -> Self {
        Self {
            ignore_url_scheme: true,
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }

    /// Treat `http://` and `https://` as the same token prefix.
    pub fn ignore_url_scheme(mut self, ignore: bool) -> Self {
        self.ignore_url_scheme = ignore;
        self
    }

    pub fn max_text_len(mut self, limit: usize) -> Self {
        self.max_text_len = limit;
        self
    }

    /// The canonical form two texts are compared by.
    pub fn normalize(&self, text: &str) -> String {
        let mut folded = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '`' | '\u{00B4}' => {
                    folded.push('\'')
                }
                '"' | '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' => folded.push('\''),
                '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}'
                | '\u{2212}' => folded.push('-'),
                '\u{00A9}' => folded.push_str("(c)"),
                c if c.is_whitespace() => folded.push(' '),
                c => folded.extend(c.to_lowercase()),
            }
        }

        let mut out = String::with_capacity(folded.len());
        for token in folded.split(' ').filter(|t| !t.is_empty()) {
            if is_bullet(token) {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            match token.strip_prefix("https://") {
                Some(rest) if self.ignore_url_scheme => {
                    out.push_str("http://");
                    out.push_str(rest);
                }
                _ => out.push_str(token),
            }
        }
        out
    }

    fn check_len(&self, text: &str) -> Result<()> {
        if text.len() > self.max_text_len {
            return Err(EquivalenceError::TextTooLarge {
                len: text.len(),
                limit: self.max_text_len,
            });
        }
        Ok(())
    }
}

impl Default for NormalizedText {
    fn default() -> Self {
        Self::new()
    }
}

impl EquivalencePredicate for NormalizedText {
    fn is_equivalent(&self, a: &str, b: &str) -> Result<bool> {
        self.check_len(a)?;
        self.check_len(b)?;
        if a == b {
            return Ok(true);
        }
        Ok(self.normalize(a) == self.normalize(b))
    }
}

/// List markers that carry no license meaning: `*`, `-`, `o`, and
/// enumerators such as `1.` or `12)`.
fn is_bullet(token: &str) -> bool {
    if matches!(token, "*" | "-" | "\u{2022}" | "\u{00B7}" | "o") {
        return true;
    }
    match token.strip_suffix(['.', ')']) {
        Some(digits) => {
            !digits.is_empty() && digits.len() <= 3 && digits.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn eq(a: &str, b: &str) -> bool {
        NormalizedText::new().is_equivalent(a, b).unwrap()
    }

    #[test]
    fn exact_is_strict() {
        assert!(ExactText.is_equivalent("abc", "abc").unwrap());
        assert!(!ExactText.is_equivalent("abc", "ABC").unwrap());
    }

    #[test]
    fn case_and_whitespace_ignored() {
        assert!(eq("Permission is  granted\n\tto use", "permission is granted to use"));
    }

    #[test]
    fn quotes_and_dashes_unified() {
        assert!(eq("the \u{201C}Software\u{201D}", "the \"software\""));
        assert!(eq("non\u{2013}infringement", "non-infringement"));
    }

    #[test]
    fn copyright_symbol_unified() {
        assert!(eq("\u{00A9} 2014 Acme", "(C) 2014 Acme"));
    }

    #[test]
    fn bullets_ignored() {
        assert!(eq("* keep notices\n* no warranty", "keep notices no warranty"));
        assert!(eq("1. keep notices\n2. no warranty", "keep notices no warranty"));
    }

    #[test]
    fn url_scheme_option() {
        let a = "see https://example.org/license";
        let b = "see http://example.org/license";
        assert!(NormalizedText::new().is_equivalent(a, b).unwrap());
        assert!(!NormalizedText::new()
            .ignore_url_scheme(false)
            .is_equivalent(a, b)
            .unwrap());
    }

    #[test]
    fn different_words_differ() {
        assert!(!eq("you may copy", "you may not copy"));
    }

    #[test]
    fn oversized_text_is_an_error() {
        let p = NormalizedText::new().max_text_len(4);
        let err = p.is_equivalent("12345", "1").unwrap_err();
        assert_eq!(err, EquivalenceError::TextTooLarge { len: 5, limit: 4 });
    }

    proptest! {
        #[test]
        fn reflexive(text in ".{0,200}") {
            prop_assert!(NormalizedText::new().is_equivalent(&text, &text).unwrap());
        }

        #[test]
        fn symmetric(a in "[a-zA-Z ]{0,40}", b in "[a-zA-Z ]{0,40}") {
            let p = NormalizedText::new();
            prop_assert_eq!(p.is_equivalent(&a, &b).unwrap(), p.is_equivalent(&b, &a).unwrap());
        }

        #[test]
        fn normalize_is_idempotent(text in ".{0,200}") {
            let p = NormalizedText::new();
            let once = p.normalize(&text);
            prop_assert_eq!(p.normalize(&once), once.clone());
        }
    }
}
