//! # Tokenizer
//!
//! Splits lease text into tokens for sequence labeling. Words are split on
//! whitespace, then single punctuation characters are peeled off the front
//! and back so that `"2012,"` yields `2012` and `,`.
//!
//! Offsets are Unicode scalar value (char) positions, half-open, matching
//! the offsets used in training annotations. Byte positions are kept
//! alongside for slicing.

/// Characters split off the start of a word.
const PREFIXES: &[char] = &['(', '[', '"', '\'', '“', '‘', '$', '£', '€'];

/// Characters split off the end of a word.
const SUFFIXES: &[char] = &[',', '.', ';', ':', ')', ']', '"', '\'', '”', '’', '!', '?'];

/// A token with positional information in the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text, exactly as it appears in the input
    pub text: String,
    /// Start char offset in the original string
    pub start: usize,
    /// End char offset in the original string (exclusive)
    pub end: usize,
    /// Start byte offset in the original string
    pub byte_start: usize,
    /// End byte offset in the original string (exclusive)
    pub byte_end: usize,
    /// Token index in the sequence
    pub index: usize,
}

/// (char offset, byte offset, char) of one character of a word.
type Located = (usize, usize, char);

/// Whitespace and punctuation tokenizer.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text into a sequence of tokens.
    ///
    /// # Examples
    /// ```
    /// use leasener_core::tokenizer::Tokenizer;
    ///
    /// let tokens = Tokenizer::new().tokenize("effective February 1, 2012,");
    /// let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    /// assert_eq!(texts, ["effective", "February", "1", ",", "2012", ","]);
    /// ```
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut word: Vec<Located> = Vec::new();

        for (char_pos, (byte_pos, c)) in input.char_indices().enumerate() {
            if c.is_whitespace() {
                self.split_word(input, &word, &mut tokens);
                word.clear();
            } else {
                word.push((char_pos, byte_pos, c));
            }
        }
        self.split_word(input, &word, &mut tokens);

        tokens
    }

    /// Emit prefix tokens, the core, then suffix tokens of one word.
    fn split_word(&self, input: &str, word: &[Located], tokens: &mut Vec<Token>) {
        let mut lo = 0;
        let hi = word.len();

        while hi - lo > 1 && PREFIXES.contains(&word[lo].2) {
            self.push(input, &word[lo..lo + 1], tokens);
            lo += 1;
        }

        let mut suffix_start = hi;
        while suffix_start - lo > 1 && SUFFIXES.contains(&word[suffix_start - 1].2) {
            suffix_start -= 1;
        }

        self.push(input, &word[lo..suffix_start], tokens);
        for i in suffix_start..hi {
            self.push(input, &word[i..i + 1], tokens);
        }
    }

    fn push(&self, input: &str, chars: &[Located], tokens: &mut Vec<Token>) {
        let (Some(&(start, byte_start, _)), Some(&(last, last_byte, last_char))) =
            (chars.first(), chars.last())
        else {
            return;
        };
        let byte_end = last_byte + last_char.len_utf8();

        tokens.push(Token {
            text: input[byte_start..byte_end].to_string(),
            start,
            end: last + 1,
            byte_start,
            byte_end,
            index: tokens.len(),
        });
    }

    /// Find the token range `[first, last)` exactly covering the char span
    /// `[start, end)`.
    ///
    /// Returns `None` when the span boundaries fall inside a token or between
    /// tokens without matching one.
    pub fn align_span(tokens: &[Token], start: usize, end: usize) -> Option<(usize, usize)> {
        if start >= end {
            return None;
        }
        let first = tokens.iter().position(|t| t.start == start)?;
        let last = tokens[first..].iter().position(|t| t.end == end)? + first;
        Some((first, last + 1))
    }

    /// Get the original char span for a range of tokens.
    pub fn get_spans(tokens: &[Token], start_idx: usize, end_idx: usize) -> Option<(usize, usize)> {
        if start_idx >= tokens.len() || end_idx > tokens.len() || start_idx >= end_idx {
            return None;
        }

        Some((tokens[start_idx].start, tokens[end_idx - 1].end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        Tokenizer::new()
            .tokenize(input)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_tokenize_basic() {
        let tokens = Tokenizer::new().tokenize("the onset will be on Jan 4, 2019");
        assert_eq!(tokens.len(), 9);
        assert_eq!(tokens[5].text, "Jan");
        assert_eq!(tokens[5].start, 21);
        assert_eq!(tokens[5].end, 24);
        assert_eq!(tokens[7].text, ",");
    }

    #[test]
    fn test_tokenize_prefixes_and_suffixes() {
        assert_eq!(
            texts("(the \"Initial Term\") together"),
            ["(", "the", "\"", "Initial", "Term", "\"", ")", "together"]
        );
        assert_eq!(texts("rent of $1,250.00."), ["rent", "of", "$", "1,250.00", "."]);
    }

    #[test]
    fn test_tokenize_keeps_lone_punctuation() {
        assert_eq!(texts("a - b , c"), ["a", "-", "b", ",", "c"]);
    }

    #[test]
    fn test_tokenize_char_offsets_with_multibyte() {
        let tokens = Tokenizer::new().tokenize("“Tenant.” on May 1, 2020");
        assert_eq!(tokens[0].text, "“");
        assert_eq!(tokens[1].text, "Tenant");
        assert_eq!(tokens[1].start, 1);
        assert_eq!(tokens[1].byte_start, "“".len());
        let may = tokens.iter().find(|t| t.text == "May").unwrap();
        assert_eq!(may.start, 13);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(Tokenizer::new().tokenize("").is_empty());
        assert!(Tokenizer::new().tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_align_span() {
        let text = "the onset will be on Jan 4, 2019 and";
        let tokens = Tokenizer::new().tokenize(text);
        assert_eq!(Tokenizer::align_span(&tokens, 21, 32), Some((5, 9)));
        assert_eq!(Tokenizer::align_span(&tokens, 22, 32), None);
        assert_eq!(Tokenizer::align_span(&tokens, 21, 31), None);
    }

    #[test]
    fn test_get_spans() {
        let tokens = Tokenizer::new().tokenize("ends on June 14, 2034");
        assert_eq!(Tokenizer::get_spans(&tokens, 2, 6), Some((8, 21)));
        assert!(Tokenizer::get_spans(&tokens, 3, 3).is_none());
    }
}
