//! Sparse token features for the entity recognizer.

use crate::tokenizer::Token;

/// Month names and common abbreviations, lowercase.
pub const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec",
];

/// Always-on feature; never dropped out.
pub const BIAS: &str = "bias";

/// Word shape: `X` upper, `x` lower, `d` digit, other chars kept, runs
/// longer than four collapsed. `"February"` becomes `"Xxxxx"`.
pub fn word_shape(word: &str) -> String {
    let mut shape = String::new();
    let mut last = None;
    let mut run = 0;

    for c in word.chars() {
        let class = if c.is_uppercase() {
            'X'
        } else if c.is_lowercase() {
            'x'
        } else if c.is_ascii_digit() {
            'd'
        } else {
            c
        };

        if Some(class) == last {
            run += 1;
        } else {
            run = 1;
            last = Some(class);
        }
        if run <= 4 {
            shape.push(class);
        }
    }

    shape
}

fn is_month(lower: &str) -> bool {
    MONTHS.contains(&lower.trim_end_matches('.'))
}

fn is_ordinal(lower: &str) -> bool {
    let digits = lower.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
        && matches!(&lower[digits.len()..], "st" | "nd" | "rd" | "th")
}

/// Features of the token at `i`, including its ±2 context window.
pub fn token_features(tokens: &[Token], i: usize) -> Vec<String> {
    let token = &tokens[i];
    let text = token.text.as_str();
    let lower = text.to_lowercase();
    let chars: Vec<char> = lower.chars().collect();
    let prefix: String = chars.iter().take(3).collect();
    let suffix: String = chars[chars.len().saturating_sub(3)..].iter().collect();

    let mut features = vec![
        BIAS.to_string(),
        format!("w={lower}"),
        format!("p3={prefix}"),
        format!("s3={suffix}"),
        format!("shape={}", word_shape(text)),
    ];

    if text.chars().all(|c| c.is_ascii_digit()) {
        features.push(format!("digits={}", text.len()));
    }
    if text.chars().next().is_some_and(char::is_uppercase) {
        features.push("title".to_string());
    }
    if text.chars().any(char::is_alphabetic) && !text.chars().any(char::is_lowercase) {
        features.push("upper".to_string());
    }
    if is_month(&lower) {
        features.push("month".to_string());
    }
    if is_ordinal(&lower) {
        features.push("ordinal".to_string());
    }

    for offset in [-2isize, -1, 1, 2] {
        let Some(j) = i.checked_add_signed(offset) else {
            features.push(format!("{offset:+}w=<s>"));
            continue;
        };
        match tokens.get(j) {
            Some(other) => {
                let other_lower = other.text.to_lowercase();
                features.push(format!("{offset:+}w={other_lower}"));
                features.push(format!("{offset:+}shape={}", word_shape(&other.text)));
                if is_month(&other_lower) {
                    features.push(format!("{offset:+}month"));
                }
            }
            None => features.push(format!("{offset:+}w=</s>")),
        }
    }

    features
}

/// Features for every token of a sequence.
pub fn sequence_features(tokens: &[Token]) -> Vec<Vec<String>> {
    (0..tokens.len()).map(|i| token_features(tokens, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Tokenizer;

    #[test]
    fn test_word_shape() {
        assert_eq!(word_shape("February"), "Xxxxx");
        assert_eq!(word_shape("2019"), "dddd");
        assert_eq!(word_shape("20190"), "dddd");
        assert_eq!(word_shape("1,250.00"), "d,ddd.dd");
        assert_eq!(word_shape("LLC"), "XXX");
    }

    #[test]
    fn test_ordinal() {
        assert!(is_ordinal("25th"));
        assert!(is_ordinal("1st"));
        assert!(!is_ordinal("th"));
        assert!(!is_ordinal("2019"));
    }

    #[test]
    fn test_token_features_context() {
        let tokens = Tokenizer::new().tokenize("expire on January 31, 2022");
        let features = token_features(&tokens, 2);

        assert!(features.contains(&"bias".to_string()));
        assert!(features.contains(&"w=january".to_string()));
        assert!(features.contains(&"month".to_string()));
        assert!(features.contains(&"-1w=on".to_string()));
        assert!(features.contains(&"+1shape=dd".to_string()));

        let first = token_features(&tokens, 0);
        assert!(first.contains(&"-2w=<s>".to_string()));
        let last = token_features(&tokens, tokens.len() - 1);
        assert!(last.contains(&"+1w=</s>".to_string()));
        assert!(last.contains(&"digits=4".to_string()));
    }
}
