use regex::Regex;

use crate::error::Result;
use crate::labels::DATE;

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

/// Rule-based date matcher.
///
/// The fast, zero-training pipeline component: it recognizes calendar dates
/// as they are written in leases and labels them `DATE`. The statistical
/// recognizer decides whether a date is a lease start or end; this
/// component only supplies the generic label, e.g. when bootstrapping
/// rehearsal examples from raw text.
#[derive(Debug, Clone)]
pub struct DateRuler {
    re_month_day_year: Regex,
    re_ordinal_day_of: Regex,
    re_numeric: Regex,
}

/// A rule match as char offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub start: usize,
    pub end: usize,
    pub label: &'static str,
}

impl DateRuler {
    /// Constructs a new `DateRuler` with pre-compiled regex patterns.
    ///
    /// # Errors
    ///
    /// Returns `LeaseNerError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            // February 1, 2012 / Jan. 4 2019 / June 14th, 2034
            re_month_day_year: Regex::new(&format!(
                r"(?i)\b{MONTH}\.?\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}}\b"
            ))?,
            // 25th day of July, 2017
            re_ordinal_day_of: Regex::new(&format!(
                r"(?i)\b\d{{1,2}}(?:st|nd|rd|th)\s+day\s+of\s+{MONTH}\.?,?\s+\d{{4}}\b"
            ))?,
            // 01/31/2022
            re_numeric: Regex::new(r"\b\d{1,2}/\d{1,2}/(?:\d{4}|\d{2})\b")?,
        })
    }

    /// The labels this component can emit.
    pub fn labels(&self) -> &'static [&'static str] {
        &[DATE]
    }

    /// Find non-overlapping date matches, leftmost-longest across patterns.
    pub fn find(&self, text: &str) -> Vec<RuleMatch> {
        let mut byte_spans: Vec<(usize, usize)> = [
            &self.re_ordinal_day_of,
            &self.re_month_day_year,
            &self.re_numeric,
        ]
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| (m.start(), m.end())))
        .collect();

        // Longest first at equal start, then keep what does not overlap.
        byte_spans.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));
        let mut kept: Vec<(usize, usize)> = Vec::new();
        for span in byte_spans {
            if kept.last().is_none_or(|last| span.0 >= last.1) {
                kept.push(span);
            }
        }

        // Kept spans are sorted and disjoint, so one forward walk converts
        // every byte offset to a char offset.
        let mut byte_pos = 0;
        let mut char_pos = 0;
        let mut to_char = |byte: usize| {
            char_pos += text[byte_pos..byte].chars().count();
            byte_pos = byte;
            char_pos
        };
        kept.into_iter()
            .map(|(start, end)| {
                let start = to_char(start);
                let end = to_char(end);
                RuleMatch {
                    start,
                    end,
                    label: DATE,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surfaces(text: &str) -> Vec<String> {
        let ruler = DateRuler::new().unwrap();
        ruler
            .find(text)
            .into_iter()
            .map(|m| text.chars().skip(m.start).take(m.end - m.start).collect())
            .collect()
    }

    #[test]
    fn test_month_day_year() {
        assert_eq!(
            surfaces("The commencement date of the rental shall be February 1, 2012 and shall expire on January 31, 2022 unless"),
            vec!["February 1, 2012", "January 31, 2022"]
        );
        assert_eq!(surfaces("begin on Jan 4, 2019"), vec!["Jan 4, 2019"]);
    }

    #[test]
    fn test_ordinal_day_of() {
        assert_eq!(
            surfaces("this lease is entered into on this 25th day of July, 2017 between"),
            vec!["25th day of July, 2017"]
        );
    }

    #[test]
    fn test_numeric() {
        assert_eq!(surfaces("expires 01/31/2022."), vec!["01/31/2022"]);
    }

    #[test]
    fn test_offsets_are_chars() {
        let text = "“Lease” made May 1, 2020";
        let ruler = DateRuler::new().unwrap();
        let found = ruler.find(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].start, 13);
        assert_eq!(found[0].end, 24);
        assert_eq!(found[0].label, DATE);
    }

    #[test]
    fn test_many_matches_keep_char_offsets() {
        let clause = "“Term” ends May 1, 2020 or 01/31/2022. ";
        let text = clause.repeat(200);
        let ruler = DateRuler::new().unwrap();
        let found = ruler.find(&text);
        assert_eq!(found.len(), 400);

        let chars: Vec<char> = text.chars().collect();
        for m in &found {
            let surface: String = chars[m.start..m.end].iter().collect();
            assert!(surface == "May 1, 2020" || surface == "01/31/2022", "{surface}");
        }
        let clause_chars = clause.chars().count();
        assert_eq!(found[398].start, 199 * clause_chars + 12);
    }

    #[test]
    fn test_no_dates() {
        assert!(surfaces("consideration of the agreements hereinafter set forth").is_empty());
    }
}
