//! # Labels and BIO Tags
//!
//! The label set active on the recognizer's output layer and the BIO
//! (Begin-Inside-Outside) tag scheme derived from it. Tags are laid out as
//! `O`, then `B-L`, `I-L` for each label in registration order, so adding a
//! label only appends new tag indices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lease commencement date.
pub const START_DATE: &str = "START_DATE";
/// Lease expiry date.
pub const END_DATE: &str = "END_DATE";
/// Any other calendar date.
pub const DATE: &str = "DATE";
/// Companies, agencies, institutions.
pub const ORG: &str = "ORG";
/// Monetary amounts.
pub const MONEY: &str = "MONEY";
/// Countries, cities, states.
pub const GPE: &str = "GPE";
/// People.
pub const PERSON: &str = "PERSON";
/// Non-GPE locations.
pub const LOC: &str = "LOC";
/// Numerals that do not fall under another type.
pub const CARDINAL: &str = "CARDINAL";
/// Buildings, addresses, facilities.
pub const FAC: &str = "FAC";

/// Ordered set of entity labels.
///
/// Insertion order is significant: it fixes tag indices and therefore the
/// move names a persisted model is checked against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Create an empty label set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a label set from labels in order, skipping repeats.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for label in labels {
            set.add(label);
        }
        set
    }

    /// Register a label. Returns `false` if it was already present.
    pub fn add(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.contains(&label) {
            return false;
        }
        self.labels.push(label);
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Position of `label` in registration order.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Number of BIO tags this label set produces.
    pub fn num_tags(&self) -> usize {
        Tag::num_tags(self.len())
    }

    /// Names of every tag in index order, e.g. `["O", "B-END_DATE", "I-END_DATE"]`.
    ///
    /// Used as the round-trip fingerprint of a persisted model.
    pub fn move_names(&self) -> Vec<String> {
        (0..self.num_tags())
            .filter_map(Tag::from_index)
            .map(|tag| tag.name(self))
            .collect()
    }
}

/// A BIO tag referring to a label by its index in a [`LabelSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Outside,
    Begin(usize),
    Inside(usize),
}

impl Tag {
    /// Total number of tags for `num_labels` labels.
    pub fn num_tags(num_labels: usize) -> usize {
        1 + 2 * num_labels
    }

    /// Get the tag index for score matrices.
    pub fn index(&self) -> usize {
        match self {
            Tag::Outside => 0,
            Tag::Begin(label) => 1 + 2 * label,
            Tag::Inside(label) => 2 + 2 * label,
        }
    }

    /// Get tag from index.
    pub fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Tag::Outside),
            n if n % 2 == 1 => Some(Tag::Begin((n - 1) / 2)),
            n => Some(Tag::Inside((n - 2) / 2)),
        }
    }

    pub fn is_begin(&self) -> bool {
        matches!(self, Tag::Begin(_))
    }

    pub fn is_inside(&self) -> bool {
        matches!(self, Tag::Inside(_))
    }

    /// Label index this tag belongs to, if any.
    pub fn label(&self) -> Option<usize> {
        match self {
            Tag::Outside => None,
            Tag::Begin(label) | Tag::Inside(label) => Some(*label),
        }
    }

    /// Whether a sequence may start with this tag.
    pub fn is_valid_start(&self) -> bool {
        !self.is_inside()
    }

    /// Check if transitioning from `from` tag to `to` tag is valid.
    ///
    /// `I-L` may only follow `B-L` or `I-L`; everything else is allowed.
    pub fn is_valid_transition(from: Tag, to: Tag) -> bool {
        match to {
            Tag::Inside(label) => from.label() == Some(label),
            _ => true,
        }
    }

    /// Human-readable tag name using the labels of `labels`.
    pub fn name(&self, labels: &LabelSet) -> String {
        let label = |idx: usize| labels.get(idx).unwrap_or("?").to_string();
        match self {
            Tag::Outside => "O".to_string(),
            Tag::Begin(idx) => format!("B-{}", label(*idx)),
            Tag::Inside(idx) => format!("I-{}", label(*idx)),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Outside => write!(f, "O"),
            Tag::Begin(idx) => write!(f, "B-{idx}"),
            Tag::Inside(idx) => write!(f, "I-{idx}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_index_roundtrip() {
        for idx in 0..Tag::num_tags(4) {
            let tag = Tag::from_index(idx).unwrap();
            assert_eq!(tag.index(), idx);
        }
    }

    #[test]
    fn test_label_set_ignores_repeats() {
        let mut labels = LabelSet::from_labels([START_DATE, END_DATE]);
        assert!(!labels.add(START_DATE));
        assert!(labels.add(DATE));
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.index_of(DATE), Some(2));
    }

    #[test]
    fn test_move_names() {
        let labels = LabelSet::from_labels([START_DATE, END_DATE]);
        assert_eq!(
            labels.move_names(),
            vec!["O", "B-START_DATE", "I-START_DATE", "B-END_DATE", "I-END_DATE"]
        );
    }

    #[test]
    fn test_move_names_extend_on_add() {
        let mut labels = LabelSet::from_labels([END_DATE]);
        let before = labels.move_names();
        labels.add(START_DATE);
        let after = labels.move_names();
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.len(), before.len() + 2);
    }

    #[test]
    fn test_valid_transitions() {
        assert!(Tag::is_valid_transition(Tag::Begin(0), Tag::Inside(0)));
        assert!(Tag::is_valid_transition(Tag::Inside(0), Tag::Inside(0)));
        assert!(Tag::is_valid_transition(Tag::Outside, Tag::Begin(1)));
        assert!(Tag::is_valid_transition(Tag::Inside(1), Tag::Outside));
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(!Tag::is_valid_transition(Tag::Outside, Tag::Inside(0)));
        assert!(!Tag::is_valid_transition(Tag::Begin(0), Tag::Inside(1)));
        assert!(!Tag::is_valid_transition(Tag::Inside(1), Tag::Inside(0)));
        assert!(!Tag::Inside(0).is_valid_start());
    }
}
