//! # Viterbi Decoding
//!
//! Finds the most likely BIO tag sequence given per-token emission scores
//! and a tag-to-tag transition matrix, never producing an `I-L` tag that
//! does not continue an `L` entity.

use crate::error::{LeaseNerError, Result};
use crate::labels::Tag;

/// Viterbi decoder for BIO tag sequences.
#[derive(Debug, Clone)]
pub struct ViterbiDecoder {
    num_tags: usize,
    /// `valid[prev][curr]`
    valid: Vec<Vec<bool>>,
}

impl ViterbiDecoder {
    /// Create a decoder for `num_tags` tags, precomputing the transition mask.
    pub fn new(num_tags: usize) -> Self {
        let mut valid = vec![vec![false; num_tags]; num_tags];
        for (prev_idx, row) in valid.iter_mut().enumerate() {
            for (curr_idx, cell) in row.iter_mut().enumerate() {
                if let (Some(prev), Some(curr)) =
                    (Tag::from_index(prev_idx), Tag::from_index(curr_idx))
                {
                    *cell = Tag::is_valid_transition(prev, curr);
                }
            }
        }
        Self { num_tags, valid }
    }

    pub fn num_tags(&self) -> usize {
        self.num_tags
    }

    /// Decode the optimal tag sequence.
    ///
    /// # Arguments
    /// * `emission_scores` - Matrix of shape [seq_len, num_tags]
    /// * `transition_matrix` - Matrix of shape [num_tags, num_tags], indexed `[prev][curr]`
    ///
    /// # Returns
    /// The optimal tag sequence as indices.
    pub fn decode(
        &self,
        emission_scores: &[Vec<f32>],
        transition_matrix: &[Vec<f32>],
    ) -> Result<Vec<usize>> {
        let seq_len = emission_scores.len();
        if seq_len == 0 {
            return Ok(Vec::new());
        }

        if let Some(row) = emission_scores.iter().find(|row| row.len() != self.num_tags) {
            return Err(LeaseNerError::Decode(format!(
                "emission score dimension mismatch: expected {}, got {}",
                self.num_tags,
                row.len()
            )));
        }
        if transition_matrix.len() != self.num_tags
            || transition_matrix.iter().any(|row| row.len() != self.num_tags)
        {
            return Err(LeaseNerError::Decode(format!(
                "transition matrix must be {n}x{n}",
                n = self.num_tags
            )));
        }

        let mut dp: Vec<Vec<f32>> = vec![vec![f32::NEG_INFINITY; self.num_tags]; seq_len];
        let mut backptr: Vec<Vec<Option<usize>>> = vec![vec![None; self.num_tags]; seq_len];

        for tag in 0..self.num_tags {
            let startable = Tag::from_index(tag).is_some_and(|t| t.is_valid_start());
            if startable {
                dp[0][tag] = emission_scores[0][tag];
            }
        }

        for pos in 1..seq_len {
            for curr_tag in 0..self.num_tags {
                let mut best_score = f32::NEG_INFINITY;
                let mut best_prev = None;

                for prev_tag in 0..self.num_tags {
                    if !self.valid[prev_tag][curr_tag] {
                        continue;
                    }

                    let score = dp[pos - 1][prev_tag]
                        + transition_matrix[prev_tag][curr_tag]
                        + emission_scores[pos][curr_tag];

                    if score > best_score {
                        best_score = score;
                        best_prev = Some(prev_tag);
                    }
                }

                dp[pos][curr_tag] = best_score;
                backptr[pos][curr_tag] = best_prev;
            }
        }

        // Outside is always reachable, so start from it on ties.
        let mut best_final_tag = 0;
        let mut best_final_score = dp[seq_len - 1][0];
        for tag in 1..self.num_tags {
            if dp[seq_len - 1][tag] > best_final_score {
                best_final_score = dp[seq_len - 1][tag];
                best_final_tag = tag;
            }
        }

        let mut path = vec![best_final_tag];
        let mut curr_tag = best_final_tag;

        for pos in (1..seq_len).rev() {
            curr_tag = backptr[pos][curr_tag].unwrap_or(0);
            path.push(curr_tag);
        }

        path.reverse();
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // O, B-0, I-0, B-1, I-1
    const NUM_TAGS: usize = 5;

    fn zero_transitions() -> Vec<Vec<f32>> {
        vec![vec![0.0; NUM_TAGS]; NUM_TAGS]
    }

    fn is_valid_path(path: &[usize]) -> bool {
        let tags: Vec<Tag> = path.iter().map(|&i| Tag::from_index(i).unwrap()).collect();
        tags.first().is_none_or(|t| t.is_valid_start())
            && tags.windows(2).all(|w| Tag::is_valid_transition(w[0], w[1]))
    }

    #[test]
    fn test_viterbi_simple() {
        let decoder = ViterbiDecoder::new(NUM_TAGS);
        let emissions = vec![
            vec![0.0, 1.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0, 0.0],
        ];

        let result = decoder.decode(&emissions, &zero_transitions()).unwrap();
        assert_eq!(result, vec![1, 2, 0]);
    }

    #[test]
    fn test_viterbi_never_starts_inside() {
        let decoder = ViterbiDecoder::new(NUM_TAGS);
        let emissions = vec![vec![0.0, 0.0, 5.0, 0.0, 0.0]];

        let result = decoder.decode(&emissions, &zero_transitions()).unwrap();
        assert_ne!(result[0], 2);
    }

    #[test]
    fn test_viterbi_respects_label_continuity() {
        let decoder = ViterbiDecoder::new(NUM_TAGS);
        // B-0 then a strong I-1: I-1 cannot follow B-0.
        let emissions = vec![
            vec![0.0, 3.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 4.0],
        ];

        let result = decoder.decode(&emissions, &zero_transitions()).unwrap();
        assert!(is_valid_path(&result));
    }

    #[test]
    fn test_viterbi_empty() {
        let decoder = ViterbiDecoder::new(NUM_TAGS);
        let result = decoder.decode(&[], &zero_transitions()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_viterbi_dimension_mismatch() {
        let decoder = ViterbiDecoder::new(NUM_TAGS);
        let emissions = vec![vec![1.0; 3]];
        assert!(decoder.decode(&emissions, &zero_transitions()).is_err());
    }

    #[test]
    fn test_viterbi_single_label_outside_only() {
        let decoder = ViterbiDecoder::new(1);
        let emissions = vec![vec![0.0], vec![0.0]];
        let result = decoder.decode(&emissions, &[vec![0.0]]).unwrap();
        assert_eq!(result, vec![0, 0]);
    }
}
