//! Compounding batch sizes and minibatching.

use leasener_core::{LeaseNerError, Result};
use serde::{Deserialize, Serialize};

/// Batch-size schedule: `start`, then multiplied by `compound` per batch,
/// clipped at `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchSchedule {
    pub start: f64,
    pub stop: f64,
    pub compound: f64,
}

impl Default for BatchSchedule {
    fn default() -> Self {
        Self {
            start: 1.0,
            stop: 4.0,
            compound: 1.001,
        }
    }
}

impl BatchSchedule {
    pub fn new(start: f64, stop: f64, compound: f64) -> Self {
        Self {
            start,
            stop,
            compound,
        }
    }

    /// Reject schedules whose batch sizes could shrink: values must be
    /// positive and finite, `start <= stop` and `compound >= 1`.
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if !(ok(self.start) && ok(self.stop) && ok(self.compound)) {
            return Err(LeaseNerError::Configuration(format!(
                "batch schedule needs positive finite values, got start={} stop={} compound={}",
                self.start, self.stop, self.compound
            )));
        }
        if self.start > self.stop || self.compound < 1.0 {
            return Err(LeaseNerError::Configuration(format!(
                "batch sizes must grow from start to stop, got start={} stop={} compound={}",
                self.start, self.stop, self.compound
            )));
        }
        Ok(())
    }

    /// An endless iterator over the schedule's values.
    pub fn sizes(&self) -> Compounding {
        Compounding {
            curr: self.start,
            stop: self.stop,
            compound: self.compound,
        }
    }
}

/// Infinite compounding sequence; see [`BatchSchedule`].
#[derive(Debug, Clone)]
pub struct Compounding {
    curr: f64,
    stop: f64,
    compound: f64,
}

impl Iterator for Compounding {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = self.curr.min(self.stop);
        self.curr *= self.compound;
        Some(value)
    }
}

/// Whole batch size for a schedule value, never below one.
pub fn batch_size(value: f64) -> usize {
    (value.floor() as usize).max(1)
}

/// Split `items` into consecutive batches, drawing one size per batch.
///
/// `sizes` is only advanced once per batch produced, so a caller can keep
/// one schedule running across several passes.
pub fn minibatch<'a, T, I>(items: &'a [T], sizes: &mut I) -> Vec<&'a [T]>
where
    I: Iterator<Item = f64>,
{
    let mut batches = Vec::new();
    let mut rest = items;
    while !rest.is_empty() {
        let size = sizes.next().map_or(rest.len(), batch_size).min(rest.len());
        let (batch, tail) = rest.split_at(size);
        batches.push(batch);
        rest = tail;
    }
    batches
}

/// Sizes of the batches one pass over `n` items produces with a fresh schedule.
pub fn batch_sizes(n: usize, schedule: &BatchSchedule) -> Vec<usize> {
    let items = vec![(); n];
    minibatch(&items, &mut schedule.sizes())
        .iter()
        .map(|batch| batch.len())
        .collect()
}
