use std::collections::VecDeque;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("series capacity must be at least 1, got {0}")]
    InvalidCapacity(i64),
}

/// Sliding window of memory samples, oldest first.
///
/// The capacity tracks the terminal width, so it changes on resize while the
/// window keeps the most recent values.
#[derive(Debug, Clone)]
pub struct SeriesBuffer {
    values: VecDeque<f64>,
    capacity: usize,
}

impl SeriesBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Capacity for a terminal of the given width: one column less than the width.
    pub fn capacity_for_width(width: u16) -> i64 {
        i64::from(width) - 1
    }

    pub fn push(&mut self, value: f64) {
        self.values.push_back(value);
        if self.values.len() > self.capacity {
            self.values.pop_front();
        }
    }

    /// Rejects non-positive capacities and keeps the previous one.
    pub fn set_capacity(&mut self, capacity: i64) -> Result<(), SeriesError> {
        if capacity < 1 {
            return Err(SeriesError::InvalidCapacity(capacity));
        }
        let capacity =
            usize::try_from(capacity).map_err(|_| SeriesError::InvalidCapacity(capacity))?;
        while self.values.len() > capacity {
            self.values.pop_front();
        }
        self.capacity = capacity;
        Ok(())
    }

    pub fn values(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.back().copied()
    }

    pub fn peak(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
