//! Error types for heap operations
//!
//! Every failure a [`DaryHeap`](crate::DaryHeap) can report is a precondition
//! violation by the caller, never an internal fault. Operations fail
//! atomically: on error the heap's size and contents are unchanged.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Degree or capacity outside the supported range at construction
    #[error("invalid configuration: degree {degree} (must be >= 1), capacity {capacity} (must be in 1..={max})")]
    InvalidConfiguration {
        degree: usize,
        capacity: usize,
        max: usize,
    },

    /// Initial sequence longer than the maximum supported capacity
    #[error("initial sequence of {len} elements exceeds maximum capacity {max}")]
    CapacityExceeded { len: usize, max: usize },

    /// Insert attempted on a heap already at capacity
    #[error("heap overflow: already holding {capacity} elements")]
    Overflow { capacity: usize },

    /// Extract attempted on an empty heap
    #[error("heap underflow: no elements to extract")]
    Underflow,

    /// Index at or past the current logical size
    #[error("index {index} out of range for heap of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// increase_key given a value below the current key
    #[error("new key {new_key} is smaller than current key {current}")]
    KeyNotIncreasing { current: i64, new_key: i64 },
}
