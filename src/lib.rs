//! d-ary max-heap
//!
//! This crate provides an array-backed max-heap with a configurable
//! branching factor `d` (the binary heap is the `d = 2` case), together
//! with the textbook operation set: bottom-up build, insert, increase-key,
//! extract-max and delete-at-index.
//!
//! # Features
//!
//! - **Configurable degree**: any `d >= 1`, fixed per heap instance
//! - **Bounded storage**: capacity fixed at construction, up to
//!   [`MAX_CAPACITY`] elements
//! - **Typed errors**: every precondition violation is reported as a
//!   [`HeapError`]; failed operations leave the heap untouched
//!
//! # Example
//!
//! ```rust
//! use dary_maxheap::DaryHeap;
//!
//! let mut heap = DaryHeap::new(8, 3)?;
//! heap.insert(5)?;
//! heap.insert(3)?;
//! heap.insert(8)?;
//! assert_eq!(heap.peek(), Some(8));
//! assert_eq!(heap.extract_max()?, 8);
//! assert_eq!(heap.len(), 2);
//! # Ok::<(), dary_maxheap::HeapError>(())
//! ```

pub mod dary;
pub mod error;
pub mod loader;

// Re-export the main types for convenience
pub use dary::{DaryHeap, MAX_CAPACITY};
pub use error::HeapError;
