//! Array-backed d-ary max-heap
//!
//! A generalization of the binary heap where every node has up to `d`
//! children. The children of the node at index `i` live at indices
//! `d*i + 1 ..= d*i + d`, and the parent of index `i` is `(i - 1) / d`.
//! Larger degrees give shallower trees (cheaper sift-up) at the cost of
//! comparing more children on the way down.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity        |
//! |-----------------|-------------------|
//! | `build`         | O(n)              |
//! | `insert`        | O(log_d n)        |
//! | `increase_key`  | O(log_d n)        |
//! | `extract_max`   | O(d · log_d n)    |
//! | `delete`        | O(d · log_d n)    |
//! | `peek`          | O(1)              |
//!
//! # Example
//!
//! ```rust
//! use dary_maxheap::DaryHeap;
//!
//! let mut heap = DaryHeap::from_vec(vec![4, 1, 3, 2, 16], 3)?;
//! heap.build();
//! assert_eq!(heap.peek(), Some(16));
//! assert_eq!(heap.extract_max()?, 16);
//! assert_eq!(heap.extract_max()?, 4);
//! # Ok::<(), dary_maxheap::HeapError>(())
//! ```

use crate::error::HeapError;

/// Maximum number of elements a heap may hold.
pub const MAX_CAPACITY: usize = 5000;

/// An array-backed max-heap with a configurable branching factor.
///
/// Keys are plain `i64` values. The heap is bounded: its capacity is fixed
/// at construction and never grows.
///
/// A heap built with [`from_vec`](DaryHeap::from_vec) holds its elements in
/// input order and does not satisfy the max-heap property until
/// [`build`](DaryHeap::build) is called. Every other mutating operation
/// restores the property before returning.
///
/// `i64::MAX` is reserved as the internal sentinel used by
/// [`delete`](DaryHeap::delete); storing it as a real key makes deletion
/// ambiguous (see `delete` for details).
#[derive(Debug, Clone)]
pub struct DaryHeap {
    /// Heap contents in storage order; `keys.len()` is the logical size
    keys: Vec<i64>,
    /// Fixed upper bound on the number of elements
    capacity: usize,
    /// Branching factor, >= 1, fixed for the lifetime of the heap
    degree: usize,
}

impl DaryHeap {
    /// Creates an empty heap with the given capacity and branching factor.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidConfiguration`] if `degree < 1` or `capacity` is
    /// not in `1..=MAX_CAPACITY`.
    pub fn new(capacity: usize, degree: usize) -> Result<Self, HeapError> {
        if degree < 1 || capacity < 1 || capacity > MAX_CAPACITY {
            return Err(HeapError::InvalidConfiguration {
                degree,
                capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(Self {
            keys: Vec::with_capacity(capacity),
            capacity,
            degree,
        })
    }

    /// Creates a heap holding `values` in input order, with capacity
    /// [`MAX_CAPACITY`].
    ///
    /// The max-heap property is *not* established; call
    /// [`build`](DaryHeap::build) before relying on it.
    ///
    /// # Errors
    ///
    /// [`HeapError::CapacityExceeded`] if `values` is longer than
    /// [`MAX_CAPACITY`], [`HeapError::InvalidConfiguration`] if `degree < 1`.
    pub fn from_vec(values: Vec<i64>, degree: usize) -> Result<Self, HeapError> {
        if degree < 1 {
            return Err(HeapError::InvalidConfiguration {
                degree,
                capacity: MAX_CAPACITY,
                max: MAX_CAPACITY,
            });
        }
        if values.len() > MAX_CAPACITY {
            return Err(HeapError::CapacityExceeded {
                len: values.len(),
                max: MAX_CAPACITY,
            });
        }
        Ok(Self {
            keys: values,
            capacity: MAX_CAPACITY,
            degree,
        })
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of elements currently in the heap
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns the fixed capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the branching factor
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the current maximum without removing it, `None` when empty
    pub fn peek(&self) -> Option<i64> {
        self.keys.first().copied()
    }

    /// Returns the contents in storage order (not sorted order)
    pub fn as_slice(&self) -> &[i64] {
        &self.keys
    }

    /// Establishes the max-heap property over the current contents.
    ///
    /// Bottom-up heapify: sift down every node that has at least one child,
    /// in reverse index order, so each subtree is already a valid heap by
    /// the time its ancestor is processed. This ordering is what makes
    /// construction O(n) instead of O(n log n).
    pub fn build(&mut self) {
        if self.keys.len() < 2 {
            return;
        }
        // parent of the last element is the last node with a child
        let last_parent = (self.keys.len() - 2) / self.degree;
        for i in (0..=last_parent).rev() {
            self.sift_down(i);
        }
    }

    /// Inserts a new key.
    ///
    /// # Errors
    ///
    /// [`HeapError::Overflow`] if the heap is at capacity; the heap is
    /// unchanged.
    pub fn insert(&mut self, key: i64) -> Result<(), HeapError> {
        if self.keys.len() == self.capacity {
            return Err(HeapError::Overflow {
                capacity: self.capacity,
            });
        }
        self.keys.push(key);
        self.sift_up(self.keys.len() - 1);
        Ok(())
    }

    /// Raises the key at `index` to `new_key`.
    ///
    /// Only sifts up: raising a key can violate the heap property toward
    /// the root, never toward the leaves. This is not a general key-update
    /// primitive; lowering a key is rejected.
    ///
    /// # Errors
    ///
    /// [`HeapError::IndexOutOfRange`] if `index >= len()`,
    /// [`HeapError::KeyNotIncreasing`] if `new_key` is below the current
    /// key. Either way the heap is unchanged.
    pub fn increase_key(&mut self, index: usize, new_key: i64) -> Result<(), HeapError> {
        if index >= self.keys.len() {
            return Err(HeapError::IndexOutOfRange {
                index,
                size: self.keys.len(),
            });
        }
        if new_key < self.keys[index] {
            return Err(HeapError::KeyNotIncreasing {
                current: self.keys[index],
                new_key,
            });
        }
        self.keys[index] = new_key;
        self.sift_up(index);
        Ok(())
    }

    /// Removes and returns the maximum.
    ///
    /// # Errors
    ///
    /// [`HeapError::Underflow`] if the heap is empty.
    pub fn extract_max(&mut self) -> Result<i64, HeapError> {
        if self.keys.is_empty() {
            return Err(HeapError::Underflow);
        }
        // swap_remove moves the last element into the hole at the root
        let max = self.keys.swap_remove(0);
        if !self.keys.is_empty() {
            self.sift_down(0);
        }
        Ok(max)
    }

    /// Removes the element at `index`, returning its key.
    ///
    /// Implemented by raising the slot to the `i64::MAX` sentinel and then
    /// extracting the maximum, reusing the two existing primitives instead
    /// of a bespoke deletion sift. Consequently `i64::MAX` must not be
    /// stored as a real key: a heap already containing it may see the wrong
    /// element removed, since the sentinel cannot outrank an equal key.
    ///
    /// # Errors
    ///
    /// [`HeapError::IndexOutOfRange`] if `index >= len()`; the heap is
    /// unchanged.
    pub fn delete(&mut self, index: usize) -> Result<i64, HeapError> {
        if index >= self.keys.len() {
            return Err(HeapError::IndexOutOfRange {
                index,
                size: self.keys.len(),
            });
        }
        let removed = self.keys[index];
        self.keys[index] = i64::MAX;
        self.sift_up(index);
        self.extract_max()?;
        Ok(removed)
    }

    /// Index of the k-th child (1-based) of node `i`, `None` when the
    /// arithmetic overflows `usize` (such a child cannot exist)
    fn child(&self, i: usize, k: usize) -> Option<usize> {
        self.degree.checked_mul(i)?.checked_add(k)
    }

    /// Index of the parent of node `i`; call only with `i > 0`
    fn parent(&self, i: usize) -> usize {
        (i - 1) / self.degree
    }

    /// Move the element at `index` up until its parent is no smaller
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = self.parent(index);
            if self.keys[parent] < self.keys[index] {
                self.keys.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `index` down until no child exceeds it.
    ///
    /// Assumes every subtree below `index` already satisfies the heap
    /// property. Among equal maximal children the first in index order
    /// wins.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.keys.len();
        loop {
            let mut largest = index;
            // children are contiguous, so the first index past the end (or
            // past usize) terminates the scan regardless of the degree
            for k in 1..=self.degree {
                match self.child(index, k) {
                    Some(c) if c < len => {
                        if self.keys[c] > self.keys[largest] {
                            largest = c;
                        }
                    }
                    _ => break,
                }
            }
            if largest != index {
                self.keys.swap(index, largest);
                index = largest;
            } else {
                break;
            }
        }
    }
}
