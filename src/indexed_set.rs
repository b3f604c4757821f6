// SPDX-License-Identifier: MIT OR Apache-2.0
//! A thread-safe insertion-ordered set guarded by the reader-writer lock.
//!
//! [`SharedIndexSet`] wraps an [`indexmap::IndexSet`] and routes every
//! mutating call through a write guard and every observing call through a read
//! guard. The underlying set is never exposed by reference; observations are
//! handed out as independent snapshot copies, so they stay valid after the
//! guard is released and concurrent mutation resumes.
//!
//! Each operation's critical section is a single bounded call into the set —
//! no guard is ever held across caller-supplied iteration or other work of
//! unbounded duration.
//!
//! # Examples
//!
//! ```
//! use monitor_rwlock::SharedIndexSet;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let set = Arc::new(SharedIndexSet::new());
//!
//! // Writers insert concurrently; duplicates collapse.
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let set = Arc::clone(&set);
//!     handles.push(thread::spawn(move || {
//!         set.insert_all(["b", "a", "c"]).unwrap();
//!     }));
//! }
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(set.len().unwrap(), 3);
//! assert!(set.contains("a").unwrap());
//! assert_eq!(set.sorted_copy().unwrap(), vec!["a", "b", "c"]);
//! ```

use std::hash::Hash;

use indexmap::{Equivalent, IndexSet};

use crate::error::Poisoned;
use crate::rwlock::RwLock;

#[cfg(test)]
mod tests;

/// A thread-safe insertion-ordered set.
///
/// All access to the underlying set goes through an internal [`RwLock`]:
/// observations ([`contains`](Self::contains), [`len`](Self::len), the copy
/// methods) share a read guard, mutations ([`insert`](Self::insert),
/// [`insert_all`](Self::insert_all)) take the write guard. The set itself is
/// never handed out by reference, so no caller can bypass the lock.
///
/// Snapshots returned by [`sorted_copy`](Self::sorted_copy) and
/// [`unsorted_copy`](Self::unsorted_copy) are independent copies; later
/// insertions do not affect them.
///
/// # Errors
///
/// Every operation returns `Err(Poisoned)` once a mutating call has panicked
/// mid-update (see [`Poisoned`]); there are no other failure modes.
pub struct SharedIndexSet<E> {
    items: RwLock<IndexSet<E>>,
}

impl<E> Default for SharedIndexSet<E> {
    fn default() -> Self {
        SharedIndexSet::new()
    }
}

impl<E> SharedIndexSet<E> {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitor_rwlock::SharedIndexSet;
    ///
    /// let set: SharedIndexSet<String> = SharedIndexSet::new();
    /// assert!(set.is_empty().unwrap());
    /// ```
    pub fn new() -> Self {
        SharedIndexSet {
            items: RwLock::new(IndexSet::new()),
        }
    }

    /// Returns the number of elements currently in the set.
    ///
    /// The count is a snapshot; concurrent writers may change it immediately
    /// after this call returns.
    pub fn len(&self) -> Result<usize, Poisoned> {
        self.items.with_read(|items| items.len())
    }

    /// Returns whether the set is currently empty.
    pub fn is_empty(&self) -> Result<bool, Poisoned> {
        self.items.with_read(|items| items.is_empty())
    }
}

impl<E: Hash + Eq> SharedIndexSet<E> {
    /// Inserts one element, returning whether the set changed.
    ///
    /// Runs inside the write guard; concurrent readers observe the set either
    /// before or after the insertion, never mid-update.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitor_rwlock::SharedIndexSet;
    ///
    /// let set = SharedIndexSet::new();
    /// assert!(set.insert("a").unwrap());
    /// assert!(!set.insert("a").unwrap());
    /// assert_eq!(set.len().unwrap(), 1);
    /// ```
    pub fn insert(&self, element: E) -> Result<bool, Poisoned> {
        self.items.with_write(|items| items.insert(element))
    }

    /// Inserts a batch of elements in one critical section, returning whether
    /// the set changed.
    ///
    /// The whole batch is applied under a single write guard, so a concurrent
    /// snapshot observes either none or all of it, never a partial batch. The
    /// iterator is drained *before* the guard is taken; only the bounded
    /// insertion loop runs inside the critical section.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitor_rwlock::SharedIndexSet;
    ///
    /// let set = SharedIndexSet::new();
    /// assert!(set.insert_all([3, 1, 2]).unwrap());
    /// assert!(!set.insert_all([1, 2]).unwrap());
    /// assert_eq!(set.sorted_copy().unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn insert_all<I>(&self, elements: I) -> Result<bool, Poisoned>
    where
        I: IntoIterator<Item = E>,
    {
        let elements: Vec<E> = elements.into_iter().collect();
        self.items.with_write(|items| {
            let mut changed = false;
            for element in elements {
                changed |= items.insert(element);
            }
            changed
        })
    }

    /// Returns whether the set currently contains the given element.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitor_rwlock::SharedIndexSet;
    ///
    /// let set = SharedIndexSet::new();
    /// set.insert(String::from("a")).unwrap();
    /// assert!(set.contains("a").unwrap());
    /// assert!(!set.contains("b").unwrap());
    /// ```
    pub fn contains<Q>(&self, element: &Q) -> Result<bool, Poisoned>
    where
        Q: Hash + Equivalent<E> + ?Sized,
    {
        self.items.with_read(|items| items.contains(element))
    }
}

impl<E: Clone> SharedIndexSet<E> {
    /// Returns an independent snapshot of the elements in insertion order.
    ///
    /// The copy is taken under a read guard and is unaffected by insertions
    /// that happen after this call returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitor_rwlock::SharedIndexSet;
    ///
    /// let set = SharedIndexSet::new();
    /// set.insert_all(["c", "a", "b"]).unwrap();
    ///
    /// let snapshot = set.unsorted_copy().unwrap();
    /// set.insert("d").unwrap();
    ///
    /// assert_eq!(snapshot, vec!["c", "a", "b"]);
    /// ```
    pub fn unsorted_copy(&self) -> Result<Vec<E>, Poisoned> {
        self.items.with_read(|items| items.iter().cloned().collect())
    }
}

impl<E: Clone + Ord> SharedIndexSet<E> {
    /// Returns an independent snapshot of the elements in sorted order.
    ///
    /// Only the copy runs under the read guard; sorting happens after the
    /// guard is released.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitor_rwlock::SharedIndexSet;
    ///
    /// let set = SharedIndexSet::new();
    /// set.insert_all([3, 1, 2]).unwrap();
    /// assert_eq!(set.sorted_copy().unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn sorted_copy(&self) -> Result<Vec<E>, Poisoned> {
        let mut copy = self.unsorted_copy()?;
        copy.sort();
        Ok(copy)
    }
}

impl<E: Hash + Eq> FromIterator<E> for SharedIndexSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        SharedIndexSet {
            items: RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for SharedIndexSet<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.items.try_lock_read() {
            Ok(guard) => f.debug_set().entries(guard.iter()).finish(),
            Err(_) => write!(f, "SharedIndexSet {{ <locked> }}"),
        }
    }
}
