// SPDX-License-Identifier: MIT OR Apache-2.0
//! A monitor-based reader-writer lock, plus a thread-safe indexed set built on it.
//!
//! The core of this crate is [`RwLock`], a reader-writer lock implemented as a
//! classic monitor: a plain mutex protecting two occupancy counters, paired with
//! condition variables that park threads until their admission predicate holds.
//! Any number of readers may hold the lock at once; a writer holds it alone.
//!
//! [`SharedIndexSet`] is a thin consumer of the lock: an insertion-ordered set
//! whose every operation runs inside the appropriate read or write guard, so it
//! can be shared freely between threads.
//!
//! # Examples
//!
//! ## Lock usage
//!
//! ```
//! use monitor_rwlock::RwLock;
//!
//! let lock = RwLock::new(vec![1, 2, 3]);
//!
//! // Multiple readers may be active at once.
//! let a = lock.lock_read().unwrap();
//! let b = lock.lock_read().unwrap();
//! assert_eq!(a.len(), b.len());
//! drop(a);
//! drop(b);
//!
//! // A writer gets exclusive access.
//! let mut w = lock.lock_write().unwrap();
//! w.push(4);
//! drop(w);
//!
//! assert_eq!(lock.with_read(|v| v.len()).unwrap(), 4);
//! ```
//!
//! ## Shared set usage
//!
//! ```
//! use monitor_rwlock::SharedIndexSet;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let set = Arc::new(SharedIndexSet::new());
//! let mut handles = vec![];
//!
//! for _ in 0..4 {
//!     let set = Arc::clone(&set);
//!     handles.push(thread::spawn(move || {
//!         for i in 0..10 {
//!             set.insert(i).unwrap();
//!         }
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(set.len().unwrap(), 10);
//! assert_eq!(set.sorted_copy().unwrap(), (0..10).collect::<Vec<_>>());
//! ```

mod error;
pub mod guard;
pub mod indexed_set;
pub mod rwlock;

pub use error::{NotAvailable, Poisoned, TryLockError};
pub use guard::{ReadGuard, WriteGuard};
pub use indexed_set::SharedIndexSet;
pub use rwlock::RwLock;
