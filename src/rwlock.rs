// SPDX-License-Identifier: MIT OR Apache-2.0
//! A reader-writer lock built as a classic monitor.
//!
//! # The Core Idea
//!
//! The lock tracks its occupancy in two counters — how many readers are active,
//! and whether a writer is active — protected by a single internal mutex. A
//! thread that cannot be admitted parks on a condition variable and re-checks
//! its admission predicate every time it wakes:
//!
//! - **Readers** wait while a writer is active, then increment the reader count.
//! - **Writers** wait while any reader *or* writer is active, then take the
//!   writer slot.
//!
//! Parking atomically releases the internal mutex and re-acquires it on wake,
//! so no two threads ever race on a counter update, and spurious wakeups are
//! harmless because the predicate is always re-checked.
//!
//! At every instant either any number of readers hold the lock, or exactly one
//! writer does — never both. No ordering is promised among readers, and a
//! steady stream of arriving readers can keep a waiting writer parked
//! indefinitely; admission is by predicate, not by queue position.
//!
//! # Features
//!
//! - **Multiple concurrent readers**: admitted freely while no writer is active
//! - **Exclusive writer access**: a writer overlaps with nothing
//! - **Guard-scoped release**: dropping a guard releases the lock on every exit
//!   path, including panic and early return
//! - **Poisoning**: a writer that panics while holding the lock poisons it, and
//!   every later acquisition fails instead of observing torn data
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use monitor_rwlock::RwLock;
//!
//! let lock = RwLock::new(42);
//!
//! // Multiple readers can be active simultaneously.
//! let guard1 = lock.lock_read().unwrap();
//! let guard2 = lock.lock_read().unwrap();
//! assert_eq!(*guard1, 42);
//! assert_eq!(*guard2, 42);
//! drop(guard1);
//! drop(guard2);
//!
//! // A writer gets exclusive access.
//! let mut guard = lock.lock_write().unwrap();
//! *guard = 100;
//! drop(guard);
//!
//! let guard = lock.lock_read().unwrap();
//! assert_eq!(*guard, 100);
//! ```
//!
//! ## Try Lock
//!
//! ```
//! use monitor_rwlock::{RwLock, TryLockError};
//!
//! let lock = RwLock::new("data");
//!
//! // Multiple read locks succeed.
//! let guard1 = lock.try_lock_read().unwrap();
//! let guard2 = lock.try_lock_read().unwrap();
//! assert_eq!(*guard1, "data");
//! assert_eq!(*guard2, "data");
//!
//! // A write lock fails while readers are active.
//! assert!(matches!(
//!     lock.try_lock_write(),
//!     Err(TryLockError::NotAvailable(_))
//! ));
//! ```

mod inner;
mod read;
mod write;


pub use inner::RwLock;
