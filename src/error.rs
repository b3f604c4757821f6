// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for lock acquisition.

/// Error returned when a lock cannot be immediately acquired.
///
/// This error is returned by [`RwLock::try_lock_read`](crate::RwLock::try_lock_read)
/// and [`RwLock::try_lock_write`](crate::RwLock::try_lock_write) when another
/// thread currently holds a conflicting guard.
///
/// # Examples
///
/// ```
/// use monitor_rwlock::{RwLock, TryLockError};
///
/// let lock = RwLock::new(42);
/// let _writer = lock.lock_write().unwrap();
///
/// // A reader cannot enter while a writer is active.
/// match lock.try_lock_read() {
///     Ok(_) => panic!("should not succeed"),
///     Err(TryLockError::NotAvailable(_)) => println!("lock is held by a writer"),
///     Err(TryLockError::Poisoned(_)) => panic!("lock is not poisoned"),
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("lock not available")]
pub struct NotAvailable;

/// Error returned when the lock has been poisoned by a panicking writer.
///
/// A lock becomes poisoned when a thread panics while holding the write guard,
/// or while inside the lock's internal bookkeeping. The protected value may be
/// in a torn state, so every subsequent acquisition fails with this error
/// rather than handing out access silently.
///
/// # Examples
///
/// ```
/// use monitor_rwlock::RwLock;
/// use std::sync::Arc;
/// use std::thread;
///
/// let lock = Arc::new(RwLock::new(0));
/// let lock2 = Arc::clone(&lock);
///
/// let panicked = thread::spawn(move || {
///     let _guard = lock2.lock_write().unwrap();
///     panic!("writer died mid-update");
/// })
/// .join();
/// assert!(panicked.is_err());
///
/// assert!(lock.lock_read().is_err());
/// assert!(lock.lock_write().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("lock poisoned by a panicking writer")]
pub struct Poisoned;

/// Error returned by the non-blocking `try_lock_*` methods.
///
/// Distinguishes plain contention (retry later) from poisoning (the lock is
/// permanently unusable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TryLockError {
    /// Another thread holds a conflicting guard.
    #[error(transparent)]
    NotAvailable(#[from] NotAvailable),
    /// The lock has been poisoned; no further acquisitions will succeed.
    #[error(transparent)]
    Poisoned(#[from] Poisoned),
}
