// SPDX-License-Identifier: MIT OR Apache-2.0
//! Guard types for the reader-writer lock.
//!
//! This module provides the RAII handles that represent the right to read or
//! write the data protected by an [`RwLock`]. Dropping a guard releases the
//! lock and wakes the threads whose admission predicate the release may have
//! satisfied, so release happens on every exit path — early return, `?`
//! propagation, and panic included.

use std::sync::PoisonError;

use crate::rwlock::RwLock;

/// A guard that provides shared read access to the data protected by an
/// [`RwLock`].
///
/// Created by the read acquisition methods on [`RwLock`]. Any number of
/// `ReadGuard`s can exist simultaneously for the same lock. When the guard is
/// dropped the reader count is decremented; if this reader was the last one
/// out, parked writers are woken to re-check their predicate.
///
/// The guard implements `Deref`, giving direct shared access to the protected
/// data.
///
/// # Examples
///
/// ```
/// use monitor_rwlock::RwLock;
///
/// let lock = RwLock::new(vec![1, 2, 3]);
///
/// {
///     let guard1 = lock.lock_read().unwrap();
///     let guard2 = lock.lock_read().unwrap();
///
///     // Both guards can read simultaneously.
///     assert_eq!(guard1.len(), 3);
///     assert_eq!(guard2[0], 1);
/// } // Both guards dropped, read access released.
/// ```
#[derive(Debug)]
pub struct ReadGuard<'a, T> {
    pub(crate) lock: &'a RwLock<T>,
}

/// A guard that provides exclusive read-write access to the data protected by
/// an [`RwLock`].
///
/// Created by the write acquisition methods on [`RwLock`]. Only one
/// `WriteGuard` can exist at a time, and never alongside a [`ReadGuard`]. When
/// the guard is dropped the writer slot is cleared and all parked threads are
/// woken to re-check their predicates.
///
/// If the holding thread panics while the guard is live, the lock is poisoned
/// on release and every later acquisition fails with
/// [`Poisoned`](crate::Poisoned).
///
/// # Examples
///
/// ```
/// use monitor_rwlock::RwLock;
///
/// let lock = RwLock::new(String::from("hello"));
///
/// {
///     let mut guard = lock.lock_write().unwrap();
///     guard.push_str(", world!");
///     assert_eq!(&*guard, "hello, world!");
/// } // Guard dropped, write access released.
/// ```
#[derive(Debug)]
pub struct WriteGuard<'a, T> {
    pub(crate) lock: &'a RwLock<T>,
}

impl<T> std::ops::Deref for ReadGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        // SAFETY: the reader count is nonzero while this guard lives, so no
        // writer can hold or obtain exclusive access to the cell.
        unsafe { &*self.lock.inner.get() }
    }
}

impl<T> std::ops::Deref for WriteGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        // SAFETY: the writer slot is held while this guard lives, so this is
        // the only access to the cell.
        unsafe { &*self.lock.inner.get() }
    }
}

impl<T> std::ops::DerefMut for WriteGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: as in `deref`, this guard holds the only access.
        unsafe { &mut *self.lock.inner.get() }
    }
}

impl<T> Drop for ReadGuard<'_, T> {
    fn drop(&mut self) {
        // Restore the counters even if the occupancy mutex was poisoned by an
        // unrelated panic; leaking a reader slot would wedge every writer.
        let mut occupancy = self
            .lock
            .occupancy
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        assert!(occupancy.readers > 0);
        occupancy.readers -= 1;
        let last_reader = occupancy.readers == 0;
        drop(occupancy);
        if last_reader {
            self.lock.did_unlock_read();
        }
    }
}

impl<T> Drop for WriteGuard<'_, T> {
    fn drop(&mut self) {
        let mut occupancy = self
            .lock
            .occupancy
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        assert!(occupancy.writer);
        occupancy.writer = false;
        if std::thread::panicking() {
            // The writer died mid-update; the protected value may be torn.
            occupancy.poisoned = true;
        }
        drop(occupancy);
        self.lock.did_unlock_write();
    }
}

// ================================================================================================
// Boilerplate trait implementations
// ================================================================================================

impl<T> AsRef<T> for ReadGuard<'_, T> {
    fn as_ref(&self) -> &T {
        self
    }
}

impl<T> AsRef<T> for WriteGuard<'_, T> {
    fn as_ref(&self) -> &T {
        self
    }
}

impl<T> AsMut<T> for WriteGuard<'_, T> {
    fn as_mut(&mut self) -> &mut T {
        &mut *self
    }
}

impl<T: std::fmt::Display> std::fmt::Display for ReadGuard<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&**self, f)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for WriteGuard<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&**self, f)
    }
}
