// SPDX-License-Identifier: MIT OR Apache-2.0
use super::inner::RwLock;
use crate::error::{NotAvailable, Poisoned, TryLockError};
use crate::guard::WriteGuard;

impl<T> RwLock<T> {
    /// Attempts to acquire the write guard without blocking.
    ///
    /// Returns immediately with either the exclusive guard or an error.
    /// Writers conflict with everyone, so this fails with
    /// [`TryLockError::NotAvailable`] if any reader or writer is active, and
    /// with [`TryLockError::Poisoned`] once the lock has been poisoned.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitor_rwlock::{RwLock, TryLockError};
    ///
    /// let lock = RwLock::new(0);
    ///
    /// let mut guard = lock.try_lock_write().unwrap();
    /// *guard = 7;
    /// drop(guard);
    ///
    /// // A single reader is enough to keep a writer out.
    /// let _reader = lock.lock_read().unwrap();
    /// assert!(matches!(
    ///     lock.try_lock_write(),
    ///     Err(TryLockError::NotAvailable(_))
    /// ));
    /// ```
    pub fn try_lock_write(&self) -> Result<WriteGuard<'_, T>, TryLockError> {
        let mut occupancy = self.occupancy.lock().map_err(|_| Poisoned)?;
        if occupancy.poisoned {
            return Err(Poisoned.into());
        }
        if occupancy.readers > 0 || occupancy.writer {
            return Err(NotAvailable.into());
        }
        occupancy.writer = true;
        Ok(WriteGuard { lock: self })
    }

    /// Acquires the write guard, parking the calling thread while any reader
    /// or writer is active.
    ///
    /// The thread waits cooperatively on the lock's condition variable and
    /// re-checks the admission predicate after every wakeup; it proceeds only
    /// on the release that brings the reader count to zero (or the previous
    /// writer leaving). While the returned guard lives, no other guard of
    /// either kind can be handed out.
    ///
    /// # Errors
    ///
    /// Returns [`Poisoned`] if a previous writer panicked while holding the
    /// lock.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitor_rwlock::RwLock;
    ///
    /// let lock = RwLock::new(String::from("hello"));
    ///
    /// let mut guard = lock.lock_write().unwrap();
    /// guard.push_str(", world");
    /// drop(guard);
    ///
    /// assert_eq!(*lock.lock_read().unwrap(), "hello, world");
    /// ```
    pub fn lock_write(&self) -> Result<WriteGuard<'_, T>, Poisoned> {
        let mut occupancy = self.occupancy.lock().map_err(|_| Poisoned)?;
        while occupancy.readers > 0 || occupancy.writer {
            occupancy = self.all_clear.wait(occupancy).map_err(|_| Poisoned)?;
        }
        if occupancy.poisoned {
            return Err(Poisoned);
        }
        occupancy.writer = true;
        Ok(WriteGuard { lock: self })
    }

    /// Accesses the protected data with a mutating closure.
    ///
    /// Acquires the write guard, runs the closure with an exclusive reference
    /// to the data, and releases the guard before returning.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitor_rwlock::RwLock;
    ///
    /// let lock = RwLock::new(vec![1, 2, 3]);
    ///
    /// let len = lock
    ///     .with_write(|data| {
    ///         data.push(4);
    ///         data.len()
    ///     })
    ///     .unwrap();
    /// assert_eq!(len, 4);
    /// ```
    pub fn with_write<R, F: FnOnce(&mut T) -> R>(&self, f: F) -> Result<R, Poisoned> {
        let mut guard = self.lock_write()?;
        Ok(f(&mut guard))
    }
}
