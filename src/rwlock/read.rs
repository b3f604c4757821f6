// SPDX-License-Identifier: MIT OR Apache-2.0
use super::inner::RwLock;
use crate::error::{NotAvailable, Poisoned, TryLockError};
use crate::guard::ReadGuard;

impl<T> RwLock<T> {
    /// Attempts to acquire a read guard without blocking.
    ///
    /// Returns immediately with either a guard to the protected data or an
    /// error. Multiple readers can hold guards simultaneously, so this fails
    /// with [`TryLockError::NotAvailable`] only if a writer is currently
    /// active, and with [`TryLockError::Poisoned`] once the lock has been
    /// poisoned.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitor_rwlock::RwLock;
    ///
    /// let lock = RwLock::new("data");
    ///
    /// // Multiple readers can acquire guards.
    /// let guard1 = lock.try_lock_read().unwrap();
    /// let guard2 = lock.try_lock_read().unwrap();
    /// assert_eq!(*guard1, "data");
    /// assert_eq!(*guard2, "data");
    /// ```
    ///
    /// ## A Writer Blocks Readers
    ///
    /// ```
    /// use monitor_rwlock::{RwLock, TryLockError};
    ///
    /// let lock = RwLock::new(0);
    /// let _writer = lock.lock_write().unwrap();
    ///
    /// assert!(matches!(
    ///     lock.try_lock_read(),
    ///     Err(TryLockError::NotAvailable(_))
    /// ));
    /// ```
    pub fn try_lock_read(&self) -> Result<ReadGuard<'_, T>, TryLockError> {
        let mut occupancy = self.occupancy.lock().map_err(|_| Poisoned)?;
        if occupancy.poisoned {
            return Err(Poisoned.into());
        }
        if occupancy.writer {
            return Err(NotAvailable.into());
        }
        occupancy.readers += 1;
        Ok(ReadGuard { lock: self })
    }

    /// Acquires a read guard, parking the calling thread while a writer is
    /// active.
    ///
    /// The thread waits cooperatively on the lock's condition variable — no
    /// spinning — and re-checks the admission predicate after every wakeup.
    /// Other active readers never delay this call; once no writer is active
    /// the reader count is incremented and the guard is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Poisoned`] if a writer panicked while holding the lock, now
    /// or at any point in the past. The protected data may be torn, so no
    /// further access is handed out.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitor_rwlock::RwLock;
    /// use std::collections::HashMap;
    ///
    /// let lock = RwLock::new(HashMap::from([("key", "value")]));
    ///
    /// // Parks if a writer holds the lock, returns once admitted.
    /// let guard = lock.lock_read().unwrap();
    /// assert_eq!(guard.get("key"), Some(&"value"));
    /// ```
    pub fn lock_read(&self) -> Result<ReadGuard<'_, T>, Poisoned> {
        let mut occupancy = self.occupancy.lock().map_err(|_| Poisoned)?;
        while occupancy.writer {
            occupancy = self.no_writer.wait(occupancy).map_err(|_| Poisoned)?;
        }
        if occupancy.poisoned {
            return Err(Poisoned);
        }
        occupancy.readers += 1;
        Ok(ReadGuard { lock: self })
    }

    /// Accesses the protected data with a read-only closure.
    ///
    /// Acquires a read guard, runs the closure with a shared reference to the
    /// data, and releases the guard before returning. Keeps the critical
    /// section exactly as long as the closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitor_rwlock::RwLock;
    ///
    /// let lock = RwLock::new(vec![1, 2, 3, 4, 5]);
    ///
    /// let sum = lock.with_read(|data| data.iter().sum::<i32>()).unwrap();
    /// assert_eq!(sum, 15);
    ///
    /// let (first, last) = lock
    ///     .with_read(|data| (data.first().copied(), data.last().copied()))
    ///     .unwrap();
    /// assert_eq!(first, Some(1));
    /// assert_eq!(last, Some(5));
    /// ```
    pub fn with_read<R, F: FnOnce(&T) -> R>(&self, f: F) -> Result<R, Poisoned> {
        let guard = self.lock_read()?;
        Ok(f(&guard))
    }
}
