// SPDX-License-Identifier: MIT OR Apache-2.0
use std::cell::UnsafeCell;
use std::fmt::Display;
use std::sync::{Condvar, Mutex};

/// Occupancy counters for the monitor.
///
/// Mutated only while holding the `occupancy` mutex. When `writer` is set the
/// reader count is always zero.
#[derive(Debug, Default)]
pub(crate) struct Occupancy {
    pub(crate) readers: usize,
    pub(crate) writer: bool,
    pub(crate) poisoned: bool,
}

/// A reader-writer lock implemented as a monitor over two occupancy counters.
///
/// This lock allows multiple readers to access the data simultaneously, but
/// only one writer at a time. Writers get exclusive access — no readers or
/// other writers can access the data while a write guard is held.
///
/// Acquisition comes in two flavors for each side:
/// - **`try_lock_read/write`**: non-blocking attempt to acquire the lock
/// - **`lock_read/write`**: parks the calling thread until it can be admitted
///
/// Release is the guard's `Drop`, so the lock is released on every exit path.
///
/// ## Blocking Behavior
///
/// Waiting threads park on a condition variable rather than spinning; they are
/// woken when the release that falsifies their wait predicate happens (the
/// last reader leaving, or the writer leaving) and re-check the predicate
/// before proceeding.
///
/// ## Fairness
///
/// None is promised. Readers are admitted whenever no writer is active, even
/// while writers wait, so a continuous stream of readers can starve a writer.
///
/// # Examples
///
/// ## Basic Reader-Writer Pattern
///
/// ```
/// use monitor_rwlock::RwLock;
///
/// let lock = RwLock::new(0i32);
///
/// // Multiple readers can be active simultaneously.
/// {
///     let reader1 = lock.lock_read().unwrap();
///     let reader2 = lock.lock_read().unwrap();
///     assert_eq!(*reader1, *reader2);
/// } // Both read guards released here.
///
/// // A writer gets exclusive access.
/// {
///     let mut writer = lock.lock_write().unwrap();
///     *writer += 1;
/// } // Write guard released here.
///
/// let value = lock.with_read(|data| *data).unwrap();
/// assert_eq!(value, 1);
/// ```
///
/// ## Concurrent Readers
///
/// ```
/// use monitor_rwlock::RwLock;
/// use std::sync::Arc;
/// use std::thread;
///
/// let shared = Arc::new(RwLock::new(vec![1, 2, 3, 4, 5]));
///
/// let shared1 = Arc::clone(&shared);
/// let handle1 = thread::spawn(move || {
///     shared1.with_read(|vec| vec.iter().sum::<i32>()).unwrap()
/// });
///
/// let shared2 = Arc::clone(&shared);
/// let handle2 = thread::spawn(move || {
///     shared2.with_read(|vec| vec.len()).unwrap()
/// });
///
/// assert_eq!(handle1.join().unwrap(), 15);
/// assert_eq!(handle2.join().unwrap(), 5);
/// ```
#[derive(Debug, Default)]
pub struct RwLock<T> {
    pub(crate) inner: UnsafeCell<T>,
    pub(crate) occupancy: Mutex<Occupancy>,
    /// Readers park here while a writer is active.
    pub(crate) no_writer: Condvar,
    /// Writers park here while any reader or writer is active.
    pub(crate) all_clear: Condvar,
}

impl<T: Display> Display for RwLock<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.try_lock_read() {
            Ok(guard) => Display::fmt(&*guard, f),
            Err(_) => write!(f, "RwLock {{ <locked> }}"),
        }
    }
}

impl<T> From<T> for RwLock<T> {
    fn from(value: T) -> Self {
        RwLock::new(value)
    }
}

unsafe impl<T: Send> Send for RwLock<T> {}
unsafe impl<T: Send + Sync> Sync for RwLock<T> {}

impl<T> RwLock<T> {
    /// Creates a new reader-writer lock with the given initial value.
    ///
    /// Both occupancy counters start at zero; the first acquisition of either
    /// kind succeeds immediately.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitor_rwlock::RwLock;
    ///
    /// let lock = RwLock::new(42);
    /// assert_eq!(*lock.lock_read().unwrap(), 42);
    /// ```
    pub const fn new(value: T) -> RwLock<T> {
        RwLock {
            inner: UnsafeCell::new(value),
            occupancy: Mutex::new(Occupancy {
                readers: 0,
                writer: false,
                poisoned: false,
            }),
            no_writer: Condvar::new(),
            all_clear: Condvar::new(),
        }
    }

    /// Called after the last reader leaves. Only writers can be admitted by
    /// this transition, so only the writer predicate is re-evaluated.
    pub(crate) fn did_unlock_read(&self) {
        self.all_clear.notify_all();
    }

    /// Called after the writer leaves. Both parked readers and parked writers
    /// may now pass their predicate; whichever class wins the internal mutex
    /// first excludes the other.
    pub(crate) fn did_unlock_write(&self) {
        self.no_writer.notify_all();
        self.all_clear.notify_all();
    }
}
