// SPDX-License-Identifier: MIT OR Apache-2.0
use super::SharedIndexSet;
use std::sync::{Arc, Barrier};
use std::thread;

/// The sorted union every worker mix below should converge to.
fn expected(max: usize) -> Vec<String> {
    let mut paths: Vec<String> = (1..=max).map(|i| format!("test{i}.txt")).collect();
    paths.sort();
    paths
}

/// Starts every worker behind a shared barrier so they enter their loops
/// together, then joins them, failing the test on any worker panic.
fn run_concurrent(workers: Vec<Box<dyn FnOnce() + Send>>) {
    let barrier = Arc::new(Barrier::new(workers.len()));
    let handles: Vec<_> = workers
        .into_iter()
        .map(|work| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                work();
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
}

/// Forces several write operations.
fn insert_worker(set: Arc<SharedIndexSet<String>>, num: usize) -> Box<dyn FnOnce() + Send> {
    Box::new(move || {
        for i in 1..=num {
            set.insert(format!("test{i}.txt")).unwrap();
        }
    })
}

/// Forces a single write operation.
fn insert_all_worker(set: Arc<SharedIndexSet<String>>, num: usize) -> Box<dyn FnOnce() + Send> {
    Box::new(move || {
        let local: Vec<String> = (1..=num).map(|i| format!("test{i}.txt")).collect();
        set.insert_all(local).unwrap();
    })
}

/// Forces several read operations.
fn copy_worker(set: Arc<SharedIndexSet<String>>, num: usize) -> Box<dyn FnOnce() + Send> {
    Box::new(move || {
        for _ in 0..num {
            set.sorted_copy().unwrap();
        }
    })
}

#[test]
fn test_insert_only() {
    let num = 10;
    let set = Arc::new(SharedIndexSet::new());

    let workers = (0..5).map(|_| insert_worker(Arc::clone(&set), num)).collect();
    run_concurrent(workers);

    assert_eq!(set.sorted_copy().unwrap(), expected(num));
}

#[test]
fn test_insert_all_only() {
    let num = 10;
    let set = Arc::new(SharedIndexSet::new());

    let workers = (0..5)
        .map(|_| insert_all_worker(Arc::clone(&set), num))
        .collect();
    run_concurrent(workers);

    assert_eq!(set.sorted_copy().unwrap(), expected(num));
}

#[test]
fn test_small_double_add_copy() {
    let num = 10;
    let set = Arc::new(SharedIndexSet::new());

    run_concurrent(vec![
        insert_worker(Arc::clone(&set), num),
        copy_worker(Arc::clone(&set), num),
    ]);

    assert_eq!(set.sorted_copy().unwrap(), expected(num));
}

#[test]
fn test_large_double_add_copy() {
    let num = 1000;
    let set = Arc::new(SharedIndexSet::new());

    run_concurrent(vec![
        insert_worker(Arc::clone(&set), num),
        copy_worker(Arc::clone(&set), num),
    ]);

    assert_eq!(set.sorted_copy().unwrap(), expected(num));
}

#[test]
fn test_small_multi_add_copy() {
    let num = 10;
    let set = Arc::new(SharedIndexSet::new());

    let mut workers = Vec::new();
    for _ in 0..5 {
        workers.push(insert_worker(Arc::clone(&set), num));
        workers.push(copy_worker(Arc::clone(&set), num));
    }
    run_concurrent(workers);

    assert_eq!(set.sorted_copy().unwrap(), expected(num));
}

#[test]
fn test_large_multi_add_copy() {
    let num = 1000;
    let set = Arc::new(SharedIndexSet::new());

    let mut workers = Vec::new();
    for _ in 0..5 {
        workers.push(insert_worker(Arc::clone(&set), num));
        workers.push(copy_worker(Arc::clone(&set), num));
    }
    run_concurrent(workers);

    assert_eq!(set.sorted_copy().unwrap(), expected(num));
}

#[test]
fn test_insert_all_is_atomic() {
    let batch = 100;
    let set = Arc::new(SharedIndexSet::new());
    let set_writer = Arc::clone(&set);
    let set_reader = Arc::clone(&set);

    run_concurrent(vec![
        Box::new(move || {
            set_writer.insert_all(0..batch).unwrap();
        }),
        Box::new(move || {
            // Every snapshot sees none or all of the batch, never part of it.
            loop {
                let snapshot = set_reader.unsorted_copy().unwrap();
                assert!(
                    snapshot.is_empty() || snapshot.len() == batch,
                    "observed a partial batch of {} elements",
                    snapshot.len()
                );
                if snapshot.len() == batch {
                    break;
                }
            }
        }),
    ]);
}

#[test]
fn test_snapshot_is_independent() {
    let set = SharedIndexSet::new();
    set.insert_all(["c", "a", "b"]).unwrap();

    let sorted = set.sorted_copy().unwrap();
    let unsorted = set.unsorted_copy().unwrap();

    set.insert("d").unwrap();

    assert_eq!(sorted, vec!["a", "b", "c"]);
    assert_eq!(unsorted, vec!["c", "a", "b"]);
    assert_eq!(set.len().unwrap(), 4);
}

#[test]
fn test_insert_reports_change() {
    let set = SharedIndexSet::new();

    assert!(set.insert(1).unwrap());
    assert!(!set.insert(1).unwrap());
    assert!(set.insert_all([1, 2, 3]).unwrap());
    assert!(!set.insert_all([2, 3]).unwrap());
    assert!(!set.insert_all(std::iter::empty()).unwrap());
}

#[test]
fn test_contains_and_len() {
    let set: SharedIndexSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();

    assert_eq!(set.len().unwrap(), 2);
    assert!(!set.is_empty().unwrap());
    assert!(set.contains("a").unwrap());
    assert!(!set.contains("z").unwrap());
}

#[test]
fn test_poisoned_set_fails_closed() {
    let set: Arc<SharedIndexSet<PanicOnHash>> = Arc::new(SharedIndexSet::new());
    let set_clone = Arc::clone(&set);

    // Panic inside a mutating critical section.
    let result = thread::spawn(move || {
        set_clone.insert(PanicOnHash).unwrap();
    })
    .join();
    assert!(result.is_err());

    assert!(set.len().is_err());
    assert!(set.insert(PanicOnHash).is_err());
}

/// Hashing this type panics, modeling a storage failure mid-mutation.
#[derive(PartialEq, Eq)]
struct PanicOnHash;

impl std::hash::Hash for PanicOnHash {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {
        panic!("storage failure");
    }
}
