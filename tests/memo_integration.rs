//! Testes de integração para a memoização do Kata.

use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread::scope;
use std::time::Duration;

use crossbeam_channel::bounded;
use kata::memo::{memoize, try_memoize, LruMemo, Memo, SyncMemo};
use kata::types::config::Config;

const NUM_THREADS: usize = 8;
const NUM_KEYS: usize = 128;

#[test]
fn test_same_input_invokes_once() {
    let calls = Cell::new(0);
    let mut square = memoize(|x: u64| {
        calls.set(calls.get() + 1);
        x * x
    });

    assert_eq!(square(5), 25);
    assert_eq!(square(5), 25);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_new_input_invokes_again() {
    let calls = Cell::new(0);
    let mut square = memoize(|x: u64| {
        calls.set(calls.get() + 1);
        x * x
    });

    assert_eq!(square(5), 25);
    assert_eq!(square(6), 36);
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_interleaved_inputs() {
    let memo = Memo::new(|x: u64| x * x);

    for x in [1, 2, 1, 3, 2, 1] {
        assert_eq!(memo.call(x), x * x);
    }

    let stats = memo.stats();
    assert_eq!(stats.misses, 3);
    assert_eq!(stats.hits, 3);
    assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_errors_propagate_and_are_retried() {
    let calls = Cell::new(0);
    let mut checked_half = try_memoize(|x: u32| {
        calls.set(calls.get() + 1);
        if x % 2 == 0 {
            Ok(x / 2)
        } else {
            Err(format!("{} é ímpar", x))
        }
    });

    assert_eq!(checked_half(3), Err("3 é ímpar".to_string()));
    assert_eq!(checked_half(3), Err("3 é ímpar".to_string()));
    assert_eq!(checked_half(8), Ok(4));
    assert_eq!(checked_half(8), Ok(4));
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_lru_memo_from_config() {
    let config: Config = toml::from_str("[cache]\ncapacity = 2\n").unwrap();
    let calls = Cell::new(0);
    let mut memo = LruMemo::from_config(&config.cache, |x: u64| {
        calls.set(calls.get() + 1);
        x + 100
    });

    memo.call(1);
    memo.call(2);
    memo.call(3); // Deve evictar 1
    memo.call(1);

    assert_eq!(calls.get(), 4);
    assert_eq!(memo.stats().size, 2);
}

#[test]
fn test_sync_memo_no_duplicate_concurrent() {
    for _ in 0..8 {
        let num_compute = AtomicUsize::new(0);
        let memo = SyncMemo::new(|k: usize| {
            num_compute.fetch_add(1, Ordering::Relaxed);
            k
        });
        let barrier = Barrier::new(NUM_THREADS);

        scope(|s| {
            for _ in 0..NUM_THREADS {
                s.spawn(|| {
                    barrier.wait();
                    for key in 0..NUM_KEYS {
                        memo.call(key);
                    }
                });
            }
        });

        assert_eq!(num_compute.load(Ordering::Relaxed), NUM_KEYS);
    }
}

#[test]
fn test_sync_memo_no_block_disjoint() {
    let (t1_quit_sender, t1_quit_receiver) = bounded::<()>(0);
    let memo = SyncMemo::new(|k: u32| {
        if k == 1 {
            // block T1
            t1_quit_receiver.recv().unwrap();
        }
        k
    });
    let memo = &memo;

    scope(|s| {
        // T1 blocks while computing 1.
        s.spawn(move || memo.call(1));

        // T2 must not be blocked by T1 when computing 2.
        let (t2_done_sender, t2_done_receiver) = bounded(0);
        s.spawn(move || {
            memo.call(2);
            t2_done_sender.send(()).unwrap();
        });

        // If T2 is blocked, then this will time out.
        t2_done_receiver
            .recv_timeout(Duration::from_secs(3))
            .expect("Computing a different key should not block");

        // clean up
        t1_quit_sender.send(()).unwrap();
    });

    assert!(memo.contains(&1));
    assert!(memo.contains(&2));
}
