//! Memoização thread-safe.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use super::CacheStats;

/// Cache de resultados compartilhável entre threads.
///
/// Chamadas concorrentes com a mesma chave executam `func` uma única vez: a
/// primeira calcula e as demais esperam pelo resultado. Chamadas com chaves
/// diferentes não se bloqueiam, porque o mutex do mapa só é segurado para
/// localizar o slot da chave, nunca durante `func`.
pub struct SyncMemo<A, R, F> {
    func: F,
    slots: Mutex<HashMap<A, Arc<OnceLock<R>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<A, R, F> SyncMemo<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    /// Cria um novo memo vazio para `func`.
    pub fn new(func: F) -> Self {
        Self {
            func,
            slots: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Devolve `func(arg)`, calculando no máximo uma vez por chave.
    pub fn call(&self, arg: A) -> R {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(arg.clone()).or_default())
        };

        let mut computed = false;
        let value = slot.get_or_init(|| {
            computed = true;
            (self.func)(arg)
        });

        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("SyncMemo miss");
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("SyncMemo hit");
        }

        value.clone()
    }

    /// Verifica se já existe resultado calculado para `arg`.
    pub fn contains(&self, arg: &A) -> bool {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(arg)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Número de resultados já calculados.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    /// Retorna `true` se nada foi calculado ainda.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.len(),
            capacity: None,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Barrier;
    use std::thread::scope;

    const NUM_THREADS: usize = 8;
    const NUM_KEYS: usize = 64;

    #[test]
    fn test_sync_memo_sequential() {
        let memo = SyncMemo::new(|x: u64| x * x);
        assert_eq!(memo.call(5), 25);
        assert_eq!(memo.call(5), 25);
        assert_eq!(memo.call(6), 36);

        let stats = memo.stats();
        assert_eq!(stats.size, 2);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
    }

    #[test]
    fn test_sync_memo_no_duplicate_concurrent() {
        let num_compute = AtomicUsize::new(0);
        let memo = SyncMemo::new(|k: usize| {
            num_compute.fetch_add(1, Ordering::Relaxed);
            k * 2
        });
        let barrier = Barrier::new(NUM_THREADS);

        scope(|s| {
            for _ in 0..NUM_THREADS {
                s.spawn(|| {
                    barrier.wait();
                    for key in 0..NUM_KEYS {
                        assert_eq!(memo.call(key), key * 2);
                    }
                });
            }
        });

        assert_eq!(num_compute.load(Ordering::Relaxed), NUM_KEYS);
        assert_eq!(memo.len(), NUM_KEYS);
    }

    #[test]
    fn test_contains() {
        let memo = SyncMemo::new(|x: i32| x);
        assert!(!memo.contains(&1));
        memo.call(1);
        assert!(memo.contains(&1));
        assert!(!memo.is_empty());
    }
}
