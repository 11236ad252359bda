//! Memoização limitada com descarte LRU.

use std::hash::Hash;
use std::num::NonZeroUsize;

use lru::LruCache;

use super::CacheStats;
use crate::types::config::{default_cache_capacity, CacheConfig};

/// Cache de resultados com capacidade máxima.
///
/// Quando cheio, o resultado usado há mais tempo é descartado e será
/// recalculado se a entrada aparecer de novo.
pub struct LruMemo<A: Hash + Eq, R, F> {
    func: F,
    cache: LruCache<A, R>,
    hits: u64,
    misses: u64,
}

impl<A, R, F> LruMemo<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    /// Cria um novo memo limitado.
    ///
    /// # Argumentos
    /// - `capacity`: Número máximo de resultados (0 usa a capacidade padrão)
    /// - `func`: Função de transformação
    pub fn new(capacity: usize, func: F) -> Self {
        let cap = NonZeroUsize::new(capacity)
            .or_else(|| NonZeroUsize::new(default_cache_capacity()))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            func,
            cache: LruCache::new(cap),
            hits: 0,
            misses: 0,
        }
    }

    /// Cria um memo com a capacidade da configuração.
    pub fn from_config(config: &CacheConfig, func: F) -> Self {
        Self::new(config.capacity, func)
    }

    /// Devolve `func(arg)`, calculando apenas se não estiver em cache.
    pub fn call(&mut self, arg: A) -> R {
        if let Some(value) = self.cache.get(&arg) {
            self.hits += 1;
            tracing::trace!(hits = self.hits, "LruMemo hit");
            return value.clone();
        }

        self.misses += 1;
        tracing::trace!(misses = self.misses, "LruMemo miss");
        let value = (self.func)(arg.clone());
        // A chave não estava no cache, então qualquer par devolvido é um descarte.
        if self.cache.push(arg, value.clone()).is_some() {
            tracing::debug!(
                capacity = self.cache.cap().get(),
                "LruMemo evicted least recently used result"
            );
        }
        value
    }

    /// Verifica se existe resultado para `arg` (sem alterar a ordem LRU).
    pub fn contains(&self, arg: &A) -> bool {
        self.cache.contains(arg)
    }

    /// Esquece o resultado de `arg`.
    pub fn invalidate(&mut self, arg: &A) -> Option<R> {
        self.cache.pop(arg)
    }

    /// Limpa todo o cache.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.cache.len(),
            capacity: Some(self.cache.cap().get()),
            hits: self.hits,
            misses: self.misses,
        }
    }
}
