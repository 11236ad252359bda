//! Memoização por closure.
//!
//! Dada uma função de transformação `f`, os wrappers deste módulo produzem
//! um novo "callable" que lembra o resultado de `f` para cada entrada
//! distinta. A segunda chamada com a mesma entrada devolve o resultado
//! guardado sem reinvocar `f`; uma entrada nova sempre dispara `f`.
//!
//! ## Formas disponíveis
//!
//! - [`memoize`] / [`try_memoize`] - closures que carregam o próprio cache
//! - [`Memo`] - cache ilimitado chamável via `&self`
//! - [`LruMemo`] - cache limitado, com descarte LRU
//! - [`SyncMemo`] - cache thread-safe, `f` roda uma única vez por chave
//!
//! ## Exemplo
//!
//! ```rust
//! use kata::memo::memoize;
//!
//! let mut square = memoize(|x: u64| x * x);
//! assert_eq!(square(5), 25);
//! assert_eq!(square(5), 25); // não recalcula
//! assert_eq!(square(6), 36);
//! ```

mod keyed;
mod lru;
mod sync;

pub use keyed::{memoize, try_memoize, Memo};
pub use lru::LruMemo;
pub use sync::SyncMemo;

use serde::Serialize;

/// Estatísticas de um cache de memoização.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Número atual de resultados guardados.
    pub size: usize,

    /// Capacidade máxima (`None` para caches ilimitados).
    pub capacity: Option<usize>,

    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de erros (cache misses).
    pub misses: u64,
}

impl CacheStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hits={} misses={} size={}",
            self.hits, self.misses, self.size
        )?;
        if let Some(capacity) = self.capacity {
            write!(f, " capacity={}", capacity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_without_lookups() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate() {
        let stats = CacheStats {
            size: 1,
            capacity: None,
            hits: 2,
            misses: 1,
        };
        assert!((stats.hit_rate() - 0.666).abs() < 0.01);
    }

    #[test]
    fn test_stats_display() {
        let stats = CacheStats {
            size: 2,
            capacity: Some(10),
            hits: 1,
            misses: 2,
        };
        assert_eq!(stats.to_string(), "hits=1 misses=2 size=2 capacity=10");

        let unbounded = CacheStats {
            capacity: None,
            ..stats
        };
        assert_eq!(unbounded.to_string(), "hits=1 misses=2 size=2");
    }
}
