//! Memoização chaveada pela entrada.

use std::cell::{Cell, RefCell};
use std::collections::hash_map::{Entry, HashMap};
use std::hash::Hash;

use super::CacheStats;

/// Envolve `func` numa closure que guarda um resultado por entrada distinta.
///
/// `func` é invocada exatamente uma vez para cada entrada, na primeira
/// ocorrência. Chamadas seguintes com a mesma entrada devolvem uma cópia do
/// resultado guardado.
pub fn memoize<A, R, F>(mut func: F) -> impl FnMut(A) -> R
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    let mut cache: HashMap<A, R> = HashMap::new();

    move |arg: A| match cache.entry(arg) {
        Entry::Occupied(entry) => {
            tracing::trace!("memoize: cache hit");
            entry.get().clone()
        }
        Entry::Vacant(entry) => {
            tracing::trace!("memoize: cache miss");
            let value = func(entry.key().clone());
            entry.insert(value).clone()
        }
    }
}

/// Versão de [`memoize`] para funções que podem falhar.
///
/// Apenas resultados `Ok` são guardados. Um `Err` volta inalterado para quem
/// chamou e a próxima chamada com a mesma entrada invoca `func` de novo.
pub fn try_memoize<A, R, E, F>(mut func: F) -> impl FnMut(A) -> Result<R, E>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(A) -> Result<R, E>,
{
    let mut cache: HashMap<A, R> = HashMap::new();

    move |arg: A| {
        if let Some(value) = cache.get(&arg) {
            tracing::trace!("try_memoize: cache hit");
            return Ok(value.clone());
        }

        tracing::trace!("try_memoize: cache miss");
        let value = func(arg.clone())?;
        cache.insert(arg, value.clone());
        Ok(value)
    }
}

/// Cache ilimitado de resultados, chamável via `&self`.
pub struct Memo<A, R, F> {
    func: F,
    cache: RefCell<HashMap<A, R>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl<A, R, F> Memo<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    /// Cria um novo memo vazio para `func`.
    pub fn new(func: F) -> Self {
        Self {
            func,
            cache: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// Devolve `func(arg)`, calculando apenas na primeira vez.
    pub fn call(&self, arg: A) -> R {
        if let Some(value) = self.cache.borrow().get(&arg) {
            self.hits.set(self.hits.get() + 1);
            tracing::trace!(hits = self.hits.get(), "Memo hit");
            return value.clone();
        }

        self.misses.set(self.misses.get() + 1);
        tracing::trace!(misses = self.misses.get(), "Memo miss");

        let value = (self.func)(arg.clone());
        self.cache.borrow_mut().insert(arg, value.clone());
        value
    }

    /// Verifica se já existe resultado para `arg`.
    pub fn contains(&self, arg: &A) -> bool {
        self.cache.borrow().contains_key(arg)
    }

    /// Número de resultados guardados.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Retorna `true` se nada foi calculado ainda.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Esquece o resultado de `arg`, devolvendo-o se existia.
    pub fn invalidate(&self, arg: &A) -> Option<R> {
        self.cache.borrow_mut().remove(arg)
    }

    /// Limpa todo o cache. As estatísticas são mantidas.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.len(),
            capacity: None,
            hits: self.hits.get(),
            misses: self.misses.get(),
        }
    }
}

impl<A, R, F> std::fmt::Debug for Memo<A, R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memo")
            .field("size", &self.cache.borrow().len())
            .field("hits", &self.hits.get())
            .field("misses", &self.misses.get())
            .finish_non_exhaustive()
    }
}
