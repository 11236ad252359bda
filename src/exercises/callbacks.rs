//! Callbacks: funções passadas como argumento e invocadas depois.
//!
//! Os erros dos callbacks nunca são tratados aqui. Quando o callback devolve
//! um valor (por exemplo um `Result`), esse valor volta inalterado para quem
//! chamou.

use std::iter::Sum;

/// Invoca `cb` uma vez e devolve o que ele devolver.
pub fn invoke_callback<F, R>(cb: F) -> R
where
    F: FnOnce() -> R,
{
    cb()
}

/// Soma `numbers` e passa o total para `cb`.
///
/// A soma de uma sequência vazia é zero.
pub fn sum_array<T, F, R>(numbers: &[T], cb: F) -> R
where
    T: Copy + Sum<T>,
    F: FnOnce(T) -> R,
{
    cb(numbers.iter().copied().sum())
}

/// Passa cada elemento de `arr` para `cb`, em ordem.
pub fn for_each<T, F>(arr: &[T], cb: F)
where
    F: FnMut(&T),
{
    arr.iter().for_each(cb);
}

/// Cria um novo vetor com `cb` aplicado a cada elemento, preservando ordem e
/// tamanho.
pub fn map<T, U, F>(arr: &[T], cb: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    arr.iter().map(cb).collect()
}

/// Como [`for_each`], mas para no primeiro erro e o devolve.
pub fn try_for_each<T, E, F>(arr: &[T], cb: F) -> Result<(), E>
where
    F: FnMut(&T) -> Result<(), E>,
{
    arr.iter().try_for_each(cb)
}

/// Como [`map`], mas para no primeiro erro e o devolve.
pub fn try_map<T, U, E, F>(arr: &[T], cb: F) -> Result<Vec<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    arr.iter().map(cb).collect()
}
