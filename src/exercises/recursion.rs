//! Recursão.

use crate::{KataError, KataResult};

/// Maior `n` cujo fatorial cabe em `u64`.
pub const MAX_FACTORIAL_INPUT: u64 = 20;

/// Calcula `n!` recursivamente.
///
/// # Errors
///
/// - [`KataError::FactorialPrecondition`] para `n == 0`: o caso não é
///   definido aqui e não assumimos a convenção `0! = 1`.
/// - [`KataError::FactorialOverflow`] para `n > 20`.
pub fn factorial(n: u64) -> KataResult<u64> {
    if n == 0 {
        return Err(KataError::FactorialPrecondition(n));
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(KataError::FactorialOverflow(n));
    }
    if n == 1 {
        return Ok(1);
    }

    Ok(n * factorial(n - 1)?)
}
