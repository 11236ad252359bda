//! # Kata
//!
//! Exercícios de funções de primeira classe em Rust: callbacks, closures,
//! argumentos variádicos, tipos com métodos, recursão e memoização.
//!
//! ## Módulos
//!
//! - [`exercises`] - Exercícios independentes (callbacks, `map`, fatorial...)
//! - [`memo`] - Wrappers de memoização por closure
//! - [`types`] - Tipos compartilhados (erros e configuração)
//! - `cli` - Interface de linha de comando (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod exercises;
pub mod memo;
pub mod types;

pub use memo::memoize;
pub use types::config::Config;
pub use types::errors::{KataError, KataResult};
