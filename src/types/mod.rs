//! Tipos compartilhados do Kata.

pub mod config;
pub mod errors;
