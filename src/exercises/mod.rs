//! Exercícios de funções de primeira classe.
//!
//! Cada submódulo é independente: nenhum estado é compartilhado entre eles.
//!
//! - [`arguments`] - Argumentos variádicos
//! - [`callbacks`] - Callbacks, `for_each` e `map`
//! - [`user`] - Tipo construível com métodos
//! - [`text`] - Método de extensão para inverter texto
//! - [`recursion`] - Fatorial recursivo

pub mod arguments;
pub mod callbacks;
pub mod recursion;
pub mod text;
pub mod user;
