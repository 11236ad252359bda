//! Método de extensão para texto.

/// Acrescenta `reverse` ao tipo de texto sem alterar o tipo global.
pub trait ReverseExt {
    /// Retorna uma cópia com os caracteres em ordem inversa.
    fn reverse(&self) -> String;
}

impl ReverseExt for str {
    // Inverte por `char`; marcas combinantes ficam separadas da letra base.
    fn reverse(&self) -> String {
        self.chars().rev().collect()
    }
}
