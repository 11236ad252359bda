//! Tipos de erro do Kata.

use thiserror::Error;

/// Tipo de resultado padrão do Kata.
pub type KataResult<T> = Result<T, KataError>;

/// Erros possíveis no Kata.
#[derive(Error, Debug)]
pub enum KataError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fatorial exige n >= 1, recebido {0}")]
    FactorialPrecondition(u64),

    #[error("Fatorial de {0} não cabe em u64")]
    FactorialOverflow(u64),
}

impl KataError {
    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            KataError::FactorialPrecondition(0).to_string(),
            "Fatorial exige n >= 1, recebido 0"
        );
        assert!(KataError::config("capacidade")
            .to_string()
            .contains("capacidade"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "sumiu");
        let err: KataError = io.into();
        assert!(matches!(err, KataError::Io(_)));
    }
}
