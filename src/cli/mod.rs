//! Interface de linha de comando do Kata.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kata - exercícios de funções de primeira classe, closures e memoização.
#[derive(Parser, Debug)]
#[command(name = "kata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "kata.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Saída em JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Multiplica todos os números (0 sem argumentos).
    Multiply {
        /// Números a multiplicar.
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },

    /// Soma os números e entrega o total a um callback.
    Sum {
        /// Números a somar.
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },

    /// Multiplica cada número por um fator, preservando a ordem.
    Map {
        /// Fator aplicado a cada número.
        #[arg(short, long, default_value_t = 2.0, allow_negative_numbers = true)]
        by: f64,

        /// Números de entrada.
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },

    /// Inverte um texto.
    Reverse {
        /// Texto a inverter.
        text: String,
    },

    /// Calcula o fatorial recursivamente.
    Factorial {
        /// Inteiro positivo.
        n: u64,
    },

    /// Cria um usuário e mostra a saudação.
    Greet {
        /// Nome de usuário.
        #[arg(long)]
        username: String,

        /// Nome de exibição.
        #[arg(long)]
        name: String,

        /// E-mail.
        #[arg(long, default_value = "")]
        email: String,

        /// Senha.
        #[arg(long, default_value = "")]
        password: String,

        /// Usa o método acrescentado depois ("Hello World!").
        #[arg(long)]
        hello_world: bool,
    },

    /// Eleva cada número ao quadrado através do cache de memoização.
    Memo {
        /// Números de entrada (repetições vêm do cache).
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Mostra versão.
    Version,
}
