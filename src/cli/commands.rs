//! Implementação dos comandos CLI do Kata.

use std::path::PathBuf;

use serde::Serialize;

use crate::exercises::arguments::multiply_arguments;
use crate::exercises::callbacks::{map, sum_array};
use crate::exercises::recursion::factorial;
use crate::exercises::text::ReverseExt;
use crate::exercises::user::{get_user_constructor, HelloWorld, UserOptions};
use crate::memo::{CacheStats, LruMemo};
use crate::types::config::{CacheConfig, Config};
use crate::KataResult;

/// Imprime o produto dos números.
pub fn multiply(numbers: &[f64]) {
    println!("{}", multiply_arguments(numbers));
}

/// Imprime a soma entregue ao callback.
pub fn sum(numbers: &[f64]) {
    sum_array(numbers, |total| println!("{}", total));
}

/// Imprime cada número multiplicado por `by`.
pub fn map_by(numbers: &[f64], by: f64) {
    let mapped = map(numbers, |x| x * by);
    println!("{}", join(&mapped));
}

/// Imprime o texto invertido.
pub fn reverse(text: &str) {
    println!("{}", text.reverse());
}

/// Imprime `n!`.
pub fn factorial_cmd(n: u64) -> KataResult<()> {
    let value = factorial(n)?;
    tracing::debug!(n, value, "Factorial computed");
    println!("{}", value);
    Ok(())
}

/// Cria o usuário e imprime a saudação (ou o usuário em JSON).
pub fn greet(options: UserOptions, hello_world: bool, json: bool) -> KataResult<()> {
    let construct = get_user_constructor();
    let user = construct(options);
    tracing::debug!(user = ?user, "User constructed");

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    let greeting = if hello_world {
        HelloWorld::say_hi(&user)
    } else {
        user.say_hi()
    };
    println!("{}", greeting);
    Ok(())
}

/// Resultado do comando `memo`.
#[derive(Debug, Serialize)]
pub struct MemoReport {
    /// Quadrados, na ordem da entrada.
    pub results: Vec<i128>,

    /// Estatísticas do cache (`None` se desabilitado).
    pub stats: Option<CacheStats>,
}

/// Eleva os números ao quadrado através do memo configurado.
pub fn run_memo(numbers: &[i64], config: &CacheConfig) -> MemoReport {
    let square = |x: i64| {
        tracing::trace!(x, "Computing square");
        i128::from(x) * i128::from(x)
    };

    if !config.enabled {
        tracing::debug!("Cache disabled, computing every input");
        return MemoReport {
            results: numbers.iter().map(|&x| square(x)).collect(),
            stats: None,
        };
    }

    let mut memo = LruMemo::from_config(config, square);
    let results = numbers.iter().map(|&x| memo.call(x)).collect();
    let stats = memo.stats();

    tracing::debug!(
        hits = stats.hits,
        misses = stats.misses,
        hit_rate = stats.hit_rate(),
        "Memo finished"
    );

    MemoReport {
        results,
        stats: Some(stats),
    }
}

/// Imprime o relatório do comando `memo`.
pub fn memo(numbers: &[i64], config: &Config, json: bool) -> KataResult<()> {
    let report = run_memo(numbers, &config.cache);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", join(&report.results));
    match &report.stats {
        Some(stats) => println!("{}", stats),
        None => println!("cache desabilitado"),
    }
    Ok(())
}

/// Initializes configuration in the specified directory.
pub fn init(path: Option<PathBuf>) -> KataResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    // Create directory if it doesn't exist
    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("kata.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    let config = Config::default_config();
    config.save(&config_path)?;

    println!("Kata initialized successfully!");
    println!("Configuration created at: {}", config_path.display());

    Ok(())
}

/// Mostra a versão.
pub fn version() {
    println!("kata {}", env!("CARGO_PKG_VERSION"));
}

fn join<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
