//! Фильтр журналирования для CLI.

use tracing_subscriber::EnvFilter;

/// Директива по умолчанию, если `RUST_LOG` не задан.
pub const DEFAULT_LOG_DIRECTIVE: &str = "trade_settlement_report=info";

/// Строит фильтр событий из директив `RUST_LOG`.
///
/// Пустые или некорректные директивы заменяются [`DEFAULT_LOG_DIRECTIVE`],
/// заданные директивы используются как есть.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}
