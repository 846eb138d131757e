#![warn(missing_docs)]
//! Библиотека для построения ежедневных отчётов по поручениям на расчёты:
//! перенос даты расчётов на рабочий день и агрегация сумм и рейтингов по датам.

mod accumulator;
mod calendar;
mod error;
mod logging;
mod parser;
mod raw;
mod render;
mod report;
mod report_set;
mod settlement;
mod types;
mod utils;

pub use crate::accumulator::{
    AMOUNT_SCALE, Accumulator, AmountAccumulator, RankingAccumulator, RankingEntry,
};
pub use crate::calendar::BusinessCalendar;
pub use crate::error::ReportError;
pub use crate::logging::{DEFAULT_LOG_DIRECTIVE, log_filter};
pub use crate::raw::{DEFAULT_DATE_FORMAT, InstructionReader, RawInstruction};
pub use crate::render::render;
pub use crate::report::DailyReport;
pub use crate::report_set::{DailyReports, ReportAggregator};
pub use crate::settlement::{GULF_CURRENCIES, SettlementResolver};
pub use crate::types::*;
