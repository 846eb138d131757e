//! Текстовое представление ежедневных отчётов.

use std::fmt;

use crate::accumulator::{Accumulator, AmountAccumulator, RankingAccumulator};
use crate::raw::DEFAULT_DATE_FORMAT;
use crate::report::DailyReport;
use crate::report_set::DailyReports;
use crate::types::ReportKind;

const TITLE: &str = "                DAILY TRADE REPORTING ENGINE";
const RULE: &str = "---------------------------------------------------------";
const INDENT: &str = "    ";

fn write_amount(
    f: &mut fmt::Formatter<'_>,
    kind: ReportKind,
    acc: &AmountAccumulator,
) -> fmt::Result {
    writeln!(f, "{kind}:      ${}", acc.value())
}

fn write_ranking(
    f: &mut fmt::Formatter<'_>,
    kind: ReportKind,
    acc: &RankingAccumulator,
) -> fmt::Result {
    if acc.is_empty() {
        return writeln!(f, "{kind}:     NA");
    }
    writeln!(f, "{kind}:")?;
    writeln!(f, "{INDENT}Rank  |  Entity")?;
    writeln!(f, "{INDENT}------|--------------------")?;
    for (rank, entry) in acc.ranking().iter().enumerate() {
        writeln!(
            f,
            "{INDENT}{:<6}|  {} (${})",
            rank + 1,
            entry.entity,
            entry.amount
        )?;
    }
    Ok(())
}

impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DATE: {}", self.date().format(DEFAULT_DATE_FORMAT))?;
        writeln!(f, "------------------")?;
        for (kind, accumulator) in self.iter() {
            match accumulator {
                Accumulator::Amount(acc) => write_amount(f, kind, acc)?,
                Accumulator::Ranking(acc) => write_ranking(f, kind, acc)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for DailyReports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{RULE}")?;
        for report in self {
            writeln!(f)?;
            write!(f, "{report}")?;
        }
        writeln!(f, "{RULE}")
    }
}

/// Печатает все отчёты в порядке возрастания даты расчётов.
pub fn render(reports: &DailyReports) -> String {
    reports.to_string()
}
