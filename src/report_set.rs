//! Отчёты по всем датам расчётов и агрегация пакета поручений.

use std::collections::BTreeMap;
use std::collections::btree_map;

use chrono::NaiveDate;

use crate::report::DailyReport;
use crate::settlement::SettlementResolver;
use crate::types::Instruction;

/// Отчёты, сгруппированные по фактической дате расчётов.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyReports {
    days: BTreeMap<NaiveDate, DailyReport>,
}

impl DailyReports {
    /// Пустой набор.
    #[inline]
    pub const fn new() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    /// Отчёты за дату.
    #[inline]
    pub fn get(&self, date: NaiveDate) -> Option<&DailyReport> {
        self.days.get(&date)
    }

    /// Даты расчётов по возрастанию.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// Отчёты по возрастанию даты.
    pub fn iter(&self) -> impl Iterator<Item = &DailyReport> {
        self.days.values()
    }

    /// Количество дат.
    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Нет ни одной даты.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Учитывает поручение в отчётах его текущей даты расчётов.
    pub fn record(&mut self, instruction: &Instruction) {
        let date = instruction.settlement_date();
        self.days
            .entry(date)
            .or_insert_with(|| {
                tracing::debug!(%date, "opening daily report");
                DailyReport::new(date)
            })
            .record(instruction);
    }

    /// Объединяет частичные агрегаты. Результат не зависит от порядка объединения.
    pub fn merge(&mut self, other: &Self) {
        for (date, report) in &other.days {
            match self.days.entry(*date) {
                btree_map::Entry::Occupied(mut entry) => entry.get_mut().merge(report),
                btree_map::Entry::Vacant(entry) => {
                    entry.insert(report.clone());
                }
            }
        }
    }
}

impl IntoIterator for DailyReports {
    type Item = DailyReport;
    type IntoIter = btree_map::IntoValues<NaiveDate, DailyReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_values()
    }
}

impl<'a> IntoIterator for &'a DailyReports {
    type Item = &'a DailyReport;
    type IntoIter = btree_map::Values<'a, NaiveDate, DailyReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.values()
    }
}

/// Строит ежедневные отчёты по пакету поручений за один проход.
#[derive(Debug, Clone, Default)]
pub struct ReportAggregator {
    resolver: SettlementResolver,
}

impl ReportAggregator {
    /// Агрегатор с заданным резолвером дат расчётов.
    #[inline]
    pub const fn new(resolver: SettlementResolver) -> Self {
        Self { resolver }
    }

    /// Резолвер дат расчётов.
    #[inline]
    pub const fn resolver(&self) -> &SettlementResolver {
        &self.resolver
    }

    /// Переносит даты расчётов на рабочие дни и раскладывает поручения по отчётам.
    ///
    /// Даты расчётов поручений перезаписываются фактическими.
    pub fn aggregate(&self, instructions: &mut [Instruction]) -> DailyReports {
        let mut reports = DailyReports::new();
        for instruction in instructions.iter_mut() {
            self.resolver.resolve(instruction);
            reports.record(instruction);
        }
        tracing::info!(
            instructions = instructions.len(),
            dates = reports.len(),
            "daily reports aggregated"
        );
        reports
    }
}
