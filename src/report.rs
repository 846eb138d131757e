//! Набор отчётов за одну дату расчётов.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::accumulator::{Accumulator, AmountAccumulator, RankingAccumulator, RankingEntry};
use crate::types::{Instruction, Money, ReportKind};

/// Отчёты одного дня: по одному накопителю на каждый [`ReportKind`].
///
/// Отчёт без подходящих поручений всё равно присутствует: сумма равна нулю,
/// рейтинг пуст.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReport {
    date: NaiveDate,
    reports: BTreeMap<ReportKind, Accumulator>,
}

impl DailyReport {
    /// Создаёт пустые отчёты всех видов для даты.
    pub fn new(date: NaiveDate) -> Self {
        let reports = ReportKind::ALL
            .into_iter()
            .map(|kind| (kind, Accumulator::for_kind(kind)))
            .collect();
        Self { date, reports }
    }

    /// Дата расчётов.
    #[inline]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Учитывает поручение во всех отчётах, которым подходит его направление.
    pub fn record(&mut self, instruction: &Instruction) {
        for kind in ReportKind::ALL {
            let accumulator = self
                .reports
                .entry(kind)
                .or_insert_with(|| Accumulator::for_kind(kind));
            if kind.direction() == instruction.direction() {
                accumulator.add(instruction);
            }
        }
    }

    /// Накопитель отчёта.
    #[inline]
    pub fn get(&self, kind: ReportKind) -> Option<&Accumulator> {
        self.reports.get(&kind)
    }

    /// Отчёты дня в фиксированном порядке видов.
    pub fn iter(&self) -> impl Iterator<Item = (ReportKind, &Accumulator)> {
        self.reports.iter().map(|(kind, acc)| (*kind, acc))
    }

    /// Накопитель суммы для отчёта-суммы.
    #[inline]
    pub fn amount_report(&self, kind: ReportKind) -> Option<&AmountAccumulator> {
        self.get(kind).and_then(Accumulator::as_amount)
    }

    /// Накопитель рейтинга для отчёта-рейтинга.
    #[inline]
    pub fn ranking_report(&self, kind: ReportKind) -> Option<&RankingAccumulator> {
        self.get(kind).and_then(Accumulator::as_ranking)
    }

    /// Сумма входящих средств за день.
    pub fn incoming_amount(&self) -> Money {
        self.amount_value(ReportKind::IncomingAmount)
    }

    /// Сумма исходящих средств за день.
    pub fn outgoing_amount(&self) -> Money {
        self.amount_value(ReportKind::OutgoingAmount)
    }

    /// Рейтинг контрагентов по входящим суммам.
    pub fn incoming_ranking(&self) -> Vec<RankingEntry> {
        self.ranking_value(ReportKind::IncomingRanking)
    }

    /// Рейтинг контрагентов по исходящим суммам.
    pub fn outgoing_ranking(&self) -> Vec<RankingEntry> {
        self.ranking_value(ReportKind::OutgoingRanking)
    }

    /// Складывает отчёты другого набора за ту же дату.
    pub fn merge(&mut self, other: &Self) {
        debug_assert_eq!(self.date, other.date);
        for (kind, accumulator) in &other.reports {
            self.reports
                .entry(*kind)
                .or_insert_with(|| Accumulator::for_kind(*kind))
                .merge(accumulator);
        }
    }

    fn amount_value(&self, kind: ReportKind) -> Money {
        self.amount_report(kind)
            .map_or_else(|| AmountAccumulator::new().value(), AmountAccumulator::value)
    }

    fn ranking_value(&self, kind: ReportKind) -> Vec<RankingEntry> {
        self.ranking_report(kind)
            .map(RankingAccumulator::ranking)
            .unwrap_or_default()
    }
}
