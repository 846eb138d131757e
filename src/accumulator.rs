//! Накопители значений отчётов: сумма и рейтинг контрагентов.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{Instruction, Money, ReportKind};

/// Количество знаков после запятой в отчётных суммах.
pub const AMOUNT_SCALE: u32 = 3;

/// Приводит сумму к отчётной точности.
pub(crate) fn to_report_scale(amount: Money) -> Money {
    let mut value =
        amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(AMOUNT_SCALE);
    value
}

/// Складывает суммы, при переполнении остаётся на границе `Decimal`.
///
/// Одна сумма сделки ограничена `Decimal::MAX` при создании поручения, итог
/// дня за этой границей не представим и фиксируется на ней.
fn saturating_sum(total: Money, amount: Money) -> Money {
    total.checked_add(amount).unwrap_or_else(|| {
        tracing::warn!(%total, %amount, "report total overflowed, saturating");
        total.saturating_add(amount)
    })
}

/// Нарастающий итог по сумме сделок.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountAccumulator {
    total: Money,
}

impl AmountAccumulator {
    /// Пустой накопитель с нулевой суммой.
    #[inline]
    pub const fn new() -> Self {
        Self {
            total: Decimal::ZERO,
        }
    }

    /// Прибавляет сумму без округления.
    #[inline]
    pub fn add(&mut self, amount: Money) {
        self.total = saturating_sum(self.total, amount);
    }

    /// Итог ровно с тремя знаками после запятой.
    #[inline]
    pub fn value(&self) -> Money {
        to_report_scale(self.total)
    }

    /// Итог без приведения точности.
    #[inline]
    pub const fn raw_total(&self) -> Money {
        self.total
    }

    /// Прибавляет итог другого накопителя.
    #[inline]
    pub fn merge(&mut self, other: &Self) {
        self.total = saturating_sum(self.total, other.total);
    }
}

/// Строка рейтинга: контрагент и его сумма.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    /// Контрагент.
    pub entity: String,
    /// Суммарная сумма сделок с отчётной точностью.
    pub amount: Money,
}

/// Нарастающие итоги по контрагентам.
///
/// Внутреннее состояние не зависит от порядка добавления, упорядоченный вид
/// строится при каждом чтении.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingAccumulator {
    totals: BTreeMap<String, Money>,
}

impl RankingAccumulator {
    /// Пустой рейтинг.
    #[inline]
    pub const fn new() -> Self {
        Self {
            totals: BTreeMap::new(),
        }
    }

    /// Прибавляет сумму к итогу контрагента.
    pub fn add(&mut self, entity: &str, amount: Money) {
        if let Some(total) = self.totals.get_mut(entity) {
            *total = saturating_sum(*total, amount);
        } else {
            self.totals.insert(entity.to_string(), amount);
        }
    }

    /// Итог контрагента, если он есть в рейтинге.
    pub fn total_for(&self, entity: &str) -> Option<Money> {
        self.totals.get(entity).copied().map(to_report_scale)
    }

    /// Количество контрагентов.
    #[inline]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// В рейтинге нет ни одного контрагента.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Контрагенты по убыванию суммы; равные суммы упорядочены по имени.
    pub fn ranking(&self) -> Vec<RankingEntry> {
        let mut entries: Vec<(&String, &Money)> = self.totals.iter().collect();
        entries.sort_by(|(a_name, a_total), (b_name, b_total)| {
            match b_total.cmp(a_total) {
                Ordering::Equal => a_name.cmp(b_name),
                other => other,
            }
        });
        entries
            .into_iter()
            .map(|(entity, total)| RankingEntry {
                entity: entity.clone(),
                amount: to_report_scale(*total),
            })
            .collect()
    }

    /// Складывает итоги по контрагентам из другого рейтинга.
    pub fn merge(&mut self, other: &Self) {
        for (entity, amount) in &other.totals {
            self.add(entity, *amount);
        }
    }
}

/// Значение одного отчёта за день.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accumulator {
    /// Сумма.
    Amount(AmountAccumulator),
    /// Рейтинг.
    Ranking(RankingAccumulator),
}

impl Accumulator {
    /// Пустой накопитель нужного для отчёта вида.
    #[inline]
    pub const fn for_kind(kind: ReportKind) -> Self {
        if kind.is_ranking() {
            Self::Ranking(RankingAccumulator::new())
        } else {
            Self::Amount(AmountAccumulator::new())
        }
    }

    /// Учитывает сумму сделки поручения.
    pub fn add(&mut self, instruction: &Instruction) {
        match self {
            Self::Amount(acc) => acc.add(instruction.trade_amount()),
            Self::Ranking(acc) => acc.add(instruction.entity(), instruction.trade_amount()),
        }
    }

    /// Накопитель рейтинга или суммы.
    #[inline]
    pub const fn is_ranking(&self) -> bool {
        matches!(self, Self::Ranking(_))
    }

    /// Складывает накопители одного вида.
    ///
    /// В [`DailyReport`](crate::DailyReport) накопитель создаётся по
    /// [`ReportKind`], поэтому при слиянии отчётов виды всегда совпадают.
    pub fn merge(&mut self, other: &Self) {
        debug_assert_eq!(
            self.is_ranking(),
            other.is_ranking(),
            "accumulators of different kinds"
        );
        match (self, other) {
            (Self::Amount(acc), Self::Amount(other)) => acc.merge(other),
            (Self::Ranking(acc), Self::Ranking(other)) => acc.merge(other),
            _ => {}
        }
    }

    /// Накопитель суммы, если это отчёт-сумма.
    #[inline]
    pub const fn as_amount(&self) -> Option<&AmountAccumulator> {
        match self {
            Self::Amount(acc) => Some(acc),
            Self::Ranking(_) => None,
        }
    }

    /// Накопитель рейтинга, если это отчёт-рейтинг.
    #[inline]
    pub const fn as_ranking(&self) -> Option<&RankingAccumulator> {
        match self {
            Self::Ranking(acc) => Some(acc),
            Self::Amount(_) => None,
        }
    }
}
