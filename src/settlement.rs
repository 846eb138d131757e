//! Расчёт фактической даты расчётов по валюте поручения.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::calendar::BusinessCalendar;
use crate::types::Instruction;

/// Валюты, для которых по умолчанию действует календарь Персидского залива.
pub const GULF_CURRENCIES: [&str; 2] = ["AED", "SAR"];

/// Переносит дату расчётов поручения на ближайший рабочий день.
///
/// Календарь выбирается по коду валюты без учёта регистра. Валюты, которых нет
/// в таблице, используют календарь по умолчанию.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementResolver {
    calendars: BTreeMap<String, BusinessCalendar>,
    fallback: BusinessCalendar,
}

impl SettlementResolver {
    /// Резолвер со стандартной таблицей: AED и SAR → [`BusinessCalendar::Gulf`],
    /// остальные → [`BusinessCalendar::Standard`].
    pub fn new() -> Self {
        GULF_CURRENCIES.into_iter().fold(
            Self {
                calendars: BTreeMap::new(),
                fallback: BusinessCalendar::Standard,
            },
            |resolver, currency| resolver.with_calendar(currency, BusinessCalendar::Gulf),
        )
    }

    /// Добавляет или заменяет календарь для валюты.
    #[must_use]
    pub fn with_calendar(mut self, currency: &str, calendar: BusinessCalendar) -> Self {
        self.calendars.insert(normalize_currency(currency), calendar);
        self
    }

    /// Календарь для валюты.
    pub fn calendar_for(&self, currency: &str) -> BusinessCalendar {
        self.calendars
            .get(&normalize_currency(currency))
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Фактическая дата расчётов без изменения поручения.
    pub fn resolved_date(&self, instruction: &Instruction) -> NaiveDate {
        self.calendar_for(instruction.currency())
            .next_business_day(instruction.settlement_date())
    }

    /// Перезаписывает дату расчётов поручения фактической датой.
    ///
    /// Повторный вызов ничего не меняет: дата уже рабочая.
    pub fn resolve(&self, instruction: &mut Instruction) {
        let requested = instruction.settlement_date();
        let actual = self.resolved_date(instruction);
        if actual != requested {
            tracing::debug!(
                entity = instruction.entity(),
                currency = instruction.currency(),
                %requested,
                %actual,
                "settlement date moved to next business day"
            );
            instruction.set_settlement_date(actual);
        }
    }
}

impl Default for SettlementResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_currency(currency: &str) -> String {
    currency.trim().to_ascii_uppercase()
}
