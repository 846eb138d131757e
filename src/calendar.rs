//! Календари рабочих дней для разных регионов.

use chrono::{Datelike, NaiveDate, Weekday};

/// Рабочая неделя региона.
///
/// Календари не хранят состояния, это простые значения, которые передаются явно.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BusinessCalendar {
    /// Понедельник – пятница.
    #[default]
    Standard,
    /// Воскресенье – четверг (AED, SAR).
    Gulf,
}

impl BusinessCalendar {
    /// Является ли день недели рабочим.
    #[inline]
    pub const fn is_business_day(self, weekday: Weekday) -> bool {
        match self {
            Self::Standard => !matches!(weekday, Weekday::Sat | Weekday::Sun),
            Self::Gulf => !matches!(weekday, Weekday::Fri | Weekday::Sat),
        }
    }

    /// Ближайший рабочий день, начиная с `date` включительно.
    ///
    /// Рабочая дата возвращается без изменений, иначе дата сдвигается вперёд
    /// по одному дню. В каждом календаре есть рабочие дни, поэтому цикл
    /// завершается не более чем за неделю.
    pub fn next_business_day(self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        for _ in 0..7 {
            if self.is_business_day(current.weekday()) {
                break;
            }
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }
}
