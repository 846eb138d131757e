//! Доменные типы: поручение на расчёты, направление сделки и виды отчётов.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::ReportError;

/// Денежное значение, используем `Decimal` для точных расчётов.
pub type Money = Decimal;

/// Направление сделки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Покупка: исходящие средства.
    Buy,
    /// Продажа: входящие средства.
    Sell,
}

impl Direction {
    /// Код направления во входном файле.
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Buy => "B",
            Self::Sell => "S",
        }
    }

    /// Разбирает код направления (`B`/`S`, без учёта регистра).
    ///
    /// Отсутствующий или пустой код даёт [`ReportError::MissingInput`],
    /// неизвестный код даёт [`ReportError::InvalidInput`].
    pub fn from_code(code: Option<&str>) -> Result<Self, ReportError> {
        let code = code
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or(ReportError::MissingInput { field: "direction" })?;
        [Self::Buy, Self::Sell]
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ReportError::InvalidInput {
                field: "direction",
                value: code.to_string(),
            })
    }
}

impl FromStr for Direction {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(Some(s))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        })
    }
}

/// Поручение на расчёты по сделке.
///
/// Сумма сделки в долларовом эквиваленте вычисляется один раз при создании
/// и далее не пересчитывается. Изменяемой остаётся только дата расчётов.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    entity: String,
    direction: Direction,
    agreed_fx: Money,
    currency: String,
    instruction_date: NaiveDate,
    settlement_date: NaiveDate,
    units: u32,
    price_per_unit: Money,
    trade_amount: Money,
}

impl Instruction {
    /// Создаёт поручение и фиксирует сумму сделки `price_per_unit × units × agreed_fx`.
    ///
    /// Если сумма сделки не помещается в [`Money`], возвращается
    /// [`ReportError::AmountOverflow`].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        entity: impl Into<String>,
        direction: Direction,
        agreed_fx: Money,
        currency: impl Into<String>,
        instruction_date: NaiveDate,
        settlement_date: NaiveDate,
        units: u32,
        price_per_unit: Money,
    ) -> Result<Self, ReportError> {
        let entity = entity.into();
        let trade_amount = price_per_unit
            .checked_mul(Decimal::from(units))
            .and_then(|amount| amount.checked_mul(agreed_fx))
            .ok_or_else(|| ReportError::AmountOverflow {
                entity: entity.clone(),
            })?;
        Ok(Self {
            entity,
            direction,
            agreed_fx,
            currency: currency.into(),
            instruction_date,
            settlement_date,
            units,
            price_per_unit,
            trade_amount,
        })
    }

    /// Контрагент, чьи бумаги покупаются или продаются.
    #[inline]
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Направление сделки.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Согласованный курс к USD.
    #[inline]
    pub const fn agreed_fx(&self) -> Money {
        self.agreed_fx
    }

    /// Код валюты сделки.
    #[inline]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Дата отправки поручения.
    #[inline]
    pub const fn instruction_date(&self) -> NaiveDate {
        self.instruction_date
    }

    /// Дата расчётов. После обработки резолвером это фактическая дата.
    #[inline]
    pub const fn settlement_date(&self) -> NaiveDate {
        self.settlement_date
    }

    /// Перезаписывает дату расчётов.
    #[inline]
    pub fn set_settlement_date(&mut self, date: NaiveDate) {
        self.settlement_date = date;
    }

    /// Количество бумаг.
    #[inline]
    pub const fn units(&self) -> u32 {
        self.units
    }

    /// Цена за единицу.
    #[inline]
    pub const fn price_per_unit(&self) -> Money {
        self.price_per_unit
    }

    /// Сумма сделки в USD.
    #[inline]
    pub const fn trade_amount(&self) -> Money {
        self.trade_amount
    }
}

/// Вид ежедневного отчёта.
///
/// Порядок вариантов задаёт порядок отчётов внутри дня.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReportKind {
    /// Сумма входящих средств (продажи).
    IncomingAmount,
    /// Сумма исходящих средств (покупки).
    OutgoingAmount,
    /// Рейтинг контрагентов по входящим суммам.
    IncomingRanking,
    /// Рейтинг контрагентов по исходящим суммам.
    OutgoingRanking,
}

impl ReportKind {
    /// Все виды отчётов, каждый день содержит по одному отчёту каждого вида.
    pub const ALL: [Self; 4] = [
        Self::IncomingAmount,
        Self::OutgoingAmount,
        Self::IncomingRanking,
        Self::OutgoingRanking,
    ];

    /// Направление сделок, которые попадают в отчёт.
    #[inline]
    pub const fn direction(self) -> Direction {
        match self {
            Self::IncomingAmount | Self::IncomingRanking => Direction::Sell,
            Self::OutgoingAmount | Self::OutgoingRanking => Direction::Buy,
        }
    }

    /// Отчёт-рейтинг или отчёт-сумма.
    #[inline]
    pub const fn is_ranking(self) -> bool {
        matches!(self, Self::IncomingRanking | Self::OutgoingRanking)
    }

    /// Заголовок отчёта.
    #[inline]
    pub const fn title(self) -> &'static str {
        match self {
            Self::IncomingAmount => "DAILY INCOMING AMOUNT",
            Self::OutgoingAmount => "DAILY OUTGOING AMOUNT",
            Self::IncomingRanking => "DAILY INCOMING RANKING",
            Self::OutgoingRanking => "DAILY OUTGOING RANKING",
        }
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let title = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.title().eq_ignore_ascii_case(title))
            .ok_or_else(|| ReportError::InvalidInput {
                field: "report",
                value: title.to_string(),
            })
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
