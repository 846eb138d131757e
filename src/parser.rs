//! Разбор исходных строк в поручения.

use crate::error::ReportError;
use crate::raw::RawInstruction;
use crate::types::{Direction, Instruction};
use crate::utils::{parse_date, parse_money, parse_units, require};

impl RawInstruction {
    /// Разбирает строку в поручение.
    ///
    /// Направление проверяется первым: пропущенный код даёт
    /// [`ReportError::MissingInput`], неизвестный даёт [`ReportError::InvalidInput`].
    pub fn parse(&self, date_format: &str) -> Result<Instruction, ReportError> {
        let direction = Direction::from_code(self.direction.as_deref())?;
        let entity = require(&self.entity, "entity")?;
        let currency = require(&self.currency, "currency")?;

        Instruction::new(
            entity,
            direction,
            parse_money(&self.agreed_fx, "agreed_fx")?,
            currency,
            parse_date(&self.instruction_date, date_format)?,
            parse_date(&self.settlement_date, date_format)?,
            parse_units(&self.units, "units")?,
            parse_money(&self.price_per_unit, "price_per_unit")?,
        )
    }
}

impl TryFrom<RawInstruction> for Instruction {
    type Error = ReportError;

    fn try_from(raw: RawInstruction) -> Result<Self, Self::Error> {
        raw.parse(crate::raw::DEFAULT_DATE_FORMAT)
    }
}
