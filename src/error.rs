//! Ошибки чтения поручений и построения отчётов.

/// Ошибка разбора поручений или построения отчётов.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// Ошибка ввода-вывода при чтении исходного файла.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Ошибка чтения файла с разделителями.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Значение поля не соответствует ни одному допустимому коду.
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidInput {
        /// Имя поля.
        field: &'static str,
        /// Некорректное исходное значение.
        value: String,
    },
    /// Обязательное поле отсутствует или пустое.
    #[error("Required field '{field}' missing")]
    MissingInput {
        /// Имя пропавшего поля.
        field: &'static str,
    },
    /// Ошибка разбора числового значения.
    #[error("Invalid number '{value}' in column '{column}'")]
    Number {
        /// Некорректное исходное значение.
        value: String,
        /// Название столбца.
        column: &'static str,
    },
    /// Сумма сделки не помещается в `Decimal`.
    #[error("Trade amount overflow for entity '{entity}'")]
    AmountOverflow {
        /// Контрагент поручения.
        entity: String,
    },
    /// Ошибка разбора даты.
    #[error("Invalid date '{value}' (expected format '{format}')")]
    Date {
        /// Некорректная дата.
        value: String,
        /// Ожидаемый формат.
        format: String,
    },
}
