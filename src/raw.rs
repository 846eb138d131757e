//! Чтение исходных поручений из текста с разделителями.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::ReportError;
use crate::types::Instruction;

/// Формат дат во входном файле по умолчанию, например `01 Jan 2016`.
pub const DEFAULT_DATE_FORMAT: &str = "%d %b %Y";

/// Строка входного файла без разбора значений.
///
/// Столбцы идут в фиксированном порядке, заголовок не обязателен.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawInstruction {
    /// Контрагент.
    pub entity: String,
    /// Код направления (`B`/`S`).
    pub direction: Option<String>,
    /// Согласованный курс.
    pub agreed_fx: String,
    /// Код валюты.
    pub currency: String,
    /// Дата поручения.
    pub instruction_date: String,
    /// Запрошенная дата расчётов.
    pub settlement_date: String,
    /// Количество бумаг.
    pub units: String,
    /// Цена за единицу.
    pub price_per_unit: String,
}

/// Настройки чтения входного файла (внутренний тип).
#[derive(Debug, Clone)]
pub(crate) struct ReaderOptions {
    pub delimiter: u8,
    pub has_headers: bool,
    pub date_format: String,
    pub trim: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            trim: true,
        }
    }
}

/// Builder для чтения пакета поручений из произвольного `Read`.
pub struct InstructionReader<R> {
    reader: R,
    options: ReaderOptions,
}

impl InstructionReader<File> {
    /// Открывает файл с поручениями.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> InstructionReader<R> {
    /// Создаёт builder с настройками по умолчанию.
    ///
    /// # Пример
    ///
    /// ```
    /// # use trade_settlement_report::InstructionReader;
    /// let data = "foo;B;0.50;SGD;01 Jan 2016;02 Jan 2016;200;100.25\n";
    /// let instructions = InstructionReader::new(data.as_bytes())
    ///     .delimiter(b';')
    ///     .read()
    ///     .unwrap();
    /// assert_eq!(instructions.len(), 1);
    /// ```
    #[inline]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            options: ReaderOptions::default(),
        }
    }

    /// Разделитель полей.
    #[inline]
    pub const fn delimiter(mut self, delimiter: u8) -> Self {
        self.options.delimiter = delimiter;
        self
    }

    /// Есть ли в файле строка заголовка.
    #[inline]
    pub const fn has_headers(mut self, enabled: bool) -> Self {
        self.options.has_headers = enabled;
        self
    }

    /// Формат дат в терминах `chrono::format::strftime`.
    #[inline]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.options.date_format = format.into();
        self
    }

    /// Обрезать ли пробелы вокруг значений.
    #[inline]
    pub const fn trim(mut self, enabled: bool) -> Self {
        self.options.trim = enabled;
        self
    }

    /// Читает строки без разбора значений.
    pub fn read_raw(self) -> Result<Vec<RawInstruction>, ReportError> {
        let mut csv = csv::ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .has_headers(self.options.has_headers)
            .trim(if self.options.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .from_reader(self.reader);

        let mut rows = Vec::new();
        // Столбцы сопоставляются по позиции, имена в заголовке не важны.
        for record in csv.records() {
            let record = record?;
            let row: RawInstruction = record.deserialize(None)?;
            tracing::trace!(entity = %row.entity, "raw instruction read");
            rows.push(row);
        }
        Ok(rows)
    }

    /// Читает и разбирает все поручения. Первая ошибка прерывает чтение пакета.
    pub fn read(self) -> Result<Vec<Instruction>, ReportError> {
        let date_format = self.options.date_format.clone();
        self.read_raw()?
            .iter()
            .map(|raw| raw.parse(&date_format))
            .collect()
    }
}
