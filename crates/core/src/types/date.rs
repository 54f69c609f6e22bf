//! Sale dates and calendar month names.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Portuguese month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Brazilian day-first date format, e.g. `05/01/2024`.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Localized name for a month number (1-12).
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(index).copied()
}

/// One entry of the month picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthOption {
    /// Month number, 1-12.
    pub value: u32,
    /// Localized name.
    pub name: &'static str,
}

/// The twelve calendar months in order.
#[must_use]
pub fn month_options() -> Vec<MonthOption> {
    (1..=12u32)
        .zip(MONTH_NAMES)
        .map(|(value, name)| MonthOption { value, name })
        .collect()
}

/// The calendar date of a sale, as stored.
///
/// The raw `YYYY-MM-DD` text is kept so that a record with an unparseable
/// date still loads and saves unchanged; reporting treats it as a data
/// quality problem instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleDate(String);

impl SaleDate {
    /// Storage format.
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Wrap raw stored text without validating it.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the stored text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The parsed date, or `None` when the stored text is malformed.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.0.trim(), Self::FORMAT).ok()
    }

    /// `(year, month)` of the parsed date.
    #[must_use]
    pub fn year_month(&self) -> Option<(i32, u32)> {
        self.date().map(|d| (d.year(), d.month()))
    }
}

impl From<NaiveDate> for SaleDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format(Self::FORMAT).to_string())
    }
}

impl std::fmt::Display for SaleDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(1), Some("Janeiro"));
        assert_eq!(month_name(3), Some("Março"));
        assert_eq!(month_name(12), Some("Dezembro"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_month_options_are_ordered() {
        let options = month_options();
        assert_eq!(options.len(), 12);
        assert_eq!(options.first().unwrap().value, 1);
        assert_eq!(options.last().unwrap().name, "Dezembro");
    }

    #[test]
    fn test_sale_date_parsing() {
        let date = SaleDate::from_raw("2024-02-29");
        assert_eq!(date.year_month(), Some((2024, 2)));

        assert_eq!(SaleDate::from_raw("2023-02-29").date(), None);
        assert_eq!(SaleDate::from_raw("05/01/2024").date(), None);
        assert_eq!(SaleDate::from_raw("").date(), None);
    }

    #[test]
    fn test_from_naive_date_uses_storage_format() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(SaleDate::from(date).as_str(), "2024-01-05");
    }
}
