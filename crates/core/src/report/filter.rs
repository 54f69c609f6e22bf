//! Sale filtering.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::Sale;
use crate::types::{DISPLAY_DATE_FORMAT, UserId, month_name};

/// Which sales a report covers.
///
/// Every field is optional and an absent field applies no restriction; the
/// active fields are combined with AND. `FilterSpec::default()` is the
/// "clear filters" state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Free-text search over client name, client phone, attendant name and
    /// month name. Blank means no search.
    pub search_term: Option<String>,
    /// Only sales recorded by this attendant.
    pub attendant_id: Option<UserId>,
    /// Only sales in this calendar year.
    pub year: Option<i32>,
    /// Only sales in this calendar month (1-12), any year.
    pub month: Option<u32>,
    /// Only sales on or after this date.
    pub date_from: Option<NaiveDate>,
    /// Only sales on or before this date.
    pub date_to: Option<NaiveDate>,
}

impl FilterSpec {
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    #[must_use]
    pub fn with_attendant(mut self, id: UserId) -> Self {
        self.attendant_id = Some(id);
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    /// The search term, if it is non-empty.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|t| !t.is_empty())
    }

    /// Whether any restriction is applied.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.search().is_some()
            || self.attendant_id.is_some()
            || self.year.is_some()
            || self.month.is_some()
            || self.date_from.is_some()
            || self.date_to.is_some()
    }

    /// Whether `sale` satisfies every active restriction.
    ///
    /// A sale with a malformed date fails every date restriction and can
    /// only match a search through its text fields.
    #[must_use]
    pub fn matches(&self, sale: &Sale) -> bool {
        Matcher::new(self, SearchScope::AllSales).matches(sale)
    }
}

/// Which sale fields a search term is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    /// The admin overview: client name, client phone, attendant name and
    /// month name.
    #[default]
    AllSales,
    /// An attendant's own sales: client name, client phone, the date as
    /// `dd/mm/yyyy` and the sale value.
    OwnSales,
}

/// A [`FilterSpec`] with the search term lowercased once up front.
struct Matcher<'a> {
    spec: &'a FilterSpec,
    scope: SearchScope,
    search: Option<(&'a str, String)>,
}

impl<'a> Matcher<'a> {
    fn new(spec: &'a FilterSpec, scope: SearchScope) -> Self {
        Self {
            spec,
            scope,
            search: spec.search().map(|raw| (raw, raw.to_lowercase())),
        }
    }

    fn matches(&self, sale: &Sale) -> bool {
        let date = sale.date.date();

        if let Some((raw, lowered)) = &self.search {
            let found = match self.scope {
                SearchScope::AllSales => overview_search(sale, date, raw, lowered),
                SearchScope::OwnSales => own_sales_search(sale, date, raw, lowered),
            };
            if !found {
                return false;
            }
        }
        if let Some(id) = &self.spec.attendant_id {
            if &sale.attendant_id != id {
                return false;
            }
        }
        if let Some(year) = self.spec.year {
            if !date.is_some_and(|d| d.year() == year) {
                return false;
            }
        }
        if let Some(month) = self.spec.month {
            if !date.is_some_and(|d| d.month() == month) {
                return false;
            }
        }
        if let Some(from) = self.spec.date_from {
            if !date.is_some_and(|d| d >= from) {
                return false;
            }
        }
        if let Some(to) = self.spec.date_to {
            if !date.is_some_and(|d| d <= to) {
                return false;
            }
        }
        true
    }
}

// Only the phone is compared against the term exactly as typed.
fn overview_search(sale: &Sale, date: Option<NaiveDate>, raw: &str, lowered: &str) -> bool {
    sale.client_name.to_lowercase().contains(lowered)
        || sale.client_phone.contains(raw)
        || sale.attendant_name.to_lowercase().contains(lowered)
        || date
            .and_then(|d| month_name(d.month()))
            .is_some_and(|name| name.to_lowercase().contains(lowered))
}

// Phone, date and value are compared against the term exactly as typed.
fn own_sales_search(sale: &Sale, date: Option<NaiveDate>, raw: &str, lowered: &str) -> bool {
    sale.client_name.to_lowercase().contains(lowered)
        || sale.client_phone.contains(raw)
        || date.is_some_and(|d| d.format(DISPLAY_DATE_FORMAT).to_string().contains(raw))
        || sale.value.normalize().to_string().contains(raw)
}

/// The sales matching `spec`, in input order.
#[must_use]
pub fn filter(sales: &[Sale], spec: &FilterSpec) -> Vec<Sale> {
    filter_in(sales, spec, SearchScope::AllSales)
}

/// The sales matching `spec`, searching the fields of `scope`.
#[must_use]
pub fn filter_in(sales: &[Sale], spec: &FilterSpec, scope: SearchScope) -> Vec<Sale> {
    if !spec.is_active() {
        return sales.to_vec();
    }
    let matcher = Matcher::new(spec, scope);
    sales.iter().filter(|s| matcher.matches(s)).cloned().collect()
}
