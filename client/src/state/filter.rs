//! Traffic-report filter state and its query-string encoding.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Payment category tabs on the traffic report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VehicleCategory {
    #[default]
    All,
    Tunai,
    ETol,
    Flo,
    Ktp,
}

impl VehicleCategory {
    pub const ALL: [Self; 5] = [Self::All, Self::Tunai, Self::ETol, Self::Flo, Self::Ktp];

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Tunai => "Tunai",
            Self::ETol => "E-Toll",
            Self::Flo => "Flo",
            Self::Ktp => "KTP",
        }
    }

    /// Value sent as `type=`; `None` for the unfiltered tab.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            other => Some(other.label()),
        }
    }
}

/// Search, date and category filters for `GET /lalins`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrafficFilter {
    pub search: String,
    /// `YYYY-MM-DD` as produced by `<input type="date">`; may be empty.
    pub date: String,
    pub category: VehicleCategory,
}

impl TrafficFilter {
    /// Query pairs for the non-empty filter fields, in `search, date, type` order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_owned()));
        }
        if let Some(date) = self.valid_date() {
            pairs.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(value) = self.category.query_value() {
            pairs.push(("type", value.to_owned()));
        }
        pairs
    }

    /// The parsed date, or `None` when empty or not `YYYY-MM-DD`.
    pub fn valid_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    pub fn is_default(&self) -> bool {
        self.query_pairs().is_empty()
    }
}
