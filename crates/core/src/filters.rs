//! Filter state and the collector that builds it from raw control values.
//!
//! Controls hand over plain strings (whatever the input/select currently
//! holds). [`FilterControls::collect`] turns them into a [`FilterState`],
//! fresh on every filter application.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stock status radio group. `Any` means "don't filter".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[default]
    Any,
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [StockStatus::Any, StockStatus::InStock, StockStatus::OutOfStock];

    /// Wire value, or `None` for `Any`.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            StockStatus::Any => None,
            StockStatus::InStock => Some("IN_STOCK"),
            StockStatus::OutOfStock => Some("OUT_OF_STOCK"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Any => "All",
            StockStatus::InStock => "In stock",
            StockStatus::OutOfStock => "Out of stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param().unwrap_or(""))
    }
}

impl FromStr for StockStatus {
    type Err = String;

    /// Accepts the wire values as well as kebab-case CLI spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "" | "any" | "all" => Ok(StockStatus::Any),
            "in_stock" => Ok(StockStatus::InStock),
            "out_of_stock" => Ok(StockStatus::OutOfStock),
            other => Err(format!("unknown status '{other}' (expected any, in-stock, out-of-stock)")),
        }
    }
}

/// Collected filter values. Empty strings never appear here; absent values
/// are `None` / empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub currency: Option<String>,
    /// Selected categories, in selection order, without duplicates.
    pub categories: Vec<String>,
    pub shop: Option<String>,
    pub region: Option<String>,
    pub status: StockStatus,
    /// `YYYY-MM-DD`, passed through as-is.
    pub update_date: Option<String>,
    pub off_percent: Option<i64>,
}

impl FilterState {
    /// Add a category, keeping selection order and ignoring blanks and repeats.
    pub fn select_category(&mut self, category: &str) {
        let category = category.trim();
        if category.is_empty() || self.categories.iter().any(|c| c == category) {
            return;
        }
        self.categories.push(category.to_string());
    }
}

/// Selectable values for the filter panel, as served by the lists endpoint.
/// Any list may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    pub currencies: Vec<String>,
    pub categories: Vec<String>,
    pub shops: Vec<String>,
    pub regions: Vec<String>,
}

/// Raw values as read off the filter panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterControls {
    pub min_price: String,
    pub max_price: String,
    pub currency: String,
    pub categories: Vec<String>,
    pub shop: String,
    pub region: String,
    pub status: StockStatus,
    pub update_date: String,
    pub off_percent: String,
}

impl FilterControls {
    pub fn collect(&self) -> FilterState {
        let mut state = FilterState {
            min_price: parse_int_prefix(&self.min_price),
            max_price: parse_int_prefix(&self.max_price),
            currency: non_blank(&self.currency),
            categories: Vec::new(),
            shop: non_blank(&self.shop),
            region: non_blank(&self.region),
            status: self.status,
            update_date: non_blank(&self.update_date),
            off_percent: parse_int_prefix(&self.off_percent),
        };
        for c in &self.categories {
            state.select_category(c);
        }
        state
    }

    /// Toggle a category checkbox/option.
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category.to_string());
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

/// Integer parse that behaves like a browser `parseInt(value, 10)`: skips
/// leading whitespace, takes an optional sign and the leading run of digits,
/// and ignores the rest. No digits → `None`. A digit run too long for `i64`
/// saturates at `i64::MAX` / `i64::MIN` rather than being dropped.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }
    let value = digits.into_iter().fold(0i64, |acc, d| {
        let acc = acc.saturating_mul(10);
        if negative {
            acc.saturating_sub(d)
        } else {
            acc.saturating_add(d)
        }
    });
    Some(value)
}
