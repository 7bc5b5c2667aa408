//! Query builder: free-text query + [`FilterState`] → ordered GET parameters.
//!
//! A filter field is emitted only when it holds a truthy value. Zero counts as
//! absent for numeric fields, so `min_current_price=0` is never sent.

use crate::filters::FilterState;

pub const PARAM_QUERY: &str = "query";
pub const PARAM_CATEGORY: &str = "category_name";
pub const PARAM_CURRENCY: &str = "currency";
pub const PARAM_MIN_PRICE: &str = "min_current_price";
pub const PARAM_MAX_PRICE: &str = "max_current_price";
pub const PARAM_UPDATE_DATE: &str = "update_date";
pub const PARAM_SHOP: &str = "shop_name";
pub const PARAM_STATUS: &str = "status";
pub const PARAM_REGION: &str = "region";
pub const PARAM_OFF_PERCENT: &str = "off_percent";

/// Ordered key/value pairs for the search request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(&'static str, String)>,
}

impl SearchParams {
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `application/x-www-form-urlencoded` rendering (space → `+`).
    pub fn to_query_string(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            ser.append_pair(k, v);
        }
        ser.finish()
    }

    fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.pairs.push((key, value.into()));
    }

    fn push_text(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.push(key, v);
        }
    }

    fn push_number(&mut self, key: &'static str, value: Option<i64>) {
        if let Some(v) = value.filter(|v| *v != 0) {
            self.push(key, v.to_string());
        }
    }
}

/// Build the parameter set. `query` is always present, even when empty, and
/// is sent exactly as typed.
pub fn build_params(query: &str, filters: &FilterState) -> SearchParams {
    let mut params = SearchParams::default();
    params.push(PARAM_QUERY, query);

    let categories = filters
        .categories
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(",");
    params.push_text(PARAM_CATEGORY, Some(categories.as_str()));
    params.push_text(PARAM_CURRENCY, filters.currency.as_deref());
    params.push_number(PARAM_MIN_PRICE, filters.min_price);
    params.push_number(PARAM_MAX_PRICE, filters.max_price);
    params.push_text(PARAM_UPDATE_DATE, filters.update_date.as_deref());
    params.push_text(PARAM_SHOP, filters.shop.as_deref());
    params.push_text(PARAM_STATUS, filters.status.as_param());
    params.push_text(PARAM_REGION, filters.region.as_deref());
    params.push_number(PARAM_OFF_PERCENT, filters.off_percent);
    params
}
