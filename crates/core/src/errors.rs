//! Field-keyed error maps and the error board that displays them.
//!
//! The backend answers a rejected search with a JSON object mapping a field
//! name to one or more messages. [`ErrorMap`] keeps that mapping in the order
//! the backend sent it. [`ErrorBoard`] is the presenter state: the messages
//! currently on screen, the controls highlighted because of them, and an
//! epoch that lets a delayed auto-dismiss tell whether it is still current.

use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::time::Duration;

/// Field used for transport/parse failures.
pub const GENERAL_FIELD: &str = "general";

/// Message shown for transport/parse failures.
pub const GENERIC_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// How long an error set stays on screen without manual dismissal.
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

/// Messages for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub field: String,
    pub messages: Vec<String>,
}

impl FieldErrors {
    /// Field name as shown to the user (`min_current_price` → `min current price`).
    pub fn label(&self) -> String {
        self.field.replace('_', " ")
    }

    pub fn first_message(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }
}

/// Ordered field → messages mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorMap {
    entries: Vec<FieldErrors>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single-entry map used for transport/parse failures.
    pub fn general() -> Self {
        Self::single(GENERAL_FIELD, GENERIC_MESSAGE)
    }

    pub fn single(field: &str, message: &str) -> Self {
        let mut map = Self::new();
        map.insert(field, vec![message.to_string()]);
        map
    }

    /// Append messages for a field, merging with an existing entry.
    pub fn insert(&mut self, field: &str, messages: Vec<String>) {
        match self.entries.iter_mut().find(|e| e.field == field) {
            Some(existing) => existing.messages.extend(messages),
            None => self.entries.push(FieldErrors {
                field: field.to_string(),
                messages,
            }),
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldErrors> {
        self.entries.iter().find(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldErrors> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether at least one field carries a message to show.
    pub fn has_messages(&self) -> bool {
        self.entries.iter().any(|e| e.first_message().is_some())
    }

    /// Build from an arbitrary JSON value. Only objects are field maps.
    ///
    /// Per-field values may be a string, a list, or anything else; non-string
    /// items are rendered with their JSON text.
    pub fn from_json(value: Value) -> Option<Self> {
        let Value::Object(object) = value else {
            return None;
        };
        let mut map = Self::new();
        for (field, value) in object {
            map.insert(&field, messages_from_value(value));
        }
        Some(map)
    }
}

fn messages_from_value(value: Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(s) => vec![s],
        Value::Array(items) => items.into_iter().flat_map(messages_from_value).collect(),
        other => vec![other.to_string()],
    }
}

impl<'de> Deserialize<'de> for ErrorMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ErrorMap::from_json(value).ok_or_else(|| D::Error::custom("expected a field-keyed error object"))
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = &'a FieldErrors;
    type IntoIter = std::slice::Iter<'a, FieldErrors>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ---------------------------------------------------------------------------
// Field → control mapping
// ---------------------------------------------------------------------------

/// Filter-panel controls that can be marked with an error highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterControl {
    Category,
    Currency,
    MinPrice,
    MaxPrice,
    Shop,
    Region,
    Status,
}

impl FilterControl {
    /// Control for a backend field name, if the panel has one.
    pub fn for_field(field: &str) -> Option<Self> {
        Some(match field {
            "category_name" => FilterControl::Category,
            "currency" => FilterControl::Currency,
            "min_current_price" => FilterControl::MinPrice,
            "max_current_price" => FilterControl::MaxPrice,
            "shop_name" => FilterControl::Shop,
            "region" => FilterControl::Region,
            "status" => FilterControl::Status,
            _ => return None,
        })
    }
}

// ---------------------------------------------------------------------------
// Error board
// ---------------------------------------------------------------------------

/// One message block on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    pub field: String,
    pub label: String,
    pub message: String,
    pub control: Option<FilterControl>,
}

/// Currently displayed errors and control highlights.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBoard {
    entries: Vec<ErrorEntry>,
    marked: BTreeSet<FilterControl>,
    epoch: u64,
}

impl ErrorBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is displayed with `errors`. Returns the epoch to pass
    /// to [`ErrorBoard::expire`] once [`AUTO_DISMISS`] has elapsed.
    pub fn show(&mut self, errors: &ErrorMap) -> u64 {
        self.reset();
        for field in errors {
            let Some(message) = field.first_message() else {
                continue;
            };
            let control = FilterControl::for_field(&field.field);
            if let Some(c) = control {
                self.marked.insert(c);
            }
            self.entries.push(ErrorEntry {
                field: field.field.clone(),
                label: field.label(),
                message: message.to_string(),
                control,
            });
        }
        self.epoch
    }

    /// Auto-dismiss hook. Clears only if `epoch` is still the one on screen.
    pub fn expire(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.is_empty() {
            return false;
        }
        self.reset();
        true
    }

    /// Manual dismissal of one message. Its highlight goes with it unless
    /// another remaining message maps to the same control.
    pub fn dismiss(&mut self, field: &str) {
        let Some(pos) = self.entries.iter().position(|e| e.field == field) else {
            return;
        };
        let removed = self.entries.remove(pos);
        if let Some(control) = removed.control {
            if !self.entries.iter().any(|e| e.control == Some(control)) {
                self.marked.remove(&control);
            }
        }
    }

    pub fn clear(&mut self) {
        self.reset();
    }

    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_marked(&self, control: FilterControl) -> bool {
        self.marked.contains(&control)
    }

    fn reset(&mut self) {
        self.entries.clear();
        self.marked.clear();
        self.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_list_and_string_values_in_order() {
        let map: ErrorMap = serde_json::from_value(json!({
            "min_current_price": "Minimum price cannot be negative",
            "currency": ["Invalid currency", "Also bad"],
            "off_percent": 150,
            "ignored": null,
        }))
        .unwrap();
        let fields: Vec<&str> = map.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["min_current_price", "currency", "off_percent", "ignored"]);
        assert_eq!(map.get("currency").unwrap().first_message(), Some("Invalid currency"));
        assert_eq!(map.get("off_percent").unwrap().messages, vec!["150".to_string()]);
        assert!(map.get("ignored").unwrap().messages.is_empty());
    }

    #[test]
    fn non_object_is_not_an_error_map() {
        assert!(serde_json::from_value::<ErrorMap>(json!(["a", "b"])).is_err());
        assert!(ErrorMap::from_json(json!("oops")).is_none());
    }

    #[test]
    fn currency_error_marks_currency_control() {
        let map = ErrorMap::from_json(json!({"currency": ["Invalid currency"]})).unwrap();
        let mut board = ErrorBoard::new();
        board.show(&map);
        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries()[0].message, "Invalid currency");
        assert!(board.is_marked(FilterControl::Currency));
        assert!(!board.is_marked(FilterControl::MinPrice));
    }

    #[test]
    fn expiry_clears_messages_and_highlights() {
        let map = ErrorMap::from_json(json!({"currency": ["Invalid currency"]})).unwrap();
        let mut board = ErrorBoard::new();
        let epoch = board.show(&map);
        assert!(board.expire(epoch));
        assert!(board.is_empty());
        assert!(!board.is_marked(FilterControl::Currency));
    }

    #[test]
    fn stale_expiry_keeps_newer_errors() {
        let mut board = ErrorBoard::new();
        let first = board.show(&ErrorMap::single("currency", "Invalid currency"));
        let second = board.show(&ErrorMap::single("region", "Unknown region"));
        assert_ne!(first, second);
        assert!(!board.expire(first));
        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries()[0].field, "region");
        assert!(board.is_marked(FilterControl::Region));
        assert!(!board.is_marked(FilterControl::Currency));
        assert!(board.expire(second));
    }

    #[test]
    fn general_error_has_no_highlight() {
        let mut board = ErrorBoard::new();
        board.show(&ErrorMap::general());
        assert_eq!(board.entries().len(), 1);
        let entry = &board.entries()[0];
        assert_eq!(entry.field, GENERAL_FIELD);
        assert_eq!(entry.message, GENERIC_MESSAGE);
        assert_eq!(entry.control, None);
    }

    #[test]
    fn labels_replace_underscores() {
        let mut board = ErrorBoard::new();
        board.show(&ErrorMap::single("min_current_price", "too low"));
        assert_eq!(board.entries()[0].label, "min current price");
    }

    #[test]
    fn empty_message_lists_are_skipped() {
        let map = ErrorMap::from_json(json!({"currency": [], "region": "bad"})).unwrap();
        let mut board = ErrorBoard::new();
        board.show(&map);
        assert_eq!(board.entries().len(), 1);
        assert!(!board.is_marked(FilterControl::Currency));
    }

    #[test]
    fn maps_without_any_message_have_nothing_to_show() {
        for body in [json!({"currency": []}), json!({"x": null}), json!({})] {
            assert!(!ErrorMap::from_json(body).unwrap().has_messages());
        }
        assert!(ErrorMap::from_json(json!({"currency": [], "region": "bad"}))
            .unwrap()
            .has_messages());
    }

    #[test]
    fn dismiss_removes_one_message_and_its_highlight() {
        let map = ErrorMap::from_json(json!({
            "min_current_price": "Minimum price cannot be greater than maximum price",
            "max_current_price": "Maximum price cannot be less than minimum price",
        }))
        .unwrap();
        let mut board = ErrorBoard::new();
        let epoch = board.show(&map);
        board.dismiss("min_current_price");
        assert_eq!(board.entries().len(), 1);
        assert!(!board.is_marked(FilterControl::MinPrice));
        assert!(board.is_marked(FilterControl::MaxPrice));
        // Dismissal does not change the epoch; the timer still clears the rest.
        assert!(board.expire(epoch));
    }

    #[test]
    fn clear_invalidates_pending_expiry() {
        let mut board = ErrorBoard::new();
        let epoch = board.show(&ErrorMap::general());
        board.clear();
        assert!(board.is_empty());
        assert!(!board.expire(epoch));
    }
}
