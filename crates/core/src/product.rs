//! Product records as returned by the search backend, plus the card summary
//! shown in the result grid.
//!
//! Decoding is lenient: one sloppy record (a `null` list, a price sent as a
//! string) must not sink the whole result list.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single product record. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sizes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(default, deserialize_with = "price_or_zero")]
    pub current_price: f64,
    #[serde(default, deserialize_with = "lenient_price")]
    pub old_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub off_percent: Option<f64>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub gender_name: Option<String>,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl Product {
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Formatted `"{currency} {price}"` for the current price.
    pub fn price_label(&self) -> String {
        format_price(&self.currency, self.current_price)
    }

    /// Formatted old price, present only when the record carries one.
    pub fn old_price_label(&self) -> Option<String> {
        self.old_price.map(|p| format_price(&self.currency, p))
    }

    /// Discount percentage for the badge. Only shown alongside an old price.
    ///
    /// Uses the backend's `off_percent` when given, otherwise derives it from
    /// the two prices.
    pub fn discount_percent(&self) -> Option<f64> {
        let old = self.old_price?;
        if let Some(off) = self.off_percent {
            return Some(off);
        }
        if old <= 0.0 {
            return None;
        }
        Some(((old - self.current_price) / old * 100.0).round())
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A number, or a string holding one. Anything else is absent.
fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let price = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(price.filter(|p| p.is_finite()))
}

fn price_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(lenient_price(deserializer)?.unwrap_or_default())
}

fn format_price(currency: &str, amount: f64) -> String {
    if currency.is_empty() {
        format!("{amount}")
    } else {
        format!("{currency} {amount}")
    }
}

/// What a result card shows: first image, name, and size tags.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSummary<'a> {
    pub image: Option<&'a str>,
    pub name: &'a str,
    pub sizes: &'a [String],
}

impl<'a> From<&'a Product> for CardSummary<'a> {
    fn from(p: &'a Product) -> Self {
        Self {
            image: p.first_image(),
            name: &p.name,
            sizes: &p.sizes,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample(name: &str, images: &[&str]) -> Product {
    Product {
        id: None,
        name: name.to_string(),
        images: images.iter().map(|s| s.to_string()).collect(),
        sizes: vec!["S".into(), "M".into()],
        currency: "USD".into(),
        current_price: 20.0,
        old_price: None,
        off_percent: None,
        colors: None,
        description: None,
        material: None,
        brand_name: None,
        category_name: None,
        gender_name: None,
        shop_name: None,
        status: None,
        region: None,
        link: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_record() {
        let p: Product =
            serde_json::from_str(r#"{"name":"Tee","current_price":9.5,"currency":"EUR"}"#).unwrap();
        assert_eq!(p.name, "Tee");
        assert!(p.images.is_empty());
        assert!(p.sizes.is_empty());
        assert_eq!(p.first_image(), None);
        assert_eq!(p.price_label(), "EUR 9.5");
    }

    #[test]
    fn ignores_unknown_fields() {
        let p: Product = serde_json::from_str(
            r#"{"id":7,"name":"Jeans","images":["a.jpg"],"sizes":["32"],"currency":"USD",
                "current_price":40,"score":0.93,"recently_indexed":true}"#,
        )
        .unwrap();
        assert_eq!(p.first_image(), Some("a.jpg"));
        assert_eq!(p.price_label(), "USD 40");
    }

    #[test]
    fn sloppy_fields_decode_instead_of_failing() {
        let p: Product = serde_json::from_str(
            r#"{"id":3,"name":"Scarf","images":["s.jpg"],"sizes":null,"currency":"USD",
                "current_price":"12.50","old_price":"n/a","off_percent":"15"}"#,
        )
        .unwrap();
        assert!(p.sizes.is_empty());
        assert_eq!(p.current_price, 12.5);
        assert_eq!(p.old_price, None);
        assert_eq!(p.off_percent, Some(15.0));
        assert_eq!(p.price_label(), "USD 12.5");

        let p: Product =
            serde_json::from_str(r#"{"id":4,"images":null,"current_price":null,"name":null}"#).unwrap();
        assert!(p.images.is_empty());
        assert_eq!(p.current_price, 0.0);
        assert_eq!(p.name, "");
    }

    #[test]
    fn discount_prefers_backend_percent() {
        let mut p = sample("Coat", &[]);
        p.current_price = 75.0;
        p.old_price = Some(100.0);
        assert_eq!(p.discount_percent(), Some(25.0));
        p.off_percent = Some(30.0);
        assert_eq!(p.discount_percent(), Some(30.0));
        assert_eq!(p.old_price_label().as_deref(), Some("USD 100"));
    }

    #[test]
    fn no_discount_without_old_price() {
        let mut p = sample("Coat", &[]);
        p.off_percent = Some(10.0);
        assert_eq!(p.discount_percent(), None);
        assert_eq!(p.old_price_label(), None);
    }

    #[test]
    fn blank_link_is_absent() {
        let mut p = sample("Coat", &[]);
        p.link = Some("  ".into());
        assert_eq!(p.link(), None);
        p.link = Some("https://shop.example/coat".into());
        assert_eq!(p.link(), Some("https://shop.example/coat"));
    }

    #[test]
    fn card_summaries_keep_order_and_first_image() {
        let products = vec![
            sample("A", &["a1", "a2"]),
            sample("B", &[]),
            sample("C", &["c1"]),
        ];
        let cards: Vec<CardSummary<'_>> = products.iter().map(CardSummary::from).collect();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].name, "A");
        assert_eq!(cards[0].image, Some("a1"));
        assert_eq!(cards[1].image, None);
        assert_eq!(cards[2].name, "C");
        assert_eq!(cards[2].sizes, &["S".to_string(), "M".to_string()][..]);
    }
}
