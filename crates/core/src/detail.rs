//! Detail presenter state: the product overlay and its image selection.

use regex::Regex;
use std::sync::{Arc, OnceLock};

use crate::product::Product;

static COLOR_RE: OnceLock<Regex> = OnceLock::new();

fn color_re() -> &'static Regex {
    COLOR_RE.get_or_init(|| {
        Regex::new(
            r"(?i)^(#[0-9a-f]{3,8}|(rgb|rgba|hsl|hsla)\(\s*[0-9.,%\s/deg]+\)|[a-z]{3,20})$",
        )
        .expect("color pattern is valid")
    })
}

/// Whether a value is safe to drop into a `background-color` style.
pub fn is_css_color(value: &str) -> bool {
    color_re().is_match(value.trim())
}

/// Expanded view of one product. The record is shared with the result list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    product: Arc<Product>,
    selected_image: usize,
}

impl ProductDetail {
    pub fn new(product: Arc<Product>) -> Self {
        Self {
            product,
            selected_image: 0,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Index of the marked image, `None` when the record has no images.
    pub fn selected_image(&self) -> Option<usize> {
        (!self.product.images.is_empty()).then_some(self.selected_image)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_image() == Some(index)
    }

    /// Move the single selection marker. Out-of-range indices are ignored.
    pub fn select_image(&mut self, index: usize) {
        if index < self.product.images.len() {
            self.selected_image = index;
        }
    }

    /// Swatch colors that pass [`is_css_color`].
    pub fn swatches(&self) -> Vec<&str> {
        self.product
            .colors
            .iter()
            .flatten()
            .map(|c| c.trim())
            .filter(|c| is_css_color(c))
            .collect()
    }

    /// Label/value rows in fixed order, for the attributes present.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        let p = &*self.product;
        [
            ("Description", &p.description),
            ("Material", &p.material),
            ("Brand", &p.brand_name),
            ("Category", &p.category_name),
            ("Gender", &p.gender_name),
            ("Shop", &p.shop_name),
            ("Status", &p.status),
            ("Region", &p.region),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (label, v))
        })
        .collect()
    }

    /// `"{n}% OFF"` badge text, only when an old price is present.
    pub fn discount_badge(&self) -> Option<String> {
        self.product.discount_percent().map(|d| format!("{d}% OFF"))
    }
}

/// Where a click on the open overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayClick {
    CloseButton,
    Backdrop,
    Content,
}

/// At most one product overlay is visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    current: Option<ProductDetail>,
}

impl Overlay {
    /// Show `product`, replacing any overlay already open.
    pub fn open(&mut self, product: Arc<Product>) {
        self.current = Some(ProductDetail::new(product));
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Close on the close control or a backdrop click; content clicks are kept.
    pub fn click(&mut self, target: OverlayClick) {
        match target {
            OverlayClick::CloseButton | OverlayClick::Backdrop => self.close(),
            OverlayClick::Content => {}
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn detail(&self) -> Option<&ProductDetail> {
        self.current.as_ref()
    }

    pub fn detail_mut(&mut self) -> Option<&mut ProductDetail> {
        self.current.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::sample;

    #[test]
    fn first_image_selected_then_moves() {
        let mut overlay = Overlay::default();
        overlay.open(Arc::new(sample("Jacket", &["a", "b", "c"])));
        let detail = overlay.detail_mut().unwrap();
        assert!(detail.is_selected(0));
        detail.select_image(2);
        assert!(detail.is_selected(2));
        let marked: Vec<usize> = (0..3).filter(|i| detail.is_selected(*i)).collect();
        assert_eq!(marked, vec![2]);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut detail = ProductDetail::new(Arc::new(sample("Jacket", &["a", "b"])));
        detail.select_image(5);
        assert_eq!(detail.selected_image(), Some(0));
    }

    #[test]
    fn no_images_means_no_selection() {
        let detail = ProductDetail::new(Arc::new(sample("Jacket", &[])));
        assert_eq!(detail.selected_image(), None);
        assert!(!detail.is_selected(0));
    }

    #[test]
    fn close_and_backdrop_dismiss_content_does_not() {
        let product = Arc::new(sample("Jacket", &["a"]));
        let mut overlay = Overlay::default();

        overlay.open(product.clone());
        overlay.click(OverlayClick::Content);
        assert!(overlay.is_open());

        overlay.click(OverlayClick::CloseButton);
        assert!(!overlay.is_open());

        overlay.open(product);
        overlay.click(OverlayClick::Backdrop);
        assert!(!overlay.is_open());
    }

    #[test]
    fn opening_replaces_previous_overlay() {
        let mut overlay = Overlay::default();
        overlay.open(Arc::new(sample("One", &["a", "b"])));
        overlay.detail_mut().unwrap().select_image(1);
        overlay.open(Arc::new(sample("Two", &["x", "y"])));
        let detail = overlay.detail().unwrap();
        assert_eq!(detail.product().name, "Two");
        assert!(detail.is_selected(0));
    }

    #[test]
    fn attributes_keep_fixed_order_and_skip_missing() {
        let mut p = sample("Boots", &[]);
        p.region = Some("EU".into());
        p.brand_name = Some("Acme".into());
        p.description = Some("Leather boots".into());
        p.material = Some("   ".into());
        let detail = ProductDetail::new(Arc::new(p));
        assert_eq!(
            detail.attributes(),
            vec![("Description", "Leather boots"), ("Brand", "Acme"), ("Region", "EU")]
        );
    }

    #[test]
    fn swatches_drop_non_color_values() {
        let mut p = sample("Scarf", &[]);
        p.colors = Some(vec![
            "#ff0000".into(),
            "navy".into(),
            "rgb(10, 20, 30)".into(),
            "red; background-image: url(x)".into(),
        ]);
        let detail = ProductDetail::new(Arc::new(p));
        assert_eq!(detail.swatches(), vec!["#ff0000", "navy", "rgb(10, 20, 30)"]);
    }

    #[test]
    fn badge_only_with_old_price() {
        let mut p = sample("Scarf", &[]);
        p.off_percent = Some(15.0);
        assert_eq!(ProductDetail::new(Arc::new(p.clone())).discount_badge(), None);
        p.old_price = Some(40.0);
        assert_eq!(
            ProductDetail::new(Arc::new(p)).discount_badge().as_deref(),
            Some("15% OFF")
        );
    }
}
