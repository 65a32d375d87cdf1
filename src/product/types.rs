//! Product listing records.
//!
//! Fields the listing service may omit are `Option`s. Money amounts are in minor units (cents).

use serde::{Deserialize, Serialize};

/// Shipping program a product is eligible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingProgram {
    Prime,
    FreeShipping,
    Standard,
}

/// Shipping filter selected by the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimeOption {
    /// Every shipping program matches.
    #[default]
    Any,
    /// Only [`ShippingProgram::Prime`].
    PrimeOnly,
    /// Prime or free shipping.
    FreeShippingOnly,
}

impl PrimeOption {
    pub fn matches(self, program: ShippingProgram) -> bool {
        match self {
            Self::Any => true,
            Self::PrimeOnly => program == ShippingProgram::Prime,
            Self::FreeShippingOnly => {
                matches!(program, ShippingProgram::Prime | ShippingProgram::FreeShipping)
            }
        }
    }
}

/// Inclusive price bounds; an absent bound is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceRange {
    pub min_cents: Option<u64>,
    pub max_cents: Option<u64>,
}

impl PriceRange {
    /// No bounds at all.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn between(min_cents: u64, max_cents: u64) -> Self {
        Self {
            min_cents: Some(min_cents),
            max_cents: Some(max_cents),
        }
    }

    pub fn at_most(max_cents: u64) -> Self {
        Self {
            min_cents: None,
            max_cents: Some(max_cents),
        }
    }

    pub fn contains(&self, price_cents: u64) -> bool {
        self.min_cents.is_none_or(|min| price_cents >= min)
            && self.max_cents.is_none_or(|max| price_cents <= max)
    }
}

/// How similar products are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortBy {
    /// Listing order.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    RewardLowToHigh,
    RewardHighToLow,
}

impl SortBy {
    /// Every sort mode in declaration order.
    pub const ALL: [SortBy; 5] = [
        SortBy::Featured,
        SortBy::PriceLowToHigh,
        SortBy::PriceHighToLow,
        SortBy::RewardLowToHigh,
        SortBy::RewardHighToLow,
    ];
}

/// One way to buy the product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuyingOption {
    pub offer_id: String,
    pub price_cents: u64,
}

/// A stored image rendition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ImageResource {
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ImageResource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }

    /// Start building a styled URL for this rendition.
    pub fn style_builder(&self) -> ImageStyleBuilder<'_> {
        ImageStyleBuilder {
            base_url: self.base_url.as_deref(),
            longest: None,
        }
    }
}

/// Builds a resized image URL of the form `<stem>._SL<longest>_.<ext>`.
#[derive(Debug, Clone, Copy)]
pub struct ImageStyleBuilder<'a> {
    base_url: Option<&'a str>,
    longest: Option<u32>,
}

impl ImageStyleBuilder<'_> {
    /// Scale so the longest side is `longest` pixels.
    pub fn scale_to_longest(mut self, longest: u32) -> Self {
        self.longest = Some(longest);
        self
    }

    pub fn build(self) -> ImageStyle {
        let url = self.base_url.map(|base| match self.longest {
            None => base.to_string(),
            Some(longest) => styled_url(base, &format!("_SL{longest}_")),
        });
        ImageStyle { url }
    }
}

fn styled_url(base: &str, style: &str) -> String {
    let name_start = base.rfind('/').map_or(0, |i| i + 1);
    match base[name_start..].rfind('.') {
        Some(dot) => {
            let (stem, ext) = base.split_at(name_start + dot);
            format!("{stem}.{style}{ext}")
        }
        None => format!("{base}.{style}"),
    }
}

/// A built image style; the URL is absent when the rendition has no base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStyle {
    url: Option<String>,
}

impl ImageStyle {
    pub fn url(self) -> Option<String> {
        self.url
    }
}

/// A product image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    /// Image role, e.g. `MAIN` or `LOOK`.
    #[serde(default)]
    pub variant: Option<String>,
    pub low_res: ImageResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ProductImages {
    pub images: Vec<Image>,
}

/// A product listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub price_cents: u64,
    /// Total reward/benefit amount for buying this product.
    pub total_benefit_cents: u64,
    pub valid: bool,
    #[serde(default)]
    pub shipping_programs: Vec<ShippingProgram>,
    #[serde(default)]
    pub images: Option<ProductImages>,
    #[serde(default)]
    pub buying_options: Vec<BuyingOption>,
    /// Related listings; individual entries may be missing.
    #[serde(default)]
    pub similar_products: Option<Vec<Option<Product>>>,
}

impl Product {
    /// A valid product with no images, buying options or similar products.
    pub fn new(
        id: impl Into<String>,
        price_cents: u64,
        total_benefit_cents: u64,
        shipping_programs: Vec<ShippingProgram>,
    ) -> Self {
        Self {
            id: id.into(),
            price_cents,
            total_benefit_cents,
            valid: true,
            shipping_programs,
            images: None,
            buying_options: Vec::new(),
            similar_products: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ImageResource, PriceRange, PrimeOption, Product, ShippingProgram};

    #[test]
    fn price_range_bounds_are_inclusive() {
        let range = PriceRange::between(1_000, 2_000);
        assert!(range.contains(1_000));
        assert!(range.contains(2_000));
        assert!(!range.contains(999));
        assert!(!range.contains(2_001));
        assert!(PriceRange::any().contains(u64::MAX));
        assert!(PriceRange::at_most(10).contains(0));
    }

    #[test]
    fn prime_options_match_programs() {
        use ShippingProgram::*;
        assert!(PrimeOption::Any.matches(Standard));
        assert!(PrimeOption::PrimeOnly.matches(Prime));
        assert!(!PrimeOption::PrimeOnly.matches(FreeShipping));
        assert!(PrimeOption::FreeShippingOnly.matches(Prime));
        assert!(PrimeOption::FreeShippingOnly.matches(FreeShipping));
        assert!(!PrimeOption::FreeShippingOnly.matches(Standard));
    }

    #[test]
    fn styled_urls_insert_size_before_extension() {
        let res = ImageResource::new("https://img.example.com/images/I/abc.jpg");
        assert_eq!(
            res.style_builder().scale_to_longest(500).build().url(),
            Some("https://img.example.com/images/I/abc._SL500_.jpg".to_string())
        );

        let no_ext = ImageResource::new("https://img.example.com/v1.2/raw");
        assert_eq!(
            no_ext.style_builder().scale_to_longest(64).build().url(),
            Some("https://img.example.com/v1.2/raw._SL64_".to_string())
        );

        assert_eq!(ImageResource::default().style_builder().scale_to_longest(64).build().url(), None);
    }

    #[test]
    fn product_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "id": "B0001",
            "price_cents": 1999,
            "total_benefit_cents": 50,
            "valid": true,
            "shipping_programs": ["PRIME"],
            "similar_products": [null, {"id": "B0002", "price_cents": 10, "total_benefit_cents": 0, "valid": false}]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.shipping_programs, vec![ShippingProgram::Prime]);
        assert_eq!(product.images, None);

        let similar = product.similar_products.unwrap();
        assert_eq!(similar.len(), 2);
        assert!(similar[0].is_none());
        assert_eq!(similar[1].as_ref().map(|p| p.valid), Some(false));
    }
}
