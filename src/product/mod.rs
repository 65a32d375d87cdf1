//! Product listing pipelines.
//!
//! [`ProductPage`] wraps one [`Product`] and answers the page's queries (winning offer, main and
//! `LOOK` image URLs, filtered and sorted similar products) as [`crate::processing::Pipeline`]s.
//!
//! ```rust
//! use stream_drills::product::{PriceRange, PrimeOption, Product, ProductPage, ShippingProgram, SortBy};
//!
//! let mut product = Product::new("B000", 1_500, 0, vec![ShippingProgram::Prime]);
//! product.similar_products = Some(vec![
//!     Some(Product::new("a", 2_000, 10, vec![ShippingProgram::Prime])),
//!     None,
//!     Some(Product::new("b", 1_000, 30, vec![ShippingProgram::Standard])),
//!     Some(Product::new("c", 500, 20, vec![ShippingProgram::Prime])),
//! ]);
//!
//! let page = ProductPage::new(product);
//! let ids: Vec<String> = page
//!     .similar_products(SortBy::PriceLowToHigh, &PriceRange::any(), PrimeOption::PrimeOnly)
//!     .into_iter()
//!     .map(|p| p.id)
//!     .collect();
//! assert_eq!(ids, vec!["c", "a"]);
//! ```

pub mod page;
pub mod types;

pub use page::ProductPage;
pub use types::{
    BuyingOption, Image, ImageResource, ImageStyle, ImageStyleBuilder, PriceRange, PrimeOption, Product,
    ProductImages, ShippingProgram, SortBy,
};
