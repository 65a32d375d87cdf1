//! Product detail page queries.

use std::collections::HashMap;

use crate::processing::reduce::any_match;
use crate::processing::{Comparator, Pipeline, SortDirection};

use super::types::{BuyingOption, Image, PriceRange, PrimeOption, Product, SortBy};

const LOOK_VARIANT: &str = "LOOK";

/// Queries over a single product listing and its similar products.
#[derive(Debug, Clone)]
pub struct ProductPage {
    product: Product,
    comparators: HashMap<SortBy, Comparator<Product>>,
}

impl ProductPage {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            comparators: sort_comparators(),
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The first (winning) buying option, if any.
    pub fn first_buying_option(&self) -> Option<BuyingOption> {
        Pipeline::new(self.product.buying_options.clone()).find_first()
    }

    /// URL of the first image whose URL resolves, scaled so its longest side is `longest`.
    ///
    /// The first image in the list is treated as the main image; its variant is ignored.
    pub fn extract_main_image_url(&self, longest: u32) -> Option<String> {
        Pipeline::from_optional(self.images())
            .map(|image| image_url(&image, longest))
            .flatten_present()
            .find_first()
    }

    /// URL of the first `LOOK` variant image whose URL resolves.
    pub fn extract_look_image_url(&self, longest: u32) -> Option<String> {
        Pipeline::from_optional(self.images())
            .filter(|image| image.variant.as_deref() == Some(LOOK_VARIANT))
            .map(|image| image_url(&image, longest))
            .flatten_present()
            .find_first()
    }

    /// Similar products that are present, valid, within `price_range` and shippable under
    /// `prime_option`, ordered by `sort_by`.
    ///
    /// Sort modes without a comparator keep listing order.
    pub fn similar_products(
        &self,
        sort_by: SortBy,
        price_range: &PriceRange,
        prime_option: PrimeOption,
    ) -> Vec<Product> {
        Pipeline::from_optional(self.product.similar_products.clone())
            .flatten_present()
            .filter(|p| p.valid)
            .filter(|p| price_range.contains(p.price_cents))
            .filter(|p| any_match(&p.shipping_programs, |program| prime_option.matches(*program)))
            .sorted_by(&self.comparator_for(sort_by), SortDirection::Ascending)
            .collect()
    }

    /// The comparator registered for `sort_by`, or the passthrough comparator.
    pub fn comparator_for(&self, sort_by: SortBy) -> Comparator<Product> {
        self.comparators
            .get(&sort_by)
            .cloned()
            .unwrap_or_else(Comparator::passthrough)
    }

    fn images(&self) -> Option<Vec<Image>> {
        self.product.images.as_ref().map(|imgs| imgs.images.clone())
    }
}

fn image_url(image: &Image, longest: u32) -> Option<String> {
    image
        .low_res
        .style_builder()
        .scale_to_longest(longest)
        .build()
        .url()
}

fn sort_comparators() -> HashMap<SortBy, Comparator<Product>> {
    let reward = Comparator::by_key(|p: &Product| p.total_benefit_cents);
    let price = Comparator::by_key(|p: &Product| p.price_cents);

    let mut comparators = HashMap::new();
    comparators.insert(SortBy::RewardLowToHigh, reward.clone());
    comparators.insert(SortBy::RewardHighToLow, reward.reversed());
    comparators.insert(SortBy::PriceLowToHigh, price.clone());
    comparators.insert(SortBy::PriceHighToLow, price.reversed());
    comparators
}

#[cfg(test)]
mod tests {
    use super::ProductPage;
    use crate::product::types::{
        BuyingOption, Image, ImageResource, PriceRange, PrimeOption, Product, ProductImages, ShippingProgram,
        SortBy,
    };

    fn image(variant: Option<&str>, base: Option<&str>) -> Image {
        Image {
            variant: variant.map(str::to_string),
            low_res: ImageResource {
                base_url: base.map(str::to_string),
            },
        }
    }

    fn page_with_images(images: Vec<Image>) -> ProductPage {
        let mut product = Product::new("P", 100, 0, vec![]);
        product.images = Some(ProductImages { images });
        ProductPage::new(product)
    }

    #[test]
    fn first_buying_option_is_the_winning_offer() {
        let mut product = Product::new("P", 100, 0, vec![]);
        assert_eq!(ProductPage::new(product.clone()).first_buying_option(), None);

        product.buying_options = vec![
            BuyingOption {
                offer_id: "win".to_string(),
                price_cents: 90,
            },
            BuyingOption {
                offer_id: "other".to_string(),
                price_cents: 80,
            },
        ];
        let page = ProductPage::new(product);
        assert_eq!(page.first_buying_option().map(|o| o.offer_id), Some("win".to_string()));
    }

    #[test]
    fn main_image_skips_images_without_url() {
        let page = page_with_images(vec![
            image(Some("MAIN"), None),
            image(Some("PT01"), Some("https://i.example/a.png")),
        ]);
        assert_eq!(
            page.extract_main_image_url(300),
            Some("https://i.example/a._SL300_.png".to_string())
        );
    }

    #[test]
    fn look_image_requires_look_variant() {
        let page = page_with_images(vec![
            image(Some("MAIN"), Some("https://i.example/main.jpg")),
            image(None, Some("https://i.example/none.jpg")),
            image(Some("LOOK"), Some("https://i.example/look.jpg")),
        ]);
        assert_eq!(
            page.extract_look_image_url(100),
            Some("https://i.example/look._SL100_.jpg".to_string())
        );

        let no_look = page_with_images(vec![image(Some("MAIN"), Some("https://i.example/main.jpg"))]);
        assert_eq!(no_look.extract_look_image_url(100), None);
    }

    #[test]
    fn missing_images_yield_no_url() {
        let page = ProductPage::new(Product::new("P", 1, 0, vec![]));
        assert_eq!(page.extract_main_image_url(100), None);
        assert_eq!(page.extract_look_image_url(100), None);
    }

    #[test]
    fn every_sort_mode_has_a_comparator() {
        let page = ProductPage::new(Product::new("P", 1, 0, vec![]));
        let cheap = Product::new("cheap", 100, 9, vec![ShippingProgram::Prime]);
        let pricey = Product::new("pricey", 900, 1, vec![ShippingProgram::Prime]);

        for sort_by in SortBy::ALL {
            let ord = page.comparator_for(sort_by).compare(&cheap, &pricey);
            let expected = match sort_by {
                SortBy::Featured => std::cmp::Ordering::Equal,
                SortBy::PriceLowToHigh | SortBy::RewardHighToLow => std::cmp::Ordering::Less,
                SortBy::PriceHighToLow | SortBy::RewardLowToHigh => std::cmp::Ordering::Greater,
            };
            assert_eq!(ord, expected, "{sort_by:?}");
        }
    }

    #[test]
    fn similar_products_without_list_is_empty() {
        let page = ProductPage::new(Product::new("P", 1, 0, vec![]));
        assert!(page
            .similar_products(SortBy::PriceLowToHigh, &PriceRange::any(), PrimeOption::Any)
            .is_empty());
    }
}
