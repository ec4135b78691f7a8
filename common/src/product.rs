use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::ApiConfig;

/// Catalog product identifier as assigned by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog item as returned by the product, order and wishlist endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub ratings: Option<f64>,
    #[serde(default)]
    pub quantity_sold: Option<u64>,
    /// JSON-encoded list of uploaded image filenames, e.g. `["a.png","b.png"]`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Product {
    /// Decode the `images` field. An empty field means no images; anything
    /// else must be a JSON array of strings.
    pub fn image_files(&self) -> Result<Vec<String>, serde_json::Error> {
        parse_images(&self.images)
    }

    /// Rating shown by the star widget; unrated products show zero stars.
    pub fn rating(&self) -> f64 {
        self.ratings.unwrap_or(0.0)
    }

    /// Units sold as shown next to the rating; blank when the API omits it.
    pub fn sold_label(&self) -> String {
        self.quantity_sold.map(|n| n.to_string()).unwrap_or_default()
    }
}

/// What a click on a product card's wishlist button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistClick {
    /// Hand the product id to the handler the parent view supplied.
    Forward,
    /// Card believes a user is signed in; nothing to do locally.
    Ignore,
    /// Send the user to the login page.
    RedirectToLogin,
}

/// Resolve a wishlist click. A parent-supplied handler always wins;
/// otherwise the card falls back to its own `card_signed_in` flag.
pub fn wishlist_click(has_handler: bool, card_signed_in: bool) -> WishlistClick {
    match (has_handler, card_signed_in) {
        (true, _) => WishlistClick::Forward,
        (false, true) => WishlistClick::Ignore,
        (false, false) => WishlistClick::RedirectToLogin,
    }
}

/// Whether a card offers "Add to cart". Read-only listings (`disp`) don't.
pub fn shows_add_to_cart(disp: bool) -> bool {
    !disp
}

/// Parse a JSON-encoded image list. Blank input yields an empty list.
pub fn parse_images(images: &str) -> Result<Vec<String>, serde_json::Error> {
    if images.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(images)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Thumbnail `src` for a product card: the first image under the uploads
/// directory, or an empty string when there is none.
pub fn thumbnail_src(config: &ApiConfig, images: &[String]) -> String {
    images
        .first()
        .map(|file| config.upload_url(file))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::new("http://localhost:3000")
    }

    #[test]
    fn thumbnail_uses_first_image() {
        let images = parse_images(r#"["a.png","b.png"]"#).unwrap();
        assert_eq!(images, vec!["a.png", "b.png"]);
        assert_eq!(
            thumbnail_src(&config(), &images),
            "http://localhost:3000/uploads/a.png"
        );
    }

    #[test]
    fn empty_images_give_empty_src() {
        let images = parse_images("").unwrap();
        assert!(images.is_empty());
        assert_eq!(thumbnail_src(&config(), &images), "");

        let images = parse_images("[]").unwrap();
        assert_eq!(thumbnail_src(&config(), &images), "");
    }

    #[test]
    fn malformed_images_are_an_error() {
        assert!(parse_images("a.png").is_err());
        assert!(parse_images(r#"{"first":"a.png"}"#).is_err());
    }

    #[test]
    fn decodes_api_product() {
        let json = r#"{
            "id": 7,
            "name": "Linen Shirt",
            "description": "Breathable",
            "price": 39.5,
            "ratings": 4,
            "quantitySold": 120,
            "images": "[\"shirt.png\"]"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(7));
        assert_eq!(product.quantity_sold, Some(120));
        assert_eq!(product.rating(), 4.0);
        assert_eq!(product.image_files().unwrap(), vec!["shirt.png"]);
        assert_eq!(product.category, None);
    }

    #[test]
    fn null_text_fields_decode_as_empty() {
        let json = r#"[
            {"id": 1, "name": "Mug", "price": 5, "images": "[\"mug.png\"]"},
            {"id": 2, "name": "Cap", "price": 9, "description": null, "images": null}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].description, "");
        let images = products[1].image_files().unwrap();
        assert_eq!(thumbnail_src(&config(), &images), "");
    }

    #[test]
    fn missing_quantity_sold_renders_blank() {
        let json = r#"{"id": 1, "name": "Mug", "price": 5}"#;
        let mut product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.sold_label(), "");
        product.quantity_sold = Some(12);
        assert_eq!(product.sold_label(), "12");
    }

    #[test]
    fn forwarded_wishlist_handler_wins() {
        assert_eq!(wishlist_click(true, false), WishlistClick::Forward);
        assert_eq!(wishlist_click(true, true), WishlistClick::Forward);
    }

    #[test]
    fn standalone_card_redirects_to_login() {
        assert_eq!(wishlist_click(false, false), WishlistClick::RedirectToLogin);
        assert_eq!(wishlist_click(false, true), WishlistClick::Ignore);
    }

    #[test]
    fn read_only_cards_hide_add_to_cart() {
        use crate::cart::Cart;

        assert!(!shows_add_to_cart(true));
        assert!(shows_add_to_cart(false));

        let mut cart = Cart::new();
        assert_eq!(cart.add(ProductId(7)), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn unrated_product_has_zero_rating() {
        let json = r#"{"id": 1, "name": "Mug", "price": 5, "images": ""}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.rating(), 0.0);
        assert_eq!(product.description, "");
    }
}
