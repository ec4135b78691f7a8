use dioxus::prelude::*;

use shopfront_common::config::ApiConfig;
use shopfront_common::currency::format_price;
use shopfront_common::product::Product;

use super::api_client::use_fetch;
use super::cart_state::use_cart;
use super::product_card::ProductCard;
use super::widgets::Rating;

/// Grid of interactive product cards for any endpoint returning `[Product]`.
#[component]
pub fn ProductGrid(path: String) -> Element {
    let products = use_fetch::<Vec<Product>>(path);
    let cart = use_cart();

    let products = products.read().clone().flatten().unwrap_or_default();

    rsx! {
        div { class: "product-grid",
            if products.is_empty() {
                p { class: "empty-state", "No products to show." }
            }
            for product in products {
                ProductCard {
                    key: "{product.id}",
                    product: product.clone(),
                    cart,
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "catalog",
            h2 { "All Products" }
            ProductGrid { path: "/products" }
        }
    }
}

#[component]
pub fn Deals() -> Element {
    rsx! {
        section { class: "catalog",
            h2 { "Deals" }
            ProductGrid { path: "/products/deals" }
        }
    }
}

#[component]
pub fn NewProducts() -> Element {
    rsx! {
        section { class: "catalog",
            h2 { "New Products" }
            ProductGrid { path: "/products/new" }
        }
    }
}

#[component]
pub fn CategoryPage(category_name: String) -> Element {
    rsx! {
        section { class: "catalog",
            h2 { class: "category-title", "{category_name}" }
            ProductGrid { path: format!("/products/category/{category_name}") }
        }
    }
}

/// Full detail view of a single product.
#[component]
pub fn ProductPage(product_id: u64) -> Element {
    let product = use_fetch::<Product>(format!("/products/id/{product_id}"));

    let Some(product) = product.read().clone().flatten() else {
        return rsx! {
            div { class: "product-page", p { class: "empty-state", "Loading product..." } }
        };
    };

    rsx! { ProductDetail { product } }
}

#[component]
fn ProductDetail(product: Product) -> Element {
    let mut cart = use_cart();
    let config = ApiConfig::from_env();
    let image_urls: Vec<String> = product
        .image_files()?
        .iter()
        .map(|file| config.upload_url(file))
        .collect();
    let id = product.id;
    let price = format_price(product.price);
    let sold = product.sold_label();

    rsx! {
        div { class: "product-page",
            div { class: "product-gallery",
                for url in image_urls {
                    img { key: "{url}", class: "product-image", src: "{url}", alt: "{product.name}" }
                }
            }
            div { class: "product-info",
                h2 { "{product.name}" }
                if let Some(category) = product.category.as_ref() {
                    span { class: "category", "{category}" }
                }
                p { class: "price", "{price}" }
                span { class: "product-rating",
                    Rating { value: product.rating() }
                    p { class: "quantity-sold", "({sold})" }
                }
                p { class: "description", "{product.description}" }
                button {
                    class: "add-to-cart",
                    onclick: move |_| cart.add_to_cart(id),
                    "Add to cart"
                }
            }
        }
    }
}
