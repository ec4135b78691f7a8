use dioxus::prelude::*;

use shopfront_common::config::ApiConfig;
use shopfront_common::currency::format_price;
use shopfront_common::product::{
    shows_add_to_cart, thumbnail_src, wishlist_click, Product, ProductId, WishlistClick,
};

use super::app::Route;
use super::cart_state::CartHandle;
use super::widgets::{Rating, Tooltip};

/// Session flag behind the card's own wishlist button. Cards are not wired to
/// the signed-in session, so without a forwarded handler the button always
/// sends the user to the login page.
// TODO: confirm with the storefront owners whether standalone cards should
// read the real session like OrderCard does.
const CARD_SIGNED_IN: bool = false;

/// One product tile.
///
/// `disp` marks a read-only listing (e.g. inside an order) and hides the
/// add-to-cart button. When the parent passes `on_add_to_wishlist`, the heart
/// button calls it with the product id instead of the card's own gate.
#[component]
pub fn ProductCard(
    product: Product,
    cart: CartHandle,
    #[props(default)] disp: bool,
    on_add_to_wishlist: Option<EventHandler<ProductId>>,
) -> Element {
    let nav = use_navigator();
    let mut cart = cart;

    let images = product.image_files()?;
    let thumbnail = thumbnail_src(&ApiConfig::from_env(), &images);
    let id = product.id;
    let price = format_price(product.price);
    let rating = product.rating();
    let sold = product.sold_label();

    let add_to_wishlist = move |_| {
        match wishlist_click(on_add_to_wishlist.is_some(), CARD_SIGNED_IN) {
            WishlistClick::Forward => {
                if let Some(handler) = on_add_to_wishlist {
                    handler.call(id);
                }
            }
            WishlistClick::Ignore => {}
            WishlistClick::RedirectToLogin => {
                nav.push(Route::Login {});
            }
        }
    };

    rsx! {
        div { class: "product-card",
            div { class: "product-card-media",
                Tooltip { text: "Add to Wishlist",
                    span {
                        class: "wishlist-button",
                        onclick: add_to_wishlist,
                        "♡"
                    }
                }
                Link {
                    class: "product-card-link",
                    to: Route::ProductPage { product_id: id.0 },
                    img {
                        class: "product-card-image",
                        src: "{thumbnail}",
                        alt: "Image here",
                    }
                }
            }
            div { class: "product-card-header",
                div { class: "product-card-title",
                    Tooltip { text: product.name.clone(),
                        p { class: "truncate", "{product.name}" }
                    }
                    p { class: "price", "{price}" }
                }
                div { class: "product-card-description",
                    Tooltip { text: product.description.clone(),
                        p { class: "truncate", "{product.description}" }
                    }
                }
                span { class: "product-card-rating",
                    Rating { value: rating }
                    p { class: "quantity-sold", "({sold})" }
                }
            }
            if shows_add_to_cart(disp) {
                div { class: "product-card-footer",
                    button {
                        class: "add-to-cart",
                        onclick: move |_| cart.add_to_cart(id),
                        "Add to cart"
                    }
                }
            }
        }
    }
}
