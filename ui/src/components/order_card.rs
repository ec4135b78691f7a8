use chrono::Local;
use dioxus::prelude::*;

use shopfront_common::currency::format_price;
use shopfront_common::order::{flatten_products, format_long_date, Order, OrderDetailRecord};
use shopfront_common::product::ProductId;
use shopfront_common::wishlist::{add_to_wishlist, WishlistOutcome};

use super::api_client::{use_fetch, ApiClient};
use super::app::Route;
use super::auth_state::AuthHandle;
use super::cart_state::CartHandle;
use super::product_card::ProductCard;
use super::toast::use_toast;
use super::widgets::{use_dialog, Dialog, ScrollArea, Separator};

/// One order: header with tracking dialog, dates, line items and totals.
///
/// Line items are fetched from the order-detail endpoint when the card
/// mounts; until (or unless) that succeeds the strip is simply empty.
#[component]
pub fn OrderCard(order: Order, auth: AuthHandle, cart: CartHandle) -> Element {
    let response = use_fetch::<Vec<OrderDetailRecord>>(order.detail_path());
    let nav = use_navigator();
    let toast = use_toast();
    let mut tracking = use_dialog();

    let products = response
        .read()
        .as_ref()
        .and_then(|records| records.as_deref())
        .map(flatten_products)
        .unwrap_or_default();
    tracing::debug!("Order {}: {} line items", order.order_no, products.len());

    let wishlist_handler = EventHandler::new(move |product_id: ProductId| {
        let session = auth.session();
        let mut toast = toast;
        spawn(async move {
            let client = ApiClient::from_env().with_session(session.as_ref());
            match add_to_wishlist(&client, session.as_ref(), product_id).await {
                WishlistOutcome::LoginRequired => {
                    nav.push(Route::Login {});
                }
                WishlistOutcome::Added(message) => toast.show(message),
                WishlistOutcome::Failed(err) => {
                    tracing::error!("Add to wishlist failed for product {product_id}: {err}");
                    toast.show(err);
                }
            }
        });
    });

    let order_date = format_long_date(&order.created_at.with_timezone(&Local));
    let tracking_message = order.status.tracking_message().unwrap_or_default();
    let payment = order.payment_label();
    let subtotal = format_price(order.subtotal);
    let shipping = format_price(order.shipping_amount);
    let total = format_price(order.total());

    rsx! {
        div { class: "order-card",
            div { class: "order-card-header",
                span { class: "order-card-title-row",
                    h3 { class: "order-id", "Order ID: {order.order_no}" }
                    button {
                        class: "track-order",
                        r#type: "button",
                        onclick: move |_| tracking.show(),
                        "Track Order"
                    }
                    Dialog { handle: tracking, title: "Where is your parcel?",
                        p { "{tracking_message}" }
                    }
                }
                span { class: "order-dates",
                    span { class: "order-date",
                        "Order Date: "
                        strong { "{order_date}" }
                    }
                    Separator { vertical: true }
                    span { class: "order-eta",
                        "✈ Estimated delivery: "
                        strong { "{order_date}" }
                    }
                }
            }
            div { class: "order-card-content",
                ScrollArea {
                    div { class: "order-line-items",
                        for product in products {
                            ProductCard {
                                key: "{product.id}",
                                product: product.clone(),
                                cart,
                                disp: true,
                                on_add_to_wishlist: wishlist_handler,
                            }
                        }
                    }
                }
                div { class: "order-summary",
                    span { class: "order-shipping-info",
                        span { class: "summary-row",
                            label { class: "summary-label", "Payment Method: " }
                            label { class: "summary-value", "{payment}" }
                        }
                        span { class: "summary-row",
                            label { class: "summary-label", "Shipping Address: " }
                            label { class: "summary-value", "{order.shipping_address}" }
                        }
                    }
                    span { class: "order-totals",
                        span { class: "summary-row",
                            label { "Subtotal: " }
                            label { class: "amount", "{subtotal}" }
                        }
                        span { class: "summary-row",
                            label { "Shipping: " }
                            label { class: "amount", "{shipping}" }
                        }
                        Separator {}
                        span { class: "summary-row",
                            label { "Total: " }
                            label { class: "amount", "{total}" }
                        }
                    }
                }
            }
        }
    }
}
