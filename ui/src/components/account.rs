use dioxus::prelude::*;

use shopfront_common::auth::{AuthSession, LoginRequest, MessageResponse, RegisterRequest};
use shopfront_common::order::Order;
use shopfront_common::product::Product;
use shopfront_common::wishlist::wishlist_path;

use super::api_client::{use_fetch, ApiClient};
use super::app::Route;
use super::auth_state::use_auth;
use super::cart_state::use_cart;
use super::order_card::OrderCard;
use super::product_card::ProductCard;
use super::toast::use_toast;

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut toast = use_toast();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let can_submit = use_memo(move || {
        !username.read().trim().is_empty() && !password.read().is_empty() && !submitting()
    });

    let submit = move |_| {
        let request = LoginRequest {
            username: username.read().trim().to_string(),
            password: password.read().clone(),
        };
        submitting.set(true);
        spawn(async move {
            let client = ApiClient::from_env();
            match client
                .post_json::<_, AuthSession>("/auth/login", &request)
                .await
            {
                Ok(session) => {
                    auth.sign_in(session);
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    tracing::warn!("Login failed: {e}");
                    toast.show(e.to_string());
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "auth-form",
            h2 { "Login" }
            div { class: "form-group",
                label { "Username:" }
                input {
                    r#type: "text",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Password:" }
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            button {
                disabled: !can_submit(),
                onclick: submit,
                "Login"
            }
            p { class: "auth-switch",
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}

#[component]
pub fn Register() -> Element {
    let mut toast = use_toast();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let can_submit = use_memo(move || {
        !username.read().trim().is_empty()
            && email.read().contains('@')
            && !password.read().is_empty()
            && !submitting()
    });

    let submit = move |_| {
        let request = RegisterRequest {
            username: username.read().trim().to_string(),
            email: email.read().trim().to_string(),
            password: password.read().clone(),
        };
        submitting.set(true);
        spawn(async move {
            let client = ApiClient::from_env();
            match client
                .post_json::<_, MessageResponse>("/auth/register", &request)
                .await
            {
                Ok(resp) => {
                    toast.show(resp.message);
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {e}");
                    toast.show(e.to_string());
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "auth-form",
            h2 { "Register" }
            div { class: "form-group",
                label { "Username:" }
                input {
                    r#type: "text",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Email:" }
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Password:" }
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            button {
                disabled: !can_submit(),
                onclick: submit,
                "Create account"
            }
            p { class: "auth-switch",
                "Already registered? "
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}

/// The signed-in customer's orders, one card each.
#[component]
pub fn Orders() -> Element {
    let auth = use_auth();
    let cart = use_cart();
    let username = auth.username().unwrap_or_default();
    let orders = use_fetch::<Vec<Order>>(format!("/orders/user/{username}"));

    let orders = orders.read().clone().flatten().unwrap_or_default();

    rsx! {
        div { class: "my-orders",
            h2 { "My Orders" }
            if orders.is_empty() {
                p { class: "empty-state", "You haven't placed any orders yet." }
            }
            for order in orders {
                OrderCard {
                    key: "{order.order_no}",
                    order: order.clone(),
                    auth,
                    cart,
                }
            }
        }
    }
}

#[component]
pub fn Wishlist() -> Element {
    let auth = use_auth();
    let cart = use_cart();
    let username = auth.username().unwrap_or_default();
    let products = use_fetch::<Vec<Product>>(wishlist_path(&username));

    let products = products.read().clone().flatten().unwrap_or_default();

    rsx! {
        div { class: "wishlist",
            h2 { "My Wishlist" }
            if products.is_empty() {
                p { class: "empty-state", "Your wishlist is empty." }
            }
            div { class: "product-grid",
                for product in products {
                    ProductCard {
                        key: "{product.id}",
                        product: product.clone(),
                        cart,
                        disp: true,
                    }
                }
            }
        }
    }
}
