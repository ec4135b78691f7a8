use dioxus::prelude::*;

use shopfront_common::auth::{check_access, Access, Role, ACCOUNT_ROLES, ADMIN_ROLES};

use super::account::{Login, Orders, Register, Wishlist};
use super::api_client::ApiClient;
use super::auth_state::{use_auth, use_auth_provider};
use super::cart_state::{use_cart, use_cart_provider};
use super::catalog::{CategoryPage, Deals, Home, NewProducts, ProductPage};
use super::toast::{use_toast_provider, Toaster};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(StoreLayout)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/products/:product_id")]
    ProductPage { product_id: u64 },
    #[route("/category/:category_name")]
    CategoryPage { category_name: String },
    #[route("/deals")]
    Deals {},
    #[route("/new-products")]
    NewProducts {},
    #[layout(RequireAccount)]
    #[route("/orders")]
    Orders {},
    #[route("/wishlist")]
    Wishlist {},
    #[end_layout]
    #[end_layout]
    #[layout(AdminRoot)]
    #[route("/admin")]
    AdminHome {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_auth_provider();
    use_cart_provider();
    use_toast_provider();

    rsx! { Router::<Route> {} }
}

#[component]
fn StoreLayout() -> Element {
    let mut auth = use_auth();
    let cart = use_cart();
    let nav = use_navigator();

    let cart_count = cart.item_count();
    let username = auth.username();

    let logout = move |_| {
        let session = auth.session();
        auth.sign_out();
        spawn(async move {
            let client = ApiClient::from_env().with_session(session.as_ref());
            if let Err(e) = client.post_empty("/auth/logout").await {
                tracing::warn!("Logout request failed: {e}");
            }
        });
        nav.push(Route::Home {});
    };

    rsx! {
        div { class: "shopfront-app",
            header { class: "app-header",
                div { class: "header-top",
                    Link { class: "brand", to: Route::Home {}, h1 { "Shopfront" } }
                    nav {
                        Link { to: Route::Home {}, "Home" }
                        Link { to: Route::Deals {}, "Deals" }
                        Link { to: Route::NewProducts {}, "New Products" }
                        Link { to: Route::Orders {}, "Orders" }
                        Link { to: Route::Wishlist {}, "Wishlist" }
                    }
                    div { class: "user-info",
                        span { class: "cart-count", "Cart ({cart_count})" }
                        if let Some(name) = username {
                            span { class: "user-name", "{name}" }
                            button { onclick: logout, "Logout" }
                        } else {
                            Link { to: Route::Login {}, "Login" }
                        }
                    }
                }
            }
            main {
                ErrorBoundary {
                    handle_error: |_errors: ErrorContext| rsx! { ErrorNotice {} },
                    Outlet::<Route> {}
                }
            }
            Toaster {}
        }
    }
}

/// Layout for the customer account pages.
#[component]
fn RequireAccount() -> Element {
    rsx! { RequireAuth { allowed: ACCOUNT_ROLES.to_vec() } }
}

/// Renders the nested route only for a session holding one of `allowed`.
#[component]
fn RequireAuth(allowed: Vec<Role>) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    match check_access(auth.session().as_ref(), &allowed) {
        Access::Granted => rsx! { Outlet::<Route> {} },
        Access::LoginRequired => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        Access::Forbidden => rsx! {
            div { class: "unauthorized",
                h2 { "Unauthorized" }
                p { "Your account doesn't have access to this page." }
                Link { to: Route::Home {}, "Back to the store" }
            }
        },
    }
}

#[component]
fn AdminRoot() -> Element {
    rsx! {
        div { class: "admin-app",
            header { class: "app-header",
                h1 { "Shopfront Admin" }
                Link { to: Route::Home {}, "Back to the store" }
            }
            main {
                RequireAuth { allowed: ADMIN_ROLES.to_vec() }
            }
            Toaster {}
        }
    }
}

#[component]
fn AdminHome() -> Element {
    let auth = use_auth();
    let username = auth.username().unwrap_or_default();

    rsx! {
        div { class: "admin-dashboard",
            h2 { "Dashboard" }
            p { "Signed in as {username}." }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::warn!("No route for /{path}");

    rsx! {
        div { class: "shopfront-app",
            ErrorNotice {}
            p { class: "error-path", "/{path}" }
        }
    }
}

/// Shown when a page fails to render or no route matches.
#[component]
fn ErrorNotice() -> Element {
    rsx! {
        div { class: "error-page",
            h1 { "Oops!" }
            p { "Sorry, an unexpected error has occurred." }
            Link { to: Route::Home {}, "Back to the store" }
        }
    }
}
