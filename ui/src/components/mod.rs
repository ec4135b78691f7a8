pub mod account;
pub mod api_client;
pub mod app;
pub mod auth_state;
pub mod cart_state;
pub mod catalog;
pub mod order_card;
pub mod product_card;
pub mod toast;
pub mod widgets;
