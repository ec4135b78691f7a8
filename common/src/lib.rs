pub mod auth;
pub mod cart;
pub mod config;
pub mod currency;
pub mod error;
pub mod order;
pub mod product;
pub mod wishlist;
