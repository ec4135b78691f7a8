use dioxus::prelude::*;

use shopfront_common::cart::Cart;
use shopfront_common::product::ProductId;

/// Handle to the shared in-memory cart.
#[derive(Clone, Copy, PartialEq)]
pub struct CartHandle {
    cart: Signal<Cart>,
}

impl CartHandle {
    pub fn add_to_cart(&mut self, product_id: ProductId) {
        let quantity = self.cart.write().add(product_id);
        tracing::debug!("Cart: product {product_id} now x{quantity}");
    }

    pub fn item_count(&self) -> u32 {
        self.cart.read().item_count()
    }
}

pub fn use_cart_provider() -> CartHandle {
    use_context_provider(|| CartHandle {
        cart: Signal::new(Cart::new()),
    })
}

pub fn use_cart() -> CartHandle {
    use_context::<CartHandle>()
}
