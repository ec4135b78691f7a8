use crate::product::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// In-memory shopping cart. Lines keep the order products were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product, returning the new quantity for that line.
    pub fn add(&mut self, product_id: ProductId) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }
        self.lines.push(CartLine {
            product_id,
            quantity: 1,
        });
        1
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates_quantity() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(ProductId(7)), 1);
        assert_eq!(cart.add(ProductId(3)), 1);
        assert_eq!(cart.add(ProductId(7)), 2);
        assert_eq!(cart.add(ProductId(3)), 2);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_new_cart_is_empty() {
        assert_eq!(Cart::new().item_count(), 0);
    }
}
