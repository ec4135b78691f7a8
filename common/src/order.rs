use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::product::Product;

/// Fulfilment status of an order as reported by the API.
///
/// Unknown values are preserved in `Other` rather than rejected, so an order
/// with a status the storefront doesn't know about still renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    ToPack,
    InLogistics,
    Shipped,
    OutForDelivery,
    Delivered,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::ToPack => "to_pack",
            OrderStatus::InLogistics => "in_logistics",
            OrderStatus::Shipped => "shipped",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Other(s) => s,
        }
    }

    /// Sentence shown in the track-order dialog. `None` for unknown statuses.
    pub fn tracking_message(&self) -> Option<&'static str> {
        match self {
            OrderStatus::ToPack => Some("Your package is about to be packed"),
            OrderStatus::InLogistics => Some("Your package is currently in logistics"),
            OrderStatus::Shipped => Some("Your package is currently being shipped"),
            OrderStatus::OutForDelivery => Some("Your package is out for delivery"),
            OrderStatus::Delivered => Some("Your package is already delivered"),
            OrderStatus::Cancelled => Some("Your package is unforunately cancelled"),
            OrderStatus::Other(_) => None,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "to_pack" => OrderStatus::ToPack,
            "in_logistics" => OrderStatus::InLogistics,
            "shipped" => OrderStatus::Shipped,
            "out_for_delivery" => OrderStatus::OutForDelivery,
            "delivered" => OrderStatus::Delivered,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(s),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placed order as listed for a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "order_no", deserialize_with = "string_or_number")]
    pub order_no: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub shipping_address: String,
    pub subtotal: f64,
    pub shipping_amount: f64,
}

impl Order {
    /// Grand total. Never stored, always derived from the two parts.
    pub fn total(&self) -> f64 {
        self.subtotal + self.shipping_amount
    }

    /// Payment method as displayed in the order summary.
    pub fn payment_label(&self) -> String {
        self.payment_method.to_uppercase()
    }

    /// Path of the order-detail endpoint for this order.
    pub fn detail_path(&self) -> String {
        format!("/orders/id/{}", self.order_no)
    }
}

/// One record of the `/orders/id/{order_no}` response.
///
/// Only `products` matters to the storefront; any other fields the server
/// sends are ignored, and a record without `products` contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDetailRecord {
    #[serde(default)]
    pub products: Option<LineItems>,
}

/// The `products` field of an order-detail record: the API sends either a
/// single product per record or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineItems {
    Many(Vec<Product>),
    One(Product),
}

impl LineItems {
    pub fn as_slice(&self) -> &[Product] {
        match self {
            LineItems::Many(products) => products,
            LineItems::One(product) => std::slice::from_ref(product),
        }
    }
}

/// Concatenate the products of every record, in response order.
pub fn flatten_products(records: &[OrderDetailRecord]) -> Vec<Product> {
    records
        .iter()
        .filter_map(|record| record.products.as_ref())
        .flat_map(LineItems::as_slice)
        .cloned()
        .collect()
}

/// Long-form date, e.g. "Monday, January 15, 2024".
pub fn format_long_date<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format("%A, %B %-d, %Y").to_string()
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductId;

    fn order(subtotal: f64, shipping_amount: f64) -> Order {
        Order {
            order_no: "1001".into(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            status: OrderStatus::Shipped,
            payment_method: "cod".into(),
            shipping_address: "12 Harbour St".into(),
            subtotal,
            shipping_amount,
        }
    }

    fn product(id: u64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            description: String::new(),
            price: 10.0,
            ratings: None,
            quantity_sold: None,
            images: String::new(),
            category: None,
        }
    }

    #[test]
    fn test_tracking_messages() {
        let cases = [
            ("to_pack", "Your package is about to be packed"),
            ("in_logistics", "Your package is currently in logistics"),
            ("shipped", "Your package is currently being shipped"),
            ("out_for_delivery", "Your package is out for delivery"),
            ("delivered", "Your package is already delivered"),
            ("cancelled", "Your package is unforunately cancelled"),
        ];
        for (key, message) in cases {
            let status = OrderStatus::from(key.to_string());
            assert_eq!(status.tracking_message(), Some(message), "status {key}");
        }
    }

    #[test]
    fn unknown_status_has_no_message() {
        let status = OrderStatus::from("returned".to_string());
        assert_eq!(status, OrderStatus::Other("returned".into()));
        assert_eq!(status.tracking_message(), None);
        assert_eq!(OrderStatus::from(String::new()).tracking_message(), None);
    }

    #[test]
    fn status_survives_serde() {
        let status: OrderStatus = serde_json::from_str(r#""out_for_delivery""#).unwrap();
        assert_eq!(status, OrderStatus::OutForDelivery);
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""out_for_delivery""#);

        let other: OrderStatus = serde_json::from_str(r#""lost""#).unwrap();
        assert_eq!(serde_json::to_string(&other).unwrap(), r#""lost""#);
    }

    #[test]
    fn test_total_is_sum() {
        assert_eq!(order(100.0, 15.0).total(), 115.0);
        assert_eq!(order(100.0, 0.0).total(), 100.0);
        assert_eq!(order(100.0, -20.0).total(), 80.0);
        assert_eq!(order(0.0, 0.0).total(), 0.0);
    }

    #[test]
    fn flatten_skips_records_without_products() {
        let json = r#"[
            {"products": [
                {"id": 1, "name": "P1", "price": 1, "images": ""},
                {"id": 2, "name": "P2", "price": 2, "images": ""}
            ]},
            {"other": "x"}
        ]"#;
        let records: Vec<OrderDetailRecord> = serde_json::from_str(json).unwrap();
        let products = flatten_products(&records);
        let ids: Vec<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(2)]);
    }

    #[test]
    fn flatten_accepts_one_product_per_record() {
        let json = r#"[
            {"id": 5, "products": {"id": 1, "name": "P1", "price": 1, "images": ""}},
            {"id": 6, "products": {"id": 2, "name": "P2", "price": 2, "images": null}},
            {"id": 7}
        ]"#;
        let records: Vec<OrderDetailRecord> = serde_json::from_str(json).unwrap();
        let ids: Vec<_> = flatten_products(&records).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(2)]);
    }

    #[test]
    fn flatten_keeps_response_order_across_records() {
        let records = vec![
            OrderDetailRecord {
                products: Some(LineItems::One(product(3))),
            },
            OrderDetailRecord::default(),
            OrderDetailRecord {
                products: Some(LineItems::Many(vec![product(1), product(2)])),
            },
        ];
        let ids: Vec<_> = flatten_products(&records).iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(flatten_products(&[]).is_empty());
    }

    #[test]
    fn decodes_api_order() {
        let json = r#"{
            "order_no": 42,
            "createdAt": "2024-01-15T10:30:00.000Z",
            "status": "delivered",
            "paymentMethod": "gcash",
            "shippingAddress": "12 Harbour St",
            "subtotal": 250,
            "shippingAmount": 49.5
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_no, "42");
        assert_eq!(order.detail_path(), "/orders/id/42");
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.payment_label(), "GCASH");
        assert_eq!(order.total(), 299.5);
    }

    #[test]
    fn test_long_date() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_long_date(&at), "Monday, January 15, 2024");
    }
}
