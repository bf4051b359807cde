//! Order Models

use jiff::Timestamp;
use rustc_hash::FxHashMap;

use crate::{
    domain::{carts::models::CartLine, catalog::models::ProductId, orders::status::OrderStatus},
    ids::TypedId,
};

/// Order Id
pub type OrderId = TypedId<Order>;

/// Order Item Id
pub type OrderItemId = TypedId<OrderItem>;

/// Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub total_amount: u64,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub items: Vec<OrderItem>,
}

/// OrderItem Model
///
/// Name, options and price are a snapshot of the cart line; `product_id`
/// becomes `None` if the product is later removed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub options: String,
    pub price: u64,
}

/// New Order Item Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub options: String,
    pub price: u64,
}

impl From<&CartLine> for NewOrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            product_name: line.name.clone(),
            options: line.options_label(),
            price: line.line_total(),
        }
    }
}

/// Distribute `items` onto their parent orders, keeping item order.
pub(crate) fn attach_items(orders: &mut [Order], items: Vec<OrderItem>) {
    let mut by_order: FxHashMap<OrderId, Vec<OrderItem>> = FxHashMap::default();

    for item in items {
        by_order.entry(item.order_id).or_default().push(item);
    }

    for order in orders.iter_mut() {
        if let Some(items) = by_order.remove(&order.id) {
            order.items = items;
        }
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;
    use testresult::TestResult;

    use crate::domain::carts::options::OptionKey;

    use super::*;

    fn order(id: i64) -> Order {
        Order {
            id: OrderId::from_i64(id),
            customer_name: "Guest Customer".to_string(),
            total_amount: 0,
            status: OrderStatus::Paid,
            created_at: Timestamp::UNIX_EPOCH,
            items: Vec::new(),
        }
    }

    fn item(id: i64, order_id: i64, name: &str) -> OrderItem {
        OrderItem {
            id: OrderItemId::from_i64(id),
            order_id: OrderId::from_i64(order_id),
            product_id: None,
            product_name: name.to_string(),
            options: String::new(),
            price: 1000,
        }
    }

    #[test]
    fn attach_items_groups_by_parent() -> TestResult {
        let mut orders = vec![order(1), order(2), order(3)];

        attach_items(
            &mut orders,
            vec![
                item(10, 1, "Margherita"),
                item(11, 2, "Carbonara"),
                item(12, 1, "Cafe Latte"),
            ],
        );

        let [first, second, third] = orders.as_slice() else {
            return Err("expected three orders".into());
        };

        let names: Vec<&str> = first
            .items
            .iter()
            .map(|i| i.product_name.as_str())
            .collect();

        assert_eq!(names, ["Margherita", "Cafe Latte"]);
        assert_eq!(second.items.len(), 1);
        assert!(third.items.is_empty());

        Ok(())
    }

    #[test]
    fn order_item_freezes_line_total_and_options() {
        let line = CartLine {
            product_id: ProductId::from_i64(5),
            name: "Pizza A".to_string(),
            base_price: 3500,
            options: smallvec![OptionKey::ExtraCheese],
            addon_total: 300,
        };

        let item = NewOrderItem::from(&line);

        assert_eq!(
            item,
            NewOrderItem {
                product_id: ProductId::from_i64(5),
                product_name: "Pizza A".to_string(),
                options: "Extra Cheese".to_string(),
                price: 3800,
            }
        );
    }
}
