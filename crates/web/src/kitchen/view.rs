//! Kitchen feed fragment view.

use jiff::{Timestamp, tz::TimeZone};
use serde::Serialize;

use ovenline_app::domain::{
    kitchen::{KitchenFeed, reconciler::WaitTime},
    orders::{models::Order, status::OrderStatus},
};

#[derive(Debug, Default, Serialize)]
pub(crate) struct FeedView {
    unavailable: bool,
    active: Vec<TicketView>,
    completed: Vec<TicketView>,
}

impl FeedView {
    pub(crate) fn new(feed: KitchenFeed, now: Timestamp) -> Self {
        Self {
            unavailable: false,
            active: feed
                .active
                .into_iter()
                .map(|order| TicketView::new(order, now))
                .collect(),
            completed: feed
                .completed
                .into_iter()
                .map(|order| TicketView::new(order, now))
                .collect(),
        }
    }

    /// Empty feed flagged so the page keeps polling behind a notice.
    pub(crate) fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize)]
struct TicketView {
    id: i64,
    created_at: String,
    wait: String,
    overdue: bool,
    customer_name: String,
    ordered_at: String,
    items: Vec<TicketItemView>,
    next_status: &'static str,
    action_label: &'static str,
}

#[derive(Debug, Serialize)]
struct TicketItemView {
    name: String,
    options: String,
}

impl TicketView {
    fn new(order: Order, now: Timestamp) -> Self {
        let wait = WaitTime::between(order.created_at, now);
        let next = order.status.toggled();

        Self {
            id: order.id.into_i64(),
            created_at: order.created_at.to_string(),
            wait: wait.to_string(),
            overdue: order.status == OrderStatus::Paid && wait.overdue,
            ordered_at: order
                .created_at
                .to_zoned(TimeZone::system())
                .strftime("%H:%M")
                .to_string(),
            customer_name: order.customer_name,
            items: order
                .items
                .into_iter()
                .map(|item| TicketItemView {
                    name: item.product_name,
                    options: item.options,
                })
                .collect(),
            next_status: next.as_str(),
            action_label: match next {
                OrderStatus::Completed => "Complete Order",
                OrderStatus::Paid => "↩ Restore",
            },
        }
    }
}
