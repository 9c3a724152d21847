//! Order board: demo orders, the three-way filter, and exclusive
//! expand/collapse of order details.

use chrono::NaiveDate;
use shared::domain::{Attachments, Order, OrderId};

/// Filter value that disables the category or status predicate.
pub const ALL: &str = "All";

pub const CATEGORY_TABS: &[&str] = &[ALL, "Composing", "Printing", "Ready", "Delivered"];

pub const STATUS_OPTIONS: &[&str] = &[
    ALL,
    "Pending",
    "Composing",
    "Proof Sent",
    "Printing",
    "Ready to Deliver",
    "Delivered",
];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn seed_orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ORD-1001"),
            customer_name: "Amit".to_string(),
            product_type: "Wedding Cards".to_string(),
            order_date: date(2025, 1, 10),
            delivery_date: date(2025, 1, 18),
            amount: 5000,
            advance_paid: 2000,
            status: "Ready to Deliver".to_string(),
            contact: Some("9876543210".to_string()),
            attachments: Some(Attachments {
                sample: Some("wedding-card-sample.jpg".to_string()),
                order_form: Some("ORD-1001-form.pdf".to_string()),
                voice_note: None,
            }),
        },
        Order {
            id: OrderId::new("ORD-1002"),
            customer_name: "Rohit Singh".to_string(),
            product_type: "Visiting Cards".to_string(),
            order_date: date(2025, 1, 12),
            delivery_date: date(2025, 1, 20),
            amount: 1200,
            advance_paid: 500,
            status: "Composing".to_string(),
            contact: Some("9123456780".to_string()),
            attachments: Some(Attachments {
                sample: None,
                order_form: None,
                voice_note: Some("ORD-1002-instructions.m4a".to_string()),
            }),
        },
    ]
}

/// AND of three predicates:
/// - `category`: status contains the token (`"All"` disables),
/// - `status`: status equals the value (`"All"` disables),
/// - `search`: case-insensitive substring of customer name, order id or
///   contact number (empty disables).
pub fn filter_orders<'a>(
    orders: &'a [Order],
    category: &str,
    status: &str,
    search: &str,
) -> Vec<&'a Order> {
    let needle = search.to_lowercase();
    orders
        .iter()
        .filter(|order| category == ALL || order.status.contains(category))
        .filter(|order| status == ALL || order.status == status)
        .filter(|order| needle.is_empty() || matches_search(order, &needle))
        .collect()
}

fn matches_search(order: &Order, needle: &str) -> bool {
    order.customer_name.to_lowercase().contains(needle)
        || order.id.as_str().to_lowercase().contains(needle)
        || order
            .contact
            .as_deref()
            .is_some_and(|contact| contact.to_lowercase().contains(needle))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderSummary {
    pub count: usize,
    pub total_amount: u64,
    pub total_pending: u64,
}

pub struct OrderBoard {
    orders: Vec<Order>,
    category: String,
    status: String,
    search: String,
    expanded: Option<OrderId>,
}

impl OrderBoard {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders,
            category: ALL.to_string(),
            status: ALL.to_string(),
            search: String::new(),
            expanded: None,
        }
    }

    pub fn with_seed_orders() -> Self {
        Self::new(seed_orders())
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn visible(&self) -> Vec<&Order> {
        filter_orders(&self.orders, &self.category, &self.status, &self.search)
    }

    pub fn summary(&self) -> OrderSummary {
        self.visible()
            .into_iter()
            .fold(OrderSummary::default(), |acc, order| OrderSummary {
                count: acc.count + 1,
                total_amount: acc.total_amount + order.amount,
                total_pending: acc.total_pending + order.pending(),
            })
    }

    pub fn expanded(&self) -> Option<&OrderId> {
        self.expanded.as_ref()
    }

    pub fn is_expanded(&self, id: &OrderId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    /// Expands `id`, collapsing whichever order was open; pressing the open
    /// order again collapses it.
    pub fn toggle_expanded(&mut self, id: &OrderId) -> Option<&OrderId> {
        if self.is_expanded(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.clone());
        }
        self.expanded.as_ref()
    }
}

#[cfg(test)]
#[path = "tests/orders_tests.rs"]
mod tests;
