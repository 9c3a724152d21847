use super::*;

fn names(orders: &[&Order]) -> Vec<String> {
    orders.iter().map(|o| o.customer_name.clone()).collect()
}

#[test]
fn all_filters_return_every_order() {
    let orders = seed_orders();
    assert_eq!(
        names(&filter_orders(&orders, ALL, ALL, "")),
        ["Amit", "Rohit Singh"]
    );
}

#[test]
fn category_matches_status_substring() {
    let orders = seed_orders();
    assert_eq!(
        names(&filter_orders(&orders, "Composing", ALL, "")),
        ["Rohit Singh"]
    );
    assert_eq!(names(&filter_orders(&orders, "Ready", ALL, "")), ["Amit"]);
    assert!(filter_orders(&orders, "Delivered", ALL, "").is_empty());
}

#[test]
fn status_dropdown_requires_exact_match() {
    let orders = seed_orders();
    assert_eq!(
        names(&filter_orders(&orders, ALL, "Ready to Deliver", "")),
        ["Amit"]
    );
    assert!(filter_orders(&orders, ALL, "Ready", "").is_empty());
}

#[test]
fn search_is_case_insensitive_over_name_id_and_contact() {
    let orders = seed_orders();
    assert_eq!(names(&filter_orders(&orders, ALL, ALL, "amit")), ["Amit"]);
    assert_eq!(names(&filter_orders(&orders, ALL, ALL, "AMIT")), ["Amit"]);
    assert_eq!(
        names(&filter_orders(&orders, ALL, ALL, "ord-1002")),
        ["Rohit Singh"]
    );
    assert_eq!(names(&filter_orders(&orders, ALL, ALL, "98765")), ["Amit"]);
}

#[test]
fn predicates_are_combined() {
    let orders = seed_orders();
    assert!(filter_orders(&orders, "Composing", ALL, "amit").is_empty());
    assert!(filter_orders(&orders, ALL, "Composing", "amit").is_empty());
}

#[test]
fn expanding_one_order_collapses_the_other() {
    let mut board = OrderBoard::with_seed_orders();
    let a = board.orders()[0].id.clone();
    let b = board.orders()[1].id.clone();

    board.toggle_expanded(&a);
    assert!(board.is_expanded(&a));

    assert_eq!(board.toggle_expanded(&b), Some(&b));
    assert!(board.is_expanded(&b));
    assert!(!board.is_expanded(&a));

    assert_eq!(board.toggle_expanded(&b), None);
    assert_eq!(board.expanded(), None);
}

#[test]
fn board_summary_follows_filters() {
    let mut board = OrderBoard::with_seed_orders();
    assert_eq!(
        board.summary(),
        OrderSummary {
            count: 2,
            total_amount: 6200,
            total_pending: 3700,
        }
    );

    board.set_search("rohit");
    assert_eq!(board.search(), "rohit");
    assert_eq!(
        board.summary(),
        OrderSummary {
            count: 1,
            total_amount: 1200,
            total_pending: 700,
        }
    );

    board.set_search("");
    board.set_category("Composing");
    board.set_status("Composing");
    assert_eq!(board.visible().len(), 1);
}

#[test]
fn pending_never_underflows() {
    let mut order = seed_orders().remove(0);
    order.advance_paid = order.amount + 100;
    assert_eq!(order.pending(), 0);
}
