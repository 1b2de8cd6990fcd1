use super::*;
use sl_core::Value;
use tempfile::TempDir;

#[test]
fn test_normalize_column_name() {
    assert_eq!(normalize_column_name("Order ID"), "orderid");
    assert_eq!(normalize_column_name("order_id"), "orderid");
    assert_eq!(normalize_column_name("  OrderID  "), "orderid");
    assert_eq!(normalize_column_name("Ship_Via Code"), "shipviacode");
}

#[test]
fn test_normalized_headers_have_no_spaces_or_underscores() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("sqlserver_orders.csv"),
        "Order ID,Customer_ID,Ship City\n1,VINET,Reims\n",
    )
    .unwrap();

    let table = load_source_table(dir.path(), "orders", &["orderid"]);
    for column in table.columns() {
        assert!(!column.contains(' '), "space in {}", column);
        assert!(!column.contains('_'), "underscore in {}", column);
        assert_eq!(column, &column.to_lowercase());
    }
}

#[test]
fn test_merges_multiple_source_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("access_orders.csv"),
        "OrderID,Freight\n1,10.0\n2,20.0\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("sqlserver_orders.csv"),
        "Order ID,Freight\n3,30.0\n",
    )
    .unwrap();

    let table = load_source_table(dir.path(), "orders", &["orderid"]);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.columns(), &["orderid", "freight"]);
}

#[test]
fn test_dedup_keeps_first_loaded_file() {
    let dir = TempDir::new().unwrap();
    // Files load in lexicographic order: access_ before sqlserver_
    std::fs::write(
        dir.path().join("access_orders.csv"),
        "OrderID,Source\n1,access\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("sqlserver_orders.csv"),
        "Order ID,Source\n1,sqlserver\n2,sqlserver\n",
    )
    .unwrap();

    let table = load_source_table(dir.path(), "orders", &["orderid"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.get(0, "source"), Some(&Value::from("access")));
}

#[test]
fn test_composite_key_dedup() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("a_order_details.csv"),
        "OrderID,ProductID,Quantity\n1,10,5\n1,11,2\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("b_order_details.csv"),
        "Order_ID,Product_ID,Quantity\n1,10,99\n",
    )
    .unwrap();

    let table = load_source_table(dir.path(), "order_details", &["orderid", "productid"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.get(0, "quantity"), Some(&Value::from("5")));
}

#[test]
fn test_no_matching_files_yields_empty_table() {
    let dir = TempDir::new().unwrap();
    let table = load_source_table(dir.path(), "orders", &["orderid"]);
    assert!(table.is_empty());
    assert_eq!(table.column_count(), 0);
}

#[test]
fn test_unreadable_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("good_orders.csv"), "OrderID\n1\n").unwrap();
    // A directory matching the pattern cannot be read as CSV
    std::fs::create_dir(dir.path().join("zbad_orders.csv")).unwrap();

    let table = load_source_table(dir.path(), "orders", &["orderid"]);
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_missing_key_column_skips_dedup() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("x_region.csv"),
        "Description\nEastern\nEastern\n",
    )
    .unwrap();

    let table = load_source_table(dir.path(), "region", &["regionid"]);
    assert_eq!(table.row_count(), 2);
}

#[test]
fn test_header_collision_last_wins() {
    let dir = TempDir::new().unwrap();
    // "Order ID" and "order_id" both normalize to orderid
    std::fs::write(
        dir.path().join("x_orders.csv"),
        "Order ID,order_id\nfirst,second\n",
    )
    .unwrap();

    let table = load_source_table(dir.path(), "orders", &["orderid"]);
    assert_eq!(table.column_count(), 1);
    assert_eq!(table.get(0, "orderid"), Some(&Value::from("second")));
}
