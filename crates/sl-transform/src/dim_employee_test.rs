use super::*;

fn employees() -> Table {
    let mut t = Table::with_columns([
        "employeeid",
        "firstname",
        "lastname",
        "title",
        "city",
        "country",
    ]);
    t.push_row(vec![
        Value::from("1"),
        Value::from("Nancy"),
        Value::from("Davolio"),
        Value::from("Sales Representative"),
        Value::from("Seattle"),
        Value::from("USA"),
    ]);
    t.push_row(vec![
        Value::from("2"),
        Value::from("Andrew"),
        Value::from("Fuller"),
        Value::from("Vice President"),
        Value::from("Tacoma"),
        Value::from("USA"),
    ]);
    t
}

fn assignments() -> Table {
    let mut t = Table::with_columns(["employeeid", "territoryid"]);
    t.push_row(vec![Value::from("1"), Value::from("01581")]);
    t
}

fn territories() -> Table {
    let mut t = Table::with_columns(["territoryid", "territorydescription", "regionid"]);
    t.push_row(vec![
        Value::from("01581"),
        Value::from("Westboro"),
        Value::from("1"),
    ]);
    t
}

fn regions() -> Table {
    let mut t = Table::with_columns(["regionid", "regiondescription"]);
    t.push_row(vec![Value::from("1"), Value::from("Eastern")]);
    t
}

#[test]
fn test_empty_employees_degrades() {
    let empty = Table::with_columns(["employeeid"]);
    let outcome = build_dim_employee(&empty, &assignments(), &territories(), &regions());
    assert_eq!(
        outcome.empty_reason(),
        Some(EmptyReason::SourceEmpty("employees"))
    );
}

#[test]
fn test_full_name_derivation() {
    let dim =
        build_dim_employee(&employees(), &assignments(), &territories(), &regions()).into_table();
    assert_eq!(
        dim.get(0, "Employee_name"),
        Some(&Value::from("Nancy Davolio"))
    );
}

#[test]
fn test_surrogate_keys_dense() {
    let dim =
        build_dim_employee(&employees(), &assignments(), &territories(), &regions()).into_table();
    assert_eq!(dim.get(0, "sk_employee"), Some(&Value::Int(1)));
    assert_eq!(dim.get(1, "sk_employee"), Some(&Value::Int(2)));
}

#[test]
fn test_enriched_employee_gets_aggregates() {
    let dim =
        build_dim_employee(&employees(), &assignments(), &territories(), &regions()).into_table();
    assert_eq!(dim.get(0, "territories"), Some(&Value::from("Westboro")));
    assert_eq!(dim.get(0, "sales_region"), Some(&Value::from("Eastern")));
}

#[test]
fn test_unassigned_employee_gets_no_territory_defaults() {
    let dim =
        build_dim_employee(&employees(), &assignments(), &territories(), &regions()).into_table();
    // Employee 2 has no assignment rows, but enrichment data exists
    assert_eq!(dim.get(1, "territories"), Some(&Value::from("No Territory")));
    assert_eq!(dim.get(1, "sales_region"), Some(&Value::from("No Region")));
}

#[test]
fn test_absent_enrichment_marks_everyone_unknown() {
    let empty = Table::new();
    let dim = build_dim_employee(&employees(), &empty, &territories(), &regions()).into_table();
    // Distinct from the zero-assignments case above
    assert_eq!(dim.get(0, "territories"), Some(&Value::from("Unknown")));
    assert_eq!(dim.get(1, "sales_region"), Some(&Value::from("Unknown")));
}

#[test]
fn test_target_column_order() {
    let dim =
        build_dim_employee(&employees(), &assignments(), &territories(), &regions()).into_table();
    assert_eq!(
        dim.columns(),
        &[
            "sk_employee",
            "bk_employee_id",
            "Employee_name",
            "title",
            "city",
            "country",
            "sales_region",
            "territories"
        ]
    );
}

#[test]
fn test_optional_columns_tolerated() {
    let mut minimal = Table::with_columns(["employeeid", "firstname", "lastname"]);
    minimal.push_row(vec![
        Value::from("1"),
        Value::from("Nancy"),
        Value::from("Davolio"),
    ]);

    let dim =
        build_dim_employee(&minimal, &assignments(), &territories(), &regions()).into_table();
    assert!(!dim.has_column("title"));
    assert!(!dim.has_column("city"));
    assert!(dim.has_column("Employee_name"));
}

#[test]
fn test_idempotent_business_attributes() {
    let first =
        build_dim_employee(&employees(), &assignments(), &territories(), &regions()).into_table();
    let second =
        build_dim_employee(&employees(), &assignments(), &territories(), &regions()).into_table();
    assert_eq!(first, second);
}
