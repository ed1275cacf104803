use query_utils::prelude::*;

fn countries() -> CountryTable {
    CountryTable::from_json(
        r#"{"Germany": "DE", "France": "FR", "United States": "US"}"#,
    )
    .unwrap()
}

#[test]
fn test_numeric_close_boundaries() {
    assert!(numeric_close(10.005, 10.0, 0.01));
    assert!(!numeric_close(10.02, 10.0, 0.01));
    assert!(numeric_close(2.25, 2.0, 0.25));
    assert!(numeric_close(1.75, 2.0, 0.25));
}

#[test]
fn test_parse_and_compare_terms() {
    assert!(parse_and_compare("10", 10.0, 1.0));
    assert!(!parse_and_compare("abc", 10.0, 1.0));
    assert!(!parse_and_compare("10 apples", 10.0, 1.0));
}

#[test]
fn test_search_filters() {
    let name = Column::new("items", "name");
    let price = Column::new("items", "price");

    let filter = sql_maybe_and([
        ilike_substr("100%").apply(&name),
        check_number(&price, "19.99", 1.0),
    ]);

    assert_eq!(
        filter.sql(),
        r#"("items"."name" ILIKE ? AND ("items"."price" BETWEEN ? AND ?))"#
    );
    assert_eq!(filter.params().len(), 3);
    assert_eq!(filter.params()[0], &SQLValue::Text("%100\\%%".into()));
}

#[test]
fn test_non_numeric_term_matches_nothing() {
    let price = Column::new("items", "price");
    assert_eq!(check_number(&price, "cheap", 1.0).sql(), "FALSE");
}

#[test]
fn test_country_terms() {
    let table = countries();

    assert!(country_name_match("us", "united states", &table));
    assert!(country_name_match("DE", "de", &table));
    assert!(!country_name_match("FR", "Germany", &table));

    let code = Column::new("addresses", "country_code");
    let filter = check_country(&code, "France", &table);
    assert_eq!(filter.sql(), r#"LOWER("addresses"."country_code") = ?"#);
    assert_eq!(filter.params(), vec![&SQLValue::Text("fr".into())]);
}
