use query_utils::prelude::*;
use serde_json::{Value, json};

fn rows(values: Vec<Value>) -> Vec<Record> {
    values
        .into_iter()
        .map(|value| match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        })
        .collect()
}

fn objects(records: Vec<Record>) -> Vec<Value> {
    records.into_iter().map(Value::Object).collect()
}

#[test]
fn test_group_by_default_scenario() {
    let result = rows(vec![
        json!({"id": 1, "value": "a"}),
        json!({"id": 1, "value": "b"}),
        json!({"id": 2, "value": "c"}),
    ]);

    let grouped = group_result_set(result, "id").unwrap();

    assert_eq!(
        objects(grouped),
        vec![
            json!({"id": 1, "value": ["a", "b"]}),
            json!({"id": 2, "value": "c"}),
        ]
    );
}

#[test]
fn test_group_joined_rows() {
    // posts left-joined with their comments, ordered by post id
    let result = rows(vec![
        json!({"id": 10, "title": "Hello", "author__name": "Ann", "comments__body": "first"}),
        json!({"id": 10, "title": "Hello", "author__name": "Ann", "comments__body": "second"}),
        json!({"id": 11, "title": "Again", "author__name": "Bob", "comments__body": null}),
    ]);

    let grouped = group_result_set(result, "id").unwrap();

    assert_eq!(
        objects(grouped),
        vec![
            json!({
                "id": 10,
                "title": "Hello",
                "author": {"name": "Ann"},
                "comments": [{"body": "first"}, {"body": "second"}],
            }),
            json!({
                "id": 11,
                "title": "Again",
                "author": {"name": "Bob"},
                "comments": {"body": null},
            }),
        ]
    );
}

#[test]
fn test_group_by_composite_key_label() {
    let result = rows(vec![
        json!({"user__id": 1, "role": "admin"}),
        json!({"user__id": 1, "role": "editor"}),
    ]);

    let grouped = group_result_set(result, "user__id").unwrap();

    assert_eq!(
        objects(grouped),
        vec![json!({"user": {"id": 1}, "role": ["admin", "editor"]})]
    );
}

#[test]
fn test_group_unsorted_input_splits_groups() {
    let result = rows(vec![
        json!({"id": 1, "v": "a"}),
        json!({"id": 2, "v": "b"}),
        json!({"id": 1, "v": "c"}),
    ]);

    let grouped = group_result_set(result, "id").unwrap();

    assert_eq!(grouped.len(), 3);
    assert_eq!(grouped[0]["v"], "a");
    assert_eq!(grouped[2]["v"], "c");
}

#[test]
fn test_group_rows_without_key() {
    let result = rows(vec![json!({"v": 1}), json!({"v": 2}), json!({"id": 3, "v": 3})]);

    let grouped = group_result_set(result, "id").unwrap();

    assert_eq!(
        objects(grouped),
        vec![json!({"v": [1, 2]}), json!({"id": 3, "v": 3})]
    );
}

#[test]
fn test_group_propagates_conflicts() {
    let result = rows(vec![json!({"id": 1, "a": 1, "a__b": 2})]);

    assert!(matches!(
        group_result_set(result, "id"),
        Err(query_utils::error::QueryUtilsError::ConflictingStructure { .. })
    ));
}

#[test]
fn test_entity_to_dict_options_from_config() {
    let options: NestOptions = serde_json::from_value(json!({"include_privates": true})).unwrap();
    assert!(options.transform_attrs);

    let row = rows(vec![json!({"_score": 0.5, "user__name": "Ann"})]).remove(0);
    let nested = entity_to_dict(&row, options).unwrap();

    assert_eq!(
        Value::Object(nested),
        json!({"_score": 0.5, "user": {"name": "Ann"}})
    );
}

#[test]
fn test_set_attribute_through_facade() {
    let mut entity = Record::new();
    set_attribute(&mut entity, "address__geo__lat", json!(52.5)).unwrap();
    set_attribute(&mut entity, "address__geo__lng", json!(13.4)).unwrap();

    assert_eq!(
        Value::Object(entity),
        json!({"address": {"geo": {"lat": 52.5, "lng": 13.4}}})
    );
}
