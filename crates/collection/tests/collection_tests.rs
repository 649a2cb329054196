//! Integration tests for nebula-collection.

use std::sync::atomic::{AtomicU32, Ordering};

use nebula_collection::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

#[derive(Debug, Default)]
struct Foo {
    hits: AtomicU32,
}

#[derive(Debug)]
struct Bar;

fn numbers(items: &[i64]) -> Collection<i64, AnyItem<i64>> {
    Collection::from_items(any_item(), items.iter().copied()).unwrap()
}

// ============================================================================
// CONTAINER COLLECTIONS
// ============================================================================

#[test]
fn container_collection_accepts_only_containers() {
    let mut c =
        ArrayCollection::from_items(container_item(), [json!([1]), json!([2]), json!([3])])
            .unwrap();

    c.add(json!([4])).unwrap();
    assert_eq!(c.count(), 4);

    let err = c.add(json!("x")).unwrap_err();
    let details = err.validation_error().unwrap();
    assert_eq!(details.code, "container_item");
    assert_eq!(details.param("actual"), Some("string"));
    assert_eq!(c.count(), 4);
}

#[rstest]
#[case(json!(null))]
#[case(json!(true))]
#[case(json!(1))]
#[case(json!(1.5))]
#[case(json!("x"))]
fn container_collection_rejects_scalars(#[case] item: Value) {
    let mut c = ArrayCollection::new(container_item());
    assert!(matches!(c.add(item), Err(CollectionError::InvalidItem(_))));
    assert!(c.is_empty());
}

#[test]
fn seeding_with_an_invalid_item_fails() {
    let result = ArrayCollection::from_items(container_item(), [json!([1]), json!(2)]);
    assert!(matches!(result, Err(CollectionError::InvalidItem(_))));
}

// ============================================================================
// OBJECT COLLECTIONS
// ============================================================================

#[test]
fn object_collection_bound_to_class() {
    let mut foos = ObjectCollection::of::<Foo>();

    foos.add(ObjectRef::new(Foo::default())).unwrap();
    let err = foos.add(ObjectRef::new(Bar)).unwrap_err();

    assert_eq!(err.validation_error().unwrap().code, "object_class");
    assert_eq!(foos.count(), 1);
}

#[test]
fn unconstrained_object_collection_accepts_any_class() {
    let mut objects = ObjectCollection::new(object_item());
    objects
        .add(ObjectRef::new(Foo::default()))
        .unwrap()
        .add(ObjectRef::new(Bar))
        .unwrap();
    assert_eq!(objects.count(), 2);
}

#[test]
fn objects_are_shared_between_collections() {
    let foo = ObjectRef::new(Foo::default());
    let a = ObjectCollection::from_items(object_item(), [foo.clone()]).unwrap();
    let b = a.filter(|_| true);

    a[0].downcast_ref::<Foo>()
        .unwrap()
        .hits
        .fetch_add(1, Ordering::SeqCst);

    let seen = b[0].downcast_ref::<Foo>().unwrap().hits.load(Ordering::SeqCst);
    assert_eq!(seen, 1);
    assert!(b.has(&foo));
    assert!(!b.has(&ObjectRef::new(Foo::default())));
}

// ============================================================================
// STRING COLLECTIONS
// ============================================================================

#[test]
fn string_collection_sort() {
    let mut c =
        StringCollection::from_items(string_item(), [json!("b"), json!("a"), json!("c")]).unwrap();
    c.sort();

    let order: Vec<&Value> = c.iter().map(|(_, v)| v).collect();
    assert_eq!(order, vec![&json!("a"), &json!("b"), &json!("c")]);
}

#[rstest]
#[case(string_item(), false)]
#[case(nullable_string_item(), true)]
fn string_collection_null_policy(#[case] validator: StringItem<Value>, #[case] accepted: bool) {
    let mut c = StringCollection::new(validator);
    assert_eq!(c.add(json!(null)).is_ok(), accepted);
}

// ============================================================================
// FUNCTIONAL OPERATIONS
// ============================================================================

#[test]
fn match_one_ambiguous_reports_matches() {
    let c = numbers(&[1, 2, 3, 2]);
    let err = c.match_one(|x| *x == 2).unwrap_err();

    assert_eq!(err.matched_items(), &[2, 2]);
    assert!(matches!(err, MatchError::Ambiguous { .. }));
}

#[rstest]
#[case(|x: &i64| *x == 3, Ok(3))]
#[case(|x: &i64| *x == 9, Err(MatchError::NoMatch))]
fn match_one_outcomes(
    #[case] predicate: fn(&i64) -> bool,
    #[case] expected: Result<i64, MatchError<i64>>,
) {
    assert_eq!(numbers(&[1, 2, 3, 2]).match_one(predicate), expected);
}

#[test]
fn group_by_parity() {
    let groups = numbers(&[1, 2, 3, 4]).group(|x| x % 2).unwrap();

    assert_eq!(groups.keys(), vec![Key::Index(1), Key::Index(0)]);
    assert_eq!(groups[1].values(), vec![1, 3]);
    assert_eq!(groups[0].values(), vec![2, 4]);
}

#[test]
fn group_by_json_field() {
    let c = Collection::from_items(
        any_item::<Value>(),
        [
            json!({"kind": "a", "n": 1}),
            json!({"kind": "b", "n": 2}),
            json!({"kind": "a", "n": 3}),
        ],
    )
    .unwrap();
    let groups = c.group(|v| v["kind"].clone()).unwrap();

    assert_eq!(groups.keys(), vec![Key::from("a"), Key::from("b")]);
    assert_eq!(groups["a"].count(), 2);
}

#[test]
fn string_collection_implode_joins_raw_text() {
    let c = StringCollection::from_items(string_item(), [json!("a"), json!("b")]).unwrap();
    assert_eq!(c.implode(","), "a,b");
}

#[test]
fn add_never_overwrites_at_index_limit() {
    let mut c = numbers(&[]);
    c.set(i64::MAX, 1).unwrap();

    assert!(matches!(c.add(2), Err(CollectionError::IndexOccupied { .. })));
    assert_eq!(c.values(), vec![1]);
}

#[test]
fn limit_window() {
    assert_eq!(numbers(&[10, 20, 30, 40]).limit(2, 1).values(), vec![20, 30]);
}

#[test]
fn chained_mutations_return_same_collection() {
    let mut c = numbers(&[]);
    c.add(1).unwrap().add(2).unwrap().set("x", 3).unwrap().remove(0).unwrap();

    assert_eq!(c.keys(), vec![Key::Index(1), Key::from("x")]);
    assert_eq!(c.get("x").ok(), Some(&3));
}

#[test]
fn split_moves_matches_out() {
    let mut c = numbers(&[1, 2, 3, 4]);
    let even = c.split(|x| x % 2 == 0);

    assert_eq!(even.values(), vec![2, 4]);
    assert_eq!(c.values(), vec![1, 3]);
    assert_eq!(c.keys(), vec![Key::Index(0), Key::Index(1)]);
}

#[test]
fn combined_validators() {
    let v = string_item::<Value>().and(predicate(
        "short",
        "must be at most 3 characters",
        |v: &Value| v.as_str().is_some_and(|s| s.len() <= 3),
    ));
    let mut c = Collection::new(v);

    assert!(c.add(json!("abc")).is_ok());
    assert!(c.add(json!("abcd")).is_err());
    assert!(c.add(json!(1)).is_err());
    assert_eq!(c.implode("|"), "abc");
}

#[test]
fn missing_key_errors() {
    let mut c = numbers(&[1]);
    let err = c.get(5).unwrap_err();

    assert_eq!(err, CollectionError::key_not_found(5));
    assert_eq!(
        err.to_string(),
        "Element with key 5 was not found in collection"
    );
    assert!(c.remove("nope").is_err());
    assert_eq!(c.values(), vec![1]);
}

#[cfg(feature = "serde")]
#[test]
fn serializes_as_keyed_map() {
    let mut c = numbers(&[1]);
    c.set("name", 2).unwrap();
    assert_eq!(serde_json::to_value(&c).unwrap(), json!({"0": 1, "name": 2}));
}
