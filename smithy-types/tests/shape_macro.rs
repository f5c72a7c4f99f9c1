/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use proptest::prelude::*;
use smithy_types::schema::ShapeType;
use smithy_types::{Instant, Shape};
use std::collections::HashSet;

smithy_types::string_enum! {
    pub enum Level {
        Low = "low",
        High = "high",
    }
}

smithy_types::shape! {
    pub struct Inner = "Inner" {
        string name, set_name, with_name = "Name";
        list<String> values, set_values, with_values = "Values";
    }
}

smithy_types::shape! {
    /// One member of every kind.
    pub struct Everything = "Everything" {
        /// Plain string.
        string label, set_label, with_label = "Label";
        boolean enabled | is_enabled, set_enabled, with_enabled = "Enabled";
        int count, set_count, with_count = "Count";
        long total, set_total, with_total = "Total";
        double ratio, set_ratio, with_ratio = "Ratio";
        timestamp created, set_created, with_created = "Created";
        enumeration<Level> level | level_as_str, set_level, with_level = "Level";
        structure<Inner> inner, set_inner, with_inner = "Inner";
        list<Inner> inners, set_inners, with_inners = "Inners";
        list<String> names, set_names, with_names = "Names";
    }
}

fn populated() -> Everything {
    Everything::new()
        .with_label("a")
        .with_enabled(true)
        .with_count(3)
        .with_total(1 << 40)
        .with_ratio(0.5)
        .with_created(Instant::from_epoch_seconds(1576540098))
        .with_level(Level::High)
        .with_inner(Inner::new().with_name("n").with_values(["x", "y"]))
        .with_inners([Inner::new()])
        .with_names(["p", "q"])
}

#[test]
fn new_shape_is_empty() {
    let shape = Everything::new();
    assert!(shape.is_empty());
    assert_eq!(shape.to_string(), "{}");
    assert_eq!(shape, Everything::default());
    assert_eq!(shape.label(), None);
    assert_eq!(shape.enabled(), None);
    assert_eq!(shape.names(), None);
}

#[test]
fn renders_every_kind() {
    assert_eq!(
        populated().to_string(),
        "{Label: a,Enabled: true,Count: 3,Total: 1099511627776,Ratio: 0.5,\
         Created: 2019-12-16T23:48:18Z,Level: high,Inner: {Name: n,Values: [x, y]},\
         Inners: [{}],Names: [p, q]}"
    );
}

#[test]
fn schema_lists_members_in_declaration_order() {
    let shape = Everything::new();
    let schema = shape.schema();
    assert_eq!(schema.name(), "Everything");
    let names: Vec<_> = schema.members().iter().map(|m| m.name()).collect();
    assert_eq!(
        names,
        vec![
            "Label", "Enabled", "Count", "Total", "Ratio", "Created", "Level", "Inner",
            "Inners", "Names"
        ]
    );
    let level = schema.member("Level").unwrap();
    assert_eq!(level.field_name(), "level");
    assert_eq!(level.shape_type(), ShapeType::Enum);
    assert_eq!(
        schema.member("Inners").map(|m| m.shape_type()),
        Some(ShapeType::List)
    );
}

#[test]
fn boolean_alias_reads_same_storage() {
    let mut shape = Everything::new().with_enabled(false);
    assert_eq!(shape.enabled(), Some(false));
    assert_eq!(shape.is_enabled(), Some(false));
    shape.set_enabled(None);
    assert_eq!(shape.is_enabled(), None);
}

#[test]
fn enumeration_accepts_raw_strings() {
    let shape = Everything::new().with_level("high");
    assert_eq!(shape.level(), Some(&Level::High));
    assert_eq!(shape.level_as_str(), Some("high"));

    let future = Everything::new().with_level("extreme");
    assert_eq!(future.level(), Some(&Level::Unknown("extreme".into())));
    assert_eq!(future.level_as_str(), Some("extreme"));
    assert_eq!(Level::values(), &["low", "high"]);
}

#[test]
fn list_fluent_setter_appends() {
    let shape = Everything::new().with_names(["x"]).with_names(["y"]);
    assert_eq!(shape.names(), Some(&["x".to_string(), "y".to_string()][..]));

    // zero items still creates the list
    let empty = Everything::new().with_names(Vec::<String>::new());
    assert_eq!(empty.names(), Some(&[][..]));
    assert_ne!(empty, Everything::new());
    assert_eq!(empty.to_string(), "{Names: []}");
}

#[test]
fn list_setter_replaces_and_clears() {
    let mut shape = Everything::new().with_names(["x", "y"]);
    shape.set_names(Some(vec!["z".to_string()]));
    assert_eq!(shape.names(), Some(&["z".to_string()][..]));
    shape.set_names(None);
    assert_eq!(shape.names(), None);
    shape.set_names(Some(vec![]));
    assert_eq!(shape.names(), Some(&[][..]));
}

#[test]
fn list_setter_owns_its_items() {
    let mut source = vec!["a".to_string(), "b".to_string()];
    let mut shape = Everything::new();
    shape.set_names(Some(source.clone()));
    source.push("c".to_string());
    source[0].push('!');
    assert_eq!(shape.names(), Some(&["a".to_string(), "b".to_string()][..]));
}

#[test]
fn setters_chain_in_place() {
    let mut shape = Everything::new();
    shape
        .set_label(Some("l".into()))
        .set_count(Some(0))
        .set_ratio(Some(0.0));
    assert_eq!(shape.to_string(), "{Label: l,Count: 0,Ratio: 0.0}");
}

#[test]
fn serde_omits_absent_and_keeps_empty() {
    let shape = Everything::new()
        .with_label("")
        .with_count(0)
        .with_names(Vec::<String>::new());
    let json = serde_json::to_value(&shape).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "Label": "", "Count": 0, "Names": [] })
    );
    let back: Everything = serde_json::from_value(json).unwrap();
    assert_eq!(back, shape);

    let full = populated();
    let back: Everything = serde_json::from_str(&serde_json::to_string(&full).unwrap()).unwrap();
    assert_eq!(back, full);
}

#[test]
fn non_finite_doubles_stay_present_through_serde() {
    for ratio in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let shape = Everything::new().with_ratio(ratio);
        let json = serde_json::to_string(&shape).unwrap();
        let back: Everything = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape, "{} did not round trip", json);
        assert!(back.ratio().is_some());
    }
    assert_eq!(
        serde_json::to_value(Everything::new().with_ratio(f64::NAN)).unwrap(),
        serde_json::json!({ "Ratio": "NaN" })
    );
}

#[test]
fn usable_in_hash_sets() {
    let mut set = HashSet::new();
    set.insert(populated());
    set.insert(populated());
    set.insert(Everything::new());
    assert_eq!(set.len(), 2);
}

#[derive(Debug, Clone)]
enum Edit {
    Label(Option<String>),
    Enabled(Option<bool>),
    Count(Option<i32>),
    Total(Option<i64>),
    Ratio(Option<f64>),
    Level(Option<String>),
    Names(Option<Vec<String>>),
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        proptest::option::of("[a-z0-9 ]{0,8}").prop_map(Edit::Label),
        proptest::option::of(any::<bool>()).prop_map(Edit::Enabled),
        proptest::option::of(any::<i32>()).prop_map(Edit::Count),
        proptest::option::of(any::<i64>()).prop_map(Edit::Total),
        proptest::option::of(any::<f64>()).prop_map(Edit::Ratio),
        proptest::option::of("low|high|[a-z]{1,8}").prop_map(Edit::Level),
        proptest::option::of(proptest::collection::vec("[a-z]{0,4}", 0..4)).prop_map(Edit::Names),
    ]
}

fn apply(shape: &mut Everything, edit: Edit) {
    match edit {
        Edit::Label(v) => shape.set_label(v),
        Edit::Enabled(v) => shape.set_enabled(v),
        Edit::Count(v) => shape.set_count(v),
        Edit::Total(v) => shape.set_total(v),
        Edit::Ratio(v) => shape.set_ratio(v),
        Edit::Level(v) => shape.set_level(v.map(Level::from)),
        Edit::Names(v) => shape.set_names(v),
    };
}

fn shape_from(edits: Vec<Edit>) -> Everything {
    let mut shape = Everything::new();
    for edit in edits {
        apply(&mut shape, edit);
    }
    shape
}

fn edits() -> impl Strategy<Value = Vec<Edit>> {
    proptest::collection::vec(edit(), 0..10)
}

proptest! {
    #[test]
    fn setting_one_member_leaves_others_alone(edits in edits(), label in proptest::option::of(".*")) {
        let before = shape_from(edits);
        let mut after = before.clone();
        after.set_label(label.clone());
        prop_assert_eq!(after.label(), label.as_deref());
        prop_assert_eq!(after.enabled(), before.enabled());
        prop_assert_eq!(after.count(), before.count());
        prop_assert_eq!(after.total(), before.total());
        prop_assert_eq!(after.ratio().map(f64::to_bits), before.ratio().map(f64::to_bits));
        prop_assert_eq!(after.level(), before.level());
        prop_assert_eq!(after.names(), before.names());
    }

    #[test]
    fn equality_is_reflexive_and_symmetric(a in edits(), b in edits()) {
        let (a, b) = (shape_from(a), shape_from(b));
        prop_assert_eq!(&a, &a.clone());
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn equal_shapes_hash_equal(edits in edits()) {
        let a = shape_from(edits.clone());
        let b = shape_from(edits);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn rendering_lists_exactly_the_present_members(a in edits()) {
        let shape = shape_from(a);
        let rendered = shape.to_string();
        let present = shape.present_members();
        let mut cursor = 0;
        for name in &present {
            let needle = format!("{}: ", name);
            let found = rendered[cursor..].find(&needle);
            prop_assert!(found.is_some(), "{} missing from {}", name, rendered);
            cursor += found.unwrap_or(0) + needle.len();
        }
        for member in shape.schema().members() {
            if !present.contains(&member.name()) {
                let needle = format!("{}: ", member.name());
                prop_assert!(
                    !rendered.starts_with(&format!("{{{}", needle))
                        && !rendered.contains(&format!(",{}", needle)),
                    "{} should be absent from {}", member.name(), rendered
                );
            }
        }
        prop_assert!(!rendered.ends_with(",}"), "trailing separator in {}", rendered);
    }

    #[test]
    fn absent_differs_from_zero_value(edits in edits()) {
        let mut absent = shape_from(edits);
        absent.set_enabled(None);
        let mut zero = absent.clone();
        zero.set_enabled(Some(false));
        prop_assert_ne!(absent, zero);
    }
}
