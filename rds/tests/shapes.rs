/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use proptest::prelude::*;
use rds::input::{CopyDbSnapshotInput, DescribeDbClustersInput};
use rds::model::{
    DbCluster, DbClusterMember, EngineFamily, Filter, RecurringCharge, ReservedDbInstance, Tag,
    WriteForwardingStatus,
};
use smithy_types::{Instant, Shape};
use std::collections::HashMap;

#[test]
fn describe_db_clusters_scenario() {
    let fluent = DescribeDbClustersInput::new()
        .with_db_cluster_identifier("my-cluster1")
        .with_max_records(100);
    let mut in_place = DescribeDbClustersInput::new();
    in_place.set_max_records(Some(100));
    in_place.set_db_cluster_identifier(Some("my-cluster1".into()));

    assert_eq!(
        fluent.to_string(),
        "{DBClusterIdentifier: my-cluster1,MaxRecords: 100}"
    );
    assert_eq!(fluent, in_place);
    assert_eq!(fluent.hash_code(), in_place.hash_code());
    assert_eq!(fluent.db_cluster_identifier(), Some("my-cluster1"));
    assert_eq!(fluent.marker(), None);
}

#[test]
fn engine_family_string_getter() {
    let input = rds::input::CreateDbProxyInput::new().with_engine_family(EngineFamily::Mysql);
    assert_eq!(input.engine_family_as_str(), Some("MYSQL"));
}

#[test]
fn shapes_key_hash_maps() {
    let mut seen = HashMap::new();
    let key = CopyDbSnapshotInput::new()
        .with_source_db_snapshot_identifier("rds:db-2020-05-04")
        .with_copy_tags(true);
    seen.insert(key.clone(), 1);
    *seen.entry(key).or_insert(0) += 1;
    seen.insert(CopyDbSnapshotInput::new(), 0);
    assert_eq!(seen.len(), 2);
    assert_eq!(
        seen[&CopyDbSnapshotInput::new()
            .with_source_db_snapshot_identifier("rds:db-2020-05-04")
            .with_copy_tags(true)],
        2
    );
}

#[test]
fn db_cluster_json_uses_wire_names() {
    let cluster = DbCluster::new()
        .with_db_cluster_identifier("my-cluster1")
        .with_multi_az(false)
        .with_backtrack_window(0)
        .with_cluster_create_time(Instant::from_epoch_seconds(1576540098))
        .with_db_cluster_members([DbClusterMember::new().with_promotion_tier(1)])
        .with_global_write_forwarding_status(WriteForwardingStatus::UnknownValue)
        .with_custom_endpoints(Vec::<String>::new());
    let json = serde_json::to_value(&cluster).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "DBClusterIdentifier": "my-cluster1",
            "CustomEndpoints": [],
            "MultiAZ": false,
            "DBClusterMembers": [{ "PromotionTier": 1 }],
            "ClusterCreateTime": "2019-12-16T23:48:18Z",
            "BacktrackWindow": 0,
            "GlobalWriteForwardingStatus": "unknown"
        })
    );
    let parsed: DbCluster = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, cluster);
}

#[test]
fn reserved_instance_renders_doubles_and_timestamps() {
    let reserved = ReservedDbInstance::new()
        .with_start_time(Instant::from_fractional_seconds(1576540098, 0.5))
        .with_fixed_price(1.0)
        .with_usage_price(0.125)
        .with_recurring_charges([RecurringCharge::new()
            .with_recurring_charge_amount(0.0)
            .with_recurring_charge_frequency("Hourly")]);
    assert_eq!(
        reserved.to_string(),
        "{StartTime: 2019-12-16T23:48:18.5Z,FixedPrice: 1.0,UsagePrice: 0.125,\
         RecurringCharges: [{RecurringChargeAmount: 0.0,RecurringChargeFrequency: Hourly}]}"
    );
}

#[test]
fn extreme_prices_render_in_exponent_form() {
    let large = RecurringCharge::new().with_recurring_charge_amount(1e16);
    assert_eq!(large.to_string(), "{RecurringChargeAmount: 1.0E16}");
    let small = RecurringCharge::new().with_recurring_charge_amount(1e-7);
    assert_eq!(small.to_string(), "{RecurringChargeAmount: 1.0E-7}");
}

#[test]
fn nan_price_survives_json() {
    let charge = RecurringCharge::new()
        .with_recurring_charge_amount(f64::NAN)
        .with_recurring_charge_frequency("Hourly");
    let json = serde_json::to_string(&charge).unwrap();
    assert_eq!(
        json,
        r#"{"RecurringChargeAmount":"NaN","RecurringChargeFrequency":"Hourly"}"#
    );
    let back: RecurringCharge = serde_json::from_str(&json).unwrap();
    assert_eq!(back, charge);
    assert!(back.recurring_charge_amount().map_or(false, f64::is_nan));
}

#[test]
fn tag_lists_are_owned_by_the_shape() {
    let mut tags = vec![Tag::new().with_key("env").with_value("prod")];
    let mut input = CopyDbSnapshotInput::new();
    input.set_tags(Some(tags.clone()));
    tags.push(Tag::new().with_key("team"));
    tags[0].set_value(Some("dev".into()));
    assert_eq!(input.tags().map(|t| t.len()), Some(1));
    assert_eq!(input.tags().and_then(|t| t[0].value()), Some("prod"));
}

fn describe_input() -> impl Strategy<Value = DescribeDbClustersInput> {
    (
        proptest::option::of("[a-z][a-z0-9-]{0,12}"),
        proptest::option::of(proptest::collection::vec("[a-z-]{1,10}", 0..3)),
        proptest::option::of(20..=100i32),
        proptest::option::of("[A-Za-z0-9]{0,16}"),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(id, filters, max_records, marker, include_shared)| {
            let mut input = DescribeDbClustersInput::new();
            input
                .set_db_cluster_identifier(id)
                .set_filters(filters.map(|names| {
                    names
                        .into_iter()
                        .map(|name| Filter::new().with_name(name))
                        .collect()
                }))
                .set_max_records(max_records)
                .set_marker(marker)
                .set_include_shared(include_shared);
            input
        })
}

proptest! {
    #[test]
    fn equal_inputs_hash_equal(input in describe_input()) {
        let copy = input.clone();
        prop_assert_eq!(&copy, &input);
        prop_assert_eq!(copy.hash_code(), input.hash_code());
    }

    #[test]
    fn clearing_a_member_only_clears_that_member(input in describe_input()) {
        let mut cleared = input.clone();
        cleared.set_marker(None);
        prop_assert_eq!(cleared.marker(), None);
        prop_assert_eq!(cleared.db_cluster_identifier(), input.db_cluster_identifier());
        prop_assert_eq!(cleared.filters(), input.filters());
        prop_assert_eq!(cleared.max_records(), input.max_records());
        prop_assert_eq!(cleared.include_shared(), input.include_shared());
        prop_assert_eq!(cleared == input, input.marker().is_none());
    }

    #[test]
    fn filters_append(input in describe_input(), extra in proptest::collection::vec("[a-z]{1,6}", 0..3)) {
        let before = input.filters().map(|f| f.len()).unwrap_or(0);
        let after = input.with_filters(extra.iter().map(|name| Filter::new().with_name(name.as_str())));
        prop_assert_eq!(after.filters().map(|f| f.len()), Some(before + extra.len()));
    }

    #[test]
    fn json_round_trips(input in describe_input()) {
        let json = serde_json::to_string(&input).unwrap();
        let back: DescribeDbClustersInput = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&back, &input);
        prop_assert_eq!(back.present_members(), input.present_members());
    }
}
