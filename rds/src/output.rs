/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response shapes, one per operation.

use crate::model::{
    ActivityStreamMode, ActivityStreamStatus, DbCluster, DbClusterSnapshot, DbInstance, DbProxy,
    DbSnapshot, OrderableDbInstanceOption, ReservedDbInstance,
};
use smithy_types::shape;

shape! {
    /// Output of `DescribeDBClusters`.
    pub struct DescribeDbClustersOutput = "DBClusterMessage" {
        /// Present when more results are available; pass it back as `Marker` to fetch the
        /// next page.
        string marker, set_marker, with_marker = "Marker";
        list<DbCluster> db_clusters, set_db_clusters, with_db_clusters = "DBClusters";
    }
}

shape! {
    pub struct DeleteDbClusterOutput = "DeleteDBClusterResult" {
        structure<DbCluster> db_cluster, set_db_cluster, with_db_cluster = "DBCluster";
    }
}

shape! {
    /// Output of `DescribeDBSnapshots`.
    pub struct DescribeDbSnapshotsOutput = "DBSnapshotMessage" {
        string marker, set_marker, with_marker = "Marker";
        list<DbSnapshot> db_snapshots, set_db_snapshots, with_db_snapshots = "DBSnapshots";
    }
}

shape! {
    pub struct CopyDbSnapshotOutput = "CopyDBSnapshotResult" {
        structure<DbSnapshot> db_snapshot, set_db_snapshot, with_db_snapshot = "DBSnapshot";
    }
}

shape! {
    pub struct CreateDbInstanceReadReplicaOutput = "CreateDBInstanceReadReplicaResult" {
        structure<DbInstance> db_instance, set_db_instance, with_db_instance = "DBInstance";
    }
}

shape! {
    pub struct CreateDbProxyOutput = "CreateDBProxyResponse" {
        /// The proxy as created. Its status starts out as `creating`.
        structure<DbProxy> db_proxy, set_db_proxy, with_db_proxy = "DBProxy";
    }
}

shape! {
    /// Output of `StartActivityStream`.
    pub struct StartActivityStreamOutput = "StartActivityStreamResponse" {
        string kms_key_id, set_kms_key_id, with_kms_key_id = "KmsKeyId";
        /// Name of the Kinesis data stream receiving the activity records.
        string kinesis_stream_name, set_kinesis_stream_name, with_kinesis_stream_name = "KinesisStreamName";
        enumeration<ActivityStreamStatus> status | status_as_str, set_status, with_status = "Status";
        enumeration<ActivityStreamMode> mode | mode_as_str, set_mode, with_mode = "Mode";
        boolean apply_immediately | is_apply_immediately, set_apply_immediately, with_apply_immediately = "ApplyImmediately";
    }
}

shape! {
    pub struct ModifyDbClusterParameterGroupOutput = "DBClusterParameterGroupNameMessage" {
        string db_cluster_parameter_group_name, set_db_cluster_parameter_group_name, with_db_cluster_parameter_group_name = "DBClusterParameterGroupName";
    }
}

shape! {
    /// Output of `DescribeReservedDBInstances`.
    pub struct DescribeReservedDbInstancesOutput = "ReservedDBInstanceMessage" {
        string marker, set_marker, with_marker = "Marker";
        list<ReservedDbInstance> reserved_db_instances, set_reserved_db_instances, with_reserved_db_instances = "ReservedDBInstances";
    }
}

shape! {
    /// Output of `CreateDBCluster`.
    pub struct CreateDbClusterOutput = "CreateDBClusterResult" {
        structure<DbCluster> db_cluster, set_db_cluster, with_db_cluster = "DBCluster";
    }
}

shape! {
    pub struct ModifyDbClusterOutput = "ModifyDBClusterResult" {
        structure<DbCluster> db_cluster, set_db_cluster, with_db_cluster = "DBCluster";
    }
}

shape! {
    pub struct CopyDbClusterSnapshotOutput = "CopyDBClusterSnapshotResult" {
        structure<DbClusterSnapshot> db_cluster_snapshot, set_db_cluster_snapshot, with_db_cluster_snapshot = "DBClusterSnapshot";
    }
}

shape! {
    pub struct RestoreDbClusterFromS3Output = "RestoreDBClusterFromS3Result" {
        structure<DbCluster> db_cluster, set_db_cluster, with_db_cluster = "DBCluster";
    }
}

shape! {
    pub struct RestoreDbClusterFromSnapshotOutput = "RestoreDBClusterFromSnapshotResult" {
        structure<DbCluster> db_cluster, set_db_cluster, with_db_cluster = "DBCluster";
    }
}

shape! {
    pub struct RestoreDbClusterToPointInTimeOutput = "RestoreDBClusterToPointInTimeResult" {
        structure<DbCluster> db_cluster, set_db_cluster, with_db_cluster = "DBCluster";
    }
}

shape! {
    pub struct RestoreDbInstanceFromS3Output = "RestoreDBInstanceFromS3Result" {
        structure<DbInstance> db_instance, set_db_instance, with_db_instance = "DBInstance";
    }
}

shape! {
    pub struct RestoreDbInstanceFromDbSnapshotOutput = "RestoreDBInstanceFromDBSnapshotResult" {
        structure<DbInstance> db_instance, set_db_instance, with_db_instance = "DBInstance";
    }
}

shape! {
    /// Output of `DescribeOrderableDBInstanceOptions`.
    pub struct DescribeOrderableDbInstanceOptionsOutput = "OrderableDBInstanceOptionsMessage" {
        list<OrderableDbInstanceOption> orderable_db_instance_options, set_orderable_db_instance_options, with_orderable_db_instance_options = "OrderableDBInstanceOptions";
        string marker, set_marker, with_marker = "Marker";
    }
}
