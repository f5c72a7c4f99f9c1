/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation markers tying each RDS action to its request and response shapes.

use crate::{input, output};
use smithy_types::Shape;
use std::fmt;

/// An RDS API action.
///
/// Implementors are zero-sized markers; a [`Transport`](crate::transport::Transport) uses
/// [`Operation::NAME`] to select the action on the wire.
pub trait Operation: Send + Sync + 'static {
    /// Action name as it appears on the wire, e.g. `DescribeDBClusters`.
    const NAME: &'static str;

    type Input: Shape + fmt::Display + Clone + Send + Sync + 'static;
    type Output: Shape + fmt::Display + Clone + Send + Sync + 'static;
}

macro_rules! operation {
    ($(#[$meta:meta])* $marker:ident = $name:literal, $input:ident => $output:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        #[non_exhaustive]
        pub struct $marker;

        impl Operation for $marker {
            const NAME: &'static str = $name;
            type Input = input::$input;
            type Output = output::$output;
        }
    };
}

operation!(
    /// Returns information about provisioned Aurora DB clusters.
    DescribeDbClusters = "DescribeDBClusters",
    DescribeDbClustersInput => DescribeDbClustersOutput
);
operation!(
    /// Deletes a previously provisioned DB cluster, optionally taking a final snapshot.
    DeleteDbCluster = "DeleteDBCluster",
    DeleteDbClusterInput => DeleteDbClusterOutput
);
operation!(
    DescribeDbSnapshots = "DescribeDBSnapshots",
    DescribeDbSnapshotsInput => DescribeDbSnapshotsOutput
);
operation!(
    /// Copies a DB snapshot, within a region or across regions.
    CopyDbSnapshot = "CopyDBSnapshot",
    CopyDbSnapshotInput => CopyDbSnapshotOutput
);
operation!(
    CreateDbInstanceReadReplica = "CreateDBInstanceReadReplica",
    CreateDbInstanceReadReplicaInput => CreateDbInstanceReadReplicaOutput
);
operation!(
    CreateDbProxy = "CreateDBProxy",
    CreateDbProxyInput => CreateDbProxyOutput
);
operation!(
    /// Starts a database activity stream to monitor activity on the database.
    StartActivityStream = "StartActivityStream",
    StartActivityStreamInput => StartActivityStreamOutput
);
operation!(
    ModifyDbClusterParameterGroup = "ModifyDBClusterParameterGroup",
    ModifyDbClusterParameterGroupInput => ModifyDbClusterParameterGroupOutput
);
operation!(
    DescribeReservedDbInstances = "DescribeReservedDBInstances",
    DescribeReservedDbInstancesInput => DescribeReservedDbInstancesOutput
);
operation!(
    /// Creates a new Amazon Aurora DB cluster.
    CreateDbCluster = "CreateDBCluster",
    CreateDbClusterInput => CreateDbClusterOutput
);
operation!(
    ModifyDbCluster = "ModifyDBCluster",
    ModifyDbClusterInput => ModifyDbClusterOutput
);
operation!(
    CopyDbClusterSnapshot = "CopyDBClusterSnapshot",
    CopyDbClusterSnapshotInput => CopyDbClusterSnapshotOutput
);
operation!(
    /// Creates an Aurora MySQL DB cluster from a MySQL backup in Amazon S3.
    RestoreDbClusterFromS3 = "RestoreDBClusterFromS3",
    RestoreDbClusterFromS3Input => RestoreDbClusterFromS3Output
);
operation!(
    RestoreDbClusterFromSnapshot = "RestoreDBClusterFromSnapshot",
    RestoreDbClusterFromSnapshotInput => RestoreDbClusterFromSnapshotOutput
);
operation!(
    /// Restores a DB cluster to an arbitrary point in time within its backup retention period.
    RestoreDbClusterToPointInTime = "RestoreDBClusterToPointInTime",
    RestoreDbClusterToPointInTimeInput => RestoreDbClusterToPointInTimeOutput
);
operation!(
    RestoreDbInstanceFromS3 = "RestoreDBInstanceFromS3",
    RestoreDbInstanceFromS3Input => RestoreDbInstanceFromS3Output
);
operation!(
    RestoreDbInstanceFromDbSnapshot = "RestoreDBInstanceFromDBSnapshot",
    RestoreDbInstanceFromDbSnapshotInput => RestoreDbInstanceFromDbSnapshotOutput
);
operation!(
    DescribeOrderableDbInstanceOptions = "DescribeOrderableDBInstanceOptions",
    DescribeOrderableDbInstanceOptionsInput => DescribeOrderableDbInstanceOptionsOutput
);
