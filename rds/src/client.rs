/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::{parse_endpoint, Config, ConfigError};
use crate::error::{MissingRegion, SdkError};
use crate::input::{
    CopyDbClusterSnapshotInput, CopyDbSnapshotInput, CreateDbClusterInput,
    CreateDbInstanceReadReplicaInput, CreateDbProxyInput, DeleteDbClusterInput,
    DescribeDbClustersInput, DescribeDbSnapshotsInput, DescribeOrderableDbInstanceOptionsInput,
    DescribeReservedDbInstancesInput, ModifyDbClusterInput, ModifyDbClusterParameterGroupInput,
    RestoreDbClusterFromS3Input, RestoreDbClusterFromSnapshotInput,
    RestoreDbClusterToPointInTimeInput, RestoreDbInstanceFromDbSnapshotInput,
    RestoreDbInstanceFromS3Input, StartActivityStreamInput,
};
use crate::operation::{self, Operation};
use crate::os_shim_internal::Env;
use crate::output::{
    CopyDbClusterSnapshotOutput, CopyDbSnapshotOutput, CreateDbClusterOutput,
    CreateDbInstanceReadReplicaOutput, CreateDbProxyOutput, DeleteDbClusterOutput,
    DescribeDbClustersOutput, DescribeDbSnapshotsOutput, DescribeOrderableDbInstanceOptionsOutput,
    DescribeReservedDbInstancesOutput, ModifyDbClusterOutput, ModifyDbClusterParameterGroupOutput,
    RestoreDbClusterFromS3Output, RestoreDbClusterFromSnapshotOutput,
    RestoreDbClusterToPointInTimeOutput, RestoreDbInstanceFromDbSnapshotOutput,
    RestoreDbInstanceFromS3Output, StartActivityStreamOutput,
};
use crate::transport::{OperationContext, Transport};
use smithy_types::Shape;
use std::sync::Arc;
use tracing::{debug, debug_span, trace, Instrument};

/// Client for Amazon Relational Database Service.
///
/// Each method takes a fully populated input shape and hands it to the transport along with
/// the configured region and endpoint. Cloning a client is cheap; clones share the transport.
///
/// # Example
/// ```rust
/// use rds::config::{Config, Region};
/// use rds::input::DescribeDbClustersInput;
/// use rds::operation::DescribeDbClusters;
/// use rds::output::DescribeDbClustersOutput;
/// use rds::test_util::TestTransport;
/// use rds::Client;
///
/// # async fn demo() -> Result<(), rds::SdkError> {
/// let transport = TestTransport::new()
///     .with_response::<DescribeDbClusters>(Ok(DescribeDbClustersOutput::new()));
/// let config = Config::builder().region(Region::new("us-east-1")).build();
/// let client = Client::from_conf(transport, config);
/// let clusters = client
///     .describe_db_clusters(DescribeDbClustersInput::new().with_max_records(20))
///     .await?;
/// assert!(clusters.db_clusters().is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<T> {
    transport: Arc<T>,
    config: Arc<Config>,
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Client {
            transport: self.transport.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T: Transport> Client<T> {
    pub fn from_conf(transport: T, config: Config) -> Self {
        Client {
            transport: Arc::new(transport),
            config: Arc::new(config),
        }
    }

    /// Creates a client configured from the process environment.
    pub fn from_env(transport: T) -> Result<Self, ConfigError> {
        Ok(Self::from_conf(transport, Config::from_env(&Env::real())?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a client sharing this client's transport but using `config`.
    pub fn with_config(&self, config: Config) -> Self {
        Client {
            transport: self.transport.clone(),
            config: Arc::new(config),
        }
    }

    /// Invokes any operation.
    pub async fn call<O: Operation>(&self, input: O::Input) -> Result<O::Output, SdkError> {
        let region = self
            .config
            .region()
            .map(|region| region.as_ref())
            .unwrap_or("<unset>");
        let span = debug_span!("rds", operation = O::NAME, region = region);
        self.dispatch::<O>(input).instrument(span).await
    }

    async fn dispatch<O: Operation>(&self, input: O::Input) -> Result<O::Output, SdkError> {
        let context = match self.context::<O>() {
            Ok(context) => context,
            Err(err) => {
                debug!(error = %err, "failed to construct request");
                return Err(err);
            }
        };
        debug!(members = ?input.present_members(), "dispatching request");
        trace!(input = %input, "request input");
        let result = self.transport.send::<O>(context, input).await;
        match &result {
            Ok(output) => trace!(output = %output, "request succeeded"),
            Err(err) => debug!(error = %err, code = ?err.code(), "request failed"),
        }
        result
    }

    fn context<O: Operation>(&self) -> Result<OperationContext, SdkError> {
        let region = self
            .config
            .region()
            .cloned()
            .ok_or_else(|| SdkError::ConstructionFailure(MissingRegion.into()))?;
        let endpoint = self
            .config
            .endpoint_url()
            .map(parse_endpoint)
            .transpose()
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        Ok(OperationContext::new(O::NAME, region, endpoint))
    }

    /// Returns information about provisioned Aurora DB clusters.
    pub async fn describe_db_clusters(
        &self,
        input: DescribeDbClustersInput,
    ) -> Result<DescribeDbClustersOutput, SdkError> {
        self.call::<operation::DescribeDbClusters>(input).await
    }

    /// Deletes a previously provisioned DB cluster.
    pub async fn delete_db_cluster(
        &self,
        input: DeleteDbClusterInput,
    ) -> Result<DeleteDbClusterOutput, SdkError> {
        self.call::<operation::DeleteDbCluster>(input).await
    }

    pub async fn describe_db_snapshots(
        &self,
        input: DescribeDbSnapshotsInput,
    ) -> Result<DescribeDbSnapshotsOutput, SdkError> {
        self.call::<operation::DescribeDbSnapshots>(input).await
    }

    pub async fn copy_db_snapshot(
        &self,
        input: CopyDbSnapshotInput,
    ) -> Result<CopyDbSnapshotOutput, SdkError> {
        self.call::<operation::CopyDbSnapshot>(input).await
    }

    /// Creates a DB instance that acts as a read replica of an existing source instance.
    pub async fn create_db_instance_read_replica(
        &self,
        input: CreateDbInstanceReadReplicaInput,
    ) -> Result<CreateDbInstanceReadReplicaOutput, SdkError> {
        self.call::<operation::CreateDbInstanceReadReplica>(input)
            .await
    }

    pub async fn create_db_proxy(
        &self,
        input: CreateDbProxyInput,
    ) -> Result<CreateDbProxyOutput, SdkError> {
        self.call::<operation::CreateDbProxy>(input).await
    }

    pub async fn start_activity_stream(
        &self,
        input: StartActivityStreamInput,
    ) -> Result<StartActivityStreamOutput, SdkError> {
        self.call::<operation::StartActivityStream>(input).await
    }

    /// Modifies up to 20 parameters of a DB cluster parameter group.
    pub async fn modify_db_cluster_parameter_group(
        &self,
        input: ModifyDbClusterParameterGroupInput,
    ) -> Result<ModifyDbClusterParameterGroupOutput, SdkError> {
        self.call::<operation::ModifyDbClusterParameterGroup>(input)
            .await
    }

    pub async fn describe_reserved_db_instances(
        &self,
        input: DescribeReservedDbInstancesInput,
    ) -> Result<DescribeReservedDbInstancesOutput, SdkError> {
        self.call::<operation::DescribeReservedDbInstances>(input)
            .await
    }

    /// Creates a new Amazon Aurora DB cluster.
    pub async fn create_db_cluster(
        &self,
        input: CreateDbClusterInput,
    ) -> Result<CreateDbClusterOutput, SdkError> {
        self.call::<operation::CreateDbCluster>(input).await
    }

    /// Modifies settings of an Aurora DB cluster.
    pub async fn modify_db_cluster(
        &self,
        input: ModifyDbClusterInput,
    ) -> Result<ModifyDbClusterOutput, SdkError> {
        self.call::<operation::ModifyDbCluster>(input).await
    }

    pub async fn copy_db_cluster_snapshot(
        &self,
        input: CopyDbClusterSnapshotInput,
    ) -> Result<CopyDbClusterSnapshotOutput, SdkError> {
        self.call::<operation::CopyDbClusterSnapshot>(input).await
    }

    /// Creates an Aurora MySQL DB cluster from a MySQL backup in Amazon S3.
    pub async fn restore_db_cluster_from_s3(
        &self,
        input: RestoreDbClusterFromS3Input,
    ) -> Result<RestoreDbClusterFromS3Output, SdkError> {
        self.call::<operation::RestoreDbClusterFromS3>(input).await
    }

    pub async fn restore_db_cluster_from_snapshot(
        &self,
        input: RestoreDbClusterFromSnapshotInput,
    ) -> Result<RestoreDbClusterFromSnapshotOutput, SdkError> {
        self.call::<operation::RestoreDbClusterFromSnapshot>(input).await
    }

    pub async fn restore_db_cluster_to_point_in_time(
        &self,
        input: RestoreDbClusterToPointInTimeInput,
    ) -> Result<RestoreDbClusterToPointInTimeOutput, SdkError> {
        self.call::<operation::RestoreDbClusterToPointInTime>(input).await
    }

    pub async fn restore_db_instance_from_s3(
        &self,
        input: RestoreDbInstanceFromS3Input,
    ) -> Result<RestoreDbInstanceFromS3Output, SdkError> {
        self.call::<operation::RestoreDbInstanceFromS3>(input).await
    }

    /// Creates a new DB instance from a DB snapshot.
    pub async fn restore_db_instance_from_db_snapshot(
        &self,
        input: RestoreDbInstanceFromDbSnapshotInput,
    ) -> Result<RestoreDbInstanceFromDbSnapshotOutput, SdkError> {
        self.call::<operation::RestoreDbInstanceFromDbSnapshot>(input).await
    }

    /// Lists the DB instance configurations available for an engine.
    pub async fn describe_orderable_db_instance_options(
        &self,
        input: DescribeOrderableDbInstanceOptionsInput,
    ) -> Result<DescribeOrderableDbInstanceOptionsOutput, SdkError> {
        self.call::<operation::DescribeOrderableDbInstanceOptions>(input).await
    }
}
