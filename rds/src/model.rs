/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Value shapes nested inside RDS requests and responses.

use smithy_types::{shape, string_enum};

string_enum! {
    /// Whether database activity is recorded synchronously or asynchronously.
    pub enum ActivityStreamMode {
        Sync = "sync",
        Async = "async",
    }
}

string_enum! {
    pub enum ActivityStreamStatus {
        Stopped = "stopped",
        Starting = "starting",
        Started = "started",
        Stopping = "stopping",
    }
}

string_enum! {
    /// State of write forwarding for a secondary cluster of an Aurora global database.
    pub enum WriteForwardingStatus {
        Enabled = "enabled",
        Disabled = "disabled",
        Enabling = "enabling",
        Disabling = "disabling",
        /// The service reported the status as `unknown`.
        UnknownValue = "unknown",
    }
}

string_enum! {
    /// Database protocol family a DB proxy speaks.
    pub enum EngineFamily {
        Mysql = "MYSQL",
        Postgresql = "POSTGRESQL",
    }
}

string_enum! {
    pub enum AuthScheme {
        Secrets = "SECRETS",
    }
}

string_enum! {
    /// Whether a DB proxy requires IAM authentication for connections.
    pub enum IamAuthMode {
        Disabled = "DISABLED",
        Required = "REQUIRED",
    }
}

string_enum! {
    pub enum DbProxyStatus {
        Available = "available",
        Modifying = "modifying",
        IncompatibleNetwork = "incompatible-network",
        InsufficientResourceLimits = "insufficient-resource-limits",
        Creating = "creating",
        Deleting = "deleting",
        Suspended = "suspended",
        Suspending = "suspending",
        Reactivating = "reactivating",
    }
}

string_enum! {
    /// When a parameter change takes effect.
    pub enum ApplyMethod {
        Immediate = "immediate",
        PendingReboot = "pending-reboot",
    }
}

shape! {
    /// A filter name and value pair used to return a more specific list of results from a
    /// describe operation. Filters can be used to match a set of resources by specific
    /// criteria, such as IDs.
    ///
    /// Currently, wildcards are not supported in filters.
    pub struct Filter = "Filter" {
        /// The name of the filter. Filter names are case-sensitive.
        string name, set_name, with_name = "Name";
        /// One or more filter values. Filter values are case-sensitive.
        list<String> values, set_values, with_values = "Values";
    }
}

shape! {
    /// Metadata assigned to an Amazon RDS resource consisting of a key-value pair.
    pub struct Tag = "Tag" {
        /// The key is the required name of the tag. It can't be prefixed with `aws:` or `rds:`.
        string key, set_key, with_key = "Key";
        /// The value is the optional value of the tag.
        string value, set_value, with_value = "Value";
    }
}

shape! {
    /// The number of CPU cores or threads per core for an Oracle DB instance class.
    pub struct ProcessorFeature = "ProcessorFeature" {
        /// `coreCount` or `threadsPerCore`.
        string name, set_name, with_name = "Name";
        string value, set_value, with_value = "Value";
    }
}

shape! {
    /// Status of the DB cluster option group.
    pub struct DbClusterOptionGroupStatus = "DBClusterOptionGroupStatus" {
        string db_cluster_option_group_name, set_db_cluster_option_group_name, with_db_cluster_option_group_name = "DBClusterOptionGroupName";
        string status, set_status, with_status = "Status";
    }
}

shape! {
    /// An instance that is part of a DB cluster.
    pub struct DbClusterMember = "DBClusterMember" {
        string db_instance_identifier, set_db_instance_identifier, with_db_instance_identifier = "DBInstanceIdentifier";
        /// Whether the cluster member is the primary instance for the DB cluster.
        boolean is_cluster_writer | cluster_writer, set_is_cluster_writer, with_is_cluster_writer = "IsClusterWriter";
        string db_cluster_parameter_group_status, set_db_cluster_parameter_group_status, with_db_cluster_parameter_group_status = "DBClusterParameterGroupStatus";
        /// The order in which an Aurora Replica is promoted to the primary instance after a
        /// failure of the existing primary instance.
        int promotion_tier, set_promotion_tier, with_promotion_tier = "PromotionTier";
    }
}

shape! {
    /// Membership of an instance or cluster in a VPC security group.
    pub struct VpcSecurityGroupMembership = "VpcSecurityGroupMembership" {
        string vpc_security_group_id, set_vpc_security_group_id, with_vpc_security_group_id = "VpcSecurityGroupId";
        string status, set_status, with_status = "Status";
    }
}

shape! {
    /// An IAM role associated with a DB cluster.
    pub struct DbClusterRole = "DBClusterRole" {
        string role_arn, set_role_arn, with_role_arn = "RoleArn";
        /// `ACTIVE`, `PENDING` or `INVALID`.
        string status, set_status, with_status = "Status";
        string feature_name, set_feature_name, with_feature_name = "FeatureName";
    }
}

shape! {
    /// Scaling properties of an Aurora Serverless DB cluster.
    pub struct ScalingConfigurationInfo = "ScalingConfigurationInfo" {
        int min_capacity, set_min_capacity, with_min_capacity = "MinCapacity";
        int max_capacity, set_max_capacity, with_max_capacity = "MaxCapacity";
        /// Whether automatic pause is allowed when the cluster is idle.
        boolean auto_pause | is_auto_pause, set_auto_pause, with_auto_pause = "AutoPause";
        int seconds_until_auto_pause, set_seconds_until_auto_pause, with_seconds_until_auto_pause = "SecondsUntilAutoPause";
        /// `ForceApplyCapacityChange` or `RollbackCapacityChange`.
        string timeout_action, set_timeout_action, with_timeout_action = "TimeoutAction";
    }
}

shape! {
    /// An Active Directory Domain membership record associated with a DB instance or cluster.
    pub struct DomainMembership = "DomainMembership" {
        string domain, set_domain, with_domain = "Domain";
        string status, set_status, with_status = "Status";
        string fqdn, set_fqdn, with_fqdn = "FQDN";
        string iam_role_name, set_iam_role_name, with_iam_role_name = "IAMRoleName";
    }
}

shape! {
    /// Contains the details of an Amazon Aurora DB cluster.
    ///
    /// This data type is used as a response element in the `DescribeDBClusters`,
    /// `StopDBCluster`, and `StartDBCluster` actions.
    pub struct DbCluster = "DBCluster" {
        /// For all database engines except Aurora, the storage allocated in gibibytes (GiB).
        /// For Aurora, always 1, because Aurora DB cluster storage size isn't fixed.
        int allocated_storage, set_allocated_storage, with_allocated_storage = "AllocatedStorage";
        /// The Availability Zones in which instances in the DB cluster can be created.
        list<String> availability_zones, set_availability_zones, with_availability_zones = "AvailabilityZones";
        /// The number of days for which automatic DB snapshots are retained.
        int backup_retention_period, set_backup_retention_period, with_backup_retention_period = "BackupRetentionPeriod";
        string character_set_name, set_character_set_name, with_character_set_name = "CharacterSetName";
        /// Name of the initial database specified for this cluster when it was created.
        string database_name, set_database_name, with_database_name = "DatabaseName";
        /// User-supplied identifier for the DB cluster, unique within the account.
        string db_cluster_identifier, set_db_cluster_identifier, with_db_cluster_identifier = "DBClusterIdentifier";
        string db_cluster_parameter_group, set_db_cluster_parameter_group, with_db_cluster_parameter_group = "DBClusterParameterGroup";
        string db_subnet_group, set_db_subnet_group, with_db_subnet_group = "DBSubnetGroup";
        /// Current state of this DB cluster.
        string status, set_status, with_status = "Status";
        string percent_progress, set_percent_progress, with_percent_progress = "PercentProgress";
        /// The earliest time to which a database can be restored with point-in-time restore.
        timestamp earliest_restorable_time, set_earliest_restorable_time, with_earliest_restorable_time = "EarliestRestorableTime";
        /// The connection endpoint for the primary instance of the DB cluster.
        string endpoint, set_endpoint, with_endpoint = "Endpoint";
        /// The reader endpoint, which load-balances connections across the Aurora Replicas.
        string reader_endpoint, set_reader_endpoint, with_reader_endpoint = "ReaderEndpoint";
        list<String> custom_endpoints, set_custom_endpoints, with_custom_endpoints = "CustomEndpoints";
        /// Whether the DB cluster has instances in multiple Availability Zones.
        boolean multi_az | is_multi_az, set_multi_az, with_multi_az = "MultiAZ";
        string engine, set_engine, with_engine = "Engine";
        string engine_version, set_engine_version, with_engine_version = "EngineVersion";
        timestamp latest_restorable_time, set_latest_restorable_time, with_latest_restorable_time = "LatestRestorableTime";
        int port, set_port, with_port = "Port";
        string master_username, set_master_username, with_master_username = "MasterUsername";
        list<DbClusterOptionGroupStatus> db_cluster_option_group_memberships, set_db_cluster_option_group_memberships, with_db_cluster_option_group_memberships = "DBClusterOptionGroupMemberships";
        /// The daily time range during which automated backups are created.
        string preferred_backup_window, set_preferred_backup_window, with_preferred_backup_window = "PreferredBackupWindow";
        /// The weekly time range during which system maintenance can occur, in UTC.
        string preferred_maintenance_window, set_preferred_maintenance_window, with_preferred_maintenance_window = "PreferredMaintenanceWindow";
        string replication_source_identifier, set_replication_source_identifier, with_replication_source_identifier = "ReplicationSourceIdentifier";
        list<String> read_replica_identifiers, set_read_replica_identifiers, with_read_replica_identifiers = "ReadReplicaIdentifiers";
        list<DbClusterMember> db_cluster_members, set_db_cluster_members, with_db_cluster_members = "DBClusterMembers";
        list<VpcSecurityGroupMembership> vpc_security_groups, set_vpc_security_groups, with_vpc_security_groups = "VpcSecurityGroups";
        string hosted_zone_id, set_hosted_zone_id, with_hosted_zone_id = "HostedZoneId";
        boolean storage_encrypted | is_storage_encrypted, set_storage_encrypted, with_storage_encrypted = "StorageEncrypted";
        string kms_key_id, set_kms_key_id, with_kms_key_id = "KmsKeyId";
        /// The AWS Region-unique, immutable identifier for the DB cluster.
        string db_cluster_resource_id, set_db_cluster_resource_id, with_db_cluster_resource_id = "DbClusterResourceId";
        string db_cluster_arn, set_db_cluster_arn, with_db_cluster_arn = "DBClusterArn";
        /// IAM roles associated with the DB cluster, granting it access to other AWS services.
        list<DbClusterRole> associated_roles, set_associated_roles, with_associated_roles = "AssociatedRoles";
        boolean iam_database_authentication_enabled | is_iam_database_authentication_enabled, set_iam_database_authentication_enabled, with_iam_database_authentication_enabled = "IAMDatabaseAuthenticationEnabled";
        string clone_group_id, set_clone_group_id, with_clone_group_id = "CloneGroupId";
        timestamp cluster_create_time, set_cluster_create_time, with_cluster_create_time = "ClusterCreateTime";
        timestamp earliest_backtrack_time, set_earliest_backtrack_time, with_earliest_backtrack_time = "EarliestBacktrackTime";
        /// The target backtrack window, in seconds. `0` means backtracking is disabled.
        long backtrack_window, set_backtrack_window, with_backtrack_window = "BacktrackWindow";
        long backtrack_consumed_change_records, set_backtrack_consumed_change_records, with_backtrack_consumed_change_records = "BacktrackConsumedChangeRecords";
        list<String> enabled_cloudwatch_logs_exports, set_enabled_cloudwatch_logs_exports, with_enabled_cloudwatch_logs_exports = "EnabledCloudwatchLogsExports";
        /// The current capacity of an Aurora Serverless DB cluster.
        int capacity, set_capacity, with_capacity = "Capacity";
        /// `provisioned`, `serverless`, `parallelquery`, `global`, or `multimaster`.
        string engine_mode, set_engine_mode, with_engine_mode = "EngineMode";
        structure<ScalingConfigurationInfo> scaling_configuration_info, set_scaling_configuration_info, with_scaling_configuration_info = "ScalingConfigurationInfo";
        boolean deletion_protection | is_deletion_protection, set_deletion_protection, with_deletion_protection = "DeletionProtection";
        /// Whether the HTTP endpoint for an Aurora Serverless DB cluster is enabled.
        boolean http_endpoint_enabled | is_http_endpoint_enabled, set_http_endpoint_enabled, with_http_endpoint_enabled = "HttpEndpointEnabled";
        enumeration<ActivityStreamMode> activity_stream_mode | activity_stream_mode_as_str, set_activity_stream_mode, with_activity_stream_mode = "ActivityStreamMode";
        enumeration<ActivityStreamStatus> activity_stream_status | activity_stream_status_as_str, set_activity_stream_status, with_activity_stream_status = "ActivityStreamStatus";
        string activity_stream_kms_key_id, set_activity_stream_kms_key_id, with_activity_stream_kms_key_id = "ActivityStreamKmsKeyId";
        string activity_stream_kinesis_stream_name, set_activity_stream_kinesis_stream_name, with_activity_stream_kinesis_stream_name = "ActivityStreamKinesisStreamName";
        boolean copy_tags_to_snapshot | is_copy_tags_to_snapshot, set_copy_tags_to_snapshot, with_copy_tags_to_snapshot = "CopyTagsToSnapshot";
        boolean cross_account_clone | is_cross_account_clone, set_cross_account_clone, with_cross_account_clone = "CrossAccountClone";
        list<DomainMembership> domain_memberships, set_domain_memberships, with_domain_memberships = "DomainMemberships";
        enumeration<WriteForwardingStatus> global_write_forwarding_status | global_write_forwarding_status_as_str, set_global_write_forwarding_status, with_global_write_forwarding_status = "GlobalWriteForwardingStatus";
        /// Whether this secondary cluster of a global database has requested write forwarding.
        boolean global_write_forwarding_requested | is_global_write_forwarding_requested, set_global_write_forwarding_requested, with_global_write_forwarding_requested = "GlobalWriteForwardingRequested";
    }
}

shape! {
    /// Requested scaling properties for an Aurora Serverless DB cluster.
    pub struct ScalingConfiguration = "ScalingConfiguration" {
        /// Minimum capacity in Aurora capacity units, a power of two.
        int min_capacity, set_min_capacity, with_min_capacity = "MinCapacity";
        int max_capacity, set_max_capacity, with_max_capacity = "MaxCapacity";
        boolean auto_pause | is_auto_pause, set_auto_pause, with_auto_pause = "AutoPause";
        /// Time, in seconds, before an idle cluster is paused.
        int seconds_until_auto_pause, set_seconds_until_auto_pause, with_seconds_until_auto_pause = "SecondsUntilAutoPause";
        string timeout_action, set_timeout_action, with_timeout_action = "TimeoutAction";
    }
}

shape! {
    /// Log types to enable or disable for export to CloudWatch Logs.
    ///
    /// The set of log types available depends on the engine.
    pub struct CloudwatchLogsExportConfiguration = "CloudwatchLogsExportConfiguration" {
        list<String> enable_log_types, set_enable_log_types, with_enable_log_types = "EnableLogTypes";
        list<String> disable_log_types, set_disable_log_types, with_disable_log_types = "DisableLogTypes";
    }
}

shape! {
    /// Contains the details of an Amazon Aurora DB cluster snapshot.
    pub struct DbClusterSnapshot = "DBClusterSnapshot" {
        list<String> availability_zones, set_availability_zones, with_availability_zones = "AvailabilityZones";
        string db_cluster_snapshot_identifier, set_db_cluster_snapshot_identifier, with_db_cluster_snapshot_identifier = "DBClusterSnapshotIdentifier";
        string db_cluster_identifier, set_db_cluster_identifier, with_db_cluster_identifier = "DBClusterIdentifier";
        /// When the snapshot was taken, in Coordinated Universal Time (UTC).
        timestamp snapshot_create_time, set_snapshot_create_time, with_snapshot_create_time = "SnapshotCreateTime";
        string engine, set_engine, with_engine = "Engine";
        int allocated_storage, set_allocated_storage, with_allocated_storage = "AllocatedStorage";
        string status, set_status, with_status = "Status";
        int port, set_port, with_port = "Port";
        string vpc_id, set_vpc_id, with_vpc_id = "VpcId";
        timestamp cluster_create_time, set_cluster_create_time, with_cluster_create_time = "ClusterCreateTime";
        string master_username, set_master_username, with_master_username = "MasterUsername";
        string engine_version, set_engine_version, with_engine_version = "EngineVersion";
        string license_model, set_license_model, with_license_model = "LicenseModel";
        string snapshot_type, set_snapshot_type, with_snapshot_type = "SnapshotType";
        int percent_progress, set_percent_progress, with_percent_progress = "PercentProgress";
        boolean storage_encrypted | is_storage_encrypted, set_storage_encrypted, with_storage_encrypted = "StorageEncrypted";
        string kms_key_id, set_kms_key_id, with_kms_key_id = "KmsKeyId";
        string db_cluster_snapshot_arn, set_db_cluster_snapshot_arn, with_db_cluster_snapshot_arn = "DBClusterSnapshotArn";
        /// Set when the snapshot was copied from another snapshot.
        string source_db_cluster_snapshot_arn, set_source_db_cluster_snapshot_arn, with_source_db_cluster_snapshot_arn = "SourceDBClusterSnapshotArn";
        boolean iam_database_authentication_enabled | is_iam_database_authentication_enabled, set_iam_database_authentication_enabled, with_iam_database_authentication_enabled = "IAMDatabaseAuthenticationEnabled";
        list<Tag> tag_list, set_tag_list, with_tag_list = "TagList";
    }
}

shape! {
    /// Contains the details of an Amazon RDS DB snapshot.
    pub struct DbSnapshot = "DBSnapshot" {
        string db_snapshot_identifier, set_db_snapshot_identifier, with_db_snapshot_identifier = "DBSnapshotIdentifier";
        string db_instance_identifier, set_db_instance_identifier, with_db_instance_identifier = "DBInstanceIdentifier";
        /// When the snapshot was taken, in Coordinated Universal Time (UTC).
        timestamp snapshot_create_time, set_snapshot_create_time, with_snapshot_create_time = "SnapshotCreateTime";
        string engine, set_engine, with_engine = "Engine";
        int allocated_storage, set_allocated_storage, with_allocated_storage = "AllocatedStorage";
        string status, set_status, with_status = "Status";
        int port, set_port, with_port = "Port";
        string availability_zone, set_availability_zone, with_availability_zone = "AvailabilityZone";
        string vpc_id, set_vpc_id, with_vpc_id = "VpcId";
        timestamp instance_create_time, set_instance_create_time, with_instance_create_time = "InstanceCreateTime";
        string master_username, set_master_username, with_master_username = "MasterUsername";
        string engine_version, set_engine_version, with_engine_version = "EngineVersion";
        string license_model, set_license_model, with_license_model = "LicenseModel";
        string snapshot_type, set_snapshot_type, with_snapshot_type = "SnapshotType";
        int iops, set_iops, with_iops = "Iops";
        string option_group_name, set_option_group_name, with_option_group_name = "OptionGroupName";
        int percent_progress, set_percent_progress, with_percent_progress = "PercentProgress";
        /// The AWS Region the snapshot was copied from, for copied snapshots.
        string source_region, set_source_region, with_source_region = "SourceRegion";
        string source_db_snapshot_identifier, set_source_db_snapshot_identifier, with_source_db_snapshot_identifier = "SourceDBSnapshotIdentifier";
        string storage_type, set_storage_type, with_storage_type = "StorageType";
        string tde_credential_arn, set_tde_credential_arn, with_tde_credential_arn = "TdeCredentialArn";
        boolean encrypted | is_encrypted, set_encrypted, with_encrypted = "Encrypted";
        string kms_key_id, set_kms_key_id, with_kms_key_id = "KmsKeyId";
        string db_snapshot_arn, set_db_snapshot_arn, with_db_snapshot_arn = "DBSnapshotArn";
        string timezone, set_timezone, with_timezone = "Timezone";
        boolean iam_database_authentication_enabled | is_iam_database_authentication_enabled, set_iam_database_authentication_enabled, with_iam_database_authentication_enabled = "IAMDatabaseAuthenticationEnabled";
        list<ProcessorFeature> processor_features, set_processor_features, with_processor_features = "ProcessorFeatures";
        string dbi_resource_id, set_dbi_resource_id, with_dbi_resource_id = "DbiResourceId";
        list<Tag> tag_list, set_tag_list, with_tag_list = "TagList";
    }
}

shape! {
    /// Connection endpoint of a DB instance.
    pub struct Endpoint = "Endpoint" {
        string address, set_address, with_address = "Address";
        int port, set_port, with_port = "Port";
        string hosted_zone_id, set_hosted_zone_id, with_hosted_zone_id = "HostedZoneId";
    }
}

shape! {
    pub struct AvailabilityZone = "AvailabilityZone" {
        string name, set_name, with_name = "Name";
    }
}

shape! {
    /// A subnet of a DB subnet group.
    pub struct Subnet = "Subnet" {
        string subnet_identifier, set_subnet_identifier, with_subnet_identifier = "SubnetIdentifier";
        structure<AvailabilityZone> subnet_availability_zone, set_subnet_availability_zone, with_subnet_availability_zone = "SubnetAvailabilityZone";
        string subnet_status, set_subnet_status, with_subnet_status = "SubnetStatus";
    }
}

shape! {
    pub struct DbSubnetGroup = "DBSubnetGroup" {
        string db_subnet_group_name, set_db_subnet_group_name, with_db_subnet_group_name = "DBSubnetGroupName";
        string db_subnet_group_description, set_db_subnet_group_description, with_db_subnet_group_description = "DBSubnetGroupDescription";
        string vpc_id, set_vpc_id, with_vpc_id = "VpcId";
        string subnet_group_status, set_subnet_group_status, with_subnet_group_status = "SubnetGroupStatus";
        list<Subnet> subnets, set_subnets, with_subnets = "Subnets";
        string db_subnet_group_arn, set_db_subnet_group_arn, with_db_subnet_group_arn = "DBSubnetGroupArn";
    }
}

shape! {
    pub struct DbParameterGroupStatus = "DBParameterGroupStatus" {
        string db_parameter_group_name, set_db_parameter_group_name, with_db_parameter_group_name = "DBParameterGroupName";
        string parameter_apply_status, set_parameter_apply_status, with_parameter_apply_status = "ParameterApplyStatus";
    }
}

shape! {
    pub struct OptionGroupMembership = "OptionGroupMembership" {
        string option_group_name, set_option_group_name, with_option_group_name = "OptionGroupName";
        string status, set_status, with_status = "Status";
    }
}

shape! {
    /// Status information for a DB instance, such as read replication health.
    pub struct DbInstanceStatusInfo = "DBInstanceStatusInfo" {
        string status_type, set_status_type, with_status_type = "StatusType";
        /// `true` if the instance is operating normally, `false` if it is in an error state.
        boolean normal | is_normal, set_normal, with_normal = "Normal";
        string status, set_status, with_status = "Status";
        string message, set_message, with_message = "Message";
    }
}

shape! {
    /// Membership of a DB instance in a DB security group.
    pub struct DbSecurityGroupMembership = "DBSecurityGroupMembership" {
        string db_security_group_name, set_db_security_group_name, with_db_security_group_name = "DBSecurityGroupName";
        string status, set_status, with_status = "Status";
    }
}

shape! {
    /// Log types whose export to CloudWatch Logs is being turned on or off.
    pub struct PendingCloudwatchLogsExports = "PendingCloudwatchLogsExports" {
        list<String> log_types_to_enable, set_log_types_to_enable, with_log_types_to_enable = "LogTypesToEnable";
        list<String> log_types_to_disable, set_log_types_to_disable, with_log_types_to_disable = "LogTypesToDisable";
    }
}

shape! {
    /// Changes to a DB instance that have been requested but not yet applied.
    pub struct PendingModifiedValues = "PendingModifiedValues" {
        string db_instance_class, set_db_instance_class, with_db_instance_class = "DBInstanceClass";
        int allocated_storage, set_allocated_storage, with_allocated_storage = "AllocatedStorage";
        /// Always masked in responses.
        string master_user_password, set_master_user_password, with_master_user_password = "MasterUserPassword";
        int port, set_port, with_port = "Port";
        int backup_retention_period, set_backup_retention_period, with_backup_retention_period = "BackupRetentionPeriod";
        boolean multi_az | is_multi_az, set_multi_az, with_multi_az = "MultiAZ";
        string engine_version, set_engine_version, with_engine_version = "EngineVersion";
        string license_model, set_license_model, with_license_model = "LicenseModel";
        int iops, set_iops, with_iops = "Iops";
        string db_instance_identifier, set_db_instance_identifier, with_db_instance_identifier = "DBInstanceIdentifier";
        string storage_type, set_storage_type, with_storage_type = "StorageType";
        string ca_certificate_identifier, set_ca_certificate_identifier, with_ca_certificate_identifier = "CACertificateIdentifier";
        string db_subnet_group_name, set_db_subnet_group_name, with_db_subnet_group_name = "DBSubnetGroupName";
        structure<PendingCloudwatchLogsExports> pending_cloudwatch_logs_exports, set_pending_cloudwatch_logs_exports, with_pending_cloudwatch_logs_exports = "PendingCloudwatchLogsExports";
        list<ProcessorFeature> processor_features, set_processor_features, with_processor_features = "ProcessorFeatures";
    }
}

shape! {
    /// An IAM role associated with a DB instance.
    pub struct DbInstanceRole = "DBInstanceRole" {
        string role_arn, set_role_arn, with_role_arn = "RoleArn";
        string feature_name, set_feature_name, with_feature_name = "FeatureName";
        /// `ACTIVE`, `PENDING` or `INVALID`.
        string status, set_status, with_status = "Status";
    }
}

shape! {
    /// Contains the details of an Amazon RDS DB instance.
    pub struct DbInstance = "DBInstance" {
        string db_instance_identifier, set_db_instance_identifier, with_db_instance_identifier = "DBInstanceIdentifier";
        string db_instance_class, set_db_instance_class, with_db_instance_class = "DBInstanceClass";
        string engine, set_engine, with_engine = "Engine";
        string db_instance_status, set_db_instance_status, with_db_instance_status = "DBInstanceStatus";
        string master_username, set_master_username, with_master_username = "MasterUsername";
        string db_name, set_db_name, with_db_name = "DBName";
        structure<Endpoint> endpoint, set_endpoint, with_endpoint = "Endpoint";
        int allocated_storage, set_allocated_storage, with_allocated_storage = "AllocatedStorage";
        timestamp instance_create_time, set_instance_create_time, with_instance_create_time = "InstanceCreateTime";
        string preferred_backup_window, set_preferred_backup_window, with_preferred_backup_window = "PreferredBackupWindow";
        int backup_retention_period, set_backup_retention_period, with_backup_retention_period = "BackupRetentionPeriod";
        list<DbSecurityGroupMembership> db_security_groups, set_db_security_groups, with_db_security_groups = "DBSecurityGroups";
        list<VpcSecurityGroupMembership> vpc_security_groups, set_vpc_security_groups, with_vpc_security_groups = "VpcSecurityGroups";
        list<DbParameterGroupStatus> db_parameter_groups, set_db_parameter_groups, with_db_parameter_groups = "DBParameterGroups";
        string availability_zone, set_availability_zone, with_availability_zone = "AvailabilityZone";
        structure<DbSubnetGroup> db_subnet_group, set_db_subnet_group, with_db_subnet_group = "DBSubnetGroup";
        string preferred_maintenance_window, set_preferred_maintenance_window, with_preferred_maintenance_window = "PreferredMaintenanceWindow";
        /// Changes to the instance that are pending, such as a class change scheduled for
        /// the next maintenance window.
        structure<PendingModifiedValues> pending_modified_values, set_pending_modified_values, with_pending_modified_values = "PendingModifiedValues";
        timestamp latest_restorable_time, set_latest_restorable_time, with_latest_restorable_time = "LatestRestorableTime";
        boolean multi_az | is_multi_az, set_multi_az, with_multi_az = "MultiAZ";
        string engine_version, set_engine_version, with_engine_version = "EngineVersion";
        boolean auto_minor_version_upgrade | is_auto_minor_version_upgrade, set_auto_minor_version_upgrade, with_auto_minor_version_upgrade = "AutoMinorVersionUpgrade";
        /// The identifier of the source DB instance if this instance is a read replica.
        string read_replica_source_db_instance_identifier, set_read_replica_source_db_instance_identifier, with_read_replica_source_db_instance_identifier = "ReadReplicaSourceDBInstanceIdentifier";
        list<String> read_replica_db_instance_identifiers, set_read_replica_db_instance_identifiers, with_read_replica_db_instance_identifiers = "ReadReplicaDBInstanceIdentifiers";
        list<String> read_replica_db_cluster_identifiers, set_read_replica_db_cluster_identifiers, with_read_replica_db_cluster_identifiers = "ReadReplicaDBClusterIdentifiers";
        string license_model, set_license_model, with_license_model = "LicenseModel";
        int iops, set_iops, with_iops = "Iops";
        list<OptionGroupMembership> option_group_memberships, set_option_group_memberships, with_option_group_memberships = "OptionGroupMemberships";
        /// Oracle and Microsoft SQL Server only.
        string character_set_name, set_character_set_name, with_character_set_name = "CharacterSetName";
        string secondary_availability_zone, set_secondary_availability_zone, with_secondary_availability_zone = "SecondaryAvailabilityZone";
        boolean publicly_accessible | is_publicly_accessible, set_publicly_accessible, with_publicly_accessible = "PubliclyAccessible";
        list<DbInstanceStatusInfo> status_infos, set_status_infos, with_status_infos = "StatusInfos";
        string storage_type, set_storage_type, with_storage_type = "StorageType";
        string tde_credential_arn, set_tde_credential_arn, with_tde_credential_arn = "TdeCredentialArn";
        int db_instance_port, set_db_instance_port, with_db_instance_port = "DbInstancePort";
        string db_cluster_identifier, set_db_cluster_identifier, with_db_cluster_identifier = "DBClusterIdentifier";
        boolean storage_encrypted | is_storage_encrypted, set_storage_encrypted, with_storage_encrypted = "StorageEncrypted";
        string kms_key_id, set_kms_key_id, with_kms_key_id = "KmsKeyId";
        string dbi_resource_id, set_dbi_resource_id, with_dbi_resource_id = "DbiResourceId";
        string ca_certificate_identifier, set_ca_certificate_identifier, with_ca_certificate_identifier = "CACertificateIdentifier";
        list<DomainMembership> domain_memberships, set_domain_memberships, with_domain_memberships = "DomainMemberships";
        boolean copy_tags_to_snapshot | is_copy_tags_to_snapshot, set_copy_tags_to_snapshot, with_copy_tags_to_snapshot = "CopyTagsToSnapshot";
        /// Interval, in seconds, between points when Enhanced Monitoring metrics are collected.
        int monitoring_interval, set_monitoring_interval, with_monitoring_interval = "MonitoringInterval";
        string enhanced_monitoring_resource_arn, set_enhanced_monitoring_resource_arn, with_enhanced_monitoring_resource_arn = "EnhancedMonitoringResourceArn";
        string monitoring_role_arn, set_monitoring_role_arn, with_monitoring_role_arn = "MonitoringRoleArn";
        int promotion_tier, set_promotion_tier, with_promotion_tier = "PromotionTier";
        string db_instance_arn, set_db_instance_arn, with_db_instance_arn = "DBInstanceArn";
        string timezone, set_timezone, with_timezone = "Timezone";
        boolean iam_database_authentication_enabled | is_iam_database_authentication_enabled, set_iam_database_authentication_enabled, with_iam_database_authentication_enabled = "IAMDatabaseAuthenticationEnabled";
        boolean performance_insights_enabled | is_performance_insights_enabled, set_performance_insights_enabled, with_performance_insights_enabled = "PerformanceInsightsEnabled";
        string performance_insights_kms_key_id, set_performance_insights_kms_key_id, with_performance_insights_kms_key_id = "PerformanceInsightsKMSKeyId";
        int performance_insights_retention_period, set_performance_insights_retention_period, with_performance_insights_retention_period = "PerformanceInsightsRetentionPeriod";
        list<String> enabled_cloudwatch_logs_exports, set_enabled_cloudwatch_logs_exports, with_enabled_cloudwatch_logs_exports = "EnabledCloudwatchLogsExports";
        list<ProcessorFeature> processor_features, set_processor_features, with_processor_features = "ProcessorFeatures";
        boolean deletion_protection | is_deletion_protection, set_deletion_protection, with_deletion_protection = "DeletionProtection";
        list<DbInstanceRole> associated_roles, set_associated_roles, with_associated_roles = "AssociatedRoles";
        /// The listener connection endpoint for SQL Server Always On.
        structure<Endpoint> listener_endpoint, set_listener_endpoint, with_listener_endpoint = "ListenerEndpoint";
        /// The upper limit, in GiB, to which storage can be automatically scaled.
        int max_allocated_storage, set_max_allocated_storage, with_max_allocated_storage = "MaxAllocatedStorage";
    }
}

shape! {
    /// Credentials a DB proxy uses to connect to the database.
    pub struct UserAuthConfig = "UserAuthConfig" {
        string description, set_description, with_description = "Description";
        string user_name, set_user_name, with_user_name = "UserName";
        enumeration<AuthScheme> auth_scheme | auth_scheme_as_str, set_auth_scheme, with_auth_scheme = "AuthScheme";
        /// ARN of the Secrets Manager secret holding the database credentials.
        string secret_arn, set_secret_arn, with_secret_arn = "SecretArn";
        enumeration<IamAuthMode> iam_auth | iam_auth_as_str, set_iam_auth, with_iam_auth = "IAMAuth";
    }
}

shape! {
    /// Details of the authentication a DB proxy uses, as reported by the service.
    pub struct UserAuthConfigInfo = "UserAuthConfigInfo" {
        string description, set_description, with_description = "Description";
        string user_name, set_user_name, with_user_name = "UserName";
        enumeration<AuthScheme> auth_scheme | auth_scheme_as_str, set_auth_scheme, with_auth_scheme = "AuthScheme";
        string secret_arn, set_secret_arn, with_secret_arn = "SecretArn";
        enumeration<IamAuthMode> iam_auth | iam_auth_as_str, set_iam_auth, with_iam_auth = "IAMAuth";
    }
}

shape! {
    /// The data structure representing a proxy managed by the RDS Proxy.
    pub struct DbProxy = "DBProxy" {
        string db_proxy_name, set_db_proxy_name, with_db_proxy_name = "DBProxyName";
        string db_proxy_arn, set_db_proxy_arn, with_db_proxy_arn = "DBProxyArn";
        enumeration<DbProxyStatus> status | status_as_str, set_status, with_status = "Status";
        /// `MYSQL` or `POSTGRESQL`.
        string engine_family, set_engine_family, with_engine_family = "EngineFamily";
        list<String> vpc_security_group_ids, set_vpc_security_group_ids, with_vpc_security_group_ids = "VpcSecurityGroupIds";
        list<String> vpc_subnet_ids, set_vpc_subnet_ids, with_vpc_subnet_ids = "VpcSubnetIds";
        list<UserAuthConfigInfo> auth, set_auth, with_auth = "Auth";
        string role_arn, set_role_arn, with_role_arn = "RoleArn";
        /// The endpoint that you can use to connect to the proxy.
        string endpoint, set_endpoint, with_endpoint = "Endpoint";
        boolean require_tls | is_require_tls, set_require_tls, with_require_tls = "RequireTLS";
        /// Seconds a connection can be inactive before the proxy disconnects it.
        int idle_client_timeout, set_idle_client_timeout, with_idle_client_timeout = "IdleClientTimeout";
        boolean debug_logging | is_debug_logging, set_debug_logging, with_debug_logging = "DebugLogging";
        timestamp created_date, set_created_date, with_created_date = "CreatedDate";
        timestamp updated_date, set_updated_date, with_updated_date = "UpdatedDate";
    }
}

shape! {
    /// A parameter of a DB parameter group or DB cluster parameter group.
    pub struct Parameter = "Parameter" {
        string parameter_name, set_parameter_name, with_parameter_name = "ParameterName";
        string parameter_value, set_parameter_value, with_parameter_value = "ParameterValue";
        string description, set_description, with_description = "Description";
        string source, set_source, with_source = "Source";
        string apply_type, set_apply_type, with_apply_type = "ApplyType";
        string data_type, set_data_type, with_data_type = "DataType";
        string allowed_values, set_allowed_values, with_allowed_values = "AllowedValues";
        boolean is_modifiable | modifiable, set_is_modifiable, with_is_modifiable = "IsModifiable";
        string minimum_engine_version, set_minimum_engine_version, with_minimum_engine_version = "MinimumEngineVersion";
        enumeration<ApplyMethod> apply_method | apply_method_as_str, set_apply_method, with_apply_method = "ApplyMethod";
        list<String> supported_engine_modes, set_supported_engine_modes, with_supported_engine_modes = "SupportedEngineModes";
    }
}

shape! {
    /// A recurring charge billed for a reserved DB instance.
    pub struct RecurringCharge = "RecurringCharge" {
        double recurring_charge_amount, set_recurring_charge_amount, with_recurring_charge_amount = "RecurringChargeAmount";
        string recurring_charge_frequency, set_recurring_charge_frequency, with_recurring_charge_frequency = "RecurringChargeFrequency";
    }
}

shape! {
    /// A reserved DB instance purchased for the account.
    pub struct ReservedDbInstance = "ReservedDBInstance" {
        string reserved_db_instance_id, set_reserved_db_instance_id, with_reserved_db_instance_id = "ReservedDBInstanceId";
        string reserved_db_instances_offering_id, set_reserved_db_instances_offering_id, with_reserved_db_instances_offering_id = "ReservedDBInstancesOfferingId";
        string db_instance_class, set_db_instance_class, with_db_instance_class = "DBInstanceClass";
        timestamp start_time, set_start_time, with_start_time = "StartTime";
        /// The duration of the reservation in seconds.
        int duration, set_duration, with_duration = "Duration";
        double fixed_price, set_fixed_price, with_fixed_price = "FixedPrice";
        double usage_price, set_usage_price, with_usage_price = "UsagePrice";
        string currency_code, set_currency_code, with_currency_code = "CurrencyCode";
        int db_instance_count, set_db_instance_count, with_db_instance_count = "DBInstanceCount";
        string product_description, set_product_description, with_product_description = "ProductDescription";
        string offering_type, set_offering_type, with_offering_type = "OfferingType";
        boolean multi_az | is_multi_az, set_multi_az, with_multi_az = "MultiAZ";
        string state, set_state, with_state = "State";
        list<RecurringCharge> recurring_charges, set_recurring_charges, with_recurring_charges = "RecurringCharges";
        string reserved_db_instance_arn, set_reserved_db_instance_arn, with_reserved_db_instance_arn = "ReservedDBInstanceArn";
        string lease_id, set_lease_id, with_lease_id = "LeaseId";
    }
}

shape! {
    /// A processor feature an instance class supports, with its default and allowed values.
    pub struct AvailableProcessorFeature = "AvailableProcessorFeature" {
        string name, set_name, with_name = "Name";
        string default_value, set_default_value, with_default_value = "DefaultValue";
        string allowed_values, set_allowed_values, with_allowed_values = "AllowedValues";
    }
}

shape! {
    /// A DB instance configuration that can be ordered: an engine, version and instance
    /// class together with the options it supports.
    pub struct OrderableDbInstanceOption = "OrderableDBInstanceOption" {
        string engine, set_engine, with_engine = "Engine";
        string engine_version, set_engine_version, with_engine_version = "EngineVersion";
        string db_instance_class, set_db_instance_class, with_db_instance_class = "DBInstanceClass";
        string license_model, set_license_model, with_license_model = "LicenseModel";
        list<AvailabilityZone> availability_zones, set_availability_zones, with_availability_zones = "AvailabilityZones";
        boolean multi_az_capable | is_multi_az_capable, set_multi_az_capable, with_multi_az_capable = "MultiAZCapable";
        boolean read_replica_capable | is_read_replica_capable, set_read_replica_capable, with_read_replica_capable = "ReadReplicaCapable";
        /// Whether the option is for instances in a VPC.
        boolean vpc | is_vpc, set_vpc, with_vpc = "Vpc";
        boolean supports_storage_encryption | is_supports_storage_encryption, set_supports_storage_encryption, with_supports_storage_encryption = "SupportsStorageEncryption";
        string storage_type, set_storage_type, with_storage_type = "StorageType";
        boolean supports_iops | is_supports_iops, set_supports_iops, with_supports_iops = "SupportsIops";
        boolean supports_enhanced_monitoring | is_supports_enhanced_monitoring, set_supports_enhanced_monitoring, with_supports_enhanced_monitoring = "SupportsEnhancedMonitoring";
        boolean supports_iam_database_authentication | is_supports_iam_database_authentication, set_supports_iam_database_authentication, with_supports_iam_database_authentication = "SupportsIAMDatabaseAuthentication";
        boolean supports_performance_insights | is_supports_performance_insights, set_supports_performance_insights, with_supports_performance_insights = "SupportsPerformanceInsights";
        /// Minimum storage size, in GiB.
        int min_storage_size, set_min_storage_size, with_min_storage_size = "MinStorageSize";
        /// Maximum storage size, in GiB.
        int max_storage_size, set_max_storage_size, with_max_storage_size = "MaxStorageSize";
        int min_iops_per_db_instance, set_min_iops_per_db_instance, with_min_iops_per_db_instance = "MinIopsPerDbInstance";
        int max_iops_per_db_instance, set_max_iops_per_db_instance, with_max_iops_per_db_instance = "MaxIopsPerDbInstance";
        /// Minimum provisioned IOPS per GiB of storage.
        double min_iops_per_gib, set_min_iops_per_gib, with_min_iops_per_gib = "MinIopsPerGib";
        double max_iops_per_gib, set_max_iops_per_gib, with_max_iops_per_gib = "MaxIopsPerGib";
        list<AvailableProcessorFeature> available_processor_features, set_available_processor_features, with_available_processor_features = "AvailableProcessorFeatures";
        list<String> supported_engine_modes, set_supported_engine_modes, with_supported_engine_modes = "SupportedEngineModes";
        boolean supports_storage_autoscaling | is_supports_storage_autoscaling, set_supports_storage_autoscaling, with_supports_storage_autoscaling = "SupportsStorageAutoscaling";
        boolean supports_kerberos_authentication | is_supports_kerberos_authentication, set_supports_kerberos_authentication, with_supports_kerberos_authentication = "SupportsKerberosAuthentication";
    }
}

#[cfg(test)]
mod test {
    use super::{
        ActivityStreamMode, DbCluster, DbClusterMember, DbInstance, DbInstanceRole,
        DbSecurityGroupMembership, Endpoint, EngineFamily, Filter, OrderableDbInstanceOption,
        PendingModifiedValues, ScalingConfigurationInfo, WriteForwardingStatus,
    };
    use smithy_types::schema::ShapeType;
    use smithy_types::Shape;

    #[test]
    fn enum_round_trips() {
        for value in EngineFamily::values() {
            assert_eq!(EngineFamily::from(*value).as_str(), *value);
        }
        assert_eq!(
            "unknown".parse::<WriteForwardingStatus>().unwrap(),
            WriteForwardingStatus::UnknownValue
        );
        let future = WriteForwardingStatus::from("paused".to_string());
        assert_eq!(future, WriteForwardingStatus::Unknown("paused".into()));
        assert_eq!(future.to_string(), "paused");
    }

    #[test]
    fn db_cluster_schema_follows_declaration_order() {
        let schema = DbCluster::new().schema();
        assert_eq!(schema.name(), "DBCluster");
        assert_eq!(schema.members().len(), 54);
        assert_eq!(schema.members()[0].name(), "AllocatedStorage");
        assert_eq!(
            schema.members().last().map(|m| m.name()),
            Some("GlobalWriteForwardingRequested")
        );
        assert_eq!(
            schema.member("ScalingConfigurationInfo").map(|m| m.shape_type()),
            Some(ShapeType::Structure)
        );
    }

    #[test]
    fn nested_shapes_render_recursively() {
        let cluster = DbCluster::new()
            .with_db_cluster_identifier("my-cluster1")
            .with_db_cluster_members([
                DbClusterMember::new()
                    .with_db_instance_identifier("writer")
                    .with_is_cluster_writer(true),
                DbClusterMember::new().with_db_instance_identifier("reader"),
            ])
            .with_scaling_configuration_info(
                ScalingConfigurationInfo::new()
                    .with_min_capacity(1)
                    .with_auto_pause(false),
            )
            .with_activity_stream_mode(ActivityStreamMode::Async);
        assert_eq!(
            cluster.to_string(),
            "{DBClusterIdentifier: my-cluster1,\
             DBClusterMembers: [{DBInstanceIdentifier: writer,IsClusterWriter: true}, {DBInstanceIdentifier: reader}],\
             ScalingConfigurationInfo: {MinCapacity: 1,AutoPause: false},\
             ActivityStreamMode: async}"
        );
        assert_eq!(cluster.activity_stream_mode_as_str(), Some("async"));
        assert_eq!(
            cluster.db_cluster_members().map(|m| m[0].cluster_writer()),
            Some(Some(true))
        );
    }

    #[test]
    fn filter_values_append() {
        let filter = Filter::new()
            .with_name("engine")
            .with_values(["aurora"])
            .with_values(["aurora-postgresql"]);
        assert_eq!(
            filter.to_string(),
            "{Name: engine,Values: [aurora, aurora-postgresql]}"
        );
    }

    #[test]
    fn db_instance_keeps_every_member_in_order() {
        let schema = DbInstance::new().schema();
        assert_eq!(schema.members().len(), 58);
        let position = |name: &str| schema.members().iter().position(|m| m.name() == name);
        assert_eq!(position("DBSecurityGroups"), Some(11));
        assert_eq!(position("PendingModifiedValues"), Some(17));
        assert_eq!(position("CharacterSetName"), Some(28));
        assert_eq!(position("TdeCredentialArn"), Some(33));
        assert_eq!(position("AssociatedRoles"), Some(55));
        assert_eq!(position("ListenerEndpoint"), Some(56));
        assert_eq!(
            schema.member("PendingModifiedValues").map(|m| m.shape_type()),
            Some(ShapeType::Structure)
        );
    }

    #[test]
    fn db_instance_renders_restored_members() {
        let instance = DbInstance::new()
            .with_db_instance_identifier("db1")
            .with_db_security_groups([DbSecurityGroupMembership::new()
                .with_db_security_group_name("default")
                .with_status("active")])
            .with_pending_modified_values(
                PendingModifiedValues::new()
                    .with_db_instance_class("db.r5.large")
                    .with_multi_az(true),
            )
            .with_associated_roles([DbInstanceRole::new().with_feature_name("S3_INTEGRATION")])
            .with_listener_endpoint(Endpoint::new().with_address("listener").with_port(1433));
        assert_eq!(
            instance.to_string(),
            "{DBInstanceIdentifier: db1,\
             DBSecurityGroups: [{DBSecurityGroupName: default,Status: active}],\
             PendingModifiedValues: {DBInstanceClass: db.r5.large,MultiAZ: true},\
             AssociatedRoles: [{FeatureName: S3_INTEGRATION}],\
             ListenerEndpoint: {Address: listener,Port: 1433}}"
        );
        assert_eq!(
            instance.pending_modified_values().and_then(|p| p.is_multi_az()),
            Some(true)
        );
    }

    #[test]
    fn orderable_option_doubles_render_with_fraction() {
        let option = OrderableDbInstanceOption::new()
            .with_engine("mysql")
            .with_vpc(true)
            .with_min_iops_per_gib(1.0)
            .with_max_iops_per_gib(50.0);
        assert_eq!(
            option.to_string(),
            "{Engine: mysql,Vpc: true,MinIopsPerGib: 1.0,MaxIopsPerGib: 50.0}"
        );
        assert_eq!(option.schema().members().len(), 24);
    }
}
