/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request shapes, one per operation.

use crate::model::{
    ActivityStreamMode, CloudwatchLogsExportConfiguration, EngineFamily, Filter, Parameter,
    ProcessorFeature, ScalingConfiguration, Tag, UserAuthConfig,
};
use smithy_types::shape;

shape! {
    /// Input for `DescribeDBClusters`.
    ///
    /// Returns information about provisioned Aurora DB clusters. This operation supports
    /// pagination through `MaxRecords` and `Marker`.
    pub struct DescribeDbClustersInput = "DescribeDBClustersMessage" {
        /// The user-supplied DB cluster identifier. If supplied, only information about that
        /// DB cluster is returned. Case-insensitive; must match an existing cluster.
        string db_cluster_identifier, set_db_cluster_identifier, with_db_cluster_identifier = "DBClusterIdentifier";
        /// Filters selecting one or more DB clusters. Supported filter names are
        /// `db-cluster-id`, `db-cluster-resource-id`, `domain` and `engine`.
        list<Filter> filters, set_filters, with_filters = "Filters";
        /// The maximum number of records to include in the response, between 20 and 100.
        /// Defaults to 100 on the service side.
        int max_records, set_max_records, with_max_records = "MaxRecords";
        /// Pagination token returned by a previous request.
        string marker, set_marker, with_marker = "Marker";
        boolean include_shared | is_include_shared, set_include_shared, with_include_shared = "IncludeShared";
    }
}

shape! {
    /// Input for `DeleteDBCluster`.
    ///
    /// `SkipFinalSnapshot` and `FinalDBSnapshotIdentifier` are mutually exclusive: when the
    /// final snapshot is skipped no identifier may be given, otherwise one is required.
    pub struct DeleteDbClusterInput = "DeleteDBClusterMessage" {
        string db_cluster_identifier, set_db_cluster_identifier, with_db_cluster_identifier = "DBClusterIdentifier";
        boolean skip_final_snapshot | is_skip_final_snapshot, set_skip_final_snapshot, with_skip_final_snapshot = "SkipFinalSnapshot";
        string final_db_snapshot_identifier, set_final_db_snapshot_identifier, with_final_db_snapshot_identifier = "FinalDBSnapshotIdentifier";
    }
}

shape! {
    /// Input for `DescribeDBSnapshots`.
    pub struct DescribeDbSnapshotsInput = "DescribeDBSnapshotsMessage" {
        /// Can't be used together with `DBSnapshotIdentifier`.
        string db_instance_identifier, set_db_instance_identifier, with_db_instance_identifier = "DBInstanceIdentifier";
        string db_snapshot_identifier, set_db_snapshot_identifier, with_db_snapshot_identifier = "DBSnapshotIdentifier";
        /// `automated`, `manual`, `shared`, `public` or `awsbackup`.
        string snapshot_type, set_snapshot_type, with_snapshot_type = "SnapshotType";
        list<Filter> filters, set_filters, with_filters = "Filters";
        int max_records, set_max_records, with_max_records = "MaxRecords";
        string marker, set_marker, with_marker = "Marker";
        /// Include manual snapshots shared from other accounts that this account may copy
        /// or restore.
        boolean include_shared | is_include_shared, set_include_shared, with_include_shared = "IncludeShared";
        /// Include manual snapshots that any account may copy or restore.
        boolean include_public | is_include_public, set_include_public, with_include_public = "IncludePublic";
        string dbi_resource_id, set_dbi_resource_id, with_dbi_resource_id = "DbiResourceId";
    }
}

shape! {
    /// Input for `CopyDBSnapshot`.
    pub struct CopyDbSnapshotInput = "CopyDBSnapshotMessage" {
        /// The identifier of the source snapshot. For a cross-region copy this must be the
        /// snapshot ARN.
        string source_db_snapshot_identifier, set_source_db_snapshot_identifier, with_source_db_snapshot_identifier = "SourceDBSnapshotIdentifier";
        string target_db_snapshot_identifier, set_target_db_snapshot_identifier, with_target_db_snapshot_identifier = "TargetDBSnapshotIdentifier";
        /// KMS key for an encrypted copy. Required when copying an encrypted snapshot
        /// across regions.
        string kms_key_id, set_kms_key_id, with_kms_key_id = "KmsKeyId";
        list<Tag> tags, set_tags, with_tags = "Tags";
        boolean copy_tags | is_copy_tags, set_copy_tags, with_copy_tags = "CopyTags";
        /// Signed `CopyDBSnapshot` request URL for cross-region copies of encrypted snapshots.
        string pre_signed_url, set_pre_signed_url, with_pre_signed_url = "PreSignedUrl";
        string option_group_name, set_option_group_name, with_option_group_name = "OptionGroupName";
    }
}

shape! {
    /// Input for `CreateDBInstanceReadReplica`.
    ///
    /// The read replica inherits every attribute of the source DB instance that is not
    /// overridden here. The source must have backup retention enabled.
    pub struct CreateDbInstanceReadReplicaInput = "CreateDBInstanceReadReplicaMessage" {
        /// The DB instance identifier of the read replica, stored as a lowercase string.
        string db_instance_identifier, set_db_instance_identifier, with_db_instance_identifier = "DBInstanceIdentifier";
        /// Identifier of the source DB instance, or its ARN when the source is in another
        /// region.
        string source_db_instance_identifier, set_source_db_instance_identifier, with_source_db_instance_identifier = "SourceDBInstanceIdentifier";
        string db_instance_class, set_db_instance_class, with_db_instance_class = "DBInstanceClass";
        string availability_zone, set_availability_zone, with_availability_zone = "AvailabilityZone";
        int port, set_port, with_port = "Port";
        boolean multi_az | is_multi_az, set_multi_az, with_multi_az = "MultiAZ";
        boolean auto_minor_version_upgrade | is_auto_minor_version_upgrade, set_auto_minor_version_upgrade, with_auto_minor_version_upgrade = "AutoMinorVersionUpgrade";
        int iops, set_iops, with_iops = "Iops";
        string option_group_name, set_option_group_name, with_option_group_name = "OptionGroupName";
        /// Only valid for cross-region replicas of Oracle instances.
        string db_parameter_group_name, set_db_parameter_group_name, with_db_parameter_group_name = "DBParameterGroupName";
        boolean publicly_accessible | is_publicly_accessible, set_publicly_accessible, with_publicly_accessible = "PubliclyAccessible";
        list<Tag> tags, set_tags, with_tags = "Tags";
        string db_subnet_group_name, set_db_subnet_group_name, with_db_subnet_group_name = "DBSubnetGroupName";
        list<String> vpc_security_group_ids, set_vpc_security_group_ids, with_vpc_security_group_ids = "VpcSecurityGroupIds";
        string storage_type, set_storage_type, with_storage_type = "StorageType";
        boolean copy_tags_to_snapshot | is_copy_tags_to_snapshot, set_copy_tags_to_snapshot, with_copy_tags_to_snapshot = "CopyTagsToSnapshot";
        /// One of `0`, `1`, `5`, `10`, `15`, `30` or `60`. `0` disables Enhanced Monitoring.
        int monitoring_interval, set_monitoring_interval, with_monitoring_interval = "MonitoringInterval";
        string monitoring_role_arn, set_monitoring_role_arn, with_monitoring_role_arn = "MonitoringRoleArn";
        string kms_key_id, set_kms_key_id, with_kms_key_id = "KmsKeyId";
        string pre_signed_url, set_pre_signed_url, with_pre_signed_url = "PreSignedUrl";
        boolean enable_iam_database_authentication | is_enable_iam_database_authentication, set_enable_iam_database_authentication, with_enable_iam_database_authentication = "EnableIAMDatabaseAuthentication";
        boolean enable_performance_insights | is_enable_performance_insights, set_enable_performance_insights, with_enable_performance_insights = "EnablePerformanceInsights";
        string performance_insights_kms_key_id, set_performance_insights_kms_key_id, with_performance_insights_kms_key_id = "PerformanceInsightsKMSKeyId";
        int performance_insights_retention_period, set_performance_insights_retention_period, with_performance_insights_retention_period = "PerformanceInsightsRetentionPeriod";
        list<String> enable_cloudwatch_logs_exports, set_enable_cloudwatch_logs_exports, with_enable_cloudwatch_logs_exports = "EnableCloudwatchLogsExports";
        list<ProcessorFeature> processor_features, set_processor_features, with_processor_features = "ProcessorFeatures";
        boolean use_default_processor_features | is_use_default_processor_features, set_use_default_processor_features, with_use_default_processor_features = "UseDefaultProcessorFeatures";
        boolean deletion_protection | is_deletion_protection, set_deletion_protection, with_deletion_protection = "DeletionProtection";
        string domain, set_domain, with_domain = "Domain";
        string domain_iam_role_name, set_domain_iam_role_name, with_domain_iam_role_name = "DomainIAMRoleName";
    }
}

shape! {
    /// Input for `CreateDBProxy`.
    pub struct CreateDbProxyInput = "CreateDBProxyRequest" {
        /// Must begin with a letter and contain only ASCII letters, digits and hyphens.
        string db_proxy_name, set_db_proxy_name, with_db_proxy_name = "DBProxyName";
        enumeration<EngineFamily> engine_family | engine_family_as_str, set_engine_family, with_engine_family = "EngineFamily";
        list<UserAuthConfig> auth, set_auth, with_auth = "Auth";
        /// IAM role the proxy uses to read database credentials from Secrets Manager.
        string role_arn, set_role_arn, with_role_arn = "RoleArn";
        list<String> vpc_subnet_ids, set_vpc_subnet_ids, with_vpc_subnet_ids = "VpcSubnetIds";
        list<String> vpc_security_group_ids, set_vpc_security_group_ids, with_vpc_security_group_ids = "VpcSecurityGroupIds";
        boolean require_tls | is_require_tls, set_require_tls, with_require_tls = "RequireTLS";
        int idle_client_timeout, set_idle_client_timeout, with_idle_client_timeout = "IdleClientTimeout";
        /// Log the text of every statement the proxy handles. Intended for debugging only.
        boolean debug_logging | is_debug_logging, set_debug_logging, with_debug_logging = "DebugLogging";
        list<Tag> tags, set_tags, with_tags = "Tags";
    }
}

shape! {
    /// Input for `StartActivityStream`.
    pub struct StartActivityStreamInput = "StartActivityStreamRequest" {
        /// The ARN of the DB cluster, for example
        /// `arn:aws:rds:us-east-1:12345667890:cluster:das-cluster`.
        string resource_arn, set_resource_arn, with_resource_arn = "ResourceArn";
        enumeration<ActivityStreamMode> mode | mode_as_str, set_mode, with_mode = "Mode";
        string kms_key_id, set_kms_key_id, with_kms_key_id = "KmsKeyId";
        /// Start the stream immediately instead of during the next maintenance window.
        boolean apply_immediately | is_apply_immediately, set_apply_immediately, with_apply_immediately = "ApplyImmediately";
    }
}

shape! {
    /// Input for `ModifyDBClusterParameterGroup`.
    pub struct ModifyDbClusterParameterGroupInput = "ModifyDBClusterParameterGroupMessage" {
        string db_cluster_parameter_group_name, set_db_cluster_parameter_group_name, with_db_cluster_parameter_group_name = "DBClusterParameterGroupName";
        /// Up to 20 parameters to modify in a single request.
        list<Parameter> parameters, set_parameters, with_parameters = "Parameters";
    }
}

shape! {
    /// Input for `DescribeReservedDBInstances`.
    pub struct DescribeReservedDbInstancesInput = "DescribeReservedDBInstancesMessage" {
        string reserved_db_instance_id, set_reserved_db_instance_id, with_reserved_db_instance_id = "ReservedDBInstanceId";
        string reserved_db_instances_offering_id, set_reserved_db_instances_offering_id, with_reserved_db_instances_offering_id = "ReservedDBInstancesOfferingId";
        string db_instance_class, set_db_instance_class, with_db_instance_class = "DBInstanceClass";
        /// Duration filter, in years or seconds: `1`, `3`, `31536000` or `94608000`.
        string duration, set_duration, with_duration = "Duration";
        string product_description, set_product_description, with_product_description = "ProductDescription";
        /// `Partial Upfront`, `All Upfront` or `No Upfront`.
        string offering_type, set_offering_type, with_offering_type = "OfferingType";
        boolean multi_az | is_multi_az, set_multi_az, with_multi_az = "MultiAZ";
        string lease_id, set_lease_id, with_lease_id = "LeaseId";
        list<Filter> filters, set_filters, with_filters = "Filters";
        int max_records, set_max_records, with_max_records = "MaxRecords";
        string marker, set_marker, with_marker = "Marker";
    }
}

shape! {
    /// Input for `CreateDBCluster`.
    ///
    /// Creates a new Amazon Aurora DB cluster. With `ReplicationSourceIdentifier` the cluster is
    /// created as a read replica of another cluster or instance.
    pub struct CreateDbClusterInput = "CreateDBClusterMessage" {
        list<String> availability_zones, set_availability_zones, with_availability_zones = "AvailabilityZones";
        int backup_retention_period, set_backup_retention_period, with_backup_retention_period = "BackupRetentionPeriod";
        string character_set_name, set_character_set_name, with_character_set_name = "CharacterSetName";
        string database_name, set_database_name, with_database_name = "DatabaseName";
        /// Stored as a lowercase string. Must start with a letter and can't end with a hyphen.
        string db_cluster_identifier, set_db_cluster_identifier, with_db_cluster_identifier = "DBClusterIdentifier";
        string db_cluster_parameter_group_name, set_db_cluster_parameter_group_name, with_db_cluster_parameter_group_name = "DBClusterParameterGroupName";
        list<String> vpc_security_group_ids, set_vpc_security_group_ids, with_vpc_security_group_ids = "VpcSecurityGroupIds";
        string db_subnet_group_name, set_db_subnet_group_name, with_db_subnet_group_name = "DBSubnetGroupName";
        /// `aurora` (MySQL 5.6 compatible), `aurora-mysql` or `aurora-postgresql`.
        string engine, set_engine, with_engine = "Engine";
        string engine_version, set_engine_version, with_engine_version = "EngineVersion";
        int port, set_port, with_port = "Port";
        string master_username, set_master_username, with_master_username = "MasterUsername";
        string master_user_password, set_master_user_password, with_master_user_password = "MasterUserPassword";
        string option_group_name, set_option_group_name, with_option_group_name = "OptionGroupName";
        string preferred_backup_window, set_preferred_backup_window, with_preferred_backup_window = "PreferredBackupWindow";
        string preferred_maintenance_window, set_preferred_maintenance_window, with_preferred_maintenance_window = "PreferredMaintenanceWindow";
        string replication_source_identifier, set_replication_source_identifier, with_replication_source_identifier = "ReplicationSourceIdentifier";
        list<Tag> tags, set_tags, with_tags = "Tags";
        boolean storage_encrypted | is_storage_encrypted, set_storage_encrypted, with_storage_encrypted = "StorageEncrypted";
        string kms_key_id, set_kms_key_id, with_kms_key_id = "KmsKeyId";
        /// Signed `CreateDBCluster` URL for a cross-region read replica of an encrypted cluster.
        string pre_signed_url, set_pre_signed_url, with_pre_signed_url = "PreSignedUrl";
        boolean enable_iam_database_authentication | is_enable_iam_database_authentication, set_enable_iam_database_authentication, with_enable_iam_database_authentication = "EnableIAMDatabaseAuthentication";
        /// Target backtrack window in seconds, up to 259,200 (72 hours). `0` disables it.
        long backtrack_window, set_backtrack_window, with_backtrack_window = "BacktrackWindow";
        list<String> enable_cloudwatch_logs_exports, set_enable_cloudwatch_logs_exports, with_enable_cloudwatch_logs_exports = "EnableCloudwatchLogsExports";
        /// `provisioned`, `serverless`, `parallelquery`, `global`, or `multimaster`.
        string engine_mode, set_engine_mode, with_engine_mode = "EngineMode";
        structure<ScalingConfiguration> scaling_configuration, set_scaling_configuration, with_scaling_configuration = "ScalingConfiguration";
        boolean deletion_protection | is_deletion_protection, set_deletion_protection, with_deletion_protection = "DeletionProtection";
        string global_cluster_identifier, set_global_cluster_identifier, with_global_cluster_identifier = "GlobalClusterIdentifier";
        boolean enable_http_endpoint | is_enable_http_endpoint, set_enable_http_endpoint, with_enable_http_endpoint = "EnableHttpEndpoint";
        boolean copy_tags_to_snapshot | is_copy_tags_to_snapshot, set_copy_tags_to_snapshot, with_copy_tags_to_snapshot = "CopyTagsToSnapshot";
        string domain, set_domain, with_domain = "Domain";
        string domain_iam_role_name, set_domain_iam_role_name, with_domain_iam_role_name = "DomainIAMRoleName";
    }
}

shape! {
    /// Input for `ModifyDBCluster`.
    pub struct ModifyDbClusterInput = "ModifyDBClusterMessage" {
        string db_cluster_identifier, set_db_cluster_identifier, with_db_cluster_identifier = "DBClusterIdentifier";
        string new_db_cluster_identifier, set_new_db_cluster_identifier, with_new_db_cluster_identifier = "NewDBClusterIdentifier";
        /// Apply `NewDBClusterIdentifier`, `MasterUserPassword` and similar changes now
        /// instead of during the next maintenance window.
        boolean apply_immediately | is_apply_immediately, set_apply_immediately, with_apply_immediately = "ApplyImmediately";
        int backup_retention_period, set_backup_retention_period, with_backup_retention_period = "BackupRetentionPeriod";
        string db_cluster_parameter_group_name, set_db_cluster_parameter_group_name, with_db_cluster_parameter_group_name = "DBClusterParameterGroupName";
        list<String> vpc_security_group_ids, set_vpc_security_group_ids, with_vpc_security_group_ids = "VpcSecurityGroupIds";
        int port, set_port, with_port = "Port";
        string master_user_password, set_master_user_password, with_master_user_password = "MasterUserPassword";
        string option_group_name, set_option_group_name, with_option_group_name = "OptionGroupName";
        string preferred_backup_window, set_preferred_backup_window, with_preferred_backup_window = "PreferredBackupWindow";
        string preferred_maintenance_window, set_preferred_maintenance_window, with_preferred_maintenance_window = "PreferredMaintenanceWindow";
        boolean enable_iam_database_authentication | is_enable_iam_database_authentication, set_enable_iam_database_authentication, with_enable_iam_database_authentication = "EnableIAMDatabaseAuthentication";
        long backtrack_window, set_backtrack_window, with_backtrack_window = "BacktrackWindow";
        structure<CloudwatchLogsExportConfiguration> cloudwatch_logs_export_configuration, set_cloudwatch_logs_export_configuration, with_cloudwatch_logs_export_configuration = "CloudwatchLogsExportConfiguration";
        string engine_version, set_engine_version, with_engine_version = "EngineVersion";
        boolean allow_major_version_upgrade | is_allow_major_version_upgrade, set_allow_major_version_upgrade, with_allow_major_version_upgrade = "AllowMajorVersionUpgrade";
        /// Only valid together with `AllowMajorVersionUpgrade` during a major version upgrade.
        string db_instance_parameter_group_name, set_db_instance_parameter_group_name, with_db_instance_parameter_group_name = "DBInstanceParameterGroupName";
        string domain, set_domain, with_domain = "Domain";
        string domain_iam_role_name, set_domain_iam_role_name, with_domain_iam_role_name = "DomainIAMRoleName";
        structure<ScalingConfiguration> scaling_configuration, set_scaling_configuration, with_scaling_configuration = "ScalingConfiguration";
        boolean deletion_protection | is_deletion_protection, set_deletion_protection, with_deletion_protection = "DeletionProtection";
        boolean enable_http_endpoint | is_enable_http_endpoint, set_enable_http_endpoint, with_enable_http_endpoint = "EnableHttpEndpoint";
        boolean copy_tags_to_snapshot | is_copy_tags_to_snapshot, set_copy_tags_to_snapshot, with_copy_tags_to_snapshot = "CopyTagsToSnapshot";
    }
}

shape! {
    /// Input for `CopyDBClusterSnapshot`.
    pub struct CopyDbClusterSnapshotInput = "CopyDBClusterSnapshotMessage" {
        /// Case-insensitive. For a cross-region copy this must be the snapshot ARN.
        string source_db_cluster_snapshot_identifier, set_source_db_cluster_snapshot_identifier, with_source_db_cluster_snapshot_identifier = "SourceDBClusterSnapshotIdentifier";
        string target_db_cluster_snapshot_identifier, set_target_db_cluster_snapshot_identifier, with_target_db_cluster_snapshot_identifier = "TargetDBClusterSnapshotIdentifier";
        string kms_key_id, set_kms_key_id, with_kms_key_id = "KmsKeyId";
        string pre_signed_url, set_pre_signed_url, with_pre_signed_url = "PreSignedUrl";
        /// Copy every tag from the source snapshot to the target.
        boolean copy_tags | is_copy_tags, set_copy_tags, with_copy_tags = "CopyTags";
        list<Tag> tags, set_tags, with_tags = "Tags";
    }
}

shape! {
    /// Input for `RestoreDBClusterFromS3`.
    ///
    /// Creates an Aurora MySQL cluster from a MySQL backup stored in an S3 bucket.
    pub struct RestoreDbClusterFromS3Input = "RestoreDBClusterFromS3Message" {
        list<String> availability_zones, set_availability_zones, with_availability_zones = "AvailabilityZones";
        int backup_retention_period, set_backup_retention_period, with_backup_retention_period = "BackupRetentionPeriod";
        string character_set_name, set_character_set_name, with_character_set_name = "CharacterSetName";
        string database_name, set_database_name, with_database_name = "DatabaseName";
        string db_cluster_identifier, set_db_cluster_identifier, with_db_cluster_identifier = "DBClusterIdentifier";
        string db_cluster_parameter_group_name, set_db_cluster_parameter_group_name, with_db_cluster_parameter_group_name = "DBClusterParameterGroupName";
        list<String> vpc_security_group_ids, set_vpc_security_group_ids, with_vpc_security_group_ids = "VpcSecurityGroupIds";
        string db_subnet_group_name, set_db_subnet_group_name, with_db_subnet_group_name = "DBSubnetGroupName";
        string engine, set_engine, with_engine = "Engine";
        string engine_version, set_engine_version, with_engine_version = "EngineVersion";
        int port, set_port, with_port = "Port";
        string master_username, set_master_username, with_master_username = "MasterUsername";
        string master_user_password, set_master_user_password, with_master_user_password = "MasterUserPassword";
        string option_group_name, set_option_group_name, with_option_group_name = "OptionGroupName";
        string preferred_backup_window, set_preferred_backup_window, with_preferred_backup_window = "PreferredBackupWindow";
        string preferred_maintenance_window, set_preferred_maintenance_window, with_preferred_maintenance_window = "PreferredMaintenanceWindow";
        list<Tag> tags, set_tags, with_tags = "Tags";
        boolean storage_encrypted | is_storage_encrypted, set_storage_encrypted, with_storage_encrypted = "StorageEncrypted";
        string kms_key_id, set_kms_key_id, with_kms_key_id = "KmsKeyId";
        boolean enable_iam_database_authentication | is_enable_iam_database_authentication, set_enable_iam_database_authentication, with_enable_iam_database_authentication = "EnableIAMDatabaseAuthentication";
        /// Only `mysql` is supported.
        string source_engine, set_source_engine, with_source_engine = "SourceEngine";
        string source_engine_version, set_source_engine_version, with_source_engine_version = "SourceEngineVersion";
        string s3_bucket_name, set_s3_bucket_name, with_s3_bucket_name = "S3BucketName";
        /// Prefix of the backup files in the bucket. Absent means the whole bucket.
        string s3_prefix, set_s3_prefix, with_s3_prefix = "S3Prefix";
        /// IAM role allowing RDS to read the bucket on your behalf.
        string s3_ingestion_role_arn, set_s3_ingestion_role_arn, with_s3_ingestion_role_arn = "S3IngestionRoleArn";
        long backtrack_window, set_backtrack_window, with_backtrack_window = "BacktrackWindow";
        list<String> enable_cloudwatch_logs_exports, set_enable_cloudwatch_logs_exports, with_enable_cloudwatch_logs_exports = "EnableCloudwatchLogsExports";
        boolean deletion_protection | is_deletion_protection, set_deletion_protection, with_deletion_protection = "DeletionProtection";
        boolean copy_tags_to_snapshot | is_copy_tags_to_snapshot, set_copy_tags_to_snapshot, with_copy_tags_to_snapshot = "CopyTagsToSnapshot";
        string domain, set_domain, with_domain = "Domain";
        string domain_iam_role_name, set_domain_iam_role_name, with_domain_iam_role_name = "DomainIAMRoleName";
    }
}

shape! {
    /// Input for `RestoreDBClusterFromSnapshot`.
    pub struct RestoreDbClusterFromSnapshotInput = "RestoreDBClusterFromSnapshotMessage" {
        list<String> availability_zones, set_availability_zones, with_availability_zones = "AvailabilityZones";
        string db_cluster_identifier, set_db_cluster_identifier, with_db_cluster_identifier = "DBClusterIdentifier";
        /// Name or ARN of a DB snapshot or DB cluster snapshot to restore from.
        string snapshot_identifier, set_snapshot_identifier, with_snapshot_identifier = "SnapshotIdentifier";
        string engine, set_engine, with_engine = "Engine";
        string engine_version, set_engine_version, with_engine_version = "EngineVersion";
        int port, set_port, with_port = "Port";
        string db_subnet_group_name, set_db_subnet_group_name, with_db_subnet_group_name = "DBSubnetGroupName";
        string database_name, set_database_name, with_database_name = "DatabaseName";
        string option_group_name, set_option_group_name, with_option_group_name = "OptionGroupName";
        list<String> vpc_security_group_ids, set_vpc_security_group_ids, with_vpc_security_group_ids = "VpcSecurityGroupIds";
        list<Tag> tags, set_tags, with_tags = "Tags";
        string kms_key_id, set_kms_key_id, with_kms_key_id = "KmsKeyId";
        boolean enable_iam_database_authentication | is_enable_iam_database_authentication, set_enable_iam_database_authentication, with_enable_iam_database_authentication = "EnableIAMDatabaseAuthentication";
        long backtrack_window, set_backtrack_window, with_backtrack_window = "BacktrackWindow";
        list<String> enable_cloudwatch_logs_exports, set_enable_cloudwatch_logs_exports, with_enable_cloudwatch_logs_exports = "EnableCloudwatchLogsExports";
        string engine_mode, set_engine_mode, with_engine_mode = "EngineMode";
        structure<ScalingConfiguration> scaling_configuration, set_scaling_configuration, with_scaling_configuration = "ScalingConfiguration";
        string db_cluster_parameter_group_name, set_db_cluster_parameter_group_name, with_db_cluster_parameter_group_name = "DBClusterParameterGroupName";
        boolean deletion_protection | is_deletion_protection, set_deletion_protection, with_deletion_protection = "DeletionProtection";
        boolean copy_tags_to_snapshot | is_copy_tags_to_snapshot, set_copy_tags_to_snapshot, with_copy_tags_to_snapshot = "CopyTagsToSnapshot";
        string domain, set_domain, with_domain = "Domain";
        string domain_iam_role_name, set_domain_iam_role_name, with_domain_iam_role_name = "DomainIAMRoleName";
    }
}

shape! {
    /// Input for `RestoreDBClusterToPointInTime`.
    ///
    /// `RestoreToTime` and `UseLatestRestorableTime` are mutually exclusive.
    pub struct RestoreDbClusterToPointInTimeInput = "RestoreDBClusterToPointInTimeMessage" {
        string db_cluster_identifier, set_db_cluster_identifier, with_db_cluster_identifier = "DBClusterIdentifier";
        /// `full-copy` (the default) or `copy-on-write`.
        string restore_type, set_restore_type, with_restore_type = "RestoreType";
        string source_db_cluster_identifier, set_source_db_cluster_identifier, with_source_db_cluster_identifier = "SourceDBClusterIdentifier";
        /// Must be before the latest restorable time of the source cluster.
        timestamp restore_to_time, set_restore_to_time, with_restore_to_time = "RestoreToTime";
        boolean use_latest_restorable_time | is_use_latest_restorable_time, set_use_latest_restorable_time, with_use_latest_restorable_time = "UseLatestRestorableTime";
        int port, set_port, with_port = "Port";
        string db_subnet_group_name, set_db_subnet_group_name, with_db_subnet_group_name = "DBSubnetGroupName";
        string option_group_name, set_option_group_name, with_option_group_name = "OptionGroupName";
        list<String> vpc_security_group_ids, set_vpc_security_group_ids, with_vpc_security_group_ids = "VpcSecurityGroupIds";
        list<Tag> tags, set_tags, with_tags = "Tags";
        string kms_key_id, set_kms_key_id, with_kms_key_id = "KmsKeyId";
        boolean enable_iam_database_authentication | is_enable_iam_database_authentication, set_enable_iam_database_authentication, with_enable_iam_database_authentication = "EnableIAMDatabaseAuthentication";
        long backtrack_window, set_backtrack_window, with_backtrack_window = "BacktrackWindow";
        list<String> enable_cloudwatch_logs_exports, set_enable_cloudwatch_logs_exports, with_enable_cloudwatch_logs_exports = "EnableCloudwatchLogsExports";
        string db_cluster_parameter_group_name, set_db_cluster_parameter_group_name, with_db_cluster_parameter_group_name = "DBClusterParameterGroupName";
        boolean deletion_protection | is_deletion_protection, set_deletion_protection, with_deletion_protection = "DeletionProtection";
        boolean copy_tags_to_snapshot | is_copy_tags_to_snapshot, set_copy_tags_to_snapshot, with_copy_tags_to_snapshot = "CopyTagsToSnapshot";
        string domain, set_domain, with_domain = "Domain";
        string domain_iam_role_name, set_domain_iam_role_name, with_domain_iam_role_name = "DomainIAMRoleName";
    }
}

shape! {
    /// Input for `RestoreDBInstanceFromS3`.
    ///
    /// Imports a MySQL backup from an S3 bucket into a new DB instance.
    pub struct RestoreDbInstanceFromS3Input = "RestoreDBInstanceFromS3Message" {
        string db_name, set_db_name, with_db_name = "DBName";
        string db_instance_identifier, set_db_instance_identifier, with_db_instance_identifier = "DBInstanceIdentifier";
        int allocated_storage, set_allocated_storage, with_allocated_storage = "AllocatedStorage";
        string db_instance_class, set_db_instance_class, with_db_instance_class = "DBInstanceClass";
        string engine, set_engine, with_engine = "Engine";
        string master_username, set_master_username, with_master_username = "MasterUsername";
        string master_user_password, set_master_user_password, with_master_user_password = "MasterUserPassword";
        list<String> db_security_groups, set_db_security_groups, with_db_security_groups = "DBSecurityGroups";
        list<String> vpc_security_group_ids, set_vpc_security_group_ids, with_vpc_security_group_ids = "VpcSecurityGroupIds";
        string availability_zone, set_availability_zone, with_availability_zone = "AvailabilityZone";
        string db_subnet_group_name, set_db_subnet_group_name, with_db_subnet_group_name = "DBSubnetGroupName";
        string preferred_maintenance_window, set_preferred_maintenance_window, with_preferred_maintenance_window = "PreferredMaintenanceWindow";
        string db_parameter_group_name, set_db_parameter_group_name, with_db_parameter_group_name = "DBParameterGroupName";
        int backup_retention_period, set_backup_retention_period, with_backup_retention_period = "BackupRetentionPeriod";
        string preferred_backup_window, set_preferred_backup_window, with_preferred_backup_window = "PreferredBackupWindow";
        int port, set_port, with_port = "Port";
        /// Can't be combined with `AvailabilityZone`.
        boolean multi_az | is_multi_az, set_multi_az, with_multi_az = "MultiAZ";
        string engine_version, set_engine_version, with_engine_version = "EngineVersion";
        boolean auto_minor_version_upgrade | is_auto_minor_version_upgrade, set_auto_minor_version_upgrade, with_auto_minor_version_upgrade = "AutoMinorVersionUpgrade";
        string license_model, set_license_model, with_license_model = "LicenseModel";
        int iops, set_iops, with_iops = "Iops";
        string option_group_name, set_option_group_name, with_option_group_name = "OptionGroupName";
        boolean publicly_accessible | is_publicly_accessible, set_publicly_accessible, with_publicly_accessible = "PubliclyAccessible";
        list<Tag> tags, set_tags, with_tags = "Tags";
        string storage_type, set_storage_type, with_storage_type = "StorageType";
        boolean storage_encrypted | is_storage_encrypted, set_storage_encrypted, with_storage_encrypted = "StorageEncrypted";
        string kms_key_id, set_kms_key_id, with_kms_key_id = "KmsKeyId";
        boolean copy_tags_to_snapshot | is_copy_tags_to_snapshot, set_copy_tags_to_snapshot, with_copy_tags_to_snapshot = "CopyTagsToSnapshot";
        /// `0`, `1`, `5`, `10`, `15`, `30` or `60` seconds. `0` disables Enhanced Monitoring.
        int monitoring_interval, set_monitoring_interval, with_monitoring_interval = "MonitoringInterval";
        string monitoring_role_arn, set_monitoring_role_arn, with_monitoring_role_arn = "MonitoringRoleArn";
        boolean enable_iam_database_authentication | is_enable_iam_database_authentication, set_enable_iam_database_authentication, with_enable_iam_database_authentication = "EnableIAMDatabaseAuthentication";
        string source_engine, set_source_engine, with_source_engine = "SourceEngine";
        string source_engine_version, set_source_engine_version, with_source_engine_version = "SourceEngineVersion";
        string s3_bucket_name, set_s3_bucket_name, with_s3_bucket_name = "S3BucketName";
        string s3_prefix, set_s3_prefix, with_s3_prefix = "S3Prefix";
        string s3_ingestion_role_arn, set_s3_ingestion_role_arn, with_s3_ingestion_role_arn = "S3IngestionRoleArn";
        boolean enable_performance_insights | is_enable_performance_insights, set_enable_performance_insights, with_enable_performance_insights = "EnablePerformanceInsights";
        string performance_insights_kms_key_id, set_performance_insights_kms_key_id, with_performance_insights_kms_key_id = "PerformanceInsightsKMSKeyId";
        int performance_insights_retention_period, set_performance_insights_retention_period, with_performance_insights_retention_period = "PerformanceInsightsRetentionPeriod";
        list<String> enable_cloudwatch_logs_exports, set_enable_cloudwatch_logs_exports, with_enable_cloudwatch_logs_exports = "EnableCloudwatchLogsExports";
        list<ProcessorFeature> processor_features, set_processor_features, with_processor_features = "ProcessorFeatures";
        boolean use_default_processor_features | is_use_default_processor_features, set_use_default_processor_features, with_use_default_processor_features = "UseDefaultProcessorFeatures";
        boolean deletion_protection | is_deletion_protection, set_deletion_protection, with_deletion_protection = "DeletionProtection";
    }
}

shape! {
    /// Input for `RestoreDBInstanceFromDBSnapshot`.
    pub struct RestoreDbInstanceFromDbSnapshotInput = "RestoreDBInstanceFromDBSnapshotMessage" {
        string db_instance_identifier, set_db_instance_identifier, with_db_instance_identifier = "DBInstanceIdentifier";
        /// Must be the ARN when restoring from a shared manual snapshot.
        string db_snapshot_identifier, set_db_snapshot_identifier, with_db_snapshot_identifier = "DBSnapshotIdentifier";
        string db_instance_class, set_db_instance_class, with_db_instance_class = "DBInstanceClass";
        int port, set_port, with_port = "Port";
        string availability_zone, set_availability_zone, with_availability_zone = "AvailabilityZone";
        string db_subnet_group_name, set_db_subnet_group_name, with_db_subnet_group_name = "DBSubnetGroupName";
        boolean multi_az | is_multi_az, set_multi_az, with_multi_az = "MultiAZ";
        boolean publicly_accessible | is_publicly_accessible, set_publicly_accessible, with_publicly_accessible = "PubliclyAccessible";
        boolean auto_minor_version_upgrade | is_auto_minor_version_upgrade, set_auto_minor_version_upgrade, with_auto_minor_version_upgrade = "AutoMinorVersionUpgrade";
        string license_model, set_license_model, with_license_model = "LicenseModel";
        string db_name, set_db_name, with_db_name = "DBName";
        string engine, set_engine, with_engine = "Engine";
        int iops, set_iops, with_iops = "Iops";
        string option_group_name, set_option_group_name, with_option_group_name = "OptionGroupName";
        list<Tag> tags, set_tags, with_tags = "Tags";
        string storage_type, set_storage_type, with_storage_type = "StorageType";
        string tde_credential_arn, set_tde_credential_arn, with_tde_credential_arn = "TdeCredentialArn";
        string tde_credential_password, set_tde_credential_password, with_tde_credential_password = "TdeCredentialPassword";
        list<String> vpc_security_group_ids, set_vpc_security_group_ids, with_vpc_security_group_ids = "VpcSecurityGroupIds";
        string domain, set_domain, with_domain = "Domain";
        boolean copy_tags_to_snapshot | is_copy_tags_to_snapshot, set_copy_tags_to_snapshot, with_copy_tags_to_snapshot = "CopyTagsToSnapshot";
        string domain_iam_role_name, set_domain_iam_role_name, with_domain_iam_role_name = "DomainIAMRoleName";
        boolean enable_iam_database_authentication | is_enable_iam_database_authentication, set_enable_iam_database_authentication, with_enable_iam_database_authentication = "EnableIAMDatabaseAuthentication";
        list<String> enable_cloudwatch_logs_exports, set_enable_cloudwatch_logs_exports, with_enable_cloudwatch_logs_exports = "EnableCloudwatchLogsExports";
        list<ProcessorFeature> processor_features, set_processor_features, with_processor_features = "ProcessorFeatures";
        boolean use_default_processor_features | is_use_default_processor_features, set_use_default_processor_features, with_use_default_processor_features = "UseDefaultProcessorFeatures";
        string db_parameter_group_name, set_db_parameter_group_name, with_db_parameter_group_name = "DBParameterGroupName";
        boolean deletion_protection | is_deletion_protection, set_deletion_protection, with_deletion_protection = "DeletionProtection";
    }
}

shape! {
    /// Input for `DescribeOrderableDBInstanceOptions`.
    pub struct DescribeOrderableDbInstanceOptionsInput = "DescribeOrderableDBInstanceOptionsMessage" {
        string engine, set_engine, with_engine = "Engine";
        string engine_version, set_engine_version, with_engine_version = "EngineVersion";
        string db_instance_class, set_db_instance_class, with_db_instance_class = "DBInstanceClass";
        string license_model, set_license_model, with_license_model = "LicenseModel";
        /// Only return VPC (`true`) or non-VPC (`false`) offerings.
        boolean vpc | is_vpc, set_vpc, with_vpc = "Vpc";
        list<Filter> filters, set_filters, with_filters = "Filters";
        int max_records, set_max_records, with_max_records = "MaxRecords";
        string marker, set_marker, with_marker = "Marker";
    }
}

#[cfg(test)]
mod test {
    use super::{
        CreateDbProxyInput, DeleteDbClusterInput, DescribeDbClustersInput, ModifyDbClusterInput,
        RestoreDbClusterToPointInTimeInput,
    };
    use crate::model::{CloudwatchLogsExportConfiguration, EngineFamily, Filter};
    use smithy_types::{Instant, Shape};

    #[test]
    fn describe_db_clusters_renders_present_members() {
        let a = DescribeDbClustersInput::new()
            .with_db_cluster_identifier("my-cluster1")
            .with_max_records(100);
        let mut b = DescribeDbClustersInput::new();
        b.set_db_cluster_identifier(Some("my-cluster1".to_string()))
            .set_max_records(Some(100));

        assert_eq!(
            a.to_string(),
            "{DBClusterIdentifier: my-cluster1,MaxRecords: 100}"
        );
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
        assert_eq!(a.present_members(), vec!["DBClusterIdentifier", "MaxRecords"]);
    }

    #[test]
    fn engine_family_from_enum_or_string() {
        let typed = CreateDbProxyInput::new().with_engine_family(EngineFamily::Mysql);
        assert_eq!(typed.engine_family_as_str(), Some("MYSQL"));

        let raw = CreateDbProxyInput::new().with_engine_family("MYSQL");
        assert_eq!(raw, typed);
        assert_eq!(raw.engine_family(), Some(&EngineFamily::Mysql));
    }

    #[test]
    fn explicit_false_is_not_absent() {
        let explicit = DeleteDbClusterInput::new()
            .with_db_cluster_identifier("c")
            .with_skip_final_snapshot(false);
        let absent = DeleteDbClusterInput::new().with_db_cluster_identifier("c");
        assert_ne!(explicit, absent);
        assert_eq!(explicit.is_skip_final_snapshot(), Some(false));
        assert_eq!(absent.skip_final_snapshot(), None);
        assert_eq!(
            explicit.to_string(),
            "{DBClusterIdentifier: c,SkipFinalSnapshot: false}"
        );
    }

    #[test]
    fn filters_accumulate() {
        let input = DescribeDbClustersInput::new()
            .with_filters([Filter::new().with_name("engine").with_values(["aurora"])])
            .with_filters(Vec::<Filter>::new());
        assert_eq!(input.filters().map(|f| f.len()), Some(1));
        assert_eq!(
            input.to_string(),
            "{Filters: [{Name: engine,Values: [aurora]}]}"
        );
    }

    #[test]
    fn point_in_time_restore_renders_timestamp() {
        let input = RestoreDbClusterToPointInTimeInput::new()
            .with_db_cluster_identifier("restored")
            .with_restore_type("copy-on-write")
            .with_source_db_cluster_identifier("my-cluster1")
            .with_restore_to_time(Instant::from_epoch_seconds(1576540098))
            .with_backtrack_window(3600);
        assert_eq!(
            input.to_string(),
            "{DBClusterIdentifier: restored,RestoreType: copy-on-write,\
             SourceDBClusterIdentifier: my-cluster1,RestoreToTime: 2019-12-16T23:48:18Z,\
             BacktrackWindow: 3600}"
        );
        assert_eq!(input.use_latest_restorable_time(), None);
        assert_eq!(input.schema().members().len(), 19);
    }

    #[test]
    fn modify_cluster_nests_log_export_configuration() {
        let input = ModifyDbClusterInput::new()
            .with_db_cluster_identifier("my-cluster1")
            .with_apply_immediately(true)
            .with_cloudwatch_logs_export_configuration(
                CloudwatchLogsExportConfiguration::new()
                    .with_enable_log_types(["audit"])
                    .with_disable_log_types(Vec::<String>::new()),
            );
        assert_eq!(
            input.to_string(),
            "{DBClusterIdentifier: my-cluster1,ApplyImmediately: true,\
             CloudwatchLogsExportConfiguration: {EnableLogTypes: [audit],DisableLogTypes: []}}"
        );
    }
}
