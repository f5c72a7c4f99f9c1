/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon Relational Database Service (Amazon RDS) is a web service that makes it easier to set
//! up, operate, and scale a relational database in the cloud.
//!
//! Every request and response is a shape from [`input`], [`output`] or [`model`]: a struct of
//! optional members built with chained `with_*` calls or in-place `set_*` calls.
//!
//! ```rust
//! use rds::input::DescribeDbClustersInput;
//!
//! let input = DescribeDbClustersInput::new()
//!     .with_db_cluster_identifier("my-cluster1")
//!     .with_max_records(100);
//! assert_eq!(input.to_string(), "{DBClusterIdentifier: my-cluster1,MaxRecords: 100}");
//! ```

#![warn(missing_debug_implementations, rust_2018_idioms)]

mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod os_shim_internal;
pub mod output;
pub mod test_util;
pub mod transport;

pub use crate::client::Client;
pub use crate::config::{Config, Region};
pub use crate::error::{ErrorMetadata, SdkError};
