/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The seam between the client and whatever performs the wire exchange.

use crate::config::Region;
use crate::error::SdkError;
use crate::operation::Operation;
use http::Uri;
use std::future::Future;

/// Where and as what an operation is being sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationContext {
    operation_name: &'static str,
    region: Region,
    endpoint: Option<Uri>,
}

impl OperationContext {
    pub fn new(operation_name: &'static str, region: Region, endpoint: Option<Uri>) -> Self {
        OperationContext {
            operation_name,
            region,
            endpoint,
        }
    }

    pub fn operation_name(&self) -> &'static str {
        self.operation_name
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Endpoint override. When `None`, the transport resolves the endpoint from the region.
    pub fn endpoint(&self) -> Option<&Uri> {
        self.endpoint.as_ref()
    }
}

/// Sends a populated request shape to RDS and produces the response shape.
///
/// Serialization, signing, retries and endpoint resolution all belong to the implementor.
pub trait Transport: Send + Sync {
    fn send<O: Operation>(
        &self,
        context: OperationContext,
        input: O::Input,
    ) -> impl Future<Output = Result<O::Output, SdkError>> + Send;
}
