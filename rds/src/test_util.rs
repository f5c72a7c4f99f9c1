/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Transport double for exercising a [`Client`](crate::Client) without a network.

use crate::error::SdkError;
use crate::operation::Operation;
use crate::transport::{OperationContext, Transport};
use std::any::Any;
use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A request observed by [`TestTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub context: OperationContext,
    /// The input as rendered by its `Display` implementation.
    pub input: String,
}

impl RecordedRequest {
    pub fn operation_name(&self) -> &'static str {
        self.context.operation_name()
    }
}

type QueuedResult = Box<dyn Any + Send>;

/// Replays preloaded results in order and records every request it is sent.
///
/// # Example
/// ```rust
/// use rds::input::DeleteDbClusterInput;
/// use rds::operation::DeleteDbCluster;
/// use rds::output::DeleteDbClusterOutput;
/// use rds::test_util::TestTransport;
///
/// let transport = TestTransport::new()
///     .with_response::<DeleteDbCluster>(Ok(DeleteDbClusterOutput::new()));
/// assert_eq!(transport.remaining(), 1);
/// ```
#[derive(Clone, Default)]
pub struct TestTransport {
    responses: Arc<Mutex<VecDeque<(&'static str, QueuedResult)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next call, which must be an `O`.
    pub fn with_response<O: Operation>(self, result: Result<O::Output, SdkError>) -> Self {
        self.push_response::<O>(result);
        self
    }

    pub fn push_response<O: Operation>(&self, result: Result<O::Output, SdkError>) {
        lock(&self.responses).push_back((O::NAME, Box::new(result)));
    }

    /// Number of queued results not yet consumed.
    pub fn remaining(&self) -> usize {
        lock(&self.responses).len()
    }

    pub fn requests(&self) -> impl Deref<Target = Vec<RecordedRequest>> + '_ {
        lock(&self.requests)
    }

    fn next_result<O: Operation>(&self) -> Result<O::Output, SdkError> {
        let (queued_for, result) = lock(&self.responses)
            .pop_front()
            .ok_or_else(|| SdkError::DispatchFailure("no more queued responses".into()))?;
        match result.downcast::<Result<O::Output, SdkError>>() {
            Ok(result) => *result,
            Err(_) => Err(SdkError::DispatchFailure(
                format!(
                    "next queued response is for `{}`, not `{}`",
                    queued_for,
                    O::NAME
                )
                .into(),
            )),
        }
    }
}

impl fmt::Debug for TestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestTransport")
            .field("remaining", &self.remaining())
            .field("requests", &*self.requests())
            .finish()
    }
}

impl Transport for TestTransport {
    fn send<O: Operation>(
        &self,
        context: OperationContext,
        input: O::Input,
    ) -> impl Future<Output = Result<O::Output, SdkError>> + Send {
        lock(&self.requests).push(RecordedRequest {
            context,
            input: input.to_string(),
        });
        std::future::ready(self.next_result::<O>())
    }
}

#[cfg(test)]
mod test {
    use super::TestTransport;
    use crate::config::Region;
    use crate::error::SdkError;
    use crate::input::DescribeDbClustersInput;
    use crate::operation::{DeleteDbCluster, DescribeDbClusters, Operation};
    use crate::output::{DeleteDbClusterOutput, DescribeDbClustersOutput};
    use crate::transport::{OperationContext, Transport};

    fn context() -> OperationContext {
        OperationContext::new(
            DescribeDbClusters::NAME,
            Region::from_static("us-east-1"),
            None,
        )
    }

    #[tokio::test]
    async fn replays_in_order_and_records() {
        let transport = TestTransport::new()
            .with_response::<DescribeDbClusters>(Ok(
                DescribeDbClustersOutput::new().with_marker("page-2")
            ))
            .with_response::<DescribeDbClusters>(Ok(DescribeDbClustersOutput::new()));

        let first = transport
            .send::<DescribeDbClusters>(
                context(),
                DescribeDbClustersInput::new().with_max_records(20),
            )
            .await
            .unwrap();
        assert_eq!(first.marker(), Some("page-2"));
        let second = transport
            .send::<DescribeDbClusters>(context(), DescribeDbClustersInput::new())
            .await
            .unwrap();
        assert_eq!(second.marker(), None);

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].operation_name(), "DescribeDBClusters");
        assert_eq!(requests[0].input, "{MaxRecords: 20}");
        assert_eq!(requests[1].input, "{}");
    }

    #[tokio::test]
    async fn mismatched_or_missing_responses_fail_dispatch() {
        let transport = TestTransport::new()
            .with_response::<DeleteDbCluster>(Ok(DeleteDbClusterOutput::new()));
        let err = transport
            .send::<DescribeDbClusters>(context(), DescribeDbClustersInput::new())
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::DispatchFailure(_)));
        assert!(err.to_string().contains("DeleteDBCluster"));

        let err = transport
            .send::<DescribeDbClusters>(context(), DescribeDbClustersInput::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no more queued responses"));
        assert_eq!(transport.remaining(), 0);
    }
}
