/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors returned by the RDS client.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

pub type BoxError = Box<dyn Error + Send + Sync>;

/// Error details reported by the service: code, message and request id.
///
/// RDS models most of its faults only by code (for example `DBClusterNotFoundFault`), so the
/// client surfaces this generic form rather than a type per fault.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct ErrorMetadata {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    extras: Option<HashMap<&'static str, String>>,
}

/// Builder for [`ErrorMetadata`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: ErrorMetadata,
}

impl Builder {
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Set a custom field, e.g. the `Type` (`Sender` / `Receiver`) of a query protocol error.
    pub fn custom(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.inner
            .extras
            .get_or_insert_with(HashMap::new)
            .insert(key, value.into());
        self
    }

    pub fn build(self) -> ErrorMetadata {
        self.inner
    }
}

impl ErrorMetadata {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn extra(&self, key: &'static str) -> Option<&str> {
        self.extras
            .as_ref()
            .and_then(|extras| extras.get(key).map(|v| v.as_str()))
    }
}

impl fmt::Display for ErrorMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        if let Some(extras) = &self.extras {
            let mut keys: Vec<_> = extras.keys().collect();
            keys.sort();
            for k in keys {
                fmt.field(k, &extras[k]);
            }
        }
        fmt.finish()
    }
}

impl Error for ErrorMetadata {}

/// No region was configured for the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no region was configured; set one with `Config::builder().region(..)` or `AWS_REGION`")]
#[non_exhaustive]
pub struct MissingRegion;

/// Failed SDK result.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// The request failed during construction. It was not dispatched.
    #[error("failed to construct request: {0}")]
    ConstructionFailure(#[source] BoxError),

    /// The request failed during dispatch. The request MAY have been sent.
    #[error("failed to dispatch request: {0}")]
    DispatchFailure(#[source] BoxError),

    /// An error response was received from the service.
    #[error("service error: {0}")]
    ServiceError(#[source] ErrorMetadata),
}

impl SdkError {
    /// The service error details, when the service answered with an error.
    pub fn service_error(&self) -> Option<&ErrorMetadata> {
        match self {
            SdkError::ServiceError(err) => Some(err),
            _ => None,
        }
    }

    /// The service error code, e.g. `DBClusterNotFoundFault`.
    pub fn code(&self) -> Option<&str> {
        self.service_error().and_then(ErrorMetadata::code)
    }
}

impl From<ErrorMetadata> for SdkError {
    fn from(err: ErrorMetadata) -> Self {
        SdkError::ServiceError(err)
    }
}
