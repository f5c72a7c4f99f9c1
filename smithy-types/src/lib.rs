/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Runtime support for generated service models.
//!
//! Every request and response of a modeled service is a *shape*: a struct whose members are
//! all optional. The [`shape!`] macro expands a member list into the struct, its accessors and
//! its value semantics (equality, hashing, rendering). The shared routines those expansions
//! call into live in [`shape`] and [`member`], so the behavior is identical across every
//! generated type.

#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod instant;
mod macros;
pub mod member;
pub mod schema;
pub mod shape;

pub use crate::instant::Instant;
pub use crate::member::MemberValue;
pub use crate::shape::Shape;
