/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The shape abstraction and the routines every generated shape shares.

use crate::member::{MemberValue, HASH_PRIME};
use crate::schema::{MemberSchema, StructureSchema};
use std::fmt;

/// Visitor over the members of a shape, called once per member in declaration order.
pub type MemberVisitor<'a> = dyn FnMut(&'static MemberSchema, Option<&dyn MemberValue>) + 'a;

/// A generated request or response structure.
///
/// Implementations are produced by [`shape!`](crate::shape!); hand-written implementations
/// must visit members in the order listed by [`schema`](Shape::schema).
pub trait Shape: fmt::Debug {
    /// Returns the static schema of this shape.
    fn schema(&self) -> &'static StructureSchema;

    /// Calls `visitor` for every member, passing `None` for absent members.
    fn visit_members(&self, visitor: &mut MemberVisitor<'_>);

    /// Wire names of the members currently present, in declaration order.
    fn present_members(&self) -> Vec<&'static str> {
        let mut present = Vec::new();
        self.visit_members(&mut |member, value| {
            if value.is_some() {
                present.push(member.name());
            }
        });
        present
    }

    /// Returns true if no member is set.
    fn is_empty(&self) -> bool {
        let mut empty = true;
        self.visit_members(&mut |_, value| empty &= value.is_none());
        empty
    }
}

/// Renders `{Name: value,Other: value}` with only the present members.
pub fn fmt_shape<S: Shape + ?Sized>(shape: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("{")?;
    let mut result = Ok(());
    let mut first = true;
    shape.visit_members(&mut |member, value| {
        let value = match value {
            Some(value) if result.is_ok() => value,
            _ => return,
        };
        if !first {
            result = f.write_str(",");
        }
        first = false;
        result = result
            .and_then(|_| write!(f, "{}: ", member.name()))
            .and_then(|_| value.fmt_member(f));
    });
    result?;
    f.write_str("}")
}

/// Folds member hashes in declaration order; absent members contribute `0`.
pub fn hash_shape<S: Shape + ?Sized>(shape: &S) -> i32 {
    let mut hash = 1i32;
    shape.visit_members(&mut |_, value| {
        let member_hash = value.map_or(0, |value| value.member_hash());
        hash = hash.wrapping_mul(HASH_PRIME).wrapping_add(member_hash);
    });
    hash
}
