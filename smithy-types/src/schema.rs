/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Static schema descriptors for generated shapes.
//!
//! A schema is the runtime description of a shape: its name and its members in declaration
//! order. Generated code builds these as `static` values, so looking one up never allocates.

/// Enumeration of the member types a shape can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ShapeType {
    /// Boolean type
    Boolean,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// 64-bit floating point
    Double,
    /// UTF-8 string
    String,
    /// String restricted to a documented set of values
    Enum,
    /// Timestamp
    Timestamp,
    /// List type
    List,
    /// Structure type
    Structure,
}

impl ShapeType {
    /// Returns true if this is a simple type.
    #[inline]
    pub fn is_simple(&self) -> bool {
        !self.is_aggregate()
    }

    /// Returns true if this is an aggregate type.
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::List | Self::Structure)
    }
}

/// Schema of a single structure member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberSchema {
    name: &'static str,
    field_name: &'static str,
    shape_type: ShapeType,
}

impl MemberSchema {
    /// Creates a member schema.
    ///
    /// `name` is the member name as it appears on the wire, `field_name` the name of the
    /// generated Rust accessor.
    pub const fn new(name: &'static str, field_name: &'static str, shape_type: ShapeType) -> Self {
        Self {
            name,
            field_name,
            shape_type,
        }
    }

    /// Wire name of the member, e.g. `DBClusterIdentifier`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the generated accessor, e.g. `db_cluster_identifier`.
    pub fn field_name(&self) -> &'static str {
        self.field_name
    }

    /// Type of the member.
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }
}

/// Schema of a structure shape.
#[derive(Debug)]
pub struct StructureSchema {
    name: &'static str,
    members: &'static [MemberSchema],
}

impl StructureSchema {
    /// Creates a structure schema from its members in declaration order.
    pub const fn new(name: &'static str, members: &'static [MemberSchema]) -> Self {
        Self { name, members }
    }

    /// Modeled name of the shape, e.g. `DescribeDBClustersMessage`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Members in declaration order.
    pub fn members(&self) -> &'static [MemberSchema] {
        self.members
    }

    /// Looks up a member by wire name.
    pub fn member(&self, name: &str) -> Option<&'static MemberSchema> {
        self.members.iter().find(|member| member.name == name)
    }

    /// Position of a member in declaration order.
    pub fn member_index(&self, name: &str) -> Option<usize> {
        self.members.iter().position(|member| member.name == name)
    }
}
