/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Macros that expand shape definitions into structs.
//!
//! Crates invoking these macros must depend on `serde` with the `derive` feature.

/// Define a shape: a struct of optional members along with accessors and value semantics.
///
/// Each member is declared as
///
/// ```text
/// <kind> getter[ | alias], setter, fluent_setter = "WireName";
/// ```
///
/// where `<kind>` is one of `string`, `boolean`, `int`, `long`, `double`, `timestamp`,
/// `structure<T>`, `enumeration<T>` or `list<T>`. Boolean members name an `is_` alias getter
/// after the `|`; enumeration members name their raw string getter there.
///
/// The expansion provides, per member:
/// - `getter(&self)`, returning `None` while the member is absent
/// - `setter(&mut self, Option<T>) -> &mut Self`, replacing the member in place
/// - `fluent_setter(self, value) -> Self`; for lists it appends the given items
///
/// and, for the shape, `Clone`, `Debug`, `Default`, `PartialEq`, `Eq`, `Hash`, `Display`,
/// serde support keyed by wire name, and [`Shape`](crate::Shape).
///
/// # Example
/// ```rust
/// smithy_types::shape! {
///     /// A key-value pair.
///     pub struct Tag = "Tag" {
///         string key, set_key, with_key = "Key";
///         string value, set_value, with_value = "Value";
///     }
/// }
///
/// let tag = Tag::new().with_key("env").with_value("prod");
/// assert_eq!(tag.to_string(), "{Key: env,Value: prod}");
/// ```
#[macro_export]
macro_rules! shape {
    (
        $(#[$shape_meta:meta])*
        $vis:vis struct $name:ident = $wire_name:literal {
            $(
                $(#[$field_meta:meta])*
                $kind:ident $(<$elem:ty>)? $getter:ident $(| $alias:ident)?, $setter:ident, $with:ident = $wire:literal;
            )*
        }
    ) => {
        $(#[$shape_meta])*
        #[non_exhaustive]
        #[derive(
            ::std::clone::Clone,
            ::std::fmt::Debug,
            ::std::default::Default,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        $vis struct $name {
            $(
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                $getter: ::std::option::Option<$crate::__member_storage!($kind $(<$elem>)?)>,
            )*
        }

        impl $name {
            /// Creates a new value with every member absent.
            pub fn new() -> Self {
                ::std::default::Default::default()
            }

            /// Hash of all members in declaration order.
            pub fn hash_code(&self) -> i32 {
                $crate::shape::hash_shape(self)
            }

            $(
                $crate::__member_accessors!(
                    $kind $(<$elem>)?;
                    [$(#[$field_meta])*]
                    $getter $(| $alias)?, $setter, $with
                );
            )*
        }

        impl $crate::shape::Shape for $name {
            fn schema(&self) -> &'static $crate::schema::StructureSchema {
                static SCHEMA: $crate::schema::StructureSchema = $crate::schema::StructureSchema::new(
                    $wire_name,
                    &[$(
                        $crate::schema::MemberSchema::new(
                            $wire,
                            ::std::stringify!($getter),
                            $crate::__member_shape_type!($kind),
                        ),
                    )*],
                );
                &SCHEMA
            }

            fn visit_members(&self, visitor: &mut $crate::shape::MemberVisitor<'_>) {
                let values: &[::std::option::Option<&dyn $crate::member::MemberValue>] = &[$(
                    self.$getter
                        .as_ref()
                        .map(|value| value as &dyn $crate::member::MemberValue),
                )*];
                let members = self.schema().members();
                for (member, value) in members.iter().zip(values.iter()) {
                    visitor(member, *value);
                }
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                true $(&& $crate::member::option_eq(&self.$getter, &other.$getter))*
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_i32(self.hash_code());
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::shape::fmt_shape(self, f)
            }
        }

        impl $crate::member::MemberValue for $name {
            fn member_hash(&self) -> i32 {
                self.hash_code()
            }

            fn fmt_member(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::shape::fmt_shape(self, f)
            }

            fn member_eq(&self, other: &Self) -> bool {
                self == other
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __member_storage {
    (string) => { ::std::string::String };
    (boolean) => { bool };
    (int) => { i32 };
    (long) => { i64 };
    (double) => { $crate::member::Double };
    (timestamp) => { $crate::Instant };
    (structure<$ty:ty>) => { $ty };
    (enumeration<$ty:ty>) => { $ty };
    (list<$ty:ty>) => { ::std::vec::Vec<$ty> };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __member_shape_type {
    (string) => { $crate::schema::ShapeType::String };
    (boolean) => { $crate::schema::ShapeType::Boolean };
    (int) => { $crate::schema::ShapeType::Integer };
    (long) => { $crate::schema::ShapeType::Long };
    (double) => { $crate::schema::ShapeType::Double };
    (timestamp) => { $crate::schema::ShapeType::Timestamp };
    (structure) => { $crate::schema::ShapeType::Structure };
    (enumeration) => { $crate::schema::ShapeType::Enum };
    (list) => { $crate::schema::ShapeType::List };
}

/// Define accessor methods for one member. Must be called from within an `impl` block.
#[doc(hidden)]
#[macro_export]
macro_rules! __member_accessors {
    (string; [$(#[$meta:meta])*] $getter:ident, $setter:ident, $with:ident) => {
        $(#[$meta])*
        pub fn $getter(&self) -> ::std::option::Option<&str> {
            self.$getter.as_deref()
        }

        $(#[$meta])*
        pub fn $setter(&mut self, input: ::std::option::Option<::std::string::String>) -> &mut Self {
            self.$getter = input;
            self
        }

        $(#[$meta])*
        pub fn $with(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.$getter = ::std::option::Option::Some(input.into());
            self
        }
    };
    (boolean; [$(#[$meta:meta])*] $getter:ident | $alias:ident, $setter:ident, $with:ident) => {
        $crate::__member_accessors!(@copy bool; [$(#[$meta])*] $getter, $setter, $with);

        $(#[$meta])*
        pub fn $alias(&self) -> ::std::option::Option<bool> {
            self.$getter
        }
    };
    (int; [$(#[$meta:meta])*] $getter:ident, $setter:ident, $with:ident) => {
        $crate::__member_accessors!(@copy i32; [$(#[$meta])*] $getter, $setter, $with);
    };
    (long; [$(#[$meta:meta])*] $getter:ident, $setter:ident, $with:ident) => {
        $crate::__member_accessors!(@copy i64; [$(#[$meta])*] $getter, $setter, $with);
    };
    (double; [$(#[$meta:meta])*] $getter:ident, $setter:ident, $with:ident) => {
        $(#[$meta])*
        pub fn $getter(&self) -> ::std::option::Option<f64> {
            self.$getter.map(|value| value.0)
        }

        $(#[$meta])*
        pub fn $setter(&mut self, input: ::std::option::Option<f64>) -> &mut Self {
            self.$getter = input.map($crate::member::Double);
            self
        }

        $(#[$meta])*
        pub fn $with(mut self, input: f64) -> Self {
            self.$getter = ::std::option::Option::Some($crate::member::Double(input));
            self
        }
    };
    (timestamp; [$(#[$meta:meta])*] $getter:ident, $setter:ident, $with:ident) => {
        $crate::__member_accessors!(@copy $crate::Instant; [$(#[$meta])*] $getter, $setter, $with);
    };
    (structure<$ty:ty>; [$(#[$meta:meta])*] $getter:ident, $setter:ident, $with:ident) => {
        $(#[$meta])*
        pub fn $getter(&self) -> ::std::option::Option<&$ty> {
            self.$getter.as_ref()
        }

        $(#[$meta])*
        pub fn $setter(&mut self, input: ::std::option::Option<$ty>) -> &mut Self {
            self.$getter = input;
            self
        }

        $(#[$meta])*
        pub fn $with(mut self, input: $ty) -> Self {
            self.$getter = ::std::option::Option::Some(input);
            self
        }
    };
    (enumeration<$ty:ty>; [$(#[$meta:meta])*] $getter:ident | $as_str:ident, $setter:ident, $with:ident) => {
        $(#[$meta])*
        pub fn $getter(&self) -> ::std::option::Option<&$ty> {
            self.$getter.as_ref()
        }

        $(#[$meta])*
        pub fn $as_str(&self) -> ::std::option::Option<&str> {
            self.$getter.as_ref().map(|value| value.as_str())
        }

        $(#[$meta])*
        pub fn $setter(&mut self, input: ::std::option::Option<$ty>) -> &mut Self {
            self.$getter = input;
            self
        }

        $(#[$meta])*
        pub fn $with(mut self, input: impl ::std::convert::Into<$ty>) -> Self {
            self.$getter = ::std::option::Option::Some(input.into());
            self
        }
    };
    (list<$ty:ty>; [$(#[$meta:meta])*] $getter:ident, $setter:ident, $with:ident) => {
        $(#[$meta])*
        pub fn $getter(&self) -> ::std::option::Option<&[$ty]> {
            self.$getter.as_deref()
        }

        $(#[$meta])*
        pub fn $setter(&mut self, input: ::std::option::Option<::std::vec::Vec<$ty>>) -> &mut Self {
            self.$getter = input;
            self
        }

        $(#[$meta])*
        ///
        /// Appends to any items already present, creating the list if it is absent.
        pub fn $with<I>(mut self, items: I) -> Self
        where
            I: ::std::iter::IntoIterator,
            I::Item: ::std::convert::Into<$ty>,
        {
            self.$getter
                .get_or_insert_with(::std::vec::Vec::new)
                .extend(items.into_iter().map(::std::convert::Into::into));
            self
        }
    };
    (@copy $ty:ty; [$(#[$meta:meta])*] $getter:ident, $setter:ident, $with:ident) => {
        $(#[$meta])*
        pub fn $getter(&self) -> ::std::option::Option<$ty> {
            self.$getter
        }

        $(#[$meta])*
        pub fn $setter(&mut self, input: ::std::option::Option<$ty>) -> &mut Self {
            self.$getter = input;
            self
        }

        $(#[$meta])*
        pub fn $with(mut self, input: $ty) -> Self {
            self.$getter = ::std::option::Option::Some(input);
            self
        }
    };
}

/// Define a string enumeration that tolerates values added to the service after release.
///
/// ```rust
/// smithy_types::string_enum! {
///     /// Supported engine families.
///     pub enum EngineFamily {
///         Mysql = "MYSQL",
///         Postgresql = "POSTGRESQL",
///     }
/// }
///
/// assert_eq!(EngineFamily::from("MYSQL"), EngineFamily::Mysql);
/// assert_eq!(EngineFamily::from("ORACLE").as_str(), "ORACLE");
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(
            ::std::clone::Clone,
            ::std::fmt::Debug,
            ::std::cmp::Eq,
            ::std::cmp::Ord,
            ::std::cmp::PartialEq,
            ::std::cmp::PartialOrd,
            ::std::hash::Hash,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// A value this version of the SDK does not recognize.
            Unknown(::std::string::String),
        }

        impl $name {
            /// Returns the string form of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            /// Returns every documented value.
            pub fn values() -> &'static [&'static str] {
                &[$($value),+]
            }
        }

        impl<'a> ::std::convert::From<&'a str> for $name {
            fn from(s: &'a str) -> Self {
                match s {
                    $($value => $name::$variant,)+
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(s: ::std::string::String) -> Self {
                match $name::from(s.as_str()) {
                    $name::Unknown(_) => $name::Unknown(s),
                    known => known,
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                ::std::result::Result::Ok($name::from(s))
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                <::std::string::String as ::serde::Deserialize<'de>>::deserialize(deserializer).map($name::from)
            }
        }

        impl $crate::member::MemberValue for $name {
            fn member_hash(&self) -> i32 {
                $crate::member::hash_str(self.as_str())
            }

            fn fmt_member(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }

            fn member_eq(&self, other: &Self) -> bool {
                self == other
            }
        }
    };
}
