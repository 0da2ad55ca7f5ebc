//! Structural shapes seen by the validation walker
//!
//! Every type that may appear inside a request body describes itself through
//! [`Inspect`]. The walker never looks at concrete types, only at the
//! [`Shape`] a value reports and the [`Kind`] its declared type carries.
//! Records list their fields through [`Record`]; both traits are normally
//! implemented by [`validated_record!`](crate::validated_record).

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Declared kind of a type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Int,
    Uint,
    Float32,
    Float64,
    Char,
    String,
    Pointer,
    Array,
    Slice,
    Map,
    Struct,
    Dynamic,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::Char => "char",
            Kind::String => "string",
            Kind::Pointer => "ptr",
            Kind::Array => "array",
            Kind::Slice => "slice",
            Kind::Map => "map",
            Kind::Struct => "struct",
            Kind::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value viewed through its structure
pub enum Shape<'a> {
    /// String leaf
    Str(&'a str),

    /// Optional value; `target` is the declared kind of the pointee
    Pointer {
        target: Kind,
        value: Option<&'a dyn Inspect>,
    },

    /// Fixed-size array or growable slice
    Sequence {
        kind: Kind,
        element: Kind,
        items: Vec<&'a dyn Inspect>,
    },

    /// Any key/value map; contents are never inspected
    Map,

    /// Record with named fields
    Record(&'a dyn Record),

    /// Value whose concrete shape is only known at traversal time
    Dynamic(&'a dyn Inspect),

    /// Numbers, booleans and other unvalidated primitives
    Scalar(Kind),
}

impl Shape<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Shape::Str(_) => Kind::String,
            Shape::Pointer { .. } => Kind::Pointer,
            Shape::Sequence { kind, .. } => *kind,
            Shape::Map => Kind::Map,
            Shape::Record(_) => Kind::Struct,
            Shape::Dynamic(_) => Kind::Dynamic,
            Shape::Scalar(kind) => *kind,
        }
    }
}

/// Structural introspection for values reachable from a request body
pub trait Inspect {
    /// Kind of the type itself, independent of any value
    fn declared_kind() -> Kind
    where
        Self: Sized;

    fn shape(&self) -> Shape<'_>;
}

/// Metadata for one record field
pub struct FieldDescriptor<'a> {
    /// Field name, reported verbatim in errors
    pub name: &'static str,

    /// Rule annotation, if any
    pub rule: Option<&'static str>,

    /// Whether the field is part of the record's public surface
    pub public: bool,

    pub value: &'a dyn Inspect,
}

impl<'a> FieldDescriptor<'a> {
    /// Public, unannotated field
    pub fn new(name: &'static str, value: &'a dyn Inspect) -> Self {
        Self {
            name,
            rule: None,
            public: true,
            value,
        }
    }

    pub fn with_rule(mut self, rule: &'static str) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }
}

/// A fixed-shape composite with named fields
pub trait Record {
    fn type_name(&self) -> &'static str;

    /// Fields in declaration order
    fn fields(&self) -> Vec<FieldDescriptor<'_>>;
}

impl Inspect for String {
    fn declared_kind() -> Kind {
        Kind::String
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

macro_rules! impl_scalar {
    ($kind:expr => $($ty:ty),+) => {
        $(
            impl Inspect for $ty {
                fn declared_kind() -> Kind {
                    $kind
                }

                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar($kind)
                }
            }
        )+
    };
}

impl_scalar!(Kind::Bool => bool);
impl_scalar!(Kind::Int => i8, i16, i32, i64, i128, isize);
impl_scalar!(Kind::Uint => u8, u16, u32, u64, u128, usize);
impl_scalar!(Kind::Float32 => f32);
impl_scalar!(Kind::Float64 => f64);
impl_scalar!(Kind::Char => char);

impl<T: Inspect> Inspect for Option<T> {
    fn declared_kind() -> Kind {
        Kind::Pointer
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Pointer {
            target: T::declared_kind(),
            value: self.as_ref().map(|v| v as &dyn Inspect),
        }
    }
}

// Boxing only moves a value to the heap; it can never be nil, so it is
// transparent to the walker.
impl<T: Inspect> Inspect for Box<T> {
    fn declared_kind() -> Kind {
        T::declared_kind()
    }

    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn declared_kind() -> Kind {
        Kind::Slice
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Sequence {
            kind: Kind::Slice,
            element: T::declared_kind(),
            items: self.iter().map(|v| v as &dyn Inspect).collect(),
        }
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn declared_kind() -> Kind {
        Kind::Array
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Sequence {
            kind: Kind::Array,
            element: T::declared_kind(),
            items: self.iter().map(|v| v as &dyn Inspect).collect(),
        }
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn declared_kind() -> Kind {
        Kind::Map
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Map
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn declared_kind() -> Kind {
        Kind::Map
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Map
    }
}
