//! Declaration macros for validated request shapes
//!
//! `validated_record!` declares a struct and implements [`Record`] and
//! [`Inspect`] for it. A rule annotation follows the field type after `=>`:
//!
//! ```
//! use request_guard::validated_record;
//!
//! validated_record! {
//!     #[derive(Debug)]
//!     pub struct Login {
//!         pub user: String => "user_name",
//!         pub password: String => "password",
//!         pub attempts: u32,
//!     }
//! }
//!
//! let login = Login {
//!     user: "sample".to_string(),
//!     password: "password123".to_string(),
//!     attempts: 1,
//! };
//! assert!(request_guard::validate_struct(&login).is_ok());
//! ```
//!
//! Every field type must implement [`Inspect`]; a field of any other type
//! does not compile. Fields declared without a visibility keyword are
//! reported as non-public and rejected by the walker.
//!
//! `validated_union!` declares an enum over record types. It is the
//! dynamically-typed input of the walker: each variant resolves to the record
//! it wraps before validation.
//!
//! [`Record`]: crate::shape::Record
//! [`Inspect`]: crate::shape::Inspect

#[macro_export]
macro_rules! validated_record {
    (@rule) => {
        ::core::option::Option::None
    };
    (@rule $rule:literal) => {
        ::core::option::Option::Some($rule)
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $(=> $rule:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::shape::Record for $name {
            fn type_name(&self) -> &'static str {
                stringify!($name)
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::shape::FieldDescriptor<'_>> {
                ::std::vec![
                    $(
                        $crate::shape::FieldDescriptor {
                            name: stringify!($field),
                            rule: $crate::validated_record!(@rule $($rule)?),
                            public: !stringify!($field_vis).is_empty(),
                            value: &self.$field,
                        },
                    )*
                ]
            }
        }

        impl $crate::shape::Inspect for $name {
            fn declared_kind() -> $crate::shape::Kind {
                $crate::shape::Kind::Struct
            }

            fn shape(&self) -> $crate::shape::Shape<'_> {
                $crate::shape::Shape::Record(self)
            }
        }
    };
}

#[macro_export]
macro_rules! validated_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($ty:ty)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($ty),
            )*
        }

        impl $crate::shape::Inspect for $name {
            fn declared_kind() -> $crate::shape::Kind {
                $crate::shape::Kind::Dynamic
            }

            fn shape(&self) -> $crate::shape::Shape<'_> {
                match self {
                    $(
                        $name::$variant(inner) => $crate::shape::Shape::Dynamic(inner),
                    )*
                }
            }
        }
    };
}
