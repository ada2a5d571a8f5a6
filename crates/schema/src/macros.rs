// crates/schema/src/macros.rs

/// Declares an enumeration usable as a tool parameter.
///
/// Each variant is bound to the primitive value the model sees in `enum`.
/// `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash` are derived.
///
/// ```
/// toolspec_schema::tool_enum! {
///     pub enum TemperatureUnit {
///         Celsius => "Celsius",
///         Fahrenheit => "Fahrenheit",
///     }
/// }
/// ```
#[macro_export]
macro_rules! tool_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::ToolEnum for $name {
            fn members() -> ::std::vec::Vec<$crate::EnumMember> {
                ::std::vec![
                    $($crate::EnumMember::new(stringify!($variant), $value)),*
                ]
            }

            fn value(&self) -> $crate::EnumValue {
                match *self {
                    $(Self::$variant => $crate::EnumValue::from($value)),*
                }
            }
        }

        impl $crate::ParamKind for $name {
            fn origin() -> $crate::OriginType {
                $crate::enumeration::<Self>()
            }
        }
    };
}

/// Defines a function and, next to it, `<name>_descriptor()` and
/// `<name>_schema()`.
///
/// The function's `///` lines become the callable's documentation and the
/// `///` lines on each parameter become that parameter's doc fragments, one
/// fragment per line. The return type is recorded but never translated.
///
/// ```
/// toolspec_schema::tool_fn! {
///     /// Adds two numbers
///     pub fn add(
///         /// Left operand
///         a: i64,
///         /// Right operand
///         b: i64,
///     ) -> i64 {
///         a + b
///     }
/// }
///
/// let schema = add_schema().unwrap();
/// assert_eq!(schema.description, "Adds two numbers");
/// assert_eq!(add(2, 3), 5);
/// ```
#[macro_export]
macro_rules! tool_fn {
    (
        $(#[doc = $doc:literal])*
        $vis:vis fn $name:ident (
            $(
                $(#[doc = $param_doc:literal])*
                $param:ident : $param_ty:ty
            ),* $(,)?
        ) $(-> $ret:ty)? $body:block
    ) => {
        $(#[doc = $doc])*
        $vis fn $name($($param: $param_ty),*) $(-> $ret)? $body

        $crate::paste::paste! {
            /// Descriptor generated by `tool_fn!`.
            #[allow(unused_mut)]
            $vis fn [<$name _descriptor>]() -> $crate::CallableDescriptor {
                let mut descriptor = $crate::CallableDescriptor::new(stringify!($name));
                $(descriptor = descriptor.doc_line($doc);)*
                $(
                    descriptor = descriptor.param(
                        stringify!($param),
                        $crate::TypeAnnotation::of::<$param_ty>()
                            $(.doc_comment($param_doc))*,
                    );
                )*
                $(descriptor = descriptor.returns(stringify!($ret));)?
                descriptor
            }

            /// Schema document generated by `tool_fn!`.
            $vis fn [<$name _schema>]() -> $crate::Result<$crate::SchemaDocument> {
                $crate::translate(&[<$name _descriptor>]())
            }
        }
    };
}
