//! Resolution of Rust parameter types to schema origin types.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::descriptor::{EnumMember, EnumValue, OriginType};

/// Maps a Rust type to the origin type the translator sees.
///
/// Types that cannot appear in a tool schema still implement this trait and
/// resolve to [`OriginType::Unsupported`], so the rejection happens at
/// translation time and names the offending type.
pub trait ParamKind {
    fn origin() -> OriginType;
}

/// A closed set of named constants that can be offered to a model as
/// `enum` choices. Implemented by [`tool_enum!`](crate::tool_enum).
pub trait ToolEnum: Sized + 'static {
    /// Every member in declaration order.
    fn members() -> Vec<EnumMember>;

    /// The primitive value backing this member.
    fn value(&self) -> EnumValue;
}

/// Origin type of any [`ToolEnum`].
pub fn enumeration<E: ToolEnum>() -> OriginType {
    OriginType::Enumeration(E::members())
}

/// Generic wrapper carrying parameter metadata around an inner type.
///
/// Resolution looks through the wrapper to `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Annotated<T>(pub T);

impl<T> Annotated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Annotated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ParamKind> ParamKind for Annotated<T> {
    fn origin() -> OriginType {
        T::origin()
    }
}

fn unsupported<T: ?Sized>() -> OriginType {
    OriginType::Unsupported(std::any::type_name::<T>().to_string())
}

macro_rules! impl_param_kind {
    ($origin:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl ParamKind for $ty {
                fn origin() -> OriginType {
                    $origin
                }
            }
        )+
    };
}

impl_param_kind!(OriginType::Integer =>
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
);
impl_param_kind!(OriginType::Float => f32, f64);
impl_param_kind!(OriginType::String => String, str);

impl ParamKind for &str {
    fn origin() -> OriginType {
        OriginType::String
    }
}

impl ParamKind for Cow<'_, str> {
    fn origin() -> OriginType {
        OriginType::String
    }
}

impl_param_kind!(unsupported::<Self>() => bool, char, (), serde_json::Value);

impl<T> ParamKind for Vec<T> {
    fn origin() -> OriginType {
        unsupported::<Self>()
    }
}

impl<T> ParamKind for Option<T> {
    fn origin() -> OriginType {
        unsupported::<Self>()
    }
}

impl<K, V, S> ParamKind for HashMap<K, V, S> {
    fn origin() -> OriginType {
        unsupported::<Self>()
    }
}

impl<K, V> ParamKind for BTreeMap<K, V> {
    fn origin() -> OriginType {
        unsupported::<Self>()
    }
}
