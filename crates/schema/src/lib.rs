//! Derives function-calling schemas from a callable's declared parameter
//! types and documentation.
//!
//! A [`CallableDescriptor`] is built once, usually by [`tool_fn!`], and
//! [`translate`] turns it into a [`SchemaDocument`] ready to be serialized
//! into a tool-calling request.

pub mod descriptor;
pub mod error;
pub mod kind;
pub mod macros;
pub mod schemas;
pub mod translate;

#[doc(hidden)]
pub use paste;

pub use descriptor::{CallableDescriptor, EnumMember, EnumValue, OriginType, Parameter, TypeAnnotation};
pub use error::{Result, SchemaError};
pub use kind::{Annotated, ParamKind, ToolEnum, enumeration};
pub use schemas::{ObjectType, ParametersSchema, PropertySchema, PropertyType, SchemaDocument, Tool};
pub use translate::{RETURN_KEY, property_schema, translate, translate_all};
