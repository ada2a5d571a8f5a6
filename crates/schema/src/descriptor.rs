//! Caller-built description of a callable: its name, documentation and
//! the declared type of every parameter.
//!
//! Descriptors are usually produced by [`tool_fn!`](crate::tool_fn), but can
//! also be assembled by hand or deserialized from JSON.

use serde::{Deserialize, Serialize};

use crate::kind::ParamKind;

/// A primitive value carried by an enumeration member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    Integer(i64),
    Float(f64),
    String(String),
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EnumValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i32> for EnumValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for EnumValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// One named constant of an enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    pub value: EnumValue,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: impl Into<EnumValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The resolved origin of a declared parameter type.
///
/// Only the first four kinds can be translated. `Unsupported` keeps the
/// rejected type's name so the translator can report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginType {
    Integer,
    Float,
    String,
    Enumeration(Vec<EnumMember>),
    Unsupported(String),
}

/// A declared parameter type together with its documentation fragments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAnnotation {
    pub kind: OriginType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,
}

impl TypeAnnotation {
    pub fn new(kind: OriginType) -> Self {
        Self {
            kind,
            docs: Vec::new(),
        }
    }

    /// Annotation for the Rust type `T`.
    pub fn of<T: ParamKind + ?Sized>() -> Self {
        Self::new(T::origin())
    }

    /// Attaches a documentation fragment verbatim.
    #[must_use]
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.docs.push(text.into());
        self
    }

    /// Attaches one line of a `///` comment, minus the single leading space
    /// rustdoc leaves in front of the text.
    #[must_use]
    pub fn doc_comment(self, line: &str) -> Self {
        self.doc(strip_doc_space(line))
    }
}

/// A named parameter in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(flatten)]
    pub annotation: TypeAnnotation,
}

/// Everything the translator needs to know about one callable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallableDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Declared return type. Never part of the generated schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
}

impl CallableDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the whole documentation comment.
    #[must_use]
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.doc = Some(text.into());
        self
    }

    /// Appends one line of a `///` comment to the documentation.
    #[must_use]
    pub fn doc_line(mut self, line: &str) -> Self {
        let line = strip_doc_space(line);
        match &mut self.doc {
            Some(doc) => {
                doc.push('\n');
                doc.push_str(line);
            }
            None => self.doc = Some(line.to_string()),
        }
        self
    }

    #[must_use]
    pub fn param(mut self, name: impl Into<String>, annotation: TypeAnnotation) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            annotation,
        });
        self
    }

    #[must_use]
    pub fn returns(mut self, type_name: impl Into<String>) -> Self {
        self.returns = Some(type_name.into());
        self
    }
}

fn strip_doc_space(line: &str) -> &str {
    line.strip_prefix(' ').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn doc_lines_join_with_newlines() {
        let descriptor = CallableDescriptor::new("f")
            .doc_line(" First line")
            .doc_line("")
            .doc_line("  indented");
        assert_eq!(descriptor.doc.as_deref(), Some("First line\n\n indented"));
    }

    #[test]
    fn doc_comment_strips_one_leading_space() {
        let annotation = TypeAnnotation::new(OriginType::String)
            .doc_comment(" The city")
            .doc(" kept verbatim");
        assert_eq!(annotation.docs, vec!["The city", " kept verbatim"]);
    }

    #[test]
    fn descriptor_deserializes_from_json() {
        let descriptor: CallableDescriptor = serde_json::from_value(json!({
            "name": "set_level",
            "parameters": [
                { "name": "level", "kind": "integer", "docs": ["Level to set"] },
                {
                    "name": "mode",
                    "kind": { "enumeration": [
                        { "name": "LOW", "value": "low" },
                        { "name": "HIGH", "value": 2 }
                    ] }
                }
            ]
        }))
        .unwrap();

        assert_eq!(descriptor.name, "set_level");
        assert_eq!(descriptor.doc, None);
        assert_eq!(descriptor.parameters.len(), 2);
        assert_eq!(descriptor.parameters[0].annotation.kind, OriginType::Integer);
        assert_eq!(
            descriptor.parameters[1].annotation.kind,
            OriginType::Enumeration(vec![
                EnumMember::new("LOW", "low"),
                EnumMember::new("HIGH", 2),
            ])
        );
        assert!(descriptor.parameters[1].annotation.docs.is_empty());
    }

    #[test]
    fn enum_values_keep_their_primitive_type() {
        assert_eq!(EnumValue::from(3), EnumValue::Integer(3));
        assert_eq!(EnumValue::from(0.5), EnumValue::Float(0.5));
        assert_eq!(serde_json::to_value(EnumValue::from("x")).unwrap(), json!("x"));
    }
}
