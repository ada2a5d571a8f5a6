use indexmap::IndexMap;
use serde::Serialize;

use crate::descriptor::EnumValue;

/// Schema `type` of a single property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Integer,
    Float,
    String,
}

/// Schema `type` of the parameters object. Always `"object"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    #[default]
    Object,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<EnumValue>>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParametersSchema {
    #[serde(rename = "type")]
    pub schema_type: ObjectType,
    pub properties: IndexMap<String, PropertySchema>,
}

/// Function description handed to a tool-calling API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDocument {
    pub name: String,
    pub description: String,
    pub parameters: ParametersSchema,
}

impl SchemaDocument {
    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.parameters.properties.get(name)
    }

    /// Wraps the document as an entry of a `tools` request array.
    pub fn into_tool(self) -> Tool {
        Tool {
            tool_type: "function".to_string(),
            function: self,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Tool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: SchemaDocument,
}
