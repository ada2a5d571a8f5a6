use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::descriptor::{CallableDescriptor, OriginType, TypeAnnotation};
use crate::error::{Result, SchemaError};
use crate::schemas::{
    ObjectType, ParametersSchema, PropertySchema, PropertyType, SchemaDocument, Tool,
};

/// Parameter name reserved for return-type metadata.
pub const RETURN_KEY: &str = "return";

/// Translates a callable into its schema document.
///
/// Fails without producing any output if a single parameter has an
/// unsupported origin type.
pub fn translate(callable: &CallableDescriptor) -> Result<SchemaDocument> {
    debug!(
        callable = %callable.name,
        parameters = callable.parameters.len(),
        "Translating callable"
    );

    let mut properties = IndexMap::with_capacity(callable.parameters.len());
    for param in &callable.parameters {
        if param.name == RETURN_KEY {
            warn!(callable = %callable.name, "Skipping '{}' entry in parameter list", RETURN_KEY);
            continue;
        }
        let property = property_schema(&param.annotation).inspect_err(|e| {
            debug!(callable = %callable.name, parameter = %param.name, "{}", e);
        })?;
        trace!(parameter = %param.name, ?property, "Translated parameter");
        properties.insert(param.name.clone(), property);
    }

    Ok(SchemaDocument {
        name: callable.name.clone(),
        description: callable.doc.as_deref().unwrap_or_default().trim().to_string(),
        parameters: ParametersSchema {
            schema_type: ObjectType::Object,
            properties,
        },
    })
}

/// Translates many callables into `tools` array entries. All or nothing.
pub fn translate_all<'a, I>(callables: I) -> Result<Vec<Tool>>
where
    I: IntoIterator<Item = &'a CallableDescriptor>,
{
    callables
        .into_iter()
        .map(|callable| translate(callable).map(SchemaDocument::into_tool))
        .collect()
}

/// Schema for a single annotated parameter.
pub fn property_schema(annotation: &TypeAnnotation) -> Result<PropertySchema> {
    let (property_type, enum_values) = match &annotation.kind {
        OriginType::Integer => (PropertyType::Integer, None),
        OriginType::Float => (PropertyType::Float, None),
        OriginType::String => (PropertyType::String, None),
        OriginType::Enumeration(members) => (
            PropertyType::String,
            Some(members.iter().map(|m| m.value.clone()).collect()),
        ),
        OriginType::Unsupported(name) => return Err(SchemaError::UnsupportedType(name.clone())),
    };

    Ok(PropertySchema {
        property_type,
        enum_values,
        description: annotation.docs.join("\n"),
    })
}
