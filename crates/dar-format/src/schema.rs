//! JSON Schemas for the DAR model.

use schemars::gen::SchemaGenerator;
use schemars::schema::{
    ArrayValidation, InstanceType, ObjectValidation, RootSchema, Schema, SchemaObject,
};
use schemars::{schema_for, JsonSchema};

use crate::{CrawlResult, DarDocument, Render};

/// Prefix of the `$id` stamped on every generated schema.
pub const SCHEMA_BASE_URI: &str = "urn:dar:schema:";

/// A generated schema and the file stem it is published under.
#[derive(Debug, Clone)]
pub struct NamedSchema {
    pub name: &'static str,
    pub schema: RootSchema,
}

/// Schemas for the document root, a render object and the crawl result.
pub fn document_schemas() -> Vec<NamedSchema> {
    vec![
        named::<DarDocument>("dar", "DAR document"),
        named::<Render>("render", "DAR render object"),
        named::<CrawlResult>("result", "DAR crawl result"),
    ]
}

fn named<T: JsonSchema>(name: &'static str, title: &str) -> NamedSchema {
    let mut schema = schema_for!(T);
    let metadata = schema.schema.metadata();
    metadata.id = Some(format!("{SCHEMA_BASE_URI}{name}"));
    metadata.title = Some(title.to_string());
    NamedSchema { name, schema }
}

// Field schemas for members the validator checks loosely or not at all.

pub(crate) fn any_json(_gen: &mut SchemaGenerator) -> Schema {
    Schema::Bool(true)
}

pub(crate) fn json_array(_gen: &mut SchemaGenerator) -> Schema {
    Schema::Object(SchemaObject {
        instance_type: Some(InstanceType::Array.into()),
        array: Some(Box::new(ArrayValidation {
            items: Some(Schema::Bool(true).into()),
            ..ArrayValidation::default()
        })),
        ..SchemaObject::default()
    })
}

pub(crate) fn json_object(_gen: &mut SchemaGenerator) -> Schema {
    Schema::Object(SchemaObject {
        instance_type: Some(InstanceType::Object.into()),
        object: Some(Box::new(ObjectValidation {
            additional_properties: Some(Box::new(Schema::Bool(true))),
            ..ObjectValidation::default()
        })),
        ..SchemaObject::default()
    })
}
