use crate::elements::StructuralElement;
use crate::result::ModelResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

/// Root of a source document
///
/// Mirrors the JSON a document service hands back for a fetched document:
/// an ordered `body.content` plus the `inlineObjects` side table that inline
/// object references resolve against. Keys that are not modelled here are
/// ignored on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Body,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub inline_objects: BTreeMap<String, InlineObject>,
}

impl Document {
    pub fn new(content: Vec<StructuralElement>) -> Self {
        Self {
            body: Body { content },
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> ModelResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn with_inline_object(mut self, id: impl Into<String>, object: InlineObject) -> Self {
        self.inline_objects.insert(id.into(), object);
        self
    }

    pub fn content(&self) -> &[StructuralElement] {
        &self.body.content
    }

    pub fn inline_object(&self, id: &str) -> Option<&InlineObject> {
        self.inline_objects.get(id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// Resolved data for an inline object (an embedded image)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(default)]
    pub inline_object_properties: InlineObjectProperties,
}

impl InlineObject {
    /// Inline image served from `uri`
    pub fn image(uri: impl Into<String>) -> Self {
        Self {
            object_id: None,
            inline_object_properties: InlineObjectProperties {
                embedded_object: EmbeddedObject {
                    image_properties: Some(ImageProperties {
                        content_uri: Some(uri.into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            },
        }
    }

    pub fn content_uri(&self) -> Option<&str> {
        self.inline_object_properties
            .embedded_object
            .image_properties
            .as_ref()
            .and_then(|image| image.content_uri.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineObjectProperties {
    #[serde(default)]
    pub embedded_object: EmbeddedObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_properties: Option<ImageProperties>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProperties {
    /// Short-lived URI the image bytes can be fetched from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,
}
