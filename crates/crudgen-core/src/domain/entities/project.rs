//! Project metadata: the immutable input of a generation run.
//!
//! The shapes mirror the project description JSON:
//!
//! ```json
//! {
//!   "name": "Garage",
//!   "nameCamelCase": "garage",
//!   "data": {
//!     "objects": [
//!       {
//!         "name": "cars",
//!         "name_singular": "car",
//!         "structure": [
//!           { "name": "brand", "type": "text", "required": true, "in_list": true }
//!         ],
//!         "child_of": ["owners"]
//!       }
//!     ]
//!   }
//! }
//! ```
//!
//! Nothing here validates; see [`crate::domain::ProjectValidator`] for the
//! opt-in checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::naming;

/// A project description: display name plus the ordered object list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,

    #[serde(
        rename = "nameCamelCase",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub name_camel_case: Option<String>,

    #[serde(default)]
    pub data: ProjectData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
    #[serde(default)]
    pub objects: Vec<ObjectSpec>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            name_camel_case: None,
            data: ProjectData::default(),
        }
    }

    pub fn with_camel_case_name(mut self, name: impl Into<String>) -> Self {
        self.name_camel_case = Some(name.into());
        self
    }

    pub fn with_object(mut self, object: ObjectSpec) -> Self {
        self.data.objects.push(object);
        self
    }

    /// Objects in declaration order.
    pub fn objects(&self) -> &[ObjectSpec] {
        &self.data.objects
    }

    /// The camel-cased application name, derived from `name` when the
    /// description does not carry one.
    pub fn camel_case_name(&self) -> String {
        match &self.name_camel_case {
            Some(name) if !name.is_empty() => name.clone(),
            _ => naming::to_camel_case(&self.name),
        }
    }

    /// Find an object by its plural `name`.
    pub fn find_object(&self, name: &str) -> Option<&ObjectSpec> {
        self.data.objects.iter().find(|o| o.name == name)
    }
}

/// One entity of the project; drives one generated CRUD module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSpec {
    /// Plural, lower-case identifier (`cars`).
    pub name: String,

    /// Singular identifier (`car`).
    pub name_singular: String,

    #[serde(default)]
    pub structure: Vec<Field>,

    /// Names of the objects this one belongs to, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_of: Vec<String>,
}

impl ObjectSpec {
    pub fn new(name: impl Into<String>, name_singular: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            name_singular: name_singular.into(),
            structure: Vec::new(),
            child_of: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.structure.push(field);
        self
    }

    pub fn child_of(mut self, foreign: impl Into<String>) -> Self {
        self.child_of.push(foreign.into());
        self
    }

    /// Fields surfaced in the list view, in `structure` order.
    pub fn fields_in_list(&self) -> impl Iterator<Item = &Field> {
        self.structure.iter().filter(|f| f.in_list)
    }
}

/// One attribute of an object's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub in_list: bool,

    /// UI widget hint, e.g. `email` or `textarea`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            in_list: false,
            component: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn in_list(mut self) -> Self {
        self.in_list = true;
        self
    }

    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn component_is(&self, name: &str) -> bool {
        self.component.as_deref() == Some(name)
    }
}

/// Declared field type vocabulary.
///
/// Anything outside the vocabulary deserializes to [`FieldType::Unknown`]
/// and renders no form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    String,
    Email,
    Password,
    Date,
    Url,
    Number,
    Integer,
    Float,
    Textarea,
    FileImage,
    #[serde(other)]
    Unknown,
}

impl FieldType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::String => "string",
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
            Self::Url => "url",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Textarea => "textarea",
            Self::FileImage => "file-image",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
