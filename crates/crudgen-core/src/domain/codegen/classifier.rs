//! Field classification: which form-field builder renders a field.

use std::fmt;

use crate::domain::entities::{Field, FieldType};

/// Render category of a field. Total over the type/component vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Number,
    TextArea,
    FileImage,
    Unknown,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Number => write!(f, "number"),
            Self::TextArea => write!(f, "textarea"),
            Self::FileImage => write!(f, "file-image"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classify a field. The predicates are tried in order and the first match
/// wins: text, number, textarea, file-image.
pub fn classify(field: &Field) -> FieldKind {
    if is_text(field) {
        FieldKind::Text
    } else if is_number(field) {
        FieldKind::Number
    } else if is_textarea(field) {
        FieldKind::TextArea
    } else if is_file_image(field) {
        FieldKind::FileImage
    } else {
        FieldKind::Unknown
    }
}

fn is_text(field: &Field) -> bool {
    matches!(
        field.field_type,
        FieldType::Text
            | FieldType::String
            | FieldType::Email
            | FieldType::Password
            | FieldType::Date
            | FieldType::Url
    ) && !field.component_is("textarea")
}

fn is_number(field: &Field) -> bool {
    matches!(
        field.field_type,
        FieldType::Number | FieldType::Integer | FieldType::Float
    )
}

fn is_textarea(field: &Field) -> bool {
    field.field_type == FieldType::Textarea || field.component_is("textarea")
}

fn is_file_image(field: &Field) -> bool {
    field.field_type == FieldType::FileImage
}

/// `type` attribute of a text input: the component hint when given.
pub fn input_type(field: &Field) -> &str {
    if let Some(component) = field.component.as_deref() {
        return component;
    }
    match field.field_type {
        FieldType::Email => "email",
        FieldType::Password => "password",
        FieldType::Date => "date",
        FieldType::Url => "url",
        _ => "text",
    }
}
