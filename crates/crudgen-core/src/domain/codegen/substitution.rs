//! Placeholder substitution protocol.
//!
//! Base files carry named placeholders written as `{%name%}`. Rendering runs
//! in two stages:
//!
//! ```text
//!   base file ──fill fragment slots──▶ ResidualText ──default codes──▶ String
//!               (Placeholder)                         (DefaultToken)
//! ```
//!
//! Stage 1 ([`render`]) substitutes every [`Placeholder`] the base file
//! declares. Fragments inserted there may still carry object-scoped
//! [`DefaultToken`]s such as `{%object%}`. Stage 2
//! ([`ResidualText::resolve`]) first checks that every surviving token belongs
//! to the default vocabulary, then replaces them all, so its output never
//! contains a placeholder.
//!
//! A separate, unconditional bare-token replace ([`replace_tokens`]) handles
//! the application names across whole files.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{
    entities::{ObjectSpec, common::RelativePath},
    error::DomainError,
    naming::capitalize,
};

const OPEN: &str = "{%";
const CLOSE: &str = "%}";

/// Fragment slots. Each slot is filled once per pass with concatenated
/// builder output (possibly empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    HeaderFields,
    ListFields,
    FormFields,
    ForeignSelectsFields,
    States,
    MenuItems,
    InsertScripts,
    InjectOtherServices,
    OtherServices,
    GetForeignObjects,
    ForeignFunctionsCall,
}

impl Placeholder {
    pub const ALL: [Self; 11] = [
        Self::HeaderFields,
        Self::ListFields,
        Self::FormFields,
        Self::ForeignSelectsFields,
        Self::States,
        Self::MenuItems,
        Self::InsertScripts,
        Self::InjectOtherServices,
        Self::OtherServices,
        Self::GetForeignObjects,
        Self::ForeignFunctionsCall,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::HeaderFields => "headerFields",
            Self::ListFields => "listFields",
            Self::FormFields => "formFields",
            Self::ForeignSelectsFields => "foreignSelectsFields",
            Self::States => "states",
            Self::MenuItems => "menuItems",
            Self::InsertScripts => "insertScripts",
            Self::InjectOtherServices => "injectOtherServices",
            Self::OtherServices => "otherServices",
            Self::GetForeignObjects => "getForeignObjects",
            Self::ForeignFunctionsCall => "foreignFunctionsCall",
        }
    }

    /// The delimited token as it appears in a base file.
    pub fn token(self) -> String {
        delimited(self.name())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generic identifier tokens replaced by the default-code pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultToken {
    /// `object` → singular name.
    Object,
    /// `Object` → capitalized singular name.
    ObjectCapitalized,
    /// `objects` → plural name.
    Objects,
    /// `Objects` → capitalized plural name.
    ObjectsCapitalized,
    /// `angularAppName` → camel-cased application name.
    AngularAppName,
}

impl DefaultToken {
    pub const ALL: [Self; 5] = [
        Self::AngularAppName,
        Self::Object,
        Self::ObjectCapitalized,
        Self::Objects,
        Self::ObjectsCapitalized,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::ObjectCapitalized => "Object",
            Self::Objects => "objects",
            Self::ObjectsCapitalized => "Objects",
            Self::AngularAppName => "angularAppName",
        }
    }

    pub fn token(self) -> String {
        delimited(self.name())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// Every base file the generator knows, with the placeholder subset it
/// declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseFileKind {
    Services,
    ListController,
    EditController,
    ListView,
    EditView,
    Index,
    States,
    Sidebar,
}

impl BaseFileKind {
    pub const MODULE: [Self; 5] = [
        Self::Services,
        Self::ListController,
        Self::EditController,
        Self::ListView,
        Self::EditView,
    ];

    /// Location of the base file inside the base-code tree.
    pub const fn base_path(self) -> &'static str {
        match self {
            Self::Services => "app/components/base/base.services.js",
            Self::ListController => "app/components/base/base.controller.js",
            Self::EditController => "app/components/base/base.edit.controller.js",
            Self::ListView => "app/components/base/views/base.list.html",
            Self::EditView => "app/components/base/views/base.edit.html",
            Self::Index => "index.html",
            Self::States => "app/app.states.js",
            Self::Sidebar => "app/components/layout/views/sidebar.html",
        }
    }

    pub const fn placeholders(self) -> &'static [Placeholder] {
        match self {
            Self::Services | Self::ListController => &[],
            Self::EditController => &[
                Placeholder::InjectOtherServices,
                Placeholder::OtherServices,
                Placeholder::GetForeignObjects,
                Placeholder::ForeignFunctionsCall,
            ],
            Self::ListView => &[Placeholder::HeaderFields, Placeholder::ListFields],
            Self::EditView => &[Placeholder::FormFields, Placeholder::ForeignSelectsFields],
            Self::Index => &[Placeholder::InsertScripts],
            Self::States => &[Placeholder::States],
            Self::Sidebar => &[Placeholder::MenuItems],
        }
    }

    /// Output path of a module file for `object`. `None` for project-level
    /// files, which keep their base path.
    ///
    /// Fails when the object name would place the file outside the root.
    pub fn module_path(self, object: &ObjectSpec) -> Result<Option<RelativePath>, DomainError> {
        let dir = format!("app/components/{}", object.name);
        let file = match self {
            Self::Services => format!("{dir}/{}.services.js", object.name),
            Self::ListController => format!("{dir}/{}.controller.js", object.name),
            Self::EditController => format!("{dir}/{}.edit.controller.js", object.name),
            Self::ListView => format!("{dir}/views/{}.list.html", object.name),
            Self::EditView => format!("{dir}/views/{}.edit.html", object.name),
            Self::Index | Self::States | Self::Sidebar => return Ok(None),
        };
        RelativePath::try_new(file).map(Some)
    }
}

impl fmt::Display for BaseFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_path())
    }
}

/// Values for fragment slots, accumulated in iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    values: BTreeMap<Placeholder, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a slot, replacing any previous value.
    pub fn set(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.values.insert(placeholder, value.into());
        self
    }

    /// Append a fragment to a slot, declaring it if needed.
    pub fn append(&mut self, placeholder: Placeholder, fragment: &str) {
        self.values.entry(placeholder).or_default().push_str(fragment);
    }

    /// Declare a slot with an empty value unless it already has one.
    pub fn declare(&mut self, placeholder: Placeholder) {
        self.values.entry(placeholder).or_default();
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }
}

/// Stage 1: fill every slot `kind` declares.
///
/// # Errors
/// `MissingPlaceholder` if `substitutions` lacks a declared slot.
pub fn render(
    kind: BaseFileKind,
    source: &str,
    substitutions: &Substitutions,
) -> Result<ResidualText, DomainError> {
    let mut text = source.to_string();
    for &placeholder in kind.placeholders() {
        let value = substitutions
            .get(placeholder)
            .ok_or(DomainError::MissingPlaceholder {
                file: kind.base_path(),
                placeholder: placeholder.name(),
            })?;
        text = text.replace(&placeholder.token(), value);
    }
    Ok(ResidualText(text))
}

/// Template text after stage 1; may still contain [`DefaultToken`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidualText(String);

impl ResidualText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Stage 2: the default-code pass.
    ///
    /// # Errors
    /// `UnresolvedPlaceholder` if a token outside the default vocabulary
    /// survived stage 1.
    pub fn resolve(self, codes: &DefaultCodes, file: &RelativePath) -> Result<String, DomainError> {
        if let Some(token) = find_tokens(&self.0)
            .into_iter()
            .find(|t| DefaultToken::from_name(t).is_none())
        {
            return Err(DomainError::UnresolvedPlaceholder {
                file: file.to_string(),
                token: token.to_string(),
            });
        }

        let mut text = self.0;
        for token in DefaultToken::ALL {
            text = text.replace(&token.token(), codes.value(token));
        }
        Ok(text)
    }

    /// Finish a project-level file, which has no default-code pass.
    ///
    /// # Errors
    /// `UnresolvedPlaceholder` if any token survived stage 1.
    pub fn finish(self, file: &RelativePath) -> Result<String, DomainError> {
        match find_tokens(&self.0).first() {
            Some(token) => Err(DomainError::UnresolvedPlaceholder {
                file: file.to_string(),
                token: (*token).to_string(),
            }),
            None => Ok(self.0),
        }
    }
}

/// Concrete values for the default-code pass of one object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultCodes {
    object: String,
    object_capitalized: String,
    objects: String,
    objects_capitalized: String,
    angular_app_name: String,
}

impl DefaultCodes {
    pub fn new(object: &ObjectSpec, angular_app_name: impl Into<String>) -> Self {
        Self {
            object: object.name_singular.clone(),
            object_capitalized: capitalize(&object.name_singular),
            objects: object.name.clone(),
            objects_capitalized: capitalize(&object.name),
            angular_app_name: angular_app_name.into(),
        }
    }

    pub fn value(&self, token: DefaultToken) -> &str {
        match token {
            DefaultToken::Object => &self.object,
            DefaultToken::ObjectCapitalized => &self.object_capitalized,
            DefaultToken::Objects => &self.objects,
            DefaultToken::ObjectsCapitalized => &self.objects_capitalized,
            DefaultToken::AngularAppName => &self.angular_app_name,
        }
    }
}

/// File-scope replace of bare tokens in one left-to-right scan.
///
/// At each position the first matching token in `pairs` wins. Inserted
/// values are never rescanned.
pub fn replace_tokens(text: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    'scan: while let Some(c) = rest.chars().next() {
        for (token, value) in pairs.iter().filter(|(token, _)| !token.is_empty()) {
            if let Some(tail) = rest.strip_prefix(*token) {
                out.push_str(value);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// Names of all `{%ident%}` tokens in `text`, in order of appearance.
pub fn find_tokens(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        let after = &rest[start + OPEN.len()..];
        match after.find(CLOSE) {
            Some(end) if is_identifier(&after[..end]) => {
                found.push(&after[..end]);
                rest = &after[end + CLOSE.len()..];
            }
            _ => rest = after,
        }
    }

    found
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn delimited(name: &str) -> String {
    format!("{OPEN}{name}{CLOSE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cars() -> ObjectSpec {
        ObjectSpec::new("cars", "car")
    }

    #[test]
    fn placeholder_tokens_are_delimited() {
        assert_eq!(Placeholder::FormFields.token(), "{%formFields%}");
        assert_eq!(DefaultToken::ObjectsCapitalized.token(), "{%Objects%}");
    }

    #[test]
    fn render_fills_declared_slots() {
        let subs = Substitutions::new()
            .set(Placeholder::HeaderFields, "<th>Brand</th>")
            .set(Placeholder::ListFields, "");
        let out = render(
            BaseFileKind::ListView,
            "<tr>{%headerFields%}</tr><tr>{%listFields%}</tr>",
            &subs,
        )
        .unwrap();

        assert_eq!(out.as_str(), "<tr><th>Brand</th></tr><tr></tr>");
    }

    #[test]
    fn render_rejects_missing_slot_value() {
        let subs = Substitutions::new().set(Placeholder::HeaderFields, "");
        let err = render(BaseFileKind::ListView, "{%listFields%}", &subs).unwrap_err();

        assert_eq!(
            err,
            DomainError::MissingPlaceholder {
                file: "app/components/base/views/base.list.html",
                placeholder: "listFields",
            }
        );
    }

    #[test]
    fn default_pass_replaces_every_generic_token() {
        let codes = DefaultCodes::new(&cars(), "garage");
        let residual = ResidualText::new(
            "{%angularAppName%}.{%Object%}EditController {%object%} {%objects%} {%Objects%}",
        );
        let out = residual
            .resolve(&codes, &RelativePath::new("cars.edit.controller.js"))
            .unwrap();

        assert_eq!(out, "garage.CarEditController car cars Cars");
    }

    #[test]
    fn default_pass_does_not_confuse_object_and_objects() {
        let codes = DefaultCodes::new(&cars(), "garage");
        let out = ResidualText::new("{%objects%}/{%object%}")
            .resolve(&codes, &RelativePath::new("f"))
            .unwrap();
        assert_eq!(out, "cars/car");
    }

    #[test]
    fn default_pass_rejects_unfilled_fragment_slot() {
        let codes = DefaultCodes::new(&cars(), "garage");
        let err = ResidualText::new("{%object%} {%formFields%}")
            .resolve(&codes, &RelativePath::new("cars.edit.html"))
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::UnresolvedPlaceholder {
                file: "cars.edit.html".into(),
                token: "formFields".into(),
            }
        );
    }

    #[test]
    fn finish_rejects_any_surviving_token() {
        let file = RelativePath::new("index.html");
        assert!(ResidualText::new("<body></body>").finish(&file).is_ok());
        assert!(ResidualText::new("{%object%}").finish(&file).is_err());
    }

    #[test]
    fn bare_tokens_are_not_rescanned() {
        let pairs = [("angularAppName", "webappNames"), ("appName", "Webapp Names")];
        assert_eq!(
            replace_tokens("module('angularAppName') <b>appName</b>", &pairs),
            "module('webappNames') <b>Webapp Names</b>"
        );
        assert_eq!(replace_tokens("appNameappName", &[("appName", "appName!")]), "appName!appName!");
        assert_eq!(replace_tokens("héllo", &[("", "x")]), "héllo");
    }

    #[test]
    fn find_tokens_ignores_non_identifiers() {
        assert_eq!(
            find_tokens("{%a%} {% b %} {%Object%} {%x-y%} {%"),
            vec!["a", "Object"]
        );
    }

    #[test]
    fn module_paths_derive_from_plural_name() {
        let object = cars();
        assert_eq!(
            BaseFileKind::EditController
                .module_path(&object)
                .unwrap()
                .unwrap()
                .to_string(),
            "app/components/cars/cars.edit.controller.js"
        );
        assert_eq!(
            BaseFileKind::ListView.module_path(&object).unwrap().unwrap().to_string(),
            "app/components/cars/views/cars.list.html"
        );
        assert!(BaseFileKind::Index.module_path(&object).unwrap().is_none());
        assert!(matches!(
            BaseFileKind::Services.module_path(&ObjectSpec::new("../escaped", "car")),
            Err(DomainError::PathEscapesRoot { .. })
        ));
    }

    #[test]
    fn every_placeholder_is_declared_by_some_base_file() {
        let kinds = [
            BaseFileKind::Services,
            BaseFileKind::ListController,
            BaseFileKind::EditController,
            BaseFileKind::ListView,
            BaseFileKind::EditView,
            BaseFileKind::Index,
            BaseFileKind::States,
            BaseFileKind::Sidebar,
        ];
        for placeholder in Placeholder::ALL {
            assert!(
                kinds.iter().any(|k| k.placeholders().contains(&placeholder)),
                "{placeholder} is not declared anywhere"
            );
        }
    }
}
