//! Module assembly: the five generated files of one object.

use tracing::{debug, instrument};

use crate::domain::{
    codegen::{
        base_code::BaseCode,
        classifier::classify,
        context::GenerationContext,
        fragments::{form_field, list_columns},
        relations::{self, RelationFragments},
        substitution::{BaseFileKind, DefaultCodes, Placeholder, Substitutions, render},
    },
    entities::{ObjectSpec, common::RelativePath},
    error::DomainError,
};

/// One fully resolved module file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFile {
    pub kind: BaseFileKind,
    pub path: RelativePath,
    pub content: String,
}

/// Output of [`ModuleAssembler::assemble`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    pub object: String,
    /// Services, list controller, edit controller, list view, edit view.
    pub files: Vec<ModuleFile>,
    pub unresolved_relations: Vec<String>,
    /// Fields that rendered no form fragment.
    pub unclassified_fields: Vec<String>,
}

impl GeneratedModule {
    pub fn file(&self, kind: BaseFileKind) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.kind == kind)
            .map(|f| f.content.as_str())
    }

    /// `app/components/<objects>`
    pub fn directory(&self) -> RelativePath {
        RelativePath::new(format!("app/components/{}", self.object))
    }

    /// `app/components/<objects>/views`
    pub fn views_directory(&self) -> RelativePath {
        RelativePath::new(format!("app/components/{}/views", self.object))
    }
}

/// Instantiates the module base files for a single object.
pub struct ModuleAssembler<'a> {
    ctx: &'a GenerationContext<'a>,
    base: &'a BaseCode,
}

impl<'a> ModuleAssembler<'a> {
    pub fn new(ctx: &'a GenerationContext<'a>, base: &'a BaseCode) -> Self {
        Self { ctx, base }
    }

    /// Build all five module files for `object`.
    ///
    /// Fragment slots are filled first; the default-code pass runs last on
    /// every file, so no placeholder survives.
    #[instrument(skip_all, fields(object = %object.name))]
    pub fn assemble(&self, object: &ObjectSpec) -> Result<GeneratedModule, DomainError> {
        let relations = relations::expand(self.ctx, object)?;
        let (edit_view_subs, unclassified) = self.edit_view_substitutions(object, &relations);
        let codes = DefaultCodes::new(object, self.ctx.angular_app_name());

        let mut files = Vec::with_capacity(BaseFileKind::MODULE.len());
        for kind in BaseFileKind::MODULE {
            let substitutions = match kind {
                BaseFileKind::EditController => relations.controller_substitutions(),
                BaseFileKind::ListView => Self::list_view_substitutions(object),
                BaseFileKind::EditView => edit_view_subs.clone(),
                _ => Substitutions::new(),
            };

            let path = kind
                .module_path(object)?
                .ok_or_else(|| DomainError::InvalidProject(format!("{kind} is not a module file")))?;
            let content = render(kind, self.base.get(kind)?, &substitutions)?.resolve(&codes, &path)?;

            files.push(ModuleFile {
                kind,
                path,
                content,
            });
        }

        debug!(
            files = files.len(),
            unresolved = relations.unresolved.len(),
            unclassified = unclassified.len(),
            "module assembled"
        );

        Ok(GeneratedModule {
            object: object.name.clone(),
            files,
            unresolved_relations: relations.unresolved,
            unclassified_fields: unclassified,
        })
    }

    fn list_view_substitutions(object: &ObjectSpec) -> Substitutions {
        let mut subs = Substitutions::new();
        subs.declare(Placeholder::HeaderFields);
        subs.declare(Placeholder::ListFields);

        for column in list_columns(object) {
            subs.append(Placeholder::HeaderFields, &column.header);
            subs.append(Placeholder::ListFields, &column.body);
        }
        subs
    }

    fn edit_view_substitutions(
        &self,
        object: &ObjectSpec,
        relations: &RelationFragments,
    ) -> (Substitutions, Vec<String>) {
        let mut subs = Substitutions::new().set(Placeholder::ForeignSelectsFields, relations.selects.as_str());
        subs.declare(Placeholder::FormFields);
        let mut unclassified = Vec::new();

        for field in &object.structure {
            match form_field(field) {
                Some(fragment) => subs.append(Placeholder::FormFields, &fragment),
                None => {
                    debug!(
                        field = %field.name,
                        field_type = %field.field_type,
                        kind = %classify(field),
                        "field has no form renderer; skipped"
                    );
                    unclassified.push(field.name.clone());
                }
            }
        }

        (subs, unclassified)
    }
}
