//! Project assembly: shared files, the three aggregate artifacts, and every
//! object module, collected into one [`GeneratedTree`].

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::domain::{
    codegen::{
        base_code::BaseCode,
        context::GenerationContext,
        fragments::{menu_entry, route_states, script_includes},
        module::{GeneratedModule, ModuleAssembler},
        substitution::{BaseFileKind, Placeholder, Substitutions, render, replace_tokens},
    },
    entities::{GeneratedTree, ObjectSpec, common::RelativePath},
    error::DomainError,
};

/// Bare token replaced by the camel-cased application name.
pub const ANGULAR_APP_NAME_TOKEN: &str = "angularAppName";
/// Bare token replaced by the display name.
pub const APP_NAME_TOKEN: &str = "appName";

/// Non-fatal findings of one assembly pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// `(object, foreign)` pairs whose foreign name matched no object.
    pub unresolved_relations: Vec<(String, String)>,
    /// `(object, field)` pairs that rendered no form fragment.
    pub unclassified_fields: Vec<(String, String)>,
}

impl Diagnostics {
    fn record(&mut self, module: &GeneratedModule) {
        self.unresolved_relations.extend(
            module
                .unresolved_relations
                .iter()
                .map(|f| (module.object.clone(), f.clone())),
        );
        self.unclassified_fields.extend(
            module
                .unclassified_fields
                .iter()
                .map(|f| (module.object.clone(), f.clone())),
        );
    }

    pub fn is_clean(&self) -> bool {
        self.unresolved_relations.is_empty() && self.unclassified_fields.is_empty()
    }
}

/// Result of [`ProjectAssembler::assemble`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedOutput {
    pub tree: GeneratedTree,
    pub diagnostics: Diagnostics,
}

/// Drives generation for a whole project.
pub struct ProjectAssembler<'a> {
    ctx: &'a GenerationContext<'a>,
    base: &'a BaseCode,
}

impl<'a> ProjectAssembler<'a> {
    pub fn new(ctx: &'a GenerationContext<'a>, base: &'a BaseCode) -> Self {
        Self { ctx, base }
    }

    /// Build the full output tree in memory.
    ///
    /// Directories precede the files inside them. Shared files keep the
    /// base-code order; module files follow in project object order.
    #[instrument(skip_all, fields(project = %self.ctx.app_name(), objects = self.ctx.objects().len()))]
    pub fn assemble(&self) -> Result<GeneratedOutput, DomainError> {
        self.base.ensure_complete()?;

        let mut files: Vec<(RelativePath, String)> = Vec::new();

        // (a) app name, then (b)-(d) aggregates
        for (path, content) in self.base.shared_files() {
            let mut content = if in_app_name_scope(path) {
                self.apply_app_name(content)
            } else {
                content.to_string()
            };

            if let Some(kind) = aggregate_kind(path) {
                content = render(kind, &content, &self.aggregate_substitutions(kind))?.finish(path)?;
                debug!(file = %path, "aggregate substituted");
            }

            files.push((path.clone(), content));
        }

        // (e) modules
        let assembler = ModuleAssembler::new(self.ctx, self.base);
        let mut diagnostics = Diagnostics::default();
        for object in self.ctx.objects() {
            let module = assembler.assemble(object)?;
            diagnostics.record(&module);
            files.extend(module.files.into_iter().map(|f| (f.path, f.content)));
        }

        let tree = build_tree(files);
        tree.validate()?;

        info!(
            files = tree.file_count(),
            unresolved_relations = diagnostics.unresolved_relations.len(),
            unclassified_fields = diagnostics.unclassified_fields.len(),
            "project assembled"
        );

        Ok(GeneratedOutput { tree, diagnostics })
    }

    /// File-scope replace. `angularAppName` is tried first at each position
    /// so `appName` never matches inside it.
    pub fn apply_app_name(&self, content: &str) -> String {
        replace_tokens(
            content,
            &[
                (ANGULAR_APP_NAME_TOKEN, self.ctx.angular_app_name()),
                (APP_NAME_TOKEN, self.ctx.app_name()),
            ],
        )
    }

    fn aggregate_substitutions(&self, kind: BaseFileKind) -> Substitutions {
        let mut subs = Substitutions::new();
        let (placeholder, builder): (Placeholder, fn(&ObjectSpec) -> String) = match kind {
            BaseFileKind::Index => (Placeholder::InsertScripts, script_includes),
            BaseFileKind::States => (Placeholder::States, route_states),
            BaseFileKind::Sidebar => (Placeholder::MenuItems, menu_entry),
            _ => return subs,
        };

        subs.declare(placeholder);
        for object in self.ctx.objects() {
            subs.append(placeholder, &builder(object));
        }
        subs
    }
}

/// Files receiving the app-name replace: top-level HTML, `app/*.js`,
/// `app/components/home/*.js`, `app/components/layout/views/*.html`.
pub fn in_app_name_scope(path: &RelativePath) -> bool {
    let parent = path.parent();
    match path.extension() {
        Some("html") => {
            parent == Path::new("") || parent == Path::new("app/components/layout/views")
        }
        Some("js") => parent == Path::new("app") || parent == Path::new("app/components/home"),
        _ => false,
    }
}

fn aggregate_kind(path: &RelativePath) -> Option<BaseFileKind> {
    [BaseFileKind::Index, BaseFileKind::States, BaseFileKind::Sidebar]
        .into_iter()
        .find(|kind| path.as_path() == Path::new(kind.base_path()))
}

fn build_tree(files: Vec<(RelativePath, String)>) -> GeneratedTree {
    let mut directories = BTreeSet::new();
    for (path, _) in &files {
        let mut dir: PathBuf = path.parent().to_path_buf();
        while !dir.as_os_str().is_empty() {
            directories.insert(dir.clone());
            if !dir.pop() {
                break;
            }
        }
    }

    let mut tree = GeneratedTree::new();
    for dir in directories {
        tree.add_directory(RelativePath::new(dir));
    }
    for (path, content) in files {
        tree.add_file(path, content);
    }
    tree
}
