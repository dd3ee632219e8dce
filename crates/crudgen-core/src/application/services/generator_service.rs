//! Generator Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Load base code
//! 2. Validate the project (strict mode only)
//! 3. Assemble the output tree in memory
//! 4. Write to filesystem, rolling back on failure
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{BaseCodeSource, Filesystem},
    },
    domain::{
        FsEntry, GeneratedOutput, GeneratedTree, GenerationContext, Project, ProjectAssembler,
        ProjectValidator, RelationPolicy,
    },
    error::{CrudgenError, CrudgenResult},
};

/// Knobs for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub policy: RelationPolicy,
    /// Write into an existing output directory.
    pub force: bool,
}

impl GenerateOptions {
    pub fn strict(mut self, strict: bool) -> Self {
        self.policy = RelationPolicy::from_strict(strict);
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub run_id: Uuid,
    pub project: String,
    pub output_root: PathBuf,
    pub objects: usize,
    pub files_written: usize,
    pub directories_created: usize,
    pub unresolved_relations: Vec<(String, String)>,
    pub unclassified_fields: Vec<(String, String)>,
}

/// Main generation service.
pub struct GeneratorService {
    base_code: Box<dyn BaseCodeSource>,
    filesystem: Box<dyn Filesystem>,
}

impl GeneratorService {
    /// Create a new generator service with the given adapters.
    pub fn new(base_code: Box<dyn BaseCodeSource>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            base_code,
            filesystem,
        }
    }

    /// Compute the output tree without touching the filesystem.
    #[instrument(skip_all, fields(project = %project.name, policy = %options.policy))]
    pub fn plan(&self, project: &Project, options: &GenerateOptions) -> CrudgenResult<GeneratedOutput> {
        let base = self.base_code.load()?;
        info!(source = %self.base_code.describe(), files = base.len(), "Base code loaded");

        if options.policy.is_strict() {
            ProjectValidator::validate(project, options.policy)
                .into_result()
                .map_err(CrudgenError::Domain)?;
        }

        let ctx = GenerationContext::new(project).with_policy(options.policy);
        let output = ProjectAssembler::new(&ctx, &base).assemble()?;
        Ok(output)
    }

    /// Generate the project under `output_root`.
    ///
    /// This is the main use case.
    #[instrument(
        skip_all,
        fields(
            project = %project.name,
            output_root = %output_root.as_ref().display()
        )
    )]
    pub fn generate(
        &self,
        project: &Project,
        output_root: impl AsRef<Path>,
        options: &GenerateOptions,
    ) -> CrudgenResult<GenerationReport> {
        let run_id = Uuid::new_v4();
        let output_root = output_root.as_ref();
        info!(%run_id, objects = project.objects().len(), "Generating project");

        let output = self.plan(project, options)?;
        self.write_tree(&output.tree, output_root, options.force)?;

        let report = GenerationReport {
            run_id,
            project: project.name.clone(),
            output_root: output_root.to_path_buf(),
            objects: project.objects().len(),
            files_written: output.tree.file_count(),
            directories_created: output.tree.directories().count(),
            unresolved_relations: output.diagnostics.unresolved_relations,
            unclassified_fields: output.diagnostics.unclassified_fields,
        };

        info!(
            %run_id,
            files = report.files_written,
            skipped_relations = report.unresolved_relations.len(),
            "Generation completed successfully"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write the tree with rollback on failure.
    ///
    /// Rollback only removes a root this run created.
    fn write_tree(&self, tree: &GeneratedTree, root: &Path, force: bool) -> CrudgenResult<()> {
        let existed = self.filesystem.exists(root);
        if existed && !force {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }
        if existed {
            warn!(path = %root.display(), "Writing into existing directory (--force)");
        }

        match self.write_all(tree, root) {
            Ok(()) => {
                info!("Successfully wrote all files");
                Ok(())
            }
            Err(e) if !existed => {
                warn!("Write failed, attempting rollback");
                self.rollback(root);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    fn write_all(&self, tree: &GeneratedTree, root: &Path) -> CrudgenResult<()> {
        self.filesystem.create_dir_all(root)?;

        for entry in tree.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&root.join(dir.path.as_path()))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(file.path.as_path());
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::{BaseCode, DomainError, ObjectSpec, codegen::testing::sample_base_code};

    #[derive(Default)]
    struct State {
        dirs: BTreeSet<PathBuf>,
        files: BTreeMap<PathBuf, String>,
        fail_on: Option<PathBuf>,
    }

    #[derive(Clone, Default)]
    struct FakeFs(Arc<Mutex<State>>);

    impl FakeFs {
        fn failing_on(path: &str) -> Self {
            let fs = Self::default();
            fs.0.lock().unwrap().fail_on = Some(PathBuf::from(path));
            fs
        }

        fn file(&self, path: &str) -> Option<String> {
            self.0.lock().unwrap().files.get(Path::new(path)).cloned()
        }

        fn file_count(&self) -> usize {
            self.0.lock().unwrap().files.len()
        }
    }

    impl Filesystem for FakeFs {
        fn create_dir_all(&self, path: &Path) -> CrudgenResult<()> {
            self.0.lock().unwrap().dirs.insert(path.to_path_buf());
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()> {
            let mut state = self.0.lock().unwrap();
            if state.fail_on.as_deref() == Some(path) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "injected".into(),
                }
                .into());
            }
            state.files.insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            let state = self.0.lock().unwrap();
            state.dirs.contains(path) || state.files.contains_key(path)
        }

        fn remove_dir_all(&self, path: &Path) -> CrudgenResult<()> {
            let mut state = self.0.lock().unwrap();
            state.dirs.retain(|d| !d.starts_with(path));
            state.files.retain(|f, _| !f.starts_with(path));
            Ok(())
        }
    }

    struct FixedBase(BaseCode);

    impl BaseCodeSource for FixedBase {
        fn load(&self) -> CrudgenResult<BaseCode> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "fixture".into()
        }
    }

    fn service(fs: &FakeFs) -> GeneratorService {
        GeneratorService::new(
            Box::new(FixedBase(sample_base_code())),
            Box::new(fs.clone()),
        )
    }

    fn garage() -> Project {
        Project::new("Garage")
            .with_object(ObjectSpec::new("cars", "car").child_of("ghost"))
            .with_object(ObjectSpec::new("owners", "owner"))
    }

    #[test]
    fn generate_writes_every_file_and_reports() {
        let fs = FakeFs::default();
        let report = service(&fs)
            .generate(&garage(), "/out", &GenerateOptions::default())
            .unwrap();

        assert_eq!(report.objects, 2);
        assert_eq!(report.files_written, fs.file_count());
        assert_eq!(
            report.unresolved_relations,
            vec![("cars".to_string(), "ghost".to_string())]
        );
        assert!(fs.file("/out/app/components/cars/cars.services.js").is_some());
        assert!(fs.file("/out/index.html").unwrap().contains("owners.services.js"));
    }

    #[test]
    fn existing_output_requires_force() {
        let fs = FakeFs::default();
        fs.create_dir_all(Path::new("/out")).unwrap();
        let svc = service(&fs);

        let err = svc
            .generate(&garage(), "/out", &GenerateOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            CrudgenError::Application(ApplicationError::ProjectExists { .. })
        ));

        assert!(
            svc.generate(&garage(), "/out", &GenerateOptions::default().force(true))
                .is_ok()
        );
    }

    #[test]
    fn failed_write_rolls_back_new_root() {
        let fs = FakeFs::failing_on("/out/app/components/owners/owners.services.js");
        let result = service(&fs).generate(&garage(), "/out", &GenerateOptions::default());

        assert!(result.is_err());
        assert_eq!(fs.file_count(), 0);
        assert!(!fs.exists(Path::new("/out")));
    }

    #[test]
    fn strict_generation_fails_before_writing() {
        let fs = FakeFs::default();
        let err = service(&fs)
            .generate(&garage(), "/out", &GenerateOptions::default().strict(true))
            .unwrap_err();

        assert!(matches!(
            err,
            CrudgenError::Domain(DomainError::UnresolvedRelation { .. })
        ));
        assert_eq!(fs.file_count(), 0);
    }

    #[test]
    fn object_name_cannot_leave_output_root() {
        let fs = FakeFs::default();
        let project = Project::new("Garage").with_object(ObjectSpec::new("../../../escaped", "car"));
        let err = service(&fs)
            .generate(&project, "/tmp/out", &GenerateOptions::default())
            .unwrap_err();

        assert!(matches!(
            err,
            CrudgenError::Domain(DomainError::PathEscapesRoot { .. })
        ));
        assert_eq!(fs.file_count(), 0);
        assert!(!fs.exists(Path::new("/tmp/out")));
    }

    #[test]
    fn plan_touches_nothing() {
        let fs = FakeFs::default();
        let output = service(&fs)
            .plan(&garage(), &GenerateOptions::default())
            .unwrap();

        assert!(output.tree.file_count() > 0);
        assert_eq!(fs.file_count(), 0);
    }
}
