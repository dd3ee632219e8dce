//! crudgen core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the crudgen
//! CRUD module generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           crudgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GeneratorService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, BaseCodeSource, Loader)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    crudgen-adapters (Infrastructure)    │
//! │ (LocalFilesystem, EmbeddedBaseCode, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Project, fragments, ProjectAssembler)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crudgen_core::prelude::*;
//!
//! # fn run(base: Box<dyn BaseCodeSource>, fs: Box<dyn Filesystem>) -> CrudgenResult<()> {
//! let project = Project::new("Garage")
//!     .with_object(ObjectSpec::new("cars", "car")
//!         .with_field(Field::new("brand", FieldType::Text).required().in_list()));
//!
//! let service = GeneratorService::new(base, fs);
//! let report = service.generate(&project, "./garage", &GenerateOptions::default())?;
//! println!("{} files", report.files_written);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateOptions, GenerationReport, GeneratorService,
        ports::{BaseCodeSource, Filesystem, ProjectLoader},
    };
    pub use crate::domain::{
        BaseCode, Field, FieldType, GeneratedTree, GenerationContext, ObjectSpec, Project,
        ProjectAssembler, ProjectValidator, RelationPolicy,
    };
    pub use crate::error::{CrudgenError, CrudgenResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
