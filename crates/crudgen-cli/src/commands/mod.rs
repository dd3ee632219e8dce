//! Command handlers, one module per subcommand.

pub mod check;
pub mod completions;
pub mod config;
pub mod generate;
pub mod init;

use std::path::Path;

use crudgen_adapters::JsonProjectLoader;
use crudgen_core::{application::ports::ProjectLoader, domain::Project};

use crate::error::{CliError, CliResult};

/// Read a project description, reporting a missing file as not-found.
pub(crate) fn load_project(path: &Path) -> CliResult<Project> {
    if !path.is_file() {
        return Err(CliError::ProjectNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(JsonProjectLoader::new().load(path)?)
}
