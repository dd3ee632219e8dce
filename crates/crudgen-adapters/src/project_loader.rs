//! JSON project description loader.

use std::{fs, path::Path};

use tracing::{debug, instrument};

use crudgen_core::{
    application::{ApplicationError, ports::ProjectLoader},
    domain::Project,
    error::CrudgenResult,
};

/// Reads `{ "name", "nameCamelCase", "data": { "objects": [...] } }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonProjectLoader;

impl JsonProjectLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse a description already in memory.
    pub fn parse(&self, source: &str, origin: &Path) -> CrudgenResult<Project> {
        serde_json::from_str(source).map_err(|e| {
            ApplicationError::ProjectLoad {
                path: origin.to_path_buf(),
                reason: format!("line {}, column {}: {e}", e.line(), e.column()),
            }
            .into()
        })
    }
}

impl ProjectLoader for JsonProjectLoader {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn load(&self, path: &Path) -> CrudgenResult<Project> {
        let raw = fs::read_to_string(path).map_err(|e| ApplicationError::ProjectLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let project = self.parse(&raw, path)?;
        debug!(
            name = %project.name,
            objects = project.objects().len(),
            "project description loaded"
        );
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudgen_core::{domain::FieldType, error::CrudgenError};
    use tempfile::TempDir;

    const GARAGE: &str = r#"{
        "name": "Garage",
        "nameCamelCase": "garage",
        "data": { "objects": [
            { "name": "cars", "name_singular": "car",
              "structure": [
                { "name": "brand", "type": "text", "required": true, "in_list": true },
                { "name": "price", "type": "float" }
              ],
              "child_of": ["owners"] },
            { "name": "owners", "name_singular": "owner", "structure": [] }
        ] }
    }"#;

    #[test]
    fn loads_description_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("project.json");
        fs::write(&path, GARAGE).unwrap();

        let project = JsonProjectLoader::new().load(&path).unwrap();

        assert_eq!(project.name, "Garage");
        assert_eq!(project.objects().len(), 2);
        let cars = project.find_object("cars").unwrap();
        assert_eq!(cars.structure[1].field_type, FieldType::Float);
        assert_eq!(cars.child_of, vec!["owners".to_string()]);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = JsonProjectLoader::new()
            .load(Path::new("/absolutely/does/not/exist.json"))
            .unwrap_err();
        assert!(matches!(
            err,
            CrudgenError::Application(ApplicationError::ProjectLoad { .. })
        ));
    }

    #[test]
    fn malformed_json_reports_position() {
        let err = JsonProjectLoader::new()
            .parse("{ \"name\": ", Path::new("broken.json"))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("broken.json"));
        assert!(message.contains("line 1"));
    }
}
