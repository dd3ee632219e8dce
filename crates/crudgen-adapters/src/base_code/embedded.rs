//! The bundled base code.

use crudgen_core::{application::ports::BaseCodeSource, domain::BaseCode, error::CrudgenResult};
use tracing::debug;

macro_rules! bundled {
    ($($path:literal),* $(,)?) => {
        &[$(($path, include_str!(concat!("../../base_code/", $path)))),*]
    };
}

/// Relative path and content of every bundled file.
static FILES: &[(&str, &str)] = bundled![
    "index.html",
    "app/app.js",
    "app/app.config.js",
    "app/app.states.js",
    "app/styles/app.css",
    "app/components/home/home.controller.js",
    "app/components/home/views/home.html",
    "app/components/layout/views/header.html",
    "app/components/layout/views/sidebar.html",
    "app/components/base/base.services.js",
    "app/components/base/base.controller.js",
    "app/components/base/base.edit.controller.js",
    "app/components/base/views/base.list.html",
    "app/components/base/views/base.edit.html",
];

/// Base code compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedBaseCode;

impl EmbeddedBaseCode {
    pub fn new() -> Self {
        Self
    }

    /// Paths of the bundled files, in load order.
    pub fn paths() -> impl Iterator<Item = &'static str> {
        FILES.iter().map(|(path, _)| *path)
    }
}

impl BaseCodeSource for EmbeddedBaseCode {
    fn load(&self) -> CrudgenResult<BaseCode> {
        let mut base = BaseCode::new();
        for (path, content) in FILES {
            base.insert(*path, *content);
        }
        debug!(files = base.len(), "bundled base code loaded");
        Ok(base)
    }

    fn describe(&self) -> String {
        "bundled AngularJS base code".into()
    }
}
