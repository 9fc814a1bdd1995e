//! Database-aware composition of the orchestration file.

use std::io;

use serde_yaml::Mapping;
use tracing::debug;

use crate::domain::orchestration::{self, ServiceFragments};
use crate::domain::{AppError, DatabaseKeyNormalizer, StripSpacesAndPeriods, TemplateCategory};
use crate::ports::TemplateStore;

/// Application runtime every composed file uses.
pub const APP_TEMPLATE: &str = "php74";
/// Cache engine every composed file uses.
pub const CACHE_TEMPLATE: &str = "redis6";

/// Builds `docker-compose.yml` content from service templates.
///
/// Never touches the filesystem.
pub struct OrchestrationComposer<'a, T: TemplateStore, N: DatabaseKeyNormalizer = StripSpacesAndPeriods>
{
    templates: &'a T,
    normalizer: N,
}

impl<'a, T: TemplateStore> OrchestrationComposer<'a, T> {
    pub fn new(templates: &'a T) -> Self {
        Self { templates, normalizer: StripSpacesAndPeriods }
    }
}

impl<'a, T: TemplateStore, N: DatabaseKeyNormalizer> OrchestrationComposer<'a, T, N> {
    /// Use a custom database key normalizer.
    pub fn with_normalizer<M: DatabaseKeyNormalizer>(
        self,
        normalizer: M,
    ) -> OrchestrationComposer<'a, T, M> {
        OrchestrationComposer { templates: self.templates, normalizer }
    }

    /// Template key a database display name resolves to.
    pub fn database_key(&self, database: &str) -> String {
        self.normalizer.normalize(database)
    }

    /// Compose the document for `file_name` with an optional database display name.
    ///
    /// An empty `database` omits the database service. Template failures are
    /// reported against `file_name`.
    pub fn compose(&self, file_name: &str, database: &str) -> Result<String, AppError> {
        let app = self.load(file_name, TemplateCategory::App, APP_TEMPLATE)?;

        let database = if database.is_empty() {
            None
        } else {
            let key = self.database_key(database);
            debug!(database, key = %key, "Resolved database template key");
            Some(self.load(file_name, TemplateCategory::Database, &key)?)
        };

        let cache = self.load(file_name, TemplateCategory::Cache, CACHE_TEMPLATE)?;

        let document = orchestration::assemble(ServiceFragments { app, database, cache });
        orchestration::render(&document).map_err(|details| AppError::FileWrite {
            file: file_name.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, details),
        })
    }

    fn load(
        &self,
        file_name: &str,
        category: TemplateCategory,
        name: &str,
    ) -> Result<Mapping, AppError> {
        let parse_error = |details: String| AppError::TemplateParse {
            file: file_name.to_string(),
            category,
            name: name.to_string(),
            details,
        };

        let raw = self
            .templates
            .template(category, name)
            .ok_or_else(|| {
                let available = self.templates.names(category).join(", ");
                parse_error(format!("template not found. Available: {available}"))
            })?;

        debug!(%category, name, "Loaded service template");
        orchestration::parse_fragment(raw).map_err(parse_error)
    }
}
