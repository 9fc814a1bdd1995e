use std::collections::BTreeMap;

use crate::adapters::{PresetRegistry, TemplateRegistry};
use crate::domain::{META_ASK_DATABASE, ORCHESTRATION_FILE, Preset, PresetFile, TemplateCategory};

pub const STATIC_COMPOSE: &str = "version: \"3.7\"\nservices:\n  app:\n    image: static\n";

/// Small template set with a database named by the "My SQL" display name.
pub fn sample_templates() -> TemplateRegistry {
    TemplateRegistry::from_entries([
        (TemplateCategory::App, "php74", "image: kooldev/php:7.4\nports:\n  - \"80:80\"\n"),
        (
            TemplateCategory::Database,
            "mysql",
            "image: mysql:8.0\nenvironment:\n  MYSQL_DATABASE: app\n",
        ),
        (TemplateCategory::Database, "broken", "image: [unterminated\n"),
        (TemplateCategory::Cache, "redis6", "image: redis:6-alpine\n"),
    ])
    .expect("sample templates are unique")
}

fn preset(id: &str, language: &str, ask_database: Option<&str>) -> Preset {
    let mut meta = BTreeMap::new();
    if let Some(options) = ask_database {
        meta.insert(META_ASK_DATABASE.to_string(), options.to_string());
    }
    Preset {
        id: id.to_string(),
        language: language.to_string(),
        files: vec![
            PresetFile { name: "kool.yml".into(), content: format!("# {id} scripts\n") },
            PresetFile { name: ORCHESTRATION_FILE.into(), content: STATIC_COMPOSE.into() },
        ],
        meta,
    }
}

/// Presets: `laravel` (PHP, asks database), `php` (PHP), `nextjs` (JavaScript).
pub fn sample_presets() -> PresetRegistry {
    PresetRegistry::from_presets(vec![
        preset("laravel", "PHP", Some("My SQL,Broken")),
        preset("nextjs", "JavaScript", None),
        preset("php", "PHP", None),
    ])
    .expect("sample presets are unique")
}
