use std::collections::{BTreeMap, HashSet};

use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::{AppError, Preset, PresetFile};

static PRESETS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/presets");

const INDEX_FILE: &str = "index.yml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetIndex {
    presets: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetManifest {
    language: String,
    files: Vec<String>,
    #[serde(default)]
    meta: BTreeMap<String, String>,
}

/// Load every bundled preset in registration order.
///
/// Layout: `index.yml` lists preset ids; each `<id>/preset.yml` declares the
/// language, file order and metadata, and `<id>/files/` holds the contents.
pub fn load_embedded_presets() -> Result<Vec<Preset>, AppError> {
    let index: PresetIndex = read_yaml(INDEX_FILE)?;

    let mut seen = HashSet::new();
    let mut presets = Vec::with_capacity(index.presets.len());
    for id in index.presets {
        if !seen.insert(id.clone()) {
            return Err(AppError::Asset(format!("Duplicate preset entry '{id}' in {INDEX_FILE}")));
        }
        presets.push(load_preset(&id)?);
    }

    Ok(presets)
}

fn load_preset(id: &str) -> Result<Preset, AppError> {
    let manifest: PresetManifest = read_yaml(&format!("{id}/preset.yml"))?;

    if manifest.language.trim().is_empty() {
        return Err(AppError::Asset(format!("Preset '{id}' has an empty language")));
    }
    if manifest.files.is_empty() {
        return Err(AppError::Asset(format!("Preset '{id}' declares no files")));
    }

    let files = manifest
        .files
        .into_iter()
        .map(|name| {
            let content = read_text(&format!("{id}/files/{name}"))?;
            Ok(PresetFile { name, content })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(Preset { id: id.to_string(), language: manifest.language, files, meta: manifest.meta })
}

fn read_text(path: &str) -> Result<String, AppError> {
    let file = PRESETS_DIR
        .get_file(path)
        .ok_or_else(|| AppError::Asset(format!("Missing preset asset: {path}")))?;

    file.contents_utf8()
        .map(str::to_string)
        .ok_or_else(|| AppError::Asset(format!("Preset asset is not valid UTF-8: {path}")))
}

fn read_yaml<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T, AppError> {
    let content = read_text(path)?;
    serde_yaml::from_str(&content)
        .map_err(|err| AppError::Asset(format!("Failed to parse {path}: {err}")))
}
