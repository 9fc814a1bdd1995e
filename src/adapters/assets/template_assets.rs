use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::{AppError, TemplateCategory};

static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// A bundled template entry.
#[derive(Debug, Clone)]
pub struct TemplateAsset {
    pub category: TemplateCategory,
    /// File stem, e.g. `mysql80` for `database/mysql80.yml`.
    pub name: String,
    pub content: String,
}

/// Load every bundled template.
///
/// Templates live at `<category>/<name>.yml`; any other layout is an error.
pub fn load_embedded_templates() -> Result<Vec<TemplateAsset>, AppError> {
    let mut out = Vec::new();

    for entry in TEMPLATES_DIR.entries() {
        let DirEntry::Dir(category_dir) = entry else {
            return Err(AppError::Asset(format!(
                "Unexpected file at template root: {}",
                entry.path().display()
            )));
        };

        let dir_name = category_dir.path().to_string_lossy().to_string();
        let category = TemplateCategory::from_dir_name(&dir_name)
            .ok_or_else(|| AppError::Asset(format!("Unknown template category '{dir_name}'")))?;

        for file in category_dir.files() {
            let path = file.path().to_string_lossy().to_string();
            let name = path
                .strip_prefix(&format!("{dir_name}/"))
                .and_then(|rest| rest.strip_suffix(".yml"))
                .ok_or_else(|| {
                    AppError::Asset(format!("Template path must be <category>/<name>.yml: {path}"))
                })?;
            let content = file
                .contents_utf8()
                .ok_or_else(|| AppError::Asset(format!("Template is not valid UTF-8: {path}")))?;

            out.push(TemplateAsset { category, name: name.to_string(), content: content.to_string() });
        }
    }

    Ok(out)
}
