//! Preset and template bundles embedded in the binary.

pub mod preset_assets;
pub mod template_assets;
