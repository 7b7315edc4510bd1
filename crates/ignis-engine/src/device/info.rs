use std::fmt;

use crate::render::{GlApi, InfoString};

/// Driver identification reported right after context creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlInfo {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
    pub shading_language: String,
}

impl GlInfo {
    pub fn query<G: GlApi>(gl: &G) -> Self {
        Self {
            vendor: gl.info_string(InfoString::Vendor),
            renderer: gl.info_string(InfoString::Renderer),
            version: gl.info_string(InfoString::Version),
            shading_language: gl.info_string(InfoString::ShadingLanguageVersion),
        }
    }
}

/// One `Label: value` line per string.
impl fmt::Display for GlInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vendor: {}", self.vendor)?;
        writeln!(f, "Renderer: {}", self.renderer)?;
        writeln!(f, "Version: {}", self.version)?;
        write!(f, "Shading Language: {}", self.shading_language)
    }
}
