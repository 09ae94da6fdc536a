use std::io::{self, Write};

use crate::app_config::CitationConfig;

// @module: Bibliographic citation for the studied work

/// MLA citation of the work being studied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    title: String,
    mla: String,
}

impl Citation {
    pub fn new(title: impl Into<String>, mla: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            mla: mla.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mla(&self) -> &str {
        &self.mla
    }

    // @prints: Citation block, MLA string verbatim
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n--- MLA Citation ---")?;
        writeln!(out, "📝 For '{}':", self.title)?;
        writeln!(out, "{}", self.mla)
    }
}

impl From<&CitationConfig> for Citation {
    fn from(config: &CitationConfig) -> Self {
        Self::new(config.title.clone(), config.mla.clone())
    }
}

impl Default for Citation {
    fn default() -> Self {
        Self::from(&CitationConfig::default())
    }
}
