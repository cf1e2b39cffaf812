//! `node.def` rendering and writing.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// File name of every definition file.
pub const NODE_DEF: &str = "node.def";

/// Contents of one `node.def`. Absent fields produce no line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NodeDef<'a> {
    pub help: Option<&'a str>,
    pub run: Option<&'a str>,
    pub allowed: Option<&'a str>,
}

impl NodeDef<'_> {
    /// Render as `field: value` lines in help, run, allowed order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (field, value) in [("help", self.help), ("run", self.run), ("allowed", self.allowed)] {
            if let Some(value) = value {
                out.push_str(&format!("{field}: {value}\n"));
            }
        }
        out
    }

    /// Write `dir/node.def`, replacing any previous contents.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(NODE_DEF);
        std::fs::write(&path, self.render()).map_err(|err| Error::Write {
            path: path.clone(),
            source: err,
        })?;
        Ok(path)
    }
}
