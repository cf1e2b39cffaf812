//! Template tree generation.
//!
//! Walks the [`Node`] tree depth-first and mirrors every named node as a
//! directory under the template store:
//!
//! | Node | Files written |
//! |------|---------------|
//! | tag node | `name/node.def` (help), `name/node.tag/node.def` (help, run, allowed) |
//! | leaf node, or any node with a command | `name/node.def` (help, run) |
//! | other named node | `name/node.def` (help) |
//! | excluded name | directory only |
//! | unnamed node | nothing; children are placed under the current parent |

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Node, NodeKind};
use crate::nodedef::NodeDef;
use log::debug;
use std::collections::BTreeSet;
use std::path::Path;

/// Directory standing in for a tag node's value.
pub const TAG_PLACEHOLDER: &str = "node.tag";

/// What a run produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub directories: usize,
    pub node_defs: usize,
}

pub struct Materializer<'a> {
    exclude: &'a BTreeSet<String>,
    stats: Stats,
}

impl<'a> Materializer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            exclude: &config.exclude,
            stats: Stats::default(),
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Generate templates for `node` and its descendants under `parent`.
    pub fn materialize(&mut self, node: &Node, parent: &Path) -> Result<()> {
        let Some(name) = node.name.as_deref() else {
            for child in &node.children {
                self.materialize(child, parent)?;
            }
            return Ok(());
        };

        let node_path = parent.join(name);
        self.create_dir(&node_path)?;

        if self.exclude.contains(name) {
            debug!("excluded {}", node_path.display());
        } else {
            let help = node.help.as_deref();
            let run = node.command.as_deref();

            let def = match node.kind {
                NodeKind::Tag => {
                    let tag_path = node_path.join(TAG_PLACEHOLDER);
                    self.create_dir(&tag_path)?;
                    let allowed = node.completion.allowed();
                    self.write_def(
                        &tag_path,
                        NodeDef {
                            help,
                            run,
                            allowed: Some(&allowed),
                        },
                    )?;
                    // Run and completion live on the placeholder only.
                    NodeDef { help, ..Default::default() }
                }
                // A generic node carrying a command is written like a leaf.
                NodeKind::Leaf | NodeKind::Generic => NodeDef { help, run, ..Default::default() },
            };
            self.write_def(&node_path, def)?;
        }

        for child in &node.children {
            self.materialize(child, &node_path)?;
        }
        Ok(())
    }

    fn create_dir(&mut self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|err| Error::Write {
            path: path.to_path_buf(),
            source: err,
        })?;
        debug!("dir {}", path.display());
        self.stats.directories += 1;
        Ok(())
    }

    fn write_def(&mut self, dir: &Path, def: NodeDef<'_>) -> Result<()> {
        let path = def.write_to(dir)?;
        debug!("wrote {}", path.display());
        self.stats.node_defs += 1;
        Ok(())
    }
}
