//! Textual `#include <path>` expansion.
//!
//! Runs **before** XML parsing, so a directive may sit anywhere in the raw
//! text, inside or outside of elements. Each directive is replaced by the
//! verbatim contents of the referenced file.
//!
//! Expansion is a single pass over the original text: included content is
//! never rescanned, so a directive inside an included file stays as-is.

use crate::error::{Error, Result};
use log::trace;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Matches `#include <target>`; the target is everything up to `>`.
static RE_INCLUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#include\s+<([^>]+)>").unwrap());

/// Replace every include directive in `source` with the file it names.
///
/// Relative targets resolve against the process working directory.
pub fn expand_includes(source: &str) -> Result<String> {
    let mut output = String::with_capacity(source.len());
    let mut last = 0;

    for caps in RE_INCLUDE.captures_iter(source) {
        let directive = caps.get(0).unwrap();
        let target = Path::new(&caps[1]);
        let content = std::fs::read_to_string(target).map_err(|err| Error::FileAccess {
            path: target.to_path_buf(),
            source: err,
        })?;
        trace!("include {} ({} bytes)", target.display(), content.len());

        output.push_str(&source[last..directive.start()]);
        output.push_str(&content);
        last = directive.end();
    }

    output.push_str(&source[last..]);
    Ok(output)
}
