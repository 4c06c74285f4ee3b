//! Input handling for file reading and stdin support.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;
use stepscope_core::FileSource;

/// Read SAS sources from files, or stdin when none are given.
pub fn read_sources(files: &[PathBuf]) -> Result<Vec<FileSource>> {
    if files.is_empty() {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read from stdin")?;
        return Ok(vec![FileSource {
            name: "<stdin>".to_string(),
            content,
        }]);
    }

    files
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read file: {}", path.display()))?;
            Ok(FileSource {
                name: path.display().to_string(),
                content,
            })
        })
        .collect()
}

/// Join sources into the single text blob the analyzer scans.
///
/// The output context resets at every DATA statement, so concatenating in
/// argument order behaves like SAS %INCLUDE-ing the files in sequence.
pub fn combine_sources(sources: &[FileSource]) -> String {
    sources
        .iter()
        .map(|s| s.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
