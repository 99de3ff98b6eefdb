// Wed Jan 14 2026 - Alex

use super::error::OutputError;
use super::writer::WrittenArtifact;
use std::fs;
use std::path::{Path, PathBuf};

/// Umbrella header that includes every generated category header.
pub struct IncludeAggregator {
    file_name: String,
}

impl IncludeAggregator {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
        }
    }

    pub fn render(&self, artifacts: &[WrittenArtifact]) -> String {
        let mut names: Vec<String> = artifacts
            .iter()
            .map(WrittenArtifact::file_name)
            .filter(|name| !name.is_empty() && *name != self.file_name)
            .collect();
        names.sort();
        names.dedup();

        names
            .iter()
            .map(|name| format!("#include \"{}\"\n", name))
            .collect()
    }

    pub fn write(&self, output_dir: &Path, artifacts: &[WrittenArtifact]) -> Result<PathBuf, OutputError> {
        let path = output_dir.join(&self.file_name);
        fs::write(&path, self.render(artifacts))
            .map_err(|source| OutputError::Aggregator { path: path.clone(), source })?;
        Ok(path)
    }
}

impl Default for IncludeAggregator {
    fn default() -> Self {
        Self::new("includes.h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(name: &str) -> WrittenArtifact {
        WrittenArtifact {
            category: name.trim_end_matches(".h").to_string(),
            path: PathBuf::from("SDK").join(name),
            struct_count: 1,
        }
    }

    #[test]
    fn test_sorted_and_never_self() {
        let aggregator = IncludeAggregator::default();
        let rendered = aggregator.render(&[artifact("mscorlib.h"), artifact("includes.h"), artifact("Assembly-CSharp.h")]);

        assert_eq!(rendered, "#include \"Assembly-CSharp.h\"\n#include \"mscorlib.h\"\n");
    }

    #[test]
    fn test_write_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = IncludeAggregator::default().write(dir.path(), &[]).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }
}
