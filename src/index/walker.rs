// Wed Jan 14 2026 - Alex

use super::category::{Category, CategoryIndex};
use super::error::IndexError;
use super::identifier::ClassIdentifier;
use crate::config::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Builds the class index from a decompiled source tree.
///
/// Every immediate subdirectory of the source root is one category (one
/// managed assembly). Files directly in the root are ignored.
pub struct ClassIndexer {
    source_extension: String,
    reserved_marker: String,
}

impl ClassIndexer {
    pub fn new() -> Self {
        Self {
            source_extension: "cs".to_string(),
            reserved_marker: "AssemblyInfo".to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            source_extension: config.source_extension.clone(),
            reserved_marker: config.reserved_marker.clone(),
        }
    }

    pub fn with_source_extension(mut self, ext: &str) -> Self {
        self.source_extension = ext.trim_start_matches('.').to_string();
        self
    }

    pub fn with_reserved_marker(mut self, marker: &str) -> Self {
        self.reserved_marker = marker.to_string();
        self
    }

    pub fn is_recognized(&self, file_name: &str) -> bool {
        if !self.reserved_marker.is_empty() && file_name.contains(&self.reserved_marker) {
            return false;
        }
        file_name.ends_with(&format!(".{}", self.source_extension))
    }

    pub fn index_source_root(&self, root: &Path) -> Result<CategoryIndex, IndexError> {
        if !root.is_dir() {
            return Err(IndexError::MissingInputDirectory(root.to_path_buf()));
        }

        let entries = fs::read_dir(root)?.map(|entry| entry.map(|e| e.path()));
        let mut dirs: Vec<PathBuf> = readable_entries(root, entries)
            .into_iter()
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();

        let mut index = CategoryIndex::new();
        for dir in dirs {
            let name = match dir.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => continue,
            };

            let category = self.index_category(&name, &dir)?;
            if category.is_empty() {
                log::debug!("Skipping category {} (no classes)", name);
                continue;
            }
            index.push(category);
        }

        log::info!(
            "Indexed {} categories, {} classes total",
            index.len(),
            index.total_identifiers()
        );
        Ok(index)
    }

    pub fn index_category(&self, name: &str, dir: &Path) -> Result<Category, IndexError> {
        log::info!("Indexing assembly classes {}", name);

        let mut category = Category::new(name);

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(IndexError::Walk { path: dir.to_path_buf(), source: e });
                }
                Err(e) => {
                    log::warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if !self.is_recognized(&file_name) {
                continue;
            }

            let relative = match entry.path().strip_prefix(dir) {
                Ok(relative) => relative,
                Err(_) => continue,
            };

            if let Some(identifier) = ClassIdentifier::from_relative_path(relative) {
                log::debug!("CSharp file indexed: {}", relative.display());
                category.add_identifier(identifier);
            }
        }

        log::info!("Successfully indexed assembly classes. Class count: {}", category.class_count());
        Ok(category)
    }
}

/// Unreadable entries are skipped with a warning instead of aborting the walk.
fn readable_entries<I>(root: &Path, entries: I) -> Vec<PathBuf>
where
    I: Iterator<Item = io::Result<PathBuf>>,
{
    entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        .collect()
}

impl Default for ClassIndexer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "class X {}").unwrap();
    }

    #[test]
    fn test_recognized_files() {
        let indexer = ClassIndexer::new();
        assert!(indexer.is_recognized("Player.cs"));
        assert!(!indexer.is_recognized("AssemblyInfo.cs"));
        assert!(!indexer.is_recognized("Player.cs.meta"));
        assert!(!indexer.is_recognized("Player.CS"));
    }

    #[test]
    fn test_index_source_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("Assembly-CSharp/Player.cs"));
        touch(&root.join("Assembly-CSharp/Game/Net/Client.cs"));
        touch(&root.join("Assembly-CSharp/Properties/AssemblyInfo.cs"));
        touch(&root.join("Assembly-CSharp/readme.txt"));
        touch(&root.join("Empty/notes.md"));
        touch(&root.join("loose.cs"));

        let index = ClassIndexer::new().index_source_root(root).unwrap();

        assert_eq!(index.len(), 1);
        let id = index.find("Assembly-CSharp").unwrap();
        let category = index.get(id).unwrap();
        let names: Vec<&str> = category.identifiers.iter().map(|i| i.as_str()).collect();
        assert_eq!(names, vec!["Game_Net_Client", "Player"]);
        assert!(index.find("Empty").is_none());
    }

    #[test]
    fn test_unreadable_entries_skipped() {
        let root = Path::new("dump");
        let entries = vec![
            Ok(root.join("Assembly-CSharp")),
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
            Ok(root.join("mscorlib")),
        ];

        let kept = readable_entries(root, entries.into_iter());
        assert_eq!(kept, vec![root.join("Assembly-CSharp"), root.join("mscorlib")]);
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let result = ClassIndexer::new().index_source_root(&dir.path().join("dump"));
        assert!(matches!(result, Err(IndexError::MissingInputDirectory(_))));
    }
}
