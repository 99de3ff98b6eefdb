// Wed Jan 14 2026 - Alex

use std::fmt;
use std::path::{Component, Path};

pub const JOIN_CHAR: char = '_';
const JOIN_STR: &str = "_";

/// Flat name of one managed class, derived from its source file's path
/// relative to the category root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassIdentifier(String);

impl ClassIdentifier {
    /// `Foo/Bar.Baz.cs` becomes `Foo_Bar_Baz`.
    ///
    /// Returns `None` for paths without a file name.
    pub fn from_relative_path(relative: &Path) -> Option<Self> {
        let stem = relative.file_stem()?.to_string_lossy();

        let mut parts: Vec<String> = Vec::new();
        if let Some(parent) = relative.parent() {
            for component in parent.components() {
                if let Component::Normal(part) = component {
                    parts.push(part.to_string_lossy().into_owned());
                }
            }
        }
        parts.push(stem.into_owned());

        let joined = parts.join(JOIN_STR);
        Some(Self::normalize(&joined))
    }

    /// Replaces separators that survive path splitting, such as backslashes in
    /// paths recorded on Windows and dots of nested type names.
    pub fn normalize(raw: &str) -> Self {
        let flat: String = raw
            .chars()
            .map(|c| match c {
                '/' | '\\' | '.' => JOIN_CHAR,
                other => other,
            })
            .collect();
        Self(flat)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_flat_file() {
        let id = ClassIdentifier::from_relative_path(Path::new("Player.cs")).unwrap();
        assert_eq!(id.as_str(), "Player");
    }

    #[test]
    fn test_nested_path_and_dotted_name() {
        let path: PathBuf = ["UnityEngine", "UI", "Button.ButtonClickedEvent.cs"].iter().collect();
        let id = ClassIdentifier::from_relative_path(&path).unwrap();
        assert_eq!(id.as_str(), "UnityEngine_UI_Button_ButtonClickedEvent");
    }

    #[test]
    fn test_backslash_separators() {
        let id = ClassIdentifier::normalize("Game\\Net\\Client");
        assert_eq!(id.to_string(), "Game_Net_Client");
    }

    #[test]
    fn test_only_last_extension_stripped() {
        let id = ClassIdentifier::from_relative_path(Path::new("List`1.Enumerator.cs")).unwrap();
        assert_eq!(id.as_str(), "List`1_Enumerator");
    }
}
