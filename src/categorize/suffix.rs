// Thu Jan 15 2026 - Alex

use crate::index::{CategoryId, CategoryIndex};
use std::collections::HashMap;
use std::fmt;

/// Native structs emitted for every managed class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixVariant {
    /// Instance layout (`Foo_o`).
    Object,
    /// Class metadata (`Foo_c`).
    Class,
    /// Instance fields (`Foo_Fields`).
    Fields,
    /// Virtual dispatch table (`Foo_VTable`).
    VTable,
}

impl SuffixVariant {
    pub const ALL: [SuffixVariant; 4] = [
        SuffixVariant::Object,
        SuffixVariant::Class,
        SuffixVariant::Fields,
        SuffixVariant::VTable,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            SuffixVariant::Object => "_o",
            SuffixVariant::Class => "_c",
            SuffixVariant::Fields => "_Fields",
            SuffixVariant::VTable => "_VTable",
        }
    }

    pub fn composite_key(self, identifier: &str) -> String {
        format!("{}{}", identifier, self.suffix())
    }
}

impl fmt::Display for SuffixVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixEntry {
    pub variant: SuffixVariant,
    pub categories: Vec<CategoryId>,
}

/// Composite key (identifier + suffix) to every category that indexed the
/// identifier.
#[derive(Debug, Clone, Default)]
pub struct SuffixMap {
    entries: HashMap<String, SuffixEntry>,
}

impl SuffixMap {
    pub fn build(index: &CategoryIndex) -> Self {
        let mut entries: HashMap<String, SuffixEntry> =
            HashMap::with_capacity(index.total_identifiers() * SuffixVariant::ALL.len());

        for (id, category) in index.iter() {
            for identifier in &category.identifiers {
                for variant in SuffixVariant::ALL {
                    let entry = entries
                        .entry(variant.composite_key(identifier.as_str()))
                        .or_insert_with(|| SuffixEntry {
                            variant,
                            categories: Vec::new(),
                        });
                    if !entry.categories.contains(&id) {
                        entry.categories.push(id);
                    }
                }
            }
        }

        log::debug!("Suffix map built with {} keys", entries.len());
        Self { entries }
    }

    pub fn lookup(&self, name: &str) -> Option<&SuffixEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Category;

    #[test]
    fn test_every_variant_registered() {
        let index = CategoryIndex::new()
            .with_category(Category::new("Bar").with_identifier("Foo"));
        let map = SuffixMap::build(&index);

        assert_eq!(map.len(), 4);
        for (key, variant) in [
            ("Foo_o", SuffixVariant::Object),
            ("Foo_c", SuffixVariant::Class),
            ("Foo_Fields", SuffixVariant::Fields),
            ("Foo_VTable", SuffixVariant::VTable),
        ] {
            let entry = map.lookup(key).unwrap();
            assert_eq!(entry.variant, variant);
            assert_eq!(entry.categories.len(), 1);
        }
        assert!(map.lookup("Foo").is_none());
    }

    #[test]
    fn test_shared_identifier_resolves_to_both_categories() {
        let index = CategoryIndex::new()
            .with_category(Category::new("A").with_identifier("Shared"))
            .with_category(Category::new("B").with_identifier("Shared").with_identifier("Other"));
        let map = SuffixMap::build(&index);

        let entry = map.lookup("Shared_o").unwrap();
        assert_eq!(entry.categories, vec![index.find("A").unwrap(), index.find("B").unwrap()]);
        assert_eq!(map.lookup("Other_VTable").unwrap().categories.len(), 1);
        assert_eq!(map.len(), 8);
    }
}
