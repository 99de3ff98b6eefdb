// Wed Jan 14 2026 - Alex

use super::identifier::ClassIdentifier;
use indexmap::IndexSet;
use std::fmt;

/// Handle to a category inside a [`CategoryIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(usize);

impl CategoryId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub identifiers: IndexSet<ClassIdentifier>,
}

impl Category {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            identifiers: IndexSet::new(),
        }
    }

    pub fn with_identifier(mut self, identifier: &str) -> Self {
        self.add_identifier(ClassIdentifier::normalize(identifier));
        self
    }

    /// Returns false when the identifier was already present.
    pub fn add_identifier(&mut self, identifier: ClassIdentifier) -> bool {
        self.identifiers.insert(identifier)
    }

    pub fn class_count(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    categories: Vec<Category>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: Category) -> CategoryId {
        let id = CategoryId(self.categories.len());
        self.categories.push(category);
        id
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.push(category);
        self
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(id.0)
    }

    pub fn find(&self, name: &str) -> Option<CategoryId> {
        self.categories
            .iter()
            .position(|c| c.name == name)
            .map(CategoryId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, &Category)> {
        self.categories
            .iter()
            .enumerate()
            .map(|(i, c)| (CategoryId(i), c))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn total_identifiers(&self) -> usize {
        self.categories.iter().map(Category::class_count).sum()
    }
}
