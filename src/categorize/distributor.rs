// Thu Jan 15 2026 - Alex

use super::suffix::{SuffixMap, SuffixVariant};
use crate::extract::{ExclusionFilter, StructRecord};
use crate::index::{CategoryId, CategoryIndex};
use std::collections::HashSet;

/// Bodies collected for one category, in document order.
#[derive(Debug, Clone, Default)]
pub struct CategoryBuffer {
    bodies: Vec<String>,
}

impl CategoryBuffer {
    pub fn push(&mut self, body: &str) {
        self.bodies.push(body.to_string());
    }

    pub fn bodies(&self) -> &[String] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Mutable state of one categorization pass.
///
/// Owned by the caller and lent to the [`Distributor`]; the writer and the
/// stats reporter only read it afterwards.
#[derive(Debug, Clone)]
pub struct DistributionContext {
    buffers: Vec<CategoryBuffer>,
    emitted_objects: HashSet<(CategoryId, String)>,
    pub total_records: usize,
    pub extracted: usize,
    pub excluded: usize,
    pub unmatched: usize,
}

impl DistributionContext {
    pub fn new(index: &CategoryIndex) -> Self {
        Self {
            buffers: vec![CategoryBuffer::default(); index.len()],
            emitted_objects: HashSet::new(),
            total_records: 0,
            extracted: 0,
            excluded: 0,
            unmatched: 0,
        }
    }

    pub fn buffer(&self, id: CategoryId) -> Option<&CategoryBuffer> {
        self.buffers.get(id.index())
    }

    /// Distinct (category, instance layout) pairs that were emitted.
    pub fn emitted_object_count(&self) -> usize {
        self.emitted_objects.len()
    }

    pub fn non_empty_categories(&self) -> usize {
        self.buffers.iter().filter(|b| !b.is_empty()).count()
    }

    fn append(&mut self, id: CategoryId, record: &StructRecord<'_>, variant: SuffixVariant) {
        let Some(buffer) = self.buffers.get_mut(id.index()) else {
            log::warn!("No buffer for category {} while assigning {}", id, record.name);
            return;
        };
        buffer.push(record.body);
        self.extracted += 1;

        if variant == SuffixVariant::Object {
            self.emitted_objects.insert((id, record.name.to_string()));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Excluded,
    Unmatched,
    Assigned(usize),
}

pub struct Distributor<'m> {
    suffix_map: &'m SuffixMap,
    filter: ExclusionFilter,
}

impl<'m> Distributor<'m> {
    pub fn new(suffix_map: &'m SuffixMap) -> Self {
        Self {
            suffix_map,
            filter: ExclusionFilter::new(),
        }
    }

    pub fn with_filter(mut self, filter: ExclusionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Assigns one record to every category that claims its name.
    ///
    /// Each (record, category) pair counts once toward `extracted`, so a
    /// struct shared by two categories counts twice.
    pub fn assign(&self, record: &StructRecord<'_>, ctx: &mut DistributionContext) -> Assignment {
        ctx.total_records += 1;

        if self.filter.is_excluded(record.name) {
            ctx.excluded += 1;
            return Assignment::Excluded;
        }

        let Some(entry) = self.suffix_map.lookup(record.name) else {
            ctx.unmatched += 1;
            return Assignment::Unmatched;
        };

        for &id in &entry.categories {
            ctx.append(id, record, entry.variant);
        }
        log::trace!("{} -> {} categories", record.name, entry.categories.len());

        Assignment::Assigned(entry.categories.len())
    }

    pub fn distribute(&self, records: &[StructRecord<'_>], ctx: &mut DistributionContext) {
        for record in records {
            self.assign(record, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{extract_structs, ScanMode};
    use crate::index::Category;

    fn run(text: &str, index: &CategoryIndex) -> DistributionContext {
        let map = SuffixMap::build(index);
        let mut ctx = DistributionContext::new(index);
        let records = extract_structs(text, ScanMode::Compat);
        Distributor::new(&map).distribute(&records, &mut ctx);
        ctx
    }

    #[test]
    fn test_single_match() {
        let index = CategoryIndex::new().with_category(Category::new("Bar").with_identifier("Foo"));
        let ctx = run("struct Foo_o { int a; };", &index);

        let buffer = ctx.buffer(index.find("Bar").unwrap()).unwrap();
        assert_eq!(buffer.bodies(), &["struct Foo_o { int a; };".to_string()]);
        assert_eq!(ctx.extracted, 1);
        assert_eq!(ctx.total_records, 1);
        assert_eq!(ctx.emitted_object_count(), 1);
    }

    #[test]
    fn test_shared_identifier_counts_per_category() {
        let index = CategoryIndex::new()
            .with_category(Category::new("A").with_identifier("Shared"))
            .with_category(Category::new("B").with_identifier("Shared"));
        let ctx = run("struct Shared_o { int a; };\nstruct Shared_c { int b; };", &index);

        for name in ["A", "B"] {
            let buffer = ctx.buffer(index.find(name).unwrap()).unwrap();
            assert_eq!(buffer.len(), 2);
            assert_eq!(buffer.bodies()[0], "struct Shared_o { int a; };");
        }
        assert_eq!(ctx.extracted, 4);
        assert_eq!(ctx.emitted_object_count(), 2);
    }

    #[test]
    fn test_excluded_records_never_assigned() {
        let index = CategoryIndex::new().with_category(
            Category::new("Game")
                .with_identifier("Player___c__DisplayClass3_0")
                .with_identifier("Player__Run_d__7"),
        );
        let ctx = run(
            "struct Player___c__DisplayClass3_0_o { int a; };\nstruct Player__Run_d__7_o { int b; };",
            &index,
        );

        assert_eq!(ctx.total_records, 2);
        assert_eq!(ctx.excluded, 2);
        assert_eq!(ctx.extracted, 0);
        assert_eq!(ctx.non_empty_categories(), 0);
    }

    #[test]
    fn test_unmatched_records_are_skipped() {
        let index = CategoryIndex::new().with_category(Category::new("Game").with_identifier("Player"));
        let map = SuffixMap::build(&index);
        let mut ctx = DistributionContext::new(&index);
        let distributor = Distributor::new(&map);

        let records = extract_structs("struct Il2CppObject { void *klass; };\nstruct Player_Fields { int hp; };", ScanMode::Compat);
        assert_eq!(distributor.assign(&records[0], &mut ctx), Assignment::Unmatched);
        assert_eq!(distributor.assign(&records[1], &mut ctx), Assignment::Assigned(1));

        assert_eq!(ctx.unmatched, 1);
        assert_eq!(ctx.extracted, 1);
        assert_eq!(ctx.emitted_object_count(), 0);
    }
}
