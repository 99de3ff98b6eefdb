// Tue Jan 13 2026 - Alex

use super::error::OutputError;
use crate::categorize::DistributionContext;
use crate::index::CategoryIndex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageStats {
    pub total_structs: usize,
    pub extracted_structs: usize,
    pub excluded_structs: usize,
    pub struct_coverage: f64,
    pub total_classes: usize,
    pub extracted_classes: usize,
    pub class_coverage: f64,
}

impl CoverageStats {
    pub fn compute(ctx: &DistributionContext, index: &CategoryIndex) -> Self {
        let total_classes = index.total_identifiers();
        let extracted_classes = ctx.emitted_object_count();

        Self {
            total_structs: ctx.total_records,
            extracted_structs: ctx.extracted,
            excluded_structs: ctx.excluded,
            struct_coverage: percentage(ctx.extracted, ctx.total_records),
            total_classes,
            extracted_classes,
            class_coverage: percentage(extracted_classes, total_classes),
        }
    }

    pub fn struct_line(&self) -> String {
        format!(
            "Total struct count: {} (Extracted: {}) [{:.6}%]",
            self.total_structs, self.extracted_structs, self.struct_coverage
        )
    }

    pub fn class_line(&self) -> String {
        format!(
            "Total class count: {} (Extracted: {}) [{:.6}%]",
            self.total_classes, self.extracted_classes, self.class_coverage
        )
    }

    pub fn save_json(&self, path: &Path) -> Result<(), OutputError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| OutputError::Stats {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        fs::write(path, json).map_err(|e| OutputError::Stats {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl fmt::Display for CoverageStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.struct_line())?;
        write!(f, "{}", self.class_line())
    }
}

/// Zero when there is nothing to divide by.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorize::{Distributor, SuffixMap};
    use crate::extract::{extract_structs, ScanMode};
    use crate::index::Category;

    #[test]
    fn test_zero_denominators() {
        let index = CategoryIndex::new();
        let ctx = DistributionContext::new(&index);
        let stats = CoverageStats::compute(&ctx, &index);

        assert_eq!(stats.struct_coverage, 0.0);
        assert_eq!(stats.class_coverage, 0.0);
        assert_eq!(stats.struct_line(), "Total struct count: 0 (Extracted: 0) [0.000000%]");
    }

    #[test]
    fn test_denominator_includes_excluded_records() {
        let index = CategoryIndex::new()
            .with_category(Category::new("Game").with_identifier("Player").with_identifier("Enemy"));
        let map = SuffixMap::build(&index);
        let mut ctx = DistributionContext::new(&index);
        let text = "struct Player_o { int a; };\n\
                    struct Player_c { int b; };\n\
                    struct Player___c__DisplayClass1_0_o { int c; };\n\
                    struct Il2CppString { int d; };";
        let records = extract_structs(text, ScanMode::Compat);
        Distributor::new(&map).distribute(&records, &mut ctx);

        let stats = CoverageStats::compute(&ctx, &index);

        assert_eq!(stats.total_structs, 4);
        assert_eq!(stats.extracted_structs, 2);
        assert_eq!(stats.struct_coverage, 50.0);
        assert_eq!(stats.total_classes, 2);
        assert_eq!(stats.extracted_classes, 1);
        assert_eq!(stats.class_coverage, 50.0);
        assert_eq!(stats.class_line(), "Total class count: 2 (Extracted: 1) [50.000000%]");
    }
}
