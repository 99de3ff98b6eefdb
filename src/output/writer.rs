// Tue Jan 13 2026 - Alex

use super::error::OutputError;
use crate::categorize::{CategoryBuffer, DistributionContext};
use crate::config::Config;
use crate::index::CategoryIndex;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub category: String,
    pub path: PathBuf,
    pub struct_count: usize,
}

impl WrittenArtifact {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<WrittenArtifact>,
    pub failures: Vec<OutputError>,
}

impl WriteReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Writes one header per category that received at least one struct.
pub struct CategoryWriter {
    output_dir: PathBuf,
    extension: String,
    reserved: Option<String>,
}

impl CategoryWriter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            extension: "h".to_string(),
            reserved: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.output_dir)
            .with_extension(&config.header_extension)
            .with_reserved_name(&config.aggregator_name)
    }

    /// A file name no category may write to, such as the include list.
    pub fn with_reserved_name(mut self, name: &str) -> Self {
        self.reserved = Some(name.to_string());
        self
    }

    pub fn with_extension(mut self, ext: &str) -> Self {
        self.extension = ext.trim_start_matches('.').to_string();
        self
    }

    pub fn artifact_path(&self, category: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", category, self.extension))
    }

    fn is_reserved(&self, path: &Path) -> bool {
        match (&self.reserved, path.file_name()) {
            (Some(reserved), Some(name)) => name.to_string_lossy() == reserved.as_str(),
            _ => false,
        }
    }

    pub fn render(category: &str, buffer: &CategoryBuffer) -> String {
        let mut out = format!("// Structures for category: {}\n", category);
        out.push_str(&buffer.bodies().join("\n"));
        out.push_str("\n\n");
        out
    }

    /// A failure on one category is recorded and the rest are still written.
    pub fn write_all(&self, index: &CategoryIndex, ctx: &DistributionContext) -> WriteReport {
        let mut report = WriteReport::default();

        for (id, category) in index.iter() {
            let buffer = match ctx.buffer(id) {
                Some(buffer) if !buffer.is_empty() => buffer,
                _ => continue,
            };

            let path = self.artifact_path(&category.name);
            if self.is_reserved(&path) {
                let err = OutputError::ReservedName {
                    category: category.name.clone(),
                    path,
                };
                log::error!("{}", err);
                report.failures.push(err);
                continue;
            }

            match fs::write(&path, Self::render(&category.name, buffer)) {
                Ok(()) => {
                    log::info!("Output file: \"{}\"", path.display());
                    report.written.push(WrittenArtifact {
                        category: category.name.clone(),
                        path,
                        struct_count: buffer.len(),
                    });
                }
                Err(source) => {
                    let err = OutputError::CategoryWrite {
                        category: category.name.clone(),
                        path,
                        source,
                    };
                    log::error!("{}", err);
                    report.failures.push(err);
                }
            }
        }

        report
    }
}
