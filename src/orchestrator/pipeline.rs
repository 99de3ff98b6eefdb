// Tue Jan 13 2026 - Alex

use super::error::PipelineError;
use crate::categorize::{DistributionContext, Distributor, SuffixMap};
use crate::config::{Config, ConfigError};
use crate::extract::{ExclusionFilter, StructScanner};
use crate::index::{CategoryIndex, ClassIndexer, IndexError};
use crate::output::{CategoryWriter, CoverageStats, IncludeAggregator, WriteReport};
use crate::utils::logging::ScopedTimer;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Indexing,
    Reading,
    Extracting,
    Categorizing,
    Writing,
    Reporting,
}

impl PipelineStage {
    pub fn label(self) -> &'static str {
        match self {
            PipelineStage::Indexing => "indexing",
            PipelineStage::Reading => "reading",
            PipelineStage::Extracting => "extracting",
            PipelineStage::Categorizing => "categorizing",
            PipelineStage::Writing => "writing",
            PipelineStage::Reporting => "reporting",
        }
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub categories: usize,
    pub suffix_keys: usize,
    pub write_report: WriteReport,
    pub aggregator: Option<PathBuf>,
    pub stats: CoverageStats,
    pub elapsed: Duration,
}

/// Runs one split: index, read, extract, categorize, write, report.
///
/// Strictly sequential. The output directory is reset before indexing when
/// `clean_output` is set.
pub struct Pipeline {
    config: Config,
    structs_file: PathBuf,
    source_root: PathBuf,
}

impl Pipeline {
    pub fn new(config: Config) -> Result<Self, PipelineError> {
        config.validate()?;

        let structs_file = config
            .structs_file
            .clone()
            .ok_or_else(|| ConfigError::Validation("structs_file must be set".to_string()))?;
        let source_root = config
            .source_root
            .clone()
            .ok_or_else(|| ConfigError::Validation("source_root must be set".to_string()))?;

        Ok(Self {
            config,
            structs_file,
            source_root,
        })
    }

    pub fn run(&self) -> Result<RunSummary, PipelineError> {
        let start = Instant::now();

        if !self.source_root.is_dir() {
            return Err(IndexError::MissingInputDirectory(self.source_root.clone()).into());
        }

        self.prepare_output_dir()?;

        let index = {
            let _timer = ScopedTimer::new(PipelineStage::Indexing.label());
            ClassIndexer::from_config(&self.config).index_source_root(&self.source_root)?
        };
        let suffix_map = SuffixMap::build(&index);

        let text = {
            let _timer = ScopedTimer::new(PipelineStage::Reading.label());
            read_structs_text(&self.structs_file)?
        };

        log::info!("Searching for matching structs in {}", self.structs_file.display());
        let records = {
            let _timer = ScopedTimer::new(PipelineStage::Extracting.label());
            StructScanner::new(self.config.scan_mode).scan(&text)
        };
        log::info!("Found {} struct definitions ({} scanner)", records.len(), self.config.scan_mode);

        let mut ctx = DistributionContext::new(&index);
        {
            let _timer = ScopedTimer::new(PipelineStage::Categorizing.label());
            let distributor = Distributor::new(&suffix_map)
                .with_filter(ExclusionFilter::from_config(&self.config));
            let progress = self.progress_bar(records.len() as u64);

            for record in &records {
                distributor.assign(record, &mut ctx);
                progress.inc(1);
            }
            progress.finish_and_clear();
        }

        let (write_report, aggregator) = {
            let _timer = ScopedTimer::new(PipelineStage::Writing.label());
            self.write_outputs(&index, &ctx)
        };

        let _timer = ScopedTimer::new(PipelineStage::Reporting.label());
        let stats = CoverageStats::compute(&ctx, &index);

        Ok(RunSummary {
            categories: index.len(),
            suffix_keys: suffix_map.len(),
            write_report,
            aggregator,
            stats,
            elapsed: start.elapsed(),
        })
    }

    fn write_outputs(&self, index: &CategoryIndex, ctx: &DistributionContext) -> (WriteReport, Option<PathBuf>) {
        let mut report = CategoryWriter::from_config(&self.config).write_all(index, ctx);

        let aggregator = IncludeAggregator::new(&self.config.aggregator_name);
        let path = match aggregator.write(&self.config.output_dir, &report.written) {
            Ok(path) => Some(path),
            Err(err) => {
                log::error!("{}", err);
                report.failures.push(err);
                None
            }
        };

        (report, path)
    }

    fn prepare_output_dir(&self) -> Result<(), PipelineError> {
        let dir = &self.config.output_dir;
        let wrap = |source: std::io::Error| PipelineError::OutputDirectory { path: dir.clone(), source };

        self.check_output_overlap()?;

        if self.config.clean_output && dir.exists() {
            log::debug!("Removing previous output in {}", dir.display());
            fs::remove_dir_all(dir).map_err(wrap)?;
        }
        fs::create_dir_all(dir).map_err(wrap)
    }

    /// The output directory is wiped on every run, so it must not be or
    /// contain the source root or the directory holding the structs file.
    fn check_output_overlap(&self) -> Result<(), PipelineError> {
        let output = match self.config.output_dir.canonicalize() {
            Ok(output) => output,
            // Nothing to remove yet.
            Err(_) => return Ok(()),
        };

        let mut inputs = Vec::new();
        if let Ok(root) = self.source_root.canonicalize() {
            inputs.push(root);
        }
        if let Some(dir) = structs_dir(&self.structs_file) {
            inputs.push(dir);
        }

        match inputs.into_iter().find(|input| input.starts_with(&output)) {
            Some(input) => Err(PipelineError::OutputOverlapsInput { output, input }),
            None => Ok(()),
        }
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message("Categorizing structs...");
        pb
    }
}

fn structs_dir(structs_file: &Path) -> Option<PathBuf> {
    if let Ok(file) = structs_file.canonicalize() {
        return file.parent().map(Path::to_path_buf);
    }

    let parent = match structs_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    parent.canonicalize().ok()
}

/// Invalid UTF-8 in the generated header is replaced rather than rejected.
pub fn read_structs_text(path: &Path) -> Result<String, PipelineError> {
    let bytes = fs::read(path).map_err(|source| PipelineError::StructsRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("{} is not valid UTF-8; replacing invalid sequences", path.display());
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}
