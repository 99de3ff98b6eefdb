// Tue Jan 13 2026 - Alex

use anyhow::Context;
use clap::{ArgAction, Parser};
use sdk_splitter::{
    config::Config,
    extract::ScanMode,
    orchestrator::Pipeline,
    ui::{Banner, Console, Prompter},
    utils::LoggingUtils,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sdk-splitter")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Split an il2cpp struct header into one header per assembly", long_about = None)]
struct Args {
    /// Monolithic struct header, e.g. il2cpp.h
    structs_file: Option<PathBuf>,

    /// Decompiled source tree with one directory per assembly
    source_root: Option<PathBuf>,

    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// compat (one nesting level) or balanced (any depth)
    #[arg(long)]
    scanner: Option<ScanMode>,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    stats_json: Option<PathBuf>,

    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[arg(long)]
    keep_output: bool,

    #[arg(long)]
    no_color: bool,

    #[arg(long)]
    no_banner: bool,

    #[arg(long)]
    no_progress: bool,
}

fn main() {
    let args = Args::parse();

    let use_color = !args.no_color && atty::is(atty::Stream::Stdout);
    let level = if args.verbose > 0 {
        LoggingUtils::level_from_verbosity(args.verbose)
    } else {
        LoggingUtils::level_from_str(&args.log_level)
    };
    LoggingUtils::init_logger(level, use_color);

    let console = Console::new(use_color);

    if !args.no_banner {
        Banner::new("sdk-splitter")
            .with_subtitle("il2cpp header splitter")
            .with_version(env!("CARGO_PKG_VERSION"))
            .with_color(use_color)
            .print();
    }

    if let Err(e) = run(args, &console) {
        console.error(&format!("An error occurred: {:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args, console: &Console) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::new(),
    };

    if let Some(path) = args.structs_file {
        config.structs_file = Some(path);
    }
    if let Some(path) = args.source_root {
        config.source_root = Some(path);
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    if let Some(mode) = args.scanner {
        config.scan_mode = mode;
    }
    if args.keep_output {
        config.clean_output = false;
    }
    if args.no_progress {
        config.show_progress = false;
    }

    prompt_missing(&mut config)?;

    let pipeline = Pipeline::new(config)?;

    console.header("Splitting struct header");
    let summary = pipeline.run()?;
    console.summary(&summary);

    if let Some(path) = &args.stats_json {
        match summary.stats.save_json(path) {
            Ok(()) => console.info(&format!("Stats saved to: {}", path.display())),
            Err(e) => console.error(&e.to_string()),
        }
    }

    Ok(())
}

fn prompt_missing(config: &mut Config) -> anyhow::Result<()> {
    if config.structs_file.is_some() && config.source_root.is_some() {
        return Ok(());
    }

    let mut prompter = Prompter::stdio();

    if config.structs_file.is_none() {
        config.structs_file = Some(
            prompter.prompt_path("Enter the name of the structs file (il2cpp.h): ")?,
        );
    }
    if config.source_root.is_none() {
        config.source_root = Some(
            prompter.prompt_path("Enter the name of the directory containing the .cs files (e.g, dump): ")?,
        );
    }

    Ok(())
}
