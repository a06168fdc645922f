//! Draw-call analyzer host
//!
//! Loads a UI scene description, runs a batching analysis on one canvas and
//! prints the draw-call summary (and optionally the overlay shapes).

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use drawcall_analyzer::foundation::logging;
use drawcall_analyzer::prelude::*;
use std::path::PathBuf;

const DEFAULT_FORMAT: &str = "text";

#[derive(Debug)]
struct AnalyzeOptions {
    scene_path: PathBuf,
    config_path: Option<PathBuf>,
    root_name: Option<String>,
    format: OutputFormat,
    show_overlay: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Ron,
}

impl AnalyzeOptions {
    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let scene_path = matches
            .get_one::<String>("scene")
            .map(PathBuf::from)
            .context("scene path is required")?;
        let format = match matches.get_one::<String>("format").map(String::as_str) {
            Some("ron") => OutputFormat::Ron,
            _ => OutputFormat::Text,
        };

        Ok(Self {
            scene_path,
            config_path: matches.get_one::<String>("config").map(PathBuf::from),
            root_name: matches.get_one::<String>("root").cloned(),
            format,
            show_overlay: matches.get_flag("overlay"),
        })
    }
}

fn command() -> Command {
    Command::new("drawcall-analyzer")
        .about("Reports how a UI canvas would be batched into draw calls")
        .arg(
            Arg::new("scene")
                .value_name("SCENE")
                .help("Scene description file (.ron or .toml)")
                .required(true),
        )
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_name("NAME")
                .help("Name of the canvas node to analyze (defaults to the first top-level node)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Analyzer settings file (.ron or .toml)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Summary output format")
                .value_parser(["text", "ron"])
                .default_value(DEFAULT_FORMAT),
        )
        .arg(
            Arg::new("overlay")
                .long("overlay")
                .help("Also print the overlay shapes for every batch member")
                .action(ArgAction::SetTrue),
        )
}

fn run(options: &AnalyzeOptions) -> Result<()> {
    let config = match &options.config_path {
        Some(path) => AnalyzerConfig::load_from_file(path)
            .with_context(|| format!("failed to load analyzer config {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };

    let scene = UiScene::load_from_file(&options.scene_path)
        .with_context(|| format!("failed to load scene {}", options.scene_path.display()))?;

    let root = match &options.root_name {
        Some(name) => scene.find_by_name(name),
        None => scene.roots().first().copied(),
    };
    if root.is_none() {
        log::warn!("No target canvas in {}", options.scene_path.display());
        println!("Canvas is Null!");
        return Ok(());
    }

    let mut analyzer = DrawCallAnalyzer::new();
    let report = analyzer.analyze(&scene, root);

    let summary = Summary::new(report, scene.materials(), scene.textures(), &config.summary);
    match options.format {
        OutputFormat::Text => print!("{summary}"),
        OutputFormat::Ron => println!("{}", summary.to_ron()?),
    }

    if options.show_overlay {
        for shape in build_overlay(report, &config.overlay) {
            println!("{shape:?}");
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    logging::init_with_default("warn");

    let matches = command().get_matches();
    let options = AnalyzeOptions::from_matches(&matches)?;
    log::debug!("Options: {options:?}");

    run(&options)
}
