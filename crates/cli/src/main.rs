//! crumbtrail CLI
//!
//! Renders a breadcrumb trail from a path or JSON array in any of the
//! registered output formats.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crumbtrail_core::{
    available_locales, builtin_locales, BreadcrumbConfig, BreadcrumbController, Casing,
    RenderOptions,
};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Render navigational breadcrumb trails
#[derive(Parser)]
#[command(name = "crumbtrail")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render breadcrumb trails as HTML, Bootstrap, Foundation, text, JSON, YAML or ANSI")]
#[command(long_about = r#"
crumbtrail: Navigational Breadcrumb Trails

Builds a trail from a "/"-separated path or a JSON array of segment names,
translates each segment through a locale dictionary and renders the result
with one of the registered builders.

Output formats:
  - html        - Anchors joined by a separator (default)
  - bootstrap2  - Bootstrap 2 breadcrumb list
  - bootstrap3  - Bootstrap 3 breadcrumb list
  - foundation4 - Foundation 4 breadcrumbs list
  - path        - Plain text path
  - json / yaml - Structured crumbs
  - ansi        - Colorful terminal output

Examples:
  crumbtrail /users/42/edit                      # HTML with the English dictionary
  crumbtrail '["home","blog"]' -f bootstrap3     # JSON array input
  crumbtrail /blog/post -l hu -f path            # Hungarian, plain text
  crumbtrail --map Home=/ --map Docs=/docs       # Literal title/link pairs
  crumbtrail /a/b --base https://x.org --link-last
"#)]
pub struct Args {
    /// Trail as a "/"-separated path or a JSON array
    pub trail: Option<String>,

    /// Output format (default: from config, else html)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Base reference for base segments and links
    #[arg(short, long)]
    pub base: Option<String>,

    /// Locale of the translation dictionary
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Configuration file (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory of <locale>.yaml|yml|json dictionaries
    #[arg(long)]
    pub dictionary_dir: Option<PathBuf>,

    /// Text casing
    #[arg(long, value_enum)]
    pub casing: Option<CasingArg>,

    /// Separator between segments
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Render the last segment as a link too
    #[arg(long)]
    pub link_last: bool,

    /// Link every segment relative to the base only
    #[arg(long)]
    pub different_links: bool,

    /// Extra markup attribute KEY=VALUE (can be specified multiple times)
    #[arg(long = "attr", value_parser = parse_pair, action = clap::ArgAction::Append)]
    pub attrs: Vec<(String, String)>,

    /// Literal TITLE=LINK segment, replaces the trail (can be specified multiple times)
    #[arg(long = "map", value_parser = parse_pair, action = clap::ArgAction::Append)]
    pub map: Vec<(String, String)>,

    /// Disable the segment at this position (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append)]
    pub disable: Vec<usize>,

    /// List the available output formats and exit
    #[arg(long)]
    pub list_formats: bool,

    /// List the available dictionary locales and exit
    #[arg(long)]
    pub list_locales: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Casing argument
#[derive(ValueEnum, Clone, Debug)]
pub enum CasingArg {
    Lower,
    Upper,
    Title,
    Sentence,
}

impl From<CasingArg> for Casing {
    fn from(arg: CasingArg) -> Self {
        match arg {
            CasingArg::Lower => Casing::Lower,
            CasingArg::Upper => Casing::Upper,
            CasingArg::Title => Casing::Title,
            CasingArg::Sentence => Casing::Sentence,
        }
    }
}

fn parse_pair(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(key, val)| (key.to_string(), val.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", value))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = build_config(&args)?;

    if args.list_locales {
        return run_list_locales(&config);
    }

    let mut crumbs =
        BreadcrumbController::new(config).context("Failed to create breadcrumb controller")?;

    if args.list_formats {
        for format in crumbs.formats() {
            println!("{}", format);
        }
        return Ok(());
    }

    load_trail(&mut crumbs, &args)?;

    // colors only make sense on a terminal
    if args.output.is_some() || !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let output = crumbs
        .build(args.format.as_deref(), &render_options(&args))
        .context("Failed to build breadcrumb trail")?;

    write_output(&output, args.output.as_ref())
}

/// Install the stderr log subscriber; RUST_LOG overrides the verbosity flag
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

/// Build configuration: file, then environment, then flags
fn build_config(args: &Args) -> Result<BreadcrumbConfig> {
    let mut config = match &args.config {
        Some(path) => BreadcrumbConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BreadcrumbConfig::default(),
    };
    config.merge_with_env();

    if let Some(locale) = &args.locale {
        config.language = locale.clone();
    }
    if let Some(dir) = &args.dictionary_dir {
        config.dictionary_dir = Some(dir.clone());
    }

    tracing::debug!(?config, "effective configuration");
    Ok(config)
}

fn run_list_locales(config: &BreadcrumbConfig) -> Result<()> {
    let locales: Vec<String> = match &config.dictionary_dir {
        Some(dir) => available_locales(dir)
            .with_context(|| format!("Failed to read dictionary directory {}", dir.display()))?,
        None => builtin_locales().into_iter().map(str::to_string).collect(),
    };

    for locale in locales {
        println!("{}", locale);
    }
    Ok(())
}

fn load_trail(crumbs: &mut BreadcrumbController, args: &Args) -> Result<()> {
    crumbs.set_base_reference(args.base.as_deref());

    if !args.map.is_empty() {
        crumbs.map(args.map.iter().cloned());
    } else if let Some(trail) = &args.trail {
        crumbs
            .from(trail.as_str())
            .with_context(|| format!("Failed to load trail {:?}", trail))?;
    }

    for pos in &args.disable {
        crumbs
            .disable(*pos)
            .with_context(|| format!("Failed to disable segment {}", pos))?;
    }

    Ok(())
}

fn render_options(args: &Args) -> RenderOptions {
    let mut options = RenderOptions::default()
        .with_last_is_not_link(!args.link_last)
        .with_different_links(args.different_links);

    if let Some(casing) = &args.casing {
        options = options.with_casing(casing.clone().into());
    }
    if let Some(separator) = &args.separator {
        options = options.with_separator(separator.clone());
    }
    for (key, value) in &args.attrs {
        options = options.with_customization(key.clone(), value.clone());
    }

    options
}

fn write_output(output: &str, path: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, output)
            .with_context(|| format!("Failed to write output file {}", path.display()))?;
    } else {
        println!("{}", output);
    }
    Ok(())
}
