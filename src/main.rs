use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use page_wordfreq::config::Settings;
use page_wordfreq::pipeline::Analyzer;
use page_wordfreq::report::{self, Report};
use page_wordfreq::{fetch, html};

#[derive(Parser)]
#[command(name = "page_wordfreq", about = "Word frequency analysis for web pages")]
struct Cli {
    /// Config file (default: ./wordfreq.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a page and analyze its body text
    Url {
        url: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Analyze a local file ("-" reads stdin)
    File {
        path: PathBuf,
        /// Treat the input as HTML and extract the body text first
        #[arg(long)]
        html: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
    /// Number of ranked entries (default from config: 20)
    #[arg(short = 'n', long)]
    top: Option<usize>,
    /// Collapse whitespace instead of deleting it before tokenizing
    #[arg(long)]
    preserve_word_boundaries: bool,
    /// Write the space-joined word-cloud input to this file
    #[arg(long)]
    cloud: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
    Chart,
}

impl OutputArgs {
    fn apply(&self, settings: &mut Settings) -> Result<()> {
        if let Some(n) = self.top {
            settings.top_n = n;
        }
        if self.preserve_word_boundaries {
            settings.preserve_word_boundaries = true;
        }
        settings.validate()?;
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Analysis failed: {:#}", e);
        std::process::exit(1);
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Url { url, output } => {
            output.apply(&mut settings)?;
            let url = fetch::parse_url(&url)?;

            let spinner = spinner("Analyzing, please wait...")?;
            let page = fetch::fetch_page(&url, &settings).await;
            spinner.finish_and_clear();

            let body = html::extract_body_text(&page?);
            analyze_and_print(url.as_str(), &body, &settings, &output)
        }
        Commands::File {
            path,
            html: is_html,
            output,
        } => {
            output.apply(&mut settings)?;
            let raw = read_input(&path)?;
            let text = if is_html {
                html::extract_body_text(&raw)
            } else {
                raw
            };
            analyze_and_print(&path.display().to_string(), &text, &settings, &output)
        }
    }
}

fn analyze_and_print(
    source: &str,
    text: &str,
    settings: &Settings,
    output: &OutputArgs,
) -> Result<()> {
    let analyzer = Analyzer::new(&settings.analyzer_options());
    let analysis = analyzer.analyze(text);
    info!(
        "Analyzed {}: {} tokens, {} distinct ({})",
        source,
        analysis.tokens.len(),
        analysis.distinct_tokens,
        analysis.language.as_str()
    );

    if let Some(path) = &output.cloud {
        std::fs::write(path, report::word_cloud_input(&analysis.tokens))
            .with_context(|| format!("Failed to write word-cloud input to {}", path.display()))?;
        info!("Wrote word-cloud input to {}", path.display());
    }

    let report = Report::new(source, &analysis);
    match output.format {
        Format::Table => print!("{}", report::render_table(&report)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Chart => println!(
            "{}",
            serde_json::to_string_pretty(&report::bar_chart_options(&report.chart))?
        ),
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    let bytes = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn spinner(message: &'static str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
