use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use scriptgen_core::{
    Audience, ChatClient, Creativity, ExportFormat, Mood, Provider, ScriptGenerator,
    ScriptRequest, ScriptSettings, Tone, VideoDuration, View, format_script_readable,
    load_script, save_export,
};

use crate::config::Config;

mod config;

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Gemini,
    Openai,
    Grok,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Gemini => Provider::Gemini,
            CliProvider::Openai => Provider::Openai,
            CliProvider::Grok => Provider::Grok,
        }
    }
}

#[derive(Clone, Default, ValueEnum)]
enum CliView {
    Overview,
    Script,
    Metadata,
    #[default]
    All,
}

impl From<CliView> for View {
    fn from(cli: CliView) -> Self {
        match cli {
            CliView::Overview => View::Overview,
            CliView::Script => View::FullScript,
            CliView::Metadata => View::Metadata,
            CliView::All => View::All,
        }
    }
}

#[derive(Clone, Default, ValueEnum)]
enum CliExportFormat {
    #[default]
    Text,
    Json,
}

impl From<CliExportFormat> for ExportFormat {
    fn from(cli: CliExportFormat) -> Self {
        match cli {
            CliExportFormat::Text => ExportFormat::Text,
            CliExportFormat::Json => ExportFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "scriptgen")]
#[command(about = "Generate engaging YouTube video scripts powered by AI")]
struct Cli {
    /// Video topic, e.g. "How to learn Python programming"
    topic: Option<String>,

    /// Expected video length: short, medium, long
    #[arg(short, long, default_value = "short")]
    duration: VideoDuration,

    /// Overall mood: professional, casual, humorous, educational, inspirational, energetic
    #[arg(short, long, default_value = "professional")]
    mood: Mood,

    /// How the content is presented: formal, conversational, storytelling, news-report, tutorial
    #[arg(short, long, default_value = "formal")]
    tone: Tone,

    /// Target audience: beginners, intermediate, experts, general-public, kids, professionals
    #[arg(short, long, default_value = "beginners")]
    audience: Audience,

    /// Creativity level from 0.0 (consistent) to 1.0 (creative)
    #[arg(short, long, default_value = "0.7")]
    creativity: Creativity,

    /// AI provider for script generation
    #[arg(short, long, default_value = "gemini")]
    provider: CliProvider,

    /// Which part of the script to print
    #[arg(short, long, default_value = "all")]
    view: CliView,

    /// Write the script to a file after printing it
    #[arg(short, long)]
    export: bool,

    /// Directory for exported files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Export file format
    #[arg(long, default_value = "text")]
    format: CliExportFormat,

    /// Render a previously exported JSON script instead of generating one
    #[arg(long, value_name = "FILE")]
    from: Option<PathBuf>,
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), secs % 60.0)
    }
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(spinner_style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    config::load_dotenv();
    init_tracing();

    let cli = Cli::parse();

    println!(
        "\n{}  {}\n",
        style("scriptgen").cyan().bold(),
        style("YouTube Script Generator").dim()
    );

    let (script, export_topic) = if let Some(path) = &cli.from {
        let script = load_script(path).await?;
        println!(
            "{} Loaded: {}",
            style("✓").green().bold(),
            style(path.display()).dim()
        );
        let topic = cli
            .topic
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| script.title.clone());
        (script, topic)
    } else {
        let provider: Provider = cli.provider.clone().into();

        // Missing credentials block everything, so check before the topic
        let config = match Config::from_env(provider) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{} {}", style("Error:").red().bold(), e);
                std::process::exit(1);
            }
        };

        let settings = ScriptSettings {
            duration: cli.duration,
            mood: cli.mood,
            tone: cli.tone,
            audience: cli.audience,
            creativity: cli.creativity,
        };
        let topic = cli.topic.as_deref().unwrap_or_default();
        let Ok(request) = ScriptRequest::new(topic, settings) else {
            eprintln!(
                "{} {}",
                style("⚠").yellow().bold(),
                style("Please enter a topic first!").yellow()
            );
            std::process::exit(2);
        };

        let client = ChatClient::new(&config.api_url, &config.model, &config.api_key)?;
        let generator = ScriptGenerator::new(client);

        let step_start = Instant::now();
        let spinner = create_spinner(&format!(
            "Generating your script with {} ({})...",
            config.provider.name(),
            generator.backend().model()
        ));
        let script = match generator.generate_request(&request).await {
            Ok(script) => script,
            Err(e) => {
                spinner.finish_and_clear();
                tracing::debug!(error = ?e, "generation failed");
                eprintln!(
                    "{} Error generating script: {}",
                    style("✗").red().bold(),
                    e
                );
                std::process::exit(1);
            }
        };
        spinner.finish_with_message(format!(
            "{} Script generated successfully ({}) {}",
            style("✓").green().bold(),
            config.provider.name(),
            style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
        ));

        (script, request.topic().to_string())
    };

    println!("{}", style("─".repeat(60)).dim());

    // Human-readable output
    let readable = format_script_readable(&script, cli.view.clone().into());
    println!("{}", readable);

    if cli.export {
        let path = save_export(&script, &export_topic, cli.format.clone().into(), &cli.output_dir)
            .await?;
        println!("{}", style("─".repeat(60)).dim());
        println!(
            "\n{} {}\n",
            style("Saved:").dim(),
            style(path.display()).cyan()
        );
    }

    Ok(())
}
