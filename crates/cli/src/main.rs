use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use sitegauge_core::{
    AnalysisConfig, JsonConfig, LighthouseCli, Report, TextConfig, analyze_html, analyze_url,
    analyze_url_with_auditor, report_to_json, report_to_text,
};

mod echo;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Analyze a web page for SEO, conversion, performance and mobile-friendliness
#[derive(Parser, Debug)]
#[command(name = "sitegauge")]
#[command(author = "Sitegauge Contributors")]
#[command(version = VERSION)]
#[command(about = "Analyze a web page and score it across four categories", long_about = None)]
struct Args {
    /// URL to analyze, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Weight of the SEO category in the overall score
    #[arg(long, default_value = "1.0", value_name = "W")]
    seo_weight: f64,

    /// Weight of the conversion category in the overall score
    #[arg(long, default_value = "1.0", value_name = "W")]
    conversion_weight: f64,

    /// Weight of the performance category in the overall score
    #[arg(long, default_value = "1.0", value_name = "W")]
    performance_weight: f64,

    /// Weight of the mobile category in the overall score
    #[arg(long, default_value = "1.0", value_name = "W")]
    mobile_weight: f64,

    /// Run an installed Lighthouse binary as a supplementary audit (URLs only)
    #[arg(long)]
    lighthouse: bool,

    /// Hide info-level findings from text output
    #[arg(long)]
    no_info: bool,

    /// Hide recommendations from text output
    #[arg(long)]
    no_recommendations: bool,

    /// Enable step-by-step progress output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn analysis_config(&self) -> AnalysisConfig {
        let mut builder = AnalysisConfig::builder()
            .timeout(self.timeout)
            .seo_weight(self.seo_weight)
            .conversion_weight(self.conversion_weight)
            .performance_weight(self.performance_weight)
            .mobile_weight(self.mobile_weight);

        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        builder.build()
    }
}

/// True when the input should be fetched rather than read from disk.
///
/// Anything with an explicit scheme is a URL; so is anything that neither
/// exists on disk nor is the stdin marker, since the fetcher defaults the
/// scheme to https.
fn is_url_input(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://") || (input != "-" && !Path::new(input).exists())
}

async fn build_report(args: &Args, config: &AnalysisConfig) -> anyhow::Result<Report> {
    if args.input == "-" {
        if args.verbose {
            echo::print_step(1, 2, "Reading from stdin");
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;

        if args.verbose {
            echo::print_step(2, 2, "Analyzing document");
        }
        return analyze_html(&buffer, None, config).context("Failed to analyze document");
    }

    if is_url_input(&args.input) {
        if args.verbose {
            echo::print_step(1, 2, &format!("Fetching {}", args.input.bright_white().underline()));
        }

        let report = if args.lighthouse {
            let auditor = LighthouseCli::default();
            analyze_url_with_auditor(&args.input, config, &auditor).await
        } else {
            analyze_url(&args.input, config).await
        }
        .context("Failed to analyze URL")?;

        if args.verbose {
            echo::print_step(2, 2, "Analyzing document");
            if args.lighthouse && report.external.is_none() {
                echo::print_info("Lighthouse not available; skipping supplementary audit");
            }
        }
        return Ok(report);
    }

    if args.verbose {
        echo::print_step(1, 2, &format!("Reading from file {}", args.input.bright_white()));
    }
    let html = fs::read_to_string(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?;

    if args.verbose {
        echo::print_step(2, 2, "Analyzing document");
    }
    analyze_html(&html, None, config).context("Failed to analyze document")
}

fn print_summary(report: &Report) {
    eprintln!();
    for result in &report.categories {
        echo::print_score(result.category.label(), result.score);
    }
    echo::print_score("Overall", report.overall_score);
    eprintln!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        echo::print_banner();
    }

    let config = args.analysis_config();
    let report = build_report(&args, &config).await?;

    if args.verbose {
        print_summary(&report);
    }

    let output = match args.format {
        OutputFormat::Text => {
            let config = TextConfig { show_info: !args.no_info, show_recommendations: !args.no_recommendations };
            report_to_text(&report, &config).context("Failed to render report")?
        }
        OutputFormat::Json => {
            report_to_json(&report, &JsonConfig { pretty: true }).context("Failed to serialize report")?
        }
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Report written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("yaml").is_err());
    }

    #[test]
    fn test_url_input_detection() {
        assert!(is_url_input("https://example.com"));
        assert!(is_url_input("http://example.com"));
        assert!(is_url_input("example.com"));
        assert!(!is_url_input("-"));
    }
}
