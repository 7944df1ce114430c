use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use eeat_audit::{
    render_report, ApiToken, AuditOptions, Auditor, DandelionAnnotator, ExternalLinkPolicy,
    NerModel, DEFAULT_AUDIT_URL, REPORT_FILE_NAME,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LinkPolicyArg {
    /// Links not containing the full request URL
    Substring,
    /// Links whose host differs from the audited host
    Host,
}

impl From<LinkPolicyArg> for ExternalLinkPolicy {
    fn from(arg: LinkPolicyArg) -> Self {
        match arg {
            LinkPolicyArg::Substring => ExternalLinkPolicy::RequestUrlSubstring,
            LinkPolicyArg::Host => ExternalLinkPolicy::DifferentHost,
        }
    }
}

/// Analyze Experience, Expertise, Authoritativeness and Trustworthiness signals of a web page
#[derive(Debug, Parser)]
#[command(name = "eeat-audit", version, about)]
struct Cli {
    /// URL to audit
    #[arg(default_value = DEFAULT_AUDIT_URL)]
    url: String,

    /// Where to write the PDF report
    #[arg(short, long, default_value = REPORT_FILE_NAME)]
    output: PathBuf,

    /// Print the report as JSON instead of the score summary
    #[arg(long)]
    json: bool,

    /// How outbound links are told apart from same-site links
    #[arg(long, value_enum, default_value = "substring")]
    link_policy: LinkPolicyArg,

    /// Skip remote entity annotation even when a token is configured
    #[arg(long)]
    no_remote: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_auditor(cli: &Cli) -> anyhow::Result<Auditor> {
    let options = AuditOptions::builder()
        .link_policy(cli.link_policy.into())
        .build();
    let auditor = Auditor::new(options)?;

    if cli.no_remote {
        info!("remote entity annotation disabled by flag");
        return Ok(auditor);
    }

    match ApiToken::dandelion_from_env() {
        Some(token) => Ok(auditor.with_annotator(DandelionAnnotator::new(token)?)),
        None => {
            warn!("DANDELION_TOKEN not set, remote entity annotation disabled");
            Ok(auditor)
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let auditor = build_auditor(cli)?;
    let report = auditor.run(&cli.url).await?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render_report(&report));
    }

    report.write_pdf(&cli.output)?;
    if !cli.json {
        println!();
        println!("PDF report: {}", cli.output.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = run(&cli).await;
    NerModel::unload();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
