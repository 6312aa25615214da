use anyhow::{bail, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use analyzer::config::AnalyzerConfig;
use analyzer::progress::LogProgress;
use analyzer::Analyzer;

/// CLI driver standing in for the external task runner: analyzes one résumé
/// document and prints the JSON report to stdout.
fn main() -> Result<()> {
    let config = AnalyzerConfig::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume analyzer v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let Some(document_path) = args.next() else {
        bail!("usage: analyzer <resume.pdf|resume.docx> [job_profile_id]");
    };
    let job_profile_id = args.next();

    let analyzer = Analyzer::new(config)?;
    let report = analyzer.analyze(
        document_path.as_ref(),
        job_profile_id.as_deref(),
        &LogProgress,
    )?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
