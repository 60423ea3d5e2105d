//! Veracity CLI — reference caller of the verification pipeline.
//!
//! `verify` runs one request end to end and prints the JSON response.
//! `eval` replays a JSONL dataset and reports how many hallucinated claims
//! would reach a user with and without the safety gate.

use std::fs;
use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::info;

use veracity_audit::tracing_setup::init_tracing;
use veracity_audit::JsonlAuditSink;
use veracity_claims::MarkerExtractor;
use veracity_core::config::PolicyStore;
use veracity_core::models::{Decision, TruthLabel, VerificationRequest};
use veracity_pipeline::VerificationPipeline;
use veracity_retrieval::{load_documents, CorpusIndex, RetrievalEngine};
use veracity_semantic::FallbackChain;
use veracity_verify::TruthClassifier;

/// Claim verification and safety gating for generated text.
#[derive(Parser, Debug)]
#[command(name = "veracity", version, about, long_about = None)]
struct Cli {
    /// Evidence corpus file, one document per line
    #[arg(long, default_value = "data/documents.txt")]
    corpus: PathBuf,

    /// Directory of policy profile TOML files
    #[arg(long)]
    policies: Option<PathBuf>,

    /// Append-only audit log path
    #[arg(long, default_value = "logs/veracity_audit.jsonl")]
    audit_log: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify one piece of generated text
    Verify {
        /// The generated text (reads --input when omitted)
        text: Option<String>,

        /// Read the generated text from a file
        #[arg(long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Request id (a fresh UUID when omitted)
        #[arg(long)]
        request_id: Option<String>,

        /// Policy profile name
        #[arg(long, default_value = "default")]
        profile: String,

        /// Domain tag recorded in the audit trail
        #[arg(long, default_value = "default")]
        domain: String,
    },

    /// Replay a JSONL dataset and report pass-through hallucination rates
    Eval {
        /// Dataset file: one {"id", "generation"} object per line
        #[arg(long)]
        dataset: PathBuf,
    },
}

/// One evaluation example.
#[derive(Debug, Deserialize)]
struct EvalExample {
    #[serde(default)]
    id: Option<String>,
    generation: String,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let pipeline = build_pipeline(&cli)?;

    match &cli.command {
        Commands::Verify {
            text,
            input,
            request_id,
            profile,
            domain,
        } => run_verify(
            &pipeline,
            text.as_deref(),
            input.as_deref(),
            request_id.as_deref(),
            profile,
            domain,
        ),
        Commands::Eval { dataset } => run_eval(&pipeline, dataset),
    }
}

/// Construct the pipeline context once, before any request is served.
fn build_pipeline(cli: &Cli) -> Result<VerificationPipeline> {
    let documents = load_documents(&cli.corpus)
        .with_context(|| format!("corpus bootstrap failed: {}", cli.corpus.display()))?;
    let index = CorpusIndex::build(documents).context("corpus index construction failed")?;

    let policies = match &cli.policies {
        Some(dir) => PolicyStore::load(dir).context("policy store load failed")?,
        None => PolicyStore::with_defaults_only(),
    };

    let classifier = TruthClassifier::new(FallbackChain::with_default_providers());

    Ok(VerificationPipeline::new(
        Box::new(MarkerExtractor::new()),
        Box::new(RetrievalEngine::new(index)),
        classifier,
        policies,
        Box::new(JsonlAuditSink::new(&cli.audit_log)),
    ))
}

fn run_verify(
    pipeline: &VerificationPipeline,
    text: Option<&str>,
    input: Option<&std::path::Path>,
    request_id: Option<&str>,
    profile: &str,
    domain: &str,
) -> Result<()> {
    let generated_text = match (text, input) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input {}", path.display()))?,
        (None, None) => bail!("provide the text argument or --input <file>"),
    };

    let request_id = request_id
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let request = VerificationRequest::new(request_id, generated_text)
        .with_profile(profile)
        .with_domain(domain);

    let response = pipeline.verify(&request);
    println!("{}", serde_json::to_string_pretty(&response)?);

    // An ERROR decision is the CLI analogue of a server-fault status.
    if response.decision.is_fault() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_eval(pipeline: &VerificationPipeline, dataset: &PathBuf) -> Result<()> {
    let file = fs::File::open(dataset)
        .with_context(|| format!("failed to open dataset {}", dataset.display()))?;

    let mut total_claims = 0usize;
    let mut hallucinated_claims = 0usize;
    let mut passed_hallucinations = 0usize;

    for (line_no, line) in std::io::BufReader::new(file).lines().enumerate() {
        let line = line.context("failed to read dataset line")?;
        if line.trim().is_empty() {
            continue;
        }
        let example: EvalExample = serde_json::from_str(&line)
            .with_context(|| format!("malformed dataset line {}", line_no + 1))?;

        let request_id = example
            .id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let response =
            pipeline.verify(&VerificationRequest::new(request_id, example.generation));

        total_claims += response.claims.len();
        let hallucinated = response
            .claims
            .iter()
            .filter(|c| c.label != TruthLabel::Verified)
            .count();
        hallucinated_claims += hallucinated;

        // Only hallucinations behind an ACCEPT actually reach a user.
        if response.decision == Decision::Accept {
            passed_hallucinations += hallucinated;
        }
    }

    let rate = |count: usize| count as f64 / total_claims.max(1) as f64;
    info!(total_claims, hallucinated_claims, passed_hallucinations, "evaluation finished");

    println!("total claims:               {total_claims}");
    println!(
        "hallucinated (ungated):     {hallucinated_claims} ({:.3})",
        rate(hallucinated_claims)
    );
    println!(
        "reaching user (gated):      {passed_hallucinations} ({:.3})",
        rate(passed_hallucinations)
    );
    Ok(())
}
