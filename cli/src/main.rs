//! `studybrief` binary.
//!
//! ```text
//! studybrief serve [--addr 127.0.0.1:5001] [--annotations annotation.json] [--static-dir client]
//! studybrief analyze "Some passage"        # or pipe the passage on stdin
//! studybrief analyze --json < notes.txt
//! ```

mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use studybrief::{AnalysisRequest, AnalysisResult, AnalyzeError, Analyzer, ProviderSettings};
use tokio::io::AsyncReadExt;

#[derive(Parser, Debug)]
#[command(
    name = "studybrief",
    version,
    about = "Studybrief: a summary, study tips and quick facts for any passage of text"
)]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (POST /analyze, GET/POST /annotations)
    Serve(ServeArgs),
    /// Analyze one passage and print the three sections
    Analyze(AnalyzeArgs),
}

#[derive(clap::Args, Debug)]
struct ServeArgs {
    /// Listen address (default: STUDYBRIEF_ADDR, else 127.0.0.1:5001)
    #[arg(long)]
    addr: Option<String>,

    /// Annotation file (default: STUDYBRIEF_ANNOTATIONS, else annotation.json)
    #[arg(long)]
    annotations: Option<PathBuf>,

    /// Directory of UI files to serve (default: STUDYBRIEF_STATIC_DIR, else none)
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct AnalyzeArgs {
    /// Passage to analyze; read from stdin when omitted
    text: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::load_and_apply("studybrief", None::<&std::path::Path>).ok();
    logging::init()?;

    let args = Args::parse();

    let settings = match ProviderSettings::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("studybrief: {}", e);
            process::exit(1);
        }
    };
    let analyzer = Analyzer::from_settings(&settings);

    match args.cmd {
        Command::Serve(sa) => {
            let mut serve_config = serve::ServeConfig::from_env();
            if let Some(addr) = sa.addr {
                serve_config.addr = addr;
            }
            if let Some(path) = sa.annotations {
                serve_config.annotations_path = path;
            }
            if let Some(dir) = sa.static_dir {
                serve_config.static_dir = Some(dir);
            }
            if let Err(e) = serve::run_serve(&serve_config, analyzer).await {
                eprintln!("serve error: {}", e);
                process::exit(1);
            }
        }
        Command::Analyze(aa) => {
            let text = match aa.text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    tokio::io::stdin().read_to_string(&mut buf).await?;
                    buf
                }
            };
            match analyzer.analyze(&AnalysisRequest::new(text)).await {
                Ok(result) if aa.json => println!("{}", serde_json::to_string_pretty(&result)?),
                Ok(result) => print_sections(&result),
                Err(e) => process::exit(report(&e)),
            }
        }
    }
    Ok(())
}

fn print_sections(result: &AnalysisResult) {
    println!("Summary:\n{}\n", result.summary);
    println!("Study Tips:\n{}\n", result.study_tips);
    println!("Quick Facts:\n{}", result.quick_facts);
}

/// Prints the failure and returns the exit code: 2 for bad input, 1 otherwise.
fn report(e: &AnalyzeError) -> i32 {
    match e.as_validation() {
        Some(v) => {
            eprintln!("studybrief: {}", v);
            2
        }
        None => {
            tracing::error!(error = %e, "analyze failed");
            eprintln!("studybrief: Could not analyze the text. Please try again. ({})", e);
            1
        }
    }
}
