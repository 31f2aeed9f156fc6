use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use resume_screener::config::parse_threshold;
use resume_screener::runner::run;
use resume_screener::{report, Config, Error, ReportFormat, ScreeningLog};

#[derive(Parser, Debug)]
#[command(name = "resume-screener")]
#[command(version = "0.1.0")]
#[command(about = "Screen a resume against a job description's required skills")]
struct Args {
    /// Resume text file (overrides RESUME_FILE)
    #[arg(short, long)]
    resume: Option<PathBuf>,

    /// Job description text file (overrides JD_FILE)
    #[arg(short, long)]
    jd: Option<PathBuf>,

    /// Screening log file (overrides LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Minimum match percentage to pass, inclusive (overrides PASS_THRESHOLD)
    #[arg(short, long, allow_hyphen_values = true)]
    threshold: Option<String>,

    /// Drop required skills shorter than this (overrides MIN_SKILL_LENGTH)
    #[arg(long)]
    min_skill_length: Option<usize>,

    /// Output format (text, markdown, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not append to the screening log
    #[arg(long)]
    no_log: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("resume_screener=info".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = load_config(&args)?;
    let format = ReportFormat::from_name(&args.format);
    let screening_log = (!args.no_log).then(|| ScreeningLog::new(&config.log_path));

    if format == ReportFormat::Text {
        println!("{}", report::header());
        println!("Loading files...\n");
    }

    let run_report = match run(&config, format, screening_log.as_ref()) {
        Ok(run_report) => run_report,
        Err(e) if e.is_input_failure() => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) if e.is_declaration_failure() => {
            if matches!(e, Error::MissingSkillDeclaration) {
                eprintln!("Error: Please add 'REQUIRED_SKILLS:' tag in job description file");
                eprintln!("Format: REQUIRED_SKILLS: python, java, sql, communication");
            }
            eprintln!("Error: No valid keywords found in job description");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(ref path) = args.output {
        let written = std::fs::write(path, &run_report.rendered)
            .with_context(|| format!("writing {}", path.display()));
        if let Err(e) = written {
            eprintln!("Error: {:#}", e);
            return Ok(ExitCode::FAILURE);
        }
        tracing::info!("Report written to: {}", path.display());
    } else {
        println!("{}", run_report.rendered);
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = Config::from_env()?;

    if let Some(ref path) = args.resume {
        config.resume_path = path.clone();
    }
    if let Some(ref path) = args.jd {
        config.jd_path = path.clone();
    }
    if let Some(ref path) = args.log_file {
        config.log_path = path.clone();
    }
    if let Some(ref raw) = args.threshold {
        config.pass_threshold = parse_threshold(raw)?;
    }
    if args.min_skill_length.is_some() {
        config.min_skill_length = args.min_skill_length;
    }

    Ok(config)
}
