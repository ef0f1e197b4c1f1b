mod interactive;
mod output;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gradecast_client::{PredictorClient, Session};
use gradecast_core::{
    render_dataset_stats, render_gpa_bands, render_ranges, FormSchema, GradecastConfig,
    ViewState, DEFAULT_HOST,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gradecast")]
#[command(about = "Gradecast - Student Performance Predictor", long_about = None)]
struct Cli {
    /// Prediction server URL
    #[arg(long, env = "GRADECAST_HOST", default_value = DEFAULT_HOST, global = true)]
    host: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the valid range of every feature
    Ranges,

    /// List the prediction classes
    Classes,

    /// Show the server's sample feature values
    Sample,

    /// Show the GPA band behind each class
    Gpa,

    /// Show dataset statistics per feature
    Stats,

    /// Check values against the valid ranges without predicting
    Validate {
        /// Feature values as name=value
        fields: Vec<String>,

        /// Start from the server's sample values
        #[arg(long)]
        sample: bool,
    },

    /// Predict a performance category
    Predict {
        /// Feature values as name=value
        fields: Vec<String>,

        /// Start from the server's sample values
        #[arg(long)]
        sample: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    let mut config = GradecastConfig::default().with_host(cli.host.clone());
    config.server.timeout_secs = cli.timeout;
    info!(host = %config.server.host, "Using prediction server");
    let mut session = Session::new(
        PredictorClient::new(config.server.clone()),
        FormSchema::student_performance(),
    );

    match cli.command {
        Some(Commands::Ranges) => cmd_ranges(&session, cli.output)?,
        Some(Commands::Classes) => cmd_classes(&session, cli.output)?,
        Some(Commands::Sample) => cmd_sample(&session, cli.output)?,
        Some(Commands::Gpa) => cmd_gpa(&session, cli.output)?,
        Some(Commands::Stats) => cmd_stats(&session, cli.output)?,
        Some(Commands::Validate { fields, sample }) => {
            fill_form(&mut session, &fields, sample)?;
            cmd_validate(&mut session)?
        }
        Some(Commands::Predict { fields, sample }) => {
            fill_form(&mut session, &fields, sample)?;
            cmd_predict(&mut session, &config, cli.output)?
        }
        None => interactive::run(&mut session, &config)?,
    }

    Ok(())
}

/// `name=value` -> `(name, value)`
pub fn parse_assignment(raw: &str) -> Result<(String, String)> {
    let Some((name, value)) = raw.split_once('=') else {
        bail!("Expected name=value, got '{}'", raw);
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("Missing field name in '{}'", raw);
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn fill_form(session: &mut Session, fields: &[String], sample: bool) -> Result<()> {
    if sample {
        let written = session.fill_sample();
        if let ViewState::Error(e) = session.view() {
            warn!(error = %e, "Sample fill failed");
            bail!("{}", e);
        }
        info!(count = written.len(), "Form filled from sample");
    }

    for raw in fields {
        let (name, value) = parse_assignment(raw)?;
        if session.controller().form().schema().field(&name).is_none() {
            warn!(field = %name, "Rejected unknown field");
            bail!("Unknown field '{}'", name);
        }
        session.input(&name, value);
    }
    Ok(())
}

fn cmd_ranges(session: &Session, format: OutputFormat) -> Result<()> {
    let ranges = session.client().fetch_ranges()?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranges)?),
        OutputFormat::Table => {
            println!("Valid Ranges:");
            println!("{:-<50}", "");
            print!("{}", output::range_table(&render_ranges(&ranges)));
        }
    }
    Ok(())
}

fn cmd_classes(session: &Session, format: OutputFormat) -> Result<()> {
    let classes = session.client().fetch_classes()?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&classes)?),
        OutputFormat::Table => {
            println!("Prediction Classes:");
            for (i, c) in classes.classes.iter().enumerate() {
                println!("  {:<3} {}", i + 1, c);
            }
        }
    }
    Ok(())
}

fn cmd_sample(session: &Session, format: OutputFormat) -> Result<()> {
    let sample = session.client().fetch_sample()?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sample)?),
        OutputFormat::Table => {
            println!("Sample Values:");
            for (name, value) in sample.iter() {
                println!(
                    "  {}={}",
                    name,
                    gradecast_core::format::display_value(value)
                );
            }
        }
    }
    Ok(())
}

fn cmd_gpa(session: &Session, format: OutputFormat) -> Result<()> {
    let bands = session.gpa_bands()?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&bands)?),
        OutputFormat::Table => {
            println!("GPA Bands:");
            print!("{}", output::gpa_table(&render_gpa_bands(&bands)));
        }
    }
    Ok(())
}

fn cmd_stats(session: &Session, format: OutputFormat) -> Result<()> {
    let stats = session.dataset_stats()?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Table => print!("{}", output::stats_table(&render_dataset_stats(&stats))),
    }
    Ok(())
}

fn cmd_validate(session: &mut Session) -> Result<()> {
    let check = session.check_inputs();
    print!("{}", output::form_table(session.controller().form()));
    println!();
    println!("{}", check.message);
    if !check.all_valid {
        bail!("validation failed");
    }
    Ok(())
}

fn cmd_predict(session: &mut Session, config: &GradecastConfig, format: OutputFormat) -> Result<()> {
    let view = session.submit().clone();
    match (&view, format) {
        (ViewState::Result(response), OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(response)?);
        }
        (ViewState::Error(e), _) => {
            warn!(error = %e, transport = e.is_transport(), "Prediction not available");
            if matches!(e, gradecast_core::GradecastError::InvalidInputs { .. }) {
                eprint!("{}", output::form_table(session.controller().form()));
            }
            eprint!("{}", output::error_banner(e));
            bail!("prediction failed");
        }
        _ => print!("{}", output::view_state(&view, config.display.bar_width)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("lab_credits=6").unwrap(),
            ("lab_credits".to_string(), "6".to_string())
        );
        assert_eq!(
            parse_assignment(" total_credits = 30 ").unwrap(),
            ("total_credits".to_string(), "30".to_string())
        );
        assert_eq!(
            parse_assignment("lab_credits=").unwrap(),
            ("lab_credits".to_string(), String::new())
        );
        assert!(parse_assignment("lab_credits").is_err());
        assert!(parse_assignment("=6").is_err());
    }

    fn offline_session() -> Session {
        Session::new(
            PredictorClient::with_host("http://127.0.0.1:9"),
            FormSchema::student_performance(),
        )
    }

    #[test]
    fn test_fill_form_rejects_unknown_field() {
        let mut session = offline_session();
        let err = fill_form(&mut session, &["shoe_size=9".to_string()], false).unwrap_err();
        assert_eq!(err.to_string(), "Unknown field 'shoe_size'");
    }

    #[test]
    fn test_fill_form_sets_known_fields() {
        let mut session = offline_session();
        fill_form(
            &mut session,
            &["lab_credits=6".to_string(), "attendance_percentage=150".to_string()],
            false,
        )
        .unwrap();
        let form = session.controller().form();
        assert_eq!(form.value("lab_credits"), Some("6"));
        assert_eq!(
            form.result("attendance_percentage").and_then(|r| r.diagnostic()),
            Some("Value must be between 0 and 100")
        );
    }

    #[test]
    fn test_fill_form_sample_failure_is_reported() {
        let mut session = offline_session();
        let err = fill_form(&mut session, &[], true).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load sample data: "));
    }

    #[test]
    fn test_cli_parses_predict() {
        let cli = Cli::try_parse_from([
            "gradecast",
            "--host",
            "http://ml:5000",
            "predict",
            "--sample",
            "lab_credits=4",
        ])
        .unwrap();
        assert_eq!(cli.host, "http://ml:5000");
        match cli.command {
            Some(Commands::Predict { fields, sample }) => {
                assert!(sample);
                assert_eq!(fields, vec!["lab_credits=4"]);
            }
            _ => panic!("expected predict"),
        }
    }
}
