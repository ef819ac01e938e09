use clap::Parser;
use fipsql::filter::date::DEFAULT_PATTERN;
use fipsql::filter::generate::DEFAULT_WILDCARD;
use fipsql::filter::DatePattern;
use fipsql::form::FormSnapshot;
use fipsql::output::{self, OutputFormat, DEFAULT_VARIABLE};
use fipsql::{FilterConfig, FilterGenerator};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const ENV_LOG: &str = "FIPSQL_LOG";

#[derive(Parser)]
#[command(
    name = "fipsql",
    version,
    about = "Build a SQL filter clause from filter-in-place form values"
)]
struct Cli {
    #[arg(long, env = "FIPSQL_SNAPSHOT", help = "Form snapshot (YAML); omit or use - for stdin")]
    snapshot: Option<PathBuf>,

    #[arg(long, env = "FIPSQL_WILDCARD", default_value = DEFAULT_WILDCARD, help = "Wildcard marker used on the form")]
    wildcard: String,

    #[arg(long, env = "FIPSQL_DATE_PATTERN", default_value = DEFAULT_PATTERN, help = "Short date pattern, e.g. M/d/yyyy")]
    date_pattern: String,

    #[arg(long, env = "FIPSQL_VARIABLE", default_value = DEFAULT_VARIABLE, help = "Variable that receives the filter")]
    variable: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let snapshot = match cli.snapshot.as_deref() {
        Some(path) if path.as_os_str() != "-" => FormSnapshot::load(path),
        _ => FormSnapshot::from_stdin(),
    };
    let form = match snapshot {
        Ok(form) => form,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let config = FilterConfig {
        wildcard: cli.wildcard,
        date_pattern: DatePattern::new(cli.date_pattern),
    };
    let generator = match FilterGenerator::new(config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    match generator.generate(&form, &form) {
        Ok(filter) => {
            let variable = output::variable_name(Some(cli.variable.as_str()));
            println!("{}", output::format_assignment(variable, &filter, cli.format));
            ExitCode::from(0)
        }
        Err(e) => {
            eprintln!("Filter error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn init_logging() {
    let filter = std::env::var(ENV_LOG)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_env_filter(EnvFilter::new(filter))
        .init();
}
