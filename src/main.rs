// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, error};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use quotescope::app_config::{self, Config};
use quotescope::errors::AppError;
use quotescope::providers::openai::OpenAI;
use quotescope::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for quotescope
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct StudyArgs {
    /// Document to check quotes against (overrides the config file)
    #[arg(value_name = "DOCUMENT")]
    document: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "PATH", default_value = "conf.json")]
    config_path: PathBuf,

    /// Model name to use for the explanation
    #[arg(short, long)]
    model: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Empty entries allowed before giving up
    #[arg(long)]
    max_attempts: Option<u32>,
}

/// quotescope - study a quote from a book with the help of an LLM
#[derive(Parser, Debug)]
#[command(name = "quotescope")]
#[command(version)]
#[command(about = "Explain and analyze a quote from a book")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "quotescope loads a book from a PDF, asks for a quote, checks it against the text,
asks an OpenAI model to explain it, scores its sentiment and prints the MLA citation.

EXAMPLES:
    quotescope                                  # Use conf.json (or defaults)
    quotescope Douglass_Narrative.pdf           # Study a specific PDF
    quotescope -m gpt-4o-mini                   # Use another model
    quotescope --log-level debug                # Verbose diagnostics
    quotescope completions bash > quotescope.bash

CREDENTIALS:
    OPENAI_API_KEY is read from the environment or from a .env file in the
    working directory.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    study: StudyArgs,
}

// @struct: Custom logger implementation; filtering follows `log::max_level`,
// which is raised or lowered once the CLI and config levels are known
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI color for log level
    fn decoration(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => ("", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::decoration(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "quotescope", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    match run_study(cli.study).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_fatal(&e);
            ExitCode::FAILURE
        }
    }
}

// @prints: Fatal error plus guidance for known application errors
fn report_fatal(e: &anyhow::Error) {
    match e.downcast_ref::<AppError>() {
        Some(app_error) => {
            error!("{}", app_error);
            for line in app_error.guidance() {
                error!("   {}", line);
            }
        }
        None => error!("{:#}", e),
    }
}

fn load_config(options: &StudyArgs) -> Result<Config> {
    let mut config = Config::load(&options.config_path)
        .map_err(|e| AppError::Config(format!("{:#}", e)))?;

    if let Some(document) = &options.document {
        config.document_path = document.clone();
    }
    if let Some(model) = &options.model {
        config.explanation.model = model.clone();
    }
    if let Some(max_attempts) = options.max_attempts {
        config.quote.max_attempts = max_attempts;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate()
        .map_err(|e| AppError::Config(format!("Configuration validation failed: {:#}", e)))?;

    Ok(config)
}

async fn run_study(options: StudyArgs) -> Result<()> {
    // CLI level applies before the config file is read
    if let Some(level) = &options.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => return Err(anyhow::Error::new(AppError::Config(format!("Invalid .env file: {}", e)))),
    }

    let config = load_config(&options)?;
    log::set_max_level(config.log_level.to_level_filter());

    let api_key = config.resolve_api_key(|name| std::env::var(name).ok())?;

    let provider = OpenAI::new(
        api_key,
        config.explanation.endpoint.clone(),
        config.explanation.timeout_secs,
    );
    let controller = Controller::with_config(config, provider);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    controller.run(&mut input, &mut output).await?;

    Ok(())
}
