use clap::Parser;
use classbook_cli::{run_script, run_session};
use classbook_core::config::runtime::parse_log_level;
use classbook_core::logging::{self, codes};
use classbook_core::{log_info, log_success, AddressBook, AppConfig, ModelManager};
use classbook_logic::LogicManager;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments for the classbook address book
#[derive(Parser, Debug)]
#[command(name = "classbook")]
#[command(about = "Address book of students, teachers and meetings for form teachers")]
#[command(version)]
struct Args {
    /// TOML file with logging and session preferences
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Minimum level to log (error, warn, info, debug)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Emit log events as JSON lines on stderr
    #[arg(long)]
    structured_logs: bool,

    /// Run this command and exit; may be given several times
    #[arg(long = "command", short = 'c', value_name = "LINE")]
    commands: Vec<String>,
}

fn load_config(args: &Args) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            let config = AppConfig::load(path)?;
            log::debug!("Loaded configuration from {}", path.display());
            config
        }
        None => AppConfig::default(),
    };

    if let Some(level) = &args.log_level {
        config.logging.min_log_level =
            parse_log_level(level).ok_or_else(|| format!("Unknown log level: {}", level))?;
    }
    if args.structured_logs {
        config.logging.use_structured_logging = true;
        config.logging.use_log_facade = false;
    }

    Ok(config)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).try_init()?;

    let config = load_config(&args)?;
    logging::config::init_runtime_preferences(config.logging.clone())?;
    logging::init_global_logging()?;
    log_success!(
        codes::success::CONFIG_LOADED,
        "Configuration applied",
        "level" => config.logging.min_log_level.as_str()
    );

    let mut logic = LogicManager::new(ModelManager::new(AddressBook::new(), config.user.clone()));

    let summary = if args.commands.is_empty() {
        let stdin = io::stdin();
        run_session(stdin.lock(), io::stdout(), &mut logic, &config.user)?
    } else {
        run_script(&args.commands, io::stdout(), &mut logic)?
    };

    log_info!(
        "Classbook finished",
        "commands" => summary.commands_run,
        "exited" => summary.exited
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logging::safe_log_critical(codes::system::INITIALIZATION_FAILURE, &err.to_string());
            ExitCode::FAILURE
        }
    }
}
