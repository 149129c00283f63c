use anyhow::Context;
use console::style;
use crossbeam_channel::Receiver;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use churn_survey::{
    AppResult, CommandResult, Config, PredictClient, SurveyCommand, SurveyEvent, SurveyExecutor,
    SurveyField, SurveyFlow,
};

const LOG_TARGET_STARTUP: &str = "churn_survey::startup";

/// Initialize tracing with file rotation
///
/// Logs are written to:
/// - macOS: ~/Library/Application Support/ChurnSurvey/logs/
/// - Windows: %APPDATA%/ChurnSurvey/logs/
/// - Linux: ~/.config/ChurnSurvey/logs/
///
/// Log rotation:
/// - Daily rotation (new file each day)
/// - Files named: churn-survey.YYYY-MM-DD.log
///
/// Log output:
/// - Debug builds: Console (stderr) + File
/// - Release builds: File only (stdout belongs to the prompts)
fn initialize_tracing() {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Get log directory in user config folder
    let log_dir = dirs::config_dir()
        .map(|dir| dir.join("ChurnSurvey").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));

    // Create log directory if it doesn't exist
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    // Create file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "churn-survey.log");

    // Configure filter (info level by default)
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Create file layer
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    // In debug builds, also log to the console
    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    // In release builds, only log to file
    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }

    tracing::info!("Log directory: {}", log_dir.display());
}

fn log_runtime_environment() {
    let version = env!("CARGO_PKG_VERSION");

    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Starting Churn Survey v{} on {} ({})",
        version,
        std::env::consts::OS,
        std::env::consts::ARCH
    );
}

fn main() -> AppResult<()> {
    initialize_tracing();
    log_runtime_environment();

    let config = Config::load().context("Failed to load configuration")?;
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Prediction endpoint: {}",
        config.predict_url
    );

    println!("===========================================");
    println!("  Churn Prediction Survey");
    println!("===========================================\n");
    println!(
        "Fill in each field. Type {} to return to the previous field,",
        style(":back").cyan()
    );
    println!("or {} to exit without submitting.", style(":quit").cyan());

    let flow = SurveyFlow::new().context("Failed to build the field registry")?;
    let executor = SurveyExecutor::new(flow, PredictClient::new(config.predict_url.as_str()));

    run_session(&executor)
}

/// Outcome of one submission attempt
enum Outcome {
    Predicted(String),
    Failed(String),
}

fn run_session(executor: &SurveyExecutor) -> AppResult<()> {
    let theme = ColorfulTheme::default();
    let flow = executor.flow();
    let events = executor.events();

    loop {
        // Snapshot what the renderer needs, then drop the lock before
        // blocking on input
        let (field, current, error, final_step) = {
            let guard = flow.read();
            let field = guard.active_field();
            (
                field,
                guard.state().value(field).to_string(),
                guard.state().error(field).map(str::to_string),
                guard.is_final_step(),
            )
        };

        println!();
        println!(
            "{} Step {} of {}: {}",
            style("◆").cyan(),
            field.number(),
            SurveyField::total(),
            style(field.label()).bold()
        );
        println!("  {}", style(field.placeholder()).dim());
        if let Some(message) = &error {
            println!("  {}", style(message).red());
        }

        let mut prompt = Input::<String>::with_theme(&theme)
            .with_prompt(field.label())
            .allow_empty(true);
        if !current.is_empty() {
            prompt = prompt.with_initial_text(current);
        }
        let entry = prompt.interact_text()?;

        match entry.trim() {
            ":quit" | ":q" => {
                executor.apply(SurveyCommand::Quit);
                println!("{}", style("Survey aborted.").dim());
                return Ok(());
            }
            ":back" | ":b" => {
                if let CommandResult::Rejected(reason) = executor.apply(SurveyCommand::Retreat) {
                    println!("  {}", style(reason).dim());
                }
                continue;
            }
            _ => {}
        }

        // Store the raw entry; a failed advance records the inline error shown
        // on the next render
        executor.apply(SurveyCommand::SetValue {
            field,
            value: entry,
        });

        if !final_step {
            executor.apply(SurveyCommand::Advance);
            continue;
        }

        // Last step: submit replaces forward navigation
        if !Confirm::with_theme(&theme)
            .with_prompt("Submit survey?")
            .default(true)
            .interact()?
        {
            continue;
        }

        if let CommandResult::Rejected(reason) = executor.apply(SurveyCommand::Submit) {
            println!("{}", style(reason).red());
            continue;
        }

        match wait_for_outcome(&events)? {
            Outcome::Predicted(label) => {
                println!();
                println!(
                    "{} Prediction: {}",
                    style("✓").green(),
                    style(&label).bold()
                );

                if Confirm::with_theme(&theme)
                    .with_prompt("Enter another record?")
                    .default(false)
                    .interact()?
                {
                    // The form already reset to the first step
                    continue;
                }

                executor.apply(SurveyCommand::Quit);
                return Ok(());
            }
            Outcome::Failed(message) => {
                // Values are preserved; stay on the last step for a retry
                println!("{}", style(message).red());
            }
        }
    }
}

/// Block until the pending submission reports its outcome
fn wait_for_outcome(events: &Receiver<SurveyEvent>) -> AppResult<Outcome> {
    loop {
        match events.recv()? {
            SurveyEvent::SubmissionStarted => {
                println!("{}", style("Submitting...").dim());
            }
            SurveyEvent::PredictionReceived { label } => return Ok(Outcome::Predicted(label)),
            SurveyEvent::SubmissionFailed { message } => return Ok(Outcome::Failed(message)),
            _ => {}
        }
    }
}
