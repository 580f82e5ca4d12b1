mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile, Settings};
use reputation_recon::adapters::outbound::console::StderrProgressReporter;
use reputation_recon::adapters::outbound::network::HttpAssessmentBackend;
use reputation_recon::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use reputation_recon::application::read_models::{
    AssessmentReportBuilder, AssessmentReportView, HistoryView, HistoryViewBuilder,
};
use reputation_recon::application::use_cases::{
    AssessmentSession, SessionStatus, SkipReason, SubmitOutcome,
};
use reputation_recon::assessment::domain::AssessmentResult;
use reputation_recon::ports::outbound::ProgressReporter;
use reputation_recon::shared::error::{ExitCode, ReconError};
use reputation_recon::shared::Result;
use std::io::IsTerminal;
use std::process;
use std::sync::Arc;

type Session = AssessmentSession<HttpAssessmentBackend, StderrProgressReporter>;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ReconError>() {
        Some(ReconError::EmptyQuery) | Some(ReconError::Validation { .. }) => {
            ExitCode::InvalidArguments
        }
        _ => ExitCode::ApplicationError,
    }
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config = load_config(&args)?;
    let settings = Settings::resolve(&args, config.as_ref())?;

    let has_query = args
        .query
        .as_deref()
        .is_some_and(|q| !q.trim().is_empty());
    if !has_query && args.select.is_none() && !args.history {
        return Err(ReconError::EmptyQuery.into());
    }

    // Create adapters (Dependency Injection)
    let progress_reporter = Arc::new(if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    });
    let backend = Arc::new(HttpAssessmentBackend::new(&settings.api_url, settings.timeout)?);

    let session = AssessmentSession::new(backend, Arc::clone(&progress_reporter));

    // Initial population; a failure is reported and leaves the cache empty
    session.refresh_history().await;

    let outcome = execute(&session, &args, &settings, progress_reporter.as_ref()).await;
    session.close();
    outcome
}

async fn execute(
    session: &Session,
    args: &Args,
    settings: &Settings,
    progress_reporter: &StderrProgressReporter,
) -> Result<ExitCode> {
    let result = if let Some(position) = args.select {
        let index = displayed_index(position, session.history().len(), settings.history_limit)?;
        let entry = session
            .history()
            .get(index)
            .ok_or(ReconError::HistoryEntryNotFound {
                index: position,
                available: session.history().len().min(settings.history_limit),
            })?;
        session.select_history_entry(entry);
        session.result()
    } else if let Some(query) = args.query.as_deref() {
        session.set_query(query);
        match session.submit().await {
            SubmitOutcome::Skipped(SkipReason::EmptyQuery) => {
                return Err(ReconError::EmptyQuery.into())
            }
            SubmitOutcome::Skipped(SkipReason::InFlight) => {
                return Err(ReconError::AssessmentFailed {
                    message: "another assessment is still in flight".to_string(),
                }
                .into())
            }
            // The session already reported the failure
            SubmitOutcome::Completed(SessionStatus::Error) => {
                if args.history {
                    let history = build_history_view(session, settings.history_limit);
                    render(
                        None,
                        Some(&history),
                        settings,
                        use_color(args, settings),
                        progress_reporter,
                    )?;
                }
                return Ok(ExitCode::ApplicationError);
            }
            SubmitOutcome::Completed(_) => session.result(),
        }
    } else {
        None
    };

    let report = result.as_ref().map(AssessmentReportBuilder::build);
    let history = if args.history {
        // Pick up the refresh spawned by a successful submit
        session.settle().await;
        Some(build_history_view(session, settings.history_limit))
    } else {
        None
    };

    render(
        report.as_ref(),
        history.as_ref(),
        settings,
        use_color(args, settings),
        progress_reporter,
    )?;

    Ok(check_min_score(result.as_ref(), settings.min_score))
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => Ok(Some(load_config_from_path(path)?)),
        None => discover_config(&std::env::current_dir()?),
    }
}

/// Maps a 1-based `--select` position onto the displayed history window
fn displayed_index(position: usize, cached: usize, limit: usize) -> Result<usize> {
    let available = cached.min(limit);
    if position == 0 || position > available {
        return Err(ReconError::HistoryEntryNotFound {
            index: position,
            available,
        }
        .into());
    }
    Ok(position - 1)
}

fn build_history_view(session: &Session, limit: usize) -> HistoryView {
    let history = session.history();
    HistoryViewBuilder::build(&history.entries(limit), history.len())
}

fn render(
    report: Option<&AssessmentReportView>,
    history: Option<&HistoryView>,
    settings: &Settings,
    use_color: bool,
    progress_reporter: &StderrProgressReporter,
) -> Result<()> {
    progress_reporter.report(FormatterFactory::progress_message(settings.format));

    let formatter = FormatterFactory::create(settings.format, use_color);
    let formatted_output = formatter.format_combined(report, history)?;

    PresenterFactory::create(PresenterType::from(settings.output.clone()))
        .present(&formatted_output)
}

/// Colour only for an interactive stdout that nobody opted out of
fn use_color(args: &Args, settings: &Settings) -> bool {
    !args.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && settings.output.is_none()
        && std::io::stdout().is_terminal()
}

fn check_min_score(result: Option<&AssessmentResult>, min_score: Option<u32>) -> ExitCode {
    match (result, min_score) {
        (Some(result), Some(min_score)) if result.trust_score.value < min_score => {
            eprintln!(
                "\n⚠️  Trust score {}/100 for {} is below the minimum of {}",
                result.trust_score.value, result.entity.product_name, min_score
            );
            ExitCode::BelowThreshold
        }
        _ => ExitCode::Success,
    }
}
