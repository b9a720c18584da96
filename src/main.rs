use clap::Parser;
use signup_form::cli::Cli;
use signup_form::error::AppError;
use signup_form::logging::{init_logging, install_panic_hook};
use signup_form::runtime::Runtime;
use signup_form::state::app::AppState;
use signup_form::submit::{PlaceholderSubmit, SubmitExecutor};
use signup_form::terminal::Terminal;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = cli.resolve_config()?;
    init_logging(&config.log)?;
    tracing::info!(message = %config.form.message, "configuration loaded");

    let state = AppState::new(config.form_props());
    if cli.dump_view {
        println!("{}", serde_json::to_string_pretty(&state.view())?);
        return Ok(());
    }

    install_panic_hook();
    let handler = Arc::new(PlaceholderSubmit::new(config.submit.latency()));
    let executor = SubmitExecutor::new(handler);
    let terminal = Terminal::new()?;
    let mut runtime = Runtime::new(state, terminal, executor);
    runtime.run()?;

    let form = runtime.state().form();
    tracing::info!(
        submissions = form.submit_count(),
        phase = ?form.phase(),
        "form closed"
    );
    Ok(())
}
