mod app;
mod calculation;
mod cli;
mod config;
mod display;
mod error;
mod io;
mod prelude;
mod report;
mod router;

use std::process::ExitCode;

use clap::CommandFactory;
use env_logger::Env;

use app::App;
use cli::Cli;
use io::github_client::{GitHubClient, UreqTransport};
use prelude::*;

fn main() -> ExitCode {
    // Quiet unless RUST_LOG says otherwise.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run(Cli::new()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            // Diagnostic, then usage.
            eprintln!("{report:?}");
            eprintln!("{}", Cli::command().render_help());

            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult {
    // Bad flags should never cost a network round trip.
    let output_kind = cli.try_output_kind()?;

    let transport = UreqTransport::new(&cli.api_url, cli.resolve_token());
    let client = GitHubClient::new(transport);

    let mut ctx = App::new(cli);

    let usage = router::gather_usage(&mut ctx, &client)?;

    let body = output_kind
        .render(&usage)
        .wrap_err("Failed to render the report")?;

    let output = match output_kind.banner() {
        Some(banner) => banner + &body,
        None => body,
    };

    ctx.display.finish(&output);

    Ok(())
}
