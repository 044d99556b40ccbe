//! omdbq - OMDB movie lookup and search CLI.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use serde_json::Value;
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use omdbq_api::omdb::{
    API_KEY_ENV, LocalOmdbApi, LookupParams, OmdbClient, OmdbError, SearchParams,
};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Free-text search query.
    #[arg(long, short = 's')]
    search: Option<String>,

    /// IMDb id (e.g. tt1285016). Takes precedence over a title.
    #[arg(long, short = 'i')]
    id: Option<String>,

    /// Year of release filter.
    #[arg(long, short = 'y')]
    year: Option<String>,

    /// Media type filter: movie, series, or episode.
    #[arg(long = "type", short = 't')]
    media_type: Option<String>,

    /// Plot length for lookups: short (default) or full.
    #[arg(long, short = 'p')]
    plot: Option<String>,

    /// Result page for searches (1-100).
    #[arg(long)]
    page: Option<String>,

    /// Title to look up (legacy positional mode).
    #[arg(value_name = "TITLE")]
    title: Option<String>,

    /// Year of release (legacy positional mode).
    #[arg(value_name = "YEAR")]
    year_pos: Option<String>,
}

/// Builds an `OmdbClient` from the `OMDB_API_KEY` environment variable.
///
/// # Errors
///
/// Returns an error if `OMDB_API_KEY` is not set or the client fails to build.
#[instrument(skip_all)]
fn build_client() -> Result<OmdbClient> {
    let api_key = std::env::var(API_KEY_ENV).map_err(|_| OmdbError::MissingApiKey)?;

    OmdbClient::builder()
        .api_key(api_key)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build OMDB client")
}

/// Executes the request selected by the CLI arguments.
///
/// Legacy dispatch rule, preserved from the original tool: a bare title is
/// tried as a direct lookup; giving any of year/type/--page turns it into a
/// search. An explicit `--page 1` still selects search mode.
///
/// # Errors
///
/// Returns an error if no identifier is given, the client fails to build,
/// or the request fails.
#[instrument(skip_all)]
async fn run(cli: Cli) -> Result<()> {
    let client = build_client()?;

    let query = cli.search.or(cli.title);
    let year = cli.year.or(cli.year_pos);

    let value = if let Some(id) = cli.id {
        let mut params = LookupParams::by_id(id);
        params.year = year;
        params.media_type = cli.media_type;
        if let Some(plot) = cli.plot {
            params.plot = plot;
        }
        client
            .lookup_movie(&params)
            .await
            .context("OMDB lookup request failed")?
    } else if let Some(query) = query {
        if year.is_none() && cli.media_type.is_none() && cli.page.is_none() {
            let mut params = LookupParams::by_title(query);
            if let Some(plot) = cli.plot {
                params.plot = plot;
            }
            client
                .lookup_movie(&params)
                .await
                .context("OMDB lookup request failed")?
        } else {
            let mut params = SearchParams::new(query);
            params.year = year;
            params.media_type = cli.media_type;
            params.page = cli.page;
            client
                .search_movies(&params)
                .await
                .context("OMDB search request failed")?
        }
    } else {
        anyhow::bail!("no movie title or id provided");
    };

    print_json(&value)
}

/// Pretty-prints the decoded body to stdout.
#[allow(clippy::print_stdout)]
fn print_json(value: &Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}

/// Entry point.
///
/// Exit codes: 0 on success (including `--help`/`--version`), 1 on any
/// failure (usage, validation, configuration, transport, unexpected).
#[tokio::main(flavor = "current_thread")]
#[allow(clippy::print_stderr)]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if std::env::args().len() <= 1 {
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
            let _ = err.print();
            return code;
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
