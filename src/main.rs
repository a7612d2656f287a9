//! solar-payback entry point: CLI wiring, profile loading and the wizard run.

mod cli;

use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use solar_payback::config::ProfileConfig;
use solar_payback::cost::ScenarioResults;
use solar_payback::io::export::export_csv;
use solar_payback::wizard::{Session, Stage, Transition};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Walks a fresh session through every input stage with the profile's
/// updates. Returns the blocking stage if a gate rejects the profile.
fn run_profile(profile: &ProfileConfig) -> Result<ScenarioResults, Stage> {
    let mut session = Session::start();
    for update in profile.stage_updates() {
        session.update(&update);
        if let Transition::Blocked { at } = session.advance() {
            return Err(at);
        }
    }
    session.results().copied().ok_or(session.stage())
}

fn main() {
    init_tracing();

    let opts = match cli::parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            error!("{e}");
            cli::print_usage();
            process::exit(1);
        }
    };

    // --profile takes priority; the CLI falls back to the household preset
    let (source, loaded) = match (&opts.profile, &opts.preset) {
        (Some(path), _) => (
            path.display().to_string(),
            ProfileConfig::from_toml_file(path),
        ),
        (None, Some(name)) => (format!("preset {name}"), ProfileConfig::from_preset(name)),
        (None, None) => ("preset household".to_string(), Ok(ProfileConfig::household())),
    };
    let profile = loaded.unwrap_or_else(|e| {
        error!("{e}");
        process::exit(1);
    });

    let errors = profile.validate();
    if !errors.is_empty() {
        for e in &errors {
            error!("{e}");
        }
        process::exit(1);
    }

    info!(%source, "running profile");
    let results = run_profile(&profile).unwrap_or_else(|stage| {
        error!("profile rejected at stage \"{stage}\"");
        process::exit(1);
    });

    println!("Profile: {source}");
    println!("{results}");

    if let Some(ref path) = opts.csv_out {
        if let Err(e) = export_csv(&results, path) {
            error!("failed to write CSV: {e}");
            process::exit(1);
        }
        info!(path = %path.display(), "comparison written");
    }

    if opts.serve {
        serve(opts.port);
    }
}

#[cfg(feature = "api")]
fn serve(port: u16) {
    use std::net::SocketAddr;
    use std::sync::Arc;

    let state = Arc::new(solar_payback::api::AppState::new());
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        error!("failed to create tokio runtime: {e}");
        process::exit(1);
    });
    if let Err(e) = rt.block_on(solar_payback::api::serve(state, addr)) {
        error!("server error: {e}");
        process::exit(1);
    }
}

#[cfg(not(feature = "api"))]
fn serve(_port: u16) {
    error!("--serve requires building with the `api` feature");
    process::exit(1);
}
