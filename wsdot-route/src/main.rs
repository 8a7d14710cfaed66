use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use wsdot_route::domain::{Milepost, RouteError};
use wsdot_route::report::{MilepostReport, RouteNameReport, RouteReport};
use wsdot_route::{ParseOptions, RouteDescription, RouteName};

/// Parse WSDOT route identifiers, route names and mileposts into JSON.
///
/// Prints one JSON object per input on stdout. Inputs that fail to parse
/// are logged to stderr and make the exit status non-zero.
#[derive(Parser)]
#[command(name = "wsdot-route", version)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Route identifiers without a suffix (e.g. 101COABERDN)
    Route {
        /// Accept any two-character RRT, not just known codes
        #[arg(long)]
        relaxed: bool,
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// WA Public Roads identifiers with an optional `d` suffix
    Wapr {
        /// Accept any two-character RRT, not just known codes
        #[arg(long)]
        relaxed: bool,
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Roads & Highways identifiers ending in `i`, `d` or `r`
    Rh {
        /// Accept any two-character RRT, not just known codes
        #[arg(long)]
        relaxed: bool,
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Roads & Highways route names (e.g. 005P101234i001234A)
    Name {
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Plain mileposts (e.g. 5, 5B)
    Milepost {
        #[arg(required = true)]
        inputs: Vec<String>,
    },
}

impl Mode {
    fn inputs(&self) -> &[String] {
        match self {
            Self::Route { inputs, .. }
            | Self::Wapr { inputs, .. }
            | Self::Rh { inputs, .. }
            | Self::Name { inputs }
            | Self::Milepost { inputs } => inputs,
        }
    }

    fn report(&self, input: &str) -> Result<Report, RouteError> {
        Ok(match self {
            Self::Route { relaxed, .. } => route(input, ParseOptions::default(), *relaxed)?,
            Self::Wapr { relaxed, .. } => route(input, ParseOptions::wapr(), *relaxed)?,
            Self::Rh { relaxed, .. } => route(input, ParseOptions::roads_and_highways(), *relaxed)?,
            Self::Name { .. } => {
                Report::Name(RouteNameReport::from_route_name(&RouteName::parse(input)?))
            }
            Self::Milepost { .. } => {
                Report::Milepost(MilepostReport::from_milepost(&Milepost::parse(input)?))
            }
        })
    }
}

/// One line of output.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Report {
    Route(RouteReport),
    Name(RouteNameReport),
    Milepost(MilepostReport),
}

fn route(input: &str, options: ParseOptions, relaxed: bool) -> Result<Report, RouteError> {
    let options = if relaxed { options.relaxed() } else { options };
    let description = RouteDescription::new(input, &options)?;
    Ok(Report::Route(RouteReport::from_description(&description)))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let inputs = cli.mode.inputs();
    let mut failures = 0;
    for input in inputs {
        match cli.mode.report(input) {
            Ok(report) => match serde_json::to_string(&report) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    error!(input = %input, error = %e, "could not serialize report");
                    failures += 1;
                }
            },
            Err(RouteError::Config { reason }) => {
                error!(input = %input, %reason, "could not build parser");
                failures += 1;
            }
            Err(e) => {
                warn!(input = %input, error = %e, "could not parse input");
                failures += 1;
            }
        }
    }
    debug!(mode = ?cli.mode, total = inputs.len(), failures, "done");

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
