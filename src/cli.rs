use std::env;
use std::path::PathBuf;

use solar_payback::config::ProfileConfig;

/// Default API server port.
pub const DEFAULT_PORT: u16 = 3000;

pub struct CliOptions {
    pub profile: Option<PathBuf>,
    pub preset: Option<String>,
    pub csv_out: Option<PathBuf>,
    pub serve: bool,
    pub port: u16,
}

pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(args)
}

fn parse_args_from(args: Vec<String>) -> Result<CliOptions, String> {
    if args.len() == 1 && (args[0] == "--help" || args[0] == "-h") {
        print_usage();
        std::process::exit(0);
    }
    parse_options(&args)
}

fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut profile = None;
    let mut preset = None;
    let mut csv_out = None;
    let mut serve = false;
    let mut port = None;

    while i < args.len() {
        match args[i].as_str() {
            "--profile" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --profile (expected a TOML file path)",
                )?;
                if profile.replace(PathBuf::from(path)).is_some() {
                    return Err("--profile provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name = args.next_or_err(i, "missing value for --preset (expected a preset name)")?;
                if preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--csv-out" => {
                i += 1;
                let path = args.next_or_err(i, "missing value for --csv-out (expected a file path)")?;
                if csv_out.replace(PathBuf::from(path)).is_some() {
                    return Err("--csv-out provided more than once".to_string());
                }
            }
            "--serve" => serve = true,
            "--port" => {
                i += 1;
                let raw = args.next_or_err(i, "missing value for --port (expected a u16)")?;
                let value = raw
                    .parse::<u16>()
                    .map_err(|_| format!("--port value \"{raw}\" is not a valid u16"))?;
                if port.replace(value).is_some() {
                    return Err("--port provided more than once".to_string());
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if profile.is_some() && preset.is_some() {
        return Err(
            "arguments `--profile` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }

    if profile.is_none() && preset.is_none() {
        preset = Some("household".to_string());
    }

    Ok(CliOptions {
        profile,
        preset,
        csv_out,
        serve,
        port: port.unwrap_or(DEFAULT_PORT),
    })
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("solar-payback: compare grid, generator and solar running costs");
    eprintln!();
    eprintln!("Usage:");
    eprintln!(
        "  solar-payback [--profile <path> | --preset <name>] [--csv-out <path>] [--serve] [--port <u16>]"
    );
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --profile <path>   Load a supply profile from a TOML file");
    eprintln!(
        "  --preset <name>    Use a built-in profile ({})",
        ProfileConfig::PRESETS.join(", ")
    );
    eprintln!("  --csv-out <path>   Export the comparison to CSV");
    eprintln!("  --serve            Start the REST API after the report (feature `api`)");
    eprintln!("  --port <u16>       API server port (default: {DEFAULT_PORT})");
    eprintln!();
    eprintln!("If neither --profile nor --preset is given, the household preset is used.");
}
