//! Command-line front end for the Gregorian/Ethiopian converter.

use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ethiodate::{
    EthiopianDate, GregorianDate, gregorian_to_ethiopian, parse_user_date, to_gregorian,
};
use tracing_subscriber::EnvFilter;

/// Convert dates between the Gregorian and Ethiopian calendars
#[derive(Parser, Debug)]
#[command(name = "ethiodate")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ETHIODATE_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Print results as JSON
    #[arg(long, env = "ETHIODATE_JSON")]
    json: bool,

    /// Conversion to run; without one, converts 2024-01-01 to Ethiopian
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Gregorian to Ethiopian, e.g. `to-ethiopian 2024 JAN 1`
    ToEthiopian {
        year: String,
        /// Three-letter month abbreviation (JAN-DEC)
        month: String,
        day: String,
    },
    /// Ethiopian to Gregorian, e.g. `to-gregorian 2016 13 5`
    ToGregorian {
        #[arg(allow_negative_numbers = true)]
        year: i32,
        /// Month number, 13 is Pagume
        month: u8,
        day: u8,
    },
}

enum Output {
    Ethiopian(EthiopianDate),
    Gregorian(GregorianDate),
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("ethiodate={level}")))
        .with_context(|| format!("invalid log level: {level}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

fn run(command: Option<Commands>) -> Result<Output> {
    match command {
        None => {
            let date = GregorianDate::new(2024, 1, 1)?;
            Ok(Output::Ethiopian(gregorian_to_ethiopian(date)))
        }
        Some(Commands::ToEthiopian { year, month, day }) => {
            let date = parse_user_date(&year, &month, &day).context(
                "Invalid date format. Please provide year (YYYY), month (MMM), and day (DD).",
            )?;
            Ok(Output::Ethiopian(gregorian_to_ethiopian(date)))
        }
        Some(Commands::ToGregorian { year, month, day }) => {
            let date = to_gregorian(year, month, day)
                .with_context(|| format!("cannot convert Ethiopian date {year}-{month}-{day}"))?;
            Ok(Output::Gregorian(date))
        }
    }
}

fn render(output: &Output, json: bool) -> Result<String> {
    let text = match (output, json) {
        (Output::Ethiopian(date), true) => serde_json::to_string_pretty(date)?,
        (Output::Gregorian(date), true) => serde_json::to_string_pretty(date)?,
        (Output::Ethiopian(date), false) => date.to_string(),
        (Output::Gregorian(date), false) => date.to_string(),
    };
    Ok(text)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("Failed to initialize logging: {e:#}");
        process::exit(1);
    }

    tracing::debug!(command = ?cli.command, json = cli.json, "starting");

    match run(cli.command).and_then(|output| render(&output, cli.json)) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            tracing::error!(error = %e, "conversion failed");
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["ethiodate"]);
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.json);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_to_ethiopian() {
        let cli = Cli::parse_from(["ethiodate", "--json", "to-ethiopian", "2024", "JAN", "1"]);
        assert!(cli.json);
        assert_eq!(
            cli.command,
            Some(Commands::ToEthiopian {
                year: "2024".to_string(),
                month: "JAN".to_string(),
                day: "1".to_string(),
            })
        );
    }

    #[test]
    fn test_cli_parse_to_gregorian() {
        let cli = Cli::parse_from(["ethiodate", "-l", "debug", "to-gregorian", "2016", "13", "5"]);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(
            cli.command,
            Some(Commands::ToGregorian {
                year: 2016,
                month: 13,
                day: 5,
            })
        );
    }

    #[test]
    fn test_cli_rejects_non_numeric_ethiopian_month() {
        let result = Cli::try_parse_from(["ethiodate", "to-gregorian", "2016", "PAG", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_default_converts_new_years_day() {
        let output = run(None).unwrap();
        assert_eq!(render(&output, false).unwrap(), "2016-04-21 (ታኅሣሥ)");
    }

    #[test]
    fn test_run_to_ethiopian_json() {
        let output = run(Some(Commands::ToEthiopian {
            year: "2024".to_string(),
            month: "jan".to_string(),
            day: "1".to_string(),
        }))
        .unwrap();
        let rendered = render(&output, true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["year"], 2016);
        assert_eq!(json["month"], 4);
        assert_eq!(json["day"], 21);
        assert_eq!(json["monthName"], "ታኅሣሥ");
    }

    #[test]
    fn test_run_to_gregorian() {
        let output = run(Some(Commands::ToGregorian {
            year: 2016,
            month: 13,
            day: 5,
        }))
        .unwrap();
        assert_eq!(render(&output, false).unwrap(), "3606-08-03");
        assert_eq!(render(&output, true).unwrap(), "\"3606-08-03\"");
    }

    #[test]
    fn test_run_reports_bad_input() {
        let err = run(Some(Commands::ToEthiopian {
            year: "abcd".to_string(),
            month: "JAN".to_string(),
            day: "1".to_string(),
        }))
        .err()
        .unwrap();
        assert!(err.to_string().starts_with("Invalid date format"));

        assert!(
            run(Some(Commands::ToGregorian {
                year: 2016,
                month: 13,
                day: 6,
            }))
            .is_err()
        );
    }
}
