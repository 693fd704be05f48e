use std::ffi::OsString;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    #[command(subcommand)]
    command: ClapCommand,
}

#[derive(Subcommand, Debug)]
enum ClapCommand {
    /// Search for a place by name
    Search {
        /// Place name, e.g. "Rīga"
        query: String,

        /// Show the weather for the Nth result (1-based)
        #[arg(short, long)]
        pick: Option<usize>,
    },
    /// Show the weather for a coordinate
    Weather {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Open a dashboard route such as "#/weather?lat=56.95&lon=24.1"
    Route { hash: String },
    /// Show the weather for the configured home location
    Current,
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search { query: String, pick: Option<usize> },
    Weather { lat: f64, lon: f64 },
    Route { hash: String },
    Current,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    command: Command,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    #[allow(dead_code)]
    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        let command = match args.command {
            ClapCommand::Search { query, pick } => Command::Search { query, pick },
            ClapCommand::Weather { lat, lon } => Command::Weather { lat, lon },
            ClapCommand::Route { hash } => Command::Route { hash },
            ClapCommand::Current => Command::Current,
        };
        Self { command }
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_search() {
        let args = CommandLineArgs::parse_from(["laiks", "search", "Rīga"]);
        assert_eq!(
            args.command(),
            &Command::Search {
                query: "Rīga".to_string(),
                pick: None
            }
        );
    }

    #[test]
    fn test_parse_search_pick() {
        let args = CommandLineArgs::parse_from(["laiks", "search", "Riga", "--pick", "2"]);
        assert_eq!(
            args.command(),
            &Command::Search {
                query: "Riga".to_string(),
                pick: Some(2)
            }
        );
    }

    #[test]
    fn test_parse_weather_negative_coordinates() {
        let args = CommandLineArgs::parse_from(["laiks", "weather", "--lat", "-33.86", "--lon", "-151.2"]);
        assert_eq!(args.command(), &Command::Weather { lat: -33.86, lon: -151.2 });
    }

    #[test]
    fn test_parse_route_and_current() {
        let args = CommandLineArgs::parse_from(["laiks", "route", "#/current-location"]);
        assert_eq!(
            args.command(),
            &Command::Route {
                hash: "#/current-location".to_string()
            }
        );

        let args = CommandLineArgs::parse_from(["laiks", "current"]);
        assert_eq!(args.command(), &Command::Current);
    }
}
