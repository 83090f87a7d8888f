use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use log::{error, LevelFilter};
use std::process;

use piscola_geo::commands::{CommandFactory, PiscolaCommandFactory};
use piscola_geo::utils::logger::Logger;
use piscola_geo::{GeoConfig, PiscolaGeo};

fn point_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_name("LAT,LNG")
        .allow_hyphen_values(true)
        .required(true)
}

fn zoom_arg() -> Arg {
    Arg::new("zoom")
        .short('z')
        .long("zoom")
        .help("Web-Mercator zoom level (defaults to the configured zoom)")
        .value_name("LEVEL")
        .required(false)
}

fn size_arg() -> Arg {
    Arg::new("size")
        .long("size")
        .help("Exact viewport size in pixels")
        .value_name("WIDTHxHEIGHT")
        .required(false)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .help("Write JSON output to this file instead of stdout")
        .value_name("FILE")
        .required(false)
}

fn build_cli() -> ClapCommand {
    ClapCommand::new("piscola-geo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Distance, bounds and nearby-venue queries for the venue map")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write logs to this file instead of stderr")
                .value_name("FILE")
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            ClapCommand::new("distance")
                .about("Great-circle distance between two points in km")
                .arg(
                    Arg::new("from")
                        .help("First point")
                        .value_name("LAT,LNG")
                        .allow_hyphen_values(true)
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("to")
                        .help("Second point")
                        .value_name("LAT,LNG")
                        .allow_hyphen_values(true)
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            ClapCommand::new("bounds")
                .about("Estimate the bounds a map view would show")
                .arg(point_arg("center", "Map centre"))
                .arg(zoom_arg())
                .arg(size_arg().conflicts_with("window"))
                .arg(
                    Arg::new("window")
                        .long("window")
                        .help("Browser window size; capped per breakpoint")
                        .value_name("WIDTHxHEIGHT")
                        .required(false),
                )
                .arg(output_arg()),
        )
        .subcommand(
            ClapCommand::new("nearby")
                .about("List venues in an area, nearest first")
                .arg(
                    Arg::new("input")
                        .help("JSON file holding an array of venues")
                        .required(true)
                        .index(1),
                )
                .arg(point_arg("center", "Reference point for distances"))
                .arg(
                    Arg::new("bbox")
                        .long("bbox")
                        .help("Bounding box (west,south,east,north)")
                        .value_name("BBOX")
                        .allow_hyphen_values(true)
                        .conflicts_with("radius")
                        .required(false),
                )
                .arg(
                    Arg::new("radius")
                        .long("radius")
                        .help("Radius around the centre in km")
                        .value_name("KM")
                        .required(false),
                )
                .arg(zoom_arg().conflicts_with_all(["bbox", "radius"]))
                .arg(size_arg().conflicts_with_all(["bbox", "radius"]))
                .arg(
                    Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .help("Maximum number of venues to list")
                        .value_name("N")
                        .required(false),
                )
                .arg(output_arg()),
        )
        .subcommand(
            ClapCommand::new("parse-url")
                .about("Extract a position from a Google Maps link")
                .arg(
                    Arg::new("url")
                        .help("Map link or 'lat,lng'")
                        .allow_hyphen_values(true)
                        .required(true)
                        .index(1),
                ),
        )
}

fn load_config(matches: &ArgMatches) -> GeoConfig {
    match matches.get_one::<String>("config") {
        Some(path) => match GeoConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading configuration '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => GeoConfig::default(),
    }
}

fn init_logging(matches: &ArgMatches, config: &GeoConfig) {
    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        Logger::parse_level(&config.logging.level)
    };

    let log_file = matches
        .get_one::<String>("log-file")
        .cloned()
        .or_else(|| config.logging.log_file.clone());

    match log_file {
        Some(path) => {
            if let Err(e) = Logger::init_global_logger(&path, level) {
                eprintln!("Error setting up logger '{}': {}", path, e);
                process::exit(1);
            }
        }
        None => Logger::init_console_logger(level),
    }
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_config(&matches);
    init_logging(&matches, &config);

    let geo = PiscolaGeo::new(config);
    let factory = PiscolaCommandFactory::new();

    let command_result = factory.create_command(&matches, &geo);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nearby_args(extra: &[&str]) -> Vec<String> {
        let mut args = vec!["piscola-geo", "nearby", "venues.json", "--center", "-33.44,-70.65"];
        args.extend_from_slice(extra);
        args.into_iter().map(String::from).collect()
    }

    #[test]
    fn test_nearby_zoom_and_size_conflict_with_explicit_area() {
        assert!(build_cli().try_get_matches_from(nearby_args(&["--radius", "2", "--zoom", "14"])).is_err());
        assert!(build_cli().try_get_matches_from(nearby_args(&["--bbox", "-70.7,-33.5,-70.6,-33.4", "--size", "800x600"])).is_err());
        assert!(build_cli().try_get_matches_from(nearby_args(&["--zoom", "14", "--size", "800x600"])).is_ok());
        assert!(build_cli().try_get_matches_from(nearby_args(&["--radius", "2"])).is_ok());
    }
}
