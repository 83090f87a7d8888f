//! CLI command implementations
//!
//! This module contains implementations of the subcommands supported by
//! the CLI application using the Command pattern.

pub mod bounds_command;
pub mod command_traits;
pub mod distance_command;
pub mod nearby_command;
pub mod parse_url_command;

pub use bounds_command::BoundsCommand;
pub use command_traits::{Command, CommandFactory};
pub use distance_command::DistanceCommand;
pub use nearby_command::NearbyCommand;
pub use parse_url_command::ParseUrlCommand;

use clap::ArgMatches;

use crate::api::PiscolaGeo;
use crate::errors::{GeoError, GeoResult};
use crate::geo::{Point, ViewportSize};

/// Factory for creating command instances based on CLI arguments
pub struct PiscolaCommandFactory;

impl PiscolaCommandFactory {
    pub fn new() -> Self {
        PiscolaCommandFactory
    }
}

impl Default for PiscolaCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for PiscolaCommandFactory {
    fn create_command(&self, args: &ArgMatches, geo: &'a PiscolaGeo) -> GeoResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("distance", sub)) => Ok(Box::new(DistanceCommand::new(sub, geo)?)),
            Some(("bounds", sub)) => Ok(Box::new(BoundsCommand::new(sub, geo)?)),
            Some(("nearby", sub)) => Ok(Box::new(NearbyCommand::new(sub, geo)?)),
            Some(("parse-url", sub)) => Ok(Box::new(ParseUrlCommand::new(sub, geo)?)),
            Some((name, _)) => Err(GeoError::GenericError(format!("Unknown command: {}", name))),
            None => Err(GeoError::GenericError("No command given".to_string())),
        }
    }
}

pub(crate) fn required_point(args: &ArgMatches, name: &str) -> GeoResult<Point> {
    let value = args.get_one::<String>(name)
        .ok_or_else(|| GeoError::GenericError(format!("Missing --{}", name)))?;
    Point::from_string(value)
}

pub(crate) fn optional_zoom(args: &ArgMatches) -> GeoResult<Option<u8>> {
    match args.get_one::<String>("zoom") {
        Some(s) => s.trim().parse::<u8>()
            .map(Some)
            .map_err(|_| GeoError::GenericError(format!("Invalid zoom level: {}", s))),
        None => Ok(None),
    }
}

pub(crate) fn optional_size(args: &ArgMatches, name: &str) -> GeoResult<Option<ViewportSize>> {
    match args.get_one::<String>(name) {
        Some(s) => ViewportSize::from_string(s).map(Some),
        None => Ok(None),
    }
}
