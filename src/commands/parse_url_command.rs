//! Map link parsing command

use clap::ArgMatches;
use log::info;

use crate::api::PiscolaGeo;
use crate::commands::command_traits::Command;
use crate::errors::{GeoError, GeoResult};
use crate::utils::write_utils::write_json;

/// Command printing the position found in a map link
pub struct ParseUrlCommand<'a> {
    url: String,
    geo: &'a PiscolaGeo,
}

impl<'a> ParseUrlCommand<'a> {
    pub fn new(args: &ArgMatches, geo: &'a PiscolaGeo) -> GeoResult<Self> {
        let url = args.get_one::<String>("url")
            .ok_or_else(|| GeoError::GenericError("Missing map link".to_string()))?
            .clone();
        Ok(ParseUrlCommand { url, geo })
    }
}

impl<'a> Command for ParseUrlCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let location = self.geo.parse_location(&self.url)?;
        info!("Found {:?} location {}", location.source, location.point);
        write_json(&location, None)
    }
}
