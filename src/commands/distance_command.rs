//! Distance between two points

use clap::ArgMatches;
use log::{info, warn};

use crate::api::PiscolaGeo;
use crate::commands::command_traits::Command;
use crate::commands::required_point;
use crate::errors::GeoResult;
use crate::geo::Point;

/// Command printing the great-circle distance between two points
pub struct DistanceCommand<'a> {
    from: Point,
    to: Point,
    geo: &'a PiscolaGeo,
}

impl<'a> DistanceCommand<'a> {
    pub fn new(args: &ArgMatches, geo: &'a PiscolaGeo) -> GeoResult<Self> {
        let from = required_point(args, "from")?;
        let to = required_point(args, "to")?;
        for point in [&from, &to] {
            if !point.is_valid() {
                warn!("Point {} is outside the valid lat/lng range", point);
            }
        }
        Ok(DistanceCommand { from, to, geo })
    }
}

impl<'a> Command for DistanceCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let km = self.geo.distance(self.from, self.to);
        info!("Distance from {} to {}: {} km", self.from, self.to, km);
        println!("{:.2} km", km);
        Ok(())
    }
}
