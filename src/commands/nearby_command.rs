//! Venue filtering command
//!
//! Loads venues from a JSON file and prints those in an area, nearest to a
//! centre first. The area is a bounding box, a radius, or bounds estimated
//! from a zoom level when neither is given.

use clap::ArgMatches;
use log::{debug, info};

use crate::api::PiscolaGeo;
use crate::commands::command_traits::Command;
use crate::commands::{optional_size, optional_zoom, required_point};
use crate::errors::{GeoError, GeoResult};
use crate::filter::AreaFilter;
use crate::geo::{Bounds, Point, ViewportSize};
use crate::model::load_venues;
use crate::utils::write_utils::write_json;

/// Command listing venues around a point
pub struct NearbyCommand<'a> {
    input_file: String,
    center: Point,
    bbox: Option<Bounds>,
    radius_km: Option<f64>,
    zoom: Option<u8>,
    size: Option<ViewportSize>,
    limit: usize,
    output: Option<String>,
    geo: &'a PiscolaGeo,
}

impl<'a> NearbyCommand<'a> {
    pub fn new(args: &ArgMatches, geo: &'a PiscolaGeo) -> GeoResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| GeoError::GenericError("Missing venues file".to_string()))?
            .clone();

        let bbox = match args.get_one::<String>("bbox") {
            Some(s) => Some(Bounds::from_string(s)?),
            None => None,
        };

        let radius_km = match args.get_one::<String>("radius") {
            Some(s) => Some(s.trim().parse::<f64>()
                .map_err(|_| GeoError::GenericError(format!("Invalid radius: {}", s)))?),
            None => None,
        };

        let limit = match args.get_one::<String>("limit") {
            Some(s) => s.trim().parse::<usize>()
                .map_err(|_| GeoError::GenericError(format!("Invalid limit: {}", s)))?,
            None => geo.config().search.result_limit,
        };

        Ok(NearbyCommand {
            input_file,
            center: required_point(args, "center")?,
            bbox,
            radius_km,
            zoom: optional_zoom(args)?,
            size: optional_size(args, "size")?,
            limit,
            output: args.get_one::<String>("output").cloned(),
            geo,
        })
    }

    /// Pick the area to filter by
    fn area(&self) -> GeoResult<AreaFilter> {
        if let Some(bbox) = self.bbox {
            return AreaFilter::bounds(bbox);
        }
        if let Some(radius) = self.radius_km {
            return Ok(AreaFilter::radius(radius));
        }
        if self.zoom.is_some() || self.size.is_some() {
            let estimated = self.geo.estimate_bounds(self.center, self.zoom, self.size)?;
            debug!("Using estimated bounds {}", estimated);
            return AreaFilter::bounds(estimated);
        }
        Ok(AreaFilter::radius(self.geo.config().search.default_radius_km))
    }
}

impl<'a> Command for NearbyCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Loading venues from {}", self.input_file);
        let venues = load_venues(&self.input_file)?;

        let area = self.area()?;
        info!("Filtering {} venues around {} with {:?}", venues.len(), self.center, area);

        let results = self.geo.nearby(&venues, self.center, &area, Some(self.limit));
        info!("{} venues matched", results.len());

        write_json(&results, self.output.as_deref())
    }
}
