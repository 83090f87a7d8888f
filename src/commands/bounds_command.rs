//! Viewport bounds estimation command

use clap::ArgMatches;
use log::info;

use crate::api::PiscolaGeo;
use crate::commands::command_traits::Command;
use crate::commands::{optional_size, optional_zoom, required_point};
use crate::errors::GeoResult;
use crate::geo::{Point, ViewportSize};
use crate::utils::write_utils::write_json;

/// Command estimating the bounds a map view would show
pub struct BoundsCommand<'a> {
    center: Point,
    zoom: Option<u8>,
    /// Exact viewport in pixels
    size: Option<ViewportSize>,
    /// Browser window, capped per breakpoint
    window: Option<ViewportSize>,
    output: Option<String>,
    geo: &'a PiscolaGeo,
}

impl<'a> BoundsCommand<'a> {
    pub fn new(args: &ArgMatches, geo: &'a PiscolaGeo) -> GeoResult<Self> {
        Ok(BoundsCommand {
            center: required_point(args, "center")?,
            zoom: optional_zoom(args)?,
            size: optional_size(args, "size")?,
            window: optional_size(args, "window")?,
            output: args.get_one::<String>("output").cloned(),
            geo,
        })
    }
}

impl<'a> Command for BoundsCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let bounds = match (self.size, self.window) {
            (Some(size), _) => self.geo.estimate_bounds(self.center, self.zoom, Some(size))?,
            (None, Some(window)) => self.geo.estimate_bounds_for_window(self.center, self.zoom, window)?,
            (None, None) => self.geo.estimate_bounds(self.center, self.zoom, None)?,
        };
        info!("Estimated bounds (west,south,east,north): {}", bounds);
        write_json(&bounds, self.output.as_deref())
    }
}
