//! Map link parsing
//!
//! Pulls a position out of the links people paste when submitting a venue:
//! Google Maps place, search and direction URLs, or a bare "lat,lng" pair.
//! Short `maps.app.goo.gl` links only resolve through an HTTP redirect and
//! are reported as such instead of being fetched.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::Serialize;

use crate::errors::{GeoError, GeoResult};
use crate::geo::Point;

const NUMBER: &str = r"-?\d+(?:\.\d+)?";

lazy_static! {
    // !3d<lat>!4d<lng> inside the data= blob marks the pinned place
    static ref PLACE_DATA: Regex = Regex::new(&format!(r"!3d({n})!4d({n})", n = NUMBER)).unwrap();
    // @<lat>,<lng>,<zoom>z is the camera position
    static ref CAMERA: Regex = Regex::new(&format!(r"@({n}),({n})(?:,(\d+(?:\.\d+)?)z)?", n = NUMBER)).unwrap();
    static ref QUERY_PARAM: Regex = Regex::new(&format!(
        r"(?i)[?&](?:q|query|ll|center|destination|daddr)=({n})(?:,|%2C)(?:\+|%20)*({n})",
        n = NUMBER
    ))
    .unwrap();
    static ref ZOOM_PARAM: Regex = Regex::new(r"[?&]z(?:oom)?=(\d+(?:\.\d+)?)").unwrap();
    static ref BARE_PAIR: Regex = Regex::new(&format!(r"^\s*({n})\s*,\s*({n})\s*$", n = NUMBER)).unwrap();
    static ref SHORT_LINK: Regex = Regex::new(r"(?i)^(?:https?://)?(?:maps\.app\.goo\.gl|goo\.gl/maps)/").unwrap();
}

/// Where in the link the position came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    PlaceData,
    Camera,
    QueryParameter,
    Coordinates,
}

/// Position extracted from a map link
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapLocation {
    pub point: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u8>,
    pub source: LocationSource,
}

/// Extract a position from a map link or coordinate string
///
/// Candidates are tried from most to least precise; a candidate outside the
/// valid lat/lng range is skipped.
pub fn parse_maps_url(input: &str) -> GeoResult<MapLocation> {
    let input = input.trim();

    if SHORT_LINK.is_match(input) {
        return Err(GeoError::ShortLinkUnsupported(input.to_string()));
    }

    let zoom = camera_zoom(input).or_else(|| capture_zoom(&ZOOM_PARAM, input));

    let candidates: [(&Regex, LocationSource); 4] = [
        (&*PLACE_DATA, LocationSource::PlaceData),
        (&*CAMERA, LocationSource::Camera),
        (&*QUERY_PARAM, LocationSource::QueryParameter),
        (&*BARE_PAIR, LocationSource::Coordinates),
    ];

    for (pattern, source) in candidates {
        for caps in pattern.captures_iter(input) {
            let point = match (caps[1].parse::<f64>(), caps[2].parse::<f64>()) {
                (Ok(lat), Ok(lng)) => Point::new(lat, lng),
                _ => continue,
            };
            if !point.is_valid() {
                debug!("Skipping out-of-range {:?} candidate {}", source, point);
                continue;
            }
            debug!("Found {:?} location {} in '{}'", source, point, input);
            return Ok(MapLocation { point, zoom, source });
        }
    }

    Err(GeoError::UnrecognizedLocation(input.to_string()))
}

fn camera_zoom(input: &str) -> Option<u8> {
    CAMERA
        .captures(input)
        .and_then(|caps| caps.get(3))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(to_zoom)
}

fn capture_zoom(pattern: &Regex, input: &str) -> Option<u8> {
    pattern
        .captures(input)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .map(to_zoom)
}

fn to_zoom(value: f64) -> u8 {
    value.round().clamp(0.0, 22.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_link_prefers_pin_over_camera() {
        let url = "https://www.google.com/maps/place/Bar+The+Clinic/@-33.4372,-70.6380,17z/\
                   data=!3m1!4b1!4m6!3m5!1s0x0:0x0!8m2!3d-33.4369!4d-70.6355";
        let loc = parse_maps_url(url).unwrap();
        assert_eq!(loc.source, LocationSource::PlaceData);
        assert_eq!(loc.point, Point::new(-33.4369, -70.6355));
        assert_eq!(loc.zoom, Some(17));
    }

    #[test]
    fn test_camera_only() {
        let loc = parse_maps_url("https://www.google.com/maps/@-33.4489,-70.6693,15.5z").unwrap();
        assert_eq!(loc.source, LocationSource::Camera);
        assert_eq!(loc.point, Point::new(-33.4489, -70.6693));
        assert_eq!(loc.zoom, Some(16));
    }

    #[test]
    fn test_query_parameters() {
        let loc = parse_maps_url("https://www.google.com/maps/search/?api=1&query=-33.4489%2C-70.6693").unwrap();
        assert_eq!(loc.source, LocationSource::QueryParameter);
        assert_eq!(loc.point, Point::new(-33.4489, -70.6693));

        let loc = parse_maps_url("https://maps.google.com/?q=-33.43,+-70.61&z=14").unwrap();
        assert_eq!(loc.point, Point::new(-33.43, -70.61));
        assert_eq!(loc.zoom, Some(14));

        let loc = parse_maps_url("https://maps.google.com/maps?ll=51.5074,-0.1278").unwrap();
        assert_eq!(loc.point, Point::new(51.5074, -0.1278));
    }

    #[test]
    fn test_bare_coordinates() {
        let loc = parse_maps_url(" -33.4489, -70.6693 ").unwrap();
        assert_eq!(loc.source, LocationSource::Coordinates);
        assert_eq!(loc.zoom, None);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            parse_maps_url("https://www.google.com/maps/@123.0,45.0,10z"),
            Err(GeoError::UnrecognizedLocation(_))
        ));
    }

    #[test]
    fn test_short_link() {
        assert!(matches!(
            parse_maps_url("https://maps.app.goo.gl/AbCdEf123"),
            Err(GeoError::ShortLinkUnsupported(_))
        ));
    }

    #[test]
    fn test_no_location() {
        assert!(matches!(
            parse_maps_url("https://www.google.com/maps/place/Bar+Nacional"),
            Err(GeoError::UnrecognizedLocation(_))
        ));
    }
}
