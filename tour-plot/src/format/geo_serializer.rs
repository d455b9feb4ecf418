#[cfg(test)]
#[path = "../../tests/unit/format/geo_serializer_test.rs"]
mod geo_serializer_test;

use crate::models::{Names, Positions, Tour, get_name, get_position};
use crate::utils::{GenericResult, compare_floats};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::io::{BufWriter, Write};

const START_COLOR: &str = "#ff0000";
const STOP_COLOR: &str = "#0000ff";
const ROUTE_COLOR: &str = "#ff0000";

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
pub(crate) enum Geometry {
    Point { coordinates: (f64, f64) },
    LineString { coordinates: Vec<(f64, f64)> },
}

#[derive(Clone, Debug, Serialize, Eq, PartialEq)]
#[serde(tag = "type")]
pub(crate) struct Feature {
    pub properties: BTreeMap<String, String>,
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Eq, PartialEq)]
#[serde(tag = "type")]
pub(crate) struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl Eq for Geometry {}

impl PartialEq for Geometry {
    fn eq(&self, other: &Self) -> bool {
        let compare_pair = |l_coord: &(f64, f64), r_coord: &(f64, f64)| {
            compare_floats(l_coord.0, r_coord.0) == Ordering::Equal
                && compare_floats(l_coord.1, r_coord.1) == Ordering::Equal
        };

        match (self, other) {
            (Geometry::Point { coordinates: l_coord }, Geometry::Point { coordinates: r_coord }) => {
                compare_pair(l_coord, r_coord)
            }
            (Geometry::LineString { coordinates: l_coords }, Geometry::LineString { coordinates: r_coords }) => {
                l_coords.len() == r_coords.len()
                    && l_coords.iter().zip(r_coords.iter()).all(|(l_coord, r_coord)| compare_pair(l_coord, r_coord))
            }
            _ => false,
        }
    }
}

/// Serializes tour into geo json format: a point per visit and a line string for the route.
pub fn serialize_tour_as_geojson<W: Write>(
    writer: BufWriter<W>,
    tour: &Tour,
    positions: &Positions,
    names: &Names,
) -> GenericResult<()> {
    let geo_json = create_tour_geojson(tour, positions, names)?;

    serde_json::to_writer_pretty(writer, &geo_json).map_err(From::from)
}

pub(crate) fn create_tour_geojson(tour: &Tour, positions: &Positions, names: &Names) -> GenericResult<FeatureCollection> {
    let stops = tour
        .path
        .iter()
        .enumerate()
        .map(|(order, &node)| {
            let color = if order == 0 { START_COLOR } else { STOP_COLOR };

            Ok(Feature {
                properties: slice_to_map(&[
                    ("marker-color", color),
                    ("marker-size", "medium"),
                    ("marker-symbol", "marker"),
                    ("name", get_name(names, node)?),
                    ("order", order.to_string().as_str()),
                ]),
                geometry: Geometry::Point { coordinates: get_position(positions, node)?.as_lng_lat() },
            })
        })
        .collect::<GenericResult<Vec<_>>>()?;

    let route = Feature {
        properties: slice_to_map(&[("stroke-width", "5"), ("stroke-opacity", "0.8"), ("stroke", ROUTE_COLOR)]),
        geometry: Geometry::LineString {
            coordinates: tour
                .path
                .iter()
                .map(|&node| get_position(positions, node).map(|point| point.as_lng_lat()))
                .collect::<GenericResult<Vec<_>>>()?,
        },
    };

    Ok(FeatureCollection { features: stops.into_iter().chain(std::iter::once(route)).collect() })
}

fn slice_to_map(vec: &[(&str, &str)]) -> BTreeMap<String, String> {
    vec.iter().map(|&(key, value)| (key.to_string(), value.to_string())).collect()
}
