#[cfg(test)]
#[path = "../../tests/unit/web/leaflet_test.rs"]
mod leaflet_test;

use crate::basemap::TileProvider;
use crate::format::escape_html;
use crate::models::GeoPoint;
use crate::utils::GenericResult;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const LEAFLET_CSS: &str = "https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.css";
const LEAFLET_JS: &str = "https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.js";
const AWESOME_MARKERS_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css";
const AWESOME_MARKERS_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js";
const BOOTSTRAP_CSS: &str = "https://netdna.bootstrapcdn.com/bootstrap/3.0.0/css/bootstrap-glyphicons.css";

/// A marker icon color supported by awesome markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerColor {
    /// Red.
    Red,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Orange.
    Orange,
    /// Purple.
    Purple,
    /// Gray.
    Gray,
}

impl MarkerColor {
    /// Returns color name as used by awesome markers.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerColor::Red => "red",
            MarkerColor::Blue => "blue",
            MarkerColor::Green => "green",
            MarkerColor::Orange => "orange",
            MarkerColor::Purple => "purple",
            MarkerColor::Gray => "gray",
        }
    }
}

impl std::str::FromStr for MarkerColor {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "red" => Ok(MarkerColor::Red),
            "blue" => Ok(MarkerColor::Blue),
            "green" => Ok(MarkerColor::Green),
            "orange" => Ok(MarkerColor::Orange),
            "purple" => Ok(MarkerColor::Purple),
            "gray" | "grey" => Ok(MarkerColor::Gray),
            _ => Err(format!("unknown marker color: '{value}'")),
        }
    }
}

/// A marker with popup and tooltip. Texts are plain, they are escaped on rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Marker location.
    pub location: GeoPoint,
    /// Popup text.
    pub popup: String,
    /// Tooltip text.
    pub tooltip: String,
    /// Icon color.
    pub color: MarkerColor,
}

/// A polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct PolyLine {
    /// Line vertices.
    pub locations: Vec<GeoPoint>,
    /// Css color.
    pub color: String,
    /// Stroke width in pixels.
    pub weight: f64,
    /// Stroke opacity.
    pub opacity: f64,
}

#[derive(Serialize)]
struct MarkerData<'a> {
    location: (f64, f64),
    popup: String,
    tooltip: String,
    color: &'a str,
}

#[derive(Serialize)]
struct PolyLineData<'a> {
    locations: Vec<(f64, f64)>,
    color: &'a str,
    weight: f64,
    opacity: f64,
}

#[derive(Serialize)]
struct TileLayerData<'a> {
    url: &'a str,
    attribution: &'a str,
    #[serde(rename = "maxZoom")]
    max_zoom: u8,
}

/// An interactive web map.
#[derive(Clone, Debug)]
pub struct InteractiveMap {
    center: GeoPoint,
    zoom: u8,
    tile_provider: TileProvider,
    markers: Vec<Marker>,
    polylines: Vec<PolyLine>,
    html_elements: Vec<String>,
}

impl InteractiveMap {
    /// Creates a new instance of `InteractiveMap` with OpenStreetMap tiles.
    pub fn new(center: GeoPoint, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            tile_provider: TileProvider::default(),
            markers: vec![],
            polylines: vec![],
            html_elements: vec![],
        }
    }

    /// Sets tile provider.
    pub fn with_tile_provider(mut self, tile_provider: TileProvider) -> Self {
        self.tile_provider = tile_provider;
        self
    }

    /// Adds a marker.
    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Adds a polyline.
    pub fn add_polyline(&mut self, polyline: PolyLine) {
        self.polylines.push(polyline);
    }

    /// Adds raw html element into the document body. The element is not escaped.
    pub fn add_html_element(&mut self, html: String) {
        self.html_elements.push(html);
    }

    /// Returns map center.
    pub fn center(&self) -> GeoPoint {
        self.center
    }

    /// Returns initial zoom.
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Returns markers.
    pub fn markers(&self) -> &[Marker] {
        self.markers.as_slice()
    }

    /// Returns polylines.
    pub fn polylines(&self) -> &[PolyLine] {
        self.polylines.as_slice()
    }

    /// Returns html elements.
    pub fn html_elements(&self) -> &[String] {
        self.html_elements.as_slice()
    }

    /// Renders map as a standalone html document.
    pub fn to_html(&self) -> GenericResult<String> {
        let center = to_script_json(&(self.center.lat, self.center.lng))?;
        let tile_layer = to_script_json(&TileLayerData {
            url: self.tile_provider.url_template.as_str(),
            attribution: self.tile_provider.attribution.as_str(),
            max_zoom: self.tile_provider.max_zoom,
        })?;

        let markers = to_script_json(
            &self
                .markers
                .iter()
                .map(|marker| MarkerData {
                    location: (marker.location.lat, marker.location.lng),
                    popup: escape_html(marker.popup.as_str()),
                    tooltip: escape_html(marker.tooltip.as_str()),
                    color: marker.color.as_str(),
                })
                .collect::<Vec<_>>(),
        )?;

        let polylines = to_script_json(
            &self
                .polylines
                .iter()
                .map(|polyline| PolyLineData {
                    locations: polyline.locations.iter().map(|point| (point.lat, point.lng)).collect(),
                    color: polyline.color.as_str(),
                    weight: polyline.weight,
                    opacity: polyline.opacity,
                })
                .collect::<Vec<_>>(),
        )?;

        let elements = self.html_elements.join("\n");

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta http-equiv="content-type" content="text/html; charset=UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no" />
    <link rel="stylesheet" href="{LEAFLET_CSS}" />
    <link rel="stylesheet" href="{BOOTSTRAP_CSS}" />
    <link rel="stylesheet" href="{AWESOME_MARKERS_CSS}" />
    <script src="{LEAFLET_JS}"></script>
    <script src="{AWESOME_MARKERS_JS}"></script>
    <style>
        html, body {{ width: 100%; height: 100%; margin: 0; padding: 0; }}
        #map {{ position: absolute; top: 0; bottom: 0; right: 0; left: 0; }}
    </style>
</head>
<body>
{elements}
<div id="map"></div>
<script>
    const map = L.map("map", {{ center: {center}, zoom: {zoom} }});
    const tileLayer = {tile_layer};
    L.tileLayer(tileLayer.url, {{ attribution: tileLayer.attribution, maxZoom: tileLayer.maxZoom }}).addTo(map);

    const markers = {markers};
    for (const marker of markers) {{
        const icon = L.AwesomeMarkers.icon({{ markerColor: marker.color, icon: "info-sign", prefix: "glyphicon" }});
        L.marker(marker.location, {{ icon: icon }}).bindPopup(marker.popup).bindTooltip(marker.tooltip).addTo(map);
    }}

    const polylines = {polylines};
    for (const polyline of polylines) {{
        L.polyline(polyline.locations, {{ color: polyline.color, weight: polyline.weight, opacity: polyline.opacity }})
            .addTo(map);
    }}
</script>
</body>
</html>
"#,
            zoom = self.zoom,
        ))
    }

    /// Saves map as html document.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> GenericResult<()> {
        let path = path.as_ref();
        let html = self.to_html()?;

        let file = File::create(path).map_err(|err| format!("cannot create map file '{}': '{err}'", path.display()))?;
        let mut writer = BufWriter::new(file);

        writer.write_all(html.as_bytes())?;
        writer.flush()?;

        Ok(())
    }
}

/// Serializes value into json which is safe to embed into a script tag.
fn to_script_json<T: Serialize>(value: &T) -> GenericResult<String> {
    serde_json::to_string(value).map(|json| json.replace("</", "<\\/")).map_err(From::from)
}
