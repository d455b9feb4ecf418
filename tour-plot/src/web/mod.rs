//! Contains the interactive map renderer which produces a standalone Leaflet html document.

mod leaflet;
pub use self::leaflet::*;

mod route_map;
pub use self::route_map::*;
