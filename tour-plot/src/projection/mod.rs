//! Contains coordinate projections used to place nodes on a figure and slippy map tile math
//! used to draw a basemap under them.

mod bounds;
pub use self::bounds::*;

mod mercator;
pub use self::mercator::*;

mod tiles;
pub use self::tiles::*;
