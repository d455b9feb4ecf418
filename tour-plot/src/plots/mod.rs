//! Contains the static dual-panel renderer: the full graph on the left, the highlighted tour with
//! its ordered labels, legend and cost title on the right.

/// Type alias for the result of a drawing function.
pub type DrawResult<T> = Result<T, Box<dyn std::error::Error>>;

mod config;
pub use self::config::*;

mod drawing;

mod figure;
pub use self::figure::*;

mod fonts;
pub use self::fonts::*;
