//! Contains input models: a graph, node locations and names, a tour with its cost.

mod graph;
pub use self::graph::*;

mod input;
pub use self::input::*;

mod location;
pub use self::location::*;

mod tour;
pub use self::tour::*;
