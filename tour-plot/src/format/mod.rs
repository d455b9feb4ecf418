//! Contains text formatting: ordered tour labels, legend, titles and serialization to geo json.

mod geo_serializer;
pub use self::geo_serializer::*;

mod labels;
pub use self::labels::*;

mod titles;
pub use self::titles::*;
