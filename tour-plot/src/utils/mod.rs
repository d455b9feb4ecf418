//! This module contains helper functionality.

mod comparison;
pub use self::comparison::*;

mod error;
pub use self::error::*;

mod logging;
pub use self::logging::*;
