//! A tour visualization command line interface library: input and config readers shared by
//! the `tour-plot` binary commands.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod extensions;
