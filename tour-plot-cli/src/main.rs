//! A command line interface to visualize a graph with a traveling salesman tour.
//!
//! ## Usage
//!
//! - render a static figure with the full graph and the tour
//!
//!     `tour-plot figure tour.json -o figure.svg`
//!
//! - render the same figure over basemap tiles from a local tile cache
//!
//!     `tour-plot figure tour.json --basemap --tiles ./tiles -o figure.svg`
//!
//! - render an interactive map
//!
//!     `tour-plot map tour.json --priority distance -o map.html`
//!
//! - export the tour as geojson
//!
//!     `tour-plot geojson tour.json -o tour.geojson`
//!
//! For more details, simply run
//!
//!     tour-plot --help

mod commands;

use self::commands::figure::{get_figure_app, run_figure};
use self::commands::geojson::{get_geojson_app, run_geojson};
use self::commands::map::{get_map_app, run_map};
use self::commands::{OutWriterFunc, create_write_buffer};
use clap::{ArgMatches, Command};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    if let Err(err) = run_subcommand(matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn get_app() -> Command {
    Command::new("tour-plot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to visualize a graph with a traveling salesman tour")
        .subcommand(get_figure_app())
        .subcommand(get_map_app())
        .subcommand(get_geojson_app())
}

fn run_subcommand(matches: ArgMatches) -> Result<(), String> {
    let out_writer_func: OutWriterFunc = create_write_buffer;

    match matches.subcommand() {
        Some(("figure", figure_matches)) => run_figure(figure_matches, out_writer_func),
        Some(("map", map_matches)) => run_map(map_matches, out_writer_func),
        Some(("geojson", geojson_matches)) => run_geojson(geojson_matches, out_writer_func),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    }
}
