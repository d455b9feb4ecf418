#[cfg(test)]
#[path = "../../tests/unit/commands/geojson_test.rs"]
mod geojson_test;

use super::*;
use tour_plot::format::serialize_tour_as_geojson;

pub fn get_geojson_app() -> Command {
    Command::new("geojson")
        .about("Exports the tour as geojson: a point per visit and a line string for the route")
        .arg(input_arg())
        .arg(out_result_arg("geojson file"))
}

pub fn run_geojson(matches: &ArgMatches, out_writer_func: OutWriterFunc) -> Result<(), String> {
    let input = read_input(matches)?;
    let out_file = get_out_path(matches).map(|path| create_file(path, "out geojson")).transpose()?;

    serialize_tour_as_geojson(out_writer_func(out_file), &input.tour, &input.positions, &input.names)
        .map_err(|err| format!("cannot write geojson: '{err}'"))
}
