//! Plot input reader.

#[cfg(test)]
#[path = "../../tests/unit/extensions/input_test.rs"]
mod input_test;

use std::io::{BufReader, Read};
use tour_plot::models::PlotInput;

/// Reads plot input from json: graph, positions, names, tour and, optionally, priority.
pub fn read_plot_input<R: Read>(reader: BufReader<R>) -> Result<PlotInput, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize plot input: '{err}'"))
}
