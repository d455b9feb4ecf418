#[cfg(test)]
#[path = "../../tests/unit/commands/map_test.rs"]
mod map_test;

use super::*;
use tour_plot::models::Priority;
use tour_plot::web::plot_route_map;

const PRIORITY_ARG_NAME: &str = "priority";

pub fn get_map_app() -> Command {
    Command::new("map")
        .about("Renders an interactive web map with the tour as a standalone html document")
        .arg(input_arg())
        .arg(out_result_arg("html file"))
        .arg(config_arg())
        .arg(
            Arg::new(PRIORITY_ARG_NAME)
                .help("Overrides the cost type of a single tour cost: time, distance, cost or their index")
                .short('p')
                .long(PRIORITY_ARG_NAME)
                .required(false),
        )
        .arg(log_arg())
}

pub fn run_map(matches: &ArgMatches, out_writer_func: OutWriterFunc) -> Result<(), String> {
    let input = read_input(matches)?;
    let config = read_config_arg(matches)?;
    let logger = config.create_logger(matches.get_flag(LOG_ARG_NAME));

    let priority = matches
        .get_one::<String>(PRIORITY_ARG_NAME)
        .map(|value| value.parse::<Priority>().map_err(|err| format!("cannot get priority: '{err}'")))
        .transpose()?
        .unwrap_or(input.priority);

    let style = config.map_style().map_err(|err| format!("cannot create map style: '{err}'"))?;
    let map = plot_route_map(&input.tour, &input.positions, &input.names, priority, &style)
        .map_err(|err| format!("cannot create map: '{err}'"))?;

    logger(&format!("map: {} markers, centered at ({}, {})", map.markers().len(), map.center().lat, map.center().lng));

    match get_out_path(matches) {
        Some(out_path) => {
            map.save(out_path).map_err(|err| err.to_string())?;
            logger(&format!("map is saved to '{out_path}'"));

            Ok(())
        }
        None => {
            let html = map.to_html().map_err(|err| format!("cannot render map: '{err}'"))?;
            let mut writer = out_writer_func(None);

            writer.write_all(html.as_bytes()).map_err(|err| format!("cannot write map: '{err}'"))
        }
    }
}
