#[cfg(test)]
#[path = "../../tests/unit/commands/figure_test.rs"]
mod figure_test;

use super::*;
use std::sync::Arc;
use tour_plot::basemap::DirectoryTileSource;
use tour_plot::plots::StaticFigure;

const BASEMAP_ARG_NAME: &str = "basemap";
const TILES_ARG_NAME: &str = "tiles";

pub fn get_figure_app() -> Command {
    Command::new("figure")
        .about("Renders a static figure with the full graph and the highlighted tour")
        .arg(input_arg())
        .arg(out_result_arg("figure file: svg or png"))
        .arg(config_arg())
        .arg(
            Arg::new(BASEMAP_ARG_NAME)
                .help("Projects nodes to Web Mercator and draws them over basemap tiles")
                .long(BASEMAP_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(TILES_ARG_NAME)
                .help("Specifies a directory with basemap tiles in {z}/{x}/{y}.png layout")
                .short('t')
                .long(TILES_ARG_NAME)
                .required(false),
        )
        .arg(log_arg())
}

pub fn run_figure(matches: &ArgMatches, out_writer_func: OutWriterFunc) -> Result<(), String> {
    let input = read_input(matches)?;
    let config = read_config_arg(matches)?;

    let style = config.figure_style().map_err(|err| format!("cannot create figure style: '{err}'"))?;
    let use_basemap = matches.get_flag(BASEMAP_ARG_NAME) || config.is_basemap_enabled();
    let basemap = config.basemap.clone().unwrap_or_default();
    let tiles_dir = matches.get_one::<String>(TILES_ARG_NAME).map(From::from).or(basemap.tiles_dir);

    let mut figure = StaticFigure::new(input)
        .with_style(style)
        .with_basemap(use_basemap)
        .with_basemap_zoom(basemap.zoom)
        .with_logger(config.create_logger(matches.get_flag(LOG_ARG_NAME)));

    if let Some(tiles_dir) = tiles_dir {
        figure = figure.with_tile_source(Arc::new(DirectoryTileSource::new(tiles_dir)));
    }

    match get_out_path(matches) {
        Some(out_path) => figure.save(out_path).map_err(|err| err.to_string()),
        None => {
            let svg = figure.to_svg().map_err(|err| format!("cannot render figure: '{err}'"))?;
            let mut writer = out_writer_func(None);

            writer.write_all(svg.as_bytes()).map_err(|err| format!("cannot write figure: '{err}'"))
        }
    }
}
