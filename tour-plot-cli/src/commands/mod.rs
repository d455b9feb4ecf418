use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod figure;
pub mod geojson;
pub mod map;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use tour_plot::models::PlotInput;
use tour_plot_cli::extensions::config::{Config, read_config};
use tour_plot_cli::extensions::input::read_plot_input;

const INPUT_ARG_NAME: &str = "INPUT";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const CONFIG_ARG_NAME: &str = "config";
const LOG_ARG_NAME: &str = "log";

/// A function type which creates output writer for an optional output file.
pub type OutWriterFunc = fn(Option<File>) -> BufWriter<Box<dyn Write>>;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn input_arg() -> Arg {
    Arg::new(INPUT_ARG_NAME).help("Sets the plot input file: graph, positions, names and tour").required(true).index(1)
}

fn out_result_arg(description: &str) -> Arg {
    Arg::new(OUT_RESULT_ARG_NAME)
        .help(format!("Specifies path to the {description}, stdout is used when not set"))
        .short('o')
        .long(OUT_RESULT_ARG_NAME)
        .required(false)
}

fn config_arg() -> Arg {
    Arg::new(CONFIG_ARG_NAME)
        .help("Specifies path to the visualization config file")
        .short('c')
        .long(CONFIG_ARG_NAME)
        .required(false)
}

fn log_arg() -> Arg {
    Arg::new(LOG_ARG_NAME).help("Enables logging to stdout").long(LOG_ARG_NAME).action(ArgAction::SetTrue)
}

fn read_input(matches: &ArgMatches) -> Result<PlotInput, String> {
    let input_path = matches.get_one::<String>(INPUT_ARG_NAME).ok_or("input file is not specified")?;
    let input_file = open_file(input_path, "input")?;

    read_plot_input(BufReader::new(input_file)).map_err(|err| format!("cannot read input from '{input_path}': '{err}'"))
}

fn read_config_arg(matches: &ArgMatches) -> Result<Config, String> {
    match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(config_path) => {
            let config_file = open_file(config_path, "config")?;
            read_config(BufReader::new(config_file))
                .map_err(|err| format!("cannot read config from '{config_path}': '{err}'"))
        }
        None => Ok(Config::default()),
    }
}

fn get_out_path(matches: &ArgMatches) -> Option<&str> {
    matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| path.as_str())
}
