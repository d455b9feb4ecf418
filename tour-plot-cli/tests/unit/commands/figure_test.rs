use super::*;

const INPUT_PATH: &str = "../data/germany.tour.json";
const BREAKDOWN_INPUT_PATH: &str = "../data/germany.breakdown.json";
const FULL_CONFIG_PATH: &str = "../data/config/config.full.json";

struct DummyWrite {}

impl Write for DummyWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn run_figure_with_args(args: Vec<&str>) -> Result<(), String> {
    let matches = get_figure_app().try_get_matches_from(args).unwrap();

    run_figure(&matches, |_| BufWriter::new(Box::new(DummyWrite {})))
}

#[test]
fn can_run_figure_into_svg_file() {
    let directory = tempfile::tempdir().unwrap();
    let out_path = directory.path().join("figure.svg");

    run_figure_with_args(vec!["figure", INPUT_PATH, "--out-result", out_path.to_str().unwrap()]).unwrap();

    let svg = std::fs::read_to_string(&out_path).unwrap();
    assert!(svg.contains("Full Graph"));
    assert!(svg.contains("TSP Path Total time: 17.25 hours"));
    assert!(svg.contains("3: Munich"));
}

#[test]
fn can_run_figure_into_writer() {
    run_figure_with_args(vec!["figure", BREAKDOWN_INPUT_PATH]).unwrap();
}

#[test]
fn can_run_figure_with_config_and_basemap() {
    let directory = tempfile::tempdir().unwrap();
    let out_path = directory.path().join("figure.svg");
    let tiles_path = directory.path().join("tiles");

    run_figure_with_args(vec![
        "figure",
        INPUT_PATH,
        "-c",
        FULL_CONFIG_PATH,
        "--basemap",
        "--tiles",
        tiles_path.to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
    ])
    .unwrap();

    let svg = std::fs::read_to_string(&out_path).unwrap();
    assert!(svg.contains("width=\"1200\""));
    assert!(!svg.contains("255.3"));
}

#[test]
fn can_fail_figure_with_unknown_input() {
    let result = run_figure_with_args(vec!["figure", "../data/unknown.json"]);

    assert!(result.unwrap_err().starts_with("cannot open input file '../data/unknown.json'"));
}

#[test]
fn can_fail_figure_with_unsupported_format() {
    let directory = tempfile::tempdir().unwrap();
    let out_path = directory.path().join("figure.bmp");

    let result = run_figure_with_args(vec!["figure", INPUT_PATH, "-o", out_path.to_str().unwrap()]);

    assert!(result.unwrap_err().contains("unsupported figure format"));
}

#[test]
fn can_fail_figure_with_invalid_config() {
    let result = run_figure_with_args(vec!["figure", INPUT_PATH, "-c", "../data/config/config.invalid-color.json"]);

    assert_eq!(result.unwrap_err(), "cannot create figure style: 'unknown color name: 'not-a-color''");
}
