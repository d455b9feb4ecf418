use super::*;

#[test]
fn can_fail_to_register_missing_font_file() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("missing.ttf");

    let err = register_font_file("missing-font-file", &path).unwrap_err().to_string();

    assert!(err.starts_with("cannot read font"));
}

#[test]
fn can_fail_to_register_invalid_font_data() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("invalid.ttf");
    std::fs::write(&path, b"not a font").unwrap();

    let err = register_font_file("invalid-font-data", &path).unwrap_err().to_string();

    assert_eq!(err, format!("cannot register font '{}'", path.display()));
}

#[test]
fn can_register_font_file_again_after_failure() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("later.ttf");

    assert!(register_font_file("registered-later", &path).is_err());
    assert!(register_font_file("registered-later", &path).is_err());
}

#[test]
fn can_register_system_font_or_explain_missing_font() {
    match register_system_font("sans-serif") {
        Ok(()) => assert!(register_system_font("sans-serif").is_ok()),
        Err(err) => assert!(err.to_string().contains("cannot find a system font for family 'sans-serif'")),
    }
}
