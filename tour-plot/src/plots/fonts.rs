#[cfg(test)]
#[path = "../../tests/unit/plots/fonts_test.rs"]
mod fonts_test;

use crate::utils::GenericResult;
use font_kit::family_name::FamilyName;
use font_kit::properties::{Properties, Weight};
use font_kit::source::SystemSource;
use plotters::style::{FontStyle, register_font};
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex};

/// Keeps families registered from a font file or, when the path is not set, from system fonts.
static REGISTERED_FONTS: LazyLock<Mutex<FxHashSet<(String, Option<PathBuf>)>>> =
    LazyLock::new(|| Mutex::new(FxHashSet::default()));

/// Registers a font file for the given family in normal and bold styles.
/// Font data lives till the end of the process, repeated calls with the same arguments are no-op.
pub fn register_font_file(family: &str, path: &Path) -> GenericResult<()> {
    register_once(family, Some(path), || {
        let data = std::fs::read(path).map_err(|err| format!("cannot read font '{}': '{err}'", path.display()))?;
        let data = leak_font_data(data);

        [FontStyle::Normal, FontStyle::Bold]
            .into_iter()
            .try_for_each(|style| register_font_data(family, style, data, path.display().to_string().as_str()))
    })
}

/// Registers the best matching system font for the given family in normal and bold styles.
/// Generic family names (`sans-serif`, `serif`, `monospace`) are resolved by the system font source.
pub fn register_system_font(family: &str) -> GenericResult<()> {
    register_once(family, None, || {
        let normal = load_system_font(family, &Properties::new())?;
        let bold = load_system_font(family, Properties::new().weight(Weight::BOLD)).unwrap_or(normal);

        register_font_data(family, FontStyle::Normal, normal, family)?;
        register_font_data(family, FontStyle::Bold, bold, family)
    })
}

fn register_once<F>(family: &str, path: Option<&Path>, register_fn: F) -> GenericResult<()>
where
    F: FnOnce() -> GenericResult<()>,
{
    let mut registered = REGISTERED_FONTS.lock().map_err(|_| "font registry is poisoned")?;
    let key = (family.to_string(), path.map(Path::to_path_buf));

    if registered.contains(&key) {
        return Ok(());
    }

    register_fn()?;
    registered.insert(key);

    Ok(())
}

fn load_system_font(family: &str, properties: &Properties) -> GenericResult<&'static [u8]> {
    let family_name = match family {
        "sans-serif" => FamilyName::SansSerif,
        "serif" => FamilyName::Serif,
        "monospace" => FamilyName::Monospace,
        _ => FamilyName::Title(family.to_string()),
    };

    let not_found =
        || format!("cannot find a system font for family '{family}', specify a font file in the figure style");

    let handle = SystemSource::new().select_best_match(&[family_name], properties).map_err(|_| not_found())?;
    let font = handle.load().map_err(|_| not_found())?;
    let data = font.copy_font_data().ok_or_else(not_found)?;

    Ok(leak_font_data(data.as_ref().clone()))
}

fn register_font_data(family: &str, style: FontStyle, data: &'static [u8], source: &str) -> GenericResult<()> {
    register_font(family, style, data).map_err(|_| format!("cannot register font '{source}'").into())
}

fn leak_font_data(data: Vec<u8>) -> &'static [u8] {
    Box::leak(data.into_boxed_slice())
}
