//! Scene name → map file name rule (`Level_3` → `Map_03`).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("scene name `{0}` is invalid: it must contain an underscore and a level number, eg. Map_01")]
pub struct SceneNameError(pub String);

/// Stem of the TMX file that belongs to `scene`.
///
/// The level number is whatever follows the first `_`; it is zero padded to
/// two digits.
pub fn map_name_for_scene(scene: &str) -> Result<String, SceneNameError> {
    let invalid = || SceneNameError(scene.to_string());

    let (_, level) = scene.split_once('_').ok_or_else(invalid)?;
    // `Level_3_night` still names level 3
    let level = level.split('_').next().unwrap_or(level);
    let index: u32 = level.trim().parse().map_err(|_| invalid())?;

    Ok(format!("Map_{index:02}"))
}
