//! Plain `.xml` copy of the source map, for loaders that only look for that
//! extension at runtime.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn emit(stem: &str, xml: &str, out_dir: &Path) -> io::Result<PathBuf> {
    let path = out_dir.join(format!("{stem}.xml"));
    fs::write(&path, xml)?;
    Ok(path)
}
