// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Open Graph card pass.

use std::path::{Path, PathBuf};

use crate::{load, render, Error};

/// The card source path, relative to the project root.
pub const CARD_SVG_PATH: &str = "public/brand/og/eduproof-og.svg";

/// The card output path, relative to the project root.
pub const CARD_PNG_PATH: &str = "public/brand/og/eduproof-og.png";

/// Renders the social media card at its intrinsic size.
///
/// The output is written next to the source and overwritten in place.
/// Returns the output path.
pub fn generate(root: &Path) -> Result<PathBuf, Error> {
    let tree = load::load_svg(&root.join(CARD_SVG_PATH))?;
    let pixmap = render::render_original(&tree)?;

    let path = root.join(CARD_PNG_PATH);
    pixmap
        .save_png(&path)
        .map_err(|e| Error::WriteFailed(path.clone(), e))?;

    Ok(path)
}
