// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The favicon batch pass.

use std::path::{Path, PathBuf};

use crate::{load, render, Error};

/// Favicon sizes shipped with the web app, in generation order.
pub const SIZES: [u32; 7] = [16, 32, 48, 64, 128, 256, 512];

/// The brand icon path, relative to the project root.
pub const ICON_PATH: &str = "public/brand/eduproof-icon.svg";

/// Returns `public/favicon-<size>.png` under `root`.
pub fn output_path(root: &Path, size: u32) -> PathBuf {
    root.join("public").join(format!("favicon-{}.png", size))
}

/// Rasterizes the brand icon into one PNG per entry in [`SIZES`].
///
/// The icon is parsed once and rendered from scratch at every size.
/// `progress` is called after each file has been written. Existing
/// output files are overwritten in place; the first failure aborts the
/// remaining sizes and leaves the already written files behind.
pub fn generate<P>(root: &Path, mut progress: P) -> Result<(), Error>
where
    P: FnMut(&Path),
{
    let tree = load::load_svg(&root.join(ICON_PATH))?;

    for size in SIZES {
        let pixmap = render::render_to_size(&tree, size)?;

        let path = output_path(root, size);
        pixmap
            .save_png(&path)
            .map_err(|e| Error::WriteFailed(path.clone(), e))?;

        progress(&path);
    }

    Ok(())
}
