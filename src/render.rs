// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::Error;

/// Renders the tree into a square pixmap of the given size.
///
/// Both axes are scaled independently, so a non-square source is
/// stretched to fill the target exactly.
pub fn render_to_size(tree: &usvg::Tree, size: u32) -> Result<tiny_skia::Pixmap, Error> {
    let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(Error::ZeroSize)?;

    let ts = tiny_skia::Transform::from_scale(
        size as f32 / tree.size().width(),
        size as f32 / tree.size().height(),
    );
    resvg::render(tree, ts, &mut pixmap.as_mut());

    Ok(pixmap)
}

/// Renders the tree at its intrinsic size.
pub fn render_original(tree: &usvg::Tree) -> Result<tiny_skia::Pixmap, Error> {
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(Error::ZeroSize)?;

    resvg::render(tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(pixmap)
}
