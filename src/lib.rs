// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`favicongen` renders the EduProof brand icon into the fixed set of
favicon PNGs served by the web app.

The source icon lives at `public/brand/eduproof-icon.svg` and is
rasterized from scratch at every target size, so small favicons are not
blurry downscales of the big ones. The social media card at
`public/brand/og/eduproof-og.svg` is rendered the same way, at its
intrinsic size.

All paths are resolved against a caller-provided project root; the CLI
anchors it at the crate root.
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::uninlined_format_args)]

pub use tiny_skia;
pub use usvg;

pub mod favicon;
pub mod og;

mod load;
mod render;

pub use load::load_svg;
pub use render::{render_original, render_to_size};

use std::path;

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// Failed to read a source SVG file.
    ReadFailed(path::PathBuf, std::io::Error),

    /// The source SVG could not be parsed.
    ParsingFailed(usvg::Error),

    /// The raster target has a zero area.
    ZeroSize,

    /// Failed to write a PNG file.
    WriteFailed(path::PathBuf, png::EncodingError),
}

impl From<usvg::Error> for Error {
    fn from(e: usvg::Error) -> Self {
        Error::ParsingFailed(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::ReadFailed(ref path, ref e) => {
                write!(f, "failed to read '{}' cause {}", path.display(), e)
            }
            Error::ParsingFailed(ref e) => {
                write!(f, "failed to parse the SVG cause {}", e)
            }
            Error::ZeroSize => {
                write!(f, "target size is zero")
            }
            Error::WriteFailed(ref path, ref e) => {
                write!(f, "failed to write '{}' cause {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for Error {}
