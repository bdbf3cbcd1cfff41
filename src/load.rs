// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;

use usvg::fontdb;

use crate::Error;

/// Reads and parses an SVG(Z) file into a render tree.
///
/// Relative references inside the file are resolved against its parent
/// directory.
pub fn load_svg(path: &Path) -> Result<usvg::Tree, Error> {
    let svg_data =
        std::fs::read(path).map_err(|e| Error::ReadFailed(path.to_path_buf(), e))?;

    let svg_data = if svg_data.starts_with(&[0x1f, 0x8b]) {
        usvg::decompress_svgz(&svg_data)?
    } else {
        svg_data
    };

    let svg_string =
        std::str::from_utf8(&svg_data).map_err(|_| Error::ParsingFailed(usvg::Error::NotAnUtf8Str))?;

    let xml_opt = usvg::roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let xml_tree = usvg::roxmltree::Document::parse_with_options(svg_string, xml_opt)
        .map_err(|e| Error::ParsingFailed(usvg::Error::ParsingFailed(e)))?;

    let mut opt = usvg::Options::default();
    opt.resources_dir = path.parent().map(|p| p.to_path_buf());

    // fontdb initialization is pretty expensive, so perform it only when needed.
    let mut fontdb = fontdb::Database::new();
    let has_text_nodes = xml_tree
        .descendants()
        .any(|n| n.has_tag_name(("http://www.w3.org/2000/svg", "text")));
    if has_text_nodes {
        fontdb.load_system_fonts();
    }

    usvg::Tree::from_xmltree(&xml_tree, &opt, &fontdb).map_err(Error::ParsingFailed)
}
