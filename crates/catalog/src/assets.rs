use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;

/// Where an image is shown from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageSource {
    File { path: String },
    /// Generated inline graphic used when the file is missing.
    Placeholder { data_uri: String },
}

/// Where a decorative model comes from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeshSource {
    File { path: String },
    /// Simple primitive rendered in place of the model.
    Placeholder { size: f64 },
}

/// A gray panel with `label` centered on it, as an SVG data URI.
pub fn placeholder_svg(label: &str, width: u32, height: u32) -> String {
    let label = label
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}'>\
         <rect width='100%' height='100%' fill='#374151'/>\
         <text x='50%' y='50%' text-anchor='middle' dy='.3em' fill='#d1d5db'>{label}</text></svg>"
    );
    format!("data:image/svg+xml,{}", urlencoding::encode(&svg))
}

/// Resolves `path`, substituting a labelled placeholder when it is missing.
///
/// Missing files are never an error.
pub fn resolve_image(path: &str, label: &str, exists: impl Fn(&str) -> bool) -> ImageSource {
    if exists(path) {
        return ImageSource::File {
            path: path.to_string(),
        };
    }
    warn!(path, "image missing, using placeholder");
    ImageSource::Placeholder {
        data_uri: placeholder_svg(label, 300, 400),
    }
}

pub fn resolve_mesh(
    path: &str,
    placeholder_size: f64,
    exists: impl Fn(&str) -> bool,
) -> MeshSource {
    if exists(path) {
        return MeshSource::File {
            path: path.to_string(),
        };
    }
    warn!(path, "mesh missing, using placeholder primitive");
    MeshSource::Placeholder {
        size: placeholder_size,
    }
}

/// Existence check for site-absolute paths ("/images/a.jpg") under a static
/// asset directory.
pub fn exists_under(root: &Path) -> impl Fn(&str) -> bool + '_ {
    move |path: &str| site_path(root, path).is_file()
}

fn site_path(root: &Path, path: &str) -> PathBuf {
    root.join(path.trim_start_matches('/'))
}
