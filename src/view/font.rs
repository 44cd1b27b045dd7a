//! Font discovery for labels
//!
//! No font ships with the binary. A configured `font_path` wins; otherwise a
//! few well-known system locations are tried. Rendering works without a font,
//! just without text.

use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};

const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Parse a font file
pub fn load_font_file(path: &Path) -> anyhow::Result<Font> {
    let bytes = std::fs::read(path)?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow::anyhow!("Failed to load font {}: {}", path.display(), e))
}

/// Load the configured font, or the first system font that parses
pub fn load_font(configured: Option<&Path>) -> Option<Font> {
    let candidates = configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from));

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_font_file(&path) {
            Ok(font) => {
                tracing::debug!("Using font {}", path.display());
                return Some(font);
            }
            Err(e) => tracing::warn!("{}", e),
        }
    }

    tracing::warn!("No usable font found, cell labels are disabled");
    None
}
