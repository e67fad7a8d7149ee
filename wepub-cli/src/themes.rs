//! Theme repository: discovery and loading of `*.css` theme files.

use std::fs;
use std::io;
use std::path::Path;

use wepub_render::{parse_theme, parse_theme_metadata, Theme, ThemeStyles};

/// The set of themes discovered in a theme directory.
///
/// Built once per invocation; discovery order is the sorted file stem,
/// so listings are stable across runs.
#[derive(Debug, Clone, Default)]
pub struct ThemeRepository {
    themes: Vec<Theme>,
}

impl ThemeRepository {
    /// Scan `directory` for `*.css` files. Files that cannot be read
    /// are skipped; a missing directory is an error.
    pub fn load(directory: &Path) -> io::Result<Self> {
        let mut themes = Vec::new();
        for entry in fs::read_dir(directory)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("css") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let Ok(css) = fs::read_to_string(&path) else {
                continue;
            };
            let metadata = parse_theme_metadata(&css);
            themes.push(Theme {
                id: id.to_string(),
                name: metadata.name.unwrap_or_else(|| id.to_string()),
                path: path.clone(),
                author: metadata.author,
                description: metadata.description,
                version: metadata.version,
            });
        }
        themes.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(ThemeRepository { themes })
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    /// Read and parse the named theme's stylesheet.
    pub fn styles(&self, id: &str) -> Option<io::Result<ThemeStyles>> {
        let theme = self.get(id)?;
        Some(fs::read_to_string(&theme.path).map(|css| parse_theme(&css)))
    }
}
