use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Font configuration for card surfaces.
///
/// Describes which fonts to make available without tying callers to fontdb.
/// Resolve it once with [`FontConfig::resolve`] and share the result between
/// renders.
#[derive(Clone, Debug)]
pub struct FontConfig {
    /// Custom font data to register (font file bytes).
    pub custom_fonts: Vec<CustomFont>,
    /// Concrete families to try for the generic sans-serif family, in priority order.
    pub sans_serif: Vec<String>,
    /// Whether to load system fonts (default: true).
    pub load_system_fonts: bool,
    /// Additional directories to scan for font files.
    pub font_dirs: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            custom_fonts: Vec::new(),
            sans_serif: vec![
                "Manrope".into(),
                "Arial".into(),
                "Helvetica".into(),
                "Liberation Sans".into(),
                "DejaVu Sans".into(),
            ],
            load_system_fonts: true,
            font_dirs: Vec::new(),
        }
    }
}

/// Raw font file data (TTF/OTF). Arc-wrapped for cheap cloning.
#[derive(Clone, Debug)]
pub struct CustomFont {
    pub data: Arc<Vec<u8>>,
}

impl FontConfig {
    /// Read a TTF/OTF file and register it as a custom font.
    pub fn add_font_file(&mut self, path: impl AsRef<Path>) -> std::io::Result<&mut Self> {
        let data = std::fs::read(path)?;
        self.custom_fonts.push(CustomFont {
            data: Arc::new(data),
        });
        Ok(self)
    }

    /// Scan fonts once; renders clone the result.
    pub fn resolve(&self) -> ResolvedFontConfig {
        ResolvedFontConfig::new(self)
    }
}

/// A [`FontConfig`] that has been resolved into a concrete font database.
///
/// Cloning clones the underlying database in memory (no filesystem scan).
#[derive(Clone)]
pub struct ResolvedFontConfig {
    pub(crate) fontdb: fontdb::Database,
}

impl ResolvedFontConfig {
    pub fn new(config: &FontConfig) -> Self {
        Self {
            fontdb: font_config_to_fontdb(config),
        }
    }

    /// Whether any loaded face declares the given family name.
    pub fn has_family(&self, family: &str) -> bool {
        has_family(&self.fontdb, family)
    }

    /// Number of loaded font faces.
    pub fn face_count(&self) -> usize {
        self.fontdb.len()
    }
}

impl std::fmt::Debug for ResolvedFontConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedFontConfig")
            .field("faces", &self.fontdb.len())
            .finish()
    }
}

/// Convert a [`FontConfig`] into a [`fontdb::Database`].
pub fn font_config_to_fontdb(config: &FontConfig) -> fontdb::Database {
    let mut db = fontdb::Database::new();

    if config.load_system_fonts {
        db.load_system_fonts();
    }

    for dir in &config.font_dirs {
        db.load_fonts_dir(dir);
    }

    for font in &config.custom_fonts {
        db.load_font_data(Vec::from(font.data.as_slice()));
    }

    // First available family wins
    let available: HashSet<String> = db
        .faces()
        .flat_map(|face| face.families.iter().map(|(fam, _lang)| fam.clone()))
        .collect();
    if let Some(family) = config.sans_serif.iter().find(|f| available.contains(*f)) {
        log::debug!("using {family} for sans-serif");
        db.set_sans_serif_family(family.as_str());
    }

    db
}

pub(crate) fn has_family(db: &fontdb::Database, family: &str) -> bool {
    db.faces()
        .any(|face| face.families.iter().any(|(name, _)| name == family))
}
