use crate::extract::{extract_icon, ExtractError};
use crate::index::IconIndex;
use crate::mappings::Mappings;
use image::RgbaImage;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Color variant of an icon set. Sheets exist in both colors with identical
/// geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconColor {
    #[default]
    Black,
    White,
}

/// Size variant of an icon set. The doubled sheets carry the same icons at
/// twice the pixel size, described by their own mappings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconScale {
    #[default]
    Regular,
    Doubled,
}

/// One of the four physical forms an icon exists in: color × scale.
///
/// The two axes are orthogonal and are always chosen by the caller; nothing
/// in the library guesses a variant. The default is black at regular size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IconVariant {
    pub color: IconColor,
    pub scale: IconScale,
}

impl IconVariant {
    pub const fn new(color: IconColor, scale: IconScale) -> Self {
        Self { color, scale }
    }
}

/// The four atlas sheets backing an icon set.
///
/// Geometry is shared per scale: `black` and `white` are described by the
/// regular-size mappings document, `black_2x` and `white_2x` by the
/// doubled-size one.
pub struct AtlasSet {
    pub black: RgbaImage,
    pub black_2x: RgbaImage,
    pub white: RgbaImage,
    pub white_2x: RgbaImage,
}

impl AtlasSet {
    pub fn sheet(&self, variant: IconVariant) -> &RgbaImage {
        match (variant.color, variant.scale) {
            (IconColor::Black, IconScale::Regular) => &self.black,
            (IconColor::Black, IconScale::Doubled) => &self.black_2x,
            (IconColor::White, IconScale::Regular) => &self.white,
            (IconColor::White, IconScale::Doubled) => &self.white_2x,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("no usable icon mappings for {scale:?} size")]
    MappingsUnavailable { scale: IconScale },
    #[error("no icon named \"{name}\"")]
    UnknownIcon { name: String },
    #[error(transparent)]
    OutOfBounds(#[from] ExtractError),
}

/// An icon set assembled from its mappings documents and atlas sheets.
///
/// Each scale's [IconIndex] is built on first use and kept for the lifetime
/// of the library. A mappings document that fails to parse is reported once
/// and remembered as unavailable; lookups against it keep failing cheaply
/// instead of re-parsing. [IconLibrary::reload] throws both indexes away so
/// they are rebuilt wholesale on the next lookup.
pub struct IconLibrary {
    mappings_json: String,
    mappings_2x_json: String,
    atlases: AtlasSet,
    regular: OnceCell<Option<IconIndex>>,
    doubled: OnceCell<Option<IconIndex>>,
}

impl IconLibrary {
    /// Creates a library from raw mappings JSON (regular and doubled size)
    /// and the four sheets. Nothing is parsed until the first lookup.
    pub fn new(mappings_json: String, mappings_2x_json: String, atlases: AtlasSet) -> Self {
        Self {
            mappings_json,
            mappings_2x_json,
            atlases,
            regular: OnceCell::new(),
            doubled: OnceCell::new(),
        }
    }

    pub fn atlases(&self) -> &AtlasSet {
        &self.atlases
    }

    /// The index for one scale, or `None` if that scale's mappings document
    /// doesn't parse.
    pub fn index(&self, scale: IconScale) -> Option<&IconIndex> {
        let (cell, json) = match scale {
            IconScale::Regular => (&self.regular, &self.mappings_json),
            IconScale::Doubled => (&self.doubled, &self.mappings_2x_json),
        };

        cell.get_or_init(|| match Mappings::parse(json) {
            Ok(mappings) => Some(IconIndex::new(mappings)),
            Err(_e) => {
                #[cfg(feature = "log")]
                log::warn!("icon mappings for {scale:?} size are unusable: {_e}");

                None
            }
        })
        .as_ref()
    }

    /// Resolves and slices one icon.
    ///
    /// Every failure is an ordinary value: the scale's mappings may be
    /// unusable, the name unknown, or the mapped square may fall outside its
    /// sheet. None of these abort anything beyond this one call.
    pub fn icon(&self, name: &str, variant: IconVariant) -> Result<RgbaImage, IconError> {
        let index = self
            .index(variant.scale)
            .ok_or(IconError::MappingsUnavailable {
                scale: variant.scale,
            })?;

        let (atlas, icon) = index.locate(name).ok_or_else(|| IconError::UnknownIcon {
            name: name.to_string(),
        })?;

        let slice = extract_icon(self.atlases.sheet(variant), icon, atlas.icon_size)?;

        Ok(slice)
    }

    /// Best-effort form of [IconLibrary::icon] for UI decoration: a missing
    /// icon becomes `None` so the caller can simply omit it.
    pub fn find_icon(&self, name: &str, variant: IconVariant) -> Option<RgbaImage> {
        match self.icon(name, variant) {
            Ok(slice) => Some(slice),
            Err(_e) => {
                #[cfg(feature = "log")]
                log::debug!("skipping {variant:?} icon {name:?} because {_e}");

                None
            }
        }
    }

    /// Drops both cached indexes. The next lookup re-parses the mappings
    /// and rebuilds the index it needs from scratch.
    pub fn reload(&mut self) {
        self.regular = OnceCell::new();
        self.doubled = OnceCell::new();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Paths to the six files an icon set ships as: two mappings documents and
/// four sheets.
#[derive(Debug, Clone)]
pub struct AtlasFiles {
    pub mappings: PathBuf,
    pub mappings_2x: PathBuf,
    pub black: PathBuf,
    pub black_2x: PathBuf,
    pub white: PathBuf,
    pub white_2x: PathBuf,
}

impl AtlasFiles {
    /// The conventional file names, all inside one directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            mappings: dir.join("mappings.json"),
            mappings_2x: dir.join("mappings@2x.json"),
            black: dir.join("icons-black.png"),
            black_2x: dir.join("icons-black@2x.png"),
            white: dir.join("icons-white.png"),
            white_2x: dir.join("icons-white@2x.png"),
        }
    }

    /// Reads all six files into an [IconLibrary].
    ///
    /// The sheets are decoded here; the mappings text is read but stays
    /// unparsed until the first lookup.
    pub fn load(&self) -> Result<IconLibrary, LoadError> {
        let mappings_json = std::fs::read_to_string(&self.mappings)?;
        let mappings_2x_json = std::fs::read_to_string(&self.mappings_2x)?;

        let atlases = AtlasSet {
            black: load_sheet(&self.black)?,
            black_2x: load_sheet(&self.black_2x)?,
            white: load_sheet(&self.white)?,
            white_2x: load_sheet(&self.white_2x)?,
        };

        Ok(IconLibrary::new(mappings_json, mappings_2x_json, atlases))
    }
}

fn load_sheet(path: &Path) -> Result<RgbaImage, LoadError> {
    Ok(image::open(path)?.to_rgba8())
}

/// Memoizes sliced icons per `(name, variant)`.
///
/// The same icon tends to be requested every frame of a UI session; slicing
/// it once and handing out the cached image is the cheap answer. The cache
/// is owned by whoever renders, not by the library.
#[derive(Default)]
pub struct IconCache {
    icons: HashMap<(String, IconVariant), RgbaImage>,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached form of [IconLibrary::find_icon]. A lookup that fails is not
    /// cached and will be attempted again.
    pub fn find_icon(
        &mut self,
        library: &IconLibrary,
        name: &str,
        variant: IconVariant,
    ) -> Option<&RgbaImage> {
        let key = (name.to_lowercase(), variant);

        if !self.icons.contains_key(&key) {
            let slice = library.find_icon(name, variant)?;
            self.icons.insert(key.clone(), slice);
        }

        self.icons.get(&key)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn clear(&mut self) {
        self.icons.clear();
    }
}
