//! Font loading for the four panel font slots
//!
//! Font files ship next to the binary rather than being installed, so each
//! one is registered with fontconfig before Pango is asked for its family.

use anyhow::{bail, Context, Result};
use lcd_sens_types::{FontKey, FontSet};
use pango::prelude::*;
use pango::FontDescription;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Weight of a face inside its family
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Thin,
    Light,
    #[default]
    Normal,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    fn to_pango(self) -> pango::Weight {
        match self {
            FontWeight::Thin => pango::Weight::Thin,
            FontWeight::Light => pango::Weight::Light,
            FontWeight::Normal => pango::Weight::Normal,
            FontWeight::Medium => pango::Weight::Medium,
            FontWeight::Semibold => pango::Weight::Semibold,
            FontWeight::Bold => pango::Weight::Bold,
        }
    }
}

/// A font file and the size it is drawn at
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontSpec {
    /// File name inside the font directory
    pub file: String,
    /// Family name the file provides
    pub family: String,
    #[serde(default)]
    pub weight: FontWeight,
    /// Em size in pixels
    pub size: u32,
}

impl FontSpec {
    pub fn new(file: &str, family: &str, size: u32) -> Self {
        Self {
            file: file.to_string(),
            family: family.to_string(),
            weight: FontWeight::Normal,
            size,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// Specs for every slot of a [`FontSet`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontSpecs {
    #[serde(default = "default_icon_small")]
    pub icon_small: FontSpec,
    #[serde(default = "default_icon_large")]
    pub icon_large: FontSpec,
    #[serde(default = "default_text_small")]
    pub text_small: FontSpec,
    #[serde(default = "default_text_large")]
    pub text_large: FontSpec,
}

fn default_icon_small() -> FontSpec {
    FontSpec::new("fontawesome-webfont.ttf", "FontAwesome", 14)
}

fn default_icon_large() -> FontSpec {
    FontSpec::new("fontawesome-webfont.ttf", "FontAwesome", 19)
}

fn default_text_small() -> FontSpec {
    FontSpec::new("Montserrat-Light.ttf", "Montserrat", 12).with_weight(FontWeight::Light)
}

fn default_text_large() -> FontSpec {
    FontSpec::new("Montserrat-Medium.ttf", "Montserrat", 19).with_weight(FontWeight::Medium)
}

impl Default for FontSpecs {
    fn default() -> Self {
        Self {
            icon_small: default_icon_small(),
            icon_large: default_icon_large(),
            text_small: default_text_small(),
            text_large: default_text_large(),
        }
    }
}

impl FontSpecs {
    pub fn get(&self, key: FontKey) -> &FontSpec {
        let slots = FontSet {
            icon_small: &self.icon_small,
            icon_large: &self.icon_large,
            text_small: &self.text_small,
            text_large: &self.text_large,
        };
        *slots.get(key)
    }
}

/// Add a font file to the process-wide fontconfig configuration
fn register_font_file(path: &Path) -> Result<()> {
    let file = CString::new(path.as_os_str().as_bytes())
        .with_context(|| format!("font path {} contains a NUL byte", path.display()))?;
    // Null selects the current configuration, the one Pango's font maps read
    let added = unsafe {
        fontconfig_sys::FcConfigAppFontAddFile(std::ptr::null_mut(), file.as_ptr().cast())
    };
    if added == 0 {
        bail!("fontconfig cannot read font file {}", path.display());
    }
    Ok(())
}

/// Lower-cased names of every family Pango can resolve right now
fn available_families() -> HashSet<String> {
    pangocairo::FontMap::new()
        .list_families()
        .iter()
        .map(|family| family.name().to_lowercase())
        .collect()
}

/// Load one font from `directory`
///
/// Registers the file, then checks that its family resolves. Must run
/// before the first frame is drawn: Pango's default font map does not see
/// files added after it was created.
pub fn load_font(directory: &Path, spec: &FontSpec) -> Result<FontDescription> {
    let path = directory.join(&spec.file);
    if !path.is_file() {
        bail!("font file {} not found", path.display());
    }
    if spec.size == 0 {
        bail!("font {} has zero size", spec.file);
    }
    register_font_file(&path)?;

    if !available_families().contains(&spec.family.to_lowercase()) {
        bail!(
            "font file {} does not provide family {:?}",
            path.display(),
            spec.family
        );
    }

    let mut desc = FontDescription::new();
    desc.set_family(&spec.family);
    desc.set_weight(spec.weight.to_pango());
    desc.set_absolute_size(spec.size as f64 * pango::SCALE as f64);
    log::debug!(
        "Loaded font {} {:?} ({}px) from {}",
        spec.family,
        spec.weight,
        spec.size,
        path.display()
    );
    Ok(desc)
}

/// Load all four slots, failing on the first unusable file
pub fn load_font_set(directory: &Path, specs: &FontSpecs) -> Result<FontSet<FontDescription>> {
    FontSet::try_load(|key| {
        load_font(directory, specs.get(key))
            .map_err(|e| e.context(format!("loading {} font", key.slot_name())))
    })
}
