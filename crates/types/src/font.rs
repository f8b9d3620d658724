//! Font classes and the four-slot font set shared by every render pass

use serde::{Deserialize, Serialize};

/// What a font is used to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontClass {
    /// Symbol font for icon glyphs
    Icon,
    /// Regular font for metric text
    Text,
}

/// Size class of a layout entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    #[default]
    Small,
    Large,
}

/// Lookup key into a [`FontSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub class: FontClass,
    pub size: FontSize,
}

impl FontKey {
    pub const fn new(class: FontClass, size: FontSize) -> Self {
        Self { class, size }
    }

    /// Name of the slot, e.g. `icon_small`
    pub fn slot_name(&self) -> &'static str {
        match (self.class, self.size) {
            (FontClass::Icon, FontSize::Small) => "icon_small",
            (FontClass::Icon, FontSize::Large) => "icon_large",
            (FontClass::Text, FontSize::Small) => "text_small",
            (FontClass::Text, FontSize::Large) => "text_large",
        }
    }
}

/// One loaded font per (class, size) pair
///
/// Generic over the font handle so the layout logic does not depend on the
/// rasterizer. Built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct FontSet<F> {
    pub icon_small: F,
    pub icon_large: F,
    pub text_small: F,
    pub text_large: F,
}

impl<F> FontSet<F> {
    pub fn get(&self, key: FontKey) -> &F {
        match (key.class, key.size) {
            (FontClass::Icon, FontSize::Small) => &self.icon_small,
            (FontClass::Icon, FontSize::Large) => &self.icon_large,
            (FontClass::Text, FontSize::Small) => &self.text_small,
            (FontClass::Text, FontSize::Large) => &self.text_large,
        }
    }

    pub fn icon(&self, size: FontSize) -> &F {
        self.get(FontKey::new(FontClass::Icon, size))
    }

    pub fn text(&self, size: FontSize) -> &F {
        self.get(FontKey::new(FontClass::Text, size))
    }

    /// Build a set by loading each slot, stopping at the first failure
    pub fn try_load<E>(mut load: impl FnMut(FontKey) -> Result<F, E>) -> Result<Self, E> {
        Ok(Self {
            icon_small: load(FontKey::new(FontClass::Icon, FontSize::Small))?,
            icon_large: load(FontKey::new(FontClass::Icon, FontSize::Large))?,
            text_small: load(FontKey::new(FontClass::Text, FontSize::Small))?,
            text_large: load(FontKey::new(FontClass::Text, FontSize::Large))?,
        })
    }
}
