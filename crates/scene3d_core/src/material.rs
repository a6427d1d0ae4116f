//! Colors and the material registry
//!
//! Every distinct diffuse color used by a shape becomes one material in the
//! scene document. Colors are matched by their exact bit pattern, so two
//! values that print differently (or `0.0` and `-0.0`) are different
//! materials.

use std::collections::HashMap;
use std::fmt;
use serde::{Serialize, Deserialize};

/// An RGB color, components nominally in [0, 1] (not enforced)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// Create a color from its components
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Exact-match lookup key
    pub fn key(&self) -> ColorKey {
        ColorKey([self.r.to_bits(), self.g.to_bits(), self.b.to_bits()])
    }
}

impl From<[f64; 3]> for Color {
    fn from(a: [f64; 3]) -> Self {
        Self::rgb(a[0], a[1], a[2])
    }
}

impl From<Color> for [f64; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Bit-exact identity of a [`Color`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorKey([u64; 3]);

/// Sequential material ID, rendered as `color<ID>` in the document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub usize);

impl MaterialId {
    /// Name used for both the material table key and shape references
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color{}", self.0)
    }
}

/// First-seen-wins mapping from colors to material IDs
///
/// IDs start at 0 and grow by one per new color. An ID is never reassigned.
#[derive(Debug, Clone, Default)]
pub struct MaterialRegistry {
    ids: HashMap<ColorKey, MaterialId>,
    /// Colors indexed by material ID
    colors: Vec<Color>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the material for `color`, registering it if unseen
    pub fn resolve(&mut self, color: Color) -> MaterialId {
        if let Some(id) = self.ids.get(&color.key()) {
            return *id;
        }

        let id = MaterialId(self.colors.len());
        self.ids.insert(color.key(), id);
        self.colors.push(color);
        log::debug!("Registered material {} for {:?}", id, color);
        id
    }

    /// Look up the material for `color` without registering it
    pub fn get(&self, color: Color) -> Option<MaterialId> {
        self.ids.get(&color.key()).copied()
    }

    /// Color registered under `id`
    pub fn color(&self, id: MaterialId) -> Option<Color> {
        self.colors.get(id.0).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All materials in ID order
    pub fn iter(&self) -> impl Iterator<Item = (MaterialId, Color)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(i, c)| (MaterialId(i), *c))
    }
}
