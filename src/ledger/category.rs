//! Expense categories and the ordered category/color palette.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::PaletteError;

/// A member of the closed set of expense classifications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Display colors a renderer can assign to chart wedges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartColor {
    Blue,
    Green,
    Amber,
    Pink,
    Red,
    Orange,
    Purple,
    Teal,
    Grey,
}

impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChartColor::Blue => "blue",
            ChartColor::Green => "green",
            ChartColor::Amber => "amber",
            ChartColor::Pink => "pink",
            ChartColor::Red => "red",
            ChartColor::Orange => "orange",
            ChartColor::Purple => "purple",
            ChartColor::Teal => "teal",
            ChartColor::Grey => "grey",
        };
        f.write_str(label)
    }
}

/// One row of the palette: a category and its fixed wedge color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub category: Category,
    pub color: ChartColor,
}

impl PaletteEntry {
    pub fn new(category: impl Into<String>, color: ChartColor) -> Self {
        Self {
            category: Category::new(category),
            color,
        }
    }
}

/// Ordered table of categories and their colors.
///
/// The order is the display order for tables, totals and charts. Names are
/// unique ignoring ASCII case, so case-insensitive lookups are unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryPalette {
    entries: Vec<PaletteEntry>,
}

impl CategoryPalette {
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::Empty);
        }
        for (idx, entry) in entries.iter().enumerate() {
            let name = entry.category.as_str();
            if name.trim().is_empty() {
                return Err(PaletteError::BlankName);
            }
            let duplicate = entries[..idx]
                .iter()
                .any(|prior| prior.category.as_str().eq_ignore_ascii_case(name));
            if duplicate {
                return Err(PaletteError::Duplicate(name.to_string()));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> + '_ {
        self.entries.iter().map(|entry| &entry.category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of `category` in display order.
    pub fn position(&self, category: &Category) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| &entry.category == category)
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.position(category).is_some()
    }

    pub fn color_of(&self, category: &Category) -> Option<ChartColor> {
        self.position(category).map(|idx| self.entries[idx].color)
    }

    /// Maps free text onto the canonical category, exact spelling first.
    pub fn resolve(&self, raw: &str) -> Option<&Category> {
        let needle = raw.trim();
        self.categories()
            .find(|category| category.as_str() == needle)
            .or_else(|| {
                self.categories()
                    .find(|category| category.as_str().eq_ignore_ascii_case(needle))
            })
    }
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Self {
            entries: vec![
                PaletteEntry::new("Food", ChartColor::Blue),
                PaletteEntry::new("Transport", ChartColor::Green),
                PaletteEntry::new("Housing", ChartColor::Amber),
                PaletteEntry::new("Other", ChartColor::Pink),
            ],
        }
    }
}
