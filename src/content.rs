//! The editable page content: three fixed regions, each a display text and
//! an opaque style token.

use crate::domain::RegionName;
use serde::{Deserialize, Serialize};

/// Display text and style token of one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRegion {
    pub text: String,
    pub style: String,
}

impl ContentRegion {
    fn new(text: &str, style: &str) -> Self {
        Self {
            text: text.to_string(),
            style: style.to_string(),
        }
    }

    /// The value a region starts with and returns to on undo.
    pub fn default_for(region: RegionName) -> Self {
        match region {
            RegionName::Header => Self::new(
                "Welcome to Our Website",
                "text-3xl font-bold text-gray-900",
            ),
            RegionName::Button => Self::new(
                "Get Started",
                "bg-blue-600 text-white px-6 py-2 rounded-lg hover:bg-blue-700",
            ),
            RegionName::Footer => Self::new("© 2024 Company Name", "text-gray-600 text-sm"),
        }
    }
}

/// Current page content. Always holds exactly the three regions; the
/// struct has no way to add or remove one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStore {
    header: ContentRegion,
    button: ContentRegion,
    footer: ContentRegion,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self {
            header: ContentRegion::default_for(RegionName::Header),
            button: ContentRegion::default_for(RegionName::Button),
            footer: ContentRegion::default_for(RegionName::Footer),
        }
    }
}

impl ContentStore {
    pub fn region(&self, name: RegionName) -> &ContentRegion {
        match name {
            RegionName::Header => &self.header,
            RegionName::Button => &self.button,
            RegionName::Footer => &self.footer,
        }
    }

    /// Replaces the whole style token of a region. The text is kept.
    pub fn set_style(&mut self, name: RegionName, style: &str) {
        let region = match name {
            RegionName::Header => &mut self.header,
            RegionName::Button => &mut self.button,
            RegionName::Footer => &mut self.footer,
        };
        region.style = style.to_string();
    }

    /// Restores every region to its default text and style.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Regions paired with their names, in display order.
    pub fn regions(&self) -> impl Iterator<Item = (RegionName, &ContentRegion)> {
        RegionName::ALL.into_iter().map(move |name| (name, self.region(name)))
    }
}
