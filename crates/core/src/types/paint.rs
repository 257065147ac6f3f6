//! Exterior paint catalog for the configurator swatches.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One selectable exterior paint.
///
/// The slug form (`"red"`, `"blue"`, ...) is what the swatch buttons carry
/// in their `data-paint` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Paint {
    #[default]
    Red,
    Blue,
    White,
    Black,
    Yellow,
}

/// Static display data for a paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintInfo {
    /// Marketing name shown under the configurator.
    pub name: &'static str,
    /// Still image swapped into the hero shot.
    pub image: &'static str,
    /// Turntable clip played when the paint is selected.
    pub video: &'static str,
}

impl Paint {
    /// Every paint, in swatch display order.
    pub const ALL: [Self; 5] = [
        Self::Red,
        Self::Blue,
        Self::White,
        Self::Black,
        Self::Yellow,
    ];

    /// Returns the slug used by the swatch buttons.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::White => "white",
            Self::Black => "black",
            Self::Yellow => "yellow",
        }
    }

    /// Looks up a paint by its swatch slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "red" => Some(Self::Red),
            "blue" => Some(Self::Blue),
            "white" => Some(Self::White),
            "black" => Some(Self::Black),
            "yellow" => Some(Self::Yellow),
            _ => None,
        }
    }

    /// Returns the static display data for this paint.
    #[must_use]
    pub const fn info(self) -> PaintInfo {
        match self {
            Self::Red => PaintInfo {
                name: "Ignition Red",
                image: "assets/images/apexgt-red.avif",
                video: "assets/videos/red.mp4",
            },
            Self::Blue => PaintInfo {
                name: "Horizon Blue",
                image: "assets/images/apexgt-blue.avif",
                video: "assets/videos/blue.mp4",
            },
            Self::White => PaintInfo {
                name: "Glacier White",
                image: "assets/images/apexgt-white.avif",
                video: "assets/videos/white.mp4",
            },
            Self::Black => PaintInfo {
                name: "Midnight Black",
                image: "assets/images/apexgt-black.avif",
                video: "assets/videos/black.mp4",
            },
            Self::Yellow => PaintInfo {
                name: "Volt Yellow",
                image: "assets/images/apexgt-yellow.avif",
                video: "assets/videos/yellow.mp4",
            },
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_is_red() {
        assert_eq!(Paint::default(), Paint::Red);
    }

    #[test]
    fn test_slug_looks_up_same_paint() {
        for paint in Paint::ALL {
            assert_eq!(Paint::from_slug(paint.slug()), Some(paint));
        }
    }

    #[test]
    fn test_from_slug_unknown() {
        assert_eq!(Paint::from_slug("chrome"), None);
        assert_eq!(Paint::from_slug(""), None);
        assert_eq!(Paint::from_slug("RED"), None);
    }

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = Paint::ALL.iter().map(|p| p.slug()).collect();
        assert_eq!(slugs.len(), Paint::ALL.len());
    }

    #[test]
    fn test_info_assets_match_slug() {
        for paint in Paint::ALL {
            let info = paint.info();
            assert!(!info.name.is_empty());
            assert!(info.image.contains(paint.slug()));
            assert!(info.video.contains(paint.slug()));
        }
    }
}
