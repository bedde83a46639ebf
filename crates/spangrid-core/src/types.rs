//! Core value types for span grid layout.

use std::fmt;
use std::str::FromStr;

use glam::IVec2;

/// Discrete width classification selecting which declared span applies.
///
/// The three named classes follow the window size class thresholds used by
/// adaptive layouts. Anything outside them is carried as `Unclassified`,
/// which span resolution treats like `Compact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WidthBreakpoint {
    /// Phones in portrait, narrow panes (< 600dp)
    #[default]
    Compact,
    /// Tablets in portrait, foldables (600dp..840dp)
    Medium,
    /// Tablets in landscape, desktop windows (>= 840dp)
    Expanded,
    /// A classification none of the above covers
    #[cfg_attr(feature = "serde", serde(other))]
    Unclassified,
}

impl WidthBreakpoint {
    /// Upper bound (exclusive) of the compact class, in dp.
    pub const MEDIUM_MIN_DP: f32 = 600.0;
    /// Upper bound (exclusive) of the medium class, in dp.
    pub const EXPANDED_MIN_DP: f32 = 840.0;

    /// Classify a window or container width given in dp.
    pub fn from_width(width_dp: f32) -> Self {
        if !width_dp.is_finite() || width_dp < 0.0 {
            Self::Unclassified
        } else if width_dp < Self::MEDIUM_MIN_DP {
            Self::Compact
        } else if width_dp < Self::EXPANDED_MIN_DP {
            Self::Medium
        } else {
            Self::Expanded
        }
    }

    /// Lowercase name of the class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Medium => "medium",
            Self::Expanded => "expanded",
            Self::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for WidthBreakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidthBreakpoint {
    type Err = std::convert::Infallible;

    /// Parse a class name. Unknown names are kept as `Unclassified`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Self::Compact,
            "medium" => Self::Medium,
            "expanded" => Self::Expanded,
            _ => Self::Unclassified,
        })
    }
}

/// Spans an item occupies at each breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanAssignment {
    pub compact: u32,
    pub medium: u32,
    pub expanded: u32,
}

impl SpanAssignment {
    pub const fn new(compact: u32, medium: u32, expanded: u32) -> Self {
        Self {
            compact,
            medium,
            expanded,
        }
    }

    /// The same span at every breakpoint.
    pub const fn uniform(span: u32) -> Self {
        Self::new(span, span, span)
    }
}

/// A density-independent length.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Dp = Dp(0.0);

    /// Convert to whole pixels, truncating toward zero.
    pub fn to_px(self, density: f32) -> i32 {
        (self.0 * density) as i32
    }

    pub fn is_valid_spacing(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl From<f32> for Dp {
    fn from(value: f32) -> Self {
        Dp(value)
    }
}

/// A size in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    pub fn as_ivec2(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }
}

/// Bounds a measured element must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraints {
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl Constraints {
    /// Marker for an unbounded maximum.
    pub const INFINITY: i32 = i32::MAX;

    pub const fn new(min_width: i32, max_width: i32, min_height: i32, max_height: i32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Exactly `width` wide, any height.
    pub const fn fixed_width(width: i32) -> Self {
        Self::new(width, width, 0, Self::INFINITY)
    }

    /// Exactly `width` by `height`.
    pub const fn fixed(width: i32, height: i32) -> Self {
        Self::new(width, width, height, height)
    }

    /// Up to `width` wide, any height.
    pub const fn loose_width(width: i32) -> Self {
        Self::new(0, width, 0, Self::INFINITY)
    }

    pub const fn with_fixed_width(self, width: i32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            ..self
        }
    }

    pub const fn with_fixed_height(self, height: i32) -> Self {
        Self {
            min_height: height,
            max_height: height,
            ..self
        }
    }

    pub const fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITY
    }

    pub const fn has_bounded_height(&self) -> bool {
        self.max_height != Self::INFINITY
    }

    /// Coerce a size into these bounds.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width.max(self.min_width)),
            size.height.clamp(self.min_height, self.max_height.max(self.min_height)),
        )
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new(0, Self::INFINITY, 0, Self::INFINITY)
    }
}

/// Final position and size of one item, relative to the grid origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Placement {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// Get the right edge (x + width), saturating at `i32::MAX`.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (y + height), saturating at `i32::MAX`.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Bounding box of both placements.
    pub fn union(&self, other: &Placement) -> Placement {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Placement::new(x1, y1, x2 - x1, y2 - y1)
    }
}
