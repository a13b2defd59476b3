//! Responsive breakpoints and the phone/not-phone device classifier.
//!
//! # Design
//! - Classification is a pure function of the viewport; no hysteresis, no memory.
//! - The breakpoint table also carries the grid column hint for each range.

/// Individual breakpoint with an inclusive minimum width and optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Short name, also used as a CSS modifier (`bp-md`).
    pub name: &'static str,
    /// Inclusive lower bound in CSS pixels.
    pub min_width: u32,
    /// Inclusive upper bound in CSS pixels, `None` for the last range.
    pub max_width: Option<u32>,
    /// Number of champion tiles per grid row.
    pub grid_columns: u8,
}

/// Extra-small screens.
pub const XS: Breakpoint = Breakpoint {
    name: "xs",
    min_width: 0,
    max_width: Some(479),
    grid_columns: 2,
};
/// Small screens.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    min_width: 480,
    max_width: Some(767),
    grid_columns: 3,
};
/// Medium screens (tablets).
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    min_width: 768,
    max_width: Some(1023),
    grid_columns: 4,
};
/// Large screens.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    min_width: 1024,
    max_width: Some(1439),
    grid_columns: 6,
};
/// Extra-large screens.
pub const XL: Breakpoint = Breakpoint {
    name: "xl",
    min_width: 1440,
    max_width: Some(1919),
    grid_columns: 8,
};
/// Anything wider.
pub const XXL: Breakpoint = Breakpoint {
    name: "2xl",
    min_width: 1920,
    max_width: None,
    grid_columns: 10,
};

/// Ordered breakpoints used for layout decisions.
pub const BREAKPOINTS: [Breakpoint; 6] = [XS, SM, MD, LG, XL, XXL];

/// Widths strictly below this value classify as [`DeviceClass::Phone`].
pub const PHONE_BREAKPOINT: u32 = MD.min_width;

/// Find the first breakpoint matching the supplied width.
#[must_use]
pub fn for_width(width: u32) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| width >= bp.min_width && bp.max_width.is_none_or(|max| width <= max))
        .unwrap_or(XXL)
}

/// Window size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Inner width.
    pub width: u32,
    /// Inner height.
    pub height: u32,
}

impl Viewport {
    /// Build a viewport from width and height.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Coarse device category driving the layout variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    /// Narrow viewport: detail replaces the grid.
    Phone,
    /// Everything else: detail sits beside the grid.
    #[default]
    NotPhone,
}

/// Classify a viewport. Height is accepted but does not affect the result.
#[must_use]
pub const fn classify(viewport: Viewport) -> DeviceClass {
    if viewport.width < PHONE_BREAKPOINT {
        DeviceClass::Phone
    } else {
        DeviceClass::NotPhone
    }
}
