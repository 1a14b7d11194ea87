//! Box-alignment gravity: place a box of a given size inside a container
//! rect, optionally resolving relative flags against the layout direction.

use bitflags::bitflags;

use super::{LayoutDirection, Size};
use crate::widgets::Rect;

bitflags! {
    /// Placement flags for one box inside a container.
    ///
    /// `FILL_HORIZONTAL`/`FILL_VERTICAL` are the union of both edge flags on
    /// their axis; when both edges are requested the box grows to the
    /// container on that axis instead of being pinned to one side.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Gravity: u32 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const TOP = 1 << 2;
        const BOTTOM = 1 << 3;
        const CENTER_HORIZONTAL = 1 << 4;
        const CENTER_VERTICAL = 1 << 5;
        /// Leading edge, resolved against the layout direction
        const START = 1 << 6;
        /// Trailing edge, resolved against the layout direction
        const END = 1 << 7;

        const FILL_HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const FILL_VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        const CENTER = Self::CENTER_HORIZONTAL.bits() | Self::CENTER_VERTICAL.bits();
        const FILL = Self::FILL_HORIZONTAL.bits() | Self::FILL_VERTICAL.bits();
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Gravity::START | Gravity::TOP
    }
}

/// Replace START/END with LEFT/RIGHT according to `direction`.
pub fn resolve(gravity: Gravity, direction: LayoutDirection) -> Gravity {
    let mut resolved = gravity - (Gravity::START | Gravity::END);
    if gravity.contains(Gravity::START) {
        resolved |= if direction.is_rtl() {
            Gravity::RIGHT
        } else {
            Gravity::LEFT
        };
    }
    if gravity.contains(Gravity::END) {
        resolved |= if direction.is_rtl() {
            Gravity::LEFT
        } else {
            Gravity::RIGHT
        };
    }
    resolved
}

/// Place a box of `size` inside `container` according to `gravity`.
///
/// Fill beats center beats trailing edge on each axis; the leading edge is
/// the fallback. Relative flags are resolved against `direction` first.
pub fn apply(gravity: Gravity, size: Size, container: Rect, direction: LayoutDirection) -> Rect {
    let g = resolve(gravity, direction);

    let (x, width) = if g.contains(Gravity::FILL_HORIZONTAL) {
        (container.x, container.width)
    } else if g.contains(Gravity::CENTER_HORIZONTAL) {
        (container.x + (container.width - size.width) / 2.0, size.width)
    } else if g.contains(Gravity::RIGHT) {
        (container.x + container.width - size.width, size.width)
    } else {
        (container.x, size.width)
    };

    let (y, height) = if g.contains(Gravity::FILL_VERTICAL) {
        (container.y, container.height)
    } else if g.contains(Gravity::CENTER_VERTICAL) {
        (
            container.y + (container.height - size.height) / 2.0,
            size.height,
        )
    } else if g.contains(Gravity::BOTTOM) {
        (container.y + container.height - size.height, size.height)
    } else {
        (container.y, size.height)
    };

    Rect::new(x, y, width, height)
}
