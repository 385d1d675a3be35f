//! Core types shared by the scene, the painter and the renderer.
//!
//! A frame is a grid of [`Cell`]s. Everything upstream (layout, controllers,
//! overlays) exists to decide what those cells contain.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels.
///
/// Special value: r=-1 means "terminal default" (let the terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    pub const WHITE: Self = Self::rgb(255, 255, 255);

    // Site palette
    pub const PAGE: Self = Self::rgb(2, 6, 23);
    pub const PANEL: Self = Self::rgb(15, 23, 42);
    pub const PRIMARY: Self = Self::rgb(37, 99, 235);
    pub const PURPLE: Self = Self::rgb(168, 85, 247);
    pub const CYAN: Self = Self::rgb(34, 211, 238);
    pub const ORANGE: Self = Self::rgb(251, 146, 60);
    pub const MUTED: Self = Self::rgb(148, 163, 184);
    pub const SUBTLE: Self = Self::rgb(100, 116, 139);

    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Linear interpolation between two colors (`t` clamped to 0..=1).
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        if a.is_terminal_default() || b.is_terminal_default() {
            return if t < 0.5 { a } else { b };
        }
        let t = t.clamp(0.0, 1.0);
        let mix = |x: i16, y: i16| (x as f32 + (y as f32 - x as f32) * t).round() as i16;
        Self {
            r: mix(a.r, b.r),
            g: mix(a.g, b.g),
            b: mix(a.b, b.b),
            a: mix(a.a, b.a),
        }
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes. Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const REVERSE = 1 << 4;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// A single terminal cell. `char == 0` marks the tail of a wide character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: u32,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// Rect
// =============================================================================

/// Axis-aligned rectangle in cells.
///
/// Document nodes use page coordinates (y grows past the viewport), fixed
/// overlays use viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && (x as u32) < self.x as u32 + self.width as u32
            && y >= self.y
            && (y as u32) < self.y as u32 + self.height as u32
    }

    #[inline]
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 && y2 > y1 {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }
}
