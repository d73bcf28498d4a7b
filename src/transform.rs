//! Virtual-to-real coordinate transform
//!
//! Menus are authored on a fixed 100x100 virtual grid. A `Transform` maps that
//! grid onto the screen rectangle a menu currently fills, using whole-pixel
//! scale factors and centering the leftover pixels inside the rectangle.
//!
//! # Example
//!
//! ```ignore
//! let transform = Transform::from_rect(ScreenRect::new(100, 100, 700, 700))?;
//!
//! assert_eq!(transform.to_real(12, 12), (184, 184));
//! assert_eq!(transform.to_virtual(184, 184), (12.0, 12.0));
//! ```

use crate::gui::MenuError;

/// Size of the virtual grid along each axis
pub const VIRTUAL_SIZE: i32 = 100;

/// A rectangle in screen pixels (the menu's target rectangle)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ScreenRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        ScreenRect { x, y, width, height }
    }

    /// Corner vertices, clockwise from the origin corner.
    ///
    /// Corners past `i32::MAX` are clamped to it.
    pub fn vertices(&self) -> [(i32, i32); 4] {
        let right = self.x.saturating_add(clamp_to_i32(self.width));
        let bottom = self.y.saturating_add(clamp_to_i32(self.height));
        [
            (self.x, self.y),
            (right, self.y),
            (right, bottom),
            (self.x, bottom),
        ]
    }
}

fn clamp_to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// A box on the 100x100 virtual grid.
///
/// Boxes are meant to lie on the grid (0..=100 on both axes). Boxes far
/// outside it still map to screen space, with pixel coordinates clamped to
/// the `i32` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl VirtualRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        VirtualRect { x, y, width, height }
    }

    /// Strict containment: points on the border are outside
    pub fn contains_strict(&self, vx: f32, vy: f32) -> bool {
        (self.x as f32) < vx
            && vx < (self.x + self.width) as f32
            && (self.y as f32) < vy
            && vy < (self.y + self.height) as f32
    }
}

/// Scale and offset pair mapping virtual space onto a target rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    scale_x: i32,
    scale_y: i32,
    offset_x: i32,
    offset_y: i32,
}

impl Transform {
    /// Computes the transform for a target rectangle.
    ///
    /// Scale factors are `side / 100` (integer division). The remainder of
    /// each side is split in half and added to the rectangle's origin, so the
    /// grid sits centered inside the rectangle.
    ///
    /// # Errors
    ///
    /// `MenuError::DegenerateTransform` if either side is shorter than 100
    /// pixels (the scale would be zero and hit-testing would divide by it).
    pub fn from_rect(rect: ScreenRect) -> Result<Self, MenuError> {
        let grid = VIRTUAL_SIZE as u32;
        if rect.width < grid || rect.height < grid {
            return Err(MenuError::DegenerateTransform {
                width: rect.width,
                height: rect.height,
            });
        }

        let width = clamp_to_i32(rect.width);
        let height = clamp_to_i32(rect.height);

        Ok(Transform {
            scale_x: width / VIRTUAL_SIZE,
            scale_y: height / VIRTUAL_SIZE,
            offset_x: rect.x.saturating_add((width % VIRTUAL_SIZE) / 2),
            offset_y: rect.y.saturating_add((height % VIRTUAL_SIZE) / 2),
        })
    }

    pub fn scale(&self) -> (i32, i32) {
        (self.scale_x, self.scale_y)
    }

    pub fn offset(&self) -> (i32, i32) {
        (self.offset_x, self.offset_y)
    }

    /// Virtual point to screen pixels, saturating at the `i32` range
    pub fn to_real(&self, vx: i32, vy: i32) -> (i32, i32) {
        (
            vx.saturating_mul(self.scale_x).saturating_add(self.offset_x),
            vy.saturating_mul(self.scale_y).saturating_add(self.offset_y),
        )
    }

    /// Virtual extent to pixel extent (scaled, never translated)
    pub fn to_real_size(&self, vw: i32, vh: i32) -> (i32, i32) {
        (vw.saturating_mul(self.scale_x), vh.saturating_mul(self.scale_y))
    }

    pub fn to_real_rect(&self, rect: VirtualRect) -> ScreenRect {
        let (x, y) = self.to_real(rect.x, rect.y);
        let (width, height) = self.to_real_size(rect.width, rect.height);
        ScreenRect::new(x, y, width.max(0) as u32, height.max(0) as u32)
    }

    /// Screen pixels back to virtual space.
    ///
    /// Virtual space is continuous here: a pixel between two grid lines maps
    /// to a fractional coordinate.
    pub fn to_virtual(&self, rx: i32, ry: i32) -> (f32, f32) {
        (
            (i64::from(rx) - i64::from(self.offset_x)) as f32 / self.scale_x as f32,
            (i64::from(ry) - i64::from(self.offset_y)) as f32 / self.scale_y as f32,
        )
    }

    /// Font size multiplier: `min(scale_x / 2, scale_y)`.
    ///
    /// Horizontal scale counts half so text stays inside narrow boxes.
    pub fn font_scale(&self) -> f32 {
        (self.scale_x as f32 / 2.0).min(self.scale_y as f32)
    }
}
