//! Text label widget
//!
//! A widget is a colored box with centered text, authored in virtual space.
//! Its virtual box never changes; the screen-space quad, label position and
//! font size are derived from the owning menu's [`Transform`] and updated in
//! place in the menu's [`Batch`] whenever the transform changes.

use super::menu::MenuStyle;
use crate::render::{Anchor, Batch, Label, LabelId, Layer, QuadId};
use crate::transform::{ScreenRect, Transform, VirtualRect};
use sdl2::pixels::Color;

/// Screen-space geometry derived from a virtual box
#[derive(Debug, Clone, Copy, PartialEq)]
struct Layout {
    rect: ScreenRect,
    center: (i32, i32),
    font_size: f32,
}

/// Single place where virtual boxes become screen geometry.
///
/// Font size is `min(width, height) * min(scale_x / 2, scale_y)` in virtual
/// units, unless the menu style pins a size.
fn layout(bounds: VirtualRect, transform: &Transform, style: &MenuStyle) -> Layout {
    let rect = transform.to_real_rect(bounds);
    let center = (
        rect.x.saturating_add((rect.width / 2) as i32),
        rect.y.saturating_add((rect.height / 2) as i32),
    );
    let font_size = style
        .font_size
        .unwrap_or_else(|| bounds.width.min(bounds.height) as f32 * transform.font_scale());

    Layout {
        rect,
        center,
        font_size,
    }
}

#[derive(Debug)]
pub struct Widget {
    text: String,
    bounds: VirtualRect,
    color: Color,
    fill: QuadId,
    label: LabelId,
    real: ScreenRect,
    font_size: f32,
}

impl Widget {
    /// Creates the widget and registers its fill quad (`Mid`) and centered
    /// text label (`Fore`) with `batch`, laid out by the current transform.
    pub fn new(
        text: &str,
        bounds: VirtualRect,
        color: Color,
        style: &MenuStyle,
        transform: &Transform,
        batch: &mut Batch,
    ) -> Self {
        let geometry = layout(bounds, transform, style);

        let fill = batch.add_quad(geometry.rect.vertices(), color, Layer::Mid);
        let label = batch.add_label(Label {
            text: text.to_string(),
            position: geometry.center,
            font_size: geometry.font_size,
            font_name: style.font_name.clone(),
            anchor: Anchor::Center,
            color: style.text_color,
            layer: Layer::Fore,
        });

        Widget {
            text: text.to_string(),
            bounds,
            color,
            fill,
            label,
            real: geometry.rect,
            font_size: geometry.font_size,
        }
    }

    /// Recomputes screen geometry for a new transform, mutating the already
    /// registered primitives
    pub fn resize(&mut self, transform: &Transform, style: &MenuStyle, batch: &mut Batch) {
        let geometry = layout(self.bounds, transform, style);

        batch.set_quad_vertices(self.fill, geometry.rect.vertices());
        batch.set_label_geometry(self.label, geometry.center, geometry.font_size);

        self.real = geometry.rect;
        self.font_size = geometry.font_size;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn bounds(&self) -> VirtualRect {
        self.bounds
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Current screen-space box
    pub fn real_rect(&self) -> ScreenRect {
        self.real
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn fill_handle(&self) -> QuadId {
        self.fill
    }

    pub fn label_handle(&self) -> LabelId {
        self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::bounding_rect;

    fn transform(width: u32, height: u32) -> Transform {
        Transform::from_rect(ScreenRect::new(100, 100, width, height)).unwrap()
    }

    #[test]
    fn test_widget_registers_fill_and_label() {
        let mut batch = Batch::new();
        let style = MenuStyle::default();
        let widget = Widget::new(
            "la",
            VirtualRect::new(50, 70, 50, 30),
            Color::RGB(0, 255, 255),
            &style,
            &transform(700, 700),
            &mut batch,
        );

        assert_eq!(batch.quad_count(), 1);
        assert_eq!(batch.label_count(), 1);
        assert_eq!(widget.real_rect(), ScreenRect::new(450, 590, 350, 210));

        let label = batch.label(widget.label_handle()).unwrap();
        assert_eq!(label.text, "la");
        assert_eq!(label.position, (625, 695));
        assert_eq!(label.anchor, Anchor::Center);
        assert_eq!(label.layer, Layer::Fore);
        // min(50, 30) * min(7 / 2, 7)
        assert_eq!(label.font_size, 105.0);
    }

    #[test]
    fn test_resize_updates_primitives_in_place() {
        let mut batch = Batch::new();
        let style = MenuStyle::default();
        let mut widget = Widget::new(
            "hi",
            VirtualRect::new(0, 0, 25, 25),
            Color::RGB(0, 255, 255),
            &style,
            &transform(700, 700),
            &mut batch,
        );

        let big = Transform::from_rect(ScreenRect::new(0, 0, 800, 800)).unwrap();
        widget.resize(&big, &style, &mut batch);

        assert_eq!(batch.quad_count(), 1);
        assert_eq!(batch.label_count(), 1);
        assert_eq!(widget.bounds(), VirtualRect::new(0, 0, 25, 25));
        assert_eq!(widget.real_rect(), ScreenRect::new(0, 0, 200, 200));
        assert_eq!(
            batch.quad_vertices(widget.fill_handle()).map(|v| bounding_rect(&v)),
            Some(ScreenRect::new(0, 0, 200, 200))
        );
        assert_eq!(widget.font_size(), 100.0);
        assert_eq!(batch.label(widget.label_handle()).unwrap().position, (100, 100));
    }

    #[test]
    fn test_pinned_font_size_survives_resize() {
        let mut batch = Batch::new();
        let style = MenuStyle {
            font_size: Some(24.0),
            ..Default::default()
        };
        let mut widget = Widget::new(
            "pinned",
            VirtualRect::new(10, 10, 40, 20),
            Color::RGB(0, 0, 255),
            &style,
            &transform(300, 300),
            &mut batch,
        );
        assert_eq!(widget.font_size(), 24.0);

        widget.resize(&transform(900, 400), &style, &mut batch);
        assert_eq!(widget.font_size(), 24.0);
        assert_eq!(batch.label(widget.label_handle()).unwrap().font_size, 24.0);
    }
}
