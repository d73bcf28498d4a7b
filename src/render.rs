//! Retained-mode primitive batch
//!
//! Menus never issue drawing commands themselves. They register primitives
//! (colored quads and text labels) into a [`Batch`] once, mutate them in place
//! when the layout changes, and flush the whole batch each frame.
//!
//! # Architecture
//!
//! - `Layer`: three fixed depth layers, drawn back to front
//! - `Batch`: owns the primitives and hands out stable `QuadId`/`LabelId` handles
//! - `Surface`: the raw drawing seam (`fill_rect`, `draw_text`), implemented
//!   for the SDL2 window canvas
//!
//! Drawing is a painter's algorithm: every primitive on `Back` first, then
//! `Mid`, then `Fore`. Within a layer, registration order is kept (quads
//! before labels).

use crate::text::{draw_bitmap_text, glyph_scale, text_extent};
use crate::transform::ScreenRect;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Depth layer of a primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    /// Menu background panels
    Back,
    /// Widget fills
    Mid,
    /// Text glyphs
    Fore,
}

impl Layer {
    /// All layers, back to front
    pub const ALL: [Layer; 3] = [Layer::Back, Layer::Mid, Layer::Fore];
}

/// Which point of the text block sits on the label's position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
}

/// Handle to a quad registered in a [`Batch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadId(usize);

/// Handle to a text label registered in a [`Batch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelId(usize);

#[derive(Debug, Clone)]
struct Quad {
    vertices: [(i32, i32); 4],
    color: Color,
    layer: Layer,
}

/// A text label primitive
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: (i32, i32),
    pub font_size: f32,
    /// Font family requested by the menu. The bitmap font has a single face,
    /// so the SDL2 surface ignores it.
    pub font_name: String,
    pub anchor: Anchor,
    pub color: Color,
    pub layer: Layer,
}

/// Raw drawing target
///
/// Only `fill_rect` is required; text defaults to the procedural 5x7 bitmap
/// font built from filled squares.
pub trait Surface {
    fn fill_rect(&mut self, rect: ScreenRect, color: Color) -> Result<(), String>;

    /// Draws `text` with its top-left corner at `(x, y)`
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        scale: u32,
        color: Color,
    ) -> Result<(), String> {
        draw_bitmap_text(self, text, x, y, color, scale)
    }
}

impl Surface for Canvas<Window> {
    fn fill_rect(&mut self, rect: ScreenRect, color: Color) -> Result<(), String> {
        self.set_draw_color(color);
        Canvas::fill_rect(self, Rect::new(rect.x, rect.y, rect.width, rect.height))
    }
}

/// Axis-aligned bounds of a quad's vertices
pub fn bounding_rect(vertices: &[(i32, i32); 4]) -> ScreenRect {
    let min_x = vertices.iter().map(|v| v.0).min().unwrap_or(0);
    let max_x = vertices.iter().map(|v| v.0).max().unwrap_or(0);
    let min_y = vertices.iter().map(|v| v.1).min().unwrap_or(0);
    let max_y = vertices.iter().map(|v| v.1).max().unwrap_or(0);
    ScreenRect::new(min_x, min_y, (max_x - min_x) as u32, (max_y - min_y) as u32)
}

/// Retained collection of quads and labels
#[derive(Debug, Default)]
pub struct Batch {
    quads: Vec<Quad>,
    labels: Vec<Label>,
}

impl Batch {
    pub fn new() -> Self {
        Batch::default()
    }

    pub fn add_quad(&mut self, vertices: [(i32, i32); 4], color: Color, layer: Layer) -> QuadId {
        self.quads.push(Quad {
            vertices,
            color,
            layer,
        });
        QuadId(self.quads.len() - 1)
    }

    pub fn add_label(&mut self, label: Label) -> LabelId {
        self.labels.push(label);
        LabelId(self.labels.len() - 1)
    }

    /// Moves an existing quad
    pub fn set_quad_vertices(&mut self, id: QuadId, vertices: [(i32, i32); 4]) {
        if let Some(quad) = self.quads.get_mut(id.0) {
            quad.vertices = vertices;
        }
    }

    /// Moves and resizes an existing label
    pub fn set_label_geometry(&mut self, id: LabelId, position: (i32, i32), font_size: f32) {
        if let Some(label) = self.labels.get_mut(id.0) {
            label.position = position;
            label.font_size = font_size;
        }
    }

    pub fn quad_vertices(&self, id: QuadId) -> Option<[(i32, i32); 4]> {
        self.quads.get(id.0).map(|quad| quad.vertices)
    }

    pub fn label(&self, id: LabelId) -> Option<&Label> {
        self.labels.get(id.0)
    }

    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Flushes every primitive to `surface`, back layer first
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), String> {
        for layer in Layer::ALL {
            for quad in self.quads.iter().filter(|q| q.layer == layer) {
                let rect = bounding_rect(&quad.vertices);
                if rect.width == 0 || rect.height == 0 {
                    continue;
                }
                surface.fill_rect(rect, quad.color)?;
            }

            for label in self.labels.iter().filter(|l| l.layer == layer) {
                draw_label(surface, label)?;
            }
        }

        Ok(())
    }
}

fn draw_label<S: Surface + ?Sized>(surface: &mut S, label: &Label) -> Result<(), String> {
    let scale = glyph_scale(label.font_size);
    let (width, height) = text_extent(&label.text, scale);
    let (x, y) = match label.anchor {
        Anchor::Center => (
            label.position.0 - (width / 2) as i32,
            label.position.1 - (height / 2) as i32,
        ),
    };
    surface.draw_text(&label.text, x, y, scale, label.color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Call {
        Fill(ScreenRect),
        Text(String, i32, i32, u32),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Surface for Recorder {
        fn fill_rect(&mut self, rect: ScreenRect, _color: Color) -> Result<(), String> {
            self.calls.push(Call::Fill(rect));
            Ok(())
        }

        fn draw_text(
            &mut self,
            text: &str,
            x: i32,
            y: i32,
            scale: u32,
            _color: Color,
        ) -> Result<(), String> {
            self.calls.push(Call::Text(text.to_string(), x, y, scale));
            Ok(())
        }
    }

    fn label(text: &str, position: (i32, i32), anchor: Anchor) -> Label {
        Label {
            text: text.to_string(),
            position,
            font_size: 14.0,
            font_name: "Times New Roman".to_string(),
            anchor,
            color: Color::RGB(255, 255, 255),
            layer: Layer::Fore,
        }
    }

    #[test]
    fn test_layers_draw_back_to_front() {
        let mut batch = Batch::new();
        batch.add_label(label("A", (50, 50), Anchor::Center));
        let small = ScreenRect::new(0, 0, 10, 10).vertices();
        let large = ScreenRect::new(0, 0, 100, 100).vertices();
        batch.add_quad(small, Color::RGB(0, 255, 255), Layer::Mid);
        batch.add_quad(large, Color::RGB(255, 0, 0), Layer::Back);

        let mut recorder = Recorder::default();
        batch.draw(&mut recorder).unwrap();

        assert_eq!(
            recorder.calls,
            vec![
                Call::Fill(ScreenRect::new(0, 0, 100, 100)),
                Call::Fill(ScreenRect::new(0, 0, 10, 10)),
                // "A" at scale 2 is 10x14
                Call::Text("A".to_string(), 45, 43, 2),
            ]
        );
    }

    #[test]
    fn test_centered_label_offsets_by_half_extent() {
        let mut batch = Batch::new();
        // "hi" at scale 2 is 22x14
        batch.add_label(label("hi", (100, 100), Anchor::Center));

        let mut recorder = Recorder::default();
        batch.draw(&mut recorder).unwrap();

        assert_eq!(recorder.calls, vec![Call::Text("hi".to_string(), 89, 93, 2)]);
    }

    #[test]
    fn test_mutation_keeps_handles_stable() {
        let mut batch = Batch::new();
        let vertices = ScreenRect::new(0, 0, 10, 10).vertices();
        let quad = batch.add_quad(vertices, Color::RGB(0, 0, 0), Layer::Mid);
        let text = batch.add_label(label("x", (5, 5), Anchor::Center));

        batch.set_quad_vertices(quad, ScreenRect::new(20, 20, 30, 30).vertices());
        batch.set_label_geometry(text, (35, 35), 28.0);

        assert_eq!(batch.quad_count(), 1);
        assert_eq!(batch.label_count(), 1);
        assert_eq!(
            batch.quad_vertices(quad).map(|v| bounding_rect(&v)),
            Some(ScreenRect::new(20, 20, 30, 30))
        );
        let moved = batch.label(text).unwrap();
        assert_eq!(moved.position, (35, 35));
        assert_eq!(moved.font_size, 28.0);
    }

    #[test]
    fn test_empty_quads_are_skipped() {
        let mut batch = Batch::new();
        batch.add_quad(ScreenRect::new(5, 5, 0, 10).vertices(), Color::RGB(0, 0, 0), Layer::Back);

        let mut recorder = Recorder::default();
        batch.draw(&mut recorder).unwrap();
        assert!(recorder.calls.is_empty());
    }
}
