//! Menu Component
//!
//! A menu fills a target rectangle on screen and holds named buttons and text
//! labels authored on a 100x100 virtual grid. The grid is rescaled to the
//! rectangle through a [`Transform`], both for drawing and for turning raw
//! clicks back into virtual coordinates.

use super::button::Button;
use super::error::{ElementKind, MenuError};
use super::widget::Widget;
use crate::render::{Batch, Layer, QuadId, Surface};
use crate::transform::{ScreenRect, Transform, VirtualRect};
use sdl2::pixels::Color;

/// Default fill for buttons and labels
pub const DEFAULT_WIDGET_COLOR: Color = Color::RGB(0, 255, 255);

/// Construction-time appearance of a menu
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Background panel color
    pub background_color: Color,

    /// Font family requested for every label
    pub font_name: String,

    /// Fixed font size; `None` derives it from each widget's box and the scale
    pub font_size: Option<f32>,

    /// Label text color
    pub text_color: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            background_color: Color::RGB(255, 0, 0),
            font_name: "Times New Roman".to_string(),
            font_size: None,
            text_color: Color::RGB(255, 255, 255),
        }
    }
}

/// A collection of buttons and text labels on a 100x100 grid that scales
/// with its target rectangle
///
/// # Example
///
/// ```ignore
/// let mut menu = Menu::new(ScreenRect::new(100, 100, 700, 700), Color::RGB(0, 0, 0))?;
/// let bounds = VirtualRect::new(0, 0, 25, 25);
/// menu.add_button("he", "hi", bounds, || println!("hi"), DEFAULT_WIDGET_COLOR)?;
///
/// menu.on_click(112, 112); // fires "he"
/// menu.draw(&mut canvas)?;
/// ```
#[derive(Debug)]
pub struct Menu {
    rect: ScreenRect,
    transform: Transform,
    style: MenuStyle,
    batch: Batch,
    background: QuadId,
    buttons: Vec<(String, Button)>,
    labels: Vec<(String, Widget)>,
}

impl Menu {
    /// Creates a menu with default styling and the given background color
    pub fn new(rect: ScreenRect, background_color: Color) -> Result<Self, MenuError> {
        Menu::with_style(
            rect,
            MenuStyle {
                background_color,
                ..Default::default()
            },
        )
    }

    /// Creates a menu with custom styling
    pub fn with_style(rect: ScreenRect, style: MenuStyle) -> Result<Self, MenuError> {
        let transform = Transform::from_rect(rect)?;

        let mut batch = Batch::new();
        let background = batch.add_quad(rect.vertices(), style.background_color, Layer::Back);

        Ok(Menu {
            rect,
            transform,
            style,
            batch,
            background,
            buttons: Vec::new(),
            labels: Vec::new(),
        })
    }

    /// Adds a button laid out with the current transform
    ///
    /// # Errors
    ///
    /// `MenuError::NameConflict` if a button called `name` exists; the
    /// existing button is left untouched.
    pub fn add_button(
        &mut self,
        name: &str,
        text: &str,
        bounds: VirtualRect,
        on_click: impl FnMut() + 'static,
        color: Color,
    ) -> Result<&Button, MenuError> {
        if self.button(name).is_some() {
            return Err(MenuError::NameConflict {
                kind: ElementKind::Button,
                name: name.to_string(),
            });
        }

        let widget = Widget::new(
            text,
            bounds,
            color,
            &self.style,
            &self.transform,
            &mut self.batch,
        );
        self.buttons
            .push((name.to_string(), Button::new(widget, Box::new(on_click))));

        Ok(&self.buttons[self.buttons.len() - 1].1)
    }

    /// Adds a text label laid out with the current transform
    ///
    /// # Errors
    ///
    /// `MenuError::NameConflict` if a label called `name` exists.
    pub fn add_label(
        &mut self,
        name: &str,
        text: &str,
        bounds: VirtualRect,
        color: Color,
    ) -> Result<&Widget, MenuError> {
        if self.label(name).is_some() {
            return Err(MenuError::NameConflict {
                kind: ElementKind::Label,
                name: name.to_string(),
            });
        }

        let widget = Widget::new(
            text,
            bounds,
            color,
            &self.style,
            &self.transform,
            &mut self.batch,
        );
        self.labels.push((name.to_string(), widget));

        Ok(&self.labels[self.labels.len() - 1].1)
    }

    pub fn button(&self, name: &str) -> Option<&Button> {
        self.buttons
            .iter()
            .find(|(button_name, _)| button_name == name)
            .map(|(_, button)| button)
    }

    pub fn label(&self, name: &str) -> Option<&Widget> {
        self.labels
            .iter()
            .find(|(label_name, _)| label_name == name)
            .map(|(_, label)| label)
    }

    /// Button names in registration order
    pub fn button_names(&self) -> impl Iterator<Item = &str> {
        self.buttons.iter().map(|(name, _)| name.as_str())
    }

    /// Flushes the background, widget fills and text in one batched pass
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), String> {
        self.batch.draw(surface)
    }

    /// Dispatches a click given in screen pixels.
    ///
    /// Every button is checked in registration order and the loop does not
    /// stop at the first hit, so overlapping buttons all fire. Returns how
    /// many buttons fired.
    pub fn on_click(&mut self, real_x: i32, real_y: i32) -> usize {
        let (vx, vy) = self.transform.to_virtual(real_x, real_y);

        let mut fired = 0;
        for (_, button) in self.buttons.iter_mut() {
            if button.check_click(vx, vy) {
                fired += 1;
            }
        }

        tracing::debug!(real_x, real_y, vx, vy, fired, "menu click");
        fired
    }

    /// Moves the menu to a new target rectangle.
    ///
    /// The rectangle is validated first; on error nothing changes.
    pub fn resize(&mut self, rect: ScreenRect) -> Result<(), MenuError> {
        let transform = Transform::from_rect(rect)?;
        self.apply_resize(rect, transform);
        Ok(())
    }

    /// Applies an already validated transform to the background and every widget
    pub(crate) fn apply_resize(&mut self, rect: ScreenRect, transform: Transform) {
        self.rect = rect;
        self.transform = transform;

        self.batch.set_quad_vertices(self.background, rect.vertices());

        for (_, button) in self.buttons.iter_mut() {
            button
                .widget_mut()
                .resize(&self.transform, &self.style, &mut self.batch);
        }

        for (_, label) in self.labels.iter_mut() {
            label.resize(&self.transform, &self.style, &mut self.batch);
        }
    }

    pub fn rect(&self) -> ScreenRect {
        self.rect
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn style(&self) -> &MenuStyle {
        &self.style
    }

    pub fn batch(&self) -> &Batch {
        &self.batch
    }

    /// Current screen-space corners of the background panel
    pub fn background_vertices(&self) -> Option<[(i32, i32); 4]> {
        self.batch.quad_vertices(self.background)
    }
}
