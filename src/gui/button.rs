//! Clickable button: a [`Widget`] plus an action

use super::widget::Widget;
use std::fmt;

/// Zero-argument click handler
pub type ClickAction = Box<dyn FnMut()>;

pub struct Button {
    widget: Widget,
    on_click: ClickAction,
}

impl Button {
    pub fn new(widget: Widget, on_click: ClickAction) -> Self {
        Button { widget, on_click }
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub(crate) fn widget_mut(&mut self) -> &mut Widget {
        &mut self.widget
    }

    /// True iff the virtual point lies strictly inside the button's box.
    ///
    /// A click exactly on the border does not count.
    pub fn hit_test(&self, vx: f32, vy: f32) -> bool {
        self.widget.bounds().contains_strict(vx, vy)
    }

    /// Runs the action if the virtual point hits this button; returns whether it fired
    pub fn check_click(&mut self, vx: f32, vy: f32) -> bool {
        if self.hit_test(vx, vy) {
            (self.on_click)();
            true
        } else {
            false
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Button")
            .field("widget", &self.widget)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::MenuStyle;
    use crate::render::Batch;
    use crate::transform::{ScreenRect, Transform, VirtualRect};
    use sdl2::pixels::Color;
    use std::cell::Cell;
    use std::rc::Rc;

    fn button(clicks: Rc<Cell<u32>>) -> Button {
        let transform = Transform::from_rect(ScreenRect::new(100, 100, 700, 700)).unwrap();
        let widget = Widget::new(
            "hi",
            VirtualRect::new(0, 0, 25, 25),
            Color::RGB(0, 255, 255),
            &MenuStyle::default(),
            &transform,
            &mut Batch::new(),
        );
        Button::new(widget, Box::new(move || clicks.set(clicks.get() + 1)))
    }

    #[test]
    fn test_hit_test_excludes_boundary() {
        let clicks = Rc::new(Cell::new(0));
        let button = button(clicks);

        assert!(!button.hit_test(0.0, 0.0));
        assert!(!button.hit_test(25.0, 25.0));
        assert!(!button.hit_test(12.0, 25.0));
        assert!(button.hit_test(12.0, 12.0));
    }

    #[test]
    fn test_check_click_fires_only_on_hit() {
        let clicks = Rc::new(Cell::new(0));
        let mut button = button(clicks.clone());

        assert!(!button.check_click(30.0, 12.0));
        assert_eq!(clicks.get(), 0);

        assert!(button.check_click(12.0, 12.0));
        assert!(button.check_click(1.5, 24.5));
        assert_eq!(clicks.get(), 2);
    }
}
