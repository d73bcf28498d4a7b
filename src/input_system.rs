use sdl2::event::{Event, WindowEvent};
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// Input the menus react to
///
/// Raw SDL2 events are reduced to these three actions. Everything else
/// (keyboard, motion, other mouse buttons) is ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    /// Primary-button press in window pixels
    Click(i32, i32),

    /// New window size in pixels
    Resize(u32, u32),

    Quit,
}

/// InputSystem translates SDL2 events into MenuActions
///
/// This keeps the event loop free of SDL2 pattern matching and lets the
/// translation be tested without a video subsystem.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drains pending SDL2 events and returns the actions to handle this frame
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<MenuAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }

    /// Maps a single event, if the menus care about it
    pub fn translate(&self, event: &Event) -> Option<MenuAction> {
        match event {
            Event::Quit { .. } => Some(MenuAction::Quit),
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => Some(MenuAction::Click(*x, *y)),
            // SDL sends `Resized` alongside `SizeChanged` for user resizes
            Event::Window {
                win_event: WindowEvent::SizeChanged(width, height),
                ..
            } => Some(MenuAction::Resize(
                (*width).max(0) as u32,
                (*height).max(0) as u32,
            )),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
