//! Scalable Menu System
//!
//! Menus are laid out on a fixed 100x100 virtual grid that is rescaled to
//! whatever screen rectangle the menu currently occupies.
//!
//! # Architecture
//!
//! - [`Widget`] - colored box with centered text, positioned in virtual space
//! - [`Button`] - a widget plus a click action and strict hit-testing
//! - [`Menu`] - target rectangle, transform, background and the named
//!   button/label registries
//! - [`MenuManager`] - named menus, the active menu, and menu transitions
//!
//! Input flows manager -> active menu -> transform -> buttons. Geometry for
//! drawing flows through the same transform, so clicks and pixels always agree.
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::gui::{MenuManager, DEFAULT_WIDGET_COLOR};
//!
//! let mut menus = MenuManager::new();
//! menus.make_menu("test", ScreenRect::new(100, 100, 700, 700), Color::RGB(0, 0, 0))?;
//! menus.change_menu("test")?;
//!
//! // Handle input
//! menus.on_click(112, 112)?;
//! menus.resize(ScreenRect::new(0, 0, 800, 800))?;
//!
//! // Render
//! menus.draw(&mut canvas)?;
//! ```

pub mod button;
pub mod error;
pub mod manager;
pub mod menu;
pub mod widget;

pub use button::Button;
pub use error::{ElementKind, MenuError};
pub use manager::{ChangeHandler, MenuManager, NO_MENU};
pub use menu::{Menu, MenuStyle, DEFAULT_WIDGET_COLOR};
pub use widget::Widget;
