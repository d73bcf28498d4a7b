//! Menu Manager
//!
//! Owns every named [`Menu`] and remembers which one is active. Draw and
//! click events are routed to the active menu; resizes go to all menus so
//! hidden ones stay consistent with the window.
//!
//! # Example
//!
//! ```ignore
//! let mut menus = MenuManager::new();
//! menus.make_menu("test", ScreenRect::new(100, 100, 700, 700), Color::RGB(0, 0, 0))?;
//! menus.make_menu("blank", ScreenRect::new(100, 100, 700, 700), Color::RGB(40, 40, 40))?;
//!
//! let to_blank = menus.make_change_handler("blank")?;
//! let bounds = VirtualRect::new(0, 0, 25, 25);
//! menus
//!     .get_menu_mut("test")?
//!     .add_button("go", "go", bounds, to_blank.into_action(), DEFAULT_WIDGET_COLOR)?;
//!
//! menus.change_menu("test")?;
//! menus.on_click(112, 112)?; // "blank" is now active
//! ```

use super::error::{ElementKind, MenuError};
use super::menu::{Menu, MenuStyle};
use crate::render::Surface;
use crate::transform::{ScreenRect, Transform};
use sdl2::pixels::Color;
use std::cell::RefCell;
use std::rc::Rc;

/// Name passed to [`MenuManager::change_menu`] to deactivate every menu.
/// Reserved: no menu can be registered under it.
pub const NO_MENU: &str = "";

/// Shared slot holding the name of the active menu
type ActiveSlot = Rc<RefCell<Option<String>>>;

/// Deferred menu switch, bound to a manager's active slot and a target name
///
/// Created by [`MenuManager::make_change_handler`], which has already checked
/// that the target exists. Menus are never removed, so the target stays valid
/// for the handler's whole life.
#[derive(Debug, Clone)]
pub struct ChangeHandler {
    active: ActiveSlot,
    target: String,
}

impl ChangeHandler {
    /// Makes the target menu active
    pub fn invoke(&self) {
        tracing::debug!(menu = %self.target, "change handler fired");
        *self.active.borrow_mut() = Some(self.target.clone());
    }

    /// Turns the handler into a button action
    pub fn into_action(self) -> impl FnMut() + 'static {
        move || self.invoke()
    }
}

/// A collection of menus that regulates the transitions between them
#[derive(Debug, Default)]
pub struct MenuManager {
    menus: Vec<(String, Menu)>,
    active: ActiveSlot,
}

impl MenuManager {
    pub fn new() -> Self {
        MenuManager::default()
    }

    /// Registers a new menu with default styling
    ///
    /// # Errors
    ///
    /// - `MenuError::NameConflict` if `name` is taken (or is [`NO_MENU`])
    /// - `MenuError::DegenerateTransform` if `rect` is smaller than 100x100
    pub fn make_menu(
        &mut self,
        name: &str,
        rect: ScreenRect,
        background_color: Color,
    ) -> Result<&mut Menu, MenuError> {
        self.make_menu_with_style(
            name,
            rect,
            MenuStyle {
                background_color,
                ..Default::default()
            },
        )
    }

    /// Registers a new menu with custom styling
    pub fn make_menu_with_style(
        &mut self,
        name: &str,
        rect: ScreenRect,
        style: MenuStyle,
    ) -> Result<&mut Menu, MenuError> {
        if name == NO_MENU || self.position(name).is_some() {
            return Err(MenuError::NameConflict {
                kind: ElementKind::Menu,
                name: name.to_string(),
            });
        }

        let menu = Menu::with_style(rect, style)?;
        self.menus.push((name.to_string(), menu));

        tracing::info!(
            menu = name,
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "menu created"
        );

        let index = self.menus.len() - 1;
        Ok(&mut self.menus[index].1)
    }

    /// Makes `name` the active menu; [`NO_MENU`] deactivates all menus.
    ///
    /// The previously active menu is kept as it is.
    pub fn change_menu(&mut self, name: &str) -> Result<(), MenuError> {
        if name == NO_MENU {
            self.clear_menu();
            return Ok(());
        }

        if self.position(name).is_none() {
            return Err(MenuError::NoSuchMenu(name.to_string()));
        }

        tracing::debug!(menu = name, "menu changed");
        *self.active.borrow_mut() = Some(name.to_string());
        Ok(())
    }

    /// Deactivates the current menu, if any
    pub fn clear_menu(&mut self) {
        tracing::debug!("menu cleared");
        *self.active.borrow_mut() = None;
    }

    pub fn get_menu(&self, name: &str) -> Result<&Menu, MenuError> {
        self.position(name)
            .map(|index| &self.menus[index].1)
            .ok_or_else(|| MenuError::NoSuchMenu(name.to_string()))
    }

    /// Mutable access to a stored menu (e.g. to add buttons after creation)
    pub fn get_menu_mut(&mut self, name: &str) -> Result<&mut Menu, MenuError> {
        match self.position(name) {
            Some(index) => Ok(&mut self.menus[index].1),
            None => Err(MenuError::NoSuchMenu(name.to_string())),
        }
    }

    /// Name of the active menu, if any
    pub fn active_menu_name(&self) -> Option<String> {
        self.active.borrow().clone()
    }

    /// The active menu, or `None` when no menu is selected
    pub fn get_current_menu(&self) -> Option<&Menu> {
        let index = self.active_index()?;
        Some(&self.menus[index].1)
    }

    pub fn get_current_menu_mut(&mut self) -> Option<&mut Menu> {
        let index = self.active_index()?;
        Some(&mut self.menus[index].1)
    }

    /// Draws the active menu
    ///
    /// # Errors
    ///
    /// `MenuError::NoActiveMenu` when no menu is selected, or
    /// `MenuError::Render` when the surface fails.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), MenuError> {
        let menu = self.get_current_menu().ok_or(MenuError::NoActiveMenu)?;
        menu.draw(surface).map_err(MenuError::Render)
    }

    /// Routes a click in screen pixels to the active menu; returns how many
    /// buttons fired.
    ///
    /// A button action may switch menus. The switch takes effect for the
    /// next event, the click itself finishes on the menu it started on.
    pub fn on_click(&mut self, x: i32, y: i32) -> Result<usize, MenuError> {
        let menu = self.get_current_menu_mut().ok_or(MenuError::NoActiveMenu)?;
        Ok(menu.on_click(x, y))
    }

    /// Moves every registered menu, active or not, to `rect`.
    ///
    /// The transform is computed once up front, so a degenerate rectangle is
    /// rejected before any menu changes.
    pub fn resize(&mut self, rect: ScreenRect) -> Result<(), MenuError> {
        let transform = Transform::from_rect(rect)?;

        for (_, menu) in self.menus.iter_mut() {
            menu.apply_resize(rect, transform);
        }

        tracing::info!(
            width = rect.width,
            height = rect.height,
            menus = self.menus.len(),
            "menus resized"
        );
        Ok(())
    }

    /// Returns a handler that switches to `name` when invoked later.
    ///
    /// # Errors
    ///
    /// `MenuError::NoSuchMenu` right away if `name` is not registered yet.
    pub fn make_change_handler(&self, name: &str) -> Result<ChangeHandler, MenuError> {
        if self.position(name).is_none() {
            return Err(MenuError::NoSuchMenu(name.to_string()));
        }

        Ok(ChangeHandler {
            active: Rc::clone(&self.active),
            target: name.to_string(),
        })
    }

    /// Menu names in creation order
    pub fn menu_names(&self) -> impl Iterator<Item = &str> {
        self.menus.iter().map(|(name, _)| name.as_str())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.menus.iter().position(|(menu_name, _)| menu_name == name)
    }

    fn active_index(&self) -> Option<usize> {
        let active = self.active.borrow();
        self.position(active.as_deref()?)
    }
}
