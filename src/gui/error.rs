use std::fmt;

/// What kind of registry entry a name conflict happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Button,
    Label,
    Menu,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ElementKind::Button => write!(f, "button"),
            ElementKind::Label => write!(f, "label"),
            ElementKind::Menu => write!(f, "menu"),
        }
    }
}

/// Errors that can occur while building or driving menus
#[derive(Debug, Clone, PartialEq)]
pub enum MenuError {
    /// A button, label or menu with that name is already registered
    NameConflict { kind: ElementKind, name: String },

    /// No menu is registered under that name
    NoSuchMenu(String),

    /// Target rectangle is smaller than the 100-unit grid on some axis
    DegenerateTransform { width: u32, height: u32 },

    /// `draw`/`on_click` was called while no menu is active
    NoActiveMenu,

    /// The drawing backend failed
    Render(String),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MenuError::NameConflict { kind, name } => {
                write!(f, "A {} named '{}' already exists", kind, name)
            }
            MenuError::NoSuchMenu(name) => {
                write!(f, "No menu named '{}'", name)
            }
            MenuError::DegenerateTransform { width, height } => {
                write!(
                    f,
                    "Target rectangle {}x{} is smaller than the 100x100 grid",
                    width, height
                )
            }
            MenuError::NoActiveMenu => {
                write!(f, "No menu is active")
            }
            MenuError::Render(msg) => {
                write!(f, "Render error: {}", msg)
            }
        }
    }
}

impl std::error::Error for MenuError {}

impl From<MenuError> for String {
    fn from(error: MenuError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_conflict_message_names_the_element() {
        let err = MenuError::NameConflict {
            kind: ElementKind::Button,
            name: "he".to_string(),
        };
        assert_eq!(err.to_string(), "A button named 'he' already exists");
    }

    #[test]
    fn test_error_converts_to_string() {
        let msg: String = MenuError::NoSuchMenu("blank".to_string()).into();
        assert_eq!(msg, "No menu named 'blank'");
    }
}
