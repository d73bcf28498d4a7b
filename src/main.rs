use sdl2::pixels::Color;

mod logging;

use menugrid::config::ThemeConfig;
use menugrid::gui::{MenuError, MenuManager};
use menugrid::input_system::{InputSystem, MenuAction};
use menugrid::transform::{ScreenRect, VirtualRect};

/// Builds the demo menus: "test" with a few buttons and a label, and "blank"
/// with a way back. Every menu fills the whole window.
fn build_menus(theme: &ThemeConfig, window: ScreenRect) -> Result<MenuManager, MenuError> {
    let mut menus = MenuManager::new();

    menus.make_menu_with_style("test", window, theme.menu_style())?;
    menus.make_menu_with_style(
        "blank",
        window,
        theme.menu_style_with_background(Color::RGB(20, 20, 30)),
    )?;

    let to_blank = menus.make_change_handler("blank")?;
    let to_test = menus.make_change_handler("test")?;

    let test = menus.get_menu_mut("test")?;
    test.add_button(
        "he",
        "hi",
        VirtualRect::new(0, 0, 25, 25),
        || tracing::info!("hi"),
        theme.button(),
    )?;
    test.add_button(
        "hi",
        "bye",
        VirtualRect::new(25, 25, 25, 45),
        || tracing::info!("bye"),
        theme.button(),
    )?;
    test.add_button(
        "next",
        "next",
        VirtualRect::new(75, 0, 25, 15),
        to_blank.into_action(),
        theme.button(),
    )?;
    test.add_label("hl", "la", VirtualRect::new(50, 70, 50, 30), theme.label())?;

    let blank = menus.get_menu_mut("blank")?;
    blank.add_label("title", "blank", VirtualRect::new(20, 10, 60, 20), theme.label())?;
    blank.add_button(
        "back",
        "back",
        VirtualRect::new(35, 60, 30, 15),
        to_test.into_action(),
        theme.button(),
    )?;

    menus.change_menu("test")?;
    Ok(menus)
}

fn main() -> Result<(), String> {
    logging::init();

    let theme = ThemeConfig::load_or_default();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("Menus", theme.window_width, theme.window_height)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;
    let input = InputSystem::new();

    let (width, height) = canvas.output_size()?;
    let mut menus = build_menus(&theme, ScreenRect::new(0, 0, width, height))?;

    'running: loop {
        for action in input.poll_events(&mut event_pump) {
            match action {
                MenuAction::Quit => break 'running,
                MenuAction::Click(x, y) => {
                    if menus.get_current_menu().is_some() {
                        menus.on_click(x, y)?;
                    }
                }
                MenuAction::Resize(width, height) => {
                    // Too small for the grid: keep the previous layout
                    if let Err(error) = menus.resize(ScreenRect::new(0, 0, width, height)) {
                        tracing::warn!(error = %error, "resize ignored");
                    }
                }
            }
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        if menus.get_current_menu().is_some() {
            menus.draw(&mut canvas)?;
        }
        canvas.present();

        // ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_menus_build_and_link() {
        let window = ScreenRect::new(0, 0, 800, 800);
        let mut menus = build_menus(&ThemeConfig::default(), window).unwrap();
        assert_eq!(menus.active_menu_name().as_deref(), Some("test"));

        // "next" sits at virtual (75..100, 0..15), scale 8
        assert_eq!(menus.on_click(700, 60), Ok(1));
        assert_eq!(menus.active_menu_name().as_deref(), Some("blank"));

        // "back" sits at virtual (35..65, 60..75)
        assert_eq!(menus.on_click(400, 540), Ok(1));
        assert_eq!(menus.active_menu_name().as_deref(), Some("test"));
    }
}
