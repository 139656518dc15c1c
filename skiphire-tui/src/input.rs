use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use skiphire_core::screen::LoadState;

use crate::app::{App, CursorMove};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
    /// Restart the catalog fetch after a failure
    Retry,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Backspace, Char, Down, Enter, Esc, Left, Right, Up};

    // Global shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if !key.modifiers.is_empty() && key.modifiers != KeyModifiers::SHIFT {
        return Action::None;
    }

    match key.code {
        Char('q') => return Action::Quit,
        Char('t') => {
            app.toggle_theme();
            return Action::None;
        }
        Esc | Backspace | Char('b') => {
            app.screen.back();
            return Action::None;
        }
        _ => {}
    }

    match app.screen.load_state() {
        LoadState::Loading => Action::None,
        LoadState::Failed(_) => {
            if key.code == Char('r') {
                Action::Retry
            } else {
                Action::None
            }
        }
        LoadState::Ready => {
            match key.code {
                Left | Char('h') => app.move_cursor(CursorMove::Left),
                Right | Char('l') => app.move_cursor(CursorMove::Right),
                Up | Char('k') => app.move_cursor(CursorMove::Up),
                Down | Char('j') => app.move_cursor(CursorMove::Down),
                Char(' ') => {
                    app.toggle_current();
                }
                Enter => {
                    app.screen.proceed();
                }
                _ => {}
            }
            Action::None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use skiphire_core::{
        model::{CatalogQuery, SkipId},
        ports::{NavigationSignal, PortError},
        screen::SkipSelectionScreen,
        selection::Selection,
    };
    use skiphire_provider_fixture::bundled_catalog;
    use tokio::sync::mpsc::UnboundedReceiver;

    use super::*;
    use crate::{navigation::ChannelNavigator, theme::ThemeMode};

    fn fresh_app() -> (App, UnboundedReceiver<NavigationSignal>) {
        let (navigator, rx) = ChannelNavigator::new();
        let screen = SkipSelectionScreen::new(Arc::new(navigator));
        let app = App::new(
            screen,
            CatalogQuery::new("NR32", None::<String>),
            ThemeMode::Light,
        );
        (app, rx)
    }

    fn loaded_app() -> (App, UnboundedReceiver<NavigationSignal>) {
        let (mut app, rx) = fresh_app();
        app.screen.complete_load(bundled_catalog());
        (app, rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_shortcuts() {
        let (mut app, _rx) = loaded_app();

        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &mut app), Action::Quit);
        assert_eq!(
            handle_key_event(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &mut app
            ),
            Action::Quit
        );
    }

    #[test]
    fn space_selects_and_enter_continues() {
        let (mut app, mut rx) = loaded_app();

        handle_key_event(press(KeyCode::Right), &mut app);
        handle_key_event(press(KeyCode::Char(' ')), &mut app);
        assert_eq!(
            app.screen.selection(),
            Selection::OneSelected(SkipId(17934))
        );

        handle_key_event(press(KeyCode::Enter), &mut app);
        assert_eq!(rx.try_recv().ok(), Some(NavigationSignal::Advance(SkipId(17934))));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn enter_without_selection_stays() {
        let (mut app, mut rx) = loaded_app();

        handle_key_event(press(KeyCode::Enter), &mut app);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn escape_goes_back_even_while_loading() {
        let (mut app, mut rx) = fresh_app();

        handle_key_event(press(KeyCode::Esc), &mut app);
        assert_eq!(rx.try_recv().ok(), Some(NavigationSignal::Back));
    }

    #[test]
    fn selection_keys_ignored_while_loading() {
        let (mut app, _rx) = fresh_app();

        handle_key_event(press(KeyCode::Char(' ')), &mut app);
        assert_eq!(app.screen.selection(), Selection::NoneSelected);
    }

    #[test]
    fn retry_only_after_failure() {
        let (mut app, _rx) = loaded_app();
        assert_eq!(handle_key_event(press(KeyCode::Char('r')), &mut app), Action::None);

        let (mut failed, _rx) = fresh_app();
        failed
            .screen
            .complete_load(Err(PortError::Internal("timeout".into())));
        assert_eq!(
            handle_key_event(press(KeyCode::Char('r')), &mut failed),
            Action::Retry
        );
    }

    #[test]
    fn t_toggles_theme() {
        let (mut app, _rx) = loaded_app();

        handle_key_event(press(KeyCode::Char('t')), &mut app);
        assert_eq!(app.theme, ThemeMode::Dark);
    }
}
