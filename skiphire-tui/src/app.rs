use skiphire_core::{
    model::{CatalogQuery, SkipOffering},
    screen::SkipSelectionScreen,
};
use throbber_widgets_tui::ThrobberState;

use crate::theme::ThemeMode;

/// Cards per row in the skip grid.
pub(crate) const COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy)]
pub(crate) enum CursorMove {
    Left,
    Right,
    Up,
    Down,
}

/// How the screen was left.
#[derive(Debug, Clone)]
pub(crate) enum Outcome {
    Advanced(SkipOffering),
    Back,
    Quit,
}

pub(crate) struct App {
    pub screen: SkipSelectionScreen,
    pub query: CatalogQuery,

    pub cursor: usize,
    pub theme: ThemeMode,
    pub spinner: ThrobberState,
}

impl App {
    pub(crate) fn new(screen: SkipSelectionScreen, query: CatalogQuery, theme: ThemeMode) -> Self {
        Self {
            screen,
            query,
            cursor: 0,
            theme,
            spinner: ThrobberState::default(),
        }
    }

    pub(crate) fn on_tick(&mut self) {
        if self.screen.is_loading() {
            self.spinner.calc_next();
        }
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub(crate) fn cursor_offering(&self) -> Option<&SkipOffering> {
        self.screen.offerings().get(self.cursor)
    }

    pub(crate) fn move_cursor(&mut self, step: CursorMove) {
        let count = self.screen.offerings().len();
        if count == 0 {
            self.cursor = 0;
            return;
        }

        let last = count - 1;
        self.cursor = match step {
            CursorMove::Left => self.cursor.saturating_sub(1),
            CursorMove::Right => (self.cursor + 1).min(last),
            CursorMove::Up => self.cursor.checked_sub(COLUMNS).unwrap_or(self.cursor),
            CursorMove::Down => {
                let below = self.cursor + COLUMNS;
                if below <= last { below } else { self.cursor }
            }
        };
    }

    /// Toggle the card under the cursor.
    pub(crate) fn toggle_current(&mut self) -> bool {
        let Some(id) = self.cursor_offering().map(|offering| offering.id) else {
            return false;
        };
        self.screen.toggle(id)
    }

    /// Bring the cursor back into the catalog after it was (re)loaded.
    pub(crate) fn clamp_cursor(&mut self) {
        let count = self.screen.offerings().len();
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use skiphire_core::{model::SkipId, selection::Selection};
    use skiphire_provider_fixture::bundled_catalog;

    use super::*;
    use crate::navigation::ChannelNavigator;

    fn loaded_app() -> App {
        let (navigator, _rx) = ChannelNavigator::new();
        let mut screen = SkipSelectionScreen::new(Arc::new(navigator));
        screen.complete_load(bundled_catalog());
        App::new(
            screen,
            CatalogQuery::new("NR32", None::<String>),
            ThemeMode::Light,
        )
    }

    #[test]
    fn cursor_moves_within_grid() {
        let mut app = loaded_app();

        app.move_cursor(CursorMove::Left);
        assert_eq!(app.cursor, 0);
        app.move_cursor(CursorMove::Down);
        assert_eq!(app.cursor, 3);
        app.move_cursor(CursorMove::Right);
        assert_eq!(app.cursor, 4);
        app.move_cursor(CursorMove::Up);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn cursor_stops_at_last_card() {
        let mut app = loaded_app();
        app.cursor = 7;

        app.move_cursor(CursorMove::Down);
        assert_eq!(app.cursor, 7);
        app.move_cursor(CursorMove::Right);
        app.move_cursor(CursorMove::Right);
        assert_eq!(app.cursor, 8);
    }

    #[test]
    fn toggles_card_under_cursor() {
        let mut app = loaded_app();
        app.cursor = 1;

        assert!(app.toggle_current());
        assert_eq!(
            app.screen.selection(),
            Selection::OneSelected(SkipId(17934))
        );
    }

    #[test]
    fn nothing_to_toggle_while_loading() {
        let (navigator, _rx) = ChannelNavigator::new();
        let screen = SkipSelectionScreen::new(Arc::new(navigator));
        let mut app = App::new(
            screen,
            CatalogQuery::new("NR32", None::<String>),
            ThemeMode::Dark,
        );

        app.move_cursor(CursorMove::Right);
        assert_eq!(app.cursor, 0);
        assert!(!app.toggle_current());
    }
}
