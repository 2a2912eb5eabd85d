use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::{
    form::FormCommand,
    presentation::{self, UiContext},
    screen::{
        EditProductScreen, HeaderOptions, Navigator, SaveSlot, StackNavigator, SubmitOutcome,
    },
    store::{ProductAction, ProductStore},
};

use super::{
    input::{KeyCommand, classify},
    options::UiOptions,
    popup::AlertPopup,
    product_editor::{EditorResult, ScreenExit},
    status::StatusLine,
    terminal::TerminalGuard,
};

const HELP_TEXT: &str = "Tab/Shift+Tab move • Ctrl+S save • Esc/Ctrl+Q leave";

pub(crate) struct App<S> {
    store: S,
    navigator: StackNavigator,
    screen: EditProductScreen,
    header: HeaderOptions,
    save_item: SaveSlot,
    route_depth: usize,
    options: UiOptions,
    status: StatusLine,
    popup: Option<AlertPopup>,
    exit_armed: bool,
    saved: Option<ProductAction>,
}

impl<S: ProductStore> App<S> {
    pub fn new(store: S, navigator: StackNavigator, options: UiOptions) -> Self {
        let screen = EditProductScreen::mount(&navigator, &store);
        let header = HeaderOptions::for_route(&navigator, options.platform);
        let save_item = screen.save_slot();
        let route_depth = navigator.depth();
        Self {
            store,
            navigator,
            screen,
            header,
            save_item,
            route_depth,
            options,
            status: StatusLine::new(),
            popup: None,
            exit_armed: false,
            saved: None,
        }
    }

    pub fn run(mut self) -> Result<EditorResult<S>> {
        {
            let mut terminal = TerminalGuard::new()?;
            while !self.should_quit() {
                terminal.draw(|frame| self.draw(frame))?;
                if !event::poll(self.options.tick_rate)? {
                    continue;
                }
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    Event::Mouse(_) => {}
                    Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
                }
            }
        }
        Ok(self.finish())
    }

    fn should_quit(&self) -> bool {
        self.navigator.depth() < self.route_depth
    }

    fn finish(self) -> EditorResult<S> {
        self.save_item.clear();
        let exit = match self.saved {
            Some(action) => ScreenExit::Saved(action),
            None => ScreenExit::Abandoned,
        };
        tracing::debug!(?exit, "product screen closed");
        EditorResult {
            store: self.store,
            exit,
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = if self.options.show_help {
            Some(HELP_TEXT)
        } else {
            None
        };

        presentation::draw(
            frame,
            UiContext {
                header: &self.header,
                screen: &self.screen,
                status_message: self.status.message(),
                dirty: self.screen.is_dirty(),
                error_count: self.screen.form_state().invalid_fields().count(),
                help,
                alert: self.popup.as_ref().map(|popup| popup.as_render()),
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.popup.is_some() {
            self.popup = None;
            self.status.ready();
            return;
        }

        match classify(&key) {
            KeyCommand::Save => {
                self.exit_armed = false;
                self.on_save();
            }
            KeyCommand::Quit => self.on_exit(),
            KeyCommand::NextField => {
                self.screen.apply(FormCommand::FocusNextField);
                self.exit_armed = false;
            }
            KeyCommand::PrevField => {
                self.screen.apply(FormCommand::FocusPrevField);
                self.exit_armed = false;
            }
            KeyCommand::Edit(event) => {
                if self.screen.handle_key(&event) {
                    self.exit_armed = false;
                    self.status.editing(self.screen.focused_field().label());
                }
            }
            KeyCommand::None => {}
        }
    }

    /// The header's Save item: runs whatever handler the screen last bound.
    fn on_save(&mut self) {
        match self.save_item.invoke(&mut self.store, &mut self.navigator) {
            Some(SubmitOutcome::Submitted(action)) => {
                self.status.set_raw("Product submitted");
                self.saved = Some(action);
            }
            Some(SubmitOutcome::Rejected(failure)) => {
                self.status.issues_remaining(failure.invalid_fields.len());
                self.popup = Some(AlertPopup::new(failure.alert()));
            }
            None => {}
        }
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.screen.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.navigator.go_back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    use crate::{
        domain::{Product, ProductId},
        form::FieldName,
        screen::{EDIT_PRODUCT_ROUTE, PRODUCT_ID_PARAM, Route},
        store::{MemoryStore, ProductLookup, StoreError, create_product},
    };

    fn press(app: &mut App<MemoryStore>, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_key(KeyEvent::new(code, modifiers));
    }

    fn type_text(app: &mut App<MemoryStore>, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    fn app(store: MemoryStore, product_id: Option<&str>) -> App<MemoryStore> {
        let mut route = Route::new(EDIT_PRODUCT_ROUTE);
        if let Some(id) = product_id {
            route = route.with_param(PRODUCT_ID_PARAM, id);
        }
        let mut navigator = StackNavigator::new();
        navigator.navigate(route);
        App::new(store, navigator, UiOptions::default())
    }

    #[test]
    fn saving_an_empty_form_shows_the_alert() {
        let mut app = app(MemoryStore::new("u1"), None);
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        let popup = app.popup.as_ref().expect("alert shown");
        assert_eq!(popup.as_render().title, "Wrong input!");
        assert!(!app.should_quit());
        assert!(app.store.is_empty());

        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.popup.is_none(), "any key acknowledges the alert");
        assert_eq!(app.screen.focused_field(), FieldName::Title);
    }

    #[test]
    fn filling_every_field_and_saving_creates_the_product() {
        let mut app = app(MemoryStore::new("u1"), None);
        type_text(&mut app, "Chair");
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        type_text(&mut app, "http://x/2.png");
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        type_text(&mut app, "29.99");
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        type_text(&mut app, "Wooden");
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert!(app.should_quit());
        let result = app.finish();
        assert_eq!(
            result.exit,
            ScreenExit::Saved(create_product("Chair", "Wooden", "http://x/2.png", "29.99"))
        );
        assert_eq!(result.store.len(), 1);
    }

    #[test]
    fn unparsable_price_is_submitted_but_not_stored() {
        let mut app = app(MemoryStore::new("u1"), None);
        type_text(&mut app, "Chair");
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        type_text(&mut app, "http://x/2.png");
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        type_text(&mut app, ".");
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        type_text(&mut app, "Wooden");
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert_eq!(app.status.message(), "Product submitted");
        let result = app.finish();
        assert_eq!(
            result.exit,
            ScreenExit::Saved(create_product("Chair", "Wooden", "http://x/2.png", "."))
        );
        assert!(result.store.is_empty());
        assert!(matches!(
            result.store.last_rejection(),
            Some(StoreError::InvalidPrice(raw)) if raw == "."
        ));
    }

    #[test]
    fn escape_leaves_after_confirmation() {
        let mut app = app(MemoryStore::new("u1"), None);
        type_text(&mut app, "C");
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit());
        let header_copy = app.save_item.clone();
        assert!(header_copy.is_bound());
        assert_eq!(app.finish().exit, ScreenExit::Abandoned);
        assert!(!header_copy.is_bound(), "dismissal discards the save handler");
    }

    #[test]
    fn leaving_with_edits_needs_confirmation() {
        let mut app = app(MemoryStore::new("u1"), None);
        type_text(&mut app, "C");
        press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(!app.should_quit());
        assert!(app.exit_armed);
        press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit());
        assert_eq!(app.finish().exit, ScreenExit::Abandoned);
    }

    #[test]
    fn edit_mode_save_uses_the_latest_values() {
        let lamp = Product {
            id: ProductId::new("7"),
            owner_id: "u1".to_string(),
            title: "Lamp".to_string(),
            image_url: "http://x/1.png".to_string(),
            description: "A lamp".to_string(),
            price: 12.5,
        };
        let store = MemoryStore::with_products("u1", [lamp]).unwrap();
        let mut app = app(store, Some("7"));
        assert_eq!(app.header.title, "Edit Product");

        type_text(&mut app, "!");
        app.screen.text_changed(FieldName::Price, "1");
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

        let result = app.finish();
        let saved = result.store.find_user_product(&ProductId::new("7")).unwrap();
        assert_eq!(saved.title, "Lamp!");
        assert_eq!(saved.price, 12.5);
    }
}
