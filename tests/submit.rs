use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use product_editor::{
    Product, ProductId,
    form::FieldName,
    screen::{
        EDIT_PRODUCT_ROUTE, EditMode, EditProductScreen, Navigator, PRODUCT_ID_PARAM, Route,
        StackNavigator, SubmitOutcome,
    },
    store::{ProductAction, ProductDispatch, ProductLookup, create_product, update_product},
};

#[derive(Default)]
struct FakeStore {
    products: Vec<Product>,
    dispatched: Vec<ProductAction>,
}

impl ProductLookup for FakeStore {
    fn find_user_product(&self, id: &ProductId) -> Option<Product> {
        self.products.iter().find(|product| &product.id == id).cloned()
    }
}

impl ProductDispatch for FakeStore {
    fn dispatch(&mut self, action: ProductAction) {
        self.dispatched.push(action);
    }
}

fn lamp() -> Product {
    Product {
        id: ProductId::new("7"),
        owner_id: "u1".to_string(),
        title: "Lamp".to_string(),
        image_url: "http://x/1.png".to_string(),
        description: "A lamp".to_string(),
        price: 10.0,
    }
}

fn open(store: &FakeStore, product_id: Option<&str>) -> (StackNavigator, EditProductScreen) {
    let mut nav = StackNavigator::new();
    nav.navigate(Route::new("UserProducts"));
    let mut route = Route::new(EDIT_PRODUCT_ROUTE);
    if let Some(id) = product_id {
        route = route.with_param(PRODUCT_ID_PARAM, id);
    }
    nav.navigate(route);
    let screen = EditProductScreen::mount(&nav, store);
    (nav, screen)
}

#[test]
fn invalid_submit_dispatches_nothing() {
    let mut store = FakeStore::default();
    let (mut nav, mut screen) = open(&store, None);
    screen.text_changed(FieldName::Title, "Chair");
    let before = screen.form_state().clone();

    let outcome = screen
        .save_slot()
        .invoke(&mut store, &mut nav)
        .expect("handler bound on mount");

    let SubmitOutcome::Rejected(failure) = outcome else {
        panic!("expected a validation failure");
    };
    assert_eq!(
        failure.invalid_fields,
        vec![FieldName::ImageUrl, FieldName::Description, FieldName::Price]
    );
    assert_eq!(failure.alert().message, "Please check the errors in the form");
    assert!(store.dispatched.is_empty());
    assert_eq!(screen.form_state(), &before);
    assert_eq!(nav.current().map(|route| route.name.as_str()), Some(EDIT_PRODUCT_ROUTE));
}

#[test]
fn create_submit_dispatches_one_create_and_goes_back() {
    let mut store = FakeStore::default();
    let (mut nav, mut screen) = open(&store, None);
    assert_eq!(screen.mode(), EditMode::Create);
    screen.text_changed(FieldName::Title, "Chair");
    screen.text_changed(FieldName::ImageUrl, "http://x/2.png");
    screen.text_changed(FieldName::Description, "Wooden");
    screen.text_changed(FieldName::Price, "29.99");

    screen.save_slot().invoke(&mut store, &mut nav);

    assert_eq!(
        store.dispatched,
        vec![create_product("Chair", "Wooden", "http://x/2.png", "29.99")]
    );
    assert_eq!(nav.current().map(|route| route.name.as_str()), Some("UserProducts"));
}

#[test]
fn edit_submit_dispatches_one_update_without_price() {
    let mut store = FakeStore {
        products: vec![lamp()],
        ..FakeStore::default()
    };
    let (mut nav, mut screen) = open(&store, Some("7"));
    assert_eq!(screen.mode(), EditMode::Edit);
    screen.text_changed(FieldName::Description, "A reading lamp");
    screen.text_changed(FieldName::Price, "99");

    screen.save_slot().invoke(&mut store, &mut nav);

    assert_eq!(
        store.dispatched,
        vec![update_product(
            ProductId::new("7"),
            "Lamp",
            "A reading lamp",
            "http://x/1.png"
        )]
    );
    assert_eq!(nav.param(PRODUCT_ID_PARAM), None);
}

#[test]
fn header_copy_of_the_slot_always_runs_the_latest_handler() {
    let mut store = FakeStore {
        products: vec![lamp()],
        ..FakeStore::default()
    };
    let (mut nav, mut screen) = open(&store, Some("7"));
    let header_save = screen.save_slot();
    let mut last_revision = header_save.revision();

    let edits = [
        (FieldName::Price, "1"),
        (FieldName::Title, "Lamp 2"),
        (FieldName::ImageUrl, "http://x/9.png"),
        (FieldName::Description, "Newer"),
    ];
    for (field, text) in edits {
        screen.text_changed(field, text);
        assert!(header_save.revision() > last_revision, "{field:?} edit must rebind");
        last_revision = header_save.revision();
        let bound = header_save.current().expect("bound");
        assert_eq!(bound.form_state(), screen.form_state());
        assert_eq!(bound.editing(), Some(&ProductId::new("7")));
    }

    // Same text again: nothing the handler depends on changed.
    screen.text_changed(FieldName::Description, "Newer");
    assert_eq!(header_save.revision(), last_revision);

    header_save.invoke(&mut store, &mut nav);
    assert_eq!(
        store.dispatched,
        vec![update_product(ProductId::new("7"), "Lamp 2", "Newer", "http://x/9.png")]
    );
}

#[test]
fn description_input_edits_only_description() {
    let store = FakeStore {
        products: vec![lamp()],
        ..FakeStore::default()
    };
    let (_nav, mut screen) = open(&store, Some("7"));
    screen.focus(FieldName::Description);
    screen.handle_key(&KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));

    let form = screen.form_state();
    assert_eq!(form.value(FieldName::Description), "A lam");
    assert_eq!(form.value(FieldName::Title), "Lamp");
    assert_eq!(form.value(FieldName::ImageUrl), "http://x/1.png");
    assert_eq!(form.value(FieldName::Price), "");
}
