use indexmap::IndexMap;

pub const EDIT_PRODUCT_ROUTE: &str = "EditProduct";
pub const PRODUCT_ID_PARAM: &str = "productId";

/// Navigation as seen from a screen: route parameters in, "go back" out.
pub trait Navigator {
    fn param(&self, name: &str) -> Option<&str>;
    fn set_param(&mut self, name: &str, value: String);
    fn go_back(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: String,
    pub params: IndexMap<String, String>,
}

impl Route {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: IndexMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

/// A plain route stack. Parameters are read from and written to the top route.
#[derive(Debug, Clone, Default)]
pub struct StackNavigator {
    routes: Vec<Route>,
}

impl StackNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(route = %route.name, "navigate");
        self.routes.push(route);
    }

    pub fn current(&self) -> Option<&Route> {
        self.routes.last()
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }
}

impl Navigator for StackNavigator {
    fn param(&self, name: &str) -> Option<&str> {
        self.current()
            .and_then(|route| route.params.get(name))
            .map(String::as_str)
    }

    fn set_param(&mut self, name: &str, value: String) {
        if let Some(route) = self.routes.last_mut() {
            route.params.insert(name.to_string(), value);
        }
    }

    fn go_back(&mut self) {
        if let Some(route) = self.routes.pop() {
            tracing::debug!(route = %route.name, "go back");
        }
    }
}
