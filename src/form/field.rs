use std::ops::Index;

/// The fixed set of inputs on the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Title,
    ImageUrl,
    Description,
    Price,
}

impl FieldName {
    pub const COUNT: usize = 4;
    pub const ALL: [FieldName; FieldName::COUNT] = [
        FieldName::Title,
        FieldName::ImageUrl,
        FieldName::Description,
        FieldName::Price,
    ];

    fn index(self) -> usize {
        match self {
            FieldName::Title => 0,
            FieldName::ImageUrl => 1,
            FieldName::Description => 2,
            FieldName::Price => 3,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            FieldName::Title => "title",
            FieldName::ImageUrl => "imageUrl",
            FieldName::Description => "description",
            FieldName::Price => "price",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Title => "Title",
            FieldName::ImageUrl => "Image URL",
            FieldName::Description => "Description",
            FieldName::Price => "Price",
        }
    }

    pub fn error_hint(self) -> &'static str {
        match self {
            FieldName::Title => "Please enter a valid title!",
            FieldName::ImageUrl => "Please enter a valid image URL!",
            FieldName::Description => "Please enter a valid description!",
            FieldName::Price => "Please enter a valid price!",
        }
    }

    pub fn keyboard(self) -> KeyboardKind {
        match self {
            FieldName::Price => KeyboardKind::Decimal,
            _ => KeyboardKind::Default,
        }
    }

    pub fn rule(self) -> FieldRule {
        FieldRule::NonBlank
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardKind {
    Default,
    Decimal,
}

impl KeyboardKind {
    pub fn accepts(self, ch: char) -> bool {
        match self {
            KeyboardKind::Default => !ch.is_control(),
            KeyboardKind::Decimal => ch.is_ascii_digit() || ch == '.',
        }
    }
}

/// Validity policy attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// At least one non-whitespace character.
    NonBlank,
}

impl FieldRule {
    pub fn is_satisfied_by(self, text: &str) -> bool {
        match self {
            FieldRule::NonBlank => !text.trim().is_empty(),
        }
    }
}

/// A total mapping from every [`FieldName`] to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap<T> {
    entries: [T; FieldName::COUNT],
}

impl<T> FieldMap<T> {
    pub fn from_fn(build: impl FnMut(FieldName) -> T) -> Self {
        Self {
            entries: FieldName::ALL.map(build),
        }
    }

    pub fn get(&self, field: FieldName) -> &T {
        &self.entries[field.index()]
    }

    pub fn set(&mut self, field: FieldName, value: T) -> T {
        std::mem::replace(&mut self.entries[field.index()], value)
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldName> + '_ {
        FieldName::ALL.into_iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &T)> {
        FieldName::ALL.into_iter().zip(self.entries.iter())
    }
}

impl<T: Default> Default for FieldMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<FieldName> for FieldMap<T> {
    type Output = T;

    fn index(&self, field: FieldName) -> &Self::Output {
        self.get(field)
    }
}
