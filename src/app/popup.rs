use crate::{presentation::AlertRender, screen::Alert};

pub(crate) struct AlertPopup {
    alert: Alert,
}

impl AlertPopup {
    pub(crate) fn new(alert: Alert) -> Self {
        Self { alert }
    }

    pub(crate) fn as_render(&self) -> AlertRender<'_> {
        AlertRender {
            title: &self.alert.title,
            message: &self.alert.message,
            button: &self.alert.button,
        }
    }
}
