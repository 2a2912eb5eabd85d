#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Android,
    Ios,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(any(target_os = "ios", target_os = "macos")) {
            Platform::Ios
        } else {
            Platform::Android
        }
    }

    pub fn checkmark_icon(self) -> &'static str {
        match self {
            Platform::Android => "md-checkmark",
            Platform::Ios => "ios-checkmark",
        }
    }
}
