//! Local UI chrome state (language, currency, panels, notifications).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`ports`,
//! `reservations`) so rendering controls can evolve independently of the
//! mock API data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::time::Duration;

use marina::Language;

/// How long a notification stays on screen before it is auto-dismissed.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Base layer of the ports map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapView {
    #[default]
    Satellite,
    Street,
}

impl MapView {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Satellite => "satellite",
            Self::Street => "street",
        }
    }
}

/// Which renderer draws the ports map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapKind {
    /// Offline SVG projection.
    #[default]
    Schematic,
    /// OpenStreetMap raster tiles.
    Tiles,
}

impl MapKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Schematic => "schematic",
            Self::Tiles => "tiles",
        }
    }
}

/// Independent spinners the UI can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingKey {
    Global,
    Search,
    Booking,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    pub global: bool,
    pub search: bool,
    pub booking: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "⨯",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
    /// Milliseconds since the Unix epoch when the notification was raised.
    pub timestamp: f64,
}

#[derive(Clone, Debug)]
pub struct UiState {
    pub language: Language,
    pub currency: String,
    pub sidebar_open: bool,
    pub map_view: MapView,
    pub map_kind: MapKind,
    pub show_filters: bool,
    pub loading: LoadingFlags,
    pub notifications: Vec<Notification>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            language: Language::En,
            currency: "USD".to_owned(),
            sidebar_open: false,
            map_view: MapView::Satellite,
            map_kind: MapKind::Schematic,
            show_filters: false,
            loading: LoadingFlags::default(),
            notifications: Vec::new(),
        }
    }
}

impl UiState {
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.currency = currency.into();
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn set_map_view(&mut self, view: MapView) {
        self.map_view = view;
    }

    pub fn set_map_kind(&mut self, kind: MapKind) {
        self.map_kind = kind;
    }

    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }

    pub fn set_show_filters(&mut self, show: bool) {
        self.show_filters = show;
    }

    pub fn set_loading(&mut self, key: LoadingKey, value: bool) {
        match key {
            LoadingKey::Global => self.loading.global = value,
            LoadingKey::Search => self.loading.search = value,
            LoadingKey::Booking => self.loading.booking = value,
        }
    }

    /// Queue a notification and return its id.
    pub fn add_notification(&mut self, kind: NotificationKind, message: impl Into<String>, now_ms: f64) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.notifications.push(Notification { id: id.clone(), kind, message: message.into(), timestamp: now_ms });
        id
    }

    pub fn remove_notification(&mut self, id: &str) {
        self.notifications.retain(|n| n.id != id);
    }

    pub fn clear_all_notifications(&mut self) {
        self.notifications.clear();
    }
}

/// Current wall-clock time in epoch milliseconds. Zero during SSR.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
