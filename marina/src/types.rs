//! Wire and state model shared by server and client.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase and enum tags in `snake_case` so JSON
//! payloads keep the shape the browser UI has always consumed.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

// =============================================================================
// PORTS
// =============================================================================

/// Listing kind: a public marina or a privately owned dock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortType {
    #[default]
    Marina,
    PrivatePort,
}

impl PortType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Marina => "marina",
            Self::PrivatePort => "private_port",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub city: String,
    pub country: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Technical limits and utility flags of a berth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specifications {
    /// Longest boat accepted, in feet.
    pub max_boat_length: f64,
    pub depth: f64,
    pub electricity: bool,
    pub water: bool,
    pub wifi: bool,
    pub fuel: bool,
    pub security: bool,
}

/// Owner contact of a private port.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<String>,
    pub port_id: String,
    pub rating: f64,
    pub comment: String,
    pub created_at: String,
    pub helpful: u32,
}

/// A marina or private dock listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    pub id: String,
    pub name: String,
    pub port_type: PortType,
    pub location: Location,
    pub description: String,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub capacity: u32,
    pub available_spaces: u32,
    pub price_per_night: f64,
    pub rating: f64,
    #[serde(default)]
    pub reviews: Vec<Review>,
    pub contact: Contact,
    pub specifications: Specifications,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_instant_book: Option<bool>,
}

impl Port {
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.port_type == PortType::PrivatePort
    }

    /// First gallery image, used as the card thumbnail.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    #[must_use]
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }
}

/// A single bookable berth inside a port.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockingSpace {
    pub id: String,
    pub port_id: String,
    pub space_number: String,
    pub max_length: f64,
    pub width: f64,
    pub depth: f64,
    pub price_per_night: f64,
    pub is_available: bool,
    pub amenities: Vec<String>,
}

// =============================================================================
// RESERVATIONS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Whether the user may still cancel a reservation in this status.
    #[must_use]
    pub fn is_cancellable(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

/// Boat snapshot stored on a reservation at booking time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoatDetails {
    pub name: String,
    pub length: f64,
    pub width: f64,
    #[serde(rename = "type")]
    pub boat_type: String,
}

/// Reservation payload before the API has assigned id and timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    pub user_id: String,
    pub port_id: String,
    pub space_id: String,
    pub check_in: String,
    pub check_out: String,
    pub total_price: f64,
    pub status: ReservationStatus,
    pub guest_count: u32,
    pub boat_details: BoatDetails,
    pub payment_status: PaymentStatus,
}

impl ReservationDraft {
    /// Attach identity and timestamps, producing a stored reservation.
    #[must_use]
    pub fn into_reservation(self, id: String, now: &str) -> Reservation {
        Reservation {
            id,
            user_id: self.user_id,
            port_id: self.port_id,
            space_id: self.space_id,
            check_in: self.check_in,
            check_out: self.check_out,
            total_price: self.total_price,
            status: self.status,
            guest_count: self.guest_count,
            boat_details: self.boat_details,
            payment_status: self.payment_status,
            created_at: now.to_owned(),
            updated_at: now.to_owned(),
        }
    }
}

/// A booking linking a user, a port, and a date range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub user_id: String,
    pub port_id: String,
    pub space_id: String,
    pub check_in: String,
    pub check_out: String,
    pub total_price: f64,
    pub status: ReservationStatus,
    pub guest_count: u32,
    pub boat_details: BoatDetails,
    pub payment_status: PaymentStatus,
    pub created_at: String,
    pub updated_at: String,
}

// =============================================================================
// USERS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Es,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::En, Self::Fr, Self::Es];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Es => "es",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// Native display name for the language picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::Es => "Español",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub language: Language,
    pub currency: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { language: Language::En, currency: "USD".to_owned() }
    }
}

/// Partial preference update; unset fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Preferences {
    pub fn apply(&mut self, update: PreferencesUpdate) {
        if let Some(language) = update.language {
            self.language = language;
        }
        if let Some(currency) = update.currency {
            self.currency = currency;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insurance {
    pub provider: String,
    pub policy_number: String,
    pub expiry_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boat {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub boat_type: String,
    pub length: f64,
    pub width: f64,
    pub draft: f64,
    pub registration_number: String,
    pub insurance: Insurance,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub preferences: Preferences,
    #[serde(default)]
    pub boats: Vec<Boat>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

// =============================================================================
// SEARCH
// =============================================================================

/// Port-type selector from the filters sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortTypeFilter {
    #[default]
    All,
    Marina,
    PrivatePort,
}

impl PortTypeFilter {
    #[must_use]
    pub fn admits(self, port_type: PortType) -> bool {
        match self {
            Self::All => true,
            Self::Marina => port_type == PortType::Marina,
            Self::PrivatePort => port_type == PortType::PrivatePort,
        }
    }
}

/// Search criteria. Every field is optional; unset means "no constraint".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boat_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_type: Option<PortTypeFilter>,
}

impl SearchFilters {
    /// Toggle one amenity in the requested set.
    pub fn toggle_amenity(&mut self, amenity: &str) {
        if let Some(pos) = self.amenities.iter().position(|a| a == amenity) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(amenity.to_owned());
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Browser-visible server configuration served at `GET /api/config`.
/// Never carries secret keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    #[serde(default)]
    pub maps_api_key: Option<String>,
    #[serde(default)]
    pub payments_configured: bool,
}

/// Visible map viewport in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl MapBounds {
    #[must_use]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        let lat_ok = lat <= self.north && lat >= self.south;
        let lng_ok = if self.west <= self.east {
            lng >= self.west && lng <= self.east
        } else {
            // Viewport crosses the antimeridian.
            lng >= self.west || lng <= self.east
        };
        lat_ok && lng_ok
    }
}
