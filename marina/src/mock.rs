//! Hard-coded dataset served by the mock API.
//!
//! Nine ports (six marinas, three private docks), the default signed-in
//! user, and the reservation history returned for any user.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use crate::types::{
    Boat, BoatDetails, Contact, Insurance, Language, Location, Owner, PaymentStatus, Port, PortType, Preferences,
    Reservation, ReservationStatus, Review, Specifications, User,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn location(lat: f64, lng: f64, city: &str, country: &str, address: &str) -> Location {
    Location { lat, lng, city: city.into(), country: country.into(), address: address.into() }
}

fn contact(phone: &str, email: &str, website: Option<&str>) -> Contact {
    Contact { phone: phone.into(), email: email.into(), website: website.map(str::to_owned) }
}

#[allow(clippy::fn_params_excessive_bools)]
fn specs(max_boat_length: f64, depth: f64, electricity: bool, wifi: bool, fuel: bool, security: bool) -> Specifications {
    Specifications { max_boat_length, depth, electricity, water: true, wifi, fuel, security }
}

#[allow(clippy::too_many_arguments)]
fn review(id: &str, user_id: &str, user_name: &str, avatar: &str, port_id: &str, rating: f64, comment: &str, created_at: &str, helpful: u32) -> Review {
    Review {
        id: id.into(),
        user_id: user_id.into(),
        user_name: user_name.into(),
        user_avatar: Some(avatar.into()),
        port_id: port_id.into(),
        rating,
        comment: comment.into(),
        created_at: created_at.into(),
        helpful,
    }
}

/// The nine-port catalog returned by `GET /api/ports`.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn ports() -> Vec<Port> {
    vec![
        Port {
            id: "1".into(),
            name: "Marina Bay Harbor".into(),
            port_type: PortType::Marina,
            location: location(40.7589, -73.9851, "New York", "USA", "123 Harbor Drive, New York, NY 10001"),
            description: "Premium marina in the heart of Manhattan with world-class amenities and stunning city skyline views.".into(),
            images: strings(&[
                "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=800",
                "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=800",
            ]),
            amenities: strings(&["WiFi", "Electricity", "Water", "Fuel", "Restaurant", "Security"]),
            capacity: 150,
            available_spaces: 23,
            price_per_night: 85.0,
            rating: 4.7,
            reviews: vec![review(
                "1",
                "user1",
                "Captain John",
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=50",
                "1",
                5.0,
                "Excellent facilities and perfect location in Manhattan. Staff was very helpful!",
                "2024-12-01T10:00:00Z",
                12,
            )],
            contact: contact("+1-555-0123", "info@marinabay.com", Some("https://marinabay.com")),
            specifications: specs(80.0, 12.0, true, true, true, true),
            owner: None,
            is_instant_book: None,
        },
        Port {
            id: "2".into(),
            name: "Port de Cannes".into(),
            port_type: PortType::Marina,
            location: location(43.5528, 7.0174, "Cannes", "France", "Quai Max Laubeuf, 06400 Cannes, France"),
            description: "Luxury marina on the French Riviera, perfect for Mediterranean cruising and film festival visits.".into(),
            images: strings(&[
                "https://images.unsplash.com/photo-1582719471385-477bb200d50d?w=800",
                "https://images.unsplash.com/photo-1571115764595-644a1f56a55c?w=800",
            ]),
            amenities: strings(&["WiFi", "Electricity", "Water", "Concierge", "Restaurant", "Security"]),
            capacity: 200,
            available_spaces: 45,
            price_per_night: 120.0,
            rating: 4.9,
            reviews: vec![review(
                "2",
                "user2",
                "Marie Dubois",
                "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=50",
                "2",
                5.0,
                "Magnifique marina! Perfect for exploring the Côte d'Azur.",
                "2024-11-28T14:30:00Z",
                8,
            )],
            contact: contact("+33-4-93-99-00-00", "contact@portcannes.fr", Some("https://portcannes.fr")),
            specifications: specs(100.0, 15.0, true, true, true, true),
            owner: None,
            is_instant_book: None,
        },
        Port {
            id: "3".into(),
            name: "Barcelona Port Olympic".into(),
            port_type: PortType::Marina,
            location: location(41.3874, 2.1963, "Barcelona", "Spain", "Moll de Gregal, 08005 Barcelona, Spain"),
            description: "Modern marina in Barcelona's Olympic port with excellent dining and nightlife nearby.".into(),
            images: strings(&[
                "https://images.unsplash.com/photo-1539650116574-75c0c6d73786?w=800",
                "https://images.unsplash.com/photo-1583422409516-2895a77efded?w=800",
            ]),
            amenities: strings(&["WiFi", "Electricity", "Water", "Fuel", "Restaurant", "Security"]),
            capacity: 120,
            available_spaces: 31,
            price_per_night: 75.0,
            rating: 4.6,
            reviews: vec![review(
                "3",
                "user3",
                "Carlos Rodriguez",
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=50",
                "3",
                4.0,
                "Great location near the beach and city center. Good value for money.",
                "2024-12-03T09:15:00Z",
                6,
            )],
            contact: contact("+34-93-225-7940", "info@portolimpic.com", Some("https://portolimpic.com")),
            specifications: specs(70.0, 10.0, true, true, true, true),
            owner: None,
            is_instant_book: None,
        },
        Port {
            id: "4".into(),
            name: "Miami Beach Marina".into(),
            port_type: PortType::Marina,
            location: location(25.7617, -80.1918, "Miami Beach", "USA", "300 Alton Rd, Miami Beach, FL 33139"),
            description: "Tropical paradise marina in the heart of South Beach with art deco surroundings.".into(),
            images: strings(&[
                "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800",
                "https://images.unsplash.com/photo-1601408208058-f29796442e4c?w=800",
            ]),
            amenities: strings(&["WiFi", "Electricity", "Water", "Fuel", "Restaurant", "Security"]),
            capacity: 180,
            available_spaces: 52,
            price_per_night: 95.0,
            rating: 4.8,
            reviews: Vec::new(),
            contact: contact("+1-305-673-7730", "info@miamibeachmarina.com", Some("https://miamibeachmarina.com")),
            specifications: specs(90.0, 14.0, true, true, true, true),
            owner: None,
            is_instant_book: None,
        },
        Port {
            id: "5".into(),
            name: "Sydney Harbour Marina".into(),
            port_type: PortType::Marina,
            location: location(-33.8568, 151.2153, "Sydney", "Australia", "Darling Harbour, Sydney NSW 2000"),
            description: "Iconic marina with spectacular views of the Sydney Opera House and Harbour Bridge.".into(),
            images: strings(&[
                "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800",
                "https://images.unsplash.com/photo-1624138784614-87fd1b6528f8?w=800",
            ]),
            amenities: strings(&["WiFi", "Electricity", "Water", "Restaurant", "Security"]),
            capacity: 160,
            available_spaces: 28,
            price_per_night: 110.0,
            rating: 4.7,
            reviews: Vec::new(),
            contact: contact("+61-2-9281-5999", "info@sydneyharbour.com.au", Some("https://sydneyharbour.com.au")),
            specifications: specs(85.0, 13.0, true, true, false, true),
            owner: None,
            is_instant_book: None,
        },
        Port {
            id: "6".into(),
            name: "Porto Cervo Marina".into(),
            port_type: PortType::Marina,
            location: location(41.1317, 9.5378, "Porto Cervo", "Italy", "Via del Porto, 07021 Porto Cervo, Italy"),
            description: "Exclusive marina in Costa Smeralda, favored by luxury yacht owners and celebrities.".into(),
            images: strings(&[
                "https://images.unsplash.com/photo-1582719471385-477bb200d50d?w=800",
                "https://images.unsplash.com/photo-1571115764595-644a1f56a55c?w=800",
            ]),
            amenities: strings(&["WiFi", "Electricity", "Water", "Fuel", "Concierge", "Security"]),
            capacity: 100,
            available_spaces: 15,
            price_per_night: 200.0,
            rating: 4.9,
            reviews: Vec::new(),
            contact: contact("+39-0789-91553", "info@marinaportocervo.com", Some("https://marinaportocervo.com")),
            specifications: specs(120.0, 18.0, true, true, true, true),
            owner: None,
            is_instant_book: None,
        },
        Port {
            id: "7".into(),
            name: "Captain Mike's Private Dock".into(),
            port_type: PortType::PrivatePort,
            location: location(26.1224, -80.1373, "Fort Lauderdale", "USA", "1520 SE 15th St, Fort Lauderdale, FL 33316"),
            description: "Private dock with personal service. Perfect for overnight stays with direct access to beautiful beaches.".into(),
            images: strings(&[
                "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800",
                "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=800",
            ]),
            amenities: strings(&["WiFi", "Electricity", "Water", "Private Beach Access", "BBQ Area"]),
            capacity: 3,
            available_spaces: 2,
            price_per_night: 65.0,
            rating: 4.8,
            reviews: Vec::new(),
            contact: contact("+1-954-555-0187", "mike@privatecove.com", None),
            specifications: specs(45.0, 8.0, true, true, false, false),
            owner: Some(Owner {
                name: "Captain Mike Thompson".into(),
                email: "mike@privatecove.com".into(),
                phone: "+1-954-555-0187".into(),
            }),
            is_instant_book: Some(true),
        },
        Port {
            id: "8".into(),
            name: "Villa Bella Vista Private Port".into(),
            port_type: PortType::PrivatePort,
            location: location(44.3364, 8.8137, "Portofino", "Italy", "Via del Fondaco, 16034 Portofino, Italy"),
            description: "Exclusive private dock at a luxury villa with stunning Mediterranean views and personalized concierge service.".into(),
            images: strings(&[
                "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=800",
                "https://images.unsplash.com/photo-1571115764595-644a1f56a55c?w=800",
            ]),
            amenities: strings(&[
                "WiFi",
                "Electricity",
                "Water",
                "Concierge Service",
                "Villa Access",
                "Private Chef Available",
            ]),
            capacity: 2,
            available_spaces: 1,
            price_per_night: 250.0,
            rating: 5.0,
            reviews: Vec::new(),
            contact: contact("+39-0185-269-020", "info@villabellavista.it", None),
            specifications: specs(60.0, 12.0, true, true, false, true),
            owner: Some(Owner {
                name: "Giuseppe Rossi".into(),
                email: "giuseppe@villabellavista.it".into(),
                phone: "+39-0185-269-020".into(),
            }),
            is_instant_book: Some(false),
        },
        Port {
            id: "9".into(),
            name: "Serenity Cove Private Mooring".into(),
            port_type: PortType::PrivatePort,
            location: location(18.3381, -64.8941, "St. John", "US Virgin Islands", "Cruz Bay, St. John, VI 00830"),
            description: "Peaceful private mooring in a protected cove with crystal clear waters and snorkeling right off your boat.".into(),
            images: strings(&[
                "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800",
                "https://images.unsplash.com/photo-1544551763-77ef2d0cfc6c?w=800",
            ]),
            amenities: strings(&["Fresh Water", "Kayak Rental", "Snorkeling Gear", "Beach Access", "Eco-Friendly"]),
            capacity: 1,
            available_spaces: 1,
            price_per_night: 85.0,
            rating: 4.9,
            reviews: Vec::new(),
            contact: contact("+1-340-555-0143", "info@serenitycove.vi", None),
            specifications: specs(35.0, 15.0, false, false, false, false),
            owner: Some(Owner {
                name: "Sarah & David Johnson".into(),
                email: "sarah@serenitycove.vi".into(),
                phone: "+1-340-555-0143".into(),
            }),
            is_instant_book: Some(true),
        },
    ]
}

/// Look up one catalog port by id.
#[must_use]
pub fn port_by_id(id: &str) -> Option<Port> {
    ports().into_iter().find(|p| p.id == id)
}

/// The user every fresh session starts signed in as.
#[must_use]
pub fn default_user() -> User {
    User {
        id: "user_123".into(),
        email: "marina.explorer@docknow.com".into(),
        name: "Marina Explorer".into(),
        avatar: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face".into()),
        phone: Some("+1-555-0199".into()),
        preferences: Preferences { language: Language::En, currency: "EUR".into() },
        boats: vec![Boat {
            id: "boat_1".into(),
            name: "Sea Breeze".into(),
            boat_type: "Sailboat".into(),
            length: 42.0,
            width: 12.5,
            draft: 6.2,
            registration_number: "SB-2019-042".into(),
            insurance: Insurance {
                provider: "Marine Insurance Co".into(),
                policy_number: "MI-2024-789456".into(),
                expiry_date: "2025-12-31".into(),
            },
        }],
        reservations: Vec::new(),
    }
}

/// User returned by a successful sign-in, carrying the submitted email.
#[must_use]
pub fn signed_in_user(email: &str) -> User {
    User {
        id: "1".into(),
        email: email.to_owned(),
        name: "John Doe".into(),
        avatar: Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100".into()),
        phone: Some("+1-555-0123".into()),
        preferences: Preferences::default(),
        boats: Vec::new(),
        reservations: Vec::new(),
    }
}

/// User synthesized by sign-up.
#[must_use]
pub fn signed_up_user(id: String, email: &str, name: &str) -> User {
    User {
        id,
        email: email.to_owned(),
        name: name.to_owned(),
        avatar: None,
        phone: None,
        preferences: Preferences::default(),
        boats: Vec::new(),
        reservations: Vec::new(),
    }
}

fn sea_breeze() -> BoatDetails {
    BoatDetails { name: "Sea Breeze".into(), length: 42.0, width: 12.5, boat_type: "Sailboat".into() }
}

/// Reservation history returned for any user id.
#[must_use]
pub fn reservations() -> Vec<Reservation> {
    vec![
        Reservation {
            id: "res_001".into(),
            user_id: "user_123".into(),
            port_id: "port_barcelona_001".into(),
            space_id: "space_A12".into(),
            check_in: "2024-03-14".into(),
            check_out: "2024-03-17".into(),
            total_price: 135.0,
            status: ReservationStatus::Confirmed,
            guest_count: 2,
            boat_details: sea_breeze(),
            payment_status: PaymentStatus::Paid,
            created_at: "2024-02-15T10:30:00Z".into(),
            updated_at: "2024-02-15T10:30:00Z".into(),
        },
        Reservation {
            id: "res_002".into(),
            user_id: "user_123".into(),
            port_id: "port_italy_001".into(),
            space_id: "space_B07".into(),
            check_in: "2024-04-19".into(),
            check_out: "2024-04-21".into(),
            total_price: 76.0,
            status: ReservationStatus::Pending,
            guest_count: 2,
            boat_details: sea_breeze(),
            payment_status: PaymentStatus::Pending,
            created_at: "2024-03-10T14:22:00Z".into(),
            updated_at: "2024-03-10T14:22:00Z".into(),
        },
        Reservation {
            id: "res_003".into(),
            user_id: "user_123".into(),
            port_id: "port_france_001".into(),
            space_id: "space_C15".into(),
            check_in: "2024-05-08".into(),
            check_out: "2024-05-12".into(),
            total_price: 320.0,
            status: ReservationStatus::Confirmed,
            guest_count: 4,
            boat_details: sea_breeze(),
            payment_status: PaymentStatus::Paid,
            created_at: "2024-03-01T09:15:00Z".into(),
            updated_at: "2024-03-01T09:15:00Z".into(),
        },
    ]
}

/// Display summary for a reservation's port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortSummary {
    pub name: String,
    pub location: String,
    pub image: String,
}

/// Resolve the card header for a reservation. History entries point at ports
/// outside the catalog, so those have their own table; catalog ids fall back
/// to the live port data.
#[must_use]
pub fn port_summary(port_id: &str) -> Option<PortSummary> {
    let fixed = match port_id {
        "port_barcelona_001" => Some(("Marina del Sol", "Barcelona, Spain", "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=400&h=300&fit=crop")),
        "port_italy_001" => Some(("Porto Azzurro", "Cinque Terre, Italy", "https://images.unsplash.com/photo-1558618047-3c8c76ca7d13?w=400&h=300&fit=crop")),
        "port_france_001" => Some(("Port de Cannes", "Cannes, France", "https://images.unsplash.com/photo-1527004760525-d8e44de5f2e1?w=400&h=300&fit=crop")),
        _ => None,
    };
    if let Some((name, location, image)) = fixed {
        return Some(PortSummary { name: name.into(), location: location.into(), image: image.into() });
    }
    port_by_id(port_id).map(|p| PortSummary {
        location: format!("{}, {}", p.location.city, p.location.country),
        image: p.cover_image().unwrap_or_default().to_owned(),
        name: p.name,
    })
}
