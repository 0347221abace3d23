//! Static UI string table for English, French, and Spanish.
//!
//! Keys are dotted (`section.name`). Missing translations fall back to
//! English, and unknown keys render as the key itself.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use crate::types::Language;

/// `(key, en, fr, es)`
const TABLE: &[(&str, &str, &str, &str)] = &[
    ("navigation.home", "Home", "Accueil", "Inicio"),
    ("navigation.ports", "Ports", "Ports", "Puertos"),
    ("navigation.reservations", "Reservations", "Réservations", "Reservas"),
    ("navigation.about", "About", "À propos", "Acerca de"),
    ("navigation.profile", "Profile", "Profil", "Perfil"),
    ("navigation.signIn", "Sign in", "Se connecter", "Iniciar sesión"),
    ("navigation.signUp", "Sign up", "S'inscrire", "Registrarse"),
    ("navigation.signOut", "Sign out", "Se déconnecter", "Cerrar sesión"),
    ("home.title", "Find your perfect berth", "Trouvez votre place de port idéale", "Encuentra tu amarre perfecto"),
    (
        "home.subtitle",
        "Book marinas and private docks around the world",
        "Réservez marinas et pontons privés dans le monde entier",
        "Reserva marinas y muelles privados en todo el mundo",
    ),
    ("home.searchPlaceholder", "Where are you sailing?", "Où naviguez-vous ?", "¿A dónde navegas?"),
    ("home.checkIn", "Check-in", "Arrivée", "Llegada"),
    ("home.checkOut", "Check-out", "Départ", "Salida"),
    ("home.guests", "Guests", "Invités", "Huéspedes"),
    ("home.boatLength", "Boat length (ft)", "Longueur du bateau (ft)", "Eslora (ft)"),
    ("home.featuredPrivate", "Featured private ports", "Ports privés à la une", "Puertos privados destacados"),
    ("home.cta", "Ready to find your port?", "Prêt à trouver votre port ?", "¿Listo para encontrar tu puerto?"),
    ("common.search", "Search", "Rechercher", "Buscar"),
    ("common.loading", "Loading...", "Chargement...", "Cargando..."),
    ("common.back", "Back", "Retour", "Atrás"),
    ("common.next", "Next", "Suivant", "Siguiente"),
    ("common.cancel", "Cancel", "Annuler", "Cancelar"),
    ("ports.title", "Ports & marinas", "Ports et marinas", "Puertos y marinas"),
    ("ports.noResults", "No ports found", "Aucun port trouvé", "No se encontraron puertos"),
    ("ports.bookNow", "Book now", "Réserver", "Reservar"),
    ("ports.viewDetails", "View details", "Voir les détails", "Ver detalles"),
    ("ports.pricePerNight", "per night", "par nuit", "por noche"),
    ("ports.amenities", "Amenities", "Équipements", "Servicios"),
    ("ports.specifications", "Specifications", "Caractéristiques", "Especificaciones"),
    ("ports.reviews", "Reviews", "Avis", "Reseñas"),
    ("ports.contact", "Contact", "Contact", "Contacto"),
    ("ports.owner", "Hosted by", "Hôte", "Anfitrión"),
    ("ports.instantBook", "Instant book", "Réservation instantanée", "Reserva inmediata"),
    ("ports.listView", "List", "Liste", "Lista"),
    ("ports.mapView", "Map", "Carte", "Mapa"),
    ("filters.title", "Filters", "Filtres", "Filtros"),
    ("filters.clearAll", "Clear all", "Tout effacer", "Borrar todo"),
    ("filters.priceRange", "Price range", "Fourchette de prix", "Rango de precios"),
    ("filters.minPrice", "Min price", "Prix min", "Precio mín"),
    ("filters.maxPrice", "Max price", "Prix max", "Precio máx"),
    ("filters.portType", "Port type", "Type de port", "Tipo de puerto"),
    ("filters.rating", "Minimum rating", "Note minimale", "Valoración mínima"),
    ("filters.amenities", "Amenities", "Équipements", "Servicios"),
    ("booking.title", "Book your stay", "Réservez votre séjour", "Reserva tu estancia"),
    ("booking.dates", "Dates & guests", "Dates et invités", "Fechas y huéspedes"),
    ("booking.boat", "Boat details", "Détails du bateau", "Detalles del barco"),
    ("booking.guest", "Guest information", "Informations client", "Datos del huésped"),
    ("booking.confirm", "Confirm booking", "Confirmer la réservation", "Confirmar reserva"),
    ("booking.taxes", "Taxes & fees", "Taxes et frais", "Impuestos y tasas"),
    ("booking.total", "Total", "Total", "Total"),
    ("reservations.title", "My reservations", "Mes réservations", "Mis reservas"),
    ("reservations.empty", "No reservations yet", "Aucune réservation", "Aún no hay reservas"),
    ("reservations.cancel", "Cancel reservation", "Annuler la réservation", "Cancelar reserva"),
    ("auth.signIn", "Sign in", "Se connecter", "Iniciar sesión"),
    ("auth.signUp", "Create account", "Créer un compte", "Crear cuenta"),
    ("auth.email", "Email", "E-mail", "Correo electrónico"),
    ("auth.password", "Password", "Mot de passe", "Contraseña"),
    ("auth.confirmPassword", "Confirm password", "Confirmer le mot de passe", "Confirmar contraseña"),
    ("auth.name", "Full name", "Nom complet", "Nombre completo"),
    ("auth.hasAccount", "Already have an account?", "Déjà un compte ?", "¿Ya tienes cuenta?"),
    ("auth.noAccount", "New to DockNow?", "Nouveau sur DockNow ?", "¿Nuevo en DockNow?"),
];

/// Translate `key` into `language`.
#[must_use]
pub fn t(language: Language, key: &str) -> &str {
    let Some(&(_, en, fr, es)) = TABLE.iter().find(|(k, ..)| *k == key) else {
        return key;
    };
    let text = match language {
        Language::En => en,
        Language::Fr => fr,
        Language::Es => es,
    };
    if text.is_empty() { en } else { text }
}

/// Every key in the table, for completeness checks.
pub fn keys() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|(k, ..)| *k)
}
