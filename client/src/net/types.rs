//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Domain records (`Port`, `User`, `Reservation`) and `PublicConfig` come
//! straight from `marina`; only the auth request bodies and small acknowledgement
//! payloads live here. Field names are camelCase to match the server.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInBody {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpBody {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Body of a successful cancel call.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CancelAck {
    pub id: String,
}

/// Body of an error response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
