//! Shared response envelope for API handlers.
//!
//! All resource responses use a `{ "data": ... }` envelope. The one
//! exception is `POST /token`, whose body is the bare token object expected
//! by OAuth2-style clients.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
