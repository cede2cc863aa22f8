//! API Client for the dashboard backend.
//!
//! [`ApiClient`] maps backend responses onto the client's error taxonomy.
//! A 401 on any authenticated call is authority loss: the session is torn
//! down here and the caller sees [`Polled::SignedOut`] instead of an error.

pub mod client;
pub mod errors;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{ApiClient, Polled};
pub use errors::{ApiError, TransportError};
pub use http::HttpTransport;
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
pub use types::{
    AuditTablePayload, CastOutcome, CastRequest, ChartPoint, DashboardSnapshot, ErrorDetail,
    LoginRequest, LoginResponse, SpellCounts, UserProfile,
};
