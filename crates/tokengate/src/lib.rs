//! # tokengate - Front-Door Token Admission
//!
//! **tokengate** decides whether a page may show its content to the holder of a
//! bearer token. The token arrives either from persisted storage or from a
//! `token`/`secret` URL query parameter, is checked for shape and freshness,
//! and is then persisted and projected into display fields.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tokengate::*;
//!
//! let mut gate = TokenGate::new(
//!     MemoryStore::new(),
//!     MemoryLocation::new("https://app.example.com/?token=eyJ..."),
//!     GateConfig::default(),
//! )?;
//!
//! let state = gate.initialize();
//! if state.is_authenticated {
//!     println!("expires: {:?}", state.token_expiry_display);
//! }
//! ```
//!
//! ## Admission Flow
//!
//! ```text
//! Loading
//!     │ persisted token?
//!     ├── yes ── valid? ── yes ──▶ Authenticated (URL cleaned)
//!     │                  └─ no ──▶ Unauthenticated (stored token erased)
//!     └── no ─── URL token? ── valid ──▶ Authenticated (persisted, URL cleaned)
//!                           ├─ invalid ─▶ Unauthenticated
//!                           └─ absent ──▶ Unauthenticated
//! ```
//!
//! Loading is always cleared at the end, and unexpected environment failures
//! (storage disabled, unreadable URL) end in Unauthenticated with a generic
//! message instead of propagating.
//!
//! ## Environment
//!
//! Storage, the address bar and the clock sit behind the [`TokenStore`],
//! [`Location`] and [`Clock`] traits. In-memory implementations are provided
//! for tests and headless use; the `web` feature adds `localStorage` and
//! `history.replaceState` adapters for running inside a page.
//!
//! ## Security
//!
//! Validation is purely structural and temporal. Token signatures are **not**
//! verified and no backend is contacted, so anyone can craft a token this
//! gate accepts. Use it to decide what a page renders; enforce authorization
//! on the server.

mod error;

pub(crate) mod claims;
pub(crate) mod clock;
pub(crate) mod config;
pub(crate) mod gate;
pub(crate) mod location;
pub(crate) mod projection;
pub(crate) mod state;
pub(crate) mod storage;
pub(crate) mod token;
pub(crate) mod utils;

#[cfg(feature = "web")]
pub mod browser;

// Public Interface
pub use claims::{Claims, TokenValidation, validate};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DEFAULT_QUERY_PARAMS, DEFAULT_STORAGE_KEY, GateConfig};
pub use error::{Error, Rejection, Result};
pub use gate::{TokenGate, messages};
pub use location::{Location, MemoryLocation};
pub use projection::{
    DisplayFields, DisplayTimeZone, EXPIRY_UNKNOWN, ExpiryFormat, HEADER_PLACEHOLDER,
    INVALID_DATE, NO_EXPIRATION, PAYLOAD_PLACEHOLDER, project,
};
pub use state::{GatePhase, GateState};
pub use storage::{MemoryStore, TokenStore};
pub use token::TokenParts;

pub(crate) mod limits;
