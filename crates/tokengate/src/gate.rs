//! Admission sequencing and session controls
//!
//! [`TokenGate`] owns the [`GateState`] and is the only thing that mutates it.
//! Every entry point takes `&mut self`, so an admission sequence always runs
//! to completion before `logout` or `toggle_details` can observe the state.

use crate::claims::Claims;
use crate::clock::{Clock, SystemClock};
use crate::config::GateConfig;
use crate::error::Result;
use crate::location::Location;
use crate::projection::project;
use crate::state::GateState;
use crate::storage::TokenStore;

/// Fixed user-facing messages surfaced through [`GateState::error`]
pub mod messages {
    pub const STORED_TOKEN_REJECTED: &str = "Stored token is invalid or expired";
    pub const URL_TOKEN_REJECTED: &str = "Invalid or expired token provided";
    pub const NO_TOKEN_FOUND: &str = "No token found in URL parameters";
    pub const LOGGED_OUT: &str = "Logged out successfully";
    pub const INITIALIZATION_FAILED: &str = "Failed to initialize application";
    pub const URL_CHECK_FAILED: &str = "Error processing token from URL";
}

use messages::*;

/// Token gate over a persisted store, the page location and a clock
///
/// # Security
/// Admission is structural and temporal only. Signatures are never verified,
/// so the gate decides what the page shows, not what the user may access.
pub struct TokenGate<S, L, C = SystemClock> {
    store: S,
    location: L,
    clock: C,
    config: GateConfig,
    state: GateState,
}

impl<S, L> TokenGate<S, L>
where
    S: TokenStore,
    L: Location,
{
    /// Create a gate using the host's wall clock
    pub fn new(store: S, location: L, config: GateConfig) -> Result<Self> {
        Self::with_clock(store, location, SystemClock, config)
    }
}

impl<S, L, C> TokenGate<S, L, C>
where
    S: TokenStore,
    L: Location,
    C: Clock,
{
    /// Create a gate with an explicit clock
    ///
    /// The gate starts in the loading phase; call [`initialize`](Self::initialize)
    /// to run admission.
    pub fn with_clock(store: S, location: L, clock: C, config: GateConfig) -> Result<Self> {
        config.check()?;

        Ok(Self {
            store,
            location,
            clock,
            config,
            state: GateState::default(),
        })
    }

    /// Current state
    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Run the startup admission sequence
    ///
    /// The persisted token takes precedence; the URL is only consulted when
    /// storage is empty. Loading is cleared whatever the outcome.
    pub fn initialize(&mut self) -> &GateState {
        self.state.loading = true;

        if let Err(e) = self.admit_on_startup() {
            tracing::error!(error = %e, "initialization failed");
            self.state.unauthenticate(INITIALIZATION_FAILED);
        }

        self.state.loading = false;
        &self.state
    }

    /// Look for a token in the URL query and admit it
    ///
    /// Returns `true` if the gate ends authenticated. Can be re-run at any
    /// time, for instance after the address changed.
    pub fn check_url(&mut self) -> bool {
        self.state.loading = true;

        let authenticated = match self.admit_from_url() {
            Ok(authenticated) => authenticated,
            Err(e) => {
                tracing::error!(error = %e, "failed to process token from URL");
                self.state.unauthenticate(URL_CHECK_FAILED);
                false
            }
        };

        self.state.loading = false;
        authenticated
    }

    /// Flip the token details toggle
    pub fn toggle_details(&mut self) -> bool {
        self.state.show_token_details = !self.state.show_token_details;
        self.state.show_token_details
    }

    /// Forget the persisted token and return to unauthenticated
    pub fn logout(&mut self) {
        if let Err(e) = self.store.remove(&self.config.storage_key) {
            tracing::warn!(error = %e, "failed to erase persisted token");
        }

        self.state.unauthenticate(LOGGED_OUT);
        self.state.show_token_details = false;

        tracing::info!("logged out, persisted token removed");
    }

    fn admit_on_startup(&mut self) -> Result<()> {
        let Some(stored) = self.store.get(&self.config.storage_key)? else {
            self.check_url();
            return Ok(());
        };

        match self.config.validation.validate(&stored, self.clock.now()) {
            Ok(claims) => {
                self.set_authenticated(stored, &claims, "storage");
                self.clean_url();
            }
            Err(rejection) => {
                tracing::warn!(reason = %rejection, "stored token rejected");
                self.store.remove(&self.config.storage_key)?;
                self.state.unauthenticate(STORED_TOKEN_REJECTED);
            }
        }

        Ok(())
    }

    fn admit_from_url(&mut self) -> Result<bool> {
        let Some((param, candidate)) = self.find_url_token()? else {
            self.state.unauthenticate(NO_TOKEN_FOUND);
            return Ok(false);
        };

        match self.config.validation.validate(&candidate, self.clock.now()) {
            Ok(claims) => {
                self.store.set(&self.config.storage_key, &candidate)?;
                self.set_authenticated(candidate, &claims, &param);
                self.clean_url();
                Ok(true)
            }
            Err(rejection) => {
                tracing::warn!(param = %param, reason = %rejection, "URL token rejected");
                self.state.unauthenticate(URL_TOKEN_REJECTED);
                Ok(false)
            }
        }
    }

    // First configured parameter present in the query wins
    fn find_url_token(&self) -> Result<Option<(String, String)>> {
        for name in &self.config.query_params {
            if let Some(value) = self.location.query_param(name)? {
                return Ok(Some((name.clone(), value)));
            }
        }
        Ok(None)
    }

    fn set_authenticated(&mut self, token: String, claims: &Claims, source: &str) {
        let display = project(&token, &self.config.expiry_format);
        self.state.authenticate(token, display);

        tracing::info!(
            source,
            subject = ?claims.subject(),
            issuer = ?claims.issuer(),
            "token admitted"
        );
    }

    // Failing to clean the address bar never affects authentication
    fn clean_url(&mut self) {
        match self.location.strip_query_params(&self.config.query_params) {
            Ok(true) => tracing::debug!("URL cleaned, token removed from address bar"),
            Ok(false) => {}
            Err(e) => tracing::warn!(error = %e, "failed to clean URL"),
        }
    }
}
