use crate::projection::DisplayFields;
use serde::Serialize;

/// Admission phase derived from [`GateState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GatePhase {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Authentication status and derived display data read by the UI
///
/// Only [`TokenGate`](crate::TokenGate) mutates it. Serializes with the
/// camelCase names a display surface expects (`isAuthenticated`,
/// `tokenHeaderJson`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GateState {
    pub loading: bool,
    pub is_authenticated: bool,
    pub error: Option<String>,
    pub token: Option<String>,
    pub token_header_json: Option<String>,
    pub token_payload_json: Option<String>,
    pub token_expiry_display: Option<String>,
    pub show_token_details: bool,
}

impl Default for GateState {
    fn default() -> Self {
        Self {
            loading: true,
            is_authenticated: false,
            error: None,
            token: None,
            token_header_json: None,
            token_payload_json: None,
            token_expiry_display: None,
            show_token_details: false,
        }
    }
}

impl GateState {
    pub fn phase(&self) -> GatePhase {
        if self.loading {
            GatePhase::Loading
        } else if self.is_authenticated {
            GatePhase::Authenticated
        } else {
            GatePhase::Unauthenticated
        }
    }

    pub(crate) fn authenticate(&mut self, token: String, display: DisplayFields) {
        self.is_authenticated = true;
        self.error = None;
        self.token = Some(token);
        self.token_header_json = Some(display.header_json);
        self.token_payload_json = Some(display.payload_json);
        self.token_expiry_display = Some(display.expiry);
    }

    pub(crate) fn unauthenticate(&mut self, message: &str) {
        self.is_authenticated = false;
        self.error = Some(message.to_string());
        self.token = None;
        self.token_header_json = None;
        self.token_payload_json = None;
        self.token_expiry_display = None;
    }
}
