//! Startup admission scenarios
//!
//! Each test drives a gate over in-memory storage and location with a frozen
//! clock, then inspects the resulting state, storage and address bar.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use tokengate::*;

const NOW: i64 = 1_700_000_000;
const PAGE: &str = "https://app.example.com/dashboard";

fn make_token(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(payload);
    let signature = URL_SAFE_NO_PAD.encode(b"not-a-real-signature");
    format!("{header}.{payload}.{signature}")
}

fn valid_token() -> String {
    make_token(&format!(
        r#"{{"sub":"user-12345","iat":{},"exp":{}}}"#,
        NOW - 60,
        NOW + 3600
    ))
}

fn expired_token() -> String {
    make_token(&format!(r#"{{"sub":"user-12345","exp":{}}}"#, NOW - 3600))
}

fn gate_at(store: MemoryStore, href: &str) -> TokenGate<MemoryStore, MemoryLocation, FixedClock> {
    let config = GateConfig::new().expiry_format(ExpiryFormat::new().time_zone(DisplayTimeZone::Utc));
    TokenGate::with_clock(store, MemoryLocation::new(href), FixedClock(NOW), config).unwrap()
}

// ============================================================================
// Persisted Token
// ============================================================================

#[test]
fn test_stored_valid_token_without_url_params() {
    let token = valid_token();
    let mut gate = gate_at(MemoryStore::with_entry(DEFAULT_STORAGE_KEY, token.clone()), PAGE);

    gate.initialize();

    let state = gate.state();
    assert_eq!(state.phase(), GatePhase::Authenticated);
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.token.as_deref(), Some(token.as_str()));
    assert!(state.token_header_json.is_some());
    assert!(state.token_payload_json.is_some());
    assert!(state.token_expiry_display.is_some());

    // Nothing to strip, so the address bar is untouched
    assert_eq!(gate.location().url(), PAGE);
    assert_eq!(gate.location().replacements(), 0);
    assert_eq!(gate.store().get(DEFAULT_STORAGE_KEY).unwrap(), Some(token));
}

#[test]
fn test_stored_expired_token() {
    let mut gate = gate_at(
        MemoryStore::with_entry(DEFAULT_STORAGE_KEY, expired_token()),
        PAGE,
    );

    gate.initialize();

    assert_eq!(gate.state().phase(), GatePhase::Unauthenticated);
    assert_eq!(
        gate.state().error.as_deref(),
        Some(messages::STORED_TOKEN_REJECTED)
    );
    assert_eq!(gate.store().get(DEFAULT_STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_stored_malformed_token_does_not_fall_back_to_url() {
    let mut gate = gate_at(
        MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "garbage"),
        &format!("{PAGE}?token={}", valid_token()),
    );

    gate.initialize();

    assert_eq!(gate.state().phase(), GatePhase::Unauthenticated);
    assert_eq!(
        gate.state().error.as_deref(),
        Some(messages::STORED_TOKEN_REJECTED)
    );
    assert!(gate.store().is_empty());
}

#[test]
fn test_large_stored_token_is_kept() {
    let data = "a".repeat(80 * 1024);
    let token = make_token(&format!(r#"{{"sub":"x","data":"{data}"}}"#));
    assert!(token.len() > 64 * 1024);

    let mut gate = TokenGate::with_clock(
        MemoryStore::with_entry(DEFAULT_STORAGE_KEY, token.clone()),
        MemoryLocation::new(PAGE),
        FixedClock(NOW),
        GateConfig::default(),
    )
    .unwrap();

    gate.initialize();

    assert_eq!(gate.state().phase(), GatePhase::Authenticated);
    assert_eq!(gate.store().get(DEFAULT_STORAGE_KEY).unwrap(), Some(token));
}

// ============================================================================
// URL Token
// ============================================================================

#[test]
fn test_url_token_is_persisted_and_stripped() {
    let token = valid_token();
    let mut gate = gate_at(MemoryStore::new(), &format!("{PAGE}?token={token}"));

    gate.initialize();

    assert_eq!(gate.state().phase(), GatePhase::Authenticated);
    assert_eq!(gate.state().error, None);
    assert_eq!(gate.store().get(DEFAULT_STORAGE_KEY).unwrap(), Some(token));
    assert_eq!(gate.location().url(), PAGE);
    assert!(!gate.location().url().contains("token"));
}

#[test]
fn test_url_secret_param_is_accepted() {
    let token = valid_token();
    let mut gate = gate_at(MemoryStore::new(), &format!("{PAGE}?lang=en&secret={token}"));

    gate.initialize();

    assert_eq!(gate.state().phase(), GatePhase::Authenticated);
    assert_eq!(gate.location().url(), format!("{PAGE}?lang=en"));
}

#[test]
fn test_url_token_param_checked_before_secret() {
    let token = valid_token();
    let other = make_token(r#"{"sub":"other"}"#);
    let mut gate = gate_at(
        MemoryStore::new(),
        &format!("{PAGE}?secret={other}&token={token}"),
    );

    gate.initialize();

    assert_eq!(gate.state().token.as_deref(), Some(token.as_str()));
    // Both names are stripped regardless of which one was consumed
    assert_eq!(gate.location().url(), PAGE);
}

#[test]
fn test_url_expired_secret() {
    let mut gate = gate_at(
        MemoryStore::new(),
        &format!("{PAGE}?secret={}", expired_token()),
    );

    gate.initialize();

    let state = gate.state();
    assert_eq!(state.phase(), GatePhase::Unauthenticated);
    assert_eq!(state.error.as_deref(), Some(messages::URL_TOKEN_REJECTED));
    assert_eq!(state.token, None);
    assert!(gate.store().is_empty());
}

#[test]
fn test_no_token_found() {
    let mut gate = gate_at(MemoryStore::new(), &format!("{PAGE}?lang=en"));

    gate.initialize();

    assert_eq!(gate.state().phase(), GatePhase::Unauthenticated);
    assert_eq!(gate.state().error.as_deref(), Some(messages::NO_TOKEN_FOUND));
    assert_eq!(gate.location().url(), format!("{PAGE}?lang=en"));
}

#[test]
fn test_custom_config_names() {
    let token = valid_token();
    let config = GateConfig::new()
        .storage_key("session")
        .query_params(["access_token"]);
    let mut gate = TokenGate::with_clock(
        MemoryStore::new(),
        MemoryLocation::new(format!("{PAGE}?access_token={token}&token=ignored")),
        FixedClock(NOW),
        config,
    )
    .unwrap();

    gate.initialize();

    assert_eq!(gate.state().phase(), GatePhase::Authenticated);
    assert_eq!(gate.store().get("session").unwrap(), Some(token));
    assert_eq!(gate.location().url(), format!("{PAGE}?token=ignored"));
}

// ============================================================================
// Session Controls
// ============================================================================

#[test]
fn test_logout_after_authenticated_session() {
    let mut gate = gate_at(MemoryStore::new(), &format!("{PAGE}?token={}", valid_token()));
    gate.initialize();
    gate.toggle_details();
    assert!(gate.state().show_token_details);

    gate.logout();

    let state = gate.state();
    assert_eq!(state.phase(), GatePhase::Unauthenticated);
    assert_eq!(state.error.as_deref(), Some(messages::LOGGED_OUT));
    assert!(!state.show_token_details);
    assert_eq!(state.token_payload_json, None);
    assert_eq!(gate.store().get(DEFAULT_STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_session_survives_restart() {
    let mut first = gate_at(MemoryStore::new(), &format!("{PAGE}?token={}", valid_token()));
    first.initialize();
    let store = first.store().clone();

    // A reload of the cleaned page reuses the persisted token
    let mut second = gate_at(store, PAGE);
    second.initialize();
    assert_eq!(second.state().phase(), GatePhase::Authenticated);
}

#[test]
fn test_toggle_details_twice_restores() {
    let mut gate = gate_at(MemoryStore::new(), PAGE);
    gate.initialize();
    let before = gate.state().show_token_details;

    gate.toggle_details();
    gate.toggle_details();

    assert_eq!(gate.state().show_token_details, before);
    assert_eq!(gate.state().error.as_deref(), Some(messages::NO_TOKEN_FOUND));
}

#[test]
fn test_state_serializes_for_display() {
    let mut gate = gate_at(MemoryStore::new(), &format!("{PAGE}?token={}", valid_token()));
    gate.initialize();

    let value = serde_json::to_value(gate.state()).unwrap();
    assert_eq!(value["isAuthenticated"], true);
    assert_eq!(value["loading"], false);
    assert_eq!(value["tokenExpiryDisplay"], "11/14/2023, 11:13:20 PM");
}
