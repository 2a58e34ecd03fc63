//! State codec
//!
//! Serializes the session into a compact URL-safe token and restores it
//! verbatim: `decode(encode(s)) == s` for every valid session.
//!
//! The payload is a versioned fixed-order JSON tuple:
//!
//! ```text
//! [version, messages, bufferPercent, paygRate, packPrice, packSize,
//!  vat01, vatRate, totalUsers, licensedUsers, coverage01,
//!  agentName, expectedRuns, [[typeCode, qty, actions, name], ...]]
//! ```
//!
//! encoded as base64 with the URL-safe alphabet and padding stripped.
//!
//! Decoding is defensive throughout: older (shorter) payloads decode with
//! documented defaults, unknown type codes map to the classic type, and
//! malformed tokens surface as [`CodecError`] so the host can fall back to
//! "no state to restore" instead of crashing.

use crate::models::pricing::{LicenseCoverage, PricingParameters};
use crate::models::session::SessionState;
use crate::models::work_item::{WorkItem, WorkItemType};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};
use thiserror::Error;

/// Current payload version
///
/// Version 1 payloads end at the agent name (no expected runs, no work
/// items) and decode with `expected_runs = 0` and an empty list.
pub const PAYLOAD_VERSION: u64 = 2;

// Tuple field positions
const IDX_MESSAGES: usize = 1;
const IDX_BUFFER: usize = 2;
const IDX_PAYG_RATE: usize = 3;
const IDX_PACK_PRICE: usize = 4;
const IDX_PACK_SIZE: usize = 5;
const IDX_VAT_ENABLED: usize = 6;
const IDX_VAT_RATE: usize = 7;
const IDX_TOTAL_USERS: usize = 8;
const IDX_LICENSED_USERS: usize = 9;
const IDX_COVERAGE_ENABLED: usize = 10;
const IDX_AGENT_NAME: usize = 11;
const IDX_EXPECTED_RUNS: usize = 12;
const IDX_WORK_ITEMS: usize = 13;

/// Errors that can occur while decoding a session token
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("token is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("payload is not valid JSON: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("payload is not a tuple")]
    NotATuple,

    #[error("payload carries no version tag")]
    MissingVersion,

    #[error("unsupported payload version {0}")]
    UnsupportedVersion(u64),
}

/// Encode a session into a URL-safe token
///
/// # Example
/// ```
/// use message_pricing_core_rs::{codec, SessionState};
///
/// let session = SessionState::default();
/// let token = codec::encode(&session);
/// assert_eq!(codec::decode(&token).unwrap(), session);
/// ```
pub fn encode(state: &SessionState) -> String {
    let items: Vec<Value> = state
        .work_items()
        .iter()
        .map(|item| {
            json!([
                item.kind().code().to_string(),
                item.quantity(),
                item.action_count(),
                item.name(),
            ])
        })
        .collect();

    let payload = json!([
        PAYLOAD_VERSION,
        state.messages,
        state.pricing.buffer_percent,
        state.pricing.payg_rate,
        state.pricing.pack_price,
        state.pricing.pack_size,
        u8::from(state.pricing.vat_enabled),
        state.pricing.vat_rate_percent,
        state.coverage.total_users,
        state.coverage.licensed_users,
        u8::from(state.coverage.enabled),
        state.agent_name,
        state.expected_runs,
        items,
    ]);

    URL_SAFE_NO_PAD.encode(payload.to_string())
}

/// Decode a URL-safe token back into a session
///
/// Accepts padded tokens from older encoders. Any failure is reported as
/// a [`CodecError`]; the host treats every error as "no state to restore".
pub fn decode(token: &str) -> Result<SessionState, CodecError> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim_end_matches('='))?;
    let payload: Value = serde_json::from_slice(&bytes)?;
    let fields = payload.as_array().ok_or(CodecError::NotATuple)?;

    let version = fields
        .first()
        .and_then(Value::as_u64)
        .ok_or(CodecError::MissingVersion)?;
    if version == 0 || version > PAYLOAD_VERSION {
        return Err(CodecError::UnsupportedVersion(version));
    }

    let defaults = SessionState::default();
    let pricing_defaults = PricingParameters::default();

    let pricing = PricingParameters::new(
        field_f64(fields, IDX_PAYG_RATE, pricing_defaults.payg_rate),
        field_f64(fields, IDX_PACK_PRICE, pricing_defaults.pack_price),
        field_u64(fields, IDX_PACK_SIZE, pricing_defaults.pack_size),
        field_flag(fields, IDX_VAT_ENABLED),
        field_f64(fields, IDX_VAT_RATE, pricing_defaults.vat_rate_percent),
        field_f64(fields, IDX_BUFFER, pricing_defaults.buffer_percent),
    );

    let coverage = LicenseCoverage::new(
        field_u64(fields, IDX_TOTAL_USERS, 0),
        field_u64(fields, IDX_LICENSED_USERS, 0),
        field_flag(fields, IDX_COVERAGE_ENABLED),
    );

    let mut session = defaults;
    session.messages = field_u64(fields, IDX_MESSAGES, session.messages);
    session.pricing = pricing;
    session.coverage = coverage;
    session.agent_name = field_str(fields, IDX_AGENT_NAME);
    // Absent on version-1 payloads; documented default
    session.expected_runs = field_u64(fields, IDX_EXPECTED_RUNS, 0);

    for item in fields
        .get(IDX_WORK_ITEMS)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
    {
        session.add_item(decode_item(item));
    }

    Ok(session)
}

/// Decode a token, falling back to the default session on any failure
pub fn decode_or_default(token: &str) -> SessionState {
    decode(token).unwrap_or_default()
}

fn decode_item(value: &Value) -> WorkItem {
    let fields = match value.as_array() {
        Some(fields) => fields.as_slice(),
        None => &[],
    };

    let kind = fields
        .first()
        .and_then(Value::as_str)
        .and_then(|code| code.chars().next())
        // Unknown or absent type code falls back to the classic type
        .map_or(WorkItemType::default(), WorkItemType::from_code);
    let quantity = fields.get(1).and_then(Value::as_f64).map_or(1, to_count);
    let actions = fields.get(2).and_then(Value::as_f64).map_or(0, to_count);
    let name = fields
        .get(3)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    WorkItem::new(name, kind, quantity.max(1), actions)
}

// Tolerant field readers: anything that is not the expected shape takes
// the documented default instead of failing the whole decode.

fn field_f64(fields: &[Value], index: usize, default: f64) -> f64 {
    fields.get(index).and_then(Value::as_f64).unwrap_or(default)
}

fn field_u64(fields: &[Value], index: usize, default: u64) -> u64 {
    fields
        .get(index)
        .and_then(Value::as_f64)
        .map_or(default, to_count)
}

fn field_flag(fields: &[Value], index: usize) -> bool {
    fields.get(index).and_then(Value::as_u64).unwrap_or(0) != 0
}

fn field_str(fields: &[Value], index: usize) -> String {
    fields
        .get(index)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Floor a parsed number into the non-negative integer domain
fn to_count(x: f64) -> u64 {
    if x.is_finite() && x > 0.0 {
        x.floor() as u64
    } else {
        0
    }
}
