//! Wire DTOs for the toll-gate REST backend and the local dashboard source.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON (`IdCabang`, `NamaGerbang`, ...) via
//! serde renames so the rest of the client works with Rust-cased names.
//! Envelopes are deserialized leniently: missing counters default and are
//! recomputed when a list response is turned into a `Page`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::listing::Page;

// =============================================================================
// AUTH
// =============================================================================

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token.
    pub token: String,
    /// Logged-in marker; stored verbatim as JSON text.
    #[serde(default)]
    pub is_logged_in: serde_json::Value,
}

impl LoginResponse {
    /// JSON text persisted in the `is_logged_in` cookie.
    ///
    /// A missing marker is stored as `true` so a token-bearing response always
    /// yields an authenticated session.
    pub fn logged_in_marker(&self) -> String {
        if self.is_logged_in.is_null() {
            return "true".to_owned();
        }
        self.is_logged_in.to_string()
    }
}

/// One structured validation error returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub msg: String,
}

/// Error body shape shared by all backend endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<FieldError>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse a raw response body, tolerating non-JSON and partial payloads.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// `"{path} : {msg}"` per validation error, in backend order.
    pub fn field_lines(&self) -> Vec<String> {
        self.errors.iter().map(|e| format!("{} : {}", e.path, e.msg)).collect()
    }
}

// =============================================================================
// GATES
// =============================================================================

/// A toll gate (gerbang) as listed by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    /// Server-assigned identifier.
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    /// Owning branch (cabang) identifier.
    #[serde(rename = "IdCabang", deserialize_with = "deserialize_i64_lenient")]
    pub branch_id: i64,
    /// Gate display name.
    #[serde(rename = "NamaGerbang", default)]
    pub gate_name: String,
    /// Branch display name, derived server-side.
    #[serde(rename = "NamaCabang", default)]
    pub branch_name: String,
}

/// Editable gate fields. This is the exact create/update request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDraft {
    #[serde(rename = "IdCabang")]
    pub branch_id: i64,
    #[serde(rename = "NamaGerbang")]
    pub gate_name: String,
}

impl From<&Gate> for GateDraft {
    fn from(gate: &Gate) -> Self {
        Self { branch_id: gate.branch_id, gate_name: gate.gate_name.clone() }
    }
}

/// `GET /gerbangs` response envelope.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GateListResponse {
    #[serde(default)]
    pub data: GateListData,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GateListData {
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub rows: GateRows,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GateRows {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub rows: Vec<Gate>,
}

impl GateListResponse {
    /// Convert to a list page for the `(page, limit)` that was requested.
    pub fn into_page(self, requested_page: u32, limit: u32) -> Page<Gate> {
        let data = self.data;
        let total_data = data.rows.count.or(data.count).unwrap_or(data.rows.rows.len() as u64);
        Page {
            current_page: data.current_page.unwrap_or(requested_page),
            total_pages: data.total_pages.unwrap_or_else(|| pages_for(total_data, limit)),
            total_data,
            rows: data.rows.rows,
        }
    }
}

// =============================================================================
// TRAFFIC RECORDS
// =============================================================================

/// One traffic-count (lalin) row. Values are kept as raw JSON scalars because
/// the backend does not type them consistently.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficRecord {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(rename = "IdCabang", default)]
    pub branch_id: Option<serde_json::Value>,
    #[serde(rename = "IdGerbang", default)]
    pub gate_id: Option<serde_json::Value>,
    #[serde(rename = "IdGardu", default)]
    pub lane_id: Option<serde_json::Value>,
    #[serde(rename = "Golongan", default)]
    pub vehicle_class: Option<serde_json::Value>,
    #[serde(rename = "IdAsalGerbang", default)]
    pub origin_gate: Option<serde_json::Value>,
}

/// `GET /lalins` response envelope.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TrafficListResponse {
    #[serde(default)]
    pub data: TrafficListData,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TrafficListData {
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub rows: TrafficRows,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TrafficRows {
    #[serde(default)]
    pub rows: Vec<TrafficRecord>,
}

impl TrafficListResponse {
    /// Convert to a list page for the `(page, limit)` that was requested.
    pub fn into_page(self, requested_page: u32, limit: u32) -> Page<TrafficRecord> {
        let data = self.data;
        let total_data = data.count.unwrap_or(data.rows.rows.len() as u64);
        Page {
            current_page: data.current_page.unwrap_or(requested_page),
            total_pages: data.total_pages.unwrap_or_else(|| pages_for(total_data, limit)),
            total_data,
            rows: data.rows.rows,
        }
    }
}

/// Table cell text for a loosely-typed value: falsy values render as `-`.
pub fn cell_text(value: Option<&serde_json::Value>) -> String {
    use serde_json::Value;
    match value {
        None | Some(Value::Null | Value::Bool(false)) => "-".to_owned(),
        Some(Value::String(s)) if s.is_empty() => "-".to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => "-".to_owned(),
        Some(other) => other.to_string(),
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// `GET /dummyDashboard.json` response envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct DashboardResponse {
    pub data: DashboardEnvelope,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DashboardEnvelope {
    pub data: DashboardData,
}

/// Aggregate traffic figures for one day.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub tanggal: String,
    #[serde(rename = "bankTraffic", default)]
    pub bank_traffic: Vec<BankTraffic>,
    #[serde(rename = "gateTraffic", default)]
    pub gate_traffic: Vec<GateTraffic>,
    #[serde(rename = "shiftTraffic", default)]
    pub shift_traffic: Vec<TrafficShare>,
    #[serde(rename = "ruasTraffic", default)]
    pub ruas_traffic: Vec<TrafficShare>,
}

/// Traffic per payment bank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankTraffic {
    pub bank: String,
    #[serde(deserialize_with = "deserialize_u64_lenient")]
    pub jumlah: u64,
}

/// Traffic per gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateTraffic {
    pub gerbang: String,
    #[serde(deserialize_with = "deserialize_u64_lenient")]
    pub jumlah: u64,
}

/// A named share of total traffic (shift or road section).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrafficShare {
    pub name: String,
    pub value: f64,
}

// =============================================================================
// HELPERS
// =============================================================================

fn pages_for(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
}

fn deserialize_u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_lenient(deserializer)?;
    u64::try_from(value).map_err(|_| D::Error::custom(format!("value {value} is negative")))
}

/// Accept integers, integral floats and numeric strings.
fn deserialize_i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer string, got {s:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
