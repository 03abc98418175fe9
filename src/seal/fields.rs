use chrono::{DateTime, Utc};

pub const DEFAULT_CERT_ID: &str = "PT-20260102-TESTID";
pub const DEFAULT_REGISTRY_NO: &str = "R-0000000000000001";
pub const DEFAULT_HASH: &str = "SHA-256: bb59a42a0...7b9fddbb5";
pub const DEFAULT_VERIFY_URL: &str = "http://localhost:3333/verify/PT-20260102-F906EE";
pub const DEFAULT_HOLDER: &str = "Haggai Goldfarb";

/// The dynamic strings stamped onto a seal. `None` fields are skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SealText {
    pub date: Option<String>,
    pub cert_id: Option<String>,
    pub registry_no: Option<String>,
    pub hash: Option<String>,
    pub verify_url: Option<String>,
    pub holder: Option<String>,
}

impl SealText {
    /// Fill missing or empty fields with placeholder values; the date defaults to `now`.
    pub fn with_defaults(self, now: DateTime<Utc>) -> Self {
        fn or(v: Option<String>, default: impl FnOnce() -> String) -> Option<String> {
            Some(v.filter(|s| !s.is_empty()).unwrap_or_else(default))
        }
        Self {
            date: or(self.date, || format_seal_date(now)),
            cert_id: or(self.cert_id, || DEFAULT_CERT_ID.to_string()),
            registry_no: or(self.registry_no, || DEFAULT_REGISTRY_NO.to_string()),
            hash: or(self.hash, || DEFAULT_HASH.to_string()),
            verify_url: or(self.verify_url, || DEFAULT_VERIFY_URL.to_string()),
            holder: or(self.holder, || DEFAULT_HOLDER.to_string()),
        }
    }

    /// The holder line as printed on the seal.
    pub fn holder_line(&self) -> Option<String> {
        self.holder
            .as_deref()
            .filter(|h| !h.is_empty())
            .map(|h| format!("holder: {h}"))
    }
}

/// Rim date format, e.g. `2026.01.02 • 13:04:05 UTC`.
pub fn format_seal_date(t: DateTime<Utc>) -> String {
    t.format("%Y.%m.%d \u{2022} %H:%M:%S UTC").to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/seal/fields.rs"]
mod tests;
