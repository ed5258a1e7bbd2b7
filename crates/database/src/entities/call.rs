//! Call entity definitions

use serde::{Deserialize, Serialize};

/// Call kind enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
    Audio,
    Video,
}

impl CallKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallKind::Audio => "audio",
            CallKind::Video => "video",
        }
    }
}

impl From<&str> for CallKind {
    fn from(s: &str) -> Self {
        match s {
            "audio" => CallKind::Audio,
            _ => CallKind::Video,
        }
    }
}

impl std::fmt::Display for CallKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Call status enum. Rows are created as `active`; later transitions are
/// owned by a collaborator outside this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    Active,
    Ended,
    Missed,
}

impl CallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallStatus::Active => "active",
            CallStatus::Ended => "ended",
            CallStatus::Missed => "missed",
        }
    }
}

impl From<&str> for CallStatus {
    fn from(s: &str) -> Self {
        match s {
            "ended" => CallStatus::Ended,
            "missed" => CallStatus::Missed,
            _ => CallStatus::Active,
        }
    }
}

impl std::fmt::Display for CallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A call joined with initiator and chat metadata, as returned by the
/// call-history listing. `chat_name` is outer-joined and may be absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallSummary {
    pub id: i64,
    pub chat_id: i64,
    pub call_type: CallKind,
    pub status: CallStatus,
    pub started_at: String,
    pub ended_at: Option<String>,
    pub duration: Option<i64>,
    pub initiator_name: String,
    pub chat_name: Option<String>,
}

/// Payload for opening a call record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCall {
    pub chat_id: i64,
    pub initiator_id: i64,
    pub call_type: CallKind,
}

/// Identifier and start timestamp of a freshly opened call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallReceipt {
    pub id: i64,
    pub started_at: String,
}
