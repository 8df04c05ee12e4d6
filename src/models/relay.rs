use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Log item shared by every relay log type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayLog {
    pub id: i64,

    /// Present only for tracked relays.
    #[serde(default)]
    pub tracking_id: Option<i64>,

    /// Recipient email address.
    pub email: String,

    #[serde(default)]
    pub sender_email: Option<String>,

    #[serde(default)]
    pub subject: Option<String>,

    /// When the event was logged.
    #[serde(default, with = "crate::date::optional")]
    pub time: Option<NaiveDateTime>,
}

/// A message opening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayOpenLog {
    #[serde(flatten)]
    pub log: RelayLog,

    #[serde(default)]
    pub ip: Option<String>,

    #[serde(default)]
    pub user_agent: Option<String>,
}

/// A click on a link of a tracked relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayClickLog {
    #[serde(flatten)]
    pub log: RelayLog,

    /// The link that was followed.
    pub url: String,

    #[serde(default)]
    pub ip: Option<String>,

    #[serde(default)]
    pub user_agent: Option<String>,
}

/// A bounced relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayBounceLog {
    #[serde(flatten)]
    pub log: RelayLog,

    #[serde(default, rename = "type")]
    pub bounce_type: Option<String>,

    /// Diagnostic returned by the receiving mail server.
    #[serde(default)]
    pub message: Option<String>,
}

/// Relay log families and where each one lives in a `Relay/GetLogs` answer.
pub trait RelayLogKind {
    /// Value of the `log_type` request parameter.
    const LOG_TYPE: &'static str;
    /// Property of `data` that holds the log items.
    const ARRAY_PROPERTY: &'static str;
}

impl RelayLogKind for RelayLog {
    const LOG_TYPE: &'static str = "sent";
    const ARRAY_PROPERTY: &'static str = "sent_logs";
}

impl RelayLogKind for RelayOpenLog {
    const LOG_TYPE: &'static str = "open";
    const ARRAY_PROPERTY: &'static str = "open_logs";
}

impl RelayLogKind for RelayClickLog {
    const LOG_TYPE: &'static str = "clickthru";
    const ARRAY_PROPERTY: &'static str = "clickthru_logs";
}

impl RelayLogKind for RelayBounceLog {
    const LOG_TYPE: &'static str = "bounce";
    const ARRAY_PROPERTY: &'static str = "bounce_logs";
}
