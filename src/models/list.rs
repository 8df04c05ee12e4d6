use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A mailing list.
///
/// The counters at the end of the struct are only populated on request, see
/// `GetListBuilder::include_details` and
/// `GetListBuilder::calculate_engagement`. They stay `None` otherwise, which
/// is distinct from a count of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub policy: Option<String>,
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, with = "crate::date::optional")]
    pub created_on: Option<NaiveDateTime>,

    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub sender_email: Option<String>,
    #[serde(default)]
    pub forward_page: Option<String>,

    // Redirection pages after opt-in, double opt-in and opt-out.
    #[serde(default)]
    pub goto_oi: Option<String>,
    #[serde(default)]
    pub goto_di: Option<String>,
    #[serde(default)]
    pub goto_oo: Option<String>,

    // Bounce limits per bounce category.
    #[serde(default)]
    pub b_ac_limit: Option<i64>,
    #[serde(default)]
    pub b_cr_limit: Option<i64>,
    #[serde(default)]
    pub b_df_limit: Option<i64>,
    #[serde(default)]
    pub b_fm_limit: Option<i64>,
    #[serde(default)]
    pub b_hb_limit: Option<i64>,
    #[serde(default)]
    pub b_mb_limit: Option<i64>,
    #[serde(default)]
    pub b_sb_limit: Option<i64>,
    #[serde(default)]
    pub b_tr_limit: Option<i64>,

    #[serde(default)]
    pub di_trig_cnt: Option<i64>,
    #[serde(default)]
    pub oi_trig_cnt: Option<i64>,
    #[serde(default)]
    pub oo_trig_cnt: Option<i64>,

    #[serde(default)]
    pub oi_url: Option<String>,
    #[serde(default)]
    pub subscribe_url: Option<String>,
    #[serde(default)]
    pub oo_url: Option<String>,
    #[serde(default)]
    pub webhook: Option<String>,

    /// Only calculated when engagement was requested.
    #[serde(default)]
    pub engagement: Option<i64>,

    /// Only returned when details were requested.
    #[serde(default, rename = "pending")]
    pub pending_count: Option<i64>,
    #[serde(default, rename = "active")]
    pub active_count: Option<i64>,
    #[serde(default, rename = "bounced")]
    pub bounced_count: Option<i64>,
    #[serde(default, rename = "invalid")]
    pub invalid_count: Option<i64>,
    #[serde(default, rename = "unsubscribed")]
    pub unsubscribed_count: Option<i64>,
    #[serde(default, rename = "spam")]
    pub spam_count: Option<i64>,
    #[serde(default, rename = "deleted")]
    pub deleted_count: Option<i64>,
}

/// Answer of a list count query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ListCount {
    pub count: i64,
}
