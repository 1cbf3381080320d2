use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub ok: bool,
}

/// Body of `POST /runs` on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunCreated {
    pub status: String,
    pub run_id: String,
}

/// Body accepted by both display-name update routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNameUpdate {
    pub display_name: String,
}

/// Body of a display-name update. `matched` is 0 or 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNameUpdated {
    pub status: String,
    pub run_id: String,
    pub matched: u64,
}

impl DisplayNameUpdated {
    pub fn new(run_id: String, matched: u64) -> Self {
        Self {
            status: "updated".to_string(),
            run_id,
            matched,
        }
    }
}
