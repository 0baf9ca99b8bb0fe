use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Задача по клиенту (звонок, встреча, показ), привязанная к лиду
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientTask {
    pub id: String,
    pub lead_id: String,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientTaskDto {
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub notes: String,
}
