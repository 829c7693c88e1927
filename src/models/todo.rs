use chrono::prelude::{DateTime, Utc};
use chrono::SubsecRound;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub completed: i64,
    #[serde(rename = "createdAt", with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl TodoRecord {
    pub fn new(title: String, completed: i64) -> Self {
        Self {
            id: ObjectId::new().to_hex(),
            title,
            completed,
            // BSON datetimes only carry milliseconds
            created_at: Utc::now().trunc_subsecs(3),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoView {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&TodoRecord> for TodoView {
    fn from(value: &TodoRecord) -> Self {
        Self {
            id: value.id.clone(),
            title: value.title.clone(),
            completed: value.completed == 1,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct TodoForm {
    pub title: String,
    pub completed: String,
}

impl TodoForm {
    /// Missing fields stay empty; a repeated field keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        let (mut seen_title, mut seen_completed) = (false, false);
        for (key, value) in pairs {
            match key.as_str() {
                "title" if !seen_title => {
                    form.title = value;
                    seen_title = true;
                }
                "completed" if !seen_completed => {
                    form.completed = value;
                    seen_completed = true;
                }
                _ => {}
            }
        }
        form
    }

    pub fn completed_flag(&self) -> i64 {
        completed_flag(&self.completed)
    }
}

// anything that is not a decimal integer is 0
pub fn completed_flag(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}
