use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_CATEGORY_ID: &str = "default";
pub const DEFAULT_CATEGORY_NAME: &str = "General";
pub const DEFAULT_CATEGORY_COLOR: &str = "#3b82f6";

/// A single to-do item. Field names on the wire follow the document schema
/// (`categoryId`, `createdAt`, ...), timestamps are unix milliseconds and
/// due dates are `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub completed: bool,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pomodoros: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Unlocked achievement ids (append-only), last visit date and the
/// consecutive-day visit streak.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GamificationState {
    #[serde(default)]
    pub unlocked: Vec<String>,
    #[serde(default)]
    pub last_visit_date: Option<String>,
    #[serde(default)]
    pub streak: u32,
}

/// The full per-user snapshot. Saved and replaced only as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlannerDocument {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub gamification: GamificationState,
}

impl PlannerDocument {
    /// A new user's document, with the default category in place and today's
    /// visit already counted.
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            tasks: Vec::new(),
            categories: vec![Category {
                id: DEFAULT_CATEGORY_ID.to_string(),
                name: DEFAULT_CATEGORY_NAME.to_string(),
                color: DEFAULT_CATEGORY_COLOR.to_string(),
            }],
            gamification: GamificationState {
                unlocked: Vec::new(),
                last_visit_date: Some(today.to_string()),
                streak: 1,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreData {
    pub users: BTreeMap<String, PlannerDocument>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Every read or mutation of the document answers with the full snapshot
/// plus the achievement ids the request just unlocked.
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document: PlannerDocument,
    pub unlocked: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub text: String,
    pub category_id: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub pomodoros: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleTaskRequest {
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct AddCategoryRequest {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub goal: String,
    #[serde(default)]
    pub include_pomodoro: bool,
}

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    #[serde(default)]
    pub category_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FirstStepRequest {
    pub task_id: String,
}

#[derive(Debug, Serialize)]
pub struct FirstStepResponse {
    pub first_step: String,
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub user_input: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub text: Option<String>,
    pub due_date: Option<String>,
    pub category_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AchievementInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct DailyCompletion {
    pub date: String,
    pub completed: u64,
}

#[derive(Debug, Serialize)]
pub struct CategorySlice {
    pub name: String,
    pub color: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct TodayProgress {
    pub created: u64,
    pub completed: u64,
    pub percent: f64,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub last_7_days: Vec<DailyCompletion>,
    pub categories: Vec<CategorySlice>,
    pub today: TodayProgress,
}
