use crate::assistant::TaskSummary;
use crate::auth;
use crate::errors::AppError;
use crate::gamification::{self, CAT_MASTER, FIRST_STEP, FIVE_A_DAY, STREAK_3};
use crate::models::{
    AchievementInfo, AddCategoryRequest, AddTaskRequest, Category, DEFAULT_CATEGORY_ID,
    DocumentResponse, FirstStepRequest, FirstStepResponse, LoginRequest, LoginResponse,
    ParseRequest, ParseResponse, PlanRequest, PlannerDocument, SortRequest, StatsResponse,
    StoreData, Task, ToggleTaskRequest, UserInfo,
};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::storage::persist_store;
use crate::ui;
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Html,
};
use chrono::{Local, NaiveDate, Utc};
use std::collections::HashSet;
use tracing::info;
use uuid::Uuid;

pub async fn index() -> Html<&'static str> {
    Html(ui::index_html())
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }

    let user_id = auth::user_id_from_name(&name);
    let token = auth::issue_session(&state, user_id.clone()).await;
    info!("user {user_id} logged in");

    Ok(Json(LoginResponse {
        token,
        user: UserInfo { id: user_id, name },
    }))
}

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    auth::drop_session(&state, &headers).await;
    Ok(StatusCode::NO_CONTENT)
}

/// Loads the caller's document, bootstrapping a fresh one on first contact.
/// Every load runs visit tracking, so the streak bookkeeping happens here
/// rather than on any mutation path.
pub async fn get_document(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DocumentResponse>, AppError> {
    let user_id = auth::require_user(&state, &headers).await?;
    let today = Local::now().date_naive();

    let mut store = state.store.lock().await;
    let mut dirty = !store.users.contains_key(&user_id);
    let document = document_mut(&mut store, &user_id, today);

    let mut unlocked = Vec::new();
    if gamification::track_visit_at(today, &mut document.gamification) {
        dirty = true;
    }
    let streak_reached = document.gamification.streak >= 3;
    if gamification::unlock_if(&mut document.gamification, STREAK_3, streak_reached) {
        unlocked.push(STREAK_3.to_string());
        dirty = true;
    }

    let response = DocumentResponse {
        document: document.clone(),
        unlocked,
    };
    if dirty {
        persist_store(&state.data_path, &store).await?;
    }

    Ok(Json(response))
}

/// Wholesale replacement, last writer wins. This is the raw sync write path;
/// no achievement checks run here.
pub async fn put_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PlannerDocument>,
) -> Result<Json<DocumentResponse>, AppError> {
    let user_id = auth::require_user(&state, &headers).await?;

    let mut store = state.store.lock().await;
    store.users.insert(user_id, payload.clone());
    persist_store(&state.data_path, &store).await?;

    Ok(Json(DocumentResponse {
        document: payload,
        unlocked: Vec::new(),
    }))
}

pub async fn add_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddTaskRequest>,
) -> Result<Json<DocumentResponse>, AppError> {
    let user_id = auth::require_user(&state, &headers).await?;
    let text = payload.text.trim();
    if text.is_empty() {
        return Err(AppError::bad_request("task text must not be empty"));
    }

    let mut store = state.store.lock().await;
    let document = document_mut(&mut store, &user_id, Local::now().date_naive());
    if !document
        .categories
        .iter()
        .any(|category| category.id == payload.category_id)
    {
        return Err(AppError::bad_request("unknown category"));
    }

    document.tasks.push(Task {
        id: Uuid::new_v4().to_string(),
        text: text.to_string(),
        category_id: payload.category_id,
        due_date: payload.due_date.filter(|date| !date.is_empty()),
        completed: false,
        created_at: now_millis(),
        completed_at: None,
        pomodoros: payload.pomodoros,
    });

    respond_and_persist(&state, store, &user_id, Vec::new()).await
}

pub async fn toggle_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(task_id): Path<String>,
    Json(payload): Json<ToggleTaskRequest>,
) -> Result<Json<DocumentResponse>, AppError> {
    let user_id = auth::require_user(&state, &headers).await?;
    let today = Local::now().date_naive();

    let mut store = state.store.lock().await;
    let document = document_mut(&mut store, &user_id, today);
    let task = document
        .tasks
        .iter_mut()
        .find(|task| task.id == task_id)
        .ok_or_else(|| AppError::not_found("unknown task"))?;

    task.completed = payload.completed;
    task.completed_at = payload.completed.then(now_millis);

    let mut unlocked = Vec::new();
    if payload.completed {
        let completed_count = document.tasks.iter().filter(|task| task.completed).count();
        if gamification::unlock_if(&mut document.gamification, FIRST_STEP, completed_count == 1) {
            unlocked.push(FIRST_STEP.to_string());
        }
        let done_today = gamification::completed_today(&document.tasks, today);
        if gamification::unlock_if(&mut document.gamification, FIVE_A_DAY, done_today >= 5) {
            unlocked.push(FIVE_A_DAY.to_string());
        }
    }

    respond_and_persist(&state, store, &user_id, unlocked).await
}

pub async fn delete_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(task_id): Path<String>,
) -> Result<Json<DocumentResponse>, AppError> {
    let user_id = auth::require_user(&state, &headers).await?;

    let mut store = state.store.lock().await;
    let document = document_mut(&mut store, &user_id, Local::now().date_naive());
    let before = document.tasks.len();
    document.tasks.retain(|task| task.id != task_id);
    if document.tasks.len() == before {
        return Err(AppError::not_found("unknown task"));
    }

    respond_and_persist(&state, store, &user_id, Vec::new()).await
}

pub async fn add_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddCategoryRequest>,
) -> Result<Json<DocumentResponse>, AppError> {
    let user_id = auth::require_user(&state, &headers).await?;
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("category name must not be empty"));
    }

    let mut store = state.store.lock().await;
    let document = document_mut(&mut store, &user_id, Local::now().date_naive());
    document.categories.push(Category {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        color: payload.color,
    });

    let mut unlocked = Vec::new();
    let category_count = document.categories.len();
    if gamification::unlock_if(&mut document.gamification, CAT_MASTER, category_count >= 4) {
        unlocked.push(CAT_MASTER.to_string());
    }

    respond_and_persist(&state, store, &user_id, unlocked).await
}

/// Removing a category also removes every task that referenced it.
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(category_id): Path<String>,
) -> Result<Json<DocumentResponse>, AppError> {
    let user_id = auth::require_user(&state, &headers).await?;

    let mut store = state.store.lock().await;
    let document = document_mut(&mut store, &user_id, Local::now().date_naive());
    let before = document.categories.len();
    document.categories.retain(|category| category.id != category_id);
    if document.categories.len() == before {
        return Err(AppError::not_found("unknown category"));
    }
    document.tasks.retain(|task| task.category_id != category_id);

    respond_and_persist(&state, store, &user_id, Vec::new()).await
}

pub async fn assistant_first_step(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<FirstStepRequest>,
) -> Result<Json<FirstStepResponse>, AppError> {
    let user_id = auth::require_user(&state, &headers).await?;

    // Resolve the text first so the store lock is not held across the
    // upstream call.
    let task_text = {
        let store = state.store.lock().await;
        store
            .users
            .get(&user_id)
            .and_then(|document| {
                document
                    .tasks
                    .iter()
                    .find(|task| task.id == payload.task_id)
                    .map(|task| task.text.clone())
            })
            .ok_or_else(|| AppError::not_found("unknown task"))?
    };

    let reply = state.assistant.first_step(&task_text).await?;
    Ok(Json(FirstStepResponse {
        first_step: reply.first_step,
    }))
}

pub async fn assistant_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PlanRequest>,
) -> Result<Json<DocumentResponse>, AppError> {
    let user_id = auth::require_user(&state, &headers).await?;
    let goal = payload.goal.trim();
    if goal.is_empty() {
        return Err(AppError::bad_request("goal must not be empty"));
    }

    let reply = state
        .assistant
        .generate_tasks(goal, payload.include_pomodoro)
        .await?;
    info!("assistant proposed {} tasks", reply.tasks.len());

    let mut store = state.store.lock().await;
    let document = document_mut(&mut store, &user_id, Local::now().date_naive());
    let category_id = document
        .categories
        .iter()
        .find(|category| category.id == DEFAULT_CATEGORY_ID)
        .or_else(|| document.categories.first())
        .map(|category| category.id.clone())
        .ok_or_else(|| AppError::bad_request("no category to file tasks under"))?;

    for generated in reply.tasks {
        document.tasks.push(Task {
            id: Uuid::new_v4().to_string(),
            text: generated.text,
            category_id: category_id.clone(),
            due_date: None,
            completed: false,
            created_at: now_millis(),
            completed_at: None,
            pomodoros: payload.include_pomodoro.then_some(generated.pomodoros).flatten(),
        });
    }

    respond_and_persist(&state, store, &user_id, Vec::new()).await
}

/// Reorders the open tasks of the requested scope to the assistant's
/// preferred order; everything else keeps its place behind them.
pub async fn assistant_sort(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SortRequest>,
) -> Result<Json<DocumentResponse>, AppError> {
    let user_id = auth::require_user(&state, &headers).await?;

    let scoped: Vec<(String, String)> = {
        let store = state.store.lock().await;
        store
            .users
            .get(&user_id)
            .map(|document| {
                document
                    .tasks
                    .iter()
                    .filter(|task| {
                        !task.completed
                            && payload
                                .category_id
                                .as_ref()
                                .is_none_or(|id| &task.category_id == id)
                    })
                    .map(|task| (task.id.clone(), task.text.clone()))
                    .collect()
            })
            .unwrap_or_default()
    };
    if scoped.len() < 2 {
        return Err(AppError::bad_request("need at least two open tasks to sort"));
    }

    let summaries = scoped
        .iter()
        .map(|(id, text)| TaskSummary {
            id: id.as_str(),
            text: text.as_str(),
        })
        .collect();
    let reply = state.assistant.prioritize(summaries).await?;

    let scope_ids: Vec<String> = scoped.into_iter().map(|(id, _)| id).collect();
    let mut store = state.store.lock().await;
    let document = document_mut(&mut store, &user_id, Local::now().date_naive());
    apply_assistant_order(&mut document.tasks, &scope_ids, &reply.sorted_ids);

    respond_and_persist(&state, store, &user_id, Vec::new()).await
}

pub async fn assistant_parse(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    let user_id = auth::require_user(&state, &headers).await?;
    let input = payload.user_input.trim();
    if input.is_empty() {
        return Err(AppError::bad_request("input must not be empty"));
    }

    let reply = state.assistant.parse_task(input).await?;

    let category_id = match reply.category_name.as_deref() {
        Some(name) => {
            let wanted = name.to_lowercase();
            let store = state.store.lock().await;
            store.users.get(&user_id).and_then(|document| {
                document
                    .categories
                    .iter()
                    .find(|category| category.name.to_lowercase() == wanted)
                    .map(|category| category.id.clone())
            })
        }
        None => None,
    };

    Ok(Json(ParseResponse {
        text: reply.text,
        due_date: reply.due_date,
        category_id,
    }))
}

pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StatsResponse>, AppError> {
    let user_id = auth::require_user(&state, &headers).await?;
    let store = state.store.lock().await;
    let document = store.users.get(&user_id).cloned().unwrap_or_default();
    Ok(Json(build_stats(&document)))
}

pub async fn get_achievements() -> Json<Vec<AchievementInfo>> {
    Json(
        gamification::CATALOG
            .iter()
            .map(|achievement| AchievementInfo {
                id: achievement.id.to_string(),
                name: achievement.name.to_string(),
                description: achievement.description.to_string(),
            })
            .collect(),
    )
}

fn document_mut<'a>(
    store: &'a mut StoreData,
    user_id: &str,
    today: NaiveDate,
) -> &'a mut PlannerDocument {
    store
        .users
        .entry(user_id.to_string())
        .or_insert_with(|| PlannerDocument::fresh(today))
}

/// Clones the caller's document for the response, then rewrites the whole
/// store before answering.
async fn respond_and_persist(
    state: &AppState,
    store: tokio::sync::MutexGuard<'_, StoreData>,
    user_id: &str,
    unlocked: Vec<String>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = store.users.get(user_id).cloned().unwrap_or_default();
    persist_store(&state.data_path, &store).await?;
    Ok(Json(DocumentResponse { document, unlocked }))
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Tasks named in `scope_ids` move to the front, ordered by their position
/// in `sorted_ids` (ids the assistant did not return sort ahead). The
/// remaining tasks follow in their previous order.
fn apply_assistant_order(tasks: &mut Vec<Task>, scope_ids: &[String], sorted_ids: &[String]) {
    let in_scope: HashSet<&str> = scope_ids.iter().map(String::as_str).collect();
    let mut selected = Vec::with_capacity(scope_ids.len());
    let mut rest = Vec::new();
    for task in tasks.drain(..) {
        if in_scope.contains(task.id.as_str()) {
            selected.push(task);
        } else {
            rest.push(task);
        }
    }
    selected.sort_by_key(|task| {
        sorted_ids
            .iter()
            .position(|id| id == &task.id)
            .map(|position| position as i64)
            .unwrap_or(-1)
    });
    tasks.extend(selected);
    tasks.extend(rest);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            text: format!("task {id}"),
            category_id: "default".to_string(),
            due_date: None,
            completed,
            created_at: 0,
            completed_at: None,
            pomodoros: None,
        }
    }

    #[test]
    fn assistant_order_moves_scoped_tasks_to_the_front() {
        let mut tasks = vec![task("a", false), task("b", true), task("c", false)];
        let scope = vec!["a".to_string(), "c".to_string()];
        let sorted = vec!["c".to_string(), "a".to_string()];

        apply_assistant_order(&mut tasks, &scope, &sorted);

        let order: Vec<&str> = tasks.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn ids_missing_from_the_reply_sort_ahead() {
        let mut tasks = vec![task("a", false), task("b", false), task("c", false)];
        let scope = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let sorted = vec!["c".to_string(), "a".to_string()];

        apply_assistant_order(&mut tasks, &scope, &sorted);

        let order: Vec<&str> = tasks.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }
}
