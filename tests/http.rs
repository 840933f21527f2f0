use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct SessionResponse {
    token: String,
    user: UserDto,
}

#[derive(Debug, Deserialize)]
struct UserDto {
    id: String,
    #[allow(dead_code)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct DocumentResponse {
    document: DocumentDto,
    unlocked: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DocumentDto {
    tasks: Vec<TaskDto>,
    categories: Vec<CategoryDto>,
    gamification: GamificationDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskDto {
    id: String,
    text: String,
    category_id: String,
    #[serde(default)]
    #[allow(dead_code)]
    due_date: Option<String>,
    completed: bool,
    #[allow(dead_code)]
    created_at: i64,
    #[serde(default)]
    completed_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct CategoryDto {
    id: String,
    name: String,
    #[allow(dead_code)]
    color: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GamificationDto {
    unlocked: Vec<String>,
    last_visit_date: Option<String>,
    streak: u32,
}

#[derive(Debug, Deserialize)]
struct StatsDto {
    last_7_days: Vec<serde_json::Value>,
    categories: Vec<serde_json::Value>,
    today: serde_json::Value,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("planner_app_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(base_url.to_string()).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    // nothing listens on this port, so every assistant call must fail
    let assistant_url = format!("http://127.0.0.1:{}", pick_free_port());
    let child = Command::new(env!("CARGO_BIN_EXE_planner_app"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("ASSISTANT_URL", assistant_url)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn login(client: &Client, base_url: &str, name: &str) -> SessionResponse {
    client
        .post(format!("{base_url}/api/login"))
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn load_document(client: &Client, base_url: &str, token: &str) -> DocumentResponse {
    client
        .get(format!("{base_url}/api/document"))
        .bearer_auth(token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn add_task(
    client: &Client,
    base_url: &str,
    token: &str,
    text: &str,
    category_id: &str,
) -> DocumentResponse {
    let response = client
        .post(format!("{base_url}/api/tasks"))
        .bearer_auth(token)
        .json(&serde_json::json!({ "text": text, "category_id": category_id }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_login_bootstraps_document() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let session = login(&client, &server.base_url, "Bootstrap User").await;
    assert_eq!(session.user.id, "bootstrap-user");

    let data = load_document(&client, &server.base_url, &session.token).await;
    assert!(data.document.tasks.is_empty());
    assert_eq!(data.document.categories.len(), 1);
    assert_eq!(data.document.categories[0].id, "default");
    assert_eq!(data.document.categories[0].name, "General");
    assert_eq!(data.document.gamification.streak, 1);
    assert!(data.document.gamification.last_visit_date.is_some());
    assert!(data.unlocked.is_empty());
}

#[tokio::test]
async fn http_rejects_missing_or_bogus_token() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/document", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = client
        .get(format!("{}/api/document", server.base_url))
        .bearer_auth("not-a-session")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn http_toggle_sets_and_clears_completed_at() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let session = login(&client, &server.base_url, "Toggle User").await;
    load_document(&client, &server.base_url, &session.token).await;
    let data = add_task(&client, &server.base_url, &session.token, "write report", "default").await;
    let task_id = data.document.tasks[0].id.clone();

    let done: DocumentResponse = client
        .post(format!("{}/api/tasks/{}/toggle", server.base_url, task_id))
        .bearer_auth(&session.token)
        .json(&serde_json::json!({ "completed": true }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let task = &done.document.tasks[0];
    assert!(task.completed);
    assert!(task.completed_at.is_some());
    // first completion ever for this user
    assert!(done.unlocked.contains(&"FIRST_STEP".to_string()));
    assert!(done.document.gamification.unlocked.contains(&"FIRST_STEP".to_string()));

    let undone: DocumentResponse = client
        .post(format!("{}/api/tasks/{}/toggle", server.base_url, task_id))
        .bearer_auth(&session.token)
        .json(&serde_json::json!({ "completed": false }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let task = &undone.document.tasks[0];
    assert!(!task.completed);
    assert!(task.completed_at.is_none());
    // the badge stays unlocked
    assert!(undone.document.gamification.unlocked.contains(&"FIRST_STEP".to_string()));
    assert!(undone.unlocked.is_empty());
}

#[tokio::test]
async fn http_deleting_category_cascades_to_tasks() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let session = login(&client, &server.base_url, "Cascade User").await;
    load_document(&client, &server.base_url, &session.token).await;

    let data: DocumentResponse = client
        .post(format!("{}/api/categories", server.base_url))
        .bearer_auth(&session.token)
        .json(&serde_json::json!({ "name": "Work", "color": "#ff0000" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let work = data
        .document
        .categories
        .iter()
        .find(|category| category.name == "Work")
        .expect("missing category")
        .id
        .clone();

    add_task(&client, &server.base_url, &session.token, "email client", &work).await;
    add_task(&client, &server.base_url, &session.token, "book room", &work).await;
    add_task(&client, &server.base_url, &session.token, "water plants", "default").await;

    let data: DocumentResponse = client
        .delete(format!("{}/api/categories/{}", server.base_url, work))
        .bearer_auth(&session.token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(data.document.categories.iter().all(|category| category.id != work));
    assert_eq!(data.document.tasks.len(), 1);
    assert_eq!(data.document.tasks[0].text, "water plants");
    assert_eq!(data.document.tasks[0].category_id, "default");
}

#[tokio::test]
async fn http_put_document_replaces_snapshot() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let session = login(&client, &server.base_url, "Sync User").await;
    load_document(&client, &server.base_url, &session.token).await;

    let today = chrono::Local::now().date_naive().to_string();
    let snapshot = serde_json::json!({
        "tasks": [{
            "id": "imported-1",
            "text": "imported task",
            "categoryId": "default",
            "completed": false,
            "createdAt": 1767225600000i64
        }],
        "categories": [
            { "id": "default", "name": "General", "color": "#3b82f6" }
        ],
        "gamification": { "unlocked": [], "lastVisitDate": today, "streak": 2 }
    });

    let response = client
        .put(format!("{}/api/document", server.base_url))
        .bearer_auth(&session.token)
        .json(&snapshot)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let data = load_document(&client, &server.base_url, &session.token).await;
    assert_eq!(data.document.tasks.len(), 1);
    assert_eq!(data.document.tasks[0].id, "imported-1");
    // last visit was already today, so the reload does not touch the streak
    assert_eq!(data.document.gamification.streak, 2);
}

#[tokio::test]
async fn http_add_task_requires_known_category() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let session = login(&client, &server.base_url, "Strict User").await;
    load_document(&client, &server.base_url, &session.token).await;

    let response = client
        .post(format!("{}/api/tasks", server.base_url))
        .bearer_auth(&session.token)
        .json(&serde_json::json!({ "text": "orphan", "category_id": "nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_assistant_failure_is_bad_gateway() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let session = login(&client, &server.base_url, "Offline User").await;
    load_document(&client, &server.base_url, &session.token).await;
    add_task(&client, &server.base_url, &session.token, "first", "default").await;
    add_task(&client, &server.base_url, &session.token, "second", "default").await;

    let response = client
        .post(format!("{}/api/assistant/sort", server.base_url))
        .bearer_auth(&session.token)
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let response = client
        .post(format!("{}/api/assistant/parse", server.base_url))
        .bearer_auth(&session.token)
        .json(&serde_json::json!({ "user_input": "call mom tomorrow" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn http_stats_has_week_and_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let session = login(&client, &server.base_url, "Stats User").await;
    load_document(&client, &server.base_url, &session.token).await;
    add_task(&client, &server.base_url, &session.token, "count me", "default").await;

    let stats: StatsDto = client
        .get(format!("{}/api/stats", server.base_url))
        .bearer_auth(&session.token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(stats.last_7_days.len(), 7);
    assert!(!stats.categories.is_empty());
    assert_eq!(stats.today["created"], 1);
    assert_eq!(stats.today["completed"], 0);
}
