use crate::assistant::AssistantClient;
use crate::models::StoreData;
use std::collections::HashMap;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub store: Arc<Mutex<StoreData>>,
    /// Bearer token -> user id. In-memory only; sessions do not survive a
    /// restart.
    pub sessions: Arc<Mutex<HashMap<String, String>>>,
    pub assistant: AssistantClient,
}

impl AppState {
    pub fn new(data_path: PathBuf, store: StoreData, assistant: AssistantClient) -> Self {
        Self {
            data_path,
            store: Arc::new(Mutex::new(store)),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            assistant,
        }
    }
}
