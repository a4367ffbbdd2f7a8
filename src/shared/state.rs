use crate::chat::ChatBridge;
use crate::config::AppConfig;
use crate::tasks::TaskStore;

/// Shared application state, built once in `main` and handed to every
/// handler as `State<Arc<AppState>>`. The task collection lives here rather
/// than in module-level statics, so its lifecycle is scoped to the server.
pub struct AppState {
    pub config: AppConfig,
    pub task_store: TaskStore,
    pub chat_bridge: ChatBridge,
}
