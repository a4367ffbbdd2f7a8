use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;

use taskserver::chat::ChatBridge;
use taskserver::config::AppConfig;
use taskserver::shared::state::AppState;
use taskserver::tasks::TaskStore;
use taskserver::web_server::run_server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let chat_bridge = ChatBridge::new(&config.ai_service)?;
    let app_state = Arc::new(AppState {
        config,
        task_store: TaskStore::new(),
        chat_bridge,
    });

    run_server(app_state).await?;
    Ok(())
}
