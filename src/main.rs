use telegram_ai_bot::bootstrap::{self, BotError};
use telegram_ai_bot::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), BotError> {
    let config = AppConfig::load()?;
    bootstrap::init_tracing(&config.log);
    config.validate()?;

    bootstrap::run(config).await
}
