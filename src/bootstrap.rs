//! Process startup: logging, wiring and the dispatcher loop.

use std::sync::Arc;

use teloxide::dispatching::Dispatcher;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::requests::Requester;
use teloxide::utils::command::BotCommands;
use teloxide::{dptree, Bot, RequestError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::adapters::ai::ChatCompletionsProvider;
use crate::adapters::telegram::{schema, BotServices, Command, TelegramGateway};
use crate::application::{AskAiHandler, HelpHandler, StartHandler};
use crate::config::{AppConfig, ConfigError, LogConfig, ValidationError};
use crate::ports::CompletionProvider;

/// Errors that stop the bot before it starts serving.
#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Telegram request failed: {0}")]
    Telegram(#[from] RequestError),
}

impl From<ValidationError> for BotError {
    fn from(err: ValidationError) -> Self {
        BotError::Config(ConfigError::ValidationFailed(err))
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured filter.
pub fn init_tracing(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if config.is_json() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Wires adapters and handlers, registers the command menu and runs the
/// dispatcher until Ctrl-C.
pub async fn run(config: AppConfig) -> Result<(), BotError> {
    let provider = Arc::new(ChatCompletionsProvider::new(config.ai.provider_config()?)?);
    let bot = Bot::new(config.telegram.bot_token()?);
    let gateway = Arc::new(TelegramGateway::new(bot.clone()));

    let services = Arc::new(BotServices {
        start: StartHandler::new(gateway.clone()),
        help: HelpHandler::new(gateway.clone(), config.telegram.help_links()),
        ask_ai: AskAiHandler::with_config(provider.clone(), gateway, config.ask_ai()),
    });

    bot.set_my_commands(Command::bot_commands()).await?;

    let info = provider.provider_info();
    tracing::info!(provider = %info.name, model = %info.model, "Starting dispatcher with long polling");

    Dispatcher::builder(bot, schema::<ChatCompletionsProvider, TelegramGateway>())
        .dependencies(dptree::deps![services])
        .default_handler(|upd| async move {
            tracing::debug!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error in command handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::warn!("Dispatcher stopped");
    Ok(())
}
