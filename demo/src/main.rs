use async_trait::async_trait;
use commandbus::command_bus::CommandBus;
use commandbus::command_handler::{CommandHandler, handler_fn};
use commandbus::context::{AppContext, BusinessContext};
use commandbus::error::AppError;
use commandbus::{Command, InMemoryCommandBus, chain_handler};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum MessageError {
    #[error("message too short: len={len}")]
    TooShort { len: usize },
    #[error("message is all caps")]
    Shouting,
}

impl From<MessageError> for AppError {
    fn from(err: MessageError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// 自报名称的命令，路由时无需推导类型名
#[derive(Debug, Command)]
#[command(name = "DoSomethingCommand")]
struct DoSomething {
    message: String,
}

/// 未自报名称的命令，路由键由类型路径推导
#[derive(Debug, Command)]
struct Shutdown {
    reason: String,
}

#[derive(Debug, thiserror::Error)]
#[error("refusing to shut down: {0}")]
struct ShutdownRefused(String);

struct DoSomethingHandler;

#[async_trait]
impl CommandHandler<DoSomething> for DoSomethingHandler {
    async fn handle(&self, ctx: &AppContext, cmd: &mut DoSomething) -> Result<(), AppError> {
        info!(
            correlation_id = ctx.biz.correlation_id(),
            message = %cmd.message,
            "doSomething handler says hello"
        );
        Ok(())
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // 中间件式的守卫处理器，例如校验；返回错误时主处理器不会被调用
    let min_length = handler_fn(|_ctx, cmd: &mut DoSomething| {
        if cmd.message.len() < 2 {
            return Err(MessageError::TooShort {
                len: cmd.message.len(),
            }
            .into());
        }
        Ok(())
    });
    let no_shouting = handler_fn(|_ctx, cmd: &mut DoSomething| {
        if cmd.message.chars().any(char::is_alphabetic) && cmd.message == cmd.message.to_uppercase()
        {
            return Err(MessageError::Shouting.into());
        }
        Ok(())
    });

    // no_shouting -> min_length -> DoSomethingHandler
    let pipeline = chain_handler(chain_handler(DoSomethingHandler, min_length), no_shouting);

    let bus = InMemoryCommandBus::new();
    bus.register::<DoSomething, _>(Arc::new(pipeline))?;
    bus.register::<Shutdown, _>(Arc::new(handler_fn(|_ctx, cmd: &mut Shutdown| {
        Err(AppError::Other(ShutdownRefused(cmd.reason.clone()).into()))
    })))?;
    info!(commands = ?bus.registered_commands(), "command bus ready");

    let ctx = AppContext {
        biz: BusinessContext::builder()
            .maybe_correlation_id(Some("cor-demo".into()))
            .maybe_actor_type(Some("system".into()))
            .build(),
        ..Default::default()
    };

    for text in ["hello you!", "x", "STOP"] {
        let mut cmd = DoSomething {
            message: text.into(),
        };
        if let Err(err) = bus.dispatch(&ctx, &mut cmd).await {
            error!(%err, text, "scream out loud, something failed");
        }
    }

    let mut shutdown = Shutdown {
        reason: "demo finished".into(),
    };
    if let Err(err) = bus.dispatch(&ctx, &mut shutdown).await {
        error!(%err, "shutdown rejected");
    }

    Ok(())
}
