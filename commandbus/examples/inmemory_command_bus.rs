use async_trait::async_trait;
use commandbus::Command;
use commandbus::InMemoryCommandBus;
use commandbus::command_bus::CommandBus;
use commandbus::command_handler::CommandHandler;
use commandbus::context::{AppContext, BusinessContext};
use commandbus::error::AppError;
use std::sync::Arc;

#[derive(Debug, Command)]
#[command(name = "CreateUser")]
struct CreateUser {
    name: String,
}

struct CreateUserHandler;

#[async_trait]
impl CommandHandler<CreateUser> for CreateUserHandler {
    async fn handle(&self, _ctx: &AppContext, cmd: &mut CreateUser) -> Result<(), AppError> {
        println!("CreateUser: name={}", cmd.name);
        Ok(())
    }
}

// 未自报名称，路由键由类型路径推导
#[derive(Debug, Command)]
struct DeleteUser {
    id: u32,
}

struct DeleteUserHandler;

#[async_trait]
impl CommandHandler<DeleteUser> for DeleteUserHandler {
    async fn handle(&self, _ctx: &AppContext, cmd: &mut DeleteUser) -> Result<(), AppError> {
        println!("DeleteUser: id={}", cmd.id);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bus = InMemoryCommandBus::new();
    bus.register::<CreateUser, _>(Arc::new(CreateUserHandler))?;
    bus.register::<DeleteUser, _>(Arc::new(DeleteUserHandler))?;

    // 同一命令重复注册 -> DuplicateHandler，原处理器保持不变
    if let Err(AppError::DuplicateHandler { command }) =
        bus.register::<CreateUser, _>(Arc::new(CreateUserHandler))
    {
        eprintln!("DuplicateHandler as expected for command: {}", command);
    }

    let ctx = AppContext {
        biz: BusinessContext::builder()
            .maybe_correlation_id(Some("cor-1".into()))
            .maybe_causation_id(Some("cau-1".into()))
            .maybe_actor_type(Some("user".into()))
            .maybe_actor_id(Some("u-1".into()))
            .build(),
        idempotency_key: Some("idem-1".into()),
        ..Default::default()
    };
    bus.dispatch(
        &ctx,
        &mut CreateUser {
            name: "Alice".into(),
        },
    )
    .await?;
    bus.dispatch(&ctx, &mut DeleteUser { id: 42 }).await?;

    // 未注册的命令 -> 返回 UnhandledCommand 错误
    #[allow(dead_code)]
    #[derive(Debug, Command)]
    #[command(name = "UpdateUser")]
    struct UpdateUser {
        id: u32,
        name: String,
    }

    if let Err(AppError::UnhandledCommand(name)) = bus
        .dispatch(
            &ctx,
            &mut UpdateUser {
                id: 7,
                name: "Eve".into(),
            },
        )
        .await
    {
        eprintln!("UnhandledCommand as expected for command: {}", name);
    }

    println!("registered: {:?}", bus.registered_commands());
    Ok(())
}
