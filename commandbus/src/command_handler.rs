use crate::{command::Command, context::AppContext, error::AppError};
use async_trait::async_trait;
use std::sync::Arc;

/// 命令处理器（Command Handler）
///
/// - 以可变引用接收命令：总线本身从不修改命令，处理器可按需修改；
/// - 返回 `Err` 时总线与链式组合器原样向上传递。
#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    async fn handle(&self, ctx: &AppContext, cmd: &mut C) -> Result<(), AppError>;
}

#[async_trait]
impl<C, H> CommandHandler<C> for Arc<H>
where
    C: Command,
    H: CommandHandler<C> + ?Sized,
{
    async fn handle(&self, ctx: &AppContext, cmd: &mut C) -> Result<(), AppError> {
        self.as_ref().handle(ctx, cmd).await
    }
}

/// 以闭包实现的处理器，见 [`handler_fn`]
#[derive(Clone)]
pub struct HandlerFn<F> {
    f: F,
}

/// 将普通闭包适配为 [`CommandHandler`]
///
/// 闭包以 `(ctx, cmd)` 原样调用，`Ok(())` 即成功，`Err` 原样返回。
///
/// ```rust
/// use commandbus::command::Command;
/// use commandbus::command_handler::handler_fn;
///
/// struct Ping;
/// impl Command for Ping {}
///
/// let _handler = handler_fn(|_ctx, _cmd: &mut Ping| Ok(()));
/// ```
pub fn handler_fn<C, F>(f: F) -> HandlerFn<F>
where
    C: Command,
    F: Fn(&AppContext, &mut C) -> Result<(), AppError> + Send + Sync,
{
    HandlerFn { f }
}

#[async_trait]
impl<C, F> CommandHandler<C> for HandlerFn<F>
where
    C: Command,
    F: Fn(&AppContext, &mut C) -> Result<(), AppError> + Send + Sync,
{
    async fn handle(&self, ctx: &AppContext, cmd: &mut C) -> Result<(), AppError> {
        (self.f)(ctx, cmd)
    }
}
