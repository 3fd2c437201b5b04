//! 处理器链（Handler Chain）
//!
//! 将“守卫”处理器与“主”处理器组合为单个处理器：
//! 先执行 `guard`，失败则立即返回该错误且不调用 `main`；成功后再执行 `main`。
//! 适合在不修改主处理器的前提下挂载校验、鉴权等横切逻辑。
//!
//! 链可以嵌套，外层守卫先于内层守卫执行：
//!
//! ```rust
//! use commandbus::chain::chain_handler;
//! use commandbus::command::Command;
//! use commandbus::command_handler::handler_fn;
//! use commandbus::error::AppError;
//!
//! struct Rename {
//!     name: String,
//! }
//! impl Command for Rename {}
//!
//! let main = handler_fn(|_ctx, _cmd: &mut Rename| Ok(()));
//! let not_empty = handler_fn(|_ctx, cmd: &mut Rename| {
//!     if cmd.name.is_empty() {
//!         return Err(AppError::Validation("name is empty".into()));
//!     }
//!     Ok(())
//! });
//! let authorized = handler_fn(|_ctx, _cmd: &mut Rename| Ok(()));
//!
//! // authorized -> not_empty -> main
//! let _pipeline = chain_handler(chain_handler(main, not_empty), authorized);
//! ```
//!
use crate::{
    command::Command, command_handler::CommandHandler, context::AppContext, error::AppError,
};
use async_trait::async_trait;

/// 由 [`chain_handler`] 构造的组合处理器
#[derive(Clone, Debug)]
pub struct Chain<M, G> {
    main: M,
    guard: G,
}

/// 组合 `main` 与 `guard`，`guard` 成功后才调用 `main`
pub fn chain_handler<M, G>(main: M, guard: G) -> Chain<M, G> {
    Chain { main, guard }
}

#[async_trait]
impl<C, M, G> CommandHandler<C> for Chain<M, G>
where
    C: Command,
    M: CommandHandler<C>,
    G: CommandHandler<C>,
{
    async fn handle(&self, ctx: &AppContext, cmd: &mut C) -> Result<(), AppError> {
        self.guard.handle(ctx, cmd).await?;
        self.main.handle(ctx, cmd).await
    }
}
