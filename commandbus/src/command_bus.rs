use crate::{command::Command, context::AppContext, error::AppError};
use async_trait::async_trait;

/// 命令总线（Command Bus）
///
/// - 负责根据命令的路由键分发到唯一的处理器；
/// - 分发即在当前任务内直接等待处理器完成，不派生任务、不加超时、不重试；
/// - 该 trait 带有泛型方法，通常以具体实现类型注入使用。
#[async_trait]
pub trait CommandBus: Send + Sync {
    /// 分发命令到对应处理器
    ///
    /// - `ctx`：应用上下文（链路追踪、幂等键、取消令牌），原样透传给处理器
    /// - `cmd`：具体命令实例，处理器可修改
    async fn dispatch<C>(&self, ctx: &AppContext, cmd: &mut C) -> Result<(), AppError>
    where
        C: Command;
}
