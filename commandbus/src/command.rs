use std::sync::Arc;

/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，通常会修改领域状态。
/// - 不返回业务数据，仅表达执行结果（成功/失败）。
/// - 建议保持语义化的“动宾结构”命名，如 `CreateUser`、`CloseOrder`。
///
/// 关联常量：
/// - `NAME`：命令的稳定名称，用于路由与日志。为 `None` 时由
///   [`resolve_command_name`](crate::command_name::resolve_command_name) 根据类型名推导。
///
/// ```rust
/// use commandbus::command::Command;
///
/// struct CloseOrder {
///     order_id: u64,
/// }
///
/// impl Command for CloseOrder {
///     const NAME: Option<&'static str> = Some("CloseOrder");
/// }
/// ```
pub trait Command: Send + Sync + 'static {
    /// 命令的自报名称（建议常量字符串，不随重构变化）
    const NAME: Option<&'static str> = None;
}

// 指针形态的命令沿用被指向类型的自报名称；
// 未自报名称时回退键会以 `*` 区分指针与值。
impl<C: Command> Command for Box<C> {
    const NAME: Option<&'static str> = C::NAME;
}

impl<C: Command> Command for Arc<C> {
    const NAME: Option<&'static str> = C::NAME;
}
