use crate::{
    command::Command, command_bus::CommandBus, command_handler::CommandHandler,
    command_name::resolve_command_name, context::AppContext, error::AppError,
};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::any::{Any, type_name};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, trace};

/// 类型擦除后的处理器，按路由键存放于总线中
#[async_trait]
trait ErasedHandler: Send + Sync {
    /// 注册时的命令类型名（用于类型不匹配时的诊断）
    fn command_type(&self) -> &'static str;

    /// `found` 为分发端命令的具体类型名
    async fn call(
        &self,
        ctx: &AppContext,
        cmd: &mut (dyn Any + Send),
        found: &'static str,
    ) -> Result<(), AppError>;
}

struct Erased<C, H: ?Sized> {
    handler: Arc<H>,
    _command: PhantomData<fn(C)>,
}

#[async_trait]
impl<C, H> ErasedHandler for Erased<C, H>
where
    C: Command,
    H: CommandHandler<C> + ?Sized + 'static,
{
    fn command_type(&self) -> &'static str {
        type_name::<C>()
    }

    async fn call(
        &self,
        ctx: &AppContext,
        cmd: &mut (dyn Any + Send),
        found: &'static str,
    ) -> Result<(), AppError> {
        // 键由 C 的路由键生成；仅当不同类型自报了相同名称时才会失败
        match cmd.downcast_mut::<C>() {
            Some(cmd) => self.handler.handle(ctx, cmd).await,
            None => Err(AppError::TypeMismatch {
                expected: type_name::<C>(),
                found,
            }),
        }
    }
}

/// 基于内存的 CommandBus 实现
/// - 通过路由键（见 [`resolve_command_name`]）注册不同 Command 对应的 Handler
/// - 每个路由键至多一个 Handler，重复注册返回 `DuplicateHandler` 且不覆盖
/// - 运行时以类型擦除（Any）方式进行调度
///
/// 内部使用 `DashMap`，注册与分发可以并发进行；
/// 分发前会先克隆出处理器，等待处理器期间不持有分片锁。
pub struct InMemoryCommandBus {
    handlers: DashMap<String, Arc<dyn ErasedHandler>>,
}

impl Default for InMemoryCommandBus {
    fn default() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }
}

impl InMemoryCommandBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册命令处理器
    ///
    /// 命令类型 `C` 仅用于推导路由键，不会被处理。
    pub fn register<C, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        C: Command,
        H: CommandHandler<C> + ?Sized + 'static,
    {
        let key = resolve_command_name::<C>().into_owned();

        match self.handlers.entry(key) {
            Entry::Occupied(entry) => Err(AppError::DuplicateHandler {
                command: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                debug!(
                    command = %entry.key(),
                    command_type = type_name::<C>(),
                    "command handler registered"
                );
                entry.insert(Arc::new(Erased::<C, H> {
                    handler,
                    _command: PhantomData,
                }));
                Ok(())
            }
        }
    }

    /// 命令 `C` 是否已有处理器
    pub fn is_registered<C: Command>(&self) -> bool {
        self.handlers.contains_key(&*resolve_command_name::<C>())
    }

    /// 获取已注册的命令路由键列表（只读视图）
    pub fn registered_commands(&self) -> Vec<String> {
        self.handlers.iter().map(|e| e.key().clone()).collect()
    }
}

#[async_trait]
impl CommandBus for InMemoryCommandBus {
    async fn dispatch<C: Command>(&self, ctx: &AppContext, cmd: &mut C) -> Result<(), AppError> {
        let key = resolve_command_name::<C>();
        let Some(f) = self.handlers.get(&*key).map(|h| Arc::clone(h.value())) else {
            return Err(AppError::UnhandledCommand(key.into_owned()));
        };

        trace!(command = %key, handler_type = f.command_type(), "dispatching command");
        f.call(ctx, cmd, type_name::<C>()).await
    }
}

/// 总线本身也是处理器，可注册进另一条总线或作为链的主处理器
#[async_trait]
impl<C: Command> CommandHandler<C> for InMemoryCommandBus {
    async fn handle(&self, ctx: &AppContext, cmd: &mut C) -> Result<(), AppError> {
        self.dispatch(ctx, cmd).await
    }
}
