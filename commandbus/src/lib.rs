//! 进程内命令总线（commandbus）
//!
//! CQRS 应用骨架中的命令侧：调用方提交命令，总线按路由键分发到唯一的处理器，
//! 并可在处理器前挂载一组守卫（校验、鉴权等）。
//! - 命令标识（`command_name`）：优先使用命令自报的名称，否则由类型名推导；
//! - 命令总线（`inmemory_command_bus`）：一次性注册、重复分发，重复注册与未注册命令均返回错误；
//! - 处理器链（`chain`）：守卫成功才执行主处理器，失败立即短路。
//!
//! 总线不涉及网络、持久化与重试，也不保证跨命令类型的顺序。
//!
//! ```rust
//! use commandbus::command::Command;
//! use commandbus::command_bus::CommandBus;
//! use commandbus::command_handler::handler_fn;
//! use commandbus::context::AppContext;
//! use commandbus::InMemoryCommandBus;
//! use std::sync::Arc;
//!
//! struct Ping {
//!     pongs: usize,
//! }
//!
//! impl Command for Ping {
//!     const NAME: Option<&'static str> = Some("Ping");
//! }
//!
//! # tokio_test_block_on(async {
//! let bus = InMemoryCommandBus::new();
//! bus.register::<Ping, _>(Arc::new(handler_fn(|_ctx, cmd: &mut Ping| {
//!     cmd.pongs += 1;
//!     Ok(())
//! })))
//! .unwrap();
//!
//! let mut ping = Ping { pongs: 0 };
//! bus.dispatch(&AppContext::default(), &mut ping).await.unwrap();
//! assert_eq!(ping.pongs, 1);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```
//!
pub mod chain;
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod command_name;
pub mod context;
pub mod error;
pub mod inmemory_command_bus;

pub use chain::chain_handler;
pub use command_handler::handler_fn;
pub use inmemory_command_bus::InMemoryCommandBus;

#[cfg(feature = "derive")]
pub use commandbus_macros::Command;

// 允许在本 crate 内部通过 ::commandbus 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::commandbus 路径。
extern crate self as commandbus;
