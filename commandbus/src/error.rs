//! 应用层统一错误定义
//!
//! 总线自身只产生三类错误：重复注册、未注册命令与类型不匹配；
//! 其余变体由处理器返回，总线与链式组合器原样透传，不做包装或翻译。
//!
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AppError {
    // --- 总线 ---
    #[error("handler already registered: command={command}")]
    DuplicateHandler { command: String },

    #[error("unhandled command: {0}")]
    UnhandledCommand(String),

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    // --- 处理器 ---
    #[error("validation: {0}")]
    Validation(String),

    #[error("authorization: {0}")]
    Authorization(String),

    #[error("infra: {0}")]
    Infra(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// 统一 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
