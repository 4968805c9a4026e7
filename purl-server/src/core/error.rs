use thiserror::Error;

/// Server lifecycle errors (bind, serve, startup)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
