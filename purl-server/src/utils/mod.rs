//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppJson`] - JSON 提取器 (解析失败返回 400)
//! - 日志、校验等工具

pub mod error;
pub mod extract;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult};
pub use extract::AppJson;
