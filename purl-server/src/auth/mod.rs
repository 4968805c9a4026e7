//! 认证授权模块
//!
//! 提供 HTTP Basic 认证、权限管理和中间件：
//! - [`BasicCredentials`] - Authorization 头解析
//! - [`CurrentUser`] - 当前用户上下文
//! - [`AccountStore`] - 固定账户表
//! - [`require_auth`] - 认证中间件
//! - [`require_permission`] - 权限检查中间件

pub mod accounts;
pub mod basic;
pub mod middleware;
pub mod permissions;

pub use accounts::{Account, AccountStore};
pub use basic::{BasicCredentials, CurrentUser};
pub use middleware::{require_auth, require_permission};
pub use permissions::{MEMBERS_MANAGE, default_permissions};
