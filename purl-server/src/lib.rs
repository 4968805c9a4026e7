//! Purl Server - 编织俱乐部会员服务
//!
//! # 架构概述
//!
//! 本模块是会员服务的主入口，提供以下核心功能：
//!
//! - **认证** (`auth`): HTTP Basic + Argon2 认证体系
//! - **存储** (`store`): 内存会员存储
//! - **HTTP API** (`api`): RESTful 会员接口
//!
//! # 模块结构
//!
//! ```text
//! purl-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── auth/          # Basic 认证、权限
//! ├── api/           # HTTP 路由和处理器
//! ├── store/         # 内存存储
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use auth::{AccountStore, BasicCredentials, CurrentUser};
pub use core::{Config, Server, ServerState, build_app, build_router};
pub use store::MemberStore;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env` and initialize logging from the environment
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
    ____             __
   / __ \__  _______/ /
  / /_/ / / / / ___/ /
 / ____/ /_/ / /  / /
/_/    \__,_/_/  /_/
    "#
    );
}
