//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`members`] - 会员管理接口

pub mod health;
pub mod members;
