//! Permission Definitions
//!
//! Simplified RBAC permission system.
//!
//! ## 设计原则
//! - 基础操作（查看会员列表和详情）无需权限，登录即可使用
//! - 管理操作：单一 `members:manage` 权限控制
//! - `all` 为系统级权限，仅 super-admin 持有

use shared::Role;

/// Permission guarding the mutating member routes
pub const MEMBERS_MANAGE: &str = "members:manage";

/// Default role permissions
pub const DEFAULT_MEMBER_PERMISSIONS: &[&str] = &[];

pub const DEFAULT_ADMIN_PERMISSIONS: &[&str] = &[MEMBERS_MANAGE];

pub const DEFAULT_SUPER_ADMIN_PERMISSIONS: &[&str] = &["all"];

/// Get permissions for a role
pub fn default_permissions(role: Role) -> Vec<String> {
    let permissions: &[&str] = match role {
        Role::Member => DEFAULT_MEMBER_PERMISSIONS,
        Role::Admin => DEFAULT_ADMIN_PERMISSIONS,
        Role::SuperAdmin => DEFAULT_SUPER_ADMIN_PERMISSIONS,
    };
    permissions.iter().map(|s| s.to_string()).collect()
}
