//! 认证中间件
//!
//! Axum middleware for the Basic-Auth gate and per-route permission checks.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppError;
use crate::auth::basic::{BasicCredentials, CurrentUser};
use crate::core::ServerState;
use crate::security_log;

/// 认证中间件 - 要求有效的 Basic 凭据
///
/// Extracts and verifies `Authorization: Basic <credentials>`. On success
/// the verified [`CurrentUser`] is injected into request extensions
/// (`req.extensions_mut().insert(user)`).
///
/// # 跳过认证的路径
///
/// - `OPTIONS *` (CORS 预检)
/// - `/health`
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 | 401 Unauthorized |
/// | 头格式错误 | 401 Unauthorized |
/// | 用户名或密码错误 | 401 Unauthorized |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // CORS preflight passes through
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Public routes skip authentication
    if path == "/health" {
        return Ok(next.run(req).await);
    }

    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let credentials = match header {
        Some(header) => match BasicCredentials::from_header(header) {
            Some(credentials) => credentials,
            None => {
                security_log!("WARN", "auth_malformed_header", uri = format!("{}", req.uri()));
                return Err(AppError::unauthorized());
            }
        },
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    match state.accounts.verify(&credentials) {
        Some(user) => {
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        None => {
            security_log!(
                "WARN",
                "auth_failed",
                username = credentials.username.clone(),
                uri = format!("{}", req.uri())
            );
            Err(AppError::unauthorized())
        }
    }
}

/// 权限检查中间件 - 要求特定权限
///
/// # 参数
///
/// - `permission`: 所需权限，如 `"members:manage"`
///
/// # 用法
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/", post(handler::create))
///     .layer(middleware::from_fn(require_permission("members:manage")));
/// ```
///
/// # 错误
///
/// 无权限返回 403 Forbidden
pub fn require_permission(
    permission: &'static str,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let user = req
                .extensions()
                .get::<CurrentUser>()
                .ok_or_else(AppError::unauthorized)?;

            if !user.has_permission(permission) {
                security_log!(
                    "WARN",
                    "permission_denied",
                    username = user.username.clone(),
                    role = user.role.to_string(),
                    required_permission = permission
                );
                return Err(AppError::forbidden(format!(
                    "Permission denied: {}",
                    permission
                )));
            }

            Ok(next.run(req).await)
        })
    }
}
