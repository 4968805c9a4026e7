use crate::auth::AccountStore;
use crate::core::Config;
use crate::store::MemberStore;

/// 服务器状态 - 持有所有共享组件的引用
///
/// ServerState 是服务的核心数据结构。内部全部为 Arc 共享，
/// Clone 成本极低，每个请求处理器都持有一份。
///
/// # 组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | accounts | AccountStore | 固定账户表 (argon2 哈希) |
/// | members | MemberStore | 内存会员存储 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// Basic 认证账户
    pub accounts: AccountStore,
    /// 会员存储
    pub members: MemberStore,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 账户表 (哈希三个固定账户的密码)
    /// 2. 空的会员存储
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        let accounts = AccountStore::seeded()?;
        tracing::info!("Provisioned {} club accounts", accounts.len());

        Ok(Self {
            config: config.clone(),
            accounts,
            members: MemberStore::new(),
        })
    }
}
