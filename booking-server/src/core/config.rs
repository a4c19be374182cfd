//! 服务器配置

/// 服务器配置 - 预订后端的所有配置项
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | SURREALDB_URL | (未设置) | SurrealDB 地址 (如 ws://127.0.0.1:8000)；未设置或连不上时进入内存降级模式 |
/// | SURREALDB_NS | booking | SurrealDB namespace |
/// | SURREALDB_DB | booking | SurrealDB database |
/// | SURREALDB_USER | (未设置) | root 用户名 (可选) |
/// | SURREALDB_PASS | (未设置) | root 密码 (可选) |
/// | DB_CONNECT_TIMEOUT_MS | 3000 | 数据库连接超时 (毫秒) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，设置后输出到按天滚动的文件 |
///
/// # 示例
///
/// ```bash
/// SURREALDB_URL=ws://127.0.0.1:8000 HTTP_PORT=8080 ./booking-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// SurrealDB 地址；None 表示直接使用内存降级模式
    pub surrealdb_url: Option<String>,
    /// SurrealDB namespace
    pub surrealdb_ns: String,
    /// SurrealDB database
    pub surrealdb_db: String,
    /// root 登录用户名 (可选)
    pub surrealdb_user: Option<String>,
    /// root 登录密码 (可选)
    pub surrealdb_pass: Option<String>,
    /// 数据库连接超时 (毫秒)
    pub db_connect_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            surrealdb_url: std::env::var("SURREALDB_URL")
                .ok()
                .filter(|url| !url.is_empty()),
            surrealdb_ns: std::env::var("SURREALDB_NS").unwrap_or_else(|_| "booking".to_string()),
            surrealdb_db: std::env::var("SURREALDB_DB").unwrap_or_else(|_| "booking".to_string()),
            surrealdb_user: std::env::var("SURREALDB_USER").ok(),
            surrealdb_pass: std::env::var("SURREALDB_PASS").ok(),
            db_connect_timeout_ms: std::env::var("DB_CONNECT_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// 覆盖部分配置 - 测试场景用
    pub fn with_overrides(http_port: u16, surrealdb_url: Option<String>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.surrealdb_url = surrealdb_url;
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
