use color_eyre::eyre::{eyre, Context};
use color_eyre::{Help, Result};
use std::sync::Arc;

/// 本地前端开发服务器（vite）的默认地址
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// 默认监听地址
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// 项目数据的存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// PostgreSQL，线上环境使用
    Postgres,
    /// 进程内存储，重启后数据丢失，适合本地调试
    Memory,
}

impl std::str::FromStr for StoreKind {
    type Err = color_eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            other => Err(eyre!("unknown project store `{other}`")),
        }
    }
}

pub struct DatabaseConfig {
    /// postgresql数据库链接字符串
    ///
    /// 仅当 [`StoreKind::Postgres`] 时必填
    pub postgresql_conn_str: Option<String>,

    /// 连接池最大连接数，可通过环境变量 `DB_MAX_CONNECTIONS` 来调整
    pub max_connections: u32,

    /// 连接池最小连接数，可通过环境变量 `DB_MIN_CONNECTIONS` 来调整
    pub min_connections: u32,
}

/// 程序配置
pub struct AppConfig {
    /// 项目数据存储后端
    pub store: StoreKind,

    /// 数据库配置
    pub database: DatabaseConfig,

    /// HTTP 服务监听地址
    pub bind_addr: String,

    /// 允许跨域访问 `/api/**` 的来源列表
    pub cors_allowed_origins: Vec<String>,

    /// 存储为空时是否写入示例项目
    pub seed_demo_projects: bool,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，没有.env文件也不算错误
        if let Err(err) = dotenvy::dotenv() {
            tracing::debug!("skip .env file: {err}");
        }

        Self::from_lookup(|key| std::env::var(key).ok()).map(Arc::new)
    }

    /// 通过 `lookup` 读取配置项，方便测试时不依赖进程环境变量
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("PROJECT_STORE") {
            Some(value) => value
                .parse::<StoreKind>()
                .suggestion("PROJECT_STORE 只能是 postgres 或 memory")?,
            None => StoreKind::Postgres,
        };

        // 读取数据库地址信息（仅支持postgresql）
        let postgresql_conn_str = lookup("DATABASE_URL");
        if store == StoreKind::Postgres && postgresql_conn_str.is_none() {
            return Err::<AppConfig, _>(eyre!("Can not load DATABASE_URL in environment"))
                .suggestion("设置 DATABASE_URL 环境变量，或者设置 PROJECT_STORE=memory");
        }

        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(value) => parse_origins(&value).context("Invalid CORS_ALLOWED_ORIGINS")?,
            None => vec![DEFAULT_CORS_ORIGIN.to_string()],
        };

        Ok(AppConfig {
            store,
            database: DatabaseConfig {
                postgresql_conn_str,
                max_connections: lookup("DB_MAX_CONNECTIONS").map_or(10, |s| s.parse().unwrap_or(10)),
                min_connections: lookup("DB_MIN_CONNECTIONS").map_or(1, |s| s.parse().unwrap_or(1)),
            },
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            cors_allowed_origins,
            seed_demo_projects: lookup("SEED_DEMO_PROJECTS").map_or(true, |s| parse_flag(&s)),
        })
    }
}

/// 解析逗号分隔的来源列表
///
/// 浏览器发送的 `Origin` 头不带结尾的 `/`，这里统一去掉，避免配置成 `https://foo.com/` 后匹配失败。
fn parse_origins(value: &str) -> Result<Vec<String>> {
    let origins: Vec<String> = value
        .split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        return Err(eyre!("at least one origin is required"));
    }

    if let Some(bad) = origins
        .iter()
        .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
    {
        return Err(eyre!("origin `{bad}` must start with http:// or https://"));
    }

    Ok(origins)
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_with_database_url() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/portfolio")]).unwrap();

        assert_eq!(config.store, StoreKind::Postgres);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.cors_allowed_origins, vec![DEFAULT_CORS_ORIGIN.to_string()]);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.min_connections, 1);
        assert!(config.seed_demo_projects);
    }

    #[test]
    fn postgres_store_requires_database_url() {
        assert!(config_from(&[]).is_err());
    }

    #[test]
    fn memory_store_does_not_need_database_url() {
        let config = config_from(&[("PROJECT_STORE", "Memory")]).unwrap();
        assert_eq!(config.store, StoreKind::Memory);
        assert!(config.database.postgresql_conn_str.is_none());
    }

    #[test]
    fn unknown_store_is_rejected() {
        assert!(config_from(&[("PROJECT_STORE", "mysql")]).is_err());
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = config_from(&[
            ("PROJECT_STORE", "memory"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:5173, https://portfolio.onrender.com/ ,"),
        ])
        .unwrap();

        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:5173".to_string(), "https://portfolio.onrender.com".to_string()]
        );
    }

    #[test]
    fn invalid_cors_origin_is_rejected() {
        assert!(config_from(&[("PROJECT_STORE", "memory"), ("CORS_ALLOWED_ORIGINS", "portfolio.com")]).is_err());
        assert!(config_from(&[("PROJECT_STORE", "memory"), ("CORS_ALLOWED_ORIGINS", " , ")]).is_err());
    }

    #[test]
    fn bad_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("PROJECT_STORE", "memory"),
            ("DB_MAX_CONNECTIONS", "lots"),
            ("DB_MIN_CONNECTIONS", "3"),
            ("SEED_DEMO_PROJECTS", "off"),
        ])
        .unwrap();

        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.min_connections, 3);
        assert!(!config.seed_demo_projects);
    }
}
