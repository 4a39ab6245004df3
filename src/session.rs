use serde_derive::Deserialize;
use serde_derive::Serialize;

use chrono::{DateTime, Duration, Utc};
use log::{error, warn};
use std::fs::File;
use std::io::prelude::*;

use crate::param::{DEFAULT_COOKIE_LIFETIME, DEFAULT_COOKIE_PATH};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CookieConfig {
    #[serde(default = "default_lifetime")]
    lifetime: u32,
    #[serde(default = "default_path")]
    path: String,
    #[serde(default)]
    domain: String,
    #[serde(default)]
    secure: bool,
}

fn default_lifetime() -> u32 {
    DEFAULT_COOKIE_LIFETIME
}

fn default_path() -> String {
    DEFAULT_COOKIE_PATH.to_string()
}

impl CookieConfig {
    // 主机上下文在构造时显式传入，不读取任何环境状态
    pub fn new(domain: &str) -> Self {
        Self {
            lifetime: default_lifetime(),
            path: default_path(),
            domain: domain.to_string(),
            secure: false,
        }
    }

    pub fn from_toml(filename: &str) -> Self {
        let mut file = match File::open(filename) {
            Ok(f) => f,
            Err(e) => panic!("no such file {} exception:{}", filename, e),
        };
        let mut str_val = String::new();
        match file.read_to_string(&mut str_val) {
            Ok(s) => s,
            Err(e) => panic!("Error Reading file: {}", e),
        };

        let mut raw_config: CookieConfig = match toml::from_str(&str_val) {
            Ok(t) => t,
            Err(_) => {
                error!("无法成功从配置文件构建Cookie配置对象，使用默认配置");
                CookieConfig::new("")
            }
        };
        if raw_config.path.is_empty() {
            warn!("cookie的path被设置为空字符串，该值将被改为\"/\"。");
            raw_config.path = default_path();
        }
        raw_config
    }
}

// --- 具名设置器实现 ---

impl CookieConfig {
    pub fn set_lifetime(&mut self, seconds: u32) {
        self.lifetime = seconds;
    }

    pub fn set_path(&mut self, path: &str) {
        self.path = path.to_string();
    }

    pub fn set_domain(&mut self, domain: &str) {
        self.domain = domain.to_string();
    }

    pub fn set_secure(&mut self, secure: bool) {
        self.secure = secure;
    }
}

impl CookieConfig {
    pub fn lifetime(&self) -> u32 {
        self.lifetime
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn secure(&self) -> bool {
        self.secure
    }

    // lifetime为0表示会话Cookie，不产生过期时间
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if self.lifetime == 0 {
            return None;
        }
        Some(Utc::now() + Duration::seconds(self.lifetime as i64))
    }

    pub fn expires_header(&self) -> Option<String> {
        self.expires_at()
            .map(|time| time.format("%a, %d-%b-%Y %H:%M:%S GMT").to_string())
    }
}
