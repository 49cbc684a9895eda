use crate::config::AppSettings;
use crate::utils::error::{AppError, Result};
use std::path::Path;

impl AppSettings {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::config(format!(
                "cannot read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置；未指定的欄位使用預設值
    ///
    /// Values are not validated here: command-line overrides still apply on
    /// top, so validation runs once on the final settings.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
