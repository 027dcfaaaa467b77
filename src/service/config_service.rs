use std::io;
use std::path::PathBuf;
use crate::config::config::{
    Cli, DEFAULT_EXTENSIONS, DEFAULT_REPORT_PATH, DEFAULT_SCAN_ROOT, EXCLUDED_DIR, REPORT_LIMIT,
};
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責從所選的配置適配器取得配置
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

fn fixed_config(no_progress: bool) -> AppConfig {
    AppConfig {
        scan_root: PathBuf::from(DEFAULT_SCAN_ROOT),
        report_path: PathBuf::from(DEFAULT_REPORT_PATH),
        extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        excluded_dir: EXCLUDED_DIR.to_string(),
        limit: REPORT_LIMIT,
        no_progress,
    }
}

// 預設配置適配器
#[derive(Default)]
pub struct DefaultConfigAdapter;

impl DefaultConfigAdapter {
    pub fn new() -> Self {
        DefaultConfigAdapter
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(fixed_config(false))
    }
}

// CLI 配置適配器，路徑與副檔名仍為固定值，只套用診斷選項
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(fixed_config(self.cli.no_progress))
    }
}
