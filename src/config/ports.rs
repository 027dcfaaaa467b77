use std::io;
use std::path::PathBuf;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scan_root: PathBuf,
    pub report_path: PathBuf,
    pub extensions: Vec<String>,
    pub excluded_dir: String,
    pub limit: usize,
    pub no_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}
