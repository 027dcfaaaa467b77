use clap::Parser;

/// 掃描根目錄，每個部署固定
pub const DEFAULT_SCAN_ROOT: &str = "/workspace/project";
/// 報告輸出路徑，每個部署固定
pub const DEFAULT_REPORT_PATH: &str = "/workspace/largest_ts_files.txt";
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".ts", ".tsx"];
pub const EXCLUDED_DIR: &str = "node_modules";
pub const REPORT_LIMIT: usize = 50;
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const COMPLETION_MESSAGE: &str = "報告產生完成！";

#[derive(Parser, Clone, Debug)]
#[command(
    name = "ts_size_report",
    about = "列出目錄樹中最大的 TypeScript 檔案",
    long_about = "遞迴掃描固定的根目錄，找出 .ts 與 .tsx 檔案（略過 node_modules），依大小遞減排序後將前 50 筆寫入報告檔。\n不帶任何參數執行即使用預設配置；以下選項只影響診斷輸出。"
)]
pub struct Cli {
    #[arg(long, default_value = DEFAULT_LOG_LEVEL, value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}
