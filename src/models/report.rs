use std::path::PathBuf;
use crate::config::ports::AppConfig;
use crate::models::record::FileRecord;

#[derive(Clone, Debug)]
pub struct ReportInput {
    pub scan_root: PathBuf,
    pub report_path: PathBuf,
    pub extensions: Vec<String>,
    pub excluded_dir: String,
    pub limit: usize,
    pub no_progress: bool,
}

impl From<AppConfig> for ReportInput {
    fn from(config: AppConfig) -> Self {
        ReportInput {
            scan_root: config.scan_root,
            report_path: config.report_path,
            extensions: config.extensions,
            excluded_dir: config.excluded_dir,
            limit: config.limit,
            no_progress: config.no_progress,
        }
    }
}

#[derive(Debug)]
pub struct ReportOutput {
    pub report_path: PathBuf,
    pub candidates: usize,
    pub lines_written: usize,
    pub generated_at: String,
}

#[derive(Clone, Debug)]
pub struct ReportWriteInput {
    pub records: Vec<FileRecord>,
    pub report_path: PathBuf,
}

#[derive(Debug)]
pub struct ReportWriteOutput {
    pub report_path: PathBuf,
    pub lines_written: usize,
}
