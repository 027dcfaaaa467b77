use std::path::PathBuf;
use crate::models::record::FileRecord;

#[derive(Clone, Debug)]
pub struct ScanInput {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub excluded_dir: String,
    pub no_progress: bool,
}

#[derive(Debug)]
pub struct ScanOutput {
    pub records: Vec<FileRecord>,
    pub total_size: u64,
    pub pruned_dirs: u64,
    pub skipped_entries: u64,
}
