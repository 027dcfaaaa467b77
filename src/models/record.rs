use std::path::PathBuf;

/// 掃描期間收集的檔案紀錄，建立後不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size: u64,
}

impl FileRecord {
    pub fn new(path: PathBuf, size: u64) -> Self {
        FileRecord { path, size }
    }
}
