use std::fs;
use std::io;
use std::path::Path;
use log::{debug, info};
use crate::models::record::FileRecord;
use crate::models::scan::{ScanInput, ScanOutput};
use crate::service::traits::i_service::ScanServiceTrait;
use crate::service::walker::{absolute_root, display_relative, walk_files, WalkStats};
use crate::utils::utils::ProgressManager;

/// 檔名是否以任一副檔名結尾（區分大小寫，不做正規化）
pub fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    match path.file_name() {
        Some(name) => {
            let name = name.to_string_lossy();
            extensions.iter().any(|ext| name.ends_with(ext.as_str()))
        }
        None => false,
    }
}

/// 讀取檔案大小；失敗或不是一般檔案時返回 None。`root` 只用於日誌
pub fn probe_size(path: &Path, root: &Path) -> Option<u64> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Some(metadata.len()),
        Ok(_) => {
            debug!("略過非一般檔案：{}", display_relative(path, root));
            None
        }
        Err(e) => {
            debug!("無法讀取檔案大小 {}：{}", display_relative(path, root), e);
            None
        }
    }
}

/// Scan 服務，負責走訪、篩選與讀取大小並實現 ScanServiceTrait
#[derive(Default)]
pub struct ScanService;

impl ScanService {
    pub fn new() -> Self {
        ScanService
    }
}

impl ScanServiceTrait for ScanService {
    fn scan(&self, input: ScanInput) -> io::Result<ScanOutput> {
        let root = absolute_root(&input.root);
        info!("開始掃描：{}", root.display());

        let stats = WalkStats::default();
        let pm = ProgressManager::new(input.no_progress);
        let mut records = Vec::new();
        let mut total_size = 0u64;
        let mut failed_probes = 0u64;

        for entry in walk_files(&root, &input.excluded_dir, &stats) {
            if !matches_extension(entry.path(), &input.extensions) {
                continue;
            }
            match probe_size(entry.path(), &root) {
                Some(size) => {
                    total_size += size;
                    records.push(FileRecord::new(entry.into_path(), size));
                    pm.update(records.len() as u64, total_size, "掃描");
                }
                None => failed_probes += 1,
            }
        }
        pm.finish(records.len() as u64, total_size, stats.pruned_dirs.get());

        let skipped_entries = stats.unreadable.get() + failed_probes;
        info!(
            "掃描完成，共 {} 個檔案，略過 {} 個排除目錄與 {} 個無法讀取的項目",
            records.len(),
            stats.pruned_dirs.get(),
            skipped_entries
        );

        Ok(ScanOutput {
            records,
            total_size,
            pruned_dirs: stats.pruned_dirs.get(),
            skipped_entries,
        })
    }
}
