use std::cell::Cell;
use std::path::{Path, PathBuf};
use log::debug;
use walkdir::{DirEntry, WalkDir};

/// 走訪過程中略過的數量
#[derive(Debug, Default)]
pub struct WalkStats {
    pub pruned_dirs: Cell<u64>,
    pub unreadable: Cell<u64>,
}

/// 路徑中任一段等於 `excluded_dir` 即排除
pub fn is_excluded_dir(path: &Path, excluded_dir: &str) -> bool {
    path.components().any(|component| component.as_os_str() == excluded_dir)
}

pub fn absolute_root(root: &Path) -> PathBuf {
    std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf())
}

pub(crate) fn display_relative(path: &Path, root: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

/// 遞迴走訪 `root`，回傳所有非目錄項目。
///
/// 被排除的目錄整棵略過；無法讀取的目錄或項目直接略過，不中斷走訪。
/// 根目錄不存在或不是目錄時不產生任何項目。
pub fn walk_files<'a>(
    root: &'a Path,
    excluded_dir: &'a str,
    stats: &'a WalkStats,
) -> impl Iterator<Item = DirEntry> + 'a {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(move |entry| {
            let pruned = entry.file_type().is_dir() && is_excluded_dir(entry.path(), excluded_dir);
            if pruned {
                stats.pruned_dirs.set(stats.pruned_dirs.get() + 1);
                debug!("略過排除目錄：{}", display_relative(entry.path(), root));
            }
            !pruned
        })
        .filter_map(move |entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                stats.unreadable.set(stats.unreadable.get() + 1);
                debug!("略過無法讀取的項目：{}", e);
                None
            }
        })
        // 根目錄本身不是走訪結果
        .filter(|entry| entry.depth() > 0 && !entry.file_type().is_dir())
}
