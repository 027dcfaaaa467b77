use std::io;
use log::info;
use crate::models::rank::{RankInput, RankOutput};
use crate::models::record::FileRecord;
use crate::service::traits::i_service::RankServiceTrait;

/// 依大小遞減排序，大小相同時依路徑遞增，再截斷至 `limit` 筆
pub fn rank_records(mut records: Vec<FileRecord>, limit: usize) -> Vec<FileRecord> {
    records.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
    records.truncate(limit);
    records
}

#[derive(Default)]
pub struct RankService;

impl RankService {
    pub fn new() -> Self {
        RankService
    }
}

impl RankServiceTrait for RankService {
    fn rank(&self, input: RankInput) -> io::Result<RankOutput> {
        let total = input.records.len();
        let records = rank_records(input.records, input.limit);
        info!("排序完成，{} 筆中保留前 {} 筆", total, records.len());
        Ok(RankOutput { records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(path: &str, size: u64) -> FileRecord {
        FileRecord::new(PathBuf::from(path), size)
    }

    #[test]
    fn sorts_descending_by_size() {
        let ranked = rank_records(
            vec![record("/a.ts", 100), record("/b.tsx", 200), record("/c.ts", 150)],
            50,
        );
        let sizes: Vec<u64> = ranked.iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![200, 150, 100]);
    }

    #[test]
    fn ties_break_by_path() {
        let ranked = rank_records(
            vec![record("/z.ts", 10), record("/m.ts", 10), record("/a.ts", 10)],
            50,
        );
        let paths: Vec<&str> = ranked.iter().map(|r| r.path.to_str().unwrap()).collect();
        assert_eq!(paths, vec!["/a.ts", "/m.ts", "/z.ts"]);
    }

    #[test]
    fn truncates_to_limit() {
        let records = (0..60).map(|i| record(&format!("/f{}.ts", i), i)).collect();
        let ranked = RankService::new()
            .rank(RankInput { records, limit: 50 })
            .unwrap()
            .records;
        assert_eq!(ranked.len(), 50);
        assert_eq!(ranked.first().map(|r| r.size), Some(59));
        assert_eq!(ranked.last().map(|r| r.size), Some(10));
    }

    #[test]
    fn fewer_than_limit_is_not_an_error() {
        assert!(rank_records(Vec::new(), 50).is_empty());
        assert_eq!(rank_records(vec![record("/a.ts", 1)], 50).len(), 1);
    }
}
