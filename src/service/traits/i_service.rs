use std::io;
use crate::models::rank::{RankInput, RankOutput};
use crate::models::report::{ReportWriteInput, ReportWriteOutput};
use crate::models::scan::{ScanInput, ScanOutput};

// Scan 服務接口，負責走訪目錄並收集檔案大小
pub trait ScanServiceTrait: Send + Sync {
    /// 走訪目錄樹，收集符合副檔名的檔案紀錄
    /// # 參數
    /// - input: 掃描根目錄、副檔名與排除目錄
    /// # 回傳
    /// - 成功時返回檔案紀錄與略過統計；個別項目的錯誤只會略過，不會回傳
    fn scan(&self, input: ScanInput) -> io::Result<ScanOutput>;
}

// Rank 服務接口，負責排序與截斷
pub trait RankServiceTrait: Send + Sync {
    /// 依大小遞減排序，大小相同時依路徑遞增，取前 limit 筆
    fn rank(&self, input: RankInput) -> io::Result<RankOutput>;
}

// Report 服務接口，負責寫出報告檔
pub trait ReportServiceTrait: Send + Sync {
    /// 將排序後的紀錄逐行寫入報告檔（覆寫既有內容）
    /// # 參數
    /// - input: 紀錄與報告路徑
    /// # 回傳
    /// - 成功時返回寫入行數，無法開啟或寫入報告檔時返回 IO 錯誤
    fn write_report(&self, input: ReportWriteInput) -> io::Result<ReportWriteOutput>;
}
