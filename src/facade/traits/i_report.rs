use std::io;
use crate::models::report::{ReportInput, ReportOutput};

// Facade 接口，負責協調掃描、排序與寫出報告的流程
pub trait ReportFacadeTrait: Send + Sync {
    /// 執行一次完整的掃描與報告
    /// # 參數
    /// - input: 掃描根目錄、報告路徑與篩選條件
    /// # 回傳
    /// - 成功時返回報告結果，無法寫出報告檔時返回 IO 錯誤
    fn execute_report(&self, input: ReportInput) -> io::Result<ReportOutput>;
}
