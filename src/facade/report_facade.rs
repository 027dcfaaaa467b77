use std::io;
use chrono::Local;
use log::{debug, info, warn};
use crate::facade::traits::i_report::ReportFacadeTrait;
use crate::models::rank::RankInput;
use crate::models::report::{ReportInput, ReportOutput, ReportWriteInput};
use crate::models::scan::ScanInput;
use crate::service::rank::RankService;
use crate::service::report::ReportService;
use crate::service::scan::ScanService;
use crate::service::traits::i_service::{RankServiceTrait, ReportServiceTrait, ScanServiceTrait};
use crate::utils::utils::format_file_size;

pub struct ReportFacade {
    scan_service: Box<dyn ScanServiceTrait>,
    rank_service: Box<dyn RankServiceTrait>,
    report_service: Box<dyn ReportServiceTrait>,
}

impl ReportFacade {
    pub fn new(
        scan_service: Box<dyn ScanServiceTrait>,
        rank_service: Box<dyn RankServiceTrait>,
        report_service: Box<dyn ReportServiceTrait>,
    ) -> Self {
        ReportFacade {
            scan_service,
            rank_service,
            report_service,
        }
    }

    pub fn with_default_services() -> Self {
        ReportFacade::new(
            Box::new(ScanService::new()),
            Box::new(RankService::new()),
            Box::new(ReportService::new()),
        )
    }
}

impl ReportFacadeTrait for ReportFacade {
    fn execute_report(&self, input: ReportInput) -> io::Result<ReportOutput> {
        info!(
            "開始產生報告，掃描目錄：{}，報告檔案：{}，副檔名：{:?}",
            input.scan_root.display(),
            input.report_path.display(),
            input.extensions
        );

        let scan_output = self.scan_service.scan(ScanInput {
            root: input.scan_root.clone(),
            extensions: input.extensions.clone(),
            excluded_dir: input.excluded_dir.clone(),
            no_progress: input.no_progress,
        })?;
        let candidates = scan_output.records.len();
        if candidates == 0 {
            warn!("無符合條件的檔案，將輸出空白報告");
        } else {
            info!("候選檔案總大小：{}", format_file_size(scan_output.total_size));
        }

        let rank_output = self.rank_service.rank(RankInput {
            records: scan_output.records,
            limit: input.limit,
        })?;
        if let Some(largest) = rank_output.records.first() {
            debug!("最大檔案：{}（{} 位元組）", largest.path.display(), largest.size);
        }

        let write_output = self.report_service.write_report(ReportWriteInput {
            records: rank_output.records,
            report_path: input.report_path,
        })?;

        Ok(ReportOutput {
            report_path: write_output.report_path,
            candidates,
            lines_written: write_output.lines_written,
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }
}
