use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use log::{error, info};
use crate::models::record::FileRecord;
use crate::models::report::{ReportWriteInput, ReportWriteOutput};
use crate::service::traits::i_service::ReportServiceTrait;

#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

/// 報告中的一行：`<size> - <path>`
pub fn write_report_line<W: Write>(writer: &mut W, record: &FileRecord) -> io::Result<()> {
    write!(writer, "{} - ", record.size)?;
    writer.write_all(&path_bytes(&record.path))?;
    writer.write_all(b"\n")
}

/// 覆寫 `report_path`，每筆紀錄一行
pub fn write_report(report_path: &Path, records: &[FileRecord]) -> io::Result<usize> {
    let file = File::create(report_path).map_err(|e| {
        error!("無法建立報告檔案 {}：{}", report_path.display(), e);
        io::Error::new(
            e.kind(),
            format!("無法建立報告檔案 '{}'：{}", report_path.display(), e),
        )
    })?;
    let mut writer = BufWriter::new(file);
    for record in records {
        write_report_line(&mut writer, record)?;
    }
    writer.flush()?;
    Ok(records.len())
}

/// Report 服務，負責寫出報告檔並實現 ReportServiceTrait
#[derive(Default)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        ReportService
    }
}

impl ReportServiceTrait for ReportService {
    fn write_report(&self, input: ReportWriteInput) -> io::Result<ReportWriteOutput> {
        let lines_written = write_report(&input.report_path, &input.records)?;
        info!("寫入報告：{}，共 {} 行", input.report_path.display(), lines_written);
        Ok(ReportWriteOutput {
            report_path: input.report_path,
            lines_written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn report_line_format() {
        let mut buf = Vec::new();
        write_report_line(&mut buf, &FileRecord::new(PathBuf::from("/src/app.tsx"), 2048)).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2048 - /src/app.tsx\n");
    }

    #[test]
    fn writes_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("report.txt");
        let records = vec![
            FileRecord::new(PathBuf::from("/p/b.tsx"), 200),
            FileRecord::new(PathBuf::from("/p/a.ts"), 100),
        ];

        assert_eq!(write_report(&report, &records).unwrap(), 2);
        assert_eq!(
            fs::read_to_string(&report).unwrap(),
            "200 - /p/b.tsx\n100 - /p/a.ts\n"
        );
    }

    #[test]
    fn truncates_existing_report() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("report.txt");
        fs::write(&report, "stale content\nmore stale content\n").unwrap();

        write_report(&report, &[]).unwrap();
        assert_eq!(fs::read(&report).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn missing_parent_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("no/such/dir/report.txt");

        let err = ReportService::new()
            .write_report(ReportWriteInput {
                records: Vec::new(),
                report_path: report,
            })
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_written_verbatim() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = PathBuf::from(OsStr::from_bytes(b"/p/caf\xe9.ts"));
        let mut buf = Vec::new();
        write_report_line(&mut buf, &FileRecord::new(path, 7)).unwrap();
        assert_eq!(buf, b"7 - /p/caf\xe9.ts\n".to_vec());
    }
}
