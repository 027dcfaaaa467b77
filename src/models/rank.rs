use crate::models::record::FileRecord;

#[derive(Clone, Debug)]
pub struct RankInput {
    pub records: Vec<FileRecord>,
    pub limit: usize,
}

#[derive(Debug)]
pub struct RankOutput {
    pub records: Vec<FileRecord>,
}
