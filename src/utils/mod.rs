pub mod files;
pub mod format;
pub mod storage;
