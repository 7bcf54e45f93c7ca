pub mod calc;
pub mod init;
pub mod records;
