pub mod check;
pub mod init;
pub mod profile;
pub mod scan;
