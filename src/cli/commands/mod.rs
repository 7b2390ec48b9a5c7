pub mod compact;
pub mod init;
pub mod pick;
