pub mod channel;
pub mod storage;
