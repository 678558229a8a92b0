pub mod config;
pub mod english;
pub mod replay;
pub mod storage;
pub mod util;
