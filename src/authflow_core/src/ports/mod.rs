pub mod storage;
pub mod token_sink;
pub mod transport;
