pub mod replay;
pub mod serve;
