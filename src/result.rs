use crate::error::Error as V2exErr;
pub type Result<T> = std::result::Result<T, V2exErr>;
