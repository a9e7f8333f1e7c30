use crate::error::PixscramError;

pub type Result<T> = std::result::Result<T, PixscramError>;
