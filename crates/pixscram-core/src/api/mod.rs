pub mod scramble;
pub mod unscramble;
