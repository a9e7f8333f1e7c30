pub mod keygen;
pub mod scramble;
pub mod unscramble;
