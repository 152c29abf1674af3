pub mod es256;
pub mod es384;
