#[macro_use]
mod par;

pub mod alphabets;
pub mod error;
pub mod genetic_code;
pub mod io;
pub mod seq;
