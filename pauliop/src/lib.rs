pub mod sum;
pub mod term;

pub use sum::PauliSum;
pub use term::{Pauli, PauliParseError, PauliTerm};
