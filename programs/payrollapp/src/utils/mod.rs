pub mod address;
pub mod authorization;
pub mod token_utils;
pub mod validation;

pub use address::*;
pub use authorization::*;
pub use token_utils::*;
pub use validation::*;
