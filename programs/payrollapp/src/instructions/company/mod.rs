pub mod fund_treasury;
pub mod get_company;
pub mod initialize_company;

pub use fund_treasury::*;
pub use get_company::*;
pub use initialize_company::*;
