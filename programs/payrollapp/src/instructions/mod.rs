pub mod company;
pub mod employee;
pub mod payment;

pub use company::*;
pub use employee::*;
pub use payment::*;
