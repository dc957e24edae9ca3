pub mod process_payment;
pub mod record_payment_proof;

pub use process_payment::*;
pub use record_payment_proof::*;
