pub mod contributions;
pub mod dashboard;
pub mod loans;
pub mod payments;
