pub mod accounting;
pub mod charges;
pub mod dashboard;
pub mod loans;
pub mod members;
