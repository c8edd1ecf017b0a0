pub mod search;
pub mod worker;
