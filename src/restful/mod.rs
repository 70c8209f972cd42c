pub mod models;
pub mod sign;
pub mod wallet;
