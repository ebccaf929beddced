pub mod account;
pub mod book;
pub mod review;
pub mod token;
