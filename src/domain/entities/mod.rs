pub mod account;
pub mod activity;
pub mod comment;
pub mod item;
pub mod share;
