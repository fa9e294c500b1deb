pub mod dto;
pub mod session;

mod session_test;
