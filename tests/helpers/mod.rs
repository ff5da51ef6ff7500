#![allow(dead_code)]
pub mod assignment_helpers;
pub mod test_db;

pub use assignment_helpers::*;
pub use test_db::*;
