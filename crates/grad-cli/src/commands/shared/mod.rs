pub mod parse;
pub mod university;
