pub mod cli;
pub mod errors;
pub mod input;
pub mod models;
pub mod report;
pub mod scanner;
