pub mod client;
pub mod entities;
pub mod random;
pub mod report;
pub mod utils;
pub mod vocabulary;
