pub mod console;
pub mod reader;
pub mod store;
pub mod writer;
