pub mod client;
pub mod editor;
pub mod repl;
pub mod storage;
