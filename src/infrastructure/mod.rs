pub mod dom;
pub mod filesystem;
pub mod http;
