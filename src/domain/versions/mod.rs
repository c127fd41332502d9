pub mod canonical;
pub mod manifest;
pub mod matcher;
pub mod url;
