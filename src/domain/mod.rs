pub mod page;
pub mod versions;
