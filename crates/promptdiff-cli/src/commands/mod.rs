pub mod compare;
pub mod output;
pub mod versions;
