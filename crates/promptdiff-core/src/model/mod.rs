pub mod value;
pub mod version;

pub use value::{Content, Value};
pub use version::Version;
