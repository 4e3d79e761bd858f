pub mod detail;
pub mod error;
pub mod index;
pub mod model;
pub mod next_data;

pub use error::DumpError;
#[allow(unused_imports)]
pub use model::{EnumDescriptor, EnumMember};
