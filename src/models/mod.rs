pub mod branding;
pub mod logo;

pub use branding::*;
pub use logo::*;
