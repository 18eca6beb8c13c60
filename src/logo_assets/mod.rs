pub mod storage;

pub use storage::LogoStore;
