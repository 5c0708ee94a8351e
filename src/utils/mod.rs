// Thu Oct 15 2026 - Alex

pub mod string;

pub use string::StringUtils;
