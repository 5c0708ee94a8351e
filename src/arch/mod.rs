// Thu Oct 15 2026 - Alex

pub mod generic;

pub use generic::GenericOperands;
