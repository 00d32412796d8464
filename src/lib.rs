pub mod convert;
pub mod session;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
