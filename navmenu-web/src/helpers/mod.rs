pub mod dom;

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod fixture;
