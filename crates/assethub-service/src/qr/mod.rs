//! QR identity binding.

pub mod binder;

pub use binder::QrBinder;
