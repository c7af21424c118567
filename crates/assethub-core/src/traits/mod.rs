//! Trait seams implemented by the outer crates.

pub mod sink;

pub use sink::EventSink;
