//! Services built on the core types

mod emotion_core;

pub use emotion_core::*;
