//! Session configuration.
//!
//! Nothing in here can change the bytes a value encodes to; options only tune how the sink is
//! allocated.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::buffer::EncodeBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct EncodeConfig {
    /// Bytes reserved up front by a fresh session's sink.
    pub initial_capacity: usize,
}

impl EncodeConfig {
    /// Capacity kept inline by [`EncodeBuffer`] before it spills to the heap.
    pub const INLINE_CAPACITY: usize = 32;

    pub const fn new() -> Self {
        Self {
            initial_capacity: Self::INLINE_CAPACITY,
        }
    }

    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// A fresh sink sized according to this configuration.
    pub fn new_buffer(&self) -> EncodeBuffer {
        EncodeBuffer::with_capacity(self.initial_capacity)
    }
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self::new()
    }
}
