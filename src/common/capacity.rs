//! Frame capacity type.

use std::fmt;

use crate::common::config::{DEFAULT_CAPACITY, MIN_CAPACITY};
use crate::common::{Error, Result};

/// Number of physical frames available to a simulation.
///
/// Always at least one; the only way to build one is [`FrameCapacity::new`],
/// which rejects zero with [`Error::InvalidCapacity`].
///
/// # Example
/// ```
/// use framesim::FrameCapacity;
///
/// let capacity = FrameCapacity::new(3).unwrap();
/// assert_eq!(capacity.get(), 3);
/// assert!(FrameCapacity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameCapacity(usize);

impl FrameCapacity {
    pub const DEFAULT: FrameCapacity = FrameCapacity(DEFAULT_CAPACITY);

    /// Validate and wrap a frame count.
    pub fn new(frames: usize) -> Result<Self> {
        if frames < MIN_CAPACITY {
            return Err(Error::InvalidCapacity(frames));
        }
        Ok(FrameCapacity(frames))
    }

    #[inline]
    pub fn get(&self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for FrameCapacity {
    type Error = Error;

    fn try_from(frames: usize) -> Result<Self> {
        FrameCapacity::new(frames)
    }
}

impl fmt::Display for FrameCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frame(s)", self.0)
    }
}
