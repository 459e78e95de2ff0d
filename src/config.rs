use serde::{Deserialize, Serialize};

use crate::error::{ThreadError, ThreadResult};
use crate::platform::Platform;
use crate::types::{DEFAULT_MAX_SEGMENTS, MAX_SEGMENT_LENGTH};

/// Limits applied to a thread while it is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadConfig {
    /// Character budget of one segment
    #[serde(default = "default_max_segment_length")]
    pub max_segment_length: usize,

    /// Upper bound on the number of segments
    #[serde(default = "default_max_segments")]
    pub max_segments: usize,
}

fn default_max_segment_length() -> usize {
    MAX_SEGMENT_LENGTH
}

fn default_max_segments() -> usize {
    DEFAULT_MAX_SEGMENTS
}

impl ThreadConfig {
    pub fn new() -> Self {
        Self {
            max_segment_length: MAX_SEGMENT_LENGTH,
            max_segments: DEFAULT_MAX_SEGMENTS,
        }
    }

    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }

    pub fn with_max_segment_length(mut self, max_segment_length: usize) -> Self {
        self.max_segment_length = max_segment_length;
        self
    }

    /// Derive limits from a platform's character budget and thread cap.
    ///
    /// Platforms without a budget or thread support fall back to the
    /// defaults for the missing part.
    pub fn for_platform(platform: Platform) -> Self {
        let limit = platform.limit();
        Self {
            max_segment_length: limit.char_limit.unwrap_or(MAX_SEGMENT_LENGTH),
            max_segments: limit.thread_limit.unwrap_or(DEFAULT_MAX_SEGMENTS),
        }
    }

    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> ThreadResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ThreadResult<()> {
        if self.max_segment_length == 0 {
            return Err(ThreadError::InvalidConfig(
                "max_segment_length must be at least 1".into(),
            ));
        }
        if self.max_segments == 0 {
            return Err(ThreadError::InvalidConfig(
                "max_segments must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Clamp zero bounds up to 1 so a thread can always hold one segment.
    pub(crate) fn sanitized(self) -> Self {
        if let Err(e) = self.validate() {
            tracing::warn!(error = %e, "clamping thread config");
        }
        Self {
            max_segment_length: self.max_segment_length.max(1),
            max_segments: self.max_segments.max(1),
        }
    }
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self::new()
    }
}
