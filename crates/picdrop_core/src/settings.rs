//! Runtime settings and environment capabilities for an uploader.

use web_time::Duration;

use crate::error::UploaderError;

/// Default delay between simulated transfer ticks
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Default progress added per tick, in percent
pub const DEFAULT_PROGRESS_STEP: u8 = 10;

/// Timing of the simulated transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploaderSettings {
    /// Delay between ticks
    pub tick_interval: Duration,
    /// Percent added per tick (1-100)
    pub progress_step: u8,
}

impl Default for UploaderSettings {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            progress_step: DEFAULT_PROGRESS_STEP,
        }
    }
}

impl UploaderSettings {
    /// Number of ticks a single item's transfer takes.
    pub fn ticks_per_item(&self) -> u32 {
        let step = u32::from(self.progress_step.clamp(1, 100));
        100u32.div_ceil(step)
    }
}

/// Browser features the uploader can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Files can be read into thumbnails (`FileReader`)
    pub thumbnail_reader: bool,
    /// Elements can be looked up by class name
    pub class_lookup: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            thumbnail_reader: true,
            class_lookup: true,
        }
    }
}

impl Capabilities {
    /// Check the capabilities the uploader cannot work without.
    pub fn check_required(&self) -> Result<(), UploaderError> {
        if !self.class_lookup {
            return Err(UploaderError::capability_missing("getElementsByClassName"));
        }
        Ok(())
    }
}

/// Everything needed to construct an uploader besides its view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploaderSetup {
    /// Transfer timing
    pub settings: UploaderSettings,
    /// Available browser features
    pub capabilities: Capabilities,
    /// Whether the dialog contains a picture grid
    pub has_grid: bool,
}

impl Default for UploaderSetup {
    fn default() -> Self {
        Self {
            settings: UploaderSettings::default(),
            capabilities: Capabilities::default(),
            has_grid: true,
        }
    }
}
