//! Rendering seam for finished schedules.

use crate::talk::Talk;
use crate::track::Track;

/// Turns scheduled tracks into output text.
///
/// Formatters only read the schedule; nothing flows back into the core.
pub trait ScheduleFormatter {
    type Error;

    /// Renders `tracks` along with the talks the last pass could not place.
    fn format(&self, tracks: &[Track], unscheduled: &[Talk]) -> Result<String, Self::Error>;
}
