// src/dooh/convert.rs

use crate::dooh::metrics::MetricsProvider;
use crate::dooh::taxonomy;
use crate::model::dooh::{AvailabilityWindow, CpmPricing, DoohScreen, Orientation};
use crate::model::screen::Screen;

/// CPM stand-in for screens without an enabled hourly package.
pub const DEFAULT_BASE_CPM: u64 = 50_000;

/// Weekly all-week availability, Monday = 1 .. Sunday = 7.
const ALL_WEEK: [u8; 7] = [1, 2, 3, 4, 5, 6, 7];

/// Projects a marketplace screen into DOOH ad-tech vocabulary.
///
/// Pure mapping, no I/O. Screens without coordinates map to (0.0, 0.0)
/// rather than failing; audience figures come from the injected provider.
pub fn convert_screen_to_dooh(screen: &Screen, metrics: &dyn MetricsProvider) -> DoohScreen {
    let (venue_type, venue_sub_type) = taxonomy::classify(screen);
    let openooh = taxonomy::openooh_ids(venue_type, venue_sub_type);

    let base_cpm = if screen.pricing.bundles.hourly.enabled {
        screen.pricing.bundles.hourly.price
    } else {
        DEFAULT_BASE_CPM
    };

    let orientation = if screen.specs.width_px > screen.specs.height_px {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    };

    DoohScreen {
        screen_id: screen.id.clone(),
        name: screen.name.clone(),
        venue_type,
        venue_sub_type,
        openooh,
        geo: screen.coordinates_or_default(),
        width_px: screen.specs.width_px,
        height_px: screen.specs.height_px,
        resolution: screen.specs.resolution.clone(),
        brightness_nits: screen.specs.brightness_nits,
        orientation,
        availability: vec![AvailabilityWindow {
            days: ALL_WEEK.to_vec(),
            start: screen.operating_hours.start.clone(),
            end: screen.operating_hours.end.clone(),
        }],
        pricing: CpmPricing::new(base_cpm),
        audience: metrics.audience_for(screen),
    }
}
