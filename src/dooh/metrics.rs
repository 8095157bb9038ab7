// src/dooh/metrics.rs

use rand::Rng;

use crate::model::dooh::{AudienceMetrics, DemographicShare, DwellBucket};
use crate::model::screen::Screen;

/// Source of audience figures for a screen. The conversion path never
/// generates numbers itself; callers inject an implementation.
pub trait MetricsProvider: Send + Sync {
    fn audience_for(&self, screen: &Screen) -> AudienceMetrics;
}

const DEMOGRAPHIC_SEGMENTS: [&str; 4] = ["18-24", "25-34", "35-44", "45-54"];
const DWELL_SECONDS: [u32; 3] = [10, 30, 60];

/// Fabricated demo metrics scaled from the partner-reported daily views.
/// Placeholder for a real analytics feed, and documented as such.
pub struct SyntheticMetrics;

impl MetricsProvider for SyntheticMetrics {
    fn audience_for(&self, screen: &Screen) -> AudienceMetrics {
        let mut rng = rand::thread_rng();
        let daily = screen.views.daily.max(1_000);
        let per_hour = daily / 24;

        let hourly_impressions = (0..24)
            .map(|hour| {
                // Daytime hours carry most of the traffic.
                let weight = if (7..22).contains(&hour) { 1.4 } else { 0.3 };
                let jitter = rng.gen_range(0.8..1.2);
                (per_hour as f64 * weight * jitter) as u64
            })
            .collect();

        let mut remaining: f64 = 1.0;
        let mut demographics = Vec::with_capacity(DEMOGRAPHIC_SEGMENTS.len());
        for (i, segment) in DEMOGRAPHIC_SEGMENTS.iter().enumerate() {
            let share = if i + 1 == DEMOGRAPHIC_SEGMENTS.len() {
                remaining
            } else {
                rng.gen_range(0.1..remaining / 2.0)
            };
            remaining -= share;
            demographics.push(DemographicShare {
                segment: segment.to_string(),
                share: (share * 100.0).round() / 100.0,
            });
        }

        let dwell_time = DWELL_SECONDS
            .iter()
            .zip([0.5, 0.3, 0.2])
            .map(|(&seconds, share)| DwellBucket { seconds, share })
            .collect();

        AudienceMetrics {
            hourly_impressions,
            demographics,
            dwell_time,
        }
    }
}

/// Deterministic double for tests: flat hourly traffic, fixed splits.
pub struct FixedMetrics {
    pub impressions_per_hour: u64,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            impressions_per_hour: 500,
        }
    }
}

impl MetricsProvider for FixedMetrics {
    fn audience_for(&self, _screen: &Screen) -> AudienceMetrics {
        AudienceMetrics {
            hourly_impressions: vec![self.impressions_per_hour; 24],
            demographics: DEMOGRAPHIC_SEGMENTS
                .iter()
                .map(|segment| DemographicShare {
                    segment: segment.to_string(),
                    share: 0.25,
                })
                .collect(),
            dwell_time: DWELL_SECONDS
                .iter()
                .zip([0.5, 0.3, 0.2])
                .map(|(&seconds, share)| DwellBucket { seconds, share })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_screen() -> Screen {
        serde_json::from_value(serde_json::json!({
            "id": "scr-1",
            "name": "Pantalla",
            "address": "Cra 1",
            "category": { "name": "Centro Comercial" },
            "views": { "daily": 48000, "weekly": 336000, "monthly": 1440000 },
        }))
        .unwrap()
    }

    #[test]
    fn synthetic_metrics_have_expected_shape() {
        let metrics = SyntheticMetrics.audience_for(&demo_screen());
        assert_eq!(metrics.hourly_impressions.len(), 24);
        assert_eq!(metrics.demographics.len(), 4);
        let total: f64 = metrics.demographics.iter().map(|d| d.share).sum();
        assert!((total - 1.0).abs() < 0.05, "shares sum to ~1.0, got {}", total);
    }

    #[test]
    fn fixed_metrics_are_deterministic() {
        let screen = demo_screen();
        let a = FixedMetrics::default().audience_for(&screen);
        let b = FixedMetrics::default().audience_for(&screen);
        assert_eq!(a, b);
    }
}
