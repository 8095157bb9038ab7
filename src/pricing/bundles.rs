// src/pricing/bundles.rs

use crate::model::bundle::{Bundle, BundleCatalog, BundleFrequency};
use crate::model::frequency::FrequencyType;
use crate::model::screen::Screen;

/// Operative hours per day assumed by spot-count scaling. A fixed
/// approximation: the screen's actual operating window is not consulted.
pub const OPERATING_HOURS_PER_DAY: u32 = 16;

const DAYS_PER_WEEK: u32 = 7;
const DAYS_PER_MONTH: u32 = 30;

/// Price multiplier for the denser hourly variant.
const INTENSIVE_MULTIPLIER: f64 = 1.4;
/// Price multiplier for the weekend daily variant.
const WEEKEND_MULTIPLIER: f64 = 1.8;

/// Moment bundles are fixed marketplace policy, independent of the
/// partner's package pricing.
const MOMENT_BASIC_PRICE: u64 = 9_500;
const MOMENT_BASIC_SPOTS: u32 = 1;
const MOMENT_PREMIUM_PRICE: u64 = 25_000;
const MOMENT_PREMIUM_SPOTS: u32 = 3;

/// Builds the purchasable bundle catalogue for a screen at the partner's
/// configured display frequency.
///
/// Pure: equal inputs yield value-equal catalogues. Disabled packages
/// produce empty modes; exactly one bundle per populated mode is
/// highlighted.
pub fn generate_bundles(screen: &Screen, frequency: FrequencyType) -> BundleCatalog {
    let bundles = &screen.pricing.bundles;

    let mut catalog = BundleCatalog::default();

    if screen.pricing.allow_moments {
        catalog.momentos = moment_bundles(frequency);
    }

    if bundles.hourly.enabled {
        let base = bundles.hourly.price;
        catalog.hourly = vec![
            Bundle {
                id: "hourly-standard".to_string(),
                name: "Hora Estándar".to_string(),
                description: "Tu anuncio durante una hora en la frecuencia configurada".to_string(),
                duration: "1 hora".to_string(),
                price: base,
                frequency: BundleFrequency::new(frequency, spots_for_hours(frequency, 1)),
                is_highlighted: true,
            },
            variant_bundle(
                "hourly-intensive",
                "Hora Intensiva",
                "Mayor frecuencia durante una hora",
                "1 hora",
                base,
                INTENSIVE_MULTIPLIER,
                frequency.denser(),
                1,
            ),
        ];
    }

    if bundles.daily.enabled {
        let base = bundles.daily.price;
        catalog.daily = vec![
            Bundle {
                id: "daily-standard".to_string(),
                name: "Día Completo".to_string(),
                description: "Tu anuncio durante todo el día".to_string(),
                duration: "1 día".to_string(),
                price: base,
                frequency: BundleFrequency::new(
                    frequency,
                    spots_for_hours(frequency, OPERATING_HOURS_PER_DAY),
                ),
                is_highlighted: true,
            },
            variant_bundle(
                "daily-weekend",
                "Día Fin de Semana",
                "Día completo con mayor frecuencia, ideal para fines de semana",
                "1 día",
                base,
                WEEKEND_MULTIPLIER,
                frequency.denser(),
                OPERATING_HOURS_PER_DAY,
            ),
        ];
    }

    if bundles.weekly.enabled {
        catalog.weekly = vec![Bundle {
            id: "weekly-standard".to_string(),
            name: "Semana Completa".to_string(),
            description: "Tu anuncio durante los 7 días de la semana".to_string(),
            duration: "7 días".to_string(),
            price: bundles.weekly.price,
            frequency: BundleFrequency::new(
                frequency,
                spots_for_hours(frequency, OPERATING_HOURS_PER_DAY * DAYS_PER_WEEK),
            ),
            is_highlighted: true,
        }];
    }

    if bundles.monthly.enabled {
        catalog.monthly = vec![Bundle {
            id: "monthly-standard".to_string(),
            name: "Mes Completo".to_string(),
            description: "Presencia continua durante 30 días".to_string(),
            duration: "30 días".to_string(),
            price: bundles.monthly.price,
            frequency: BundleFrequency::new(
                frequency,
                spots_for_hours(frequency, OPERATING_HOURS_PER_DAY * DAYS_PER_MONTH),
            ),
            is_highlighted: true,
        }];
    }

    catalog
}

fn spots_for_hours(frequency: FrequencyType, hours: u32) -> u32 {
    frequency.spots_per_hour() * hours
}

#[allow(clippy::too_many_arguments)]
fn variant_bundle(
    id: &str,
    name: &str,
    description: &str,
    duration: &str,
    base_price: u64,
    multiplier: f64,
    frequency: FrequencyType,
    hours: u32,
) -> Bundle {
    Bundle {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        price: (base_price as f64 * multiplier).round() as u64,
        frequency: BundleFrequency::new(frequency, spots_for_hours(frequency, hours)),
        is_highlighted: false,
    }
}

fn moment_bundles(frequency: FrequencyType) -> Vec<Bundle> {
    vec![
        Bundle {
            id: "moment-basic".to_string(),
            name: "Momento Básico".to_string(),
            description: "Una reproducción inmediata de tu anuncio".to_string(),
            duration: "1 momento".to_string(),
            price: MOMENT_BASIC_PRICE,
            frequency: BundleFrequency::new(frequency, MOMENT_BASIC_SPOTS),
            is_highlighted: true,
        },
        Bundle {
            id: "moment-premium".to_string(),
            name: "Momento Premium".to_string(),
            description: "Tres reproducciones inmediatas de tu anuncio".to_string(),
            duration: "3 momentos".to_string(),
            price: MOMENT_PREMIUM_PRICE,
            frequency: BundleFrequency::new(frequency, MOMENT_PREMIUM_SPOTS),
            is_highlighted: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::bundle::AdMode;
    use crate::model::screen::{PackagePricing, Screen};
    use proptest::prelude::*;

    fn screen_with(pricing: crate::model::screen::Pricing) -> Screen {
        serde_json::from_value::<Screen>(serde_json::json!({
            "id": "scr-test",
            "name": "Pantalla Prueba",
            "address": "Cra 1 # 1-1",
            "category": { "name": "Centro Comercial" },
        }))
        .map(|mut s| {
            s.pricing = pricing;
            s
        })
        .unwrap()
    }

    fn enabled(price: u64) -> PackagePricing {
        PackagePricing {
            enabled: true,
            price,
            spots: None,
        }
    }

    #[test]
    fn disabled_hourly_yields_empty_mode() {
        let screen = screen_with(Default::default());
        let catalog = generate_bundles(&screen, FrequencyType::default());
        assert!(catalog.hourly.is_empty());
        assert!(catalog.daily.is_empty());
        assert!(catalog.momentos.is_empty());
    }

    #[test]
    fn moments_are_fixed_policy() {
        let mut pricing = crate::model::screen::Pricing::default();
        pricing.allow_moments = true;
        let screen = screen_with(pricing);
        let catalog = generate_bundles(&screen, FrequencyType::default());

        assert_eq!(catalog.momentos.len(), 2);
        assert_eq!(catalog.momentos[0].price, 9_500);
        assert_eq!(catalog.momentos[0].frequency.total_spots, 1);
        assert_eq!(catalog.momentos[1].price, 25_000);
        assert_eq!(catalog.momentos[1].frequency.total_spots, 3);
        assert!(catalog.hourly.is_empty());
        assert!(catalog.daily.is_empty());
        assert!(catalog.weekly.is_empty());
        assert!(catalog.monthly.is_empty());
    }

    #[test]
    fn daily_standard_scenario() {
        // 180 000 COP daily package at the 15-minute default: 4 spots/hour
        // over the assumed 16-hour day = 64 spots.
        let mut pricing = crate::model::screen::Pricing::default();
        pricing.bundles.daily = enabled(180_000);
        let screen = screen_with(pricing);

        let catalog = generate_bundles(&screen, FrequencyType::FifteenMin);
        let standard = &catalog.daily[0];
        assert_eq!(standard.name, "Día Completo");
        assert_eq!(standard.price, 180_000);
        assert_eq!(standard.frequency.spots_per_hour, 4);
        assert_eq!(standard.frequency.total_spots, 64);
        assert!(standard.is_highlighted);
    }

    #[test]
    fn hourly_and_daily_carry_denser_variants() {
        let mut pricing = crate::model::screen::Pricing::default();
        pricing.bundles.hourly = enabled(50_000);
        pricing.bundles.daily = enabled(180_000);
        let screen = screen_with(pricing);

        let catalog = generate_bundles(&screen, FrequencyType::FifteenMin);

        let intensive = &catalog.hourly[1];
        assert_eq!(intensive.id, "hourly-intensive");
        assert_eq!(intensive.price, 70_000); // 1.4×
        assert_eq!(intensive.frequency.kind, FrequencyType::TenMin);
        assert!(!intensive.is_highlighted);

        let weekend = &catalog.daily[1];
        assert_eq!(weekend.id, "daily-weekend");
        assert_eq!(weekend.price, 324_000); // 1.8×
        assert_eq!(weekend.frequency.total_spots, 6 * 16);
        assert!(!weekend.is_highlighted);
    }

    #[test]
    fn exactly_one_highlight_per_populated_mode() {
        let mut pricing = crate::model::screen::Pricing::default();
        pricing.allow_moments = true;
        pricing.bundles.hourly = enabled(50_000);
        pricing.bundles.daily = enabled(180_000);
        pricing.bundles.weekly = enabled(900_000);
        pricing.bundles.monthly = enabled(3_000_000);
        let screen = screen_with(pricing);

        let catalog = generate_bundles(&screen, FrequencyType::default());
        for mode in AdMode::ALL {
            let bundles = catalog.for_mode(mode);
            assert!(!bundles.is_empty(), "{:?} should be populated", mode);
            let highlighted = bundles.iter().filter(|b| b.is_highlighted).count();
            assert_eq!(highlighted, 1, "{:?} must carry exactly one highlight", mode);

            let mut ids: Vec<_> = bundles.iter().map(|b| b.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), bundles.len(), "{:?} ids must be unique", mode);
        }
    }

    proptest! {
        #[test]
        fn spot_scaling_law(
            hourly_price in 1_000u64..1_000_000,
            daily_price in 1_000u64..5_000_000,
            weekly_price in 1_000u64..20_000_000,
            freq_idx in 0usize..FrequencyType::ALL.len(),
        ) {
            let frequency = FrequencyType::ALL[freq_idx];
            let mut pricing = crate::model::screen::Pricing::default();
            pricing.bundles.hourly = enabled(hourly_price);
            pricing.bundles.daily = enabled(daily_price);
            pricing.bundles.weekly = enabled(weekly_price);
            let screen = screen_with(pricing);

            let catalog = generate_bundles(&screen, frequency);
            let hourly = catalog.hourly[0].frequency.total_spots;
            let daily = catalog.daily[0].frequency.total_spots;
            let weekly = catalog.weekly[0].frequency.total_spots;

            prop_assert_eq!(daily, hourly * 16);
            prop_assert_eq!(weekly, daily * 7);
        }

        #[test]
        fn generation_is_idempotent(
            allow_moments in any::<bool>(),
            hourly in proptest::option::of(1_000u64..1_000_000),
            daily in proptest::option::of(1_000u64..5_000_000),
            freq_idx in 0usize..FrequencyType::ALL.len(),
        ) {
            let frequency = FrequencyType::ALL[freq_idx];
            let mut pricing = crate::model::screen::Pricing::default();
            pricing.allow_moments = allow_moments;
            if let Some(p) = hourly {
                pricing.bundles.hourly = enabled(p);
            }
            if let Some(p) = daily {
                pricing.bundles.daily = enabled(p);
            }
            let screen = screen_with(pricing);

            let first = generate_bundles(&screen, frequency);
            let second = generate_bundles(&screen, frequency);
            prop_assert_eq!(first, second);
        }
    }
}
