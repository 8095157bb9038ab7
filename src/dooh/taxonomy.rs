// src/dooh/taxonomy.rs

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::model::dooh::{OpenOohIds, VenueSubType, VenueType};
use crate::model::screen::Screen;

/// One classification rule: first keyword hit wins.
pub struct VenueRule {
    pub keywords: &'static [&'static str],
    pub venue_type: VenueType,
    pub venue_sub_type: VenueSubType,
}

/// Ordered rule list over the lower-cased category name. Precedence:
/// mall, airport, stadium, hotel, restaurant, outdoor environments, then
/// the retail/mall default. Keyword matching only; scoring belongs to a
/// separate classifier outside this service.
pub static VENUE_RULES: &[VenueRule] = &[
    VenueRule {
        keywords: &["mall", "centro comercial"],
        venue_type: VenueType::Retail,
        venue_sub_type: VenueSubType::Mall,
    },
    VenueRule {
        keywords: &["airport", "aeropuerto"],
        venue_type: VenueType::Transit,
        venue_sub_type: VenueSubType::Airports,
    },
    VenueRule {
        keywords: &["stadium", "estadio", "arena"],
        venue_type: VenueType::Leisure,
        venue_sub_type: VenueSubType::SportsEntertainment,
    },
    VenueRule {
        keywords: &["hotel"],
        venue_type: VenueType::Leisure,
        venue_sub_type: VenueSubType::Hotels,
    },
    VenueRule {
        keywords: &["restaurant", "restaurante", "café", "cafe"],
        venue_type: VenueType::Leisure,
        venue_sub_type: VenueSubType::CasualDining,
    },
    VenueRule {
        keywords: &["outdoor", "exterior", "valla", "billboard", "vía", "via publica"],
        venue_type: VenueType::Outdoor,
        venue_sub_type: VenueSubType::Billboards,
    },
];

/// Fallback when no rule matches.
pub const DEFAULT_VENUE: (VenueType, VenueSubType) = (VenueType::Retail, VenueSubType::Mall);

/// OpenOOH specification ids keyed by "{venue_type}_{venue_sub_type}".
static OPENOOH_IDS: Lazy<HashMap<&'static str, OpenOohIds>> = Lazy::new(|| {
    HashMap::from([
        ("retail_mall", OpenOohIds { parent_id: 2, child_id: 205 }),
        ("transit_airports", OpenOohIds { parent_id: 1, child_id: 101 }),
        ("leisure_sports_entertainment", OpenOohIds { parent_id: 8, child_id: 803 }),
        ("leisure_hotels", OpenOohIds { parent_id: 8, child_id: 807 }),
        ("leisure_casual_dining", OpenOohIds { parent_id: 8, child_id: 805 }),
        ("outdoor_billboards", OpenOohIds { parent_id: 3, child_id: 301 }),
    ])
});

/// Classifies a screen's category name into a venue type/sub-type.
/// Deterministic: same name, same classification.
pub fn classify(screen: &Screen) -> (VenueType, VenueSubType) {
    let name = screen.category.name.to_lowercase();
    for rule in VENUE_RULES {
        if rule.keywords.iter().any(|kw| name.contains(kw)) {
            return (rule.venue_type, rule.venue_sub_type);
        }
    }
    DEFAULT_VENUE
}

/// Looks up OpenOOH ids for a classified venue, falling back to the
/// retail/mall entry for keys missing from the table.
pub fn openooh_ids(venue_type: VenueType, venue_sub_type: VenueSubType) -> OpenOohIds {
    let key = format!("{}_{}", venue_type.tag(), venue_sub_type.tag());
    OPENOOH_IDS
        .get(key.as_str())
        .copied()
        .unwrap_or_else(|| OPENOOH_IDS["retail_mall"])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_in(category: &str) -> Screen {
        serde_json::from_value(serde_json::json!({
            "id": "scr-1",
            "name": "Pantalla",
            "address": "Cra 1",
            "category": { "name": category },
        }))
        .unwrap()
    }

    #[test]
    fn mall_always_classifies_as_retail_mall() {
        for name in ["Centro Comercial Andino", "Unicentro Mall", "MALL PLAZA"] {
            let got = classify(&screen_in(name));
            assert_eq!(got, (VenueType::Retail, VenueSubType::Mall), "{}", name);
        }
    }

    #[test]
    fn airport_always_classifies_as_transit_airports() {
        for name in ["Aeropuerto El Dorado", "International Airport Terminal"] {
            let got = classify(&screen_in(name));
            assert_eq!(got, (VenueType::Transit, VenueSubType::Airports), "{}", name);
        }
    }

    #[test]
    fn first_match_wins_over_later_rules() {
        // Contains both "centro comercial" and "restaurante"; the mall rule
        // is earlier in the list and takes precedence.
        let got = classify(&screen_in("Restaurante del Centro Comercial"));
        assert_eq!(got, (VenueType::Retail, VenueSubType::Mall));
    }

    #[test]
    fn unknown_category_falls_back_to_default() {
        assert_eq!(classify(&screen_in("Gimnasio Central")), DEFAULT_VENUE);
    }

    #[test]
    fn every_rule_resolves_openooh_ids() {
        for rule in VENUE_RULES {
            let ids = openooh_ids(rule.venue_type, rule.venue_sub_type);
            assert!(ids.parent_id > 0 && ids.child_id > ids.parent_id);
        }
        assert_eq!(openooh_ids(VenueType::Retail, VenueSubType::Mall).child_id, 205);
        assert_eq!(openooh_ids(VenueType::Transit, VenueSubType::Airports).child_id, 101);
    }
}
