// src/openrtb/request.rs

use serde::{Deserialize, Serialize};

/// OpenRTB-shaped bid request for DOOH inventory.
///
/// Constructed locally per purchase and consumed in-process; it is not
/// transmitted to a real exchange by this service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BidRequest {
    pub id: String,

    /// One impression slot per purchased bundle.
    pub imp: Vec<Imp>,

    /// Distribution channel: the physical screen, in OpenOOH terms.
    pub dooh: Dooh,

    /// Auction type, 3 = fixed price (the guaranteed-deal path).
    pub at: Option<i32>,
    pub tmax: Option<u64>,
    pub cur: Option<Vec<String>>,

    /// Blocked IAB content categories.
    pub bcat: Option<Vec<String>>,
    /// IAB content taxonomy version the category ids refer to.
    pub cattax: Option<u32>,

    pub test: Option<i32>,
}

/// A single DOOH impression slot.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Imp {
    pub id: String,
    /// Screen identifier on the supply side.
    pub tagid: Option<String>,
    pub bidfloor: Option<f64>,
    pub bidfloorcur: Option<String>,
    pub video: Option<Video>,
    pub pmp: Option<Pmp>,
}

/// Spot creative constraints plus the duration-based floor table.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Video {
    pub mimes: Vec<String>,
    pub minduration: Option<u32>,
    pub maxduration: Option<u32>,
    pub w: Option<u32>,
    pub h: Option<u32>,
    /// Floors bucketed by spot duration, ascending.
    pub durfloors: Option<Vec<DurationFloor>>,
}

/// Price floor for one spot-duration band, in seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DurationFloor {
    pub mindur: u32,
    pub maxdur: u32,
    pub bidfloor: f64,
}

/// Private marketplace wrapper around the guaranteed deal.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Pmp {
    pub private_auction: Option<i32>,
    pub deals: Vec<Deal>,
}

/// A programmatic-guaranteed deal on one impression slot.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Deal {
    pub id: String,
    pub bidfloor: Option<f64>,
    pub bidfloorcur: Option<String>,
    /// Auction type override, 3 = fixed price.
    pub at: Option<i32>,
    /// 1 = guaranteed delivery.
    pub guar: Option<i32>,
    /// Minimum CPM per second of creative duration.
    pub mincpmpersec: Option<f64>,
}

/// DOOH distribution-channel object (OpenRTB 2.6).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Dooh {
    pub id: String,
    pub name: Option<String>,
    /// OpenOOH venue ids, most specific last.
    pub venuetype: Vec<u32>,
    /// OpenOOH taxonomy version the venue ids refer to.
    pub venuetypetax: Option<u32>,
}
