// src/openrtb/response.rs

use serde::{Deserialize, Serialize};

/// OpenRTB Bid Response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BidResponse {
    pub id: String,
    pub seatbid: Vec<SeatBid>,
    pub bidid: Option<String>,
    pub cur: Option<String>,
    /// No-bid reason code; absent on fill.
    pub nbr: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SeatBid {
    pub bid: Vec<Bid>,
    pub seat: Option<String>,
    pub group: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Bid {
    pub id: String,
    pub impid: String,
    pub price: f64,
    /// Ad markup (HTML or URL).
    pub adm: Option<String>,
    pub dealid: Option<String>,
    pub adomain: Option<Vec<String>>,
    pub crid: Option<String>,
}
