// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity and field UI attributes, column overrides and skipped fields.

use chrono::{NaiveDate, NaiveDateTime};
use retailscm::Entity;

#[derive(Debug, Default, Entity)]
#[entity(
    table = "delivery_data",
    owner = "delivery",
    processor = "deliveryService",
    title = "Delivery",
    action = "Edit:edit",
    action = "Cancel:cancel"
)]
#[pass(layout = "wide")]
pub struct Delivery {
    #[id]
    pub id: Option<String>,

    /// Tracking code.
    #[display]
    #[column(name = "tracking_code")]
    pub code: String,

    #[ui(label = "Type", ui_type = "select", no_candidate)]
    pub r#type: Option<String>,

    #[ui(group = "schedule")]
    pub planned: Option<NaiveDate>,

    #[ui(group = "schedule", action(key = "rescheduleUrl", value = "Reschedule:reschedule"))]
    #[pass(placeholder = "yyyy-MM-dd HH:mm")]
    pub arrived_at: Option<NaiveDateTime>,

    pub weight: f64,

    pub parcels: i64,

    pub fragile: bool,

    #[field(skip)]
    pub cache: Vec<u8>,

    #[version]
    #[ui(ignore)]
    pub version: i32,
}

fn main() {
    let schema = Delivery::schema();
    assert_eq!(schema.table, "delivery_data");
    assert_eq!(schema.owner, "delivery");
    assert_eq!(schema.field("type").unwrap().column, "type");
    assert_eq!(schema.field("code").unwrap().column, "tracking_code");
    assert!(schema.field("cache").is_none());

    let delivery = Delivery {
        code: "SF1234".to_owned(),
        ..Delivery::default()
    };
    assert_eq!(delivery.display_name().as_deref(), Some("SF1234"));
}
