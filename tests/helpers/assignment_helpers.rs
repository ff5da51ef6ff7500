use assignment_service::domain::entities::Assignment;
use chrono::{DateTime, TimeZone, Utc};

pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn assignment(consultant_id: &str, customer_id: &str) -> Assignment {
    Assignment::new(
        consultant_id,
        customer_id,
        Some(date(2015, 9, 24)),
        Some(date(2015, 12, 24)),
    )
}
