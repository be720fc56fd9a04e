use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::fields::FieldValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Trip number, e.g. `TRP-240217-001`.
    pub id: String,
    pub vehicle_id: String,
    pub driver: String,
    pub origin: String,
    pub destination: String,
    pub start_date: NaiveDate,
    /// Unset while the trip is scheduled or under way.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub distance_km: f64,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub status: TripStatus,
}

impl Trip {
    pub fn new(
        id: impl Into<String>,
        vehicle_id: impl Into<String>,
        driver: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            vehicle_id: vehicle_id.into(),
            driver: driver.into(),
            origin: origin.into(),
            destination: destination.into(),
            start_date,
            end_date: None,
            distance_km: 0.0,
            purpose: String::new(),
            status: TripStatus::Scheduled,
        }
    }
}

impl Record for Trip {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::text(&self.id),
            "vehicle_id" => FieldValue::text(&self.vehicle_id),
            "driver" => FieldValue::text(&self.driver),
            "origin" => FieldValue::text(&self.origin),
            "destination" => FieldValue::text(&self.destination),
            "start_date" => FieldValue::Date(self.start_date),
            "end_date" => FieldValue::optional_date(self.end_date),
            "distance_km" => FieldValue::Number(self.distance_km),
            "purpose" => FieldValue::text(&self.purpose),
            "status" => FieldValue::text(self.status.as_str()),
            _ => return None,
        };
        Some(value)
    }
}
