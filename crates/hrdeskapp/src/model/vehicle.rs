use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::fields::FieldValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    #[default]
    Available,
    InUse,
    Maintenance,
    Retired,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::InUse => "in_use",
            Self::Maintenance => "maintenance",
            Self::Retired => "retired",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub registration: String,
    pub make: String,
    pub model: String,
    pub vehicle_type: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub status: VehicleStatus,
    #[serde(default)]
    pub fuel_type: String,
    #[serde(default)]
    pub year: u16,
    #[serde(default)]
    pub mileage: f64,
    #[serde(default)]
    pub last_service: Option<NaiveDate>,
}

impl Vehicle {
    pub fn new(
        id: impl Into<String>,
        registration: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        vehicle_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            registration: registration.into(),
            make: make.into(),
            model: model.into(),
            vehicle_type: vehicle_type.into(),
            unit: String::new(),
            status: VehicleStatus::Available,
            fuel_type: String::new(),
            year: 0,
            mileage: 0.0,
            last_service: None,
        }
    }
}

impl Record for Vehicle {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::text(&self.id),
            "registration" => FieldValue::text(&self.registration),
            "make" => FieldValue::text(&self.make),
            "model" => FieldValue::text(&self.model),
            "vehicle_type" => FieldValue::text(&self.vehicle_type),
            "unit" => FieldValue::text(&self.unit),
            "status" => FieldValue::text(self.status.as_str()),
            "fuel_type" => FieldValue::text(&self.fuel_type),
            "year" => FieldValue::Number(f64::from(self.year)),
            "mileage" => FieldValue::Number(self.mileage),
            "last_service" => FieldValue::optional_date(self.last_service),
            _ => return None,
        };
        Some(value)
    }
}
