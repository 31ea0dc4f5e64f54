//! Camp DTOs
//!
//! Wire models for the camp endpoints and their mapping to and from the
//! domain. The venue location is flattened into `location*` fields and the
//! numeric camp id is never exposed.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::talk::TalkModel;
use crate::domain::models::camp::{Camp, CreateCampData, Location, UpdateCampData};

/// Default camp length in days when the client does not send one
pub const DEFAULT_CAMP_LENGTH: i32 = 1;

lazy_static! {
    /// Monikers end up in URLs and Location headers
    static ref MONIKER_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid regex");
}

/// Validates that a moniker is a single URL-safe segment
fn validate_moniker(moniker: &str) -> Result<(), validator::ValidationError> {
    if MONIKER_REGEX.is_match(moniker) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("moniker");
        error.message = Some("moniker may only contain letters, digits, '-' and '_'".into());
        Err(error)
    }
}

/// DTO for creating a new camp
///
/// Required fields are `Option` so that their absence is reported as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampDto {
    #[validate(required(message = "moniker is required"))]
    #[validate(length(min = 1, max = 50, message = "moniker must be between 1 and 50 characters"))]
    #[validate(custom(function = "validate_moniker"))]
    pub moniker: Option<String>,

    #[validate(required(message = "name is required"))]
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(required(message = "eventDate is required"))]
    pub event_date: Option<NaiveDate>,

    #[validate(range(min = 1, max = 100, message = "length must be between 1 and 100"))]
    pub length: Option<i32>,

    #[validate(range(min = 0, message = "capacity must not be negative"))]
    pub capacity: Option<i32>,

    #[validate(length(max = 100, message = "venue must be at most 100 characters"))]
    pub venue: Option<String>,
    pub location_address1: Option<String>,
    pub location_address2: Option<String>,
    pub location_address3: Option<String>,
    pub location_city_town: Option<String>,
    pub location_state_province: Option<String>,
    pub location_postal_code: Option<String>,
    pub location_country: Option<String>,
}

impl CreateCampDto {
    /// Convert into creation data. Returns `None` when a required field is
    /// missing, which cannot happen after `validate()` succeeded.
    #[must_use]
    pub fn into_create_data(self) -> Option<CreateCampData> {
        Some(CreateCampData {
            moniker: self.moniker?,
            name: self.name?,
            event_date: self.event_date?,
            length: self.length.unwrap_or(DEFAULT_CAMP_LENGTH),
            capacity: self.capacity,
            location: Location {
                venue_name: self.venue,
                address1: self.location_address1,
                address2: self.location_address2,
                address3: self.location_address3,
                city_town: self.location_city_town,
                state_province: self.location_state_province,
                postal_code: self.location_postal_code,
                country: self.location_country,
            },
        })
    }
}

/// DTO for updating a camp
///
/// All fields are optional. Only provided fields will be updated.
/// Each field is validated if present (validator crate skips None values).
#[derive(Debug, Clone, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampDto {
    #[validate(length(min = 1, max = 50, message = "moniker must be between 1 and 50 characters"))]
    #[validate(custom(function = "validate_moniker"))]
    pub moniker: Option<String>,

    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    pub event_date: Option<NaiveDate>,

    #[validate(range(min = 1, max = 100, message = "length must be between 1 and 100"))]
    pub length: Option<i32>,

    #[validate(range(min = 0, message = "capacity must not be negative"))]
    pub capacity: Option<i32>,

    #[validate(length(max = 100, message = "venue must be at most 100 characters"))]
    pub venue: Option<String>,
    pub location_address1: Option<String>,
    pub location_address2: Option<String>,
    pub location_address3: Option<String>,
    pub location_city_town: Option<String>,
    pub location_state_province: Option<String>,
    pub location_postal_code: Option<String>,
    pub location_country: Option<String>,
}

impl From<UpdateCampDto> for UpdateCampData {
    fn from(dto: UpdateCampDto) -> Self {
        Self {
            moniker: dto.moniker,
            name: dto.name,
            event_date: dto.event_date,
            length: dto.length,
            capacity: dto.capacity,
            venue_name: dto.venue,
            address1: dto.location_address1,
            address2: dto.location_address2,
            address3: dto.location_address3,
            city_town: dto.location_city_town,
            state_province: dto.location_state_province,
            postal_code: dto.location_postal_code,
            country: dto.location_country,
        }
    }
}

/// Camp response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampModel {
    pub name: String,
    pub moniker: String,
    pub event_date: NaiveDate,
    pub length: i32,
    pub capacity: Option<i32>,
    pub venue: Option<String>,
    pub location_address1: Option<String>,
    pub location_address2: Option<String>,
    pub location_address3: Option<String>,
    pub location_city_town: Option<String>,
    pub location_state_province: Option<String>,
    pub location_postal_code: Option<String>,
    pub location_country: Option<String>,
    pub talks: Vec<TalkModel>,
}

impl From<&Camp> for CampModel {
    fn from(camp: &Camp) -> Self {
        let location = camp.location();
        Self {
            name: camp.name().to_string(),
            moniker: camp.moniker().to_string(),
            event_date: camp.event_date(),
            length: camp.length(),
            capacity: camp.capacity(),
            venue: location.venue_name.clone(),
            location_address1: location.address1.clone(),
            location_address2: location.address2.clone(),
            location_address3: location.address3.clone(),
            location_city_town: location.city_town.clone(),
            location_state_province: location.state_province.clone(),
            location_postal_code: location.postal_code.clone(),
            location_country: location.country.clone(),
            talks: camp.talks().iter().map(TalkModel::from).collect(),
        }
    }
}

impl From<Camp> for CampModel {
    fn from(camp: Camp) -> Self {
        Self::from(&camp)
    }
}

/// List envelope carrying the total count next to the items
#[derive(Debug, Clone, Serialize)]
pub struct CampsEnvelope {
    pub count: usize,
    pub items: Vec<CampModel>,
}

impl From<Vec<Camp>> for CampsEnvelope {
    fn from(camps: Vec<Camp>) -> Self {
        let items: Vec<CampModel> = camps.iter().map(CampModel::from).collect();
        Self {
            count: items.len(),
            items,
        }
    }
}

/// Query parameters accepted by the camp listing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeTalksQuery {
    #[serde(default)]
    pub include_talks: bool,
}

/// Query parameters accepted by the date search
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCampsQuery {
    #[serde(alias = "date")]
    pub the_date: NaiveDate,
    #[serde(default)]
    pub include_talks: bool,
}
