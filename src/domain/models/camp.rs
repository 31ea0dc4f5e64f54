//! Camp Domain Model
//!
//! Represents a code camp (conference event). A camp is addressed externally
//! by its moniker; the numeric id is internal to storage.

use chrono::NaiveDate;

use super::talk::Talk;

/// Newtype wrapper for Camp ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CampId(i32);

impl CampId {
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying integer
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for CampId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CampId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Venue location of a camp. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Data required to create a new Camp
#[derive(Debug, Clone)]
pub struct CreateCampData {
    pub moniker: String,
    pub name: String,
    pub event_date: NaiveDate,
    pub length: i32,
    pub capacity: Option<i32>,
    pub location: Location,
}

/// Data for updating an existing Camp (all fields optional for partial updates)
#[derive(Debug, Clone, Default)]
pub struct UpdateCampData {
    pub moniker: Option<String>,
    pub name: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub length: Option<i32>,
    pub capacity: Option<i32>,
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Camp domain entity
#[derive(Debug, Clone)]
pub struct Camp {
    id: CampId,
    moniker: String,
    name: String,
    event_date: NaiveDate,
    length: i32,
    capacity: Option<i32>,
    location: Location,
    talks: Vec<Talk>,
}

impl Camp {
    /// Restore a Camp from persisted data. Talks start empty; attach them
    /// with [`Camp::with_talks`] when they were loaded.
    #[must_use]
    pub fn restore(
        id: CampId,
        moniker: String,
        name: String,
        event_date: NaiveDate,
        length: i32,
        capacity: Option<i32>,
        location: Location,
    ) -> Self {
        Self {
            id,
            moniker,
            name,
            event_date,
            length,
            capacity,
            location,
            talks: Vec::new(),
        }
    }

    /// Build the persisted camp for freshly inserted creation data
    #[must_use]
    pub fn from_created(id: CampId, data: CreateCampData) -> Self {
        Self::restore(
            id,
            data.moniker,
            data.name,
            data.event_date,
            data.length,
            data.capacity,
            data.location,
        )
    }

    #[must_use]
    pub fn with_talks(self, talks: Vec<Talk>) -> Self {
        Self { talks, ..self }
    }

    /// Merge the provided fields onto the camp. Absent fields keep their
    /// current value. Loaded talks follow a moniker change.
    #[must_use]
    pub fn with_updates(self, data: UpdateCampData) -> Self {
        let location = Location {
            venue_name: data.venue_name.or(self.location.venue_name),
            address1: data.address1.or(self.location.address1),
            address2: data.address2.or(self.location.address2),
            address3: data.address3.or(self.location.address3),
            city_town: data.city_town.or(self.location.city_town),
            state_province: data.state_province.or(self.location.state_province),
            postal_code: data.postal_code.or(self.location.postal_code),
            country: data.country.or(self.location.country),
        };

        let moniker = data.moniker.unwrap_or(self.moniker);
        let talks = self
            .talks
            .into_iter()
            .map(|talk| talk.with_camp_moniker(moniker.clone()))
            .collect();

        Self {
            id: self.id,
            moniker,
            name: data.name.unwrap_or(self.name),
            event_date: data.event_date.unwrap_or(self.event_date),
            length: data.length.unwrap_or(self.length),
            capacity: data.capacity.or(self.capacity),
            location,
            talks,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> CampId {
        self.id
    }

    #[must_use]
    pub fn moniker(&self) -> &str {
        &self.moniker
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn event_date(&self) -> NaiveDate {
        self.event_date
    }

    #[must_use]
    pub fn length(&self) -> i32 {
        self.length
    }

    #[must_use]
    pub fn capacity(&self) -> Option<i32> {
        self.capacity
    }

    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[must_use]
    pub fn talks(&self) -> &[Talk] {
        &self.talks
    }
}
