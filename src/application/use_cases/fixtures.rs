//! Test fixtures shared by the use case tests

use chrono::NaiveDate;

use crate::domain::models::camp::{Camp, CampId, CreateCampData, Location};
use crate::domain::models::speaker::{Speaker, SpeakerId};
use crate::domain::models::talk::{Talk, TalkId};

pub(crate) fn event_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
}

pub(crate) fn create_camp_data(moniker: &str) -> CreateCampData {
    CreateCampData {
        moniker: moniker.to_string(),
        name: "Atlanta Code Camp".to_string(),
        event_date: event_date(),
        length: 1,
        capacity: Some(250),
        location: Location {
            venue_name: Some("Atlanta Convention Center".to_string()),
            city_town: Some("Atlanta".to_string()),
            ..Location::default()
        },
    }
}

pub(crate) fn camp(id: i32, moniker: &str) -> Camp {
    Camp::from_created(CampId::new(id), create_camp_data(moniker))
}

pub(crate) fn speaker(id: i32) -> Speaker {
    Speaker::named(SpeakerId::new(id), "Shawn", "Wildermuth")
}

pub(crate) fn talk(id: i32, camp: &Camp) -> Talk {
    Talk::restore(
        TalkId::new(id),
        camp.id(),
        camp.moniker().to_string(),
        speaker(1),
        "Entity Framework From Scratch".to_string(),
        "Working with Entity Framework from the ground up".to_string(),
        100,
        vec!["data".to_string()],
    )
}
