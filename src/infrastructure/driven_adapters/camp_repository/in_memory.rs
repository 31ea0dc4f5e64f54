//! In-Memory Camp Repository Implementation
//!
//! Keeps camps, talks and speakers in process memory behind a tokio
//! `RwLock`. Behaves like the PostgreSQL adapter: monikers are unique,
//! ids are assigned sequentially and deleting a camp removes its talks.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::gateways::CampRepository;
use crate::domain::models::camp::{Camp, CampId, CreateCampData, Location};
use crate::domain::models::speaker::{Speaker, SpeakerId};
use crate::domain::models::talk::{CreateTalkData, NewTalk, Talk, TalkId};
use crate::shared::errors::RepositoryError;

#[derive(Debug, Default)]
struct Store {
    /// Camps are stored without their talks
    camps: Vec<Camp>,
    talks: Vec<Talk>,
    speakers: Vec<Speaker>,
    last_camp_id: i32,
    last_talk_id: i32,
}

impl Store {
    fn talks_of(&self, camp: &Camp) -> Vec<Talk> {
        self.talks
            .iter()
            .filter(|talk| talk.camp_id() == camp.id())
            .map(|talk| talk.clone().with_camp_moniker(camp.moniker().to_string()))
            .collect()
    }

    fn hydrate(&self, camp: &Camp, include_talks: bool) -> Camp {
        if include_talks {
            camp.clone().with_talks(self.talks_of(camp))
        } else {
            camp.clone()
        }
    }

    fn find_camp(&self, moniker: &str) -> Option<&Camp> {
        self.camps.iter().find(|camp| camp.moniker() == moniker)
    }

    fn insert_camp(&mut self, data: CreateCampData) -> Camp {
        self.last_camp_id += 1;
        let camp = Camp::from_created(CampId::new(self.last_camp_id), data);
        self.camps.push(camp.clone());
        camp
    }

    fn insert_talk(&mut self, new_talk: NewTalk) -> Talk {
        self.last_talk_id += 1;
        let talk = new_talk.into_talk(TalkId::new(self.last_talk_id));
        self.talks.push(talk.clone());
        talk
    }
}

/// In-memory implementation of CampRepository
#[derive(Debug, Default)]
pub struct InMemoryCampRepository {
    store: RwLock<Store>,
}

impl InMemoryCampRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that knows the given speakers and has no camps
    #[must_use]
    pub fn with_speakers(speakers: Vec<Speaker>) -> Self {
        Self {
            store: RwLock::new(Store {
                speakers,
                ..Store::default()
            }),
        }
    }

    /// Create a repository holding the same sample data the migrations seed
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Store {
            speakers: sample_speakers(),
            ..Store::default()
        };

        let camp = store.insert_camp(CreateCampData {
            moniker: "ATL2018".to_string(),
            name: "Atlanta Code Camp".to_string(),
            event_date: NaiveDate::from_ymd_opt(2018, 10, 18).unwrap_or_default(),
            length: 1,
            capacity: Some(300),
            location: Location {
                venue_name: Some("Atlanta Convention Center".to_string()),
                address1: Some("123 Main Street".to_string()),
                city_town: Some("Atlanta".to_string()),
                state_province: Some("GA".to_string()),
                postal_code: Some("12345".to_string()),
                country: Some("USA".to_string()),
                ..Location::default()
            },
        });

        let seed_talks = [
            (
                0,
                "Entity Framework From Scratch",
                "Entity Framework from scratch in an hour. Probably cover it all",
                100,
                vec!["data"],
            ),
            (
                1,
                "Writing Sample Data Made Easy",
                "Thinking of good sample data examples is tiring.",
                200,
                vec!["testing", "data"],
            ),
        ];
        for (speaker_index, title, abstract_text, level, tags) in seed_talks {
            let Some(speaker) = store.speakers.get(speaker_index).cloned() else {
                continue;
            };
            store.insert_talk(NewTalk::new(
                &camp,
                speaker,
                CreateTalkData {
                    title: title.to_string(),
                    abstract_text: abstract_text.to_string(),
                    level,
                    tags: tags.into_iter().map(str::to_string).collect(),
                    speaker_id: None,
                },
            ));
        }

        Self {
            store: RwLock::new(store),
        }
    }
}

/// Speakers known to a freshly seeded store
fn sample_speakers() -> Vec<Speaker> {
    vec![
        Speaker {
            bio: Some("Author, teacher and speaker".to_string()),
            company: Some("Wilder Minds LLC".to_string()),
            company_url: Some("http://wilderminds.com".to_string()),
            blog_url: Some("http://wildermuth.com".to_string()),
            twitter: Some("shawnwildermuth".to_string()),
            github: Some("shawnwildermuth".to_string()),
            ..Speaker::named(SpeakerId::new(1), "Shawn", "Wildermuth")
        },
        Speaker {
            bio: Some("Designer and speaker".to_string()),
            company: Some("Wilder Minds LLC".to_string()),
            company_url: Some("http://wilderminds.com".to_string()),
            blog_url: Some("http://shawnandresa.com".to_string()),
            twitter: Some("resawildermuth".to_string()),
            github: Some("resawildermuth".to_string()),
            ..Speaker::named(SpeakerId::new(2), "Resa", "Wildermuth")
        },
    ]
}

#[async_trait]
impl CampRepository for InMemoryCampRepository {
    async fn get_all_camps(&self, include_talks: bool) -> Result<Vec<Camp>, RepositoryError> {
        let store = self.store.read().await;
        let mut camps: Vec<Camp> = store
            .camps
            .iter()
            .map(|camp| store.hydrate(camp, include_talks))
            .collect();
        camps.sort_by(|a, b| {
            b.event_date()
                .cmp(&a.event_date())
                .then_with(|| a.moniker().cmp(b.moniker()))
        });
        Ok(camps)
    }

    async fn get_camp(&self, moniker: &str, include_talks: bool) -> Result<Option<Camp>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.find_camp(moniker).map(|camp| store.hydrate(camp, include_talks)))
    }

    async fn get_camps_by_event_date(
        &self,
        event_date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, RepositoryError> {
        let store = self.store.read().await;
        let mut camps: Vec<Camp> = store
            .camps
            .iter()
            .filter(|camp| camp.event_date() == event_date)
            .map(|camp| store.hydrate(camp, include_talks))
            .collect();
        camps.sort_by(|a, b| a.moniker().cmp(b.moniker()));
        Ok(camps)
    }

    async fn get_talks_by_moniker(&self, moniker: &str) -> Result<Option<Vec<Talk>>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.find_camp(moniker).map(|camp| store.talks_of(camp)))
    }

    async fn get_talk(&self, moniker: &str, talk_id: TalkId) -> Result<Option<Talk>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store
            .find_camp(moniker)
            .and_then(|camp| store.talks_of(camp).into_iter().find(|talk| talk.id() == talk_id)))
    }

    async fn get_speaker(&self, speaker_id: SpeakerId) -> Result<Option<Speaker>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.speakers.iter().find(|speaker| speaker.id == speaker_id).cloned())
    }

    async fn add_camp(&self, data: &CreateCampData) -> Result<Option<Camp>, RepositoryError> {
        let mut store = self.store.write().await;
        if store.find_camp(&data.moniker).is_some() {
            return Ok(None);
        }
        Ok(Some(store.insert_camp(data.clone())))
    }

    async fn update_camp(&self, camp: &Camp) -> Result<Option<Camp>, RepositoryError> {
        let mut store = self.store.write().await;

        let moniker_taken = store
            .camps
            .iter()
            .any(|other| other.id() != camp.id() && other.moniker() == camp.moniker());
        if moniker_taken {
            return Ok(None);
        }

        let Some(slot) = store.camps.iter_mut().find(|stored| stored.id() == camp.id()) else {
            return Ok(None);
        };
        *slot = camp.clone().with_talks(Vec::new());

        Ok(Some(camp.clone()))
    }

    async fn delete_camp(&self, camp: &Camp) -> Result<bool, RepositoryError> {
        let mut store = self.store.write().await;

        let before = store.camps.len();
        store.camps.retain(|stored| stored.id() != camp.id());
        if store.camps.len() == before {
            return Ok(false);
        }

        store.talks.retain(|talk| talk.camp_id() != camp.id());
        Ok(true)
    }

    async fn add_talk(&self, talk: &NewTalk) -> Result<Option<Talk>, RepositoryError> {
        let mut store = self.store.write().await;

        let camp_exists = store.camps.iter().any(|camp| camp.id() == talk.camp_id());
        let speaker_exists = store.speakers.iter().any(|speaker| speaker.id == talk.speaker().id);
        if !camp_exists || !speaker_exists {
            return Ok(None);
        }

        Ok(Some(store.insert_talk(talk.clone())))
    }
}
