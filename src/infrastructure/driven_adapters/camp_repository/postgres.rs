//! PostgreSQL Camp Repository Implementation
//!
//! Implements the CampRepository trait using SQLx for PostgreSQL.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::gateways::CampRepository;
use crate::domain::models::camp::{Camp, CampId, CreateCampData, Location};
use crate::domain::models::speaker::{Speaker, SpeakerId};
use crate::domain::models::talk::{NewTalk, Talk, TalkId};
use crate::shared::errors::RepositoryError;

const CAMP_SELECT: &str = r#"
    SELECT id, moniker, name, event_date, length, capacity,
           venue_name, address1, address2, address3,
           city_town, state_province, postal_code, country
    FROM camps
"#;

const TALK_SELECT: &str = r#"
    SELECT t.id, t.camp_id, c.moniker AS camp_moniker, t.title,
           t.abstract AS abstract_text, t.level, t.tags,
           s.id AS speaker_id, s.first_name, s.middle_name, s.last_name,
           s.bio, s.company, s.company_url, s.blog_url, s.twitter, s.github
    FROM talks t
    JOIN camps c ON c.id = t.camp_id
    JOIN speakers s ON s.id = t.speaker_id
"#;

/// Database row representation for camps table
#[derive(Debug, sqlx::FromRow)]
struct CampRow {
    id: i32,
    moniker: String,
    name: String,
    event_date: NaiveDate,
    length: i32,
    capacity: Option<i32>,
    venue_name: Option<String>,
    address1: Option<String>,
    address2: Option<String>,
    address3: Option<String>,
    city_town: Option<String>,
    state_province: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

impl From<CampRow> for Camp {
    fn from(row: CampRow) -> Self {
        Camp::restore(
            CampId::new(row.id),
            row.moniker,
            row.name,
            row.event_date,
            row.length,
            row.capacity,
            Location {
                venue_name: row.venue_name,
                address1: row.address1,
                address2: row.address2,
                address3: row.address3,
                city_town: row.city_town,
                state_province: row.state_province,
                postal_code: row.postal_code,
                country: row.country,
            },
        )
    }
}

/// Database row representation for speakers table
#[derive(Debug, sqlx::FromRow)]
struct SpeakerRow {
    id: i32,
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
    bio: Option<String>,
    company: Option<String>,
    company_url: Option<String>,
    blog_url: Option<String>,
    twitter: Option<String>,
    github: Option<String>,
}

impl From<SpeakerRow> for Speaker {
    fn from(row: SpeakerRow) -> Self {
        Speaker {
            id: SpeakerId::new(row.id),
            first_name: row.first_name,
            middle_name: row.middle_name,
            last_name: row.last_name,
            bio: row.bio,
            company: row.company,
            company_url: row.company_url,
            blog_url: row.blog_url,
            twitter: row.twitter,
            github: row.github,
        }
    }
}

/// A talk joined with its camp moniker and speaker
#[derive(Debug, sqlx::FromRow)]
struct TalkRow {
    id: i32,
    camp_id: i32,
    camp_moniker: String,
    title: String,
    abstract_text: String,
    level: i32,
    tags: serde_json::Value,
    speaker_id: i32,
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
    bio: Option<String>,
    company: Option<String>,
    company_url: Option<String>,
    blog_url: Option<String>,
    twitter: Option<String>,
    github: Option<String>,
}

impl TryFrom<TalkRow> for Talk {
    type Error = RepositoryError;

    fn try_from(row: TalkRow) -> Result<Self, Self::Error> {
        let tags: Vec<String> = serde_json::from_value(row.tags)
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse tags: {}", e)))?;

        let speaker = Speaker {
            id: SpeakerId::new(row.speaker_id),
            first_name: row.first_name,
            middle_name: row.middle_name,
            last_name: row.last_name,
            bio: row.bio,
            company: row.company,
            company_url: row.company_url,
            blog_url: row.blog_url,
            twitter: row.twitter,
            github: row.github,
        };

        Ok(Talk::restore(
            TalkId::new(row.id),
            CampId::new(row.camp_id),
            row.camp_moniker,
            speaker,
            row.title,
            row.abstract_text,
            row.level,
            tags,
        ))
    }
}

/// PostgreSQL implementation of CampRepository
pub struct PostgresCampRepository {
    pool: PgPool,
}

impl PostgresCampRepository {
    /// Create a new PostgresCampRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the talks of all given camps in one query and attach them
    async fn attach_talks(&self, camps: Vec<Camp>) -> Result<Vec<Camp>, RepositoryError> {
        if camps.is_empty() {
            return Ok(camps);
        }

        let camp_ids: Vec<i32> = camps.iter().map(|camp| camp.id().value()).collect();
        let rows = sqlx::query_as::<_, TalkRow>(&format!("{TALK_SELECT} WHERE t.camp_id = ANY($1) ORDER BY t.id"))
            .bind(camp_ids)
            .fetch_all(&self.pool)
            .await?;

        let mut talks_by_camp: HashMap<CampId, Vec<Talk>> = HashMap::new();
        for row in rows {
            let talk = Talk::try_from(row)?;
            talks_by_camp.entry(talk.camp_id()).or_default().push(talk);
        }

        Ok(camps
            .into_iter()
            .map(|camp| {
                let talks = talks_by_camp.remove(&camp.id()).unwrap_or_default();
                camp.with_talks(talks)
            })
            .collect())
    }

    async fn finish_camps(&self, rows: Vec<CampRow>, include_talks: bool) -> Result<Vec<Camp>, RepositoryError> {
        let camps: Vec<Camp> = rows.into_iter().map(Camp::from).collect();
        if include_talks {
            self.attach_talks(camps).await
        } else {
            Ok(camps)
        }
    }
}

#[async_trait]
impl CampRepository for PostgresCampRepository {
    async fn get_all_camps(&self, include_talks: bool) -> Result<Vec<Camp>, RepositoryError> {
        let rows = sqlx::query_as::<_, CampRow>(&format!("{CAMP_SELECT} ORDER BY event_date DESC, moniker ASC"))
            .fetch_all(&self.pool)
            .await?;

        self.finish_camps(rows, include_talks).await
    }

    async fn get_camp(&self, moniker: &str, include_talks: bool) -> Result<Option<Camp>, RepositoryError> {
        let row = sqlx::query_as::<_, CampRow>(&format!("{CAMP_SELECT} WHERE moniker = $1"))
            .bind(moniker)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        Ok(self.finish_camps(vec![row], include_talks).await?.pop())
    }

    async fn get_camps_by_event_date(
        &self,
        event_date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, RepositoryError> {
        let rows = sqlx::query_as::<_, CampRow>(&format!("{CAMP_SELECT} WHERE event_date = $1 ORDER BY moniker ASC"))
            .bind(event_date)
            .fetch_all(&self.pool)
            .await?;

        self.finish_camps(rows, include_talks).await
    }

    async fn get_talks_by_moniker(&self, moniker: &str) -> Result<Option<Vec<Talk>>, RepositoryError> {
        let camp_id = sqlx::query_scalar::<_, i32>("SELECT id FROM camps WHERE moniker = $1")
            .bind(moniker)
            .fetch_optional(&self.pool)
            .await?;

        let Some(camp_id) = camp_id else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, TalkRow>(&format!("{TALK_SELECT} WHERE t.camp_id = $1 ORDER BY t.id"))
            .bind(camp_id)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(Talk::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    async fn get_talk(&self, moniker: &str, talk_id: TalkId) -> Result<Option<Talk>, RepositoryError> {
        let row = sqlx::query_as::<_, TalkRow>(&format!("{TALK_SELECT} WHERE c.moniker = $1 AND t.id = $2"))
            .bind(moniker)
            .bind(talk_id.value())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Talk::try_from).transpose()
    }

    async fn get_speaker(&self, speaker_id: SpeakerId) -> Result<Option<Speaker>, RepositoryError> {
        let row = sqlx::query_as::<_, SpeakerRow>(
            r#"
            SELECT id, first_name, middle_name, last_name, bio, company,
                   company_url, blog_url, twitter, github
            FROM speakers
            WHERE id = $1
            "#,
        )
        .bind(speaker_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Speaker::from))
    }

    async fn add_camp(&self, data: &CreateCampData) -> Result<Option<Camp>, RepositoryError> {
        // A taken moniker inserts nothing instead of failing
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO camps (
                moniker, name, event_date, length, capacity,
                venue_name, address1, address2, address3,
                city_town, state_province, postal_code, country
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (moniker) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(&data.moniker)
        .bind(&data.name)
        .bind(data.event_date)
        .bind(data.length)
        .bind(data.capacity)
        .bind(&data.location.venue_name)
        .bind(&data.location.address1)
        .bind(&data.location.address2)
        .bind(&data.location.address3)
        .bind(&data.location.city_town)
        .bind(&data.location.state_province)
        .bind(&data.location.postal_code)
        .bind(&data.location.country)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id.map(|id| Camp::from_created(CampId::new(id), data.clone())))
    }

    async fn update_camp(&self, camp: &Camp) -> Result<Option<Camp>, RepositoryError> {
        let location = camp.location();
        let result = sqlx::query_as::<_, CampRow>(
            r#"
            UPDATE camps
            SET moniker = $2,
                name = $3,
                event_date = $4,
                length = $5,
                capacity = $6,
                venue_name = $7,
                address1 = $8,
                address2 = $9,
                address3 = $10,
                city_town = $11,
                state_province = $12,
                postal_code = $13,
                country = $14
            WHERE id = $1
            RETURNING id, moniker, name, event_date, length, capacity,
                      venue_name, address1, address2, address3,
                      city_town, state_province, postal_code, country
            "#,
        )
        .bind(camp.id().value())
        .bind(camp.moniker())
        .bind(camp.name())
        .bind(camp.event_date())
        .bind(camp.length())
        .bind(camp.capacity())
        .bind(&location.venue_name)
        .bind(&location.address1)
        .bind(&location.address2)
        .bind(&location.address3)
        .bind(&location.city_town)
        .bind(&location.state_province)
        .bind(&location.postal_code)
        .bind(&location.country)
        .fetch_optional(&self.pool)
        .await;

        let row = match result {
            Ok(row) => row,
            Err(sqlx::Error::Database(db_error)) if db_error.is_unique_violation() => {
                tracing::warn!(moniker = camp.moniker(), "Moniker already taken by another camp");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(row.map(|row| Camp::from(row).with_talks(camp.talks().to_vec())))
    }

    async fn delete_camp(&self, camp: &Camp) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM camps WHERE id = $1")
            .bind(camp.id().value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn add_talk(&self, talk: &NewTalk) -> Result<Option<Talk>, RepositoryError> {
        let tags_json = serde_json::to_value(talk.tags())
            .map_err(|e| RepositoryError::Mapping(format!("Failed to serialize tags: {}", e)))?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO talks (camp_id, speaker_id, title, abstract, level, tags)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(talk.camp_id().value())
        .bind(talk.speaker().id.value())
        .bind(talk.title())
        .bind(talk.abstract_text())
        .bind(talk.level())
        .bind(&tags_json)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id.map(|id| talk.clone().into_talk(TalkId::new(id))))
    }
}
