use serde::Deserialize;

use crate::config::settings::AppConfig;
use crate::domain::{Profession, Race};
use crate::filters::PlayerFilter;
use crate::pagination::{PageRequest, PlayerOrder};
use crate::services::players::PlayerService;

pub mod players;

pub struct AppState {
    pub service: PlayerService,
    pub config: AppConfig,
}

/// Query string of the list and count endpoints
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerParams {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub after: Option<i64>,
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
    pub order: Option<PlayerOrder>,
    pub page_number: Option<usize>,
    pub page_size: Option<usize>,
}

impl PlayerParams {
    pub fn filter(&self) -> PlayerFilter {
        PlayerFilter {
            name: self.name.clone(),
            title: self.title.clone(),
            race: self.race,
            profession: self.profession,
            after: self.after,
            before: self.before,
            banned: self.banned,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            min_level: self.min_level,
            max_level: self.max_level,
        }
    }

    pub fn page(&self, config: &AppConfig) -> PageRequest {
        let settings = &config.pagination;
        let page_size = self
            .page_size
            .unwrap_or(settings.default_page_size)
            .clamp(1, settings.max_page_size);

        PageRequest::new(self.page_number.unwrap_or(0), page_size)
            .with_order(self.order.unwrap_or_default())
    }
}
