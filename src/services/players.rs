use log::{debug, info};
use std::sync::Arc;

use crate::database::PlayerRepository;
use crate::domain::validation::{complete, validate};
use crate::domain::{Player, PlayerPatch};
use crate::errors::{ServiceError, ServiceResult};
use crate::filters::Predicate;
use crate::pagination::PageRequest;

const NOT_FOUND: &str = "The player is not found.";

/// Create/read/update/delete/list operations over stored players
#[derive(Clone)]
pub struct PlayerService {
    repository: Arc<dyn PlayerRepository>,
}

impl PlayerService {
    pub fn new(repository: Arc<dyn PlayerRepository>) -> Self {
        Self { repository }
    }

    pub fn list(
        &self,
        predicate: &Predicate,
        page: Option<&PageRequest>,
    ) -> ServiceResult<Vec<Player>> {
        let players = self.repository.find_all(predicate, page)?;
        debug!("Listed {} players (page: {:?})", players.len(), page);
        Ok(players)
    }

    pub fn count(&self, predicate: &Predicate) -> ServiceResult<u64> {
        Ok(self.repository.count(predicate)?)
    }

    pub fn create(&self, request: PlayerPatch) -> ServiceResult<Player> {
        let new_player = complete(request)?;
        let player = self.repository.insert(&new_player)?;
        info!("Created player {} ({})", player.id, player.name);
        Ok(player)
    }

    pub fn get(&self, id: i64) -> ServiceResult<Player> {
        self.repository
            .find_by_id(id)?
            .ok_or_else(|| ServiceError::not_found(NOT_FOUND))
    }

    /// Applies the supplied fields onto the stored player.
    pub fn update(&self, id: i64, patch: PlayerPatch) -> ServiceResult<Player> {
        validate(&patch)?;

        let mut player = self.get(id)?;
        player.apply(patch);

        let saved = self
            .repository
            .save(&player)?
            .ok_or_else(|| ServiceError::not_found(NOT_FOUND))?;
        info!("Updated player {}", saved.id);
        Ok(saved)
    }

    pub fn delete(&self, id: i64) -> ServiceResult<()> {
        if !self.repository.delete_by_id(id)? {
            return Err(ServiceError::not_found(
                "The player cannot be found to be deleted",
            ));
        }
        info!("Deleted player {}", id);
        Ok(())
    }
}

/// Parses a path id. Rejects missing, empty, zero, negative and
/// non-numeric input.
pub fn check_and_parse_id(id: Option<&str>) -> ServiceResult<i64> {
    let id = match id {
        None | Some("") | Some("0") => return Err(ServiceError::bad_request("Incorrect ID")),
        Some(id) => id,
    };

    let parsed: i64 = id
        .parse()
        .map_err(|_| ServiceError::bad_request("ID is not a number"))?;

    if parsed <= 0 {
        return Err(ServiceError::bad_request("Incorrect ID"));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::AppConfig;
    use crate::database::{self, SqlitePlayerRepository};
    use crate::domain::{Profession, Race};
    use crate::filters::{by_experience, PlayerFilter};
    use crate::pagination::PlayerOrder;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn service() -> (PlayerService, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.db");
        let config = AppConfig::new().with_database_path(path.to_str().unwrap());
        let pool = database::create_pool(&config.database).unwrap();
        database::setup::ensure_schema(&mut database::get_connection(&pool).unwrap()).unwrap();
        let service = PlayerService::new(Arc::new(SqlitePlayerRepository::new(pool)));
        (service, dir)
    }

    fn request(name: &str, experience: i32) -> PlayerPatch {
        PlayerPatch {
            name: Some(name.to_string()),
            title: Some("Mage".to_string()),
            race: Some(Race::Elf),
            profession: Some(Profession::Mage),
            birthday: Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
            banned: None,
            experience: Some(experience),
        }
    }

    #[test]
    fn test_check_and_parse_id() {
        for bad in [None, Some(""), Some("0"), Some("abc"), Some("-3"), Some("1.5")] {
            assert!(
                matches!(check_and_parse_id(bad), Err(ServiceError::BadRequest(_))),
                "id {bad:?}"
            );
        }
        assert_eq!(check_and_parse_id(Some("42")).unwrap(), 42);
    }

    #[test]
    fn test_create_derives_fields_and_assigns_id() {
        let (service, _dir) = service();

        let player = service.create(request("Aria", 0)).unwrap();

        assert!(player.id > 0);
        assert_eq!(player.level, 0);
        assert_eq!(player.until_next_level, 100);
        assert!(!player.banned);
        assert_eq!(service.get(player.id).unwrap(), player);
    }

    #[test]
    fn test_create_name_length_bounds() {
        let (service, _dir) = service();

        assert!(service.create(request("a", 0)).is_ok());
        assert!(service.create(request("abcdefghijkl", 0)).is_ok());
        assert!(matches!(
            service.create(request("", 0)),
            Err(ServiceError::BadRequest(_))
        ));
        assert!(matches!(
            service.create(request("abcdefghijklm", 0)),
            Err(ServiceError::BadRequest(_))
        ));
    }

    #[test]
    fn test_create_birthday_year_bounds() {
        let (service, _dir) = service();

        for (year, ok) in [(1999, false), (2000, true), (3000, true), (3001, false)] {
            let patch = PlayerPatch {
                birthday: Some(Utc.with_ymd_and_hms(year, 3, 1, 0, 0, 0).unwrap()),
                ..request("Year", 10)
            };
            assert_eq!(service.create(patch).is_ok(), ok, "year {year}");
        }
    }

    #[test]
    fn test_create_missing_field_is_bad_request() {
        let (service, _dir) = service();
        let patch = PlayerPatch {
            race: None,
            ..request("Aria", 0)
        };

        assert!(matches!(service.create(patch), Err(ServiceError::BadRequest(_))));
        assert_eq!(service.count(&Predicate::All).unwrap(), 0);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let (service, _dir) = service();
        assert!(matches!(service.get(99), Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn test_update_banned_only_keeps_other_fields() {
        let (service, _dir) = service();
        let created = service.create(request("Aria", 1500)).unwrap();

        let updated = service
            .update(
                created.id,
                PlayerPatch {
                    banned: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(updated.banned);
        assert_eq!(
            Player {
                banned: false,
                ..updated.clone()
            },
            created
        );
        assert_eq!(service.get(created.id).unwrap(), updated);
    }

    #[test]
    fn test_update_experience_recomputes_level() {
        let (service, _dir) = service();
        let created = service.create(request("Aria", 0)).unwrap();

        let updated = service
            .update(
                created.id,
                PlayerPatch {
                    experience: Some(300),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.level, 2);
        assert_eq!(updated.until_next_level, 300);
    }

    #[test]
    fn test_update_errors() {
        let (service, _dir) = service();
        let created = service.create(request("Aria", 0)).unwrap();

        assert!(matches!(
            service.update(404, PlayerPatch::default()),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            service.update(
                created.id,
                PlayerPatch {
                    experience: Some(-1),
                    ..Default::default()
                }
            ),
            Err(ServiceError::BadRequest(_))
        ));
        assert_eq!(service.get(created.id).unwrap(), created);
    }

    #[test]
    fn test_delete() {
        let (service, _dir) = service();
        let created = service.create(request("Aria", 0)).unwrap();

        service.delete(created.id).unwrap();

        assert!(matches!(service.get(created.id), Err(ServiceError::NotFound(_))));
        assert!(matches!(service.delete(created.id), Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn test_list_without_filters_returns_everything() {
        let (service, _dir) = service();
        for (idx, name) in ["Aria", "Borin", "Cael"].iter().enumerate() {
            service.create(request(name, idx as i32 * 100)).unwrap();
        }

        let all = service.list(&PlayerFilter::default().predicate(), None).unwrap();

        assert_eq!(all.len(), 3);
        assert_eq!(service.count(&Predicate::All).unwrap(), 3);
    }

    #[test]
    fn test_list_experience_lower_bound() {
        let (service, _dir) = service();
        for (name, experience) in [("Low", 50), ("Edge", 100), ("High", 5000)] {
            service.create(request(name, experience)).unwrap();
        }

        let players = service.list(&by_experience(Some(100), None), None).unwrap();

        let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Edge", "High"]);
    }

    #[test]
    fn test_list_name_filter_is_case_sensitive() {
        let (service, _dir) = service();
        service.create(request("Aria", 0)).unwrap();
        service.create(request("maria", 0)).unwrap();

        let filter = PlayerFilter {
            name: Some("ria".to_string()),
            ..Default::default()
        };
        assert_eq!(service.count(&filter.predicate()).unwrap(), 2);

        let filter = PlayerFilter {
            name: Some("Ar".to_string()),
            ..Default::default()
        };
        let players = service.list(&filter.predicate(), None).unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "Aria");
    }

    #[test]
    fn test_list_pagination_by_name() {
        let (service, _dir) = service();
        for name in ["Eve", "Cid", "Ann", "Dan", "Bob"] {
            service.create(request(name, 0)).unwrap();
        }

        let page = PageRequest::new(1, 2).with_order(PlayerOrder::Name);
        let players = service.list(&Predicate::All, Some(&page)).unwrap();

        let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Cid", "Dan"]);
    }

    #[test]
    fn test_list_far_past_the_end_is_empty() {
        let (service, _dir) = service();
        service.create(request("Aria", 0)).unwrap();

        let page = PageRequest::new(usize::MAX / 3, 3);
        assert!(service.list(&Predicate::All, Some(&page)).unwrap().is_empty());

        let page = PageRequest::new(usize::MAX, usize::MAX);
        assert!(service.list(&Predicate::All, Some(&page)).unwrap().is_empty());

        let page = PageRequest::new(0, usize::MAX);
        assert_eq!(service.list(&Predicate::All, Some(&page)).unwrap().len(), 1);
    }

    #[test]
    fn test_birthday_range_includes_both_bounds() {
        let (service, _dir) = service();
        let after = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let millisecond = chrono::Duration::milliseconds(1);

        for (name, birthday) in [
            ("TooEarly", after - millisecond),
            ("AtAfter", after),
            ("AtBefore", before),
            ("TooLate", before + millisecond),
        ] {
            let patch = PlayerPatch {
                birthday: Some(birthday),
                ..request(name, 0)
            };
            service.create(patch).unwrap();
        }

        let names = |filter: PlayerFilter| -> Vec<String> {
            service
                .list(&filter.predicate(), None)
                .unwrap()
                .into_iter()
                .map(|p| p.name)
                .collect()
        };

        let both = PlayerFilter {
            after: Some(after.timestamp_millis()),
            before: Some(before.timestamp_millis()),
            ..Default::default()
        };
        assert_eq!(names(both), vec!["AtAfter", "AtBefore"]);

        let lower_only = PlayerFilter {
            after: Some(after.timestamp_millis()),
            ..Default::default()
        };
        assert_eq!(names(lower_only), vec!["AtAfter", "AtBefore", "TooLate"]);

        let upper_only = PlayerFilter {
            before: Some(before.timestamp_millis()),
            ..Default::default()
        };
        assert_eq!(names(upper_only), vec!["TooEarly", "AtAfter", "AtBefore"]);
    }

    #[test]
    fn test_title_profession_and_banned_filters() {
        let (service, _dir) = service();
        for (name, title, profession, banned) in [
            ("Aria", "Archmage of Dawn", Profession::Mage, false),
            ("Borin", "Shield of the North", Profession::Warrior, true),
            ("Cael", "archmage", Profession::Druid, false),
        ] {
            let patch = PlayerPatch {
                title: Some(title.to_string()),
                profession: Some(profession),
                banned: Some(banned),
                ..request(name, 0)
            };
            service.create(patch).unwrap();
        }

        let names = |filter: PlayerFilter| -> Vec<String> {
            service
                .list(&filter.predicate(), None)
                .unwrap()
                .into_iter()
                .map(|p| p.name)
                .collect()
        };

        let title = PlayerFilter {
            title: Some("Archmage".to_string()),
            ..Default::default()
        };
        assert_eq!(names(title), vec!["Aria"]);

        let profession = PlayerFilter {
            profession: Some(Profession::Warrior),
            ..Default::default()
        };
        assert_eq!(names(profession), vec!["Borin"]);

        let not_banned = PlayerFilter {
            banned: Some(false),
            ..Default::default()
        };
        assert_eq!(names(not_banned), vec!["Aria", "Cael"]);

        let banned = PlayerFilter {
            banned: Some(true),
            ..Default::default()
        };
        assert_eq!(names(banned), vec!["Borin"]);

        let combined = PlayerFilter {
            title: Some("of".to_string()),
            banned: Some(false),
            ..Default::default()
        };
        assert_eq!(names(combined), vec!["Aria"]);
    }
}
