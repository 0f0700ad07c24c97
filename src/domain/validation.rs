use chrono::Datelike;

use super::player::{NewPlayer, PlayerPatch};
use super::progression::Progress;
use crate::errors::{ServiceError, ServiceResult};

pub const NAME_LENGTH: (usize, usize) = (1, 12);
pub const TITLE_LENGTH: (usize, usize) = (1, 30);
pub const MIN_EXPERIENCE: i32 = 0;
pub const MAX_EXPERIENCE: i32 = 10_000_000;
pub const BIRTH_YEARS: (i32, i32) = (2000, 3000);

/// Checks every supplied field of the patch. Absent fields pass.
pub fn validate(patch: &PlayerPatch) -> ServiceResult<()> {
    if let Some(name) = &patch.name {
        check_length(name, NAME_LENGTH, "Incorrect name")?;
    }

    if let Some(title) = &patch.title {
        check_length(title, TITLE_LENGTH, "Incorrect title")?;
    }

    if let Some(experience) = patch.experience {
        if !(MIN_EXPERIENCE..=MAX_EXPERIENCE).contains(&experience) {
            return Err(ServiceError::bad_request("Incorrect experience"));
        }
    }

    if let Some(birthday) = patch.birthday {
        let (first, last) = BIRTH_YEARS;
        if !(first..=last).contains(&birthday.year()) {
            return Err(ServiceError::bad_request("Incorrect birthday"));
        }
    }

    Ok(())
}

/// Turns a creation request into a storable player: every required field
/// must be present, values must be valid, `banned` defaults to false.
pub fn complete(patch: PlayerPatch) -> ServiceResult<NewPlayer> {
    validate(&patch)?;

    let PlayerPatch {
        name: Some(name),
        title: Some(title),
        race: Some(race),
        profession: Some(profession),
        birthday: Some(birthday),
        banned,
        experience: Some(experience),
    } = patch
    else {
        return Err(ServiceError::bad_request(
            "The player cannot be created. One of the parameters is null.",
        ));
    };

    let progress = Progress::from_experience(experience);

    Ok(NewPlayer {
        name,
        title,
        race,
        profession,
        birthday,
        banned: banned.unwrap_or(false),
        experience,
        level: progress.level,
        until_next_level: progress.until_next_level,
    })
}

fn check_length(value: &str, (min, max): (usize, usize), message: &str) -> ServiceResult<()> {
    let length = value.chars().count();
    if length < min || length > max {
        return Err(ServiceError::bad_request(message));
    }
    Ok(())
}
