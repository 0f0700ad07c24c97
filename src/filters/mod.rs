//! Composable player filters.
//!
//! Every constructor turns an absent argument into [`Predicate::All`], so a
//! request that supplies no filters matches every stored player.

use crate::domain::{Profession, Race};

/// Filterable player attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerField {
    Name,
    Title,
    Race,
    Profession,
    Birthday,
    Banned,
    Experience,
    Level,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Flag(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    All,
    /// Case-sensitive substring match
    Contains(PlayerField, String),
    Equals(PlayerField, FilterValue),
    AtLeast(PlayerField, i64),
    AtMost(PlayerField, i64),
    /// Inclusive on both ends
    Between(PlayerField, i64, i64),
    And(Vec<Predicate>),
}

impl Predicate {
    pub fn and(self, other: Predicate) -> Predicate {
        match (self, other) {
            (Predicate::All, p) | (p, Predicate::All) => p,
            (Predicate::And(mut left), Predicate::And(right)) => {
                left.extend(right);
                Predicate::And(left)
            }
            (Predicate::And(mut left), p) => {
                left.push(p);
                Predicate::And(left)
            }
            (p, Predicate::And(mut right)) => {
                right.insert(0, p);
                Predicate::And(right)
            }
            (left, right) => Predicate::And(vec![left, right]),
        }
    }

    pub fn all_of(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
        predicates.into_iter().fold(Predicate::All, Predicate::and)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Predicate::All)
    }
}

pub fn by_name(name: Option<&str>) -> Predicate {
    contains(PlayerField::Name, name)
}

pub fn by_title(title: Option<&str>) -> Predicate {
    contains(PlayerField::Title, title)
}

pub fn by_race(race: Option<Race>) -> Predicate {
    race.map_or(Predicate::All, |race| {
        Predicate::Equals(PlayerField::Race, FilterValue::Text(race.as_str().to_string()))
    })
}

pub fn by_profession(profession: Option<Profession>) -> Predicate {
    profession.map_or(Predicate::All, |profession| {
        Predicate::Equals(
            PlayerField::Profession,
            FilterValue::Text(profession.as_str().to_string()),
        )
    })
}

pub fn by_banned(banned: Option<bool>) -> Predicate {
    banned.map_or(Predicate::All, |banned| {
        Predicate::Equals(PlayerField::Banned, FilterValue::Flag(banned))
    })
}

/// Bounds are epoch milliseconds.
pub fn by_birthday(after: Option<i64>, before: Option<i64>) -> Predicate {
    range(PlayerField::Birthday, after, before)
}

pub fn by_experience(min: Option<i32>, max: Option<i32>) -> Predicate {
    range(PlayerField::Experience, min.map(i64::from), max.map(i64::from))
}

pub fn by_level(min: Option<i32>, max: Option<i32>) -> Predicate {
    range(PlayerField::Level, min.map(i64::from), max.map(i64::from))
}

fn contains(field: PlayerField, needle: Option<&str>) -> Predicate {
    needle.map_or(Predicate::All, |needle| {
        Predicate::Contains(field, needle.to_string())
    })
}

fn range(field: PlayerField, min: Option<i64>, max: Option<i64>) -> Predicate {
    match (min, max) {
        (None, None) => Predicate::All,
        (Some(min), None) => Predicate::AtLeast(field, min),
        (None, Some(max)) => Predicate::AtMost(field, max),
        (Some(min), Some(max)) => Predicate::Between(field, min, max),
    }
}

/// Optional filters accepted by the list and count operations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFilter {
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
}

impl PlayerFilter {
    /// ANDs together every supplied filter.
    pub fn predicate(&self) -> Predicate {
        Predicate::all_of([
            by_name(self.name.as_deref()),
            by_title(self.title.as_deref()),
            by_race(self.race),
            by_profession(self.profession),
            by_birthday(self.after, self.before),
            by_banned(self.banned),
            by_experience(self.min_experience, self.max_experience),
            by_level(self.min_level, self.max_level),
        ])
    }
}
