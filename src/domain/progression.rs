/// Level and the experience still missing to reach the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub level: i32,
    pub until_next_level: i32,
}

impl Progress {
    pub fn from_experience(experience: i32) -> Self {
        let level = compute_level(experience);
        Self {
            level,
            until_next_level: compute_until_next_level(level, experience),
        }
    }
}

/// `floor((sqrt(2500 + 200 * experience) - 50) / 100)`
pub fn compute_level(experience: i32) -> i32 {
    let radicand = 2500 + 200 * i64::from(experience);
    let root = (radicand as f64).sqrt();
    ((root - 50.0) / 100.0).trunc() as i32
}

pub fn compute_until_next_level(level: i32, experience: i32) -> i32 {
    let level = i64::from(level);
    (50 * (level + 1) * (level + 2) - i64::from(experience)) as i32
}
