use anyhow::{Context, Result};
use chrono::DateTime;
use rusqlite::{params, params_from_iter, OptionalExtension};

use super::connection::{get_connection, DbConn, DbPool};
use super::query::{order_column, WhereClause};
use super::repository::PlayerRepository;
use crate::domain::{NewPlayer, Player};
use crate::filters::Predicate;
use crate::pagination::PageRequest;

const COLUMNS: &str =
    "id, name, title, race, profession, birthday, banned, experience, level, until_next_level";

pub fn insert_player(conn: &mut DbConn, player: &NewPlayer) -> Result<Player> {
    let sql = format!(
        "INSERT INTO players (name, title, race, profession, birthday, banned, experience, level, until_next_level) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9) RETURNING {COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            player.name,
            player.title,
            player.race,
            player.profession,
            player.birthday.timestamp_millis(),
            player.banned,
            player.experience,
            player.level,
            player.until_next_level
        ],
        parse_player_row,
    )
    .context("Failed to insert new player")
}

pub fn update_player(conn: &mut DbConn, player: &Player) -> Result<Option<Player>> {
    let sql = format!(
        "UPDATE players SET name = ?1, title = ?2, race = ?3, profession = ?4, birthday = ?5, \
         banned = ?6, experience = ?7, level = ?8, until_next_level = ?9 \
         WHERE id = ?10 RETURNING {COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            player.name,
            player.title,
            player.race,
            player.profession,
            player.birthday.timestamp_millis(),
            player.banned,
            player.experience,
            player.level,
            player.until_next_level,
            player.id
        ],
        parse_player_row,
    )
    .optional()
    .with_context(|| format!("Failed to update player {}", player.id))
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Player>> {
    let sql = format!("SELECT {COLUMNS} FROM players WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn delete_by_id(conn: &mut DbConn, id: i64) -> Result<bool> {
    let removed = conn
        .execute("DELETE FROM players WHERE id = ?1", params![id])
        .with_context(|| format!("Failed to delete player {}", id))?;
    Ok(removed > 0)
}

pub fn list_matching(
    conn: &mut DbConn,
    predicate: &Predicate,
    page: Option<&PageRequest>,
) -> Result<Vec<Player>> {
    let clause = WhereClause::from_predicate(predicate);
    let mut sql = format!("SELECT {COLUMNS} FROM players WHERE {}", clause.sql);
    let mut params = clause.params;

    match page {
        Some(page) => {
            sql.push_str(&format!(" ORDER BY {}, id LIMIT ? OFFSET ?", order_column(page.order)));
            // SQLite reads a negative OFFSET as 0
            let limit = i64::try_from(page.page_size).unwrap_or(i64::MAX);
            let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
            params.push(rusqlite::types::Value::Integer(limit));
            params.push(rusqlite::types::Value::Integer(offset));
        }
        None => sql.push_str(" ORDER BY id"),
    }

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(params.iter()), parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list players")?;

    Ok(rows)
}

pub fn count_matching(conn: &mut DbConn, predicate: &Predicate) -> Result<u64> {
    let clause = WhereClause::from_predicate(predicate);
    let sql = format!("SELECT COUNT(*) FROM players WHERE {}", clause.sql);

    let count: i64 = conn
        .query_row(&sql, params_from_iter(clause.params.iter()), |row| row.get(0))
        .context("Failed to count players")?;
    Ok(count as u64)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    let birthday_ms: i64 = row.get(5)?;
    let birthday = DateTime::from_timestamp_millis(birthday_ms)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(5, birthday_ms))?;

    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        title: row.get(2)?,
        race: row.get(3)?,
        profession: row.get(4)?,
        birthday,
        banned: row.get(6)?,
        experience: row.get(7)?,
        level: row.get(8)?,
        until_next_level: row.get(9)?,
    })
}

/// [`PlayerRepository`] backed by a pooled SQLite database
#[derive(Clone)]
pub struct SqlitePlayerRepository {
    pool: DbPool,
}

impl SqlitePlayerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn connection(&self) -> Result<DbConn> {
        get_connection(&self.pool)
    }
}

impl PlayerRepository for SqlitePlayerRepository {
    fn insert(&self, player: &NewPlayer) -> Result<Player> {
        insert_player(&mut self.connection()?, player)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Player>> {
        find_by_id(&mut self.connection()?, id)
    }

    fn save(&self, player: &Player) -> Result<Option<Player>> {
        update_player(&mut self.connection()?, player)
    }

    fn delete_by_id(&self, id: i64) -> Result<bool> {
        delete_by_id(&mut self.connection()?, id)
    }

    fn find_all(&self, predicate: &Predicate, page: Option<&PageRequest>) -> Result<Vec<Player>> {
        list_matching(&mut self.connection()?, predicate, page)
    }

    fn count(&self, predicate: &Predicate) -> Result<u64> {
        count_matching(&mut self.connection()?, predicate)
    }
}
