use rusqlite::types::Value;

use crate::filters::{FilterValue, PlayerField, Predicate};
use crate::pagination::PlayerOrder;

pub fn column(field: PlayerField) -> &'static str {
    match field {
        PlayerField::Name => "name",
        PlayerField::Title => "title",
        PlayerField::Race => "race",
        PlayerField::Profession => "profession",
        PlayerField::Birthday => "birthday",
        PlayerField::Banned => "banned",
        PlayerField::Experience => "experience",
        PlayerField::Level => "level",
    }
}

pub fn order_column(order: PlayerOrder) -> &'static str {
    match order {
        PlayerOrder::Id => "id",
        PlayerOrder::Name => "name",
        PlayerOrder::Experience => "experience",
        PlayerOrder::Birthday => "birthday",
        PlayerOrder::Level => "level",
    }
}

/// Parameterised SQL condition built from a [`Predicate`]
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub sql: String,
    pub params: Vec<Value>,
}

impl WhereClause {
    pub fn from_predicate(predicate: &Predicate) -> Self {
        let mut clause = Self {
            sql: String::new(),
            params: Vec::new(),
        };
        clause.render(predicate);
        clause
    }

    fn render(&mut self, predicate: &Predicate) {
        match predicate {
            Predicate::All => self.sql.push_str("1 = 1"),
            Predicate::Contains(field, needle) => {
                // instr() is case-sensitive, LIKE is not
                self.sql.push_str(&format!("instr({}, ?) > 0", column(*field)));
                self.params.push(Value::Text(needle.clone()));
            }
            Predicate::Equals(field, value) => {
                self.sql.push_str(&format!("{} = ?", column(*field)));
                self.params.push(to_sql_value(value));
            }
            Predicate::AtLeast(field, min) => {
                self.sql.push_str(&format!("{} >= ?", column(*field)));
                self.params.push(Value::Integer(*min));
            }
            Predicate::AtMost(field, max) => {
                self.sql.push_str(&format!("{} <= ?", column(*field)));
                self.params.push(Value::Integer(*max));
            }
            Predicate::Between(field, min, max) => {
                self.sql.push_str(&format!("{} BETWEEN ? AND ?", column(*field)));
                self.params.push(Value::Integer(*min));
                self.params.push(Value::Integer(*max));
            }
            Predicate::And(parts) if parts.is_empty() => self.sql.push_str("1 = 1"),
            Predicate::And(parts) => {
                self.sql.push('(');
                for (idx, part) in parts.iter().enumerate() {
                    if idx > 0 {
                        self.sql.push_str(" AND ");
                    }
                    self.render(part);
                }
                self.sql.push(')');
            }
        }
    }
}

fn to_sql_value(value: &FilterValue) -> Value {
    match value {
        FilterValue::Text(text) => Value::Text(text.clone()),
        FilterValue::Flag(flag) => Value::Integer(i64::from(*flag)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{by_banned, by_experience, by_name, PlayerFilter};

    #[test]
    fn test_match_all_renders_tautology() {
        let clause = WhereClause::from_predicate(&Predicate::All);
        assert_eq!(clause.sql, "1 = 1");
        assert!(clause.params.is_empty());
    }

    #[test]
    fn test_combined_filters_render_in_order() {
        let predicate = by_name(Some("ar"))
            .and(by_banned(Some(true)))
            .and(by_experience(Some(10), Some(20)));
        let clause = WhereClause::from_predicate(&predicate);

        assert_eq!(
            clause.sql,
            "(instr(name, ?) > 0 AND banned = ? AND experience BETWEEN ? AND ?)"
        );
        assert_eq!(
            clause.params,
            vec![
                Value::Text("ar".to_string()),
                Value::Integer(1),
                Value::Integer(10),
                Value::Integer(20),
            ]
        );
    }

    #[test]
    fn test_one_sided_ranges() {
        let filter = PlayerFilter {
            after: Some(946_684_800_000),
            max_level: Some(3),
            ..Default::default()
        };
        let clause = WhereClause::from_predicate(&filter.predicate());

        assert_eq!(clause.sql, "(birthday >= ? AND level <= ?)");
    }
}
