//! SQL DDL for the `meals` table. Uses `IF NOT EXISTS` so it can run on
//! every start.

use rusqlite::Connection;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS meals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    meal_type TEXT NOT NULL,
    content TEXT NOT NULL,
    macros TEXT
);

CREATE INDEX IF NOT EXISTS idx_meals_date ON meals(date);
"#;

pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn schema_creates_meals_table() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        assert!(table_names(&conn).contains(&"meals".to_string()));

        let columns: Vec<String> = conn
            .prepare("SELECT name FROM pragma_table_info('meals') ORDER BY cid")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(columns, ["id", "date", "meal_type", "content", "macros"]);
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap(); // second call should not error

        let meal_tables = table_names(&conn)
            .into_iter()
            .filter(|t| t == "meals")
            .count();
        assert_eq!(meal_tables, 1);
    }

    #[test]
    fn macros_is_nullable() {
        let conn = crate::db::open_memory_database().unwrap();
        conn.execute(
            "INSERT INTO meals (date, meal_type, content, macros) VALUES ('2024-01-01', 'Lunch', 'Soup', NULL)",
            [],
        )
        .unwrap();
        let macros: Option<String> = conn
            .query_row("SELECT macros FROM meals", [], |row| row.get(0))
            .unwrap();
        assert!(macros.is_none());
    }
}
