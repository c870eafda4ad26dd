//! PostgreSQL schema definition and SQL query constants.
//!
//! Pure data, no I/O. Every statement that returns rows selects the article
//! columns in table order: id, title, content, author.

/// SQL statement creating the articles table when it does not exist yet.
pub const CREATE_ARTICLES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS articles (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    author TEXT NOT NULL
)
"#;

pub const INSERT_ARTICLE: &str = r#"
INSERT INTO articles (title, content, author)
VALUES ($1, $2, $3)
RETURNING id, title, content, author
"#;

pub const SELECT_ARTICLES: &str = r#"
SELECT id, title, content, author
FROM articles
ORDER BY id ASC
"#;

pub const UPDATE_ARTICLE: &str = r#"
UPDATE articles
SET title = $1, content = $2, author = $3
WHERE id = $4
RETURNING id, title, content, author
"#;

pub const DELETE_ARTICLE: &str = r#"
DELETE FROM articles
WHERE id = $1
RETURNING id, title, content, author
"#;

pub const PING: &str = "SELECT 1";
