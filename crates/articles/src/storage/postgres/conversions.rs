//! PostgreSQL row conversion functions.

use articles_core::article::Article;

/// Column tuple returned by every article query: id, title, content, author.
pub type ArticleRow = (i32, String, String, String);

/// Convert a decoded row into an Article.
pub fn row_to_article((id, title, content, author): ArticleRow) -> Article {
    Article {
        id,
        title,
        content,
        author,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_article_keeps_column_order() {
        let row: ArticleRow = (3, "T".to_string(), "C".to_string(), "A".to_string());

        let article = row_to_article(row);

        assert_eq!(article, Article::new(3, "T", "C", "A"));
    }
}
