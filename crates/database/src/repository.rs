use crate::DbError;
use configuration::GenreMatch;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::mysql::{MySql, MySqlPool};
use sqlx::{FromRow, QueryBuilder};

const SQL_SELECT_GENRES: &str = "select distinct(genre) from genres order by genre asc";
const SQL_SELECT_TVIDS_BY_GENRE: &str = "select tvid from genres where genre like ?";
const SQL_SELECT_TV_SHOW_BY_TVID: &str =
    "select tvid, name, type, language, official_site, rating, imdb \
     from tv_shows where tvid = ?";

/// A row from the genre-lookup path: just enough of a show to list it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ShowSummary {
    pub tvid: i32,
    pub name: String,
}

/// A full row from the `tv_shows` table, serialized under the source column
/// names. Everything past the key and the name is nullable.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ShowDetail {
    pub tvid: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
    pub language: Option<String>,
    pub official_site: Option<String>,
    pub rating: Option<Decimal>,
    pub imdb: Option<String>,
}

/// The `ShowRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct ShowRepository {
    pool: MySqlPool,
    genre_match: GenreMatch,
}

impl ShowRepository {
    /// Creates a new `ShowRepository` with a shared database connection pool.
    pub fn new(pool: MySqlPool, genre_match: GenreMatch) -> Self {
        Self { pool, genre_match }
    }

    /// Fetches every distinct genre label, ascending.
    pub async fn list_genres(&self) -> Result<Vec<String>, DbError> {
        let genres = sqlx::query_scalar::<_, String>(SQL_SELECT_GENRES)
            .fetch_all(&self.pool)
            .await?;
        Ok(genres)
    }

    /// Fetches the shows linked to a genre, ordered by name ascending.
    ///
    /// This is the dependent two-query path: first the link table yields the
    /// set of `tvid`s for the genre, then the shows table is queried for
    /// those ids. The two steps are strictly sequential. A genre with no
    /// links yields `Ok(vec![])`; MySQL rejects an empty `IN ()` list, so
    /// the empty set is answered directly without the second round trip.
    pub async fn shows_by_genre(&self, genre: &str) -> Result<Vec<ShowSummary>, DbError> {
        let pattern = self.genre_match.pattern(genre);
        let tvids = sqlx::query_scalar::<_, i32>(SQL_SELECT_TVIDS_BY_GENRE)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        let Some(mut query) = shows_by_tvids_query(tvids) else {
            return Ok(Vec::new());
        };

        let shows = query
            .build_query_as::<ShowSummary>()
            .fetch_all(&self.pool)
            .await?;
        Ok(shows)
    }

    /// Fetches the full row for one show, or `None` when the id is unknown.
    pub async fn show_by_id(&self, tvid: i64) -> Result<Option<ShowDetail>, DbError> {
        let show = sqlx::query_as::<_, ShowDetail>(SQL_SELECT_TV_SHOW_BY_TVID)
            .bind(tvid)
            .fetch_optional(&self.pool)
            .await?;
        Ok(show)
    }
}

/// Builds the second statement of the genre-lookup pair, binding one
/// placeholder per id. An empty id set yields `None`: MySQL rejects an empty
/// `IN ()` list, and the caller must answer with an empty result set rather
/// than an error.
fn shows_by_tvids_query(tvids: Vec<i32>) -> Option<QueryBuilder<'static, MySql>> {
    if tvids.is_empty() {
        return None;
    }

    let mut query = QueryBuilder::new("select tvid, name from tv_shows where tvid in (");
    let mut ids = query.separated(", ");
    for tvid in tvids {
        ids.push_bind(tvid);
    }
    query.push(") order by name asc");
    Some(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_clause_binds_one_placeholder_per_tvid() {
        let query = shows_by_tvids_query(vec![1, 5, 9]).unwrap();

        assert_eq!(
            query.sql(),
            "select tvid, name from tv_shows where tvid in (?, ?, ?) order by name asc"
        );
    }

    #[test]
    fn empty_tvid_set_builds_no_statement() {
        assert!(shows_by_tvids_query(Vec::new()).is_none());
    }

    #[test]
    fn show_detail_serializes_under_source_column_names() {
        let show = ShowDetail {
            tvid: 2,
            name: "The Wire".to_string(),
            kind: Some("Scripted".to_string()),
            language: Some("English".to_string()),
            official_site: None,
            rating: Some(Decimal::new(93, 1)),
            imdb: Some("tt0306414".to_string()),
        };

        let value = serde_json::to_value(&show).unwrap();
        assert_eq!(value["tvid"], 2);
        assert_eq!(value["name"], "The Wire");
        assert_eq!(value["type"], "Scripted");
        assert_eq!(value["rating"], "9.3");
        assert!(value["official_site"].is_null());
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn show_summary_round_trips_through_json() {
        let json = r#"{"tvid":1,"name":"Friends"}"#;
        let summary: ShowSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.tvid, 1);
        assert_eq!(summary.name, "Friends");
    }
}
