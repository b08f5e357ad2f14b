use serde::Deserialize;

/// The root configuration structure for the entire application.
///
/// All values are sourced from the environment at startup; every field has a
/// default so the service can come up against a local database with no
/// configuration at all.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The HTTP listening port.
    pub port: u16,
    /// The MySQL server host.
    pub db_host: String,
    /// The MySQL server port.
    pub db_port: u16,
    /// The MySQL user.
    pub db_user: String,
    /// The MySQL password.
    pub db_password: String,
    /// The schema holding the `tv_shows` and `genres` tables.
    pub db_schema: String,
    /// How the genre path segment is matched against stored genre labels.
    pub genre_match: GenreMatch,
}

/// The predicate mode for the genre lookup.
///
/// The lookup always goes through SQL `LIKE`; this enum controls how the
/// caller-supplied genre is rendered into the pattern. `Exact` passes the
/// literal through untouched, which is exact-match behavior for any label
/// that contains no wildcard characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenreMatch {
    #[default]
    Exact,
    Prefix,
    Substring,
}

impl GenreMatch {
    /// Renders a genre label into the `LIKE` pattern for this mode.
    pub fn pattern(&self, genre: &str) -> String {
        match self {
            GenreMatch::Exact => genre.to_string(),
            GenreMatch::Prefix => format!("{genre}%"),
            GenreMatch::Substring => format!("%{genre}%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_pattern_is_the_literal() {
        assert_eq!(GenreMatch::Exact.pattern("Comedy"), "Comedy");
    }

    #[test]
    fn prefix_and_substring_patterns_add_wildcards() {
        assert_eq!(GenreMatch::Prefix.pattern("Com"), "Com%");
        assert_eq!(GenreMatch::Substring.pattern("om"), "%om%");
    }

    #[test]
    fn genre_match_deserializes_from_lowercase_names() {
        let m: GenreMatch = serde_json::from_str("\"substring\"").unwrap();
        assert_eq!(m, GenreMatch::Substring);
    }

    #[test]
    fn genre_match_defaults_to_exact() {
        assert_eq!(GenreMatch::default(), GenreMatch::Exact);
    }
}
