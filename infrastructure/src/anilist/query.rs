//! GraphQL documents sent to AniList

/// Seasonal anime, one page at a time.
///
/// `Page` is aliased to `page` so the response reads `data.page.media` and
/// `data.page.pageInfo`. Every variable is nullable: a missing `$season`
/// matches the whole year and a missing `$page` selects the first page.
pub const SEASONAL_MEDIA_QUERY: &str = r#"
query ($season: MediaSeason, $seasonYear: Int, $formats: [MediaFormat], $page: Int, $perPage: Int) {
  page: Page(page: $page, perPage: $perPage) {
    pageInfo {
      currentPage
      hasNextPage
    }
    media(season: $season, seasonYear: $seasonYear, format_in: $formats, type: ANIME, isAdult: false, sort: POPULARITY_DESC) {
      title {
        romaji
        english
      }
      siteUrl
      episodes
    }
  }
}
"#;
