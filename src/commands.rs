//! CLI Command Handlers
//!
//! Implements all CLI commands on top of [`TmdbClient`].
//! Each handler takes CLI args, a client and Output, returns ExitCode.

use serde::Serialize;
use tracing::debug;

use crate::api::{TmdbClient, TmdbError};
use crate::cli::{
    CatalogOutput, DiscoverCmd, ExitCode, GenresCmd, Output, RowsCmd, SearchCmd, TrailerCmd,
    TrailerOutput,
};
use crate::models::{CatalogCursor, GenreId, GenreMap};
use crate::state::catalog::displayed_max;
use crate::state::details::NO_TRAILER_NOTICE;

/// Exit code for a provider failure
pub fn exit_code_for(error: &TmdbError) -> ExitCode {
    match error {
        TmdbError::NotFound => ExitCode::NotFound,
        TmdbError::Unauthorized | TmdbError::InvalidResponse(_) => ExitCode::Error,
        TmdbError::RateLimited | TmdbError::ServerError(_) | TmdbError::RequestFailed(_) => {
            ExitCode::NetworkError
        }
    }
}

fn provider_error(output: &Output, context: &str, error: TmdbError) -> ExitCode {
    let code = exit_code_for(&error);
    output.error(format!("{}: {}", context, error), code)
}

/// Print the JSON envelope, or run the text renderer in text mode
fn emit<T: Serialize>(output: &Output, data: T, text: impl FnOnce(&T)) -> ExitCode {
    if !output.json {
        text(&data);
        return ExitCode::Success;
    }
    match output.print(&data) {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
    }
}

async fn load_genres(client: &TmdbClient, output: &Output) -> Result<GenreMap, ExitCode> {
    client
        .fetch_genres()
        .await
        .map_err(|e| provider_error(output, "Genre fetch failed", e))
}

async fn catalog_cmd(
    client: &TmdbClient,
    cursor: CatalogCursor,
    limit: usize,
    output: &Output,
) -> ExitCode {
    let genres = match load_genres(client, output).await {
        Ok(genres) => genres,
        Err(code) => return code,
    };

    if let Some(id) = cursor.filter.genre() {
        if genres.name(id).is_none() {
            return output.error(format!("Unknown genre id: {}", id), ExitCode::NotFound);
        }
    }

    debug!(?cursor, "catalog command");
    let mut page = match client.fetch_catalog(&cursor, &genres).await {
        Ok(page) => page,
        Err(e) => return provider_error(output, "Catalog fetch failed", e),
    };
    page.movies.truncate(limit);

    let result = CatalogOutput {
        query: cursor.filter.query().to_string(),
        genre: cursor.filter.genre().map(|g| g.to_string()),
        page: cursor.page,
        total_pages: displayed_max(page.total_pages),
        results: page.movies,
    };

    emit(output, result, |r| {
        for movie in &r.results {
            output.line(format!("{:>8}  {}  [{}]", movie.id, movie, movie.genres));
        }
        output.info(format!("Page {} of {}", r.page, r.total_pages));
    })
}

// =============================================================================
// Discover / Search
// =============================================================================

pub async fn discover_cmd(cmd: DiscoverCmd, client: &TmdbClient, output: &Output) -> ExitCode {
    let cursor = match cmd.genre.as_deref().map(str::trim) {
        Some("") => return output.error("Genre id must not be empty", ExitCode::InvalidArgs),
        Some(id) => CatalogCursor::genre(GenreId::new(id), cmd.page),
        None => CatalogCursor::popular(cmd.page),
    };
    output.info(format!("Discovering movies (page {})...", cursor.page));
    catalog_cmd(client, cursor, cmd.limit, output).await
}

pub async fn search_cmd(cmd: SearchCmd, client: &TmdbClient, output: &Output) -> ExitCode {
    let query = cmd.query.trim();
    if query.is_empty() {
        return output.error("Search query must not be empty", ExitCode::InvalidArgs);
    }
    output.info(format!("Searching for: {}", query));
    catalog_cmd(client, CatalogCursor::search(query, cmd.page), cmd.limit, output).await
}

// =============================================================================
// Genres
// =============================================================================

pub async fn genres_cmd(_cmd: GenresCmd, client: &TmdbClient, output: &Output) -> ExitCode {
    let genres = match load_genres(client, output).await {
        Ok(genres) => genres,
        Err(code) => return code,
    };

    emit(output, genres, |g| {
        for genre in g.iter() {
            output.line(format!("{:>6}  {}", genre.id, genre.name));
        }
    })
}

// =============================================================================
// Trailer
// =============================================================================

pub async fn trailer_cmd(cmd: TrailerCmd, client: &TmdbClient, output: &Output) -> ExitCode {
    output.info(format!("Looking up trailer for movie {}...", cmd.movie_id));

    let trailer = match client.fetch_trailer(cmd.movie_id).await {
        Ok(trailer) => trailer,
        Err(e) => return provider_error(output, "Trailer lookup failed", e),
    };

    let result = TrailerOutput {
        movie_id: cmd.movie_id,
        embed_url: trailer.as_ref().map(|t| t.embed_url()),
        notice: trailer.is_none().then(|| NO_TRAILER_NOTICE.to_string()),
        trailer,
    };

    emit(output, result, |r| match &r.trailer {
        Some(trailer) => {
            output.line(&trailer.name);
            output.line(trailer.watch_url());
        }
        None => output.line(NO_TRAILER_NOTICE),
    })
}

// =============================================================================
// Category Rows
// =============================================================================

pub async fn rows_cmd(cmd: RowsCmd, client: &TmdbClient, output: &Output) -> ExitCode {
    let genres = match load_genres(client, output).await {
        Ok(genres) => genres,
        Err(code) => return code,
    };

    output.info("Fetching category rows...");
    let mut rows = client.fetch_category_rows(&genres).await;
    for row in &mut rows {
        row.movies.truncate(cmd.limit);
    }

    emit(output, rows, |rows| {
        for row in rows {
            output.line(format!("== {} ==", row.name));
            for movie in &row.movies {
                output.line(format!("  {}", movie));
            }
        }
    })
}
