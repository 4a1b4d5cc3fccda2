//! Effect runtime
//!
//! Runs each [`Effect`] on its own tokio task against the shared
//! [`TmdbClient`] and reports the outcome as a [`Message`]. Tasks never
//! touch app state; ordering is settled by the request sequence numbers the
//! messages carry.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::api::{TmdbClient, TmdbError};
use crate::app::{Effect, Message};
use crate::error::FetchError;
use crate::models::GenreMap;

/// Spawns effect tasks and funnels their results into one channel
#[derive(Clone)]
pub struct Dispatcher {
    client: Arc<TmdbClient>,
    genres: Arc<OnceCell<GenreMap>>,
    tx: UnboundedSender<Message>,
}

impl Dispatcher {
    /// Create a dispatcher and the receiving end of its message channel
    pub fn new(client: TmdbClient) -> (Self, UnboundedReceiver<Message>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Self {
            client: Arc::new(client),
            genres: Arc::new(OnceCell::new()),
            tx,
        };
        (dispatcher, rx)
    }

    pub fn dispatch_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.dispatch(effect);
        }
    }

    /// Run one effect in the background
    pub fn dispatch(&self, effect: Effect) {
        debug!(?effect, "dispatching");
        let this = self.clone();
        tokio::spawn(async move {
            let message = this.run(effect).await;
            // Receiver gone means the app is shutting down
            let _ = this.tx.send(message);
        });
    }

    async fn run(&self, effect: Effect) -> Message {
        match effect {
            Effect::LoadCatalog(request) => {
                let seq = request.seq;
                let result = match self.genre_map().await {
                    Ok(genres) => self.client.fetch_catalog(&request.cursor, genres).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(page) => Message::CatalogLoaded { seq, page },
                    Err(e) => Message::CatalogFailed {
                        seq,
                        error: FetchError::Catalog(e),
                    },
                }
            }
            Effect::LoadTrailer(request) => Message::TrailerLoaded {
                seq: request.seq,
                result: self
                    .client
                    .fetch_trailer(request.movie_id)
                    .await
                    .map_err(FetchError::Details),
            },
            Effect::LoadRows { seq } => {
                let rows = match self.genre_map().await {
                    Ok(genres) => self.client.fetch_category_rows(genres).await,
                    Err(e) => {
                        warn!(error = %e, "category rows skipped, no genre map");
                        Vec::new()
                    }
                };
                Message::RowsLoaded { seq, rows }
            }
        }
    }

    /// Genre map, fetched on first use and shared afterwards.
    ///
    /// A failed fetch leaves the cell empty so the next request tries again.
    async fn genre_map(&self) -> Result<&GenreMap, TmdbError> {
        self.genres
            .get_or_try_init(|| async {
                let genres = self.client.fetch_genres().await?;
                let _ = self.tx.send(Message::GenresLoaded(genres.clone()));
                Ok(genres)
            })
            .await
    }
}
