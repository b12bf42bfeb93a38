//! Registration statistics, best effort.
//!
//! Failures are logged and swallowed; the user never sees them.

use std::rc::Rc;

use super::api::{HttpTransport, STATS_PATH};
use super::ui::StatsView;
use crate::error::{AppError, AppResult, TransportError};
use crate::types::{StatsResponse, StatsSnapshot};

pub struct StatsClient<T> {
    transport: Rc<T>,
    view: Option<Rc<dyn StatsView>>,
}

impl<T> Clone for StatsClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
            view: self.view.clone(),
        }
    }
}

impl<T: HttpTransport> StatsClient<T> {
    /// `view` is `None` when the page has no stats region.
    pub fn new(transport: Rc<T>, view: Option<Rc<dyn StatsView>>) -> Self {
        Self { transport, view }
    }

    /// Fetch the current counts.
    pub async fn fetch(&self) -> AppResult<StatsSnapshot> {
        let response: StatsResponse = self.transport.get_json(STATS_PATH).await?;

        match (response.success, response.stats) {
            (true, Some(stats)) => Ok(stats),
            (true, None) => Err(TransportError::Decode("missing `stats` field".into()).into()),
            (false, _) => Err(AppError::Rejected("stats unavailable".into())),
        }
    }

    /// Fetch and render. Never fails.
    pub async fn refresh(&self) {
        match self.fetch().await {
            Ok(stats) => {
                log::debug!("Stats: {} total, {} today", stats.total, stats.today);
                if let Some(view) = &self.view {
                    view.render(stats);
                }
            }
            Err(e) => log::warn!("Stats update failed: {}", e),
        }
    }
}
