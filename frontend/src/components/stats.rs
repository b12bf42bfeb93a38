//! Registration counters.

use leptos::*;

use crate::services::StatsView;
use crate::types::StatsSnapshot;

/// Last rendered snapshot; every refresh replaces it.
#[derive(Clone, Copy)]
pub struct StatsDisplay {
    snapshot: RwSignal<Option<StatsSnapshot>>,
}

impl Default for StatsDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsDisplay {
    pub fn new() -> Self {
        Self {
            snapshot: create_rw_signal(None),
        }
    }
}

impl StatsView for StatsDisplay {
    fn render(&self, stats: StatsSnapshot) {
        self.snapshot.set(Some(stats));
    }
}

#[component]
pub fn RegistrationStats(display: StatsDisplay) -> impl IntoView {
    view! {
        <div id="registration-stats" class="registration-stats">
            {move || display.snapshot.get().map(|stats| view! {
                <div class="stats-item">
                    <span class="stats-number">{stats.total}</span>
                    <span class="stats-label">"Total Registrations"</span>
                </div>
                <div class="stats-item">
                    <span class="stats-number">{stats.today}</span>
                    <span class="stats-label">"Today"</span>
                </div>
            })}
        </div>
    }
}
