use blink::{DeviceClass, LandingState, Plan};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

use crate::source::ActionSource;

/// Navigate capability. A desktop load calls it exactly once.
pub trait Navigator: Send {
    fn navigate(&mut self, location: &str);
}

/// Holds the navigation of one page load until the response is built.
#[derive(Debug, Default)]
pub struct RedirectSlot {
    pub location: Option<String>,
}

impl Navigator for RedirectSlot {
    fn navigate(&mut self, location: &str) {
        self.location = Some(location.to_string());
    }
}

/// Drive one page load to its terminal state.
///
/// Returns `None` when `cancel` fires before the metadata fetch resolves;
/// the fetch result is then discarded.
pub async fn run_page_load(
    load_id: Uuid,
    raw_url: &str,
    device: DeviceClass,
    source: &dyn ActionSource,
    navigator: &mut dyn Navigator,
    cancel: &CancellationToken,
) -> Option<LandingState> {
    match Plan::new(raw_url, device) {
        Plan::MissingInput => {
            info!(load_id=%load_id, "page load: no url parameter");
            Some(LandingState::MissingInput)
        }
        Plan::Redirect { location } => {
            info!(load_id=%load_id, location=%location, "page load: desktop, redirecting");
            navigator.navigate(&location);
            Some(LandingState::Redirecting { location })
        }
        Plan::Render(plan) => {
            let fetched = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!(load_id=%load_id, "page load: cancelled during metadata fetch");
                    return None;
                }
                r = source.fetch(&plan.target_url) => r,
            };

            if let Err(e) = &fetched {
                warn!(load_id=%load_id, target=%plan.target_url, error=%e, "page load: metadata unavailable");
            }
            info!(load_id=%load_id, device=?device, "page load: rendering wallet picker");
            Some(plan.resolve(fetched))
        }
    }
}
