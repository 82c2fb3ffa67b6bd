//! Page rendering with analytics side effect.

use std::sync::Arc;

use tracing::debug;

use crate::config::PageSettings;
use crate::ports::Analytics;

/// Renders pages and reports each view to analytics.
pub struct PageService {
    analytics: Arc<dyn Analytics>,
    pages: PageSettings,
}

impl PageService {
    /// Creates a service reporting views under the default page keys.
    pub fn new(analytics: Arc<dyn Analytics>) -> Self {
        PageService {
            analytics,
            pages: PageSettings::default(),
        }
    }

    /// Replaces the page keys, usually with `ShopConfig::pages`.
    pub fn with_settings(mut self, pages: PageSettings) -> Self {
        self.pages = pages;
        self
    }

    /// Renders the home page and records a view of it.
    pub async fn render_page(&self) -> String {
        self.analytics.track_page_view(&self.pages.home);
        debug!(page = %self.pages.home, "Page view tracked");

        "<div>content</div>".to_string()
    }
}
