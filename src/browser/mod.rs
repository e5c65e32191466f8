// src/browser/mod.rs
//
// Blocking facade over a headless Chrome/Chromium session (CDP via
// chromiumoxide). The CDP client is async; the session owns a private
// current-thread runtime and drives every call with block_on, so callers
// stay synchronous and nothing runs in parallel. Sleeps run on the runtime
// too, keeping the CDP event stream serviced while the page settles.

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use crate::config::consts::{
    NAV_TIMEOUT_SECS, PAGE_SETTLE_SECS, SCROLL_SETTLE_SECS, SCROLL_STOPS, WEBSITE_LINK_ATTR,
};

/// Per-record outcome of a website lookup. Failures are values, not errors:
/// the enrichment loop records them and moves on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// The profile link element was present with a usable href.
    Found(String),
    /// Page rendered but the element was absent (or the script failed).
    Missing,
    /// Navigation failed or timed out.
    Failed,
}

/// Locate a Chrome/Chromium binary: env override first, then PATH.
pub fn find_browser() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("CR_SCRAPE_BROWSER") {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }
    for name in [
        "google-chrome",
        "google-chrome-stable",
        "chromium",
        "chromium-browser",
        "chrome",
        "msedge",
    ] {
        if let Ok(path) = which::which(name) {
            return Some(path);
        }
    }
    None
}

pub struct Session {
    rt: Runtime,
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl Session {
    /// Launch a headless browser and open one reusable page.
    pub fn launch() -> Result<Self, Box<dyn Error>> {
        let exe = find_browser()
            .ok_or("no Chrome/Chromium binary found (set CR_SCRAPE_BROWSER or install one)")?;
        logf!("Launching browser: {}", exe.display());

        let config = BrowserConfig::builder()
            .chrome_executable(exe)
            .arg("--headless=new")
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-blink-features=AutomationControlled")
            .build()?;

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let (browser, mut events) = rt.block_on(Browser::launch(config))?;

        // The event stream must be polled for CDP calls to complete; the
        // current-thread runtime drives this task during every block_on.
        let handler = rt.spawn(async move {
            while let Some(event) = events.next().await {
                let _ = event;
            }
        });

        let page = rt.block_on(browser.new_page("about:blank"))?;

        Ok(Self { rt, browser, page, handler })
    }

    /// Cheap liveness probe: a CDP version call round-trips the session.
    pub fn is_alive(&self) -> bool {
        self.rt.block_on(self.browser.version()).is_ok()
    }

    /// Visit one detail page and read the school-website link out of the DOM.
    /// Never returns an error: every failure mode maps to a [`Lookup`] value.
    pub fn lookup_website(&self, url: &str) -> Lookup {
        let nav = self.rt.block_on(async {
            tokio::time::timeout(Duration::from_secs(NAV_TIMEOUT_SECS), self.page.goto(url)).await
        });
        match nav {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                loge!("navigation failed for {url}: {e}");
                return Lookup::Failed;
            }
            Err(_) => {
                loge!("navigation timed out for {url}");
                return Lookup::Failed;
            }
        }

        // Let the page settle, then scroll to force lazy content to render.
        self.settle(PAGE_SETTLE_SECS);
        for y in SCROLL_STOPS {
            let _ = self
                .rt
                .block_on(self.page.evaluate(format!("window.scrollTo(0, {y});")));
            self.settle(SCROLL_SETTLE_SECS);
        }

        let script = format!(
            r#"(() => {{
                const el = document.querySelector('[data-tracking-id="{WEBSITE_LINK_ATTR}"]');
                return el ? (el.href || el.getAttribute('href')) : null;
            }})()"#
        );

        match self.rt.block_on(self.page.evaluate(script)) {
            Ok(result) => match result.into_value::<Option<String>>() {
                Ok(Some(href)) if !href.is_empty() => Lookup::Found(href),
                _ => Lookup::Missing,
            },
            Err(e) => {
                logd!("website-link script failed for {url}: {e}");
                Lookup::Missing
            }
        }
    }

    fn settle(&self, secs: u64) {
        self.rt
            .block_on(tokio::time::sleep(Duration::from_secs(secs)));
    }

    /// Tear the session down. Best-effort; a dead browser is fine here.
    pub fn close(mut self) {
        let _ = self.rt.block_on(self.page.close());
        let _ = self.rt.block_on(self.browser.close());
        self.handler.abort();
    }
}
