//! Page driver - infrastructure layer
//!
//! The one capability the pipeline consumes: a navigable page session that
//! can run scripts, click things and wait. The chromiumoxide-backed
//! `CdpDriver` is the sole owner of the `Page`; the rest of the crate only
//! sees the `PageDriver` trait, so any backend satisfying it is
//! substitutable.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chromiumoxide::Page;
use serde_json::Value as JsonValue;
use tracing::debug;

/// Navigable page session capability.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate the session to a URL.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Evaluate a script in the page and return its JSON result.
    async fn eval(&self, js: &str) -> Result<JsonValue>;

    /// Click the first element matching a CSS selector.
    ///
    /// Returns `Ok(false)` when no such element exists or it cannot be
    /// activated; `Err` is reserved for session-level failures.
    async fn click(&self, selector: &str) -> Result<bool>;

    /// Click the first `span` whose trimmed text equals `text`.
    ///
    /// Used for filter options the UI labels by text rather than by a
    /// stable selector. Same `Ok(false)` semantics as [`click`](Self::click).
    async fn click_text(&self, text: &str) -> Result<bool>;

    /// Focus the element matching a CSS selector, clear its current value
    /// and type text into it.
    async fn type_text(&self, selector: &str, text: &str) -> Result<()>;

    /// Press Enter in the element matching a CSS selector.
    async fn press_enter(&self, selector: &str) -> Result<()>;

    /// Blocking wait for page content to settle.
    async fn settle(&self, wait: Duration);
}

/// Chromium DevTools Protocol driver.
///
/// Owns the single `Page` of the run.
pub struct CdpDriver {
    page: Page,
}

impl CdpDriver {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

#[async_trait]
impl PageDriver for CdpDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);
        self.page
            .goto(url)
            .await
            .map_err(|e| crate::error::AppError::navigation_failed(url, e))?;
        Ok(())
    }

    async fn eval(&self, js: &str) -> Result<JsonValue> {
        let result = self
            .page
            .evaluate(js.to_string())
            .await
            .map_err(crate::error::AppError::script_failed)?;
        let json_value = result
            .into_value()
            .map_err(crate::error::AppError::script_failed)?;
        Ok(json_value)
    }

    async fn click(&self, selector: &str) -> Result<bool> {
        let element = match self.page.find_element(selector).await {
            Ok(element) => element,
            Err(_) => {
                debug!("No element matches {}", selector);
                return Ok(false);
            }
        };
        match element.click().await {
            Ok(_) => Ok(true),
            Err(e) => {
                debug!("Element {} could not be clicked: {}", selector, e);
                Ok(false)
            }
        }
    }

    async fn click_text(&self, text: &str) -> Result<bool> {
        // Filter options carry no stable selector, only their visible label.
        let quoted = JsonValue::String(text.to_string()).to_string();
        let js = format!(
            r#"
            (() => {{
                for (const span of document.querySelectorAll("span")) {{
                    if (span.textContent.trim() === {quoted}) {{
                        span.click();
                        return true;
                    }}
                }}
                return false;
            }})()
            "#
        );
        let result = self.eval(&js).await?;
        Ok(result.as_bool().unwrap_or(false))
    }

    async fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| crate::error::AppError::element_missing(selector))?;
        // Drop whatever the box already holds before typing
        let quoted = JsonValue::String(selector.to_string()).to_string();
        let js = format!(
            r#"
            (() => {{
                const el = document.querySelector({quoted});
                if (el) el.value = "";
            }})()
            "#
        );
        self.eval(&js).await?;
        let element = element
            .click()
            .await
            .map_err(crate::error::AppError::script_failed)?;
        element
            .type_str(text)
            .await
            .map_err(crate::error::AppError::script_failed)?;
        Ok(())
    }

    async fn press_enter(&self, selector: &str) -> Result<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| crate::error::AppError::element_missing(selector))?;
        element
            .press_key("Enter")
            .await
            .map_err(crate::error::AppError::script_failed)?;
        Ok(())
    }

    async fn settle(&self, wait: Duration) {
        tokio::time::sleep(wait).await;
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted driver for unit tests.

    use std::collections::HashSet;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use anyhow::anyhow;

    use super::*;

    /// One scripted result page: the JSON the extraction script would
    /// return, and whether a "next page" control is present afterwards.
    pub struct FakePage {
        pub cards: JsonValue,
        pub has_next: bool,
    }

    /// In-memory `PageDriver` that replays scripted pages and records every
    /// action it is asked to perform.
    pub struct FakeDriver {
        next_selector: String,
        pages: Mutex<VecDeque<FakePage>>,
        has_next: Mutex<bool>,
        clickable: Mutex<HashSet<String>>,
        clickable_text: Mutex<HashSet<String>>,
        navigate_calls: Mutex<usize>,
        fail_navigate_on: Mutex<Option<usize>>,
        failing_clicks: Mutex<HashSet<String>>,
        actions: Mutex<Vec<String>>,
    }

    impl FakeDriver {
        pub fn new() -> Self {
            Self::with_pages("", Vec::new())
        }

        /// A driver that serves `pages` in order. `next_selector` is the
        /// selector whose click advances pagination.
        pub fn with_pages(next_selector: &str, pages: Vec<FakePage>) -> Self {
            Self {
                next_selector: next_selector.to_string(),
                pages: Mutex::new(pages.into()),
                has_next: Mutex::new(false),
                clickable: Mutex::new(HashSet::new()),
                clickable_text: Mutex::new(HashSet::new()),
                navigate_calls: Mutex::new(0),
                fail_navigate_on: Mutex::new(None),
                failing_clicks: Mutex::new(HashSet::new()),
                actions: Mutex::new(Vec::new()),
            }
        }

        /// Mark a CSS selector as present and clickable.
        pub fn allow_click(&self, selector: &str) {
            self.clickable.lock().unwrap().insert(selector.to_string());
        }

        /// Mark a text label as present and clickable.
        pub fn allow_text(&self, text: &str) {
            self.clickable_text.lock().unwrap().insert(text.to_string());
        }

        /// Make the `nth` navigation (1-based) fail like a dropped session.
        pub fn fail_on_navigate(&self, nth: usize) {
            *self.fail_navigate_on.lock().unwrap() = Some(nth);
        }

        /// Make clicks on a selector return a session-level error.
        pub fn fail_click(&self, selector: &str) {
            self.failing_clicks
                .lock()
                .unwrap()
                .insert(selector.to_string());
        }

        pub fn actions(&self) -> Vec<String> {
            self.actions.lock().unwrap().clone()
        }

        pub fn count_actions(&self, action: &str) -> usize {
            self.actions
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.as_str() == action)
                .count()
        }

        fn record(&self, action: String) {
            self.actions.lock().unwrap().push(action);
        }
    }

    #[async_trait]
    impl PageDriver for FakeDriver {
        async fn navigate(&self, url: &str) -> Result<()> {
            let call = {
                let mut calls = self.navigate_calls.lock().unwrap();
                *calls += 1;
                *calls
            };
            if *self.fail_navigate_on.lock().unwrap() == Some(call) {
                self.record(format!("navigate_failed:{url}"));
                return Err(anyhow!("navigation to {url} failed: session disconnected"));
            }
            self.record(format!("navigate:{url}"));
            Ok(())
        }

        async fn eval(&self, js: &str) -> Result<JsonValue> {
            // The only script the pipeline evaluates directly is the card
            // extraction snapshot; serve the next scripted page for it.
            if js.contains(crate::services::extractor::CARD_SELECTOR) {
                self.record("extract".to_string());
                match self.pages.lock().unwrap().pop_front() {
                    Some(page) => {
                        *self.has_next.lock().unwrap() = page.has_next;
                        return Ok(page.cards);
                    }
                    None => {
                        *self.has_next.lock().unwrap() = false;
                        return Ok(JsonValue::Array(Vec::new()));
                    }
                }
            }
            self.record("eval".to_string());
            Ok(JsonValue::Null)
        }

        async fn click(&self, selector: &str) -> Result<bool> {
            self.record(format!("click:{selector}"));
            if self.failing_clicks.lock().unwrap().contains(selector) {
                return Err(anyhow!("element {selector} not interactable"));
            }
            if selector == self.next_selector {
                return Ok(*self.has_next.lock().unwrap());
            }
            Ok(self.clickable.lock().unwrap().contains(selector))
        }

        async fn click_text(&self, text: &str) -> Result<bool> {
            self.record(format!("click_text:{text}"));
            Ok(self.clickable_text.lock().unwrap().contains(text))
        }

        async fn type_text(&self, selector: &str, text: &str) -> Result<()> {
            self.record(format!("type:{selector}:{text}"));
            Ok(())
        }

        async fn press_enter(&self, selector: &str) -> Result<()> {
            self.record(format!("enter:{selector}"));
            Ok(())
        }

        async fn settle(&self, _wait: Duration) {}
    }
}
