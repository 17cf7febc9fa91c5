use crate::{browser::config::{ConnectionOptions, LaunchOptions},
            browser::surface::TabSurface,
            error::{OutlineError, Result},
            outline::{OutlineOptions, PageReport, build_outline_and_notices_with}};
use headless_chrome::{Browser, Tab};
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// Browser session that manages a Chrome/Chromium instance
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// Applied to the tab before each navigation
    navigation_timeout: Duration,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));

        // Keep the browser alive across long outline runs (default idle timeout is 30 seconds)
        launch_opts.idle_browser_timeout = Duration::from_secs(10 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));
        launch_opts.path = options.chrome_path;
        launch_opts.user_data_dir = options.user_data_dir;
        launch_opts.sandbox = options.sandbox;

        let browser = Browser::new(launch_opts).map_err(|e| OutlineError::LaunchFailed(e.to_string()))?;

        browser
            .new_tab()
            .map_err(|e| OutlineError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        log::debug!("Launched browser (headless: {})", options.headless);
        Ok(Self { browser, navigation_timeout: Duration::from_secs(30) })
    }

    /// Connect to an existing browser instance via WebSocket
    pub fn connect(options: ConnectionOptions) -> Result<Self> {
        let browser = Browser::connect(options.ws_url.clone())
            .map_err(|e| OutlineError::ConnectionFailed(format!("{}: {}", options.ws_url, e)))?;

        log::debug!("Connected to browser at {}", options.ws_url);
        Ok(Self { browser, navigation_timeout: Duration::from_millis(options.timeout) })
    }

    /// Get the active tab
    pub fn tab(&self) -> Result<Arc<Tab>> {
        self.get_active_tab()
    }

    /// Get all tabs
    pub fn get_tabs(&self) -> Result<Vec<Arc<Tab>>> {
        let tabs = self
            .browser
            .get_tabs()
            .lock()
            .map_err(|e| OutlineError::TabOperationFailed(format!("Failed to get tabs: {}", e)))?
            .clone();

        Ok(tabs)
    }

    /// Get the visible tab, falling back to the first one
    pub fn get_active_tab(&self) -> Result<Arc<Tab>> {
        let tabs = self.get_tabs()?;

        for tab in &tabs {
            match tab.evaluate("document.visibilityState === 'visible'", false) {
                Ok(remote_object) => {
                    if remote_object.value.and_then(|v| v.as_bool()).unwrap_or(false) {
                        return Ok(tab.clone());
                    }
                }
                Err(e) => {
                    log::debug!("Failed to check tab visibility: {}", e);
                }
            }
        }

        tabs.into_iter()
            .next()
            .ok_or_else(|| OutlineError::TabOperationFailed("No tab available".to_string()))
    }

    /// Navigate to a URL using the active tab
    pub fn navigate(&self, url: &str) -> Result<()> {
        let tab = self.tab()?;
        tab.set_default_timeout(self.navigation_timeout);
        tab.navigate_to(url)
            .map_err(|e| OutlineError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        Ok(())
    }

    /// Wait for navigation to complete
    pub fn wait_for_navigation(&self) -> Result<()> {
        self.tab()?
            .wait_until_navigated()
            .map_err(|e| OutlineError::NavigationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(())
    }

    /// Rendering surface over the active tab
    pub fn surface(&self) -> Result<TabSurface> {
        Ok(TabSurface::new(self.tab()?))
    }

    /// Load `url` and run the page-ready pass on it
    pub fn outline_page(&self, url: &str, options: &OutlineOptions) -> Result<PageReport> {
        self.navigate(url)?;
        self.wait_for_navigation()?;

        let mut surface = self.surface()?;
        let report = build_outline_and_notices_with(&mut surface, options)?;
        log::info!("Processed {}", url);
        Ok(report)
    }

    /// Close every tab; the browser process exits when the session is dropped
    pub fn close(&self) -> Result<()> {
        for tab in self.get_tabs()? {
            if let Err(e) = tab.close(false) {
                log::debug!("Failed to close tab: {}", e);
            }
        }
        Ok(())
    }
}
