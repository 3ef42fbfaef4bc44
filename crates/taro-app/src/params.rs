// crates/taro-app/src/params.rs
// Query parameters read from the page URL

use url::Url;
use web_sys::Window;

use crate::error::Result;

/// Parameters the bot appends to the web app link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    /// Stored request to show on the answer page
    pub id: Option<String>,
    pub num: Option<String>,
}

impl PageParams {
    pub fn from_href(href: &str) -> Result<Self> {
        let url = Url::parse(href)?;
        let mut params = Self::default();

        for (key, value) in url.query_pairs() {
            if value.is_empty() {
                continue;
            }
            // First occurrence wins, like URLSearchParams.get
            match key.as_ref() {
                "id" if params.id.is_none() => params.id = Some(value.into_owned()),
                "num" if params.num.is_none() => params.num = Some(value.into_owned()),
                _ => {}
            }
        }

        Ok(params)
    }

    pub fn from_window(window: &Window) -> Result<Self> {
        let href = window.location().href()?;
        Self::from_href(&href)
    }
}
