//! Optional filters for the `/search` endpoint.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub name: String,
    pub status: String,
    /// Install year; sent only when it parses as an integer.
    pub year: String,
}

impl SearchQuery {
    /// Populated filters as query parameters, in `name`, `status`, `year` order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(name) = non_blank(&self.name) {
            params.push(("name", name));
        }
        if let Some(status) = non_blank(&self.status) {
            params.push(("status", status));
        }
        if let Ok(year) = self.year.trim().parse::<i32>() {
            params.push(("year", year.to_string()));
        }
        params
    }

    /// No filter would be sent.
    pub fn is_empty(&self) -> bool {
        self.params().is_empty()
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
