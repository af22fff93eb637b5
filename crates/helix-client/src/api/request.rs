use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;

use super::*;

/// Most ids/logins a single Helix lookup accepts.
pub const MAX_LOOKUP: usize = 100;

/// Ordered query parameters. Unset optional values are never added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    pub fn push_opt(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// Repeat `key` once per value (`id=1&id=2`), capped at [`MAX_LOOKUP`].
    pub fn push_all<I, V>(self, key: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        self.push_shared(&[(key, &values[..])])
    }

    /// Like [`Self::push_all`] for several keys whose values share one
    /// [`MAX_LOOKUP`] budget, filled in key order. Values past the budget are
    /// dropped with a warning.
    pub fn push_shared<V: ToString>(mut self, lists: &[(&'static str, &[V])]) -> Self {
        let mut room = MAX_LOOKUP;
        for &(key, values) in lists {
            let take = values.len().min(room);
            if take < values.len() {
                tracing::warn!(
                    key,
                    dropped = values.len() - take,
                    "Lookup values past the {MAX_LOOKUP} limit dropped"
                );
            }
            for v in &values[..take] {
                self.0.push((key, v.to_string()));
            }
            room -= take;
        }
        self
    }

    /// Add `after`/`before`/`first` from a pagination request.
    pub fn page(self, page: &Pagination) -> Self {
        self.push_opt("after", page.after.as_deref())
            .push_opt("before", page.before.as_deref())
            .push_opt("first", page.first.map(clamp_first))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(k, _)| *k)
    }

    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Cursor pagination request. Cursors are forwarded as-is, never followed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub after: Option<String>,
    pub before: Option<String>,
    pub first: Option<u32>,
}

impl Pagination {
    pub fn first(n: u32) -> Self {
        Self {
            first: Some(n),
            ..Self::default()
        }
    }

    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into()).filter(|c: &String| !c.is_empty());
        self
    }

    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into()).filter(|c: &String| !c.is_empty());
        self
    }
}

pub(super) fn clamp_first(first: u32) -> u32 {
    first.clamp(1, 100)
}

/// A fully shaped Helix call: verb, path, guard, query and optional JSON body.
#[derive(Debug, Clone)]
pub struct HelixRequest {
    pub method: Method,
    pub path: &'static str,
    pub guard: Guard,
    pub query: QueryParams,
    pub body: Option<serde_json::Value>,
}

impl HelixRequest {
    pub fn new(method: Method, path: &'static str, guard: Guard) -> Self {
        Self {
            method,
            path,
            guard,
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn get(path: &'static str, guard: Guard) -> Self {
        Self::new(Method::GET, path, guard)
    }

    pub fn post(path: &'static str, guard: Guard) -> Self {
        Self::new(Method::POST, path, guard)
    }

    pub fn patch(path: &'static str, guard: Guard) -> Self {
        Self::new(Method::PATCH, path, guard)
    }

    pub fn put(path: &'static str, guard: Guard) -> Self {
        Self::new(Method::PUT, path, guard)
    }

    pub fn delete(path: &'static str, guard: Guard) -> Self {
        Self::new(Method::DELETE, path, guard)
    }

    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body; the request will carry `Content-Type: application/json`.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self, HelixError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

impl HelixClient {
    /// Build headers from the current token (if any) and client id.
    fn auth_headers(&self, token: Option<&str>) -> Result<HeaderMap, HelixError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}"))?,
            );
        }
        headers.insert("Client-Id", HeaderValue::from_str(self.ctx.client_id())?);
        Ok(headers)
    }

    /// Run the request's guard, then perform the call and return the raw response.
    ///
    /// A failing guard returns before anything is sent. Non-2xx responses are
    /// returned as-is; see [`check_status`] to classify them.
    pub async fn send(&self, request: HelixRequest) -> Result<reqwest::Response, HelixError> {
        let bearer = self.ctx.bearer_token().await;
        let token = request.guard.check(bearer.as_deref(), &self.scopes)?;

        let HelixRequest {
            method,
            path,
            query,
            body,
            ..
        } = request;

        tracing::debug!(method = method.as_str(), path, "Sending Helix request");

        let url = format!("{}{path}", self.api_base);
        let mut builder = self
            .ctx
            .http()
            .request(method, url)
            .headers(self.auth_headers(token)?);
        if !query.is_empty() {
            builder = builder.query(query.as_slice());
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        Ok(builder.send().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_opt_skips_none() {
        let q = QueryParams::new()
            .push("id", "42")
            .push_opt("login", None::<&str>)
            .push_opt("first", Some(20));
        assert_eq!(q.keys().collect::<Vec<_>>(), vec!["id", "first"]);
        assert_eq!(q.get("first"), Some("20"));
    }

    #[test]
    fn push_all_repeats_key_and_caps_at_100() {
        let ids = (1..=120).map(|i| format!("u{i}")).collect::<Vec<_>>();
        let q = QueryParams::new().push_all("user_id", &ids);
        assert_eq!(q.len(), 100);
        assert!(q.keys().all(|k| k == "user_id"));
        assert_eq!(q.as_slice()[99].1, "u100");
    }

    #[test]
    fn push_shared_splits_one_budget_across_keys() {
        let ids = (1..=70).map(|i| format!("g{i}")).collect::<Vec<_>>();
        let names = (1..=70).map(|i| format!("name{i}")).collect::<Vec<_>>();
        let q = QueryParams::new().push_shared(&[("id", &ids[..]), ("name", &names[..])]);

        assert_eq!(q.len(), MAX_LOOKUP);
        assert_eq!(q.keys().filter(|k| *k == "id").count(), 70);
        assert_eq!(q.keys().filter(|k| *k == "name").count(), 30);
        assert_eq!(q.as_slice()[99].1, "name30");
    }

    #[test]
    fn page_clamps_first_and_drops_empty_cursor() {
        let q = QueryParams::new().page(&Pagination::first(500).after(""));
        assert_eq!(q.get("first"), Some("100"));
        assert_eq!(q.get("after"), None);

        let q = QueryParams::new().page(&Pagination::first(0).before("abc"));
        assert_eq!(q.get("first"), Some("1"));
        assert_eq!(q.get("before"), Some("abc"));
    }

    #[test]
    fn default_page_adds_nothing() {
        assert!(QueryParams::new().page(&Pagination::default()).is_empty());
    }

    #[test]
    fn json_body_omits_unset_fields() {
        #[derive(Serialize)]
        struct Body<'a> {
            user_id: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
        }

        let req = HelixRequest::post("/streams/markers", Guard::new(AuthRequirement::OAuth))
            .json(&Body {
                user_id: "1",
                description: None,
            })
            .unwrap();
        assert_eq!(req.body, Some(serde_json::json!({ "user_id": "1" })));
    }
}
