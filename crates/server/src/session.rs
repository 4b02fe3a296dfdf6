//! Server-side sessions keyed by an http-only cookie.
//!
//! The store is copied into a [`SessionHandle`] when a request arrives and
//! copied back once the response is built. Handlers lock the handle only to
//! read or write fields, never across an `.await`.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderValue},
    middleware::Next,
    response::Response,
};
use cookie::Cookie;
use serde::{Deserialize, Serialize};
use shared_types::{AppError, CaseWithId, FormError, Language, RespondentEt3Model};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::formatter::{find_selected_respondent, FormatterContext};
use crate::state::AppState;

/// The signed-in user, as handed over by the identity service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDetails {
    pub id: String,
    pub email: Option<String>,
    pub access_token: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<UserDetails>,
    pub user_case: Option<CaseWithId>,
    pub selected_respondent_index: usize,
    pub errors: Vec<FormError>,
    pub language: Language,
}

impl Session {
    pub fn access_token(&self) -> Option<&str> {
        self.user.as_ref()?.access_token.as_deref()
    }

    pub fn selected_respondent(&self) -> Option<&RespondentEt3Model> {
        find_selected_respondent(self.user_case.as_ref()?, self.selected_respondent_index)
    }
}

impl FormatterContext for Session {
    fn language(&self) -> Language {
        self.language
    }

    fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    fn selected_respondent_index(&self) -> usize {
        self.selected_respondent_index
    }

    fn set_selected_respondent_index(&mut self, index: usize) {
        self.selected_respondent_index = index;
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct StoredSession {
    session: Session,
    last_seen: Instant,
}

/// In-memory session map shared across requests. Entries idle for longer
/// than the time-to-live are dropped.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, StoredSession>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(Duration::from_secs(shared_types::DEFAULT_SESSION_TTL_SECS))
    }
}

impl SessionStore {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Live session for `id`. An expired entry is removed and not returned.
    pub fn load(&self, id: &str) -> Option<Session> {
        let mut sessions = lock(&self.inner);
        let expired = sessions.get(id)?.last_seen.elapsed() >= self.ttl;
        if expired {
            sessions.remove(id);
            return None;
        }
        sessions.get(id).map(|stored| stored.session.clone())
    }

    /// Store `session` under `id`, refreshing its expiry, and drop any
    /// sessions that have gone stale.
    pub fn save(&self, id: &str, session: Session) {
        let now = Instant::now();
        let mut sessions = lock(&self.inner);
        sessions.retain(|_, stored| now.duration_since(stored.last_seen) < self.ttl);
        sessions.insert(
            id.to_string(),
            StoredSession {
                session,
                last_seen: now,
            },
        );
    }

    /// Store a fresh session and return its id.
    pub fn create(&self, session: Session) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.save(&id, session);
        id
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The current request's session.
#[derive(Clone)]
pub struct SessionHandle {
    session: Arc<Mutex<Session>>,
}

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Copy of the session as it stands.
    pub fn snapshot(&self) -> Session {
        lock(&self.session).clone()
    }

    /// Run `f` against the session and return its result.
    pub fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut lock(&self.session))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for SessionHandle {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionHandle>()
            .cloned()
            .ok_or_else(|| AppError::internal("Session middleware is not installed"))
    }
}

fn session_id_from_cookies(request: &Request, cookie_name: &str) -> Option<String> {
    request
        .headers()
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|c| c.name() == cookie_name)
        .map(|c| c.value().to_string())
}

/// `lng` query value, if it names a supported language.
pub fn requested_language(query: Option<&str>) -> Option<Language> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "lng")
        .and_then(|(_, value)| Language::from_api(value))
}

/// Attach a [`SessionHandle`] to the request, apply `lng`, and write the
/// session back after the handler has run. A visitor without a session only
/// gets one stored, and a cookie set, once something was written to it.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let settings = &state.config.session;
    let existing = session_id_from_cookies(&request, &settings.cookie_name)
        .and_then(|id| state.sessions.load(&id).map(|session| (id, session)));
    let (existing_id, mut session) = match existing {
        Some((id, session)) => (Some(id), session),
        None => (None, Session::default()),
    };

    match requested_language(request.uri().query()) {
        Some(Language::Cy) if state.config.features.welsh_language => {
            session.language = Language::Cy
        }
        Some(Language::En) => session.language = Language::En,
        _ => {}
    }

    let handle = SessionHandle::new(session);
    request.extensions_mut().insert(handle.clone());

    let mut response = next.run(request).await;

    let session = handle.snapshot();
    match existing_id {
        Some(id) => state.sessions.save(&id, session),
        None if session != Session::default() => {
            let id = state.sessions.create(session);
            let cookie = Cookie::build((settings.cookie_name.clone(), id))
                .http_only(true)
                .same_site(cookie::SameSite::Lax)
                .path("/")
                .secure(settings.secure_cookie)
                .build();
            match HeaderValue::from_str(&cookie.to_string()) {
                Ok(value) => {
                    response.headers_mut().append(header::SET_COOKIE, value);
                }
                Err(e) => tracing::error!(error = %e, "could not encode session cookie"),
            }
        }
        None => {}
    }

    response
}
