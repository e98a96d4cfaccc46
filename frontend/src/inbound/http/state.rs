//! Shared HTTP adapter state.
//!
//! Page controllers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{GuestbooksApi, UsersApi};

/// Dependency bundle for page controllers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersApi>,
    pub guestbooks: Arc<dyn GuestbooksApi>,
}

impl HttpState {
    /// Construct state from independent port implementations.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// use frontend::inbound::http::state::HttpState;
    /// use frontend::outbound::rest::RestResourceClient;
    ///
    /// let base = url::Url::parse("http://localhost:8000").expect("url");
    /// let client = RestResourceClient::new(base, Duration::from_secs(30)).expect("client");
    /// let client = Arc::new(client);
    /// let state = HttpState::new(client.clone(), client);
    /// let _users = state.users.clone();
    /// ```
    pub fn new(users: Arc<dyn UsersApi>, guestbooks: Arc<dyn GuestbooksApi>) -> Self {
        Self { users, guestbooks }
    }

    /// Share one client that implements both ports.
    pub fn from_client<C>(client: C) -> Self
    where
        C: UsersApi + GuestbooksApi + 'static,
    {
        let client = Arc::new(client);
        Self {
            users: client.clone(),
            guestbooks: client,
        }
    }
}
