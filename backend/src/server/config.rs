//! HTTP server configuration.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::domain::ports::BookRepository;

/// Everything [`super::create_server`] needs besides health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) books: Arc<dyn BookRepository>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, books: Arc<dyn BookRepository>) -> Self {
        Self { bind_addr, books }
    }
}
