use std::cell::Cell;

use git2::{Cred, CredentialType, Direction, Remote, RemoteCallbacks};
use tracing::{debug, instrument};

use crate::domain::REFS_TAGS;
use crate::git::{RemoteEndpoint, RemoteError, TagSource};

/// Lists tags with `git2`, the same way `git ls-remote --tags` does.
///
/// No local repository is needed: a detached remote is connected for fetch
/// and its advertised references are read. Local paths work as locations
/// too, which is what the integration tests rely on.
#[derive(Debug, Default, Clone, Copy)]
pub struct Git2TagSource;

impl Git2TagSource {
    pub fn new() -> Self {
        Git2TagSource
    }

    fn callbacks(endpoint: &RemoteEndpoint) -> RemoteCallbacks<'_> {
        let mut callbacks = RemoteCallbacks::new();

        if let Some(credentials) = endpoint.credentials.as_ref() {
            // libgit2 keeps asking while the callback succeeds; offer the pair once.
            let offered = Cell::new(false);
            callbacks.credentials(move |_url, _username_from_url, allowed_types| {
                if offered.replace(true) {
                    return Err(git2::Error::from_str("credentials were rejected"));
                }
                if !allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
                    return Err(git2::Error::from_str(
                        "remote does not accept username/password credentials",
                    ));
                }
                Cred::userpass_plaintext(&credentials.username, &credentials.password)
            });
        }

        callbacks
    }
}

impl TagSource for Git2TagSource {
    #[instrument(skip_all, fields(url = %endpoint.url))]
    fn list_tags(&self, endpoint: &RemoteEndpoint) -> Result<Vec<String>, RemoteError> {
        let mut remote =
            Remote::create_detached(endpoint.url.as_str()).map_err(|source| {
                RemoteError::Connect {
                    url: endpoint.url.clone(),
                    source,
                }
            })?;

        let connection = remote
            .connect_auth(Direction::Fetch, Some(Self::callbacks(endpoint)), None)
            .map_err(|source| RemoteError::Connect {
                url: endpoint.url.clone(),
                source,
            })?;

        let heads = connection.list().map_err(|source| RemoteError::List {
            url: endpoint.url.clone(),
            source,
        })?;

        let tags: Vec<String> = heads
            .iter()
            .map(|head| head.name())
            .filter(|name| name.starts_with(REFS_TAGS))
            .map(|name| name.to_string())
            .collect();

        debug!(advertised = heads.len(), tags = tags.len(), "listed remote references");
        Ok(tags)
    }
}
