//! Blocking HTTP source backed by ureq

use super::{FetchError, HttpSource};
use std::io::Read;
use std::time::Duration;

/// Real network source
pub struct UreqSource {
    agent: ureq::Agent,
}

impl UreqSource {
    /// Build an HTTPS-only agent
    ///
    /// Without a timeout the agent keeps ureq's defaults.
    pub fn new(timeout: Option<Duration>, user_agent: Option<&str>) -> Self {
        let mut builder = ureq::AgentBuilder::new().https_only(true);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }

        Self {
            agent: builder.build(),
        }
    }
}

impl Default for UreqSource {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl HttpSource for UreqSource {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status,
                })
            }
            Err(e) => {
                return Err(FetchError::Transport {
                    url: url.to_string(),
                    message: e.to_string(),
                })
            }
        };

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|source| FetchError::Io {
                url: url.to_string(),
                source,
            })?;

        Ok(body)
    }
}
