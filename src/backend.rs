//! The external drop operation.
//!
//! Dropping a student is performed by the surrounding course-management
//! service, not by this GUI. The [`DropBackend`] trait is the seam: the
//! production implementation issues `PATCH /students/{id}/drop` against the
//! configured server, while tests substitute a recording backend.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::roster::DropTarget;

/// Options carried alongside a drop request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropFlags {
    /// Also ban the student from re-enrolling in this course.
    pub banned: bool,
}

/// Errors from the drop operation.
#[derive(Debug, Error)]
pub enum DropError {
    #[error("drop request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected drop of {target}: HTTP {status}")]
    Rejected { target: DropTarget, status: u16 },
}

/// External service that performs the actual drop.
#[async_trait]
pub trait DropBackend: Send + Sync {
    /// Drop the student identified by `target`.
    ///
    /// Must be invoked at most once per confirmation; the caller keeps the
    /// confirmation dialog open until this resolves.
    async fn drop_student(&self, target: &DropTarget, flags: DropFlags) -> Result<(), DropError>;
}

#[derive(Serialize)]
struct DropRequestBody {
    banned: bool,
}

/// HTTP implementation of [`DropBackend`].
pub struct HttpDropBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDropBackend {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn drop_url(&self, target: &DropTarget) -> String {
        format!("{}/students/{}/drop", self.base_url.trim_end_matches('/'), target)
    }
}

#[async_trait]
impl DropBackend for HttpDropBackend {
    async fn drop_student(&self, target: &DropTarget, flags: DropFlags) -> Result<(), DropError> {
        let url = self.drop_url(target);
        log::info!("PATCH {url}");

        let response = self
            .client
            .patch(&url)
            .json(&DropRequestBody {
                banned: flags.banned,
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(DropError::Rejected {
                target: target.clone(),
                status: status.as_u16(),
            })
        }
    }
}
