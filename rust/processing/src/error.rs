// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the session layer.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Session errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] sinterbox_core::Error),

    #[error(transparent)]
    Geometry(#[from] sinterbox_geometry::Error),

    #[error("Nothing selected")]
    EmptySelection,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
