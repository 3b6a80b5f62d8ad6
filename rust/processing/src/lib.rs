// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sinter box session layer
//!
//! Ties the geometry crate to an interactive command: selection changes,
//! face offsets, preview descriptors and the final boolean build.

pub mod config;
pub mod error;
pub mod session;

pub use config::{SessionConfig, DEFAULT_COMPONENT_NAME};
pub use error::{Error, Result};
pub use session::{
    BodySummary, DirectionalOffset, Preview, PreviewMode, Session, SinterBox, Snapshot,
};
