// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Sinterbox Core
//!
//! Plain parameter model shared by the sinter box geometry and session
//! crates. A sinter box is a hollow shell around a set of parts, perforated
//! by a grid of square gaps so loose powder can escape after SLS/MJF
//! printing.
//!
//! - [`FeatureValues`]: shell thickness, bar width, gap size and the six
//!   outward face offsets
//! - [`Direction`] / [`DirectionMap`]: the closed set of box faces
//! - [`LengthUnit`]: display units and unit-dependent defaults
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for parameters

pub mod direction;
pub mod error;
pub mod params;
pub mod units;

pub use direction::{Axis, Direction, DirectionMap};
pub use error::{ensure_non_negative, ensure_positive, Error, Result};
pub use params::FeatureValues;
pub use units::LengthUnit;
