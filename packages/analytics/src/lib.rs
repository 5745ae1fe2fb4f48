#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Trip filtering and statistics engine.
//!
//! [`filter`] narrows a loaded dataset by month and weekday, [`stats`]
//! computes the four statistic groups over the result, and [`duration`]
//! splits second counts into days/hours/minutes/seconds. Nothing here
//! keeps state between calls.

pub mod duration;
pub mod filter;
pub mod stats;
pub mod tally;

#[cfg(test)]
pub(crate) mod fixtures;
