// ABOUTME: Data models for Podium API resources
// ABOUTME: Flat value objects deserialized one-to-one from server JSON records
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entity types returned by the Podium API.
//!
//! Every struct maps to exactly one server JSON record. Keys are renamed to
//! Rust conventions where documented (`id` → `{resource}_id`, `URI` →
//! `uri`); fields the server may leave out deserialize to `None` instead of
//! failing. Instances are plain data with no identity or caching behavior.

mod account;
mod alertmessage;
mod device;
mod event;
mod eventdevice;
mod friendship;
mod lap;
mod logfile;
mod preset;
mod racestat;
mod rating;
mod redirect;
mod token;
mod user;
mod venue;

pub use account::PodiumAccount;
pub use alertmessage::PodiumAlertMessage;
pub use device::PodiumDevice;
pub use event::PodiumEvent;
pub use eventdevice::PodiumEventDevice;
pub use friendship::PodiumFriendship;
pub use lap::PodiumLap;
pub use logfile::PodiumLogfile;
pub use preset::PodiumPreset;
pub use racestat::PodiumRacestat;
pub use rating::PodiumRating;
pub use redirect::PodiumRedirect;
pub use token::PodiumToken;
pub use user::PodiumUser;
pub use venue::PodiumVenue;
