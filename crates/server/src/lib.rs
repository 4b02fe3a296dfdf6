// Case formatting and progress tracking, usable without the HTTP stack
pub mod dates;
pub mod documents;
pub mod formatter;
pub mod i18n;
pub mod progress;
pub mod urls;
pub mod validation;

#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod case_api;

#[cfg(feature = "server")]
pub mod session;

#[cfg(feature = "server")]
pub mod state;

#[cfg(feature = "server")]
pub mod guard;

#[cfg(feature = "server")]
pub mod pages;

#[cfg(feature = "server")]
pub mod openapi;
