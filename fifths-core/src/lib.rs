//! # fifths-core
//!
//! State coordination for the fifths visualizer. Owns the current tonic,
//! mode and selected chord, recomputes the scale through `fifths-types` on
//! every action, and pushes the result to subscribed views.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fifths_core::config::Config;
//! use fifths_core::coordinator::StateCoordinator;
//! use fifths_types::{Action, Dispatcher, Pitch};
//!
//! let config = Config::load();
//! let mut coordinator = StateCoordinator::new(config.defaults());
//! coordinator.subscribe(|change| println!("{:?}", change.scale.pitches()));
//! coordinator.dispatch(&Action::SetTonic(Pitch::G));
//! ```
//!
//! ## Module Overview
//!
//! - [`state`]: `AppState`, `MusicalSettings`
//! - [`dispatch`]: `dispatch_action()`, the reducer from action to new state
//! - [`coordinator`]: `StateCoordinator`: subscriptions and broadcast
//! - [`config`]: TOML configuration loading (embedded + user override)
//! - [`logging`]: file logger setup
//! - [`error`]: crate error type

pub mod config;
pub mod coordinator;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod state;

pub use error::Error;
