//! # display-share-headless
//!
//! Host adapters for running display-share sessions without an interactive
//! picker: CI pipelines, kiosk installs, integration harnesses.
//!
//! Provides:
//! - `ScriptedConsent` — consent session answering from a preset script
//! - `SyntheticBackend` — capture backend minting synthetic track handles,
//!   with live-track accounting and failure injection
//!
//! ## Usage
//! ```ignore
//! use display_share_core::{DisplayRequest, ShareSession};
//! use display_share_headless::{AudioPick, ConsentScript, ScriptedConsent, SyntheticBackend};
//!
//! let request = DisplayRequest::new(true, true)
//!     .with_window_audio("window")
//!     .normalize()?;
//! let consent = ScriptedConsent::new(ConsentScript::Accept {
//!     surface: None,
//!     source: SourceId::new("window-1"),
//!     audio: AudioPick::Default,
//! });
//! let stream = ShareSession::new(request, consent, SyntheticBackend::new()).run()?;
//! ```

pub mod scripted_consent;
pub mod synthetic_backend;

pub use scripted_consent::{AudioPick, ConsentScript, ScriptedConsent};
pub use synthetic_backend::{SyntheticBackend, TrackLedger};
