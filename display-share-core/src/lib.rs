//! # display-share-core
//!
//! Platform-agnostic decision engine for display-capture sharing.
//!
//! Given a caller's capture request, decides which audio-sharing choices a
//! picker should offer (and which to pre-highlight) for each candidate
//! surface type, brokers the user's consent, and assembles the final
//! stream from the host's capture backend. Hosts implement the
//! `ConsentSession` and `CaptureBackend` traits and plug into the generic
//! `ShareSession`.
//!
//! ## Architecture
//!
//! ```text
//! display-share-core (this crate)
//! ├── models/    ← DisplayRequest, CaptureRequest, AudioOfferSet, ShareError, ...
//! ├── resolve/   ← pure audio-offer resolution (the decision table)
//! ├── traits/    ← ConsentSession, CaptureBackend, ShareDelegate
//! └── session/   ← ShareSession (one-shot orchestrator) + stream assembly
//! ```
//!
//! Control flow: caller request → normalize → resolve offers per candidate
//! surface → consent prompt (single suspension point) → stream assembly.
//! Offers are advisory throughout: they seed what the picker emphasizes,
//! and the user's final choice always wins.

pub mod models;
pub mod resolve;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::consent::{ConsentOutcome, ConsentPrompt, SourceId, SurfaceChoice};
pub use models::error::ShareError;
pub use models::offer::{AudioOfferKind, AudioOfferSet};
pub use models::request::{
    CaptureRequest, DisplayRequest, DisplaySurface, SurfaceHint, SystemAudioPreference,
    WindowAudioPreference,
};
pub use models::state::ShareState;
pub use models::stream::{AudioTrack, ResultStream, StreamSummary, TrackId, VideoTrack};
pub use resolve::surface_offers::SurfaceOffers;
pub use session::assemble::assemble_stream;
pub use session::share::ShareSession;
pub use traits::capture_backend::CaptureBackend;
pub use traits::consent_session::{CancelHandle, CancelToken, ConsentSession};
pub use traits::share_delegate::ShareDelegate;
