pub mod audio_offers;
pub mod surface_offers;
