use crate::models::consent::SurfaceChoice;
use crate::models::error::ShareError;
use crate::models::request::CaptureRequest;
use crate::models::stream::ResultStream;
use crate::traits::capture_backend::CaptureBackend;

/// Assemble the final stream from the user's accepted choice.
///
/// A video track is attached when the request asked for video; an audio
/// track is attached for the kind the user selected, if any. The selected
/// kind is honored as-is — binding authority rests with the consent
/// surface, which may legitimately offer more than the request's hints
/// seeded.
///
/// On any failure, tracks opened so far are released before the error is
/// returned, so no partially-acquired capture resources remain allocated.
pub fn assemble_stream<B: CaptureBackend>(
    request: &CaptureRequest,
    choice: &SurfaceChoice,
    backend: &B,
) -> Result<ResultStream, ShareError> {
    let video = if request.video_requested {
        Some(backend.open_video_track(choice.surface, &choice.source)?)
    } else {
        None
    };

    let audio = match choice.audio {
        Some(kind) => match backend.open_audio_track(kind, &choice.source) {
            Ok(track) => Some(track),
            Err(e) => {
                if let Some(ref video) = video {
                    log::warn!(
                        "audio track failed, releasing video track {}: {}",
                        video.id.as_str(),
                        e
                    );
                    backend.release_track(&video.id);
                }
                return Err(e);
            }
        },
        None => None,
    };

    Ok(ResultStream { video, audio })
}
