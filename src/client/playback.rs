use bytes::Bytes;
use std::io::Cursor;

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("audio output unavailable: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("failed to start playback: {0}")]
    Play(#[from] rodio::PlayError),
    #[error("could not decode audio: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
}

/// Decode and play an MPEG clip on the default output device, blocking
/// until the clip ends.
///
/// The output stream must outlive the sink, hence the named binding.
pub fn play_clip(audio: &Bytes) -> Result<(), PlaybackError> {
    let (_stream, stream_handle) = rodio::OutputStream::try_default()?;
    let sink = rodio::Sink::try_new(&stream_handle)?;

    let source = rodio::Decoder::new(Cursor::new(audio.to_vec()))?;
    sink.append(source);
    sink.sleep_until_end();

    Ok(())
}
