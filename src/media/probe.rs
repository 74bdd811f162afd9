use std::fs;
use std::path::Path;

use lofty::file::{FileType, TaggedFile};
use lofty::prelude::{Accessor, AudioFile, ItemKey, TaggedFileExt};
use tracing::debug;

use crate::error::{Error, Result};

use super::model::{Track, TrackType};

/// Source of raw track metadata for a file on disk.
///
/// Implementations run on the loader thread and must not touch any
/// presentation state.
pub trait Extractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<Vec<Track>>;
}

/// Extractor backed by `lofty`: a General track describing the container
/// and tags, followed by one Audio track for the stream properties.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyExtractor;

impl Extractor for LoftyExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<Track>> {
        let meta = fs::metadata(path).map_err(|e| Error::io(path, e))?;
        if !meta.is_file() {
            return Err(Error::Extract {
                path: path.to_path_buf(),
                message: "not a regular file".to_string(),
            });
        }

        let tagged = lofty::read_from_path(path).map_err(|e| Error::Extract {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let tracks = vec![general_track(&tagged, meta.len()), audio_track(&tagged)];
        debug!(path = %path.display(), tracks = tracks.len(), "extracted metadata");
        Ok(tracks)
    }
}

fn general_track(tagged: &TaggedFile, file_size: u64) -> Track {
    let props = tagged.properties();
    let file_type = tagged.file_type();

    let mut track = Track::new(TrackType::General);
    track.push("format", Some(container_name(file_type)));
    track.push("file_size", Some(file_size.to_string()));
    track.push("duration", duration_ms(props.duration()));
    track.push(
        "overall_bit_rate",
        props.overall_bitrate().map(|kbps| (u64::from(kbps) * 1000).to_string()),
    );
    track.push("internet_media_type", mime_type(file_type).map(str::to_string));

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        track.push("title", tag.title().map(|v| v.into_owned()));
        track.push("performer", tag.artist().map(|v| v.into_owned()));
        track.push("album", tag.album().map(|v| v.into_owned()));
        track.push("genre", tag.genre().map(|v| v.into_owned()));
        track.push("recorded_date", tag.get_string(&ItemKey::RecordingDate).map(str::to_string));
        track.push("copyright", tag.get_string(&ItemKey::CopyrightMessage).map(str::to_string));
        track.push("writing_library", tag.get_string(&ItemKey::EncoderSoftware).map(str::to_string));
        track.push("encoded_by", tag.get_string(&ItemKey::EncodedBy).map(str::to_string));
        track.push("language", tag.get_string(&ItemKey::Language).map(str::to_string));
        track.push("comment", tag.comment().map(|v| v.into_owned()));
    }

    track
}

fn audio_track(tagged: &TaggedFile) -> Track {
    let props = tagged.properties();

    let mut track = Track::new(TrackType::Audio);
    track.push("format", Some(codec_name(tagged.file_type())));
    track.push("duration", duration_ms(props.duration()));
    track.push(
        "bit_rate",
        props.audio_bitrate().map(|kbps| (u64::from(kbps) * 1000).to_string()),
    );
    track.push("channel_s", props.channels().map(|c| c.to_string()));
    track.push("sampling_rate", props.sample_rate().map(|hz| hz.to_string()));
    track.push("bit_depth", props.bit_depth().map(|bits| bits.to_string()));
    track.push(
        "compression_mode",
        compression_mode(tagged.file_type()).map(str::to_string),
    );
    track
}

pub(super) fn duration_ms(d: std::time::Duration) -> Option<String> {
    if d.is_zero() {
        None
    } else {
        Some(d.as_millis().to_string())
    }
}

fn container_name(file_type: FileType) -> String {
    match file_type {
        FileType::Aac => "ADTS".to_string(),
        FileType::Aiff => "AIFF".to_string(),
        FileType::Ape => "Monkey's Audio".to_string(),
        FileType::Flac => "FLAC".to_string(),
        FileType::Mpeg => "MPEG Audio".to_string(),
        FileType::Mp4 => "MPEG-4".to_string(),
        FileType::Mpc => "Musepack".to_string(),
        FileType::Opus | FileType::Vorbis | FileType::Speex => "Ogg".to_string(),
        FileType::Wav => "Wave".to_string(),
        FileType::WavPack => "WavPack".to_string(),
        other => format!("{other:?}"),
    }
}

fn codec_name(file_type: FileType) -> String {
    match file_type {
        FileType::Aac | FileType::Mp4 => "AAC".to_string(),
        FileType::Aiff | FileType::Wav => "PCM".to_string(),
        FileType::Mpeg => "MPEG Audio".to_string(),
        FileType::Opus => "Opus".to_string(),
        FileType::Vorbis => "Vorbis".to_string(),
        FileType::Speex => "Speex".to_string(),
        other => container_name(other),
    }
}

fn compression_mode(file_type: FileType) -> Option<&'static str> {
    match file_type {
        FileType::Flac | FileType::Ape | FileType::WavPack | FileType::Aiff | FileType::Wav => {
            Some("Lossless")
        }
        FileType::Aac
        | FileType::Mpeg
        | FileType::Mp4
        | FileType::Mpc
        | FileType::Opus
        | FileType::Vorbis
        | FileType::Speex => Some("Lossy"),
        _ => None,
    }
}

fn mime_type(file_type: FileType) -> Option<&'static str> {
    match file_type {
        FileType::Aac => Some("audio/aac"),
        FileType::Aiff => Some("audio/aiff"),
        FileType::Flac => Some("audio/flac"),
        FileType::Mpeg => Some("audio/mpeg"),
        FileType::Mp4 => Some("audio/mp4"),
        FileType::Opus => Some("audio/opus"),
        FileType::Vorbis | FileType::Speex => Some("audio/ogg"),
        FileType::Wav => Some("audio/wav"),
        _ => None,
    }
}
