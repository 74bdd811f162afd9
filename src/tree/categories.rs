use std::collections::HashSet;
use std::sync::LazyLock;

use crate::media::TrackType;

pub const BASIC_INFORMATION: &str = "Basic Information";
pub const VIDEO_PROPERTIES: &str = "Video Properties";
pub const AUDIO_PROPERTIES: &str = "Audio Properties";
pub const TECHNICAL_DETAILS: &str = "Technical Details";
pub const METADATA: &str = "Metadata";
pub const OTHER_PROPERTIES: &str = "Other Properties";

/// A named, ordered group of attribute keys shown together.
#[derive(Debug)]
pub struct CategorySpec {
    pub name: &'static str,
    pub keys: &'static [&'static str],
}

pub static CATEGORY_SPECS: [CategorySpec; 5] = [
    CategorySpec {
        name: BASIC_INFORMATION,
        keys: &[
            "format",
            "format_profile",
            "codec_id",
            "duration",
            "file_size",
            "overall_bit_rate",
            "track_id",
            "stream_identifier",
        ],
    },
    CategorySpec {
        name: VIDEO_PROPERTIES,
        keys: &[
            "width",
            "height",
            "display_aspect_ratio",
            "frame_rate",
            "bit_rate",
            "bit_depth",
            "chroma_subsampling",
            "color_space",
            "scan_type",
        ],
    },
    CategorySpec {
        name: AUDIO_PROPERTIES,
        keys: &[
            "channel_s",
            "sampling_rate",
            "bit_rate",
            "compression_mode",
            "channel_layout",
            "bit_depth",
        ],
    },
    CategorySpec {
        name: TECHNICAL_DETAILS,
        keys: &[
            "writing_library",
            "encoded_date",
            "tagged_date",
            "color_primaries",
            "transfer_characteristics",
            "matrix_coefficients",
        ],
    },
    CategorySpec {
        name: METADATA,
        keys: &[
            "title",
            "performer",
            "album",
            "track_name",
            "artist",
            "genre",
            "recorded_date",
            "copyright",
        ],
    },
];

static CATEGORIZED_KEYS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    CATEGORY_SPECS
        .iter()
        .flat_map(|spec| spec.keys.iter().copied())
        .collect()
});

pub fn category_spec(name: &str) -> Option<&'static CategorySpec> {
    CATEGORY_SPECS.iter().find(|spec| spec.name == name)
}

/// Whether any category claims `key`, relevant to the track or not.
pub fn is_categorized(key: &str) -> bool {
    CATEGORIZED_KEYS.contains(key)
}

/// Categories shown for a track type, in display order.
pub fn relevant_categories(track_type: &TrackType) -> [&'static str; 3] {
    let kind = track_type.as_str();
    if kind.eq_ignore_ascii_case("video") {
        [BASIC_INFORMATION, VIDEO_PROPERTIES, TECHNICAL_DETAILS]
    } else if kind.eq_ignore_ascii_case("audio") {
        [BASIC_INFORMATION, AUDIO_PROPERTIES, METADATA]
    } else {
        [BASIC_INFORMATION, TECHNICAL_DETAILS, METADATA]
    }
}
