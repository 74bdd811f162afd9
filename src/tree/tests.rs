use super::*;
use crate::media::{Track, TrackType};

fn labels(nodes: &[DisplayNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.label.as_str()).collect()
}

fn keys(node: &DisplayNode) -> Vec<&str> {
    node.children.iter().map(|n| n.key.as_str()).collect()
}

fn video_track() -> Track {
    Track::new(TrackType::Video)
        .with("format", "H.264")
        .with("width", "1920")
        .with("height", "1080")
}

#[test]
fn video_track_gets_basic_and_video_categories_only() {
    let tree = build_tree(&video_track(), Locale::En);

    assert_eq!(labels(&tree), vec!["Basic Information", "Video Properties"]);
    assert_eq!(labels(&tree[0].children), vec!["Format"]);
    assert_eq!(labels(&tree[1].children), vec!["Width", "Height"]);
    assert!(tree.iter().all(|n| n.key != AUDIO_PROPERTIES && n.key != METADATA));
}

#[test]
fn leaves_follow_declared_key_order_not_track_order() {
    let track = Track::new(TrackType::Video)
        .with("height", "1080")
        .with("width", "1920");
    let tree = build_tree(&track, Locale::En);
    assert_eq!(keys(&tree[0]), vec!["width", "height"]);
}

#[test]
fn unmapped_keys_land_in_other_properties_with_fallback_name() {
    let track = Track::new(TrackType::General).with("custom_tag", "foo");
    let tree = build_tree(&track, Locale::En);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].key, OTHER_PROPERTIES);
    assert_eq!(tree[0].children.len(), 1);
    assert_eq!(tree[0].children[0].label, "Custom Tag");
    assert_eq!(tree[0].children[0].value.as_deref(), Some("foo"));
}

#[test]
fn keys_of_irrelevant_categories_are_not_shown_as_other() {
    // `width` belongs to Video Properties, which is not shown for audio.
    let track = Track::new(TrackType::Audio)
        .with("format", "FLAC")
        .with("width", "1920")
        .with("sampling_rate", "44100");
    let tree = build_tree(&track, Locale::En);

    assert_eq!(labels(&tree), vec!["Basic Information", "Audio Properties"]);
    assert!(
        tree.iter()
            .flat_map(|c| c.children.iter())
            .all(|leaf| leaf.key != "width")
    );
}

#[test]
fn blank_and_absent_values_are_omitted() {
    let mut track = Track::new(TrackType::Audio)
        .with("format", "")
        .with("channel_s", "  ")
        .with("custom", "");
    track.push("sampling_rate", None);

    assert!(build_tree(&track, Locale::En).is_empty());
}

#[test]
fn unknown_and_other_types_use_the_default_categories() {
    let track = Track::new(TrackType::Unknown)
        .with("format", "JPEG")
        .with("writing_library", "libjpeg")
        .with("title", "Cover")
        .with("sampling_rate", "44100");
    let tree = build_tree(&track, Locale::En);
    assert_eq!(
        labels(&tree),
        vec!["Basic Information", "Technical Details", "Metadata"]
    );

    let image = Track {
        track_type: TrackType::Image,
        ..track.clone()
    };
    assert_eq!(build_tree(&image, Locale::En).len(), 3);
    assert_eq!(
        relevant_categories(&TrackType::Other("VIDEO".into())),
        relevant_categories(&TrackType::Video)
    );
}

#[test]
fn values_are_formatted_per_key() {
    let track = Track::new(TrackType::Audio)
        .with("duration", "65000")
        .with("bit_rate", "128000");
    let tree = build_tree(&track, Locale::En);

    let values: Vec<&str> = tree
        .iter()
        .flat_map(|c| c.children.iter())
        .filter_map(|leaf| leaf.value.as_deref())
        .collect();
    assert_eq!(values, vec!["01:05", "128.0 kbps"]);
}

#[test]
fn duplicate_attribute_keys_are_shown_once() {
    let track = Track::new(TrackType::General)
        .with("format", "MPEG-4")
        .with("format", "ignored")
        .with("note", "a")
        .with("note", "b");
    let tree = build_tree(&track, Locale::En);

    assert_eq!(keys(&tree[0]), vec!["format"]);
    assert_eq!(tree[0].children[0].value.as_deref(), Some("MPEG-4"));
    assert_eq!(keys(&tree[1]), vec!["note"]);
}

#[test]
fn switching_locale_changes_only_display_strings() {
    let track = video_track().with("custom_tag", "foo");
    let en = build_tree(&track, Locale::En);
    let zh = build_tree(&track, Locale::Zh);

    assert_eq!(en.len(), zh.len());
    for (a, b) in en.iter().zip(zh.iter()) {
        assert_eq!(a.key, b.key);
        assert_eq!(keys(a), keys(b));
        for (la, lb) in a.children.iter().zip(b.children.iter()) {
            assert_eq!(la.value, lb.value);
        }
    }
    assert_eq!(zh[0].label, "基本信息");
    assert_eq!(zh[1].children[0].label, "宽度");
    assert_eq!(zh[0].label_in(Locale::En), "Basic Information");
}

#[test]
fn report_renders_header_categories_and_padded_leaves() {
    let track = video_track();
    let tree = build_tree(&track, Locale::En);
    let report = render_report(&track, &tree, Locale::En, 10);

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "=".repeat(60));
    assert_eq!(lines[1], "VIDEO TRACK INFORMATION");
    assert_eq!(lines[2], "=".repeat(60));
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "📋 Basic Information");
    assert_eq!(lines[5], "-".repeat(40));
    assert_eq!(lines[6], "  Format    : H.264");
    assert!(report.contains("  Width     : 1920\n"));
}

#[test]
fn report_header_is_localized() {
    let track = video_track();
    let tree = build_tree(&track, Locale::Zh);
    let report = render_report(&track, &tree, Locale::Zh, 25);
    assert!(report.contains("VIDEO 轨道信息"));
    assert!(report.contains("📋 视频属性"));
}
