//! Translation rows: `(key, English, Simplified Chinese)`.

pub(super) static CATEGORIES: &[(&str, &str, &str)] = &[
    ("Basic Information", "Basic Information", "基本信息"),
    ("Video Properties", "Video Properties", "视频属性"),
    ("Audio Properties", "Audio Properties", "音频属性"),
    ("Technical Details", "Technical Details", "技术细节"),
    ("Metadata", "Metadata", "元数据"),
    ("Other Properties", "Other Properties", "其他属性"),
];

pub(super) static ATTRIBUTES: &[(&str, &str, &str)] = &[
    // Basic
    ("format", "Format", "格式"),
    ("format_profile", "Format Profile", "格式配置"),
    ("codec_id", "Codec ID", "编解码器ID"),
    ("duration", "Duration", "时长"),
    ("file_size", "File Size", "文件大小"),
    ("overall_bit_rate", "Overall Bit Rate", "总比特率"),
    ("track_id", "Track ID", "轨道ID"),
    ("stream_identifier", "Stream ID", "流标识符"),
    // Video
    ("width", "Width", "宽度"),
    ("height", "Height", "高度"),
    ("display_aspect_ratio", "Aspect Ratio", "宽高比"),
    ("frame_rate", "Frame Rate", "帧率"),
    ("bit_rate", "Bit Rate", "比特率"),
    ("bit_depth", "Bit Depth", "位深度"),
    ("chroma_subsampling", "Chroma Subsampling", "色度子采样"),
    ("color_space", "Color Space", "色彩空间"),
    ("scan_type", "Scan Type", "扫描方式"),
    ("pixel_aspect_ratio", "Pixel Aspect Ratio", "像素宽高比"),
    ("resolution", "Resolution", "分辨率"),
    // Audio
    ("channel_s", "Channels", "声道数"),
    ("sampling_rate", "Sampling Rate", "采样率"),
    ("compression_mode", "Compression Mode", "压缩模式"),
    ("channel_layout", "Channel Layout", "声道布局"),
    ("channel_positions", "Channel Positions", "声道位置"),
    // Technical
    ("writing_library", "Writing Library", "编码库"),
    ("encoded_date", "Encoded Date", "编码日期"),
    ("tagged_date", "Tagged Date", "标记日期"),
    ("color_primaries", "Color Primaries", "色彩原色"),
    ("transfer_characteristics", "Transfer Characteristics", "传输特性"),
    ("matrix_coefficients", "Matrix Coefficients", "矩阵系数"),
    ("commercial_name", "Commercial Name", "商业名称"),
    ("internet_media_type", "MIME Type", "MIME类型"),
    // Tags
    ("title", "Title", "标题"),
    ("performer", "Performer", "表演者"),
    ("album", "Album", "专辑"),
    ("track_name", "Track Name", "曲目名称"),
    ("artist", "Artist", "艺术家"),
    ("genre", "Genre", "流派"),
    ("recorded_date", "Recorded Date", "录制日期"),
    ("copyright", "Copyright", "版权"),
    ("comment", "Comment", "注释"),
    // Misc
    ("maximum_bit_rate", "Maximum Bit Rate", "最大比特率"),
    ("minimum_bit_rate", "Minimum Bit Rate", "最小比特率"),
    ("stream_size", "Stream Size", "流大小"),
    ("frame_count", "Frame Count", "帧数"),
    ("delay", "Delay", "延迟"),
    ("language", "Language", "语言"),
    ("default", "Default", "默认"),
    ("forced", "Forced", "强制"),
];

pub(super) static UI_STRINGS: &[(&str, &str, &str)] = &[
    ("title", "MediaInfo Viewer", "媒体信息查看器"),
    ("tracks", "Tracks", "音视频轨道"),
    ("media_information", "Media Information", "媒体信息"),
    ("no_file_selected", "No file selected", "未选择文件"),
    ("ready", "Ready", "就绪"),
    ("loading", "Loading file...", "正在加载文件..."),
    ("file_loaded", "File loaded successfully", "文件加载成功"),
    ("error_loading", "Error loading file", "文件加载错误"),
    ("file_not_found", "File not found", "文件不存在"),
    ("error", "Error", "错误"),
    ("search", "Search", "搜索"),
    ("search_placeholder", "Search information...", "搜索信息..."),
    ("no_matches", "No matches", "无匹配结果"),
    ("language", "Language", "语言"),
    ("language_name", "English", "中文"),
    ("status", "status", "状态"),
    ("controls", "controls", "操作"),
    ("report_title", "MEDIA INFORMATION REPORT", "媒体信息报告"),
    ("track_information", "TRACK INFORMATION", "轨道信息"),
    ("exported_to", "Exported to", "已导出到"),
    ("export_failed", "Failed to export", "导出失败"),
    ("nothing_to_export", "No media information to export", "没有可导出的媒体信息"),
];

pub(super) static WELCOME_EN: &[&str] = &[
    "Welcome to MediaInfo Viewer",
    "",
    "Features:",
    "  - Categorized track information",
    "  - Live search across English and Chinese names",
    "  - Export to text or JSON",
    "",
    "To get started:",
    "  1. Run `specto <file>` with a media file",
    "  2. Switch tracks with tab / h / l",
    "  3. Press / to search, L to switch language, e / E to export",
    "",
    "Supported formats: MP3, FLAC, Ogg, Opus, WAV, AIFF, MP4/M4A, APE and more!",
];

pub(super) static WELCOME_ZH: &[&str] = &[
    "欢迎使用媒体信息查看器",
    "",
    "功能特性：",
    "  - 分类显示轨道信息",
    "  - 同时按中英文名称实时搜索",
    "  - 导出为文本或 JSON",
    "",
    "开始使用：",
    "  1. 运行 `specto <文件>` 打开媒体文件",
    "  2. 使用 tab / h / l 切换轨道",
    "  3. 按 / 搜索，L 切换语言，e / E 导出",
    "",
    "支持格式：MP3、FLAC、Ogg、Opus、WAV、AIFF、MP4/M4A、APE 等多种格式！",
];
