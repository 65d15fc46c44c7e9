use std::fmt;

/// How a single media URL is presented in the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video(VideoFormat),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VideoFormat {
    Mp4,
    Webm,
    Ogg,
}

impl VideoFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Mp4 => "video/mp4",
            Self::Webm => "video/webm",
            Self::Ogg => "video/ogg",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "mp4" => Some(Self::Mp4),
            "webm" => Some(Self::Webm),
            "ogg" => Some(Self::Ogg),
            _ => None,
        }
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mime_type())
    }
}

// classify
//
// only the very end of the url is inspected, so a query string after the
// extension makes the entry an image.  the comparison ignores case.
pub fn classify(url: &str) -> MediaKind {
    url.rsplit_once('.')
        .and_then(|(_, ext)| VideoFormat::from_extension(&ext.to_ascii_lowercase()))
        .map(MediaKind::Video)
        .unwrap_or(MediaKind::Image)
}

/// One rendered entry of the carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub url: String,
    pub kind: MediaKind,
    pub alt: String,
}

impl Slide {
    // alt text carries the 1-based position
    pub fn new(title: &str, index: usize, url: &str) -> Self {
        Slide {
            url: url.to_owned(),
            kind: classify(url),
            alt: format!("{} {}", title, index + 1),
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self.kind, MediaKind::Video(_))
    }

    // list key for the carousel.  it has to change whenever the url at a
    // position changes, otherwise the page keeps the old media element and a
    // video never reloads its source
    pub fn key(&self, index: usize) -> String {
        format!("{index}-{}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_video_extensions() {
        assert_eq!(classify("/reels/launch.mp4"), MediaKind::Video(VideoFormat::Mp4));
        assert_eq!(classify("clip.webm"), MediaKind::Video(VideoFormat::Webm));
        assert_eq!(classify("https://cdn.example.com/a.ogg"), MediaKind::Video(VideoFormat::Ogg));
    }

    #[test]
    fn extension_match_ignores_case() {
        assert_eq!(classify("/reels/LAUNCH.MP4"), MediaKind::Video(VideoFormat::Mp4));
        assert_eq!(classify("clip.WebM"), MediaKind::Video(VideoFormat::Webm));
    }

    #[test]
    fn everything_else_is_an_image() {
        assert_eq!(classify("https://via.placeholder.com/900x600/1a1a1a/00ffff?text=Reel+1"), MediaKind::Image);
        assert_eq!(classify("/img/cover.png"), MediaKind::Image);
        assert_eq!(classify("no-extension"), MediaKind::Image);
        assert_eq!(classify("video.mp4?autoplay=1"), MediaKind::Image);
        assert_eq!(classify("archive.mp4.zip"), MediaKind::Image);
        assert_eq!(classify(""), MediaKind::Image);
    }

    #[test]
    fn slide_alt_text_is_one_based() {
        let slide = Slide::new("Reel Series", 0, "/media/reel.mp4");
        assert_eq!(slide.alt, "Reel Series 1");
        assert!(slide.is_video());

        let slide = Slide::new("Reel Series", 2, "/media/reel.png");
        assert_eq!(slide.alt, "Reel Series 3");
        assert!(!slide.is_video());
    }

    #[test]
    fn video_mime_types() {
        assert_eq!(VideoFormat::Mp4.mime_type(), "video/mp4");
        assert_eq!(VideoFormat::Ogg.to_string(), "video/ogg");
    }

    #[test]
    fn slide_keys_follow_the_url_at_each_position() {
        let launch = Slide::new("Video Campaign", 0, "/media/launch.mp4");
        let reel = Slide::new("Reel Series", 0, "/media/reel.webm");
        assert_ne!(launch.key(0), reel.key(0));

        // reopening the same project reuses the same elements
        let again = Slide::new("Video Campaign", 0, "/media/launch.mp4");
        assert_eq!(launch.key(0), again.key(0));

        // the same url twice in one project still gets two keys
        assert_ne!(launch.key(0), launch.key(1));
    }
}
