//! Classification and naming rules for user-supplied and recorded media.
//! The browser-facing handles (blobs, object URLs) live in the app crate;
//! everything here is testable natively.

/// Hard cap on the intake media list, uploads and recordings combined.
pub const MAX_FILES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// Classifies a declared content type by its prefix. Anything outside
    /// `image/`, `video/`, `audio/` is rejected as unsupported.
    pub fn from_mime(mime: &str) -> Option<MediaKind> {
        if mime.starts_with("image/") {
            Some(Self::Image)
        } else if mime.starts_with("video/") {
            Some(Self::Video)
        } else if mime.starts_with("audio/") {
            Some(Self::Audio)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

/// Which device stream a recording session asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingKind {
    Video,
    Audio,
}

impl RecordingKind {
    /// Video recordings capture camera and microphone; audio only the latter.
    pub fn wants_video(self) -> bool {
        matches!(self, Self::Video)
    }

    pub fn media_kind(self) -> MediaKind {
        match self {
            Self::Video => MediaKind::Video,
            Self::Audio => MediaKind::Audio,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Video => "video/webm",
            Self::Audio => "audio/webm",
        }
    }

    pub fn file_name(self, timestamp_ms: u64) -> String {
        format!("recorded-{}-{timestamp_ms}.webm", self.media_kind().label())
    }
}

/// Admission bookkeeping for the intake list. Every path that appends a file
/// (picked uploads and finished recordings alike) asks the gate first; it
/// enforces the max count and mints the entry's id. Ids start at 1 and are
/// never reused, even after removals.
#[derive(Debug)]
pub struct IntakeGate {
    next_id: u64,
}

impl IntakeGate {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Returns the id for one new entry, or `None` when the list is full.
    pub fn admit(&mut self, current_count: usize) -> Option<u64> {
        if current_count >= MAX_FILES {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        Some(id)
    }
}

impl Default for IntakeGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_prefixes_classify_into_the_three_kinds() {
        assert_eq!(MediaKind::from_mime("image/png"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("video/webm"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_mime("audio/mpeg"), Some(MediaKind::Audio));
    }

    #[test]
    fn unsupported_types_are_rejected() {
        assert_eq!(MediaKind::from_mime("application/pdf"), None);
        assert_eq!(MediaKind::from_mime("text/plain"), None);
        assert_eq!(MediaKind::from_mime(""), None);
        // Prefix match, not substring match.
        assert_eq!(MediaKind::from_mime("application/x-image/png"), None);
    }

    #[test]
    fn recording_constraints_follow_the_kind() {
        assert!(RecordingKind::Video.wants_video());
        assert!(!RecordingKind::Audio.wants_video());
        assert_eq!(RecordingKind::Audio.mime(), "audio/webm");
    }

    #[test]
    fn recording_file_names_carry_kind_and_timestamp() {
        assert_eq!(
            RecordingKind::Video.file_name(1700000000000),
            "recorded-video-1700000000000.webm"
        );
        assert_eq!(RecordingKind::Audio.file_name(7).as_str(), "recorded-audio-7.webm");
    }

    #[test]
    fn gate_never_admits_past_the_max() {
        let mut gate = IntakeGate::new();
        let mut list: Vec<u64> = Vec::new();
        for _ in 0..MAX_FILES + 3 {
            if let Some(id) = gate.admit(list.len()) {
                list.push(id);
            }
        }
        assert_eq!(list.len(), MAX_FILES);
        assert!(gate.admit(list.len()).is_none());
    }

    #[test]
    fn removal_frees_a_slot_and_ids_stay_unique() {
        let mut gate = IntakeGate::new();
        let mut list: Vec<u64> = Vec::new();
        while let Some(id) = gate.admit(list.len()) {
            list.push(id);
        }

        // Mixed sequence: remove two, admit two more, remove one, admit one.
        list.remove(0);
        list.remove(2);
        list.push(gate.admit(list.len()).unwrap());
        list.push(gate.admit(list.len()).unwrap());
        assert!(gate.admit(list.len()).is_none());
        list.pop();
        list.push(gate.admit(list.len()).unwrap());

        assert_eq!(list.len(), MAX_FILES);
        let mut seen = list.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), list.len());
    }

    #[test]
    fn gate_ids_are_sequential_from_one() {
        let mut gate = IntakeGate::new();
        assert_eq!(gate.admit(0), Some(1));
        assert_eq!(gate.admit(1), Some(2));
        assert_eq!(gate.admit(4), Some(3));
    }
}
