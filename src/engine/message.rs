use std::fmt::Display;

/// Audio container formats accepted by the inference endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormatType {
    Mp3,
    Wav,
}

impl AudioFormatType {
    /// Resolves a format tag to its enum value. The match is exact, unknown
    /// or differently cased tags resolve to `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "mp3" => Some(Self::Mp3),
            "wav" => Some(Self::Wav),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
        }
    }
}

impl Display for AudioFormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Raw audio plus the metadata an engine needs to interpret it.
#[derive(Debug, Clone)]
pub struct AudioMessage {
    pub data: Vec<u8>,
    pub format: AudioFormatType,
    pub sample_rate: u32,
    pub sample_width: u32,
}

impl AudioMessage {
    pub fn new(data: Vec<u8>, format: AudioFormatType, sample_rate: u32, sample_width: u32) -> Self {
        Self {
            data,
            format,
            sample_rate,
            sample_width,
        }
    }
}

/// Recognized text produced by an engine run.
#[derive(Debug, Clone)]
pub struct TextMessage {
    pub data: String,
}

impl TextMessage {
    pub fn new(data: String) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_resolve() {
        assert_eq!(AudioFormatType::from_tag("wav"), Some(AudioFormatType::Wav));
        assert_eq!(AudioFormatType::from_tag("mp3"), Some(AudioFormatType::Mp3));
    }

    #[test]
    fn unknown_tags_do_not_resolve() {
        assert_eq!(AudioFormatType::from_tag("ogg"), None);
        assert_eq!(AudioFormatType::from_tag(""), None);
    }

    #[test]
    fn tag_lookup_is_case_sensitive() {
        assert_eq!(AudioFormatType::from_tag("WAV"), None);
    }

    #[test]
    fn tags_round_trip() {
        assert_eq!(AudioFormatType::Wav.as_tag(), "wav");
        assert_eq!(AudioFormatType::Mp3.to_string(), "mp3");
    }
}
