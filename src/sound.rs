// turf/src/sound.rs
// SoundManager for playing UI sounds
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::global_prefs::global_prefs;

#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub enum SoundType {
    TabChange,
    OpenOverlay,
    CloseOverlay,
    MessageSent,
    Like,
    Notify,
}

impl SoundType {
    const ALL: [SoundType; 6] = [
        SoundType::TabChange,
        SoundType::OpenOverlay,
        SoundType::CloseOverlay,
        SoundType::MessageSent,
        SoundType::Like,
        SoundType::Notify,
    ];

    fn file_name(self) -> &'static str {
        match self {
            SoundType::TabChange => "tab_change.mp3",
            SoundType::OpenOverlay => "open.mp3",
            SoundType::CloseOverlay => "close.mp3",
            SoundType::MessageSent => "send_message.mp3",
            SoundType::Like => "like.mp3",
            SoundType::Notify => "notify.mp3",
        }
    }
}

/// `$TURF_SOUNDS_DIR`, otherwise `sounds/` next to the manifest. The mp3 files
/// are not bundled; a missing file leaves that sound silent.
pub fn sounds_dir() -> PathBuf {
    std::env::var("TURF_SOUNDS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("sounds"))
}

fn load_sounds(dir: &Path) -> HashMap<SoundType, Vec<u8>> {
    SoundType::ALL
        .iter()
        .filter_map(|&sound| {
            let path = dir.join(sound.file_name());
            match std::fs::read(&path) {
                Ok(data) => Some((sound, data)),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "sound not loaded");
                    None
                }
            }
        })
        .collect()
}

#[cfg(feature = "audio")]
struct Output {
    _stream: rodio::OutputStream,
    stream_handle: rodio::OutputStreamHandle,
}

pub struct SoundManager {
    #[cfg(feature = "audio")]
    output: Option<Output>,
    sounds: HashMap<SoundType, Vec<u8>>, // Store sound data in memory
}

impl SoundManager {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "audio")]
            output: Self::open_output(),
            sounds: load_sounds(&sounds_dir()),
        }
    }

    /// A manager that never plays anything.
    pub fn silent() -> Self {
        Self {
            #[cfg(feature = "audio")]
            output: None,
            sounds: HashMap::new(),
        }
    }

    #[cfg(feature = "audio")]
    fn open_output() -> Option<Output> {
        match rodio::OutputStream::try_default() {
            Ok((_stream, stream_handle)) => Some(Output { _stream, stream_handle }),
            Err(e) => {
                tracing::warn!(error = %e, "no audio output, sound effects disabled");
                None
            }
        }
    }

    pub fn play(&self, sound: SoundType) {
        if !global_prefs().sound_effects_enabled {
            return;
        }
        let Some(data) = self.sounds.get(&sound).filter(|d| !d.is_empty()) else {
            return;
        };
        self.play_bytes(data);
    }

    #[cfg(feature = "audio")]
    fn play_bytes(&self, data: &[u8]) {
        let Some(output) = &self.output else {
            return;
        };
        let cursor = std::io::Cursor::new(data.to_vec());
        if let Ok(decoder) = rodio::Decoder::new(cursor) {
            if let Ok(sink) = rodio::Sink::try_new(&output.stream_handle) {
                sink.append(decoder);
                sink.detach(); // Play in background
            }
        }
    }

    #[cfg(not(feature = "audio"))]
    fn play_bytes(&self, _data: &[u8]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sounds_dir_loads_nothing() {
        let dir = std::env::temp_dir().join(format!("turf-no-sounds-{}", std::process::id()));
        assert!(load_sounds(&dir).is_empty());
    }

    #[test]
    fn test_sounds_load_from_dir() {
        let dir = std::env::temp_dir().join(format!("turf-sounds-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SoundType::Like.file_name()), b"ID3").unwrap();
        let sounds = load_sounds(&dir);
        assert_eq!(sounds.len(), 1);
        assert_eq!(sounds.get(&SoundType::Like).map(Vec::as_slice), Some(&b"ID3"[..]));
        std::fs::remove_dir_all(&dir).ok();
    }
}
