use super::loaders;
use sfx_audio_backend::sound::{Audio_Context, Sound_Buffer};
use sfx_core::env::{asset_path, Env_Info};
use std::path::Path;

mod cache;

pub type Sound_Buffer_Handle = loaders::Res_Handle;

/// Owns the audio context and every sound buffer loaded through it.
pub struct Audio_Resources {
    audio_ctx: Audio_Context,
    sounds: cache::Sound_Cache,
}

impl Audio_Resources {
    pub fn new() -> Self {
        Self::new_with_context(sfx_audio_backend::sound::init_audio())
    }

    pub fn new_with_context(audio_ctx: Audio_Context) -> Self {
        Audio_Resources {
            audio_ctx,
            sounds: cache::Sound_Cache::new(),
        }
    }

    pub fn load_sound(&mut self, fname: &Path) -> Result<Sound_Buffer_Handle, String> {
        self.sounds.load(fname)
    }

    pub fn n_loaded_sounds(&self) -> usize {
        self.sounds.n_loaded()
    }

    pub fn get_sound_buffer(&self, handle: Sound_Buffer_Handle) -> &Sound_Buffer {
        self.sounds.must_get(handle)
    }

    pub fn try_get_sound_buffer(&self, handle: Sound_Buffer_Handle) -> Option<&Sound_Buffer> {
        self.sounds.get(handle)
    }

    pub fn audio_context(&self) -> &Audio_Context {
        &self.audio_ctx
    }
}

pub fn sound_path(env: &Env_Info, file: &str) -> Box<Path> {
    asset_path(env, "sounds", file)
}

#[cfg(all(test, not(feature = "audio-rodio")))]
mod tests {
    use super::*;

    #[test]
    fn same_sound_is_loaded_once() {
        let mut ares = Audio_Resources::new();
        let a = ares.load_sound(Path::new("assets/sounds/countdown.wav")).unwrap();
        let b = ares.load_sound(Path::new("assets/sounds/countdown.wav")).unwrap();
        assert_eq!(a, b);
        assert_eq!(ares.n_loaded_sounds(), 1);
        assert!(ares.try_get_sound_buffer(a).is_some());
    }

    #[test]
    fn unsupported_sound_is_not_cached() {
        let mut ares = Audio_Resources::new();
        let err = ares.load_sound(Path::new("assets/sounds/notes.txt")).unwrap_err();
        assert!(err.contains("notes.txt"));
        assert_eq!(ares.n_loaded_sounds(), 0);
    }
}
