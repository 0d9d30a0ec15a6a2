// The rodio backend wins if both features are enabled, so that a workspace-wide
// build with `audio-rodio` on somewhere doesn't end up with two backends.
#[cfg(not(feature = "audio-rodio"))]
pub mod null;

#[cfg(feature = "audio-rodio")]
pub mod rodio;

#[cfg(not(feature = "audio-rodio"))]
pub use self::null as backend;

#[cfg(feature = "audio-rodio")]
pub use self::rodio as backend;

pub type Sound_Buffer = backend::Sound_Buffer;
pub type Sound = backend::Sound;
pub type Audio_Context = backend::Audio_Context;

pub use backend::{
    create_sound_buffer, create_sound_with_buffer, init_audio, play_sound, sound_playing,
};
