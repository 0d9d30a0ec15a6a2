use sfx_audio_backend::sound::backend;
use sfx_audio_backend::sound::Audio_Context;
use std::error::Error;

pub type Sound = backend::Sound;
pub type Sound_Buffer = backend::Sound_Buffer;

pub fn play_sound(sound: &mut Sound) {
    backend::play_sound(sound);
}

pub fn sound_playing(sound: &Sound) -> bool {
    backend::sound_playing(sound)
}

pub fn create_sound_with_buffer(
    ctx: &Audio_Context,
    buf: &Sound_Buffer,
) -> Result<Sound, Box<dyn Error>> {
    backend::create_sound_with_buffer(ctx, buf)
}
