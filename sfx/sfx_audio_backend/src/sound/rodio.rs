use ::rodio::source::{Buffered, Source};
use ::rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::error::Error;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Keeps the output stream alive: dropping it stops all sounds.
pub struct Audio_Context {
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
}

// The whole file is decoded up front and shared between all the sounds playing it.
pub type Sound_Buffer = Buffered<Decoder<Cursor<Vec<u8>>>>;

// A Sound stands to a Sound_Buffer like a Sprite to a Texture.
pub type Sound = Sink;

pub fn init_audio() -> Audio_Context {
    match OutputStream::try_default() {
        Ok((stream, handle)) => {
            lok!("Successfully opened default audio device");
            Audio_Context {
                _stream: Some(stream),
                handle: Some(handle),
            }
        }
        Err(err) => {
            lerr!("Failed to open default audio device: {}", err);
            Audio_Context {
                _stream: None,
                handle: None,
            }
        }
    }
}

pub fn create_sound_buffer(fname: &Path) -> Result<Sound_Buffer, Box<dyn Error>> {
    let bytes = fs::read(fname)?;
    let decoder = Decoder::new(Cursor::new(bytes))?;
    Ok(decoder.buffered())
}

pub fn create_sound_with_buffer(
    ctx: &Audio_Context,
    buf: &Sound_Buffer,
) -> Result<Sound, Box<dyn Error>> {
    let handle = ctx
        .handle
        .as_ref()
        .ok_or_else(|| error!("no audio device was opened"))?;
    let sink = Sink::try_new(handle)?;
    sink.pause();
    sink.append(buf.clone());
    Ok(sink)
}

pub fn play_sound(sound: &mut Sound) {
    sound.play();
}

pub fn sound_playing(sound: &Sound) -> bool {
    !sound.empty()
}
