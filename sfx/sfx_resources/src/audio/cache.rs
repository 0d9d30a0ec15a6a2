use crate::loaders;
use sfx_audio_backend::sound::{create_sound_buffer, Sound_Buffer};

define_file_loader!(Sound_Buffer, Sound_Loader, Sound_Cache, create_sound_buffer);
