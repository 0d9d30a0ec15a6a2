use crate::sound;
use sfx_cfg::Config;
use sfx_resources::audio::{Audio_Resources, Sound_Buffer_Handle};

pub const DEFAULT_MAX_CONCURRENT_SOUNDS: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audio_System_Config {
    pub max_concurrent_sounds: usize,
}

impl Default for Audio_System_Config {
    fn default() -> Self {
        Audio_System_Config {
            max_concurrent_sounds: DEFAULT_MAX_CONCURRENT_SOUNDS,
        }
    }
}

impl Audio_System_Config {
    pub fn from_cfg(cfg: &Config) -> Self {
        let max = cfg.read_or(
            "audio/max_concurrent_sounds",
            DEFAULT_MAX_CONCURRENT_SOUNDS as i32,
        );
        if max <= 0 {
            lwarn!(
                "audio/max_concurrent_sounds must be positive (got {}): using {}.",
                max,
                DEFAULT_MAX_CONCURRENT_SOUNDS
            );
            return Self::default();
        }
        Audio_System_Config {
            max_concurrent_sounds: max as usize,
        }
    }
}

type Gen_Type = u32;

struct Playing_Sound {
    pub sound: Option<sound::Sound>,
    pub gen: Gen_Type,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sound_Handle {
    idx: u32,
    gen: Gen_Type,
}

impl Sound_Handle {
    pub const INVALID: Sound_Handle = Sound_Handle {
        idx: u32::MAX,
        gen: Gen_Type::MAX,
    };
}

/// Keeps the sounds alive while they play, so callers can fire and forget.
pub struct Audio_System {
    max_concurrent_sounds: usize,
    sounds_playing: Vec<Playing_Sound>,
}

enum Playing_Sound_Slot_Res {
    Replace { idx: usize, old_gen: Gen_Type },
    Append,
    No_Free_Slot,
}

impl Audio_System {
    pub fn new(cfg: &Audio_System_Config) -> Self {
        assert!(cfg.max_concurrent_sounds < u32::MAX as usize - 1); // -1 since MAX is reserved for invalid handle
        Audio_System {
            max_concurrent_sounds: cfg.max_concurrent_sounds,
            sounds_playing: Vec::with_capacity(cfg.max_concurrent_sounds),
        }
    }

    /// Releases the sounds that finished playing.
    pub fn update(&mut self) {
        for Playing_Sound { sound, .. } in &mut self.sounds_playing {
            let finished = sound.as_ref().map_or(false, |s| !sound::sound_playing(s));
            if finished {
                // We don't increment the generation here as it's already obvious that any handle to this slot
                // is invalid (since sound is now None). We only increment the generation when we place a new
                // sound in this slot.
                sound.take();
            }
        }
    }

    pub fn play_sound(
        &mut self,
        rsrc: &Audio_Resources,
        sound_buf_handle: Sound_Buffer_Handle,
    ) -> Sound_Handle {
        let sound_buf = rsrc.get_sound_buffer(sound_buf_handle);
        let mut sound = match sound::create_sound_with_buffer(rsrc.audio_context(), sound_buf) {
            Ok(sound) => sound,
            Err(err) => {
                lerr!("Failed to create sound from {}: {}", sound_buf_handle, err);
                return Sound_Handle::INVALID;
            }
        };

        sound::play_sound(&mut sound);

        match self.get_first_free_sound_slot() {
            Playing_Sound_Slot_Res::Append => {
                self.sounds_playing.push(Playing_Sound {
                    sound: Some(sound),
                    gen: 1,
                });
                Sound_Handle {
                    idx: self.sounds_playing.len() as u32 - 1,
                    gen: 1,
                }
            }

            Playing_Sound_Slot_Res::Replace { idx, old_gen } => {
                self.place_sound(idx, old_gen, sound)
            }

            Playing_Sound_Slot_Res::No_Free_Slot => {
                // replace first sound (TODO: evict the sound that started playing earliest instead)
                if self.sounds_playing.is_empty() {
                    Sound_Handle::INVALID
                } else {
                    let old_gen = self.sounds_playing[0].gen;
                    self.place_sound(0, old_gen, sound)
                }
            }
        }
    }

    pub fn get_sound(&self, hdl: Sound_Handle) -> Option<&sound::Sound> {
        if hdl == Sound_Handle::INVALID {
            lwarn!("get_sound failed because handle {:?} is invalid", hdl);
            return None;
        }
        match self.sounds_playing.get(hdl.idx as usize) {
            Some(Playing_Sound {
                sound: Some(sound),
                gen,
            }) if *gen == hdl.gen => Some(sound),
            _ => {
                lwarn!(
                    "get_sound failed because handle {:?} is obsolete or invalid",
                    hdl
                );
                None
            }
        }
    }

    pub fn n_sounds_playing(&self) -> usize {
        self.sounds_playing
            .iter()
            .filter(|slot| slot.sound.is_some())
            .count()
    }

    fn place_sound(&mut self, idx: usize, old_gen: Gen_Type, sound: sound::Sound) -> Sound_Handle {
        let gen = old_gen.wrapping_add(1).max(1);
        self.sounds_playing[idx] = Playing_Sound {
            sound: Some(sound),
            gen,
        };
        Sound_Handle {
            idx: idx as _,
            gen,
        }
    }

    // Looks for the best slot to fit a new sound in.
    fn get_first_free_sound_slot(&self) -> Playing_Sound_Slot_Res {
        debug_assert!(self.sounds_playing.len() < u32::MAX as usize - 1);

        if self.sounds_playing.len() < self.max_concurrent_sounds {
            return Playing_Sound_Slot_Res::Append;
        }
        for (i, slot) in self.sounds_playing.iter().enumerate() {
            if slot.sound.is_none() {
                return Playing_Sound_Slot_Res::Replace {
                    idx: i,
                    old_gen: slot.gen,
                };
            }
        }
        Playing_Sound_Slot_Res::No_Free_Slot
    }
}

#[cfg(all(test, not(feature = "audio-rodio")))]
mod tests {
    use super::*;
    use sfx_audio_backend::sound::backend::n_times_played;
    use sfx_resources::audio::sound_path;
    use sfx_test::test_common::create_test_audio_and_env;

    #[test]
    fn max_concurrent_sounds() {
        let (mut ares, env) = create_test_audio_and_env();
        let snd_handle = ares
            .load_sound(&sound_path(&env, "countdown.wav"))
            .unwrap();

        let max_conc_sounds = 5;
        let mut a_sys = Audio_System::new(&Audio_System_Config {
            max_concurrent_sounds: max_conc_sounds,
        });
        a_sys.play_sound(&ares, snd_handle);
        assert_eq!(a_sys.n_sounds_playing(), 1);

        for _ in 0..6 {
            a_sys.play_sound(&ares, snd_handle);
        }
        assert_eq!(a_sys.n_sounds_playing(), max_conc_sounds);
        assert_eq!(n_times_played(ares.get_sound_buffer(snd_handle)), 7);
    }

    #[test]
    fn finished_slots_are_reused() {
        let (mut ares, env) = create_test_audio_and_env();
        let snd_handle = ares
            .load_sound(&sound_path(&env, "countdown.wav"))
            .unwrap();
        let mut a_sys = Audio_System::new(&Audio_System_Config {
            max_concurrent_sounds: 1,
        });

        let first = a_sys.play_sound(&ares, snd_handle);
        assert!(a_sys.get_sound(first).is_some());

        // The null backend never keeps playing, so update() frees the slot.
        a_sys.update();
        assert_eq!(a_sys.n_sounds_playing(), 0);
        assert!(a_sys.get_sound(first).is_none());

        let second = a_sys.play_sound(&ares, snd_handle);
        assert_ne!(first, second);
        assert!(a_sys.get_sound(second).is_some());
        assert!(a_sys.get_sound(first).is_none());
        assert!(a_sys.get_sound(Sound_Handle::INVALID).is_none());
    }

    #[test]
    fn failed_sound_creation_plays_nothing() {
        let env = sfx_test::test_common::create_test_env();
        let mut ares = Audio_Resources::new_with_context(
            sfx_audio_backend::sound::backend::init_audio_without_device(),
        );
        let snd_handle = ares
            .load_sound(&sound_path(&env, "countdown.wav"))
            .unwrap();
        let mut a_sys = Audio_System::new(&Audio_System_Config::default());

        let hdl = a_sys.play_sound(&ares, snd_handle);

        assert_eq!(hdl, Sound_Handle::INVALID);
        assert_eq!(a_sys.n_sounds_playing(), 0);
        assert_eq!(n_times_played(ares.get_sound_buffer(snd_handle)), 0);
    }

    #[test]
    fn config_from_cfg() {
        let cfg = Config::parse_str("/audio\nmax_concurrent_sounds 4\n");
        assert_eq!(Audio_System_Config::from_cfg(&cfg).max_concurrent_sounds, 4);

        let cfg = Config::parse_str("/audio\nmax_concurrent_sounds -1\n");
        assert_eq!(
            Audio_System_Config::from_cfg(&cfg),
            Audio_System_Config::default()
        );
    }
}
