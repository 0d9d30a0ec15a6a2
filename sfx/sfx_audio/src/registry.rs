use crate::sfx::Sfx;
use sfx_cfg::{Cfg_Value, Config};
use sfx_core::env::Env_Info;
use sfx_resources::audio::{sound_path, Audio_Resources, Sound_Buffer_Handle};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

pub const SOUNDS_CFG_SECTION: &str = "sounds";

#[derive(Debug, Clone, PartialEq)]
pub enum Registry_Error {
    Duplicate_Name(String),
    Missing_Sfx(Sfx),
    Invalid_Entry { name: String, value: Cfg_Value },
    Load_Failed { name: String, msg: String },
}

impl fmt::Display for Registry_Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Registry_Error::Duplicate_Name(name) => {
                write!(f, "Sound {} was registered more than once", name)
            }
            Registry_Error::Missing_Sfx(sfx) => write!(f, "No sound registered for {}", sfx),
            Registry_Error::Invalid_Entry { name, value } => write!(
                f,
                "Sound {} should map to a file name, but its value is {:?}",
                name, value
            ),
            Registry_Error::Load_Failed { name, msg } => {
                write!(f, "Failed to load sound {}: {}", name, msg)
            }
        }
    }
}

impl std::error::Error for Registry_Error {}

/// Immutable mapping from sound names to loaded sound buffers.
/// Built once via Sound_Registry_Builder, then only read.
// Keyed by the plain name: names come from callers, so a hash collision with a
// registered name must not resolve to the wrong sound.
#[derive(Debug)]
pub struct Sound_Registry {
    sounds: HashMap<String, Sound_Buffer_Handle>,
    names: Vec<String>,
    sfx_handles: [Sound_Buffer_Handle; Sfx::COUNT],
}

impl Sound_Registry {
    /// Registers every Sfx with its default file.
    pub fn with_default_sounds(
        ares: &mut Audio_Resources,
        env: &Env_Info,
    ) -> Result<Sound_Registry, Registry_Error> {
        let mut builder = Sound_Registry_Builder::new();
        for sfx in Sfx::ALL.iter() {
            builder.load(ares, env, sfx.name(), sfx.default_file())?;
        }
        builder.build()
    }

    /// Registers every entry of every /sounds cfg section (`name file`).
    /// A name may only appear once across all those sections.
    /// Sfx that the cfg doesn't mention get their default file.
    pub fn from_config(
        ares: &mut Audio_Resources,
        cfg: &Config,
        env: &Env_Info,
    ) -> Result<Sound_Registry, Registry_Error> {
        let mut builder = Sound_Registry_Builder::new();
        let mut n_sections = 0;
        for section in cfg.sections(SOUNDS_CFG_SECTION) {
            n_sections += 1;
            for entry in &section.entries {
                let file = entry
                    .value
                    .as_str()
                    .ok_or_else(|| Registry_Error::Invalid_Entry {
                        name: entry.key.clone(),
                        value: entry.value.clone(),
                    })?;
                builder.load(ares, env, &entry.key, file)?;
            }
        }
        if n_sections == 0 {
            lwarn!(
                "No /{} section in the cfg: using the default sounds.",
                SOUNDS_CFG_SECTION
            );
        }
        for sfx in Sfx::ALL.iter() {
            if !builder.contains(sfx.name()) {
                builder.load(ares, env, sfx.name(), sfx.default_file())?;
            }
        }
        builder.build()
    }

    pub fn get(&self, name: &str) -> Option<Sound_Buffer_Handle> {
        self.sounds.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sounds.contains_key(name)
    }

    pub fn sfx_handle(&self, sfx: Sfx) -> Sound_Buffer_Handle {
        self.sfx_handles[sfx.index()]
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Default)]
pub struct Sound_Registry_Builder {
    sounds: HashMap<String, Sound_Buffer_Handle>,
    names: Vec<String>,
}

impl Sound_Registry_Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, handle: Sound_Buffer_Handle) -> Result<(), Registry_Error> {
        match self.sounds.entry(String::from(name)) {
            Entry::Occupied(_) => Err(Registry_Error::Duplicate_Name(String::from(name))),
            Entry::Vacant(v) => {
                v.insert(handle);
                self.names.push(String::from(name));
                lverbose!("Registered sound {} -> {:?}", name, handle);
                Ok(())
            }
        }
    }

    /// Loads `file` from the sounds asset dir and registers it as `name`.
    pub fn load(
        &mut self,
        ares: &mut Audio_Resources,
        env: &Env_Info,
        name: &str,
        file: &str,
    ) -> Result<(), Registry_Error> {
        if self.contains(name) {
            return Err(Registry_Error::Duplicate_Name(String::from(name)));
        }
        let handle = ares
            .load_sound(&sound_path(env, file))
            .map_err(|msg| Registry_Error::Load_Failed {
                name: String::from(name),
                msg,
            })?;
        self.add(name, handle)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sounds.contains_key(name)
    }

    pub fn build(self) -> Result<Sound_Registry, Registry_Error> {
        let mut sfx_handles = [Sound_Buffer_Handle::from_u32(0); Sfx::COUNT];
        for sfx in Sfx::ALL.iter() {
            sfx_handles[sfx.index()] = *self
                .sounds
                .get(sfx.name())
                .ok_or(Registry_Error::Missing_Sfx(*sfx))?;
        }
        Ok(Sound_Registry {
            sounds: self.sounds,
            names: self.names,
            sfx_handles,
        })
    }
}

#[cfg(all(test, not(feature = "audio-rodio")))]
mod tests {
    use super::*;
    use sfx_common::sid;
    use sfx_test::test_common::create_test_audio_and_env;

    #[test]
    fn builder_rejects_duplicate_names() {
        let mut builder = Sound_Registry_Builder::new();
        builder.add("countdown", sid!("a.wav")).unwrap();
        assert_eq!(
            builder.add("countdown", sid!("b.wav")),
            Err(Registry_Error::Duplicate_Name(String::from("countdown")))
        );
    }

    #[test]
    fn builder_requires_every_sfx() {
        let mut builder = Sound_Registry_Builder::new();
        builder.add("beep", sid!("beep.wav")).unwrap();
        assert_eq!(
            builder.build().unwrap_err(),
            Registry_Error::Missing_Sfx(Sfx::Countdown)
        );
    }

    #[test]
    fn lookup_by_name_and_sfx() {
        let mut builder = Sound_Registry_Builder::new();
        builder.add("countdown", sid!("countdown.wav")).unwrap();
        builder.add("beep", sid!("beep.wav")).unwrap();
        let registry = builder.build().unwrap();

        assert_eq!(registry.get("countdown"), Some(sid!("countdown.wav")));
        assert_eq!(registry.sfx_handle(Sfx::Countdown), sid!("countdown.wav"));
        assert_eq!(registry.get("explosion"), None);
        assert!(registry.contains("beep"));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["countdown", "beep"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn default_sounds() {
        let (mut ares, env) = create_test_audio_and_env();
        let registry = Sound_Registry::with_default_sounds(&mut ares, &env).unwrap();
        assert_eq!(registry.len(), Sfx::COUNT);
        assert!(registry.contains("countdown"));
        assert_eq!(ares.n_loaded_sounds(), 1);
    }

    #[test]
    fn from_config_adds_extra_sounds() {
        let (mut ares, env) = create_test_audio_and_env();
        let cfg = Config::parse_str(
            "
/sounds
tick tick.wav
countdown countdown.wav
",
        );
        let registry = Sound_Registry::from_config(&mut ares, &cfg, &env).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["tick", "countdown"]);
        assert_ne!(registry.get("tick"), registry.get("countdown"));
    }

    #[test]
    fn from_config_fills_in_missing_sfx() {
        let (mut ares, env) = create_test_audio_and_env();
        let cfg = Config::parse_str("/sounds\ntick tick.wav\n");
        let registry = Sound_Registry::from_config(&mut ares, &cfg, &env).unwrap();
        assert!(registry.contains("countdown"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn from_config_rejects_bad_entries() {
        let (mut ares, env) = create_test_audio_and_env();
        let cfg = Config::parse_str("/sounds\ncountdown 3\n");
        assert_eq!(
            Sound_Registry::from_config(&mut ares, &cfg, &env).unwrap_err(),
            Registry_Error::Invalid_Entry {
                name: String::from("countdown"),
                value: Cfg_Value::Int(3),
            }
        );

        let cfg = Config::parse_str("/sounds\nbeep a.wav\nbeep b.wav\n");
        assert_eq!(
            Sound_Registry::from_config(&mut ares, &cfg, &env).unwrap_err(),
            Registry_Error::Duplicate_Name(String::from("beep"))
        );
    }

    #[test]
    fn from_config_reads_every_sounds_section() {
        let (mut ares, env) = create_test_audio_and_env();
        let cfg = Config::parse_str(
            "
/sounds
countdown countdown.wav
/audio
max_concurrent_sounds 4
/sounds
tick tick.wav
",
        );
        let registry = Sound_Registry::from_config(&mut ares, &cfg, &env).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["countdown", "tick"]);
        assert!(registry.contains("tick"));
    }

    #[test]
    fn duplicate_names_across_sections() {
        let (mut ares, env) = create_test_audio_and_env();
        let cfg = Config::parse_str("/sounds\ntick tick.wav\n/sounds\ntick other_tick.wav\n");
        assert_eq!(
            Sound_Registry::from_config(&mut ares, &cfg, &env).unwrap_err(),
            Registry_Error::Duplicate_Name(String::from("tick"))
        );
    }

    #[test]
    fn from_config_reports_load_failures() {
        let (mut ares, env) = create_test_audio_and_env();
        let cfg = Config::parse_str("/sounds\ncountdown countdown.txt\n");
        match Sound_Registry::from_config(&mut ares, &cfg, &env) {
            Err(Registry_Error::Load_Failed { name, msg }) => {
                assert_eq!(name, "countdown");
                assert!(msg.contains("countdown.txt"));
            }
            other => panic!("Expected Load_Failed, got {:?}", other),
        }
        assert_eq!(ares.n_loaded_sounds(), 0);
    }

    #[test]
    fn names_are_not_hashed() {
        // "eiAQA4" has the same FNV-1a hash as "countdown".
        let mut builder = Sound_Registry_Builder::new();
        builder.add("countdown", sid!("countdown.wav")).unwrap();
        let registry = builder.build().unwrap();

        assert_eq!(registry.get("eiAQA4"), None);
        assert!(!registry.contains("eiAQA4"));
    }
}
