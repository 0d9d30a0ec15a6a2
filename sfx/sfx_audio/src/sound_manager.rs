use crate::audio_system::{Audio_System, Audio_System_Config};
use crate::registry::{Registry_Error, Sound_Registry};
use crate::sfx::Sfx;
use sfx_cfg::Config;
use sfx_core::env::Env_Info;
use sfx_resources::audio::Audio_Resources;

/// Plays sound effects by name.
///
/// The registry is fixed at construction: pass the manager (or a reference to it)
/// to whatever needs to trigger sounds.
pub struct Sound_Manager {
    resources: Audio_Resources,
    registry: Sound_Registry,
    system: Audio_System,
}

impl Sound_Manager {
    pub fn new(
        resources: Audio_Resources,
        registry: Sound_Registry,
        cfg: &Audio_System_Config,
    ) -> Self {
        Sound_Manager {
            resources,
            registry,
            system: Audio_System::new(cfg),
        }
    }

    pub fn with_default_sounds(env: &Env_Info) -> Result<Self, Registry_Error> {
        let mut resources = Audio_Resources::new();
        let registry = Sound_Registry::with_default_sounds(&mut resources, env)?;
        Ok(Self::new(
            resources,
            registry,
            &Audio_System_Config::default(),
        ))
    }

    pub fn from_config(env: &Env_Info, cfg: &Config) -> Result<Self, Registry_Error> {
        let mut resources = Audio_Resources::new();
        let registry = Sound_Registry::from_config(&mut resources, cfg, env)?;
        linfo!("Registered {} sounds.", registry.len());
        Ok(Self::new(
            resources,
            registry,
            &Audio_System_Config::from_cfg(cfg),
        ))
    }

    /// Starts playing the sound registered as `name` and returns immediately.
    /// Unknown names are a no-op (with a warning in debug builds).
    pub fn play(&mut self, name: &str) {
        let handle = self.registry.get(name);
        lassert!(handle.is_some(), "Unknown sound: {}", name);
        if let Some(handle) = handle {
            self.system.play_sound(&self.resources, handle);
        }
    }

    pub fn play_sfx(&mut self, sfx: Sfx) {
        let handle = self.registry.sfx_handle(sfx);
        self.system.play_sound(&self.resources, handle);
    }

    /// Should be called periodically by the host loop to release finished sounds.
    pub fn update(&mut self) {
        self.system.update();
    }

    pub fn n_sounds_playing(&self) -> usize {
        self.system.n_sounds_playing()
    }

    pub fn registry(&self) -> &Sound_Registry {
        &self.registry
    }

    pub fn audio_resources(&self) -> &Audio_Resources {
        &self.resources
    }
}
