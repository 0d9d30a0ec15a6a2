#[rustfmt::skip]
use {
    sfx_core::env::Env_Info,
    sfx_resources::audio::Audio_Resources,
};

pub fn create_test_env() -> Env_Info {
    Env_Info::gather().expect("Failed to gather env info!")
}

// Used for setting up tests which need resources
pub fn create_test_audio_and_env() -> (Audio_Resources, Env_Info) {
    (Audio_Resources::new(), create_test_env())
}
