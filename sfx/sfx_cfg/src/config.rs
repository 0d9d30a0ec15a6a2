use super::parsing::{self, Cfg_Section};
use super::value::Cfg_Value;
use sfx_common::stringid::String_Id;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::path::Path;

/// Flat table of all the cfg vars, addressed by the String_Id of "section/key".
/// The parsed sections are kept around so a whole section can be enumerated.
pub struct Config {
    cfg_var_table: HashMap<String_Id, Cfg_Value>,
    sections: Vec<Cfg_Section>,
}

impl Config {
    pub fn new_from_dir(dir_path: &Path) -> std::io::Result<Config> {
        #[cfg(debug_assertions)]
        let start_t = std::time::Instant::now();

        let config = Self::new_from_sections(parsing::parse_config_dir(dir_path)?);

        #[cfg(debug_assertions)]
        {
            let diff = start_t.elapsed();
            lok!(
                "Loaded cfg {:?} in {} ms.",
                dir_path,
                diff.as_secs_f32() * 1000.0,
            );
        }

        Ok(config)
    }

    pub fn new_from_file(path: &Path) -> std::io::Result<Config> {
        let config = Self::new_from_sections(parsing::parse_config_file(path)?);
        lok!("Loaded cfg file {:?}", path);
        Ok(config)
    }

    pub fn parse_str(src: &str) -> Config {
        let lines = src.lines().map(String::from);
        Self::new_from_sections(parsing::parse_lines(lines, Path::new("<string>")))
    }

    fn new_from_sections(sections: Vec<Cfg_Section>) -> Config {
        let mut cfg_var_table = HashMap::new();

        // Flatten section/entries into string ids
        for section in &sections {
            for entry in &section.entries {
                let name = format!("{}/{}", section.header, entry.key);
                lverbose!("Loading cfg var {} = {:?}", name, entry.value);
                cfg_var_table.insert(String_Id::from(name.as_str()), entry.value.clone());
            }
        }

        Config {
            cfg_var_table,
            sections,
        }
    }

    pub fn read_cfg(&self, id: String_Id) -> Option<&Cfg_Value> {
        self.cfg_var_table.get(&id)
    }

    /// Reads the cfg var at `path` ("section/key"), falling back to `default` if it's
    /// missing or has a different type.
    pub fn read_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Cfg_Value>,
    {
        match self.read_cfg(String_Id::from(path)) {
            None => default,
            Some(value) => T::try_from(value.clone()).unwrap_or_else(|_| {
                lwarn!(
                    "Cfg var {} has an unexpected value {:?}: using the default.",
                    path,
                    value
                );
                default
            }),
        }
    }

    /// All the sections with the given header, in parsing order.
    /// The same header may appear more than once, e.g. in different files of a cfg dir.
    pub fn sections<'a>(
        &'a self,
        header: &'a str,
    ) -> impl Iterator<Item = &'a Cfg_Section> + 'a {
        self.sections.iter().filter(move |s| s.header == header)
    }

    pub fn n_vars(&self) -> usize {
        self.cfg_var_table.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = "
/sounds
countdown countdown.wav
/audio
max_concurrent_sounds 8
";

    #[test]
    fn read_flattened_vars() {
        let cfg = Config::parse_str(SRC);
        assert_eq!(cfg.n_vars(), 2);
        assert_eq!(
            cfg.read_cfg(String_Id::from("sounds/countdown")),
            Some(&Cfg_Value::String(String::from("countdown.wav")))
        );
        assert_eq!(cfg.read_cfg(String_Id::from("sounds/explosion")), None);
    }

    #[test]
    fn read_or_falls_back() {
        let cfg = Config::parse_str(SRC);
        assert_eq!(cfg.read_or("audio/max_concurrent_sounds", 16), 8);
        assert_eq!(cfg.read_or("audio/missing", 16), 16);
        // Wrong type
        assert_eq!(cfg.read_or("sounds/countdown", 16), 16);
    }

    #[test]
    fn enumerate_sections() {
        let cfg = Config::parse_str(SRC);
        let sounds = cfg.sections("sounds").collect::<Vec<_>>();
        assert_eq!(sounds.len(), 1);
        assert_eq!(sounds[0].entries[0].key, "countdown");
        assert_eq!(cfg.sections("nope").count(), 0);
    }

    #[test]
    fn repeated_headers_are_all_enumerated() {
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
        let keys = cfg
            .sections("sounds")
            .flat_map(|s| s.entries.iter().map(|e| e.key.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["countdown", "tick"]);
    }
}
