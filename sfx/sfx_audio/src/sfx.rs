use std::fmt;
use std::str::FromStr;

/// Every sound effect the application knows about.
/// Playing one of these can't fail to find its resource, unlike playing by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sfx {
    Countdown,
}

impl Sfx {
    pub const COUNT: usize = 1;
    pub const ALL: [Sfx; Sfx::COUNT] = [Sfx::Countdown];

    pub const fn name(self) -> &'static str {
        match self {
            Sfx::Countdown => "countdown",
        }
    }

    /// The asset file used when the sound isn't overridden by the sounds cfg.
    pub const fn default_file(self) -> &'static str {
        match self {
            Sfx::Countdown => "countdown.wav",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Sfx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unknown_Sound_Name(pub String);

impl fmt::Display for Unknown_Sound_Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown sound: {}", self.0)
    }
}

impl std::error::Error for Unknown_Sound_Name {}

impl FromStr for Sfx {
    type Err = Unknown_Sound_Name;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Sfx::ALL
            .iter()
            .copied()
            .find(|sfx| sfx.name() == name)
            .ok_or_else(|| Unknown_Sound_Name(String::from(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_indexed_in_order() {
        for (i, sfx) in Sfx::ALL.iter().enumerate() {
            assert_eq!(sfx.index(), i);
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("countdown".parse::<Sfx>(), Ok(Sfx::Countdown));
        assert_eq!(Sfx::Countdown.to_string(), "countdown");

        let err = "explosion".parse::<Sfx>().unwrap_err();
        assert_eq!(err, Unknown_Sound_Name(String::from("explosion")));
        assert_eq!(err.to_string(), "Unknown sound: explosion");
    }
}
