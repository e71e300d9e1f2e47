//! Social interaction commands (hug, hit, pat, slap).

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialAction {
    Hug,
    Hit,
    Pat,
    Slap,
}

impl SocialAction {
    pub const ALL: [SocialAction; 4] = [Self::Hug, Self::Hit, Self::Pat, Self::Slap];

    /// Command name, used for both the slash command and the prefix command.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hug => "hug",
            Self::Hit => "hit",
            Self::Pat => "pat",
            Self::Slap => "slap",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Hug => "Give someone a hug",
            Self::Hit => "Hit someone (gently)",
            Self::Pat => "Pat someone on the head",
            Self::Slap => "Slap someone",
        }
    }

    /// Past tense verb used in the embed title.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Hug => "hugged",
            Self::Hit => "hit",
            Self::Pat => "patted",
            Self::Slap => "slapped",
        }
    }

    pub fn color(self) -> u32 {
        match self {
            Self::Hug => 0xff9ff3,
            Self::Hit => 0xe67e22,
            Self::Pat => 0x48dbfb,
            Self::Slap => 0xe74c3c,
        }
    }

    pub fn gifs(self) -> &'static [&'static str] {
        match self {
            Self::Hug => &[
                "https://media.tenor.com/kCZjTqCKiggAAAAC/hug.gif",
                "https://media.tenor.com/9e1aE_xBLCsAAAAC/anime-hug.gif",
                "https://media.tenor.com/J7eGDvGeP9IAAAAC/enage-kiss-anime-hug.gif",
            ],
            Self::Hit => &[
                "https://media.tenor.com/ZF8l2MVNtqcAAAAC/anime-punch.gif",
                "https://media.tenor.com/6a42QlkVsCEAAAAC/anime-punch.gif",
            ],
            Self::Pat => &[
                "https://media.tenor.com/E6fMkQRZBdIAAAAC/kanna-kamui-pat.gif",
                "https://media.tenor.com/Dbg-7wAaiJwAAAAC/aharen-aharen-san.gif",
            ],
            Self::Slap => &[
                "https://media.tenor.com/Ws6Dm1ZW_vMAAAAC/girl-slap.gif",
                "https://media.tenor.com/XiYuU9h44-AAAAAC/anime-slap-mad.gif",
            ],
        }
    }
}

impl FromStr for SocialAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or(())
    }
}
