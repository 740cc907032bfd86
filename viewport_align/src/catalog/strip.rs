/// Sequencer strips and the per-kind ignore rules applied when cataloguing them.

use rustc_hash::FxHashMap;

/// Media type of a sequencer strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StripKind {
    Sound,
    Movie,
    Image,
    /// Effects, scenes, colour strips...
    Other,
}

impl StripKind {
    /// Upper-case type name, as sequencers label strips ("SOUND", "MOVIE", ...)
    pub fn label(&self) -> &'static str {
        match self {
            StripKind::Sound => "SOUND",
            StripKind::Movie => "MOVIE",
            StripKind::Image => "IMAGE",
            StripKind::Other => "OTHER",
        }
    }

    /// Parse a sequencer type name. Unknown names map to `Other`.
    pub fn from_type_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "SOUND" => StripKind::Sound,
            "MOVIE" => StripKind::Movie,
            "IMAGE" => StripKind::Image,
            _ => StripKind::Other,
        }
    }

    /// Selection flag for this kind (empty for `Other`, which is never catalogued)
    pub fn flag(&self) -> StripKinds {
        match self {
            StripKind::Sound => StripKinds::SOUND,
            StripKind::Movie => StripKinds::MOVIE,
            StripKind::Image => StripKinds::IMAGE,
            StripKind::Other => StripKinds::empty(),
        }
    }
}

bitflags::bitflags! {
    /// Set of strip kinds to catalogue.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StripKinds: u8 {
        const SOUND = 0b0000_0001;
        const MOVIE = 0b0000_0010;
        const IMAGE = 0b0000_0100;
    }
}

impl StripKinds {
    /// Selected kinds in catalogue order: sound, movie, image
    pub fn kinds(self) -> impl Iterator<Item = StripKind> {
        [StripKind::Sound, StripKind::Movie, StripKind::Image]
            .into_iter()
            .filter(move |kind| self.contains(kind.flag()))
    }
}

impl Default for StripKinds {
    fn default() -> Self {
        Self::all()
    }
}

/// A named strip of the sequencer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    pub name: String,
    pub kind: StripKind,
}

impl Strip {
    pub fn new(name: impl Into<String>, kind: StripKind) -> Self {
        Self { name: name.into(), kind }
    }
}

/// Substrings that exclude strips from the catalogue, per kind.
///
/// A strip is ignored when its name contains any substring registered for
/// its kind. Matching is literal and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    rules: FxHashMap<StripKind, Vec<String>>,
}

impl IgnoreRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: ignore `kind` strips whose name contains `substring`
    pub fn ignore(mut self, kind: StripKind, substring: impl Into<String>) -> Self {
        self.add(kind, substring);
        self
    }

    pub fn add(&mut self, kind: StripKind, substring: impl Into<String>) {
        self.rules.entry(kind).or_default().push(substring.into());
    }

    /// Substrings registered for `kind`
    pub fn substrings(&self, kind: StripKind) -> &[String] {
        self.rules.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `strip` matches one of the rules of its kind
    pub fn is_ignored(&self, strip: &Strip) -> bool {
        self.substrings(strip.kind)
            .iter()
            .any(|needle| strip.name.contains(needle.as_str()))
    }
}
