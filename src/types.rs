use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

static BLOBREF_RE: OnceLock<Regex> = OnceLock::new();

fn blobref_re() -> &'static Regex {
    BLOBREF_RE.get_or_init(|| Regex::new(r"^sha1-[a-f0-9]+$").expect("static blobref pattern"))
}

/// Content identifier printed by the put tool for the root node of an
/// uploaded directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobRef(String);

impl BlobRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for BlobRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !blobref_re().is_match(s) {
            return Err(format!("{:?} is not a sha1 blobref", s));
        }
        Ok(BlobRef(s.to_string()))
    }
}

impl fmt::Display for BlobRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultMode {
    #[default]
    Strict,
    Raw,
}

impl ResultMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultMode::Strict => "strict",
            ResultMode::Raw => "raw",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunMode {
    pub dry_run: bool,
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blobref_accepts_sha1_hex() {
        let br: BlobRef = "sha1-0beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33".parse().expect("blobref");
        assert_eq!(br.as_str(), "sha1-0beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33");
    }

    #[test]
    fn blobref_rejects_other_shapes() {
        for s in ["", "sha1-", "sha1-ABC", "sha224-abc", " sha1-abc", "sha1-abc\nsha1-def", "sha11-abc"] {
            assert!(s.parse::<BlobRef>().is_err(), "accepted {:?}", s);
        }
    }
}
