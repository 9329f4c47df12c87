//! `serde` support: a path serializes as its textual form.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::Path;

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Path::parse_strict(&text).map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use crate::Path;

    #[test]
    fn test_bincode_uses_textual_form() {
        let path = Path::new(":composite:lib");
        let bytes = bincode::serialize(&path).unwrap();
        assert_eq!(bincode::serialize(":composite:lib").unwrap(), bytes);
        assert_eq!(bincode::deserialize::<Path>(&bytes).unwrap(), path);
    }

    #[test]
    fn test_derived_paths_deserialize() {
        let lib = Path::new(":composite:lib");
        for path in [
            lib.relative_to(&lib).unwrap(),
            lib.relative_to(&Path::root()).unwrap(),
            Path::new(":a: :b"),
            Path::root().child("nested:inner"),
        ] {
            let bytes = bincode::serialize(&path).unwrap();
            assert_eq!(bincode::deserialize::<Path>(&bytes).unwrap(), path);
        }
    }

    #[test]
    fn test_malformed_text_is_rejected() {
        let bytes = bincode::serialize(":a::b").unwrap();
        assert!(bincode::deserialize::<Path>(&bytes).is_err());
    }
}
