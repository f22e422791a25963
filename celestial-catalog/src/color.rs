//! Color indices with their error brackets.

use crate::band::Band;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Which value of a color index an entry holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorBound {
    Nominal,
    /// `color − error`
    MinusError,
    /// `color + error`
    PlusError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorKey {
    pub blue: Band,
    pub red: Band,
    pub bound: ColorBound,
}

impl ColorKey {
    pub const fn nominal(blue: Band, red: Band) -> Self {
        Self {
            blue,
            red,
            bound: ColorBound::Nominal,
        }
    }

    pub const fn with_bound(self, bound: ColorBound) -> Self {
        Self { bound, ..self }
    }

    /// `g-r`, `g-r (min)` or `g-r (max)`.
    pub fn label(&self) -> String {
        let base = format!("{}-{}", self.blue.label(), self.red.label());
        match self.bound {
            ColorBound::Nominal => base,
            ColorBound::MinusError => format!("{} (min)", base),
            ColorBound::PlusError => format!("{} (max)", base),
        }
    }
}

/// Color indices of one record, in the order the survey declares them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorSet {
    entries: Vec<(ColorKey, f64)>,
}

impl ColorSet {
    pub(crate) fn push(&mut self, key: ColorKey, value: f64) {
        self.entries.push((key, value));
    }

    pub fn get(&self, key: &ColorKey) -> Option<f64> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    pub fn nominal(&self, blue: Band, red: Band) -> Option<f64> {
        self.get(&ColorKey::nominal(blue, red))
    }

    /// `(min, max)` bracket of a color, present when both bands carry errors.
    pub fn bounds(&self, blue: Band, red: Band) -> Option<(f64, f64)> {
        let key = ColorKey::nominal(blue, red);
        Some((
            self.get(&key.with_bound(ColorBound::MinusError))?,
            self.get(&key.with_bound(ColorBound::PlusError))?,
        ))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColorKey, f64)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ColorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(&key.label(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let key = ColorKey::nominal(Band::SdssG, Band::SdssR);
        assert_eq!(key.label(), "g-r");
        assert_eq!(key.with_bound(ColorBound::MinusError).label(), "g-r (min)");
        assert_eq!(key.with_bound(ColorBound::PlusError).label(), "g-r (max)");
        assert_eq!(ColorKey::nominal(Band::GaiaBp, Band::GaiaRp).label(), "BP-RP");
    }

    #[test]
    fn test_lookup_and_bounds() {
        let key = ColorKey::nominal(Band::TwoMassJ, Band::TwoMassKs);
        let mut set = ColorSet::default();
        set.push(key, 0.8);
        set.push(key.with_bound(ColorBound::MinusError), 0.75);
        set.push(key.with_bound(ColorBound::PlusError), 0.85);

        assert_eq!(set.nominal(Band::TwoMassJ, Band::TwoMassKs), Some(0.8));
        assert_eq!(set.bounds(Band::TwoMassJ, Band::TwoMassKs), Some((0.75, 0.85)));
        assert_eq!(set.nominal(Band::TwoMassH, Band::TwoMassKs), None);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_serialize_uses_labels() {
        let mut set = ColorSet::default();
        set.push(ColorKey::nominal(Band::WiseW1, Band::WiseW2), 0.125);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"W1-W2":0.125}"#);
    }
}
