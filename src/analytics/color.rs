use serde::{Serialize, Serializer};
use std::fmt;

/// Heat bands, coolest first. Each is drawn with a higher alpha than the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatBand {
    Cool,
    Mild,
    Warm,
    Hot,
    Hottest,
}

impl HeatBand {
    /// Band for a normalised density in `(0, 1]`. Lower bounds inclusive.
    pub fn for_normalized(n: f64) -> HeatBand {
        if n < 0.2 {
            HeatBand::Cool
        } else if n < 0.4 {
            HeatBand::Mild
        } else if n < 0.6 {
            HeatBand::Warm
        } else if n < 0.8 {
            HeatBand::Hot
        } else {
            HeatBand::Hottest
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            HeatBand::Cool => (0, 0, 255),
            HeatBand::Mild => (0, 255, 255),
            HeatBand::Warm => (255, 255, 0),
            HeatBand::Hot => (255, 165, 0),
            HeatBand::Hottest => (255, 0, 0),
        }
    }

    pub fn alpha(&self) -> f64 {
        match self {
            HeatBand::Cool => 0.3,
            HeatBand::Mild => 0.4,
            HeatBand::Warm => 0.5,
            HeatBand::Hot => 0.6,
            HeatBand::Hottest => 0.7,
        }
    }
}

/// Paint for one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Transparent,
    Heat(HeatBand),
}

impl ColorToken {
    pub fn alpha(&self) -> f64 {
        match self {
            ColorToken::Transparent => 0.0,
            ColorToken::Heat(band) => band.alpha(),
        }
    }

    pub fn band(&self) -> Option<HeatBand> {
        match self {
            ColorToken::Transparent => None,
            ColorToken::Heat(band) => Some(*band),
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorToken::Transparent => f.write_str("transparent"),
            ColorToken::Heat(band) => {
                let (r, g, b) = band.rgb();
                write!(f, "rgba({}, {}, {}, {})", r, g, b, band.alpha())
            }
        }
    }
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Color for a cell value against the grid maximum.
pub fn color_for(cell_value: f64, max_value: f64) -> ColorToken {
    if !(max_value > 0.0) || !(cell_value > 0.0) {
        return ColorToken::Transparent;
    }
    let n = (cell_value / max_value).min(1.0);
    ColorToken::Heat(HeatBand::for_normalized(n))
}
