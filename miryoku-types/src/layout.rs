//! Physical layout detection and key position naming.
//!
//! Miryoku targets a family of split keyboards that differ only in how many
//! thumb keys exist. The layout kind is detected from the base layer's
//! binding count; position names map a binding-sequence index to a stable
//! physical position so that access information stays correct even when the
//! user customizes individual keys.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::Display;

/// Detected keyboard layout family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum PhysicalLayout {
    /// Ferris-like, two thumb keys per hand
    #[strum(serialize = "34key")]
    #[serde(rename = "34key")]
    Keys34,
    #[strum(serialize = "36key")]
    #[serde(rename = "36key")]
    Keys36,
    /// Corne-like, three thumb keys per hand
    #[strum(serialize = "40key")]
    #[serde(rename = "40key")]
    Keys40,
    #[strum(serialize = "unknown")]
    #[serde(rename = "unknown")]
    Unknown,
}

impl PhysicalLayout {
    /// Classify a layout family from the base layer's binding count.
    pub fn detect(binding_count: usize) -> Self {
        match binding_count {
            0..=34 => PhysicalLayout::Keys34,
            35..=36 => PhysicalLayout::Keys36,
            37..=40 => PhysicalLayout::Keys40,
            _ => PhysicalLayout::Unknown,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    Left,
    Right,
}

/// Named thumb key positions. "Combined" is the combo spanning the two
/// physical thumb keys of that hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ThumbPosition {
    LeftCombined,
    LeftOuter,
    LeftInner,
    RightInner,
    RightOuter,
    RightCombined,
}

impl ThumbPosition {
    pub fn is_left(&self) -> bool {
        matches!(
            self,
            ThumbPosition::LeftCombined | ThumbPosition::LeftOuter | ThumbPosition::LeftInner
        )
    }
}

/// Physical position of a binding-sequence index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionName {
    Finger { hand: Hand, row: u8, col: u8 },
    Thumb(ThumbPosition),
    /// Thumb-row index with no name in this layout family
    UnnamedThumb(usize),
}

impl PositionName {
    /// Name the position at a binding-sequence index.
    ///
    /// The thumb row occupies indices 30-39. The 34-key family places its
    /// combos at 30-32 and its physical thumb keys at 33-36; the 36/40-key
    /// families use 32-37.
    pub fn of_index(index: usize, layout: PhysicalLayout) -> Self {
        if (30..=39).contains(&index) {
            let thumb = match layout {
                PhysicalLayout::Keys34 => match index {
                    30 | 31 => Some(ThumbPosition::LeftCombined),
                    32 => Some(ThumbPosition::RightCombined),
                    33 => Some(ThumbPosition::LeftOuter),
                    34 => Some(ThumbPosition::LeftInner),
                    35 => Some(ThumbPosition::RightInner),
                    36 => Some(ThumbPosition::RightOuter),
                    _ => None,
                },
                _ => match index {
                    32 => Some(ThumbPosition::LeftCombined),
                    33 => Some(ThumbPosition::LeftOuter),
                    34 => Some(ThumbPosition::LeftInner),
                    35 => Some(ThumbPosition::RightInner),
                    36 => Some(ThumbPosition::RightOuter),
                    37 => Some(ThumbPosition::RightCombined),
                    _ => None,
                },
            };
            return match thumb {
                Some(t) => PositionName::Thumb(t),
                None => PositionName::UnnamedThumb(index),
            };
        }

        let row = (index / 10) as u8;
        let col = (index % 10) as u8;
        let (hand, local_col) = if col < 5 {
            (Hand::Left, col)
        } else {
            (Hand::Right, col - 5)
        };
        PositionName::Finger {
            hand,
            row,
            col: local_col,
        }
    }

    pub fn as_thumb(&self) -> Option<ThumbPosition> {
        match self {
            PositionName::Thumb(t) => Some(*t),
            _ => None,
        }
    }

    /// Human-readable form with spaces, e.g. `left row0 col0`, `left combined`.
    pub fn describe(&self) -> String {
        self.to_string().replace('_', " ")
    }
}

impl fmt::Display for PositionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionName::Finger { hand, row, col } => {
                write!(f, "{}_row{}_col{}", hand, row, col)
            }
            PositionName::Thumb(t) => write!(f, "{}", t),
            PositionName::UnnamedThumb(index) => write!(f, "thumb_{}", index),
        }
    }
}
