//! Ideographic description characters (IDCs): the structural operators of a
//! description sequence.
//!
//! Every IDC has a fixed operand count. The table matches the Unicode
//! "Ideographic Description Characters" block plus the two companions that
//! appear in decomposition data: the variation indicator (U+303E) and the
//! subtraction operator (U+31EF).

/// A structural operator in an ideographic description sequence.
///
/// Each variant corresponds to one description character; its arity is a
/// property of the tag and is checked when a tree node is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Idc {
    /// `⿰` U+2FF0: left to right.
    LeftToRight,
    /// `⿱` U+2FF1: above to below.
    AboveToBelow,
    /// `⿲` U+2FF2: left to middle and right (ternary).
    LeftToMiddleAndRight,
    /// `⿳` U+2FF3: above to middle and below (ternary).
    AboveToMiddleAndBelow,
    /// `⿴` U+2FF4: full surround.
    FullSurround,
    /// `⿵` U+2FF5: surround from above.
    SurroundFromAbove,
    /// `⿶` U+2FF6: surround from below.
    SurroundFromBelow,
    /// `⿷` U+2FF7: surround from left.
    SurroundFromLeft,
    /// `⿸` U+2FF8: surround from upper left.
    SurroundFromUpperLeft,
    /// `⿹` U+2FF9: surround from upper right.
    SurroundFromUpperRight,
    /// `⿺` U+2FFA: surround from lower left.
    SurroundFromLowerLeft,
    /// `⿻` U+2FFB: overlaid.
    Overlaid,
    /// `⿼` U+2FFC: surround from right.
    SurroundFromRight,
    /// `⿽` U+2FFD: surround from lower right.
    SurroundFromLowerRight,
    /// `⿾` U+2FFE: horizontal reflection (unary).
    HorizontalReflection,
    /// `⿿` U+2FFF: rotation (unary).
    Rotation,
    /// `〾` U+303E: variation indicator (unary).
    VariationIndicator,
    /// `㇯` U+31EF: subtraction. "A minus B": neither operand is a part of
    /// the result, so subtraction subtrees never contribute components.
    Subtraction,
}

impl Idc {
    /// Recognizes a normalized token (`u2ff0` … `u31ef`) as an operator.
    ///
    /// Returns `None` for every other token, which the parser then treats as
    /// a leaf component.
    pub fn from_token(token: &str) -> Option<Idc> {
        match token {
            "u2ff0" => Some(Idc::LeftToRight),
            "u2ff1" => Some(Idc::AboveToBelow),
            "u2ff2" => Some(Idc::LeftToMiddleAndRight),
            "u2ff3" => Some(Idc::AboveToMiddleAndBelow),
            "u2ff4" => Some(Idc::FullSurround),
            "u2ff5" => Some(Idc::SurroundFromAbove),
            "u2ff6" => Some(Idc::SurroundFromBelow),
            "u2ff7" => Some(Idc::SurroundFromLeft),
            "u2ff8" => Some(Idc::SurroundFromUpperLeft),
            "u2ff9" => Some(Idc::SurroundFromUpperRight),
            "u2ffa" => Some(Idc::SurroundFromLowerLeft),
            "u2ffb" => Some(Idc::Overlaid),
            "u2ffc" => Some(Idc::SurroundFromRight),
            "u2ffd" => Some(Idc::SurroundFromLowerRight),
            "u2ffe" => Some(Idc::HorizontalReflection),
            "u2fff" => Some(Idc::Rotation),
            "u303e" => Some(Idc::VariationIndicator),
            "u31ef" => Some(Idc::Subtraction),
            _ => None,
        }
    }

    /// The normalized token spelling of this operator.
    pub fn token(&self) -> &'static str {
        match self {
            Idc::LeftToRight => "u2ff0",
            Idc::AboveToBelow => "u2ff1",
            Idc::LeftToMiddleAndRight => "u2ff2",
            Idc::AboveToMiddleAndBelow => "u2ff3",
            Idc::FullSurround => "u2ff4",
            Idc::SurroundFromAbove => "u2ff5",
            Idc::SurroundFromBelow => "u2ff6",
            Idc::SurroundFromLeft => "u2ff7",
            Idc::SurroundFromUpperLeft => "u2ff8",
            Idc::SurroundFromUpperRight => "u2ff9",
            Idc::SurroundFromLowerLeft => "u2ffa",
            Idc::Overlaid => "u2ffb",
            Idc::SurroundFromRight => "u2ffc",
            Idc::SurroundFromLowerRight => "u2ffd",
            Idc::HorizontalReflection => "u2ffe",
            Idc::Rotation => "u2fff",
            Idc::VariationIndicator => "u303e",
            Idc::Subtraction => "u31ef",
        }
    }

    /// Number of operands this operator consumes.
    pub fn arity(&self) -> usize {
        match self {
            Idc::LeftToMiddleAndRight | Idc::AboveToMiddleAndBelow => 3,
            Idc::HorizontalReflection | Idc::Rotation | Idc::VariationIndicator => 1,
            _ => 2,
        }
    }

    /// True if `token` names a structural operator.
    pub fn is_idc(token: &str) -> bool {
        Idc::from_token(token).is_some()
    }
}

impl std::fmt::Display for Idc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_round_trips() {
        for token in [
            "u2ff0", "u2ff1", "u2ff2", "u2ff3", "u2ff4", "u2ff5", "u2ff6", "u2ff7", "u2ff8",
            "u2ff9", "u2ffa", "u2ffb", "u2ffc", "u2ffd", "u2ffe", "u2fff", "u303e", "u31ef",
        ] {
            let idc = Idc::from_token(token).unwrap();
            assert_eq!(idc.token(), token);
        }
    }

    #[test]
    fn test_non_operators_are_left_as_leaves() {
        assert!(Idc::from_token("u4e00").is_none());
        assert!(Idc::from_token("cdp-8c42").is_none());
        assert!(Idc::from_token("u2ff").is_none());
        assert!(Idc::from_token("").is_none());
    }

    #[test]
    fn test_arity_table() {
        assert_eq!(Idc::LeftToRight.arity(), 2);
        assert_eq!(Idc::LeftToMiddleAndRight.arity(), 3);
        assert_eq!(Idc::AboveToMiddleAndBelow.arity(), 3);
        assert_eq!(Idc::HorizontalReflection.arity(), 1);
        assert_eq!(Idc::Rotation.arity(), 1);
        assert_eq!(Idc::VariationIndicator.arity(), 1);
        assert_eq!(Idc::Subtraction.arity(), 2);
        assert_eq!(Idc::SurroundFromLowerRight.arity(), 2);
    }

    #[test]
    fn test_is_idc() {
        assert!(Idc::is_idc("u2ffb"));
        assert!(!Idc::is_idc("u3013"));
    }
}
