//! Glyph tables shared by the formatter and the parser.

/// Zero placeholder glyph.
pub const ZERO: char = '零';

/// Currency unit glyph separating the integer part from jiao and fen.
pub const YUAN: char = '元';

/// Formal variant of [`YUAN`] found on printed cheques.
pub const YUAN_FORMAL: char = '圆';

/// First minor currency unit (0.1).
pub const JIAO: char = '角';

/// Second minor currency unit (0.01).
pub const FEN: char = '分';

/// Exact-amount marker written when there are no jiao or fen.
pub const EXACT: char = '整';

/// Capitalized digits, indexed by value.
pub const DIGIT_GLYPHS: [char; 10] = ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'];

/// Place units inside a 4-digit group, indexed by position (ones first).
pub const PLACE_GLYPHS: [Option<char>; 4] = [None, Some('拾'), Some('佰'), Some('仟')];

/// Big unit for the 10^4 tier.
pub const TEN_THOUSAND: char = '万';

/// Big unit for the 10^8 tier.
pub const HUNDRED_MILLION: char = '亿';

/// A classified glyph of numeral text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// A digit 0-9, capitalized or lowercase.
    Digit(u8),
    /// A unit inside a group: 10, 100 or 1000.
    Place(u64),
    /// 万
    TenThousand,
    /// 亿
    HundredMillion,
    /// 元 or 圆
    Yuan,
    /// 角 or 分
    Minor(MinorUnit),
}

/// Minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinorUnit {
    Jiao,
    Fen,
}

impl MinorUnit {
    /// Weight of one unit, in cents.
    pub const fn cents(self) -> u64 {
        match self {
            MinorUnit::Jiao => 10,
            MinorUnit::Fen => 1,
        }
    }

    /// Glyph written after the digit.
    pub const fn glyph(self) -> char {
        match self {
            MinorUnit::Jiao => JIAO,
            MinorUnit::Fen => FEN,
        }
    }
}

/// Looks up the value of a digit glyph.
///
/// Accepts the capitalized set as well as ordinary lowercase numerals,
/// which the formatter never emits.
pub fn digit_value(c: char) -> Option<u8> {
    let value = match c {
        '零' => 0,
        '壹' | '一' => 1,
        '贰' | '二' => 2,
        '叁' | '三' => 3,
        '肆' | '四' => 4,
        '伍' | '五' => 5,
        '陆' | '六' => 6,
        '柒' | '七' => 7,
        '捌' | '八' => 8,
        '玖' | '九' => 9,
        _ => return None,
    };
    Some(value)
}

/// Classifies a single character, returning `None` for anything that carries
/// no numeric meaning.
pub fn classify(c: char) -> Option<Glyph> {
    if let Some(value) = digit_value(c) {
        return Some(Glyph::Digit(value));
    }
    let glyph = match c {
        '拾' | '十' => Glyph::Place(10),
        '佰' | '百' => Glyph::Place(100),
        '仟' | '千' => Glyph::Place(1000),
        TEN_THOUSAND => Glyph::TenThousand,
        HUNDRED_MILLION => Glyph::HundredMillion,
        YUAN | YUAN_FORMAL => Glyph::Yuan,
        JIAO => Glyph::Minor(MinorUnit::Jiao),
        FEN => Glyph::Minor(MinorUnit::Fen),
        _ => return None,
    };
    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_table_is_bidirectional() {
        for (value, glyph) in DIGIT_GLYPHS.iter().enumerate() {
            assert_eq!(digit_value(*glyph), Some(value as u8));
        }
    }

    #[test]
    fn test_lowercase_digits() {
        assert_eq!(digit_value('一'), Some(1));
        assert_eq!(digit_value('九'), Some(9));
        assert_eq!(digit_value('〇'), None);
    }

    #[test]
    fn test_classify_units() {
        assert_eq!(classify('拾'), Some(Glyph::Place(10)));
        assert_eq!(classify('百'), Some(Glyph::Place(100)));
        assert_eq!(classify('仟'), Some(Glyph::Place(1000)));
        assert_eq!(classify('万'), Some(Glyph::TenThousand));
        assert_eq!(classify('亿'), Some(Glyph::HundredMillion));
        assert_eq!(classify('圆'), Some(Glyph::Yuan));
        assert_eq!(classify('分'), Some(Glyph::Minor(MinorUnit::Fen)));
        assert_eq!(classify('整'), None);
        assert_eq!(classify('x'), None);
    }
}
