use std::fmt;

use crate::identifier::{Ean13Error, Identifier};

/// Each EAN-13 digit spans 7 modules; a pattern is stored as a 7-bit mask in a `u8`.
/// Bit meaning (MSB → LSB within the low 7 bits): bit 6 = leftmost module, bit 0 = rightmost.
/// A set bit is a bar, a clear bit is a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitPattern(pub u8);

impl DigitPattern {
    /// Mirror the 7 modules (first module becomes last).
    pub fn reversed(self) -> Self {
        let mut out = 0u8;
        for bit in 0..7 {
            if self.0 >> bit & 1 == 1 {
                out |= 1 << (6 - bit);
            }
        }
        DigitPattern(out)
    }

    /// Swap bars and spaces.
    pub fn complemented(self) -> Self {
        DigitPattern(!self.0 & 0x7f)
    }

    /// Modules left to right; `true` is a bar.
    pub fn modules(self) -> impl Iterator<Item = bool> {
        (0..7).rev().map(move |bit| self.0 >> bit & 1 == 1)
    }
}

/// One of the three digit-encoding groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParityGroup {
    L,
    G,
    R,
}

/// Right-hand (R) patterns for digits 0..9 — the single source of truth.
/// The G and L tables are derived from these at table construction.
pub const R_PATTERNS: [DigitPattern; 10] = [
    DigitPattern(0b1110010), // 0
    DigitPattern(0b1100110), // 1
    DigitPattern(0b1101100), // 2
    DigitPattern(0b1000010), // 3
    DigitPattern(0b1011100), // 4
    DigitPattern(0b1001110), // 5
    DigitPattern(0b1010000), // 6
    DigitPattern(0b1000100), // 7
    DigitPattern(0b1001000), // 8
    DigitPattern(0b1110100), // 9
];

/// Parity pattern per first digit. Positions 0..5 vary over L/G; positions
/// 6..11 are always R.
pub const PARITY_PATTERNS: [&str; 10] = [
    "LLLLLLRRRRRR", // 0
    "LLGLGGRRRRRR", // 1
    "LLGGLGRRRRRR", // 2
    "LLGGGLRRRRRR", // 3
    "LGLLGGRRRRRR", // 4
    "LGGLLGRRRRRR", // 5
    "LGGGLLRRRRRR", // 6
    "LGLGLGRRRRRR", // 7
    "LGLGGLRRRRRR", // 8
    "LGGLGLRRRRRR", // 9
];

/// Guard at both ends of the symbol: bar-space-bar.
pub const SIDE_GUARD: &str = "| |";
/// Guard between the left and right digit halves.
pub const CENTER_GUARD: &str = " | | ";
/// Fixed length of every module string: 3 + 6*7 + 5 + 6*7 + 3.
pub const MODULE_COUNT: usize = 95;

/// The three parity-group tables, built once per use.
///
/// R is the literal table above; G is R reversed, L is R complemented.
#[derive(Debug, Clone)]
pub struct DigitTables {
    l: [DigitPattern; 10],
    g: [DigitPattern; 10],
    r: [DigitPattern; 10],
}

impl DigitTables {
    pub fn new() -> Self {
        let r = R_PATTERNS;
        let mut l = [DigitPattern(0); 10];
        let mut g = [DigitPattern(0); 10];
        for d in 0..10 {
            l[d] = r[d].complemented();
            g[d] = r[d].reversed();
        }
        Self { l, g, r }
    }

    /// Pattern for a digit value 0..9 under the given group.
    ///
    /// Total over the validated digit domain; callers holding an
    /// [`Identifier`] never see an out-of-range value.
    fn pattern(&self, group: ParityGroup, digit: u8) -> DigitPattern {
        let idx = digit as usize;
        match group {
            ParityGroup::L => self.l[idx],
            ParityGroup::G => self.g[idx],
            ParityGroup::R => self.r[idx],
        }
    }

    /// Defensive lookup for callers operating on unvalidated characters.
    pub fn lookup(&self, group: ParityGroup, digit: char) -> Result<DigitPattern, Ean13Error> {
        let value = digit
            .to_digit(10)
            .ok_or(Ean13Error::InvalidDigit(digit, digit as u32))?;
        Ok(self.pattern(group, value as u8))
    }
}

impl Default for DigitTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Parity pattern selected by the identifier's first digit.
///
/// Fails with `InvalidDigit` on a non-digit key; unreachable through a
/// validated [`Identifier`], but specified for callers holding raw input.
pub fn parity_pattern(first_digit: char) -> Result<&'static str, Ean13Error> {
    if !first_digit.is_ascii_digit() {
        return Err(Ean13Error::InvalidDigit(first_digit, first_digit as u32));
    }
    Ok(PARITY_PATTERNS[(first_digit as u8 - b'0') as usize])
}

/// The 95-module bar/space pattern of a symbol, using `'|'` for a bar and
/// `' '` for a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleString(String);

impl ModuleString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Modules left to right; `true` is a bar.
    pub fn modules(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.chars().map(|c| c == '|')
    }
}

impl fmt::Display for ModuleString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True for module indices inside a guard; guard bars render taller than
/// data bars. Left guard 0..3, center guard 45..50, right guard 92..95.
pub fn is_guard_module(index: usize) -> bool {
    matches!(index, 0..=2 | 45..=49 | 92..=94)
}

/// Derives the full 95-module bar/space pattern of a validated identifier.
///
/// Pure and infallible: table lookups are total over the digit domain the
/// [`Identifier`] guarantees.
pub fn module_string(identifier: &Identifier) -> ModuleString {
    let tables = DigitTables::new();
    let digits = identifier.as_str().as_bytes();
    let parity = PARITY_PATTERNS[(digits[0] - b'0') as usize].as_bytes();

    let mut out = String::with_capacity(MODULE_COUNT);
    out.push_str(SIDE_GUARD);
    for i in 0..6 {
        let group = match parity[i] {
            b'L' => ParityGroup::L,
            b'G' => ParityGroup::G,
            _ => ParityGroup::R,
        };
        push_pattern(&mut out, tables.pattern(group, digits[1 + i] - b'0'));
    }
    out.push_str(CENTER_GUARD);
    for i in 0..6 {
        push_pattern(&mut out, tables.pattern(ParityGroup::R, digits[7 + i] - b'0'));
    }
    out.push_str(SIDE_GUARD);

    ModuleString(out)
}

fn push_pattern(out: &mut String, pattern: DigitPattern) {
    for bar in pattern.modules() {
        out.push(if bar { '|' } else { ' ' });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::check_digit;
    use pretty_assertions::assert_eq;

    /// Literal L patterns from the published EAN-13 tables.
    const L_REFERENCE: [u8; 10] = [
        0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011, 0b0110001, 0b0101111, 0b0111011,
        0b0110111, 0b0001011,
    ];

    /// Literal G patterns from the published EAN-13 tables.
    const G_REFERENCE: [u8; 10] = [
        0b0100111, 0b0110011, 0b0011011, 0b0100001, 0b0011101, 0b0111001, 0b0000101, 0b0010001,
        0b0001001, 0b0010111,
    ];

    #[test]
    fn derived_tables_match_published_reference() {
        let tables = DigitTables::new();
        for d in 0..10u8 {
            let digit = (d + b'0') as char;
            assert_eq!(
                tables.lookup(ParityGroup::L, digit).unwrap().0,
                L_REFERENCE[d as usize],
                "L pattern for digit {digit}"
            );
            assert_eq!(
                tables.lookup(ParityGroup::G, digit).unwrap().0,
                G_REFERENCE[d as usize],
                "G pattern for digit {digit}"
            );
            assert_eq!(
                tables.lookup(ParityGroup::R, digit).unwrap(),
                R_PATTERNS[d as usize]
            );
        }
    }

    #[test]
    fn lookup_rejects_non_digit() {
        let tables = DigitTables::new();
        assert_eq!(
            tables.lookup(ParityGroup::L, 'x').unwrap_err(),
            Ean13Error::InvalidDigit('x', 'x' as u32)
        );
    }

    #[test]
    fn parity_pattern_known_vector() {
        assert_eq!(parity_pattern('5').unwrap(), "LGGLLGRRRRRR");
        assert_eq!(parity_pattern('0').unwrap(), "LLLLLLRRRRRR");
    }

    #[test]
    fn parity_pattern_rejects_non_digit() {
        assert_eq!(
            parity_pattern('?').unwrap_err(),
            Ean13Error::InvalidDigit('?', '?' as u32)
        );
    }

    #[test]
    fn parity_right_half_is_always_r() {
        for pattern in PARITY_PATTERNS {
            assert_eq!(&pattern[6..], "RRRRRR");
            assert!(pattern[..6].chars().all(|c| c == 'L' || c == 'G'));
        }
    }

    #[test]
    fn known_vector_module_string_prefix() {
        let id = Identifier::parse("5901234123457").unwrap();
        let modules = module_string(&id);
        // side guard, then '9' under group L (parity position 0): 0b0001011
        assert_eq!(&modules.as_str()[..10], "| |   | ||");
    }

    #[test]
    fn module_string_has_fixed_length_and_guards() {
        let id = Identifier::parse("5901234123457").unwrap();
        let modules = module_string(&id);
        assert_eq!(modules.len(), MODULE_COUNT);
        assert_eq!(&modules.as_str()[..3], SIDE_GUARD);
        assert_eq!(&modules.as_str()[45..50], CENTER_GUARD);
        assert_eq!(&modules.as_str()[92..], SIDE_GUARD);
    }

    #[test]
    fn module_string_is_idempotent() {
        let id = Identifier::parse("5901234123457").unwrap();
        assert_eq!(module_string(&id), module_string(&id));
    }

    #[test]
    fn structure_is_stable_across_generated_identifiers() {
        for n in 0..10_000u64 {
            let payload = format!("{:012}", (n * 99_999_989) % 1_000_000_000_000);
            let check = check_digit(&payload).unwrap();
            let id = Identifier::parse(&format!("{payload}{check}")).unwrap();
            let modules = module_string(&id);
            assert_eq!(modules.len(), MODULE_COUNT);
            assert_eq!(&modules.as_str()[..3], SIDE_GUARD);
            assert_eq!(&modules.as_str()[45..50], CENTER_GUARD);
            assert_eq!(&modules.as_str()[92..], SIDE_GUARD);
        }
    }

    #[test]
    fn guard_modules_cover_exactly_the_guard_offsets() {
        let guard_indices: Vec<usize> = (0..MODULE_COUNT).filter(|&i| is_guard_module(i)).collect();
        let expected: Vec<usize> = (0..3).chain(45..50).chain(92..95).collect();
        assert_eq!(guard_indices, expected);
    }
}
