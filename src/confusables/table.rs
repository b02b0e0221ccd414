//! Generated from the Unicode `confusables.txt` data file.
//!
//! Entries are the non-ASCII codepoints (outside of the arithmetically
//! folded blocks) whose skeleton is printable ASCII, sorted by codepoint.
//! Do not edit by hand.

pub(super) static ASCII_SKELETONS: &[(u32, &str)] = &[
    (0x00A0, " "),    // NO-BREAK SPACE
    (0x01C0, "l"),    // LATIN LETTER DENTAL CLICK
    (0x01C3, "!"),    // LATIN LETTER RETROFLEX CLICK
    (0x0251, "a"),    // LATIN SMALL LETTER ALPHA
    (0x0261, "g"),    // LATIN SMALL LETTER SCRIPT G
    (0x02B9, "'"),    // MODIFIER LETTER PRIME
    (0x02BA, "''"),   // MODIFIER LETTER DOUBLE PRIME
    (0x02BB, "'"),    // MODIFIER LETTER TURNED COMMA
    (0x02BC, "'"),    // MODIFIER LETTER APOSTROPHE
    (0x02BD, "'"),    // MODIFIER LETTER REVERSED COMMA
    (0x02C8, "'"),    // MODIFIER LETTER VERTICAL LINE
    (0x02CB, "`"),    // MODIFIER LETTER GRAVE ACCENT
    (0x02D0, ":"),    // MODIFIER LETTER TRIANGULAR COLON
    (0x02DC, "~"),    // SMALL TILDE
    (0x037E, ";"),    // GREEK QUESTION MARK
    (0x0391, "A"),    // GREEK CAPITAL LETTER ALPHA
    (0x0392, "B"),    // GREEK CAPITAL LETTER BETA
    (0x0395, "E"),    // GREEK CAPITAL LETTER EPSILON
    (0x0396, "Z"),    // GREEK CAPITAL LETTER ZETA
    (0x0397, "H"),    // GREEK CAPITAL LETTER ETA
    (0x0399, "I"),    // GREEK CAPITAL LETTER IOTA
    (0x039A, "K"),    // GREEK CAPITAL LETTER KAPPA
    (0x039C, "M"),    // GREEK CAPITAL LETTER MU
    (0x039D, "N"),    // GREEK CAPITAL LETTER NU
    (0x039F, "O"),    // GREEK CAPITAL LETTER OMICRON
    (0x03A1, "P"),    // GREEK CAPITAL LETTER RHO
    (0x03A4, "T"),    // GREEK CAPITAL LETTER TAU
    (0x03A5, "Y"),    // GREEK CAPITAL LETTER UPSILON
    (0x03A7, "X"),    // GREEK CAPITAL LETTER CHI
    (0x03B1, "a"),    // GREEK SMALL LETTER ALPHA
    (0x03B3, "y"),    // GREEK SMALL LETTER GAMMA
    (0x03BD, "v"),    // GREEK SMALL LETTER NU
    (0x03BF, "o"),    // GREEK SMALL LETTER OMICRON
    (0x03C1, "p"),    // GREEK SMALL LETTER RHO
    (0x03C5, "u"),    // GREEK SMALL LETTER UPSILON
    (0x03C9, "w"),    // GREEK SMALL LETTER OMEGA
    (0x03F2, "c"),    // GREEK LUNATE SIGMA SYMBOL
    (0x03F3, "j"),    // GREEK LETTER YOT
    (0x0405, "S"),    // CYRILLIC CAPITAL LETTER DZE
    (0x0406, "I"),    // CYRILLIC CAPITAL LETTER BYELORUSSIAN-UKRAINIAN I
    (0x0408, "J"),    // CYRILLIC CAPITAL LETTER JE
    (0x0410, "A"),    // CYRILLIC CAPITAL LETTER A
    (0x0412, "B"),    // CYRILLIC CAPITAL LETTER VE
    (0x0415, "E"),    // CYRILLIC CAPITAL LETTER IE
    (0x0417, "3"),    // CYRILLIC CAPITAL LETTER ZE
    (0x041A, "K"),    // CYRILLIC CAPITAL LETTER KA
    (0x041C, "M"),    // CYRILLIC CAPITAL LETTER EM
    (0x041D, "H"),    // CYRILLIC CAPITAL LETTER EN
    (0x041E, "O"),    // CYRILLIC CAPITAL LETTER O
    (0x0420, "P"),    // CYRILLIC CAPITAL LETTER ER
    (0x0421, "C"),    // CYRILLIC CAPITAL LETTER ES
    (0x0422, "T"),    // CYRILLIC CAPITAL LETTER TE
    (0x0423, "Y"),    // CYRILLIC CAPITAL LETTER U
    (0x0425, "X"),    // CYRILLIC CAPITAL LETTER HA
    (0x0430, "a"),    // CYRILLIC SMALL LETTER A
    (0x0435, "e"),    // CYRILLIC SMALL LETTER IE
    (0x0437, "3"),    // CYRILLIC SMALL LETTER ZE
    (0x043E, "o"),    // CYRILLIC SMALL LETTER O
    (0x0440, "p"),    // CYRILLIC SMALL LETTER ER
    (0x0441, "c"),    // CYRILLIC SMALL LETTER ES
    (0x0443, "y"),    // CYRILLIC SMALL LETTER U
    (0x0445, "x"),    // CYRILLIC SMALL LETTER HA
    (0x0447, "4"),    // CYRILLIC SMALL LETTER CHE
    (0x0455, "s"),    // CYRILLIC SMALL LETTER DZE
    (0x0456, "i"),    // CYRILLIC SMALL LETTER BYELORUSSIAN-UKRAINIAN I
    (0x0458, "j"),    // CYRILLIC SMALL LETTER JE
    (0x04AE, "Y"),    // CYRILLIC CAPITAL LETTER STRAIGHT U
    (0x04BB, "h"),    // CYRILLIC SMALL LETTER SHHA
    (0x04C0, "I"),    // CYRILLIC LETTER PALOCHKA
    (0x04CF, "l"),    // CYRILLIC SMALL LETTER PALOCHKA
    (0x0501, "d"),    // CYRILLIC SMALL LETTER KOMI DE
    (0x051B, "q"),    // CYRILLIC SMALL LETTER QA
    (0x051D, "w"),    // CYRILLIC SMALL LETTER WE
    (0x054F, "S"),    // ARMENIAN CAPITAL LETTER TIWN
    (0x0555, "O"),    // ARMENIAN CAPITAL LETTER OH
    (0x0570, "h"),    // ARMENIAN SMALL LETTER HO
    (0x0578, "n"),    // ARMENIAN SMALL LETTER VO
    (0x057D, "u"),    // ARMENIAN SMALL LETTER SEH
    (0x0585, "o"),    // ARMENIAN SMALL LETTER OH
    (0x0589, ":"),    // ARMENIAN FULL STOP
    (0x05C3, ":"),    // HEBREW PUNCTUATION SOF PASUQ
    (0x066A, "%"),    // ARABIC PERCENT SIGN
    (0x09EA, "8"),    // BENGALI DIGIT FOUR
    (0x0B68, "9"),    // ORIYA DIGIT TWO
    (0x2010, "-"),    // HYPHEN
    (0x2011, "-"),    // NON-BREAKING HYPHEN
    (0x2018, "'"),    // LEFT SINGLE QUOTATION MARK
    (0x2019, "'"),    // RIGHT SINGLE QUOTATION MARK
    (0x201A, ","),    // SINGLE LOW-9 QUOTATION MARK
    (0x201B, "'"),    // SINGLE HIGH-REVERSED-9 QUOTATION MARK
    (0x201C, "''"),   // LEFT DOUBLE QUOTATION MARK
    (0x201D, "''"),   // RIGHT DOUBLE QUOTATION MARK
    (0x201F, "''"),   // DOUBLE HIGH-REVERSED-9 QUOTATION MARK
    (0x2024, "."),    // ONE DOT LEADER
    (0x2025, ".."),   // TWO DOT LEADER
    (0x2026, "..."),  // HORIZONTAL ELLIPSIS
    (0x2032, "'"),    // PRIME
    (0x2033, "''"),   // DOUBLE PRIME
    (0x2034, "'''"),  // TRIPLE PRIME
    (0x2039, "<"),    // SINGLE LEFT-POINTING ANGLE QUOTATION MARK
    (0x203A, ">"),    // SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
    (0x2044, "/"),    // FRACTION SLASH
    (0x204E, "*"),    // LOW ASTERISK
    (0x2102, "C"),    // DOUBLE-STRUCK CAPITAL C
    (0x210A, "g"),    // SCRIPT SMALL G
    (0x210B, "H"),    // SCRIPT CAPITAL H
    (0x210C, "H"),    // BLACK-LETTER CAPITAL H
    (0x210D, "H"),    // DOUBLE-STRUCK CAPITAL H
    (0x210E, "h"),    // PLANCK CONSTANT
    (0x2110, "I"),    // SCRIPT CAPITAL I
    (0x2111, "I"),    // BLACK-LETTER CAPITAL I
    (0x2112, "L"),    // SCRIPT CAPITAL L
    (0x2113, "l"),    // SCRIPT SMALL L
    (0x2115, "N"),    // DOUBLE-STRUCK CAPITAL N
    (0x2119, "P"),    // DOUBLE-STRUCK CAPITAL P
    (0x211A, "Q"),    // DOUBLE-STRUCK CAPITAL Q
    (0x211B, "R"),    // SCRIPT CAPITAL R
    (0x211C, "R"),    // BLACK-LETTER CAPITAL R
    (0x211D, "R"),    // DOUBLE-STRUCK CAPITAL R
    (0x2124, "Z"),    // DOUBLE-STRUCK CAPITAL Z
    (0x212C, "B"),    // SCRIPT CAPITAL B
    (0x212D, "C"),    // BLACK-LETTER CAPITAL C
    (0x212F, "e"),    // SCRIPT SMALL E
    (0x2130, "E"),    // SCRIPT CAPITAL E
    (0x2131, "F"),    // SCRIPT CAPITAL F
    (0x2133, "M"),    // SCRIPT CAPITAL M
    (0x2134, "o"),    // SCRIPT SMALL O
    (0x2139, "i"),    // INFORMATION SOURCE
    (0x2145, "D"),    // DOUBLE-STRUCK ITALIC CAPITAL D
    (0x2146, "d"),    // DOUBLE-STRUCK ITALIC SMALL D
    (0x2147, "e"),    // DOUBLE-STRUCK ITALIC SMALL E
    (0x2148, "i"),    // DOUBLE-STRUCK ITALIC SMALL I
    (0x2149, "j"),    // DOUBLE-STRUCK ITALIC SMALL J
    (0x2212, "-"),    // MINUS SIGN
    (0x2215, "/"),    // DIVISION SLASH
    (0x2216, "\\"),   // SET MINUS
    (0x2217, "*"),    // ASTERISK OPERATOR
    (0x2223, "l"),    // DIVIDES
    (0x2236, ":"),    // RATIO
    (0x223C, "~"),    // TILDE OPERATOR
    (0x2303, "^"),    // UP ARROWHEAD
    (0x2329, "<"),    // LEFT-POINTING ANGLE BRACKET
    (0x232A, ">"),    // RIGHT-POINTING ANGLE BRACKET
    (0x27E8, "<"),    // MATHEMATICAL LEFT ANGLE BRACKET
    (0x27E9, ">"),    // MATHEMATICAL RIGHT ANGLE BRACKET
    (0x29F8, "/"),    // BIG SOLIDUS
];
