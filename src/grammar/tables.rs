//! The ordered template tables, one per arity.
//!
//! Table order is normative: evaluation is first-satisfying-wins, so
//! moving an entry changes which reading a sequence receives. The
//! five-, six- and seven-slot tables carry category checks only; their
//! cross-component compatibility is enforced downstream by the checker's
//! relation pass.

use crate::letters::LetterClass;

use super::{Field, RelationCheck, Template};

// Slot category shorthands.
const P: LetterClass = LetterClass::Prefix;
const S: LetterClass = LetterClass::Superscript;
const R: LetterClass = LetterClass::Root;
const RS: LetterClass = LetterClass::RootShort;
const SB: LetterClass = LetterClass::Subscript;
const SB2: LetterClass = LetterClass::SecondSubscript;
const SF: LetterClass = LetterClass::Suffix;
const SF2: LetterClass = LetterClass::SecondSuffix;
const V: LetterClass = LetterClass::Vowel;

// Field shorthands.
const FP: Field = Field::Prefix;
const FS: Field = Field::Superscript;
const FR: Field = Field::Root;
const FSB: Field = Field::Subscript;
const FSB2: Field = Field::SecondSubscript;
const FV: Field = Field::Vowel;
const FSF: Field = Field::Suffix;
const FSF2: Field = Field::SecondSuffix;

/// Three-letter strings that satisfy the {prefix, root, suffix}
/// categories and relation gates but are written as {root, suffix,
/// second suffix}. Real orthographic exceptions, not an implementation
/// artifact; the list is closed.
pub const SUFFIX_EXCEPTIONS: &[&str] = &[
    "བགས", "མབས", "གགས", "བངས", "དངས", "གངས", "འངས", "གམས", "མམས", "བབས",
    "མངས", "གབས", "བམས", "འམམ",
];

const ARITY_1: &[Template] = &[
    // bare root
    Template {
        slots: &[R],
        checks: &[],
        fields: &[FR],
    },
];

const ARITY_2: &[Template] = &[
    Template {
        slots: &[S, RS],
        checks: &[RelationCheck::SuperscriptRoot {
            superscript: 0,
            root: 1,
            tall: true,
        }],
        fields: &[FS, FR],
    },
    Template {
        slots: &[R, SB],
        checks: &[RelationCheck::SubscriptRoot {
            subscript: 1,
            root: 0,
            tall: false,
        }],
        fields: &[FR, FSB],
    },
    Template {
        slots: &[R, SF],
        checks: &[],
        fields: &[FR, FSF],
    },
    Template {
        slots: &[R, V],
        checks: &[],
        fields: &[FR, FV],
    },
];

const ARITY_3: &[Template] = &[
    // {prefix, root, suffix}, refused to the exception strings...
    Template {
        slots: &[P, R, SF],
        checks: &[
            RelationCheck::NotSuffixException,
            RelationCheck::PrefixRoot {
                prefix: 0,
                root: 1,
                tall: false,
            },
        ],
        fields: &[FP, FR, FSF],
    },
    // ...which drop through to a {root, suffix, second suffix} reading
    // of the same category shape.
    Template {
        slots: &[P, R, SF],
        checks: &[RelationCheck::SuffixPair { suffix: 1, second: 2 }],
        fields: &[FR, FSF, FSF2],
    },
    Template {
        slots: &[R, SF, SF2],
        checks: &[RelationCheck::SuffixPair { suffix: 1, second: 2 }],
        fields: &[FR, FSF, FSF2],
    },
    Template {
        slots: &[P, R, V],
        checks: &[RelationCheck::PrefixRoot {
            prefix: 0,
            root: 1,
            tall: false,
        }],
        fields: &[FP, FR, FV],
    },
    Template {
        slots: &[P, S, RS],
        checks: &[
            RelationCheck::PrefixRoot {
                prefix: 0,
                root: 2,
                tall: true,
            },
            // the superscript gate sees the root as written (subjoined)
            RelationCheck::SuperscriptRoot {
                superscript: 1,
                root: 2,
                tall: false,
            },
        ],
        fields: &[FP, FS, FR],
    },
    Template {
        slots: &[P, R, SB],
        checks: &[
            RelationCheck::PrefixRoot {
                prefix: 0,
                root: 1,
                tall: false,
            },
            RelationCheck::SubscriptRoot {
                subscript: 2,
                root: 1,
                tall: false,
            },
        ],
        fields: &[FP, FR, FSB],
    },
    Template {
        slots: &[S, RS, V],
        checks: &[RelationCheck::SuperscriptRoot {
            superscript: 0,
            root: 1,
            tall: true,
        }],
        fields: &[FS, FR, FV],
    },
    Template {
        slots: &[S, RS, SB],
        checks: &[
            RelationCheck::SuperscriptRoot {
                superscript: 0,
                root: 1,
                tall: true,
            },
            // subscript gate sees the subjoined form
            RelationCheck::SubscriptRoot {
                subscript: 2,
                root: 1,
                tall: false,
            },
        ],
        fields: &[FS, FR, FSB],
    },
    Template {
        slots: &[S, RS, SF],
        checks: &[RelationCheck::SuperscriptRoot {
            superscript: 0,
            root: 1,
            tall: true,
        }],
        fields: &[FS, FR, FSF],
    },
    Template {
        slots: &[R, SB, V],
        checks: &[RelationCheck::SubscriptRoot {
            subscript: 1,
            root: 0,
            tall: false,
        }],
        fields: &[FR, FSB, FV],
    },
    Template {
        slots: &[R, SB, SF],
        checks: &[RelationCheck::SubscriptRoot {
            subscript: 1,
            root: 0,
            tall: false,
        }],
        fields: &[FR, FSB, FSF],
    },
    Template {
        slots: &[R, V, SF],
        checks: &[],
        fields: &[FR, FV, FSF],
    },
    Template {
        slots: &[R, SB, SB2],
        checks: &[
            RelationCheck::SubscriptRoot {
                subscript: 1,
                root: 0,
                tall: false,
            },
            RelationCheck::SubscriptRoot {
                subscript: 2,
                root: 0,
                tall: false,
            },
        ],
        fields: &[FR, FSB, FSB2],
    },
];

const ARITY_4: &[Template] = &[
    Template {
        slots: &[P, S, RS, V],
        checks: &[
            RelationCheck::PrefixRoot {
                prefix: 0,
                root: 2,
                tall: true,
            },
            RelationCheck::SuperscriptRoot {
                superscript: 1,
                root: 2,
                tall: true,
            },
        ],
        fields: &[FP, FS, FR, FV],
    },
    Template {
        slots: &[P, R, SB, V],
        checks: &[
            RelationCheck::PrefixRoot {
                prefix: 0,
                root: 1,
                tall: false,
            },
            RelationCheck::SubscriptRoot {
                subscript: 2,
                root: 1,
                tall: false,
            },
        ],
        fields: &[FP, FR, FSB, FV],
    },
    Template {
        slots: &[P, R, V, SF],
        checks: &[RelationCheck::PrefixRoot {
            prefix: 0,
            root: 1,
            tall: false,
        }],
        fields: &[FP, FR, FV, FSF],
    },
    Template {
        slots: &[P, S, RS, SB],
        checks: &[
            RelationCheck::PrefixRoot {
                prefix: 0,
                root: 2,
                tall: true,
            },
            RelationCheck::SuperscriptRoot {
                superscript: 1,
                root: 2,
                tall: true,
            },
            // subscript gate sees the subjoined form
            RelationCheck::SubscriptRoot {
                subscript: 3,
                root: 2,
                tall: false,
            },
        ],
        fields: &[FP, FS, FR, FSB],
    },
    Template {
        slots: &[P, S, RS, SF],
        checks: &[
            RelationCheck::PrefixRoot {
                prefix: 0,
                root: 2,
                tall: true,
            },
            RelationCheck::SuperscriptRoot {
                superscript: 1,
                root: 2,
                tall: true,
            },
        ],
        fields: &[FP, FS, FR, FSF],
    },
    Template {
        slots: &[P, R, SB, SF],
        checks: &[
            RelationCheck::PrefixRoot {
                prefix: 0,
                root: 1,
                tall: false,
            },
            RelationCheck::SubscriptRoot {
                subscript: 2,
                root: 1,
                tall: false,
            },
        ],
        fields: &[FP, FR, FSB, FSF],
    },
    Template {
        slots: &[P, R, SF, SF2],
        checks: &[
            RelationCheck::PrefixRoot {
                prefix: 0,
                root: 1,
                tall: false,
            },
            RelationCheck::SuffixPair { suffix: 2, second: 3 },
        ],
        fields: &[FP, FR, FSF, FSF2],
    },
    Template {
        slots: &[S, RS, SB, V],
        checks: &[
            RelationCheck::SuperscriptRoot {
                superscript: 0,
                root: 1,
                tall: true,
            },
            RelationCheck::SubscriptRoot {
                subscript: 2,
                root: 1,
                tall: true,
            },
        ],
        fields: &[FS, FR, FSB, FV],
    },
    Template {
        slots: &[S, RS, V, SF],
        checks: &[RelationCheck::SuperscriptRoot {
            superscript: 0,
            root: 1,
            tall: true,
        }],
        fields: &[FS, FR, FV, FSF],
    },
    Template {
        slots: &[S, RS, SB, SF],
        checks: &[
            RelationCheck::SuperscriptRoot {
                superscript: 0,
                root: 1,
                tall: true,
            },
            RelationCheck::SubscriptRoot {
                subscript: 2,
                root: 1,
                tall: true,
            },
        ],
        fields: &[FS, FR, FSB, FSF],
    },
    Template {
        slots: &[S, RS, SF, SF2],
        checks: &[
            RelationCheck::SuperscriptRoot {
                superscript: 0,
                root: 1,
                tall: true,
            },
            RelationCheck::SuffixPair { suffix: 2, second: 3 },
        ],
        fields: &[FS, FR, FSF, FSF2],
    },
    Template {
        slots: &[R, V, SF, SF2],
        checks: &[RelationCheck::SuffixPair { suffix: 2, second: 3 }],
        fields: &[FR, FV, FSF, FSF2],
    },
    Template {
        slots: &[R, SB, V, SF],
        checks: &[RelationCheck::SubscriptRoot {
            subscript: 1,
            root: 0,
            tall: false,
        }],
        fields: &[FR, FSB, FV, FSF],
    },
    Template {
        slots: &[R, SB, SF, SF2],
        checks: &[
            RelationCheck::SubscriptRoot {
                subscript: 1,
                root: 0,
                tall: false,
            },
            RelationCheck::SuffixPair { suffix: 2, second: 3 },
        ],
        fields: &[FR, FSB, FSF, FSF2],
    },
];

const ARITY_5: &[Template] = &[
    Template {
        slots: &[P, S, RS, SB, V],
        checks: &[],
        fields: &[FP, FS, FR, FSB, FV],
    },
    Template {
        slots: &[P, S, RS, SB, SF],
        checks: &[],
        fields: &[FP, FS, FR, FSB, FSF],
    },
    Template {
        slots: &[P, S, RS, V, SF],
        checks: &[],
        fields: &[FP, FS, FR, FV, FSF],
    },
    Template {
        slots: &[P, S, RS, SF, SF2],
        checks: &[],
        fields: &[FP, FS, FR, FSF, FSF2],
    },
    Template {
        slots: &[P, R, SB, V, SF],
        checks: &[],
        fields: &[FP, FR, FSB, FV, FSF],
    },
    Template {
        slots: &[P, R, SB, SF, SF2],
        checks: &[],
        fields: &[FP, FR, FSB, FSF, FSF2],
    },
    Template {
        slots: &[P, R, V, SF, SF2],
        checks: &[],
        fields: &[FP, FR, FV, FSF, FSF2],
    },
    Template {
        slots: &[S, RS, SB, V, SF],
        checks: &[],
        fields: &[FS, FR, FSB, FV, FSF],
    },
    Template {
        slots: &[S, RS, SB, SF, SF2],
        checks: &[],
        fields: &[FS, FR, FSB, FSF, FSF2],
    },
    Template {
        slots: &[S, RS, V, SF, SF2],
        checks: &[],
        fields: &[FS, FR, FV, FSF, FSF2],
    },
    Template {
        slots: &[R, SB, V, SF, SF2],
        checks: &[],
        fields: &[FR, FSB, FV, FSF, FSF2],
    },
];

const ARITY_6: &[Template] = &[
    Template {
        slots: &[P, S, RS, SB, V, SF],
        checks: &[],
        fields: &[FP, FS, FR, FSB, FV, FSF],
    },
    Template {
        slots: &[P, R, SB, V, SF, SF2],
        checks: &[],
        fields: &[FP, FR, FSB, FV, FSF, FSF2],
    },
    Template {
        slots: &[P, S, RS, V, SF, SF2],
        checks: &[],
        fields: &[FP, FS, FR, FV, FSF, FSF2],
    },
    Template {
        slots: &[P, S, RS, SB, SF, SF2],
        checks: &[],
        fields: &[FP, FS, FR, FSB, FSF, FSF2],
    },
    Template {
        slots: &[S, RS, SB, V, SF, SF2],
        checks: &[],
        fields: &[FS, FR, FSB, FV, FSF, FSF2],
    },
];

const ARITY_7: &[Template] = &[
    // the full combination
    Template {
        slots: &[P, S, RS, SB, V, SF, SF2],
        checks: &[],
        fields: &[FP, FS, FR, FSB, FV, FSF, FSF2],
    },
];

/// The ordered template table for a given arity; empty outside 1–7.
pub fn templates_for_arity(arity: usize) -> &'static [Template] {
    match arity {
        1 => ARITY_1,
        2 => ARITY_2,
        3 => ARITY_3,
        4 => ARITY_4,
        5 => ARITY_5,
        6 => ARITY_6,
        7 => ARITY_7,
        _ => &[],
    }
}
