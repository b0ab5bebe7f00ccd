//! The built-in dialect registry.
//!
//! Every language here is a plain [`Language`] value: a command table
//! plus the default machine configuration. The registry is constructed
//! on demand and handed to the caller; nothing in the crate consults it
//! as global state.

use crate::config::Config;
use crate::translate::Language;
use crate::translate::Token;

/// The classic hello world, used as the bundled default program. Run it
/// through [`Language::transcribe`] to get it in any dialect.
pub const HELLO_WORLD: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]\
                               >>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

fn dialect(name: &'static str, commands: &[(&'static str, Token)]) -> Language {
    Language {
        name,
        commands: commands.to_vec(),
        config: Config::default(),
    }
}

/// Build the registry of every built-in dialect.
pub fn builtin_languages() -> Vec<Language> {
    vec![
        // The original eight commands; every other dialect is a
        // re-spelling of (or a small extension over) this table.
        dialect(
            "Brainfuck",
            &[
                (">", Token::Right),
                ("<", Token::Left),
                ("+", Token::Add),
                ("-", Token::Subtract),
                (".", Token::Output),
                (",", Token::Input),
                ("[", Token::BeginLoop),
                ("]", Token::EndLoop),
            ],
        ),
        dialect(
            "Alphuck",
            &[
                ("a", Token::Right),
                ("c", Token::Left),
                ("e", Token::Add),
                ("i", Token::Subtract),
                ("j", Token::Output),
                ("o", Token::Input),
                ("p", Token::BeginLoop),
                ("s", Token::EndLoop),
            ],
        ),
        dialect(
            "BrainSymbol",
            &[
                ("!", Token::Right),
                ("@", Token::Left),
                ("#", Token::Add),
                ("$", Token::Subtract),
                ("%", Token::Output),
                ("^", Token::Input),
                ("&", Token::BeginLoop),
                ("*", Token::EndLoop),
            ],
        ),
        // Originally named "!!Fuck".
        dialect(
            "EmEmFuck",
            &[
                ("!!!!!#", Token::Right),
                ("!!!!!!#", Token::Left),
                ("!!!!!!!#", Token::Add),
                ("!!!!!!!!#", Token::Subtract),
                ("!!!!!!!!!!#", Token::Output),
                ("!!!!!!!!!#", Token::Input),
                ("!!!!!!!!!!!#", Token::BeginLoop),
                ("!!!!!!!!!!!!#", Token::EndLoop),
            ],
        ),
        dialect(
            "German",
            &[
                ("LINKS", Token::Right),
                ("RECHTS", Token::Left),
                ("ADDITION", Token::Add),
                ("SUBTRAKTION", Token::Subtract),
                ("EINGABE", Token::Output),
                ("AUSGABE", Token::Input),
                ("SCHLEIFENANFANG", Token::BeginLoop),
                ("SCHLEIFENENDE", Token::EndLoop),
            ],
        ),
        dialect(
            "MessyScript",
            &[
                (
                    r"930pl[wer;lr[p[lwetl[erwltrewt[er;t3l.t;43.';w]er\e]e;g[er.][.rt[.e[w]r[",
                    Token::Right,
                ),
                (
                    r"\];[]lr[plp[r[pelpr[,gp[lsp[glr[pt,g[pr,g[lsg[plfsdgdsfpl[erlt[lwt[43[]5l4[;.tr.",
                    Token::Left,
                ),
                (
                    r"20ri-4;t[5;t'[y;e'teu;354y;;56;'5lu;y65l'ytyl';ry;rtly;t'yl'r;y'",
                    Token::Add,
                ),
                (
                    r"];ae][flw[er.[w;r';ew.'rt;e';,erf/r;t.e'.fre.f'r;.rg;el[rw][p43p3",
                    Token::Subtract,
                ),
                (
                    r"][][e[w]prepf][eg]rpe[t]lre[]lgr]o320wr89`]2l1]p`l23pr2o4]2lf]2;r][32;r][2``]234;][23",
                    Token::Output,
                ),
                (
                    r"]\]p][l[weo[p4o40ti40er0iteotp[r]23;[rle[wptlo34wtp[rel[1;`][l3[l[rplew[fl[`1[l[wlr[pewlr[p",
                    Token::Input,
                ),
                (
                    r"\];[]fl[roeotp[ore][gper][g;rw][;g][r;eg][le]f[el]f]w[r][wper][pwtlregl]erl][;]e;][e;t[erpt][p",
                    Token::BeginLoop,
                ),
                (
                    r"\[]pe[3202-432o-0rkepk[1[pwplwpflerp[glep[r[er[pe[tpre][]t\][p[0-=30-323-=232[r[ept[erg[erpt]",
                    Token::EndLoop,
                ),
            ],
        ),
        dialect(
            "MorseFuck",
            &[
                (".--", Token::Right),
                ("--.", Token::Left),
                ("..-", Token::Add),
                ("-..", Token::Subtract),
                ("-.-", Token::Output),
                (".-.", Token::Input),
                ("---", Token::BeginLoop),
                ("...", Token::EndLoop),
            ],
        ),
        dialect(
            "Pewlang",
            &[
                ("pew", Token::Right),
                ("Pew", Token::Left),
                ("pEw", Token::Add),
                ("peW", Token::Subtract),
                ("pEW", Token::Output),
                ("PEw", Token::Input),
                ("PeW", Token::BeginLoop),
                ("PEW", Token::EndLoop),
            ],
        ),
        dialect(
            "ReverseFuck",
            &[
                ("-", Token::Right),
                ("+", Token::Left),
                (">", Token::Add),
                ("<", Token::Subtract),
                (",", Token::Output),
                (".", Token::Input),
                ("]", Token::BeginLoop),
                ("[", Token::EndLoop),
            ],
        ),
        dialect(
            "Roadrunner",
            &[
                ("meeP", Token::Right),
                ("Meep", Token::Left),
                ("mEEp", Token::Add),
                ("MeeP", Token::Subtract),
                ("MEEP", Token::Output),
                ("meep", Token::Input),
                ("mEEP", Token::BeginLoop),
                ("MEEp", Token::EndLoop),
            ],
        ),
        dialect(
            "Ternary",
            &[
                ("01", Token::Right),
                ("00", Token::Left),
                ("11", Token::Add),
                ("10", Token::Subtract),
                ("20", Token::Output),
                ("21", Token::Input),
                ("02", Token::BeginLoop),
                ("12", Token::EndLoop),
            ],
        ),
        dialect(
            "Triplet",
            &[
                ("001", Token::Right),
                ("100", Token::Left),
                ("111", Token::Add),
                ("000", Token::Subtract),
                ("010", Token::Output),
                ("101", Token::Input),
                ("110", Token::BeginLoop),
                ("011", Token::EndLoop),
            ],
        ),
        dialect(
            "UwU",
            &[
                ("OwO", Token::Right),
                ("°w°", Token::Left),
                ("UwU", Token::Add),
                ("QwQ", Token::Subtract),
                ("@w@", Token::Output),
                (">w<", Token::Input),
                ("~w~", Token::BeginLoop),
                ("¯w¯", Token::EndLoop),
            ],
        ),
        // Some commands are prefixes of others, so table order carries
        // the match priority here.
        dialect(
            "WholesomeFuck",
            &[
                (":>>", Token::Add),
                (":<<", Token::Subtract),
                (";<<", Token::Output),
                (";>>", Token::Input),
                (":>", Token::Right),
                (":<", Token::Left),
                (";<", Token::BeginLoop),
                (";>", Token::EndLoop),
            ],
        ),
        dialect(
            "ZZZ",
            &[
                ("zzz", Token::Output),
                ("-zzz", Token::Input),
                ("zz", Token::Right),
                ("-zz", Token::Left),
                ("z+z", Token::BeginLoop),
                ("z-z", Token::EndLoop),
                ("-z", Token::Subtract),
                ("z", Token::Add),
            ],
        ),
        // Extended dialects: backward compatible with the original eight
        // commands, plus one joke command each.
        dialect(
            "Blub",
            &[
                ("Blub. Blub?", Token::Right),
                ("Blub? Blub.", Token::Left),
                ("Blub. Blub.", Token::Add),
                ("Blub! Blub!", Token::Subtract),
                ("Blub! Blub.", Token::Output),
                ("Blub. Blub!", Token::Input),
                ("Blub! Blub?", Token::BeginLoop),
                ("Blub? Blub!", Token::EndLoop),
                (
                    "Blub? Blub?",
                    Token::Say("*Fishfood transfer takes place* - \"Blub!\""),
                ),
            ],
        ),
        dialect(
            "Ook",
            &[
                ("Ook. Ook?", Token::Right),
                ("Ook? Ook.", Token::Left),
                ("Ook. Ook.", Token::Add),
                ("Ook! Ook!", Token::Subtract),
                ("Ook! Ook.", Token::Output),
                ("Ook. Ook!", Token::Input),
                ("Ook! Ook?", Token::BeginLoop),
                ("Ook? Ook!", Token::EndLoop),
                (
                    "Ook? Ook?",
                    Token::Say("*Banana transfer takes place* - \"Ook!\""),
                ),
            ],
        ),
    ]
}

/// Look a dialect up by name, case-insensitively.
pub fn find_language<'a>(languages: &'a [Language], name: &str) -> Option<&'a Language> {
    languages
        .iter()
        .find(|l| l.name.eq_ignore_ascii_case(name))
}
