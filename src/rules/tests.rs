use crate::rules::script::{MAJOR_BREAK, MINOR_BREAK};
use crate::{ScriptMode, render_script, resolve_orthography, transcribe};

#[test]
fn orthography_examples() {
    // Array of (input, expected)
    let cases = [
        ("ka-ta", "kāta"),
        ("ko-ta", "koəta"),
        ("ke-ma", "kezma"),
        ("ke-ga", "kecga"),
        ("ke-ta", "kezta"),
        ("ke-a", "keca"),
        ("kas-ta", "kasəta"),
        ("nga-li-ma lawa", "ngāliəma lawa"),
        ("ndoní", "ndoní"),
    ];

    for (input, expected) in cases {
        assert_eq!(resolve_orthography(input), expected, "input {input:?}");
    }
}

#[test]
fn transcription_examples() {
    // Array of (input, expected)
    let cases = [
        ("", "[]"),
        ("ka", "[ka]"),
        ("ka-ta", "[ka.ta]"),
        ("ko-ta", "[ko.ta]"),
        ("ndoní", "[ⁿdo.n\u{32A}iː]"),
        ("amba", "[a.ᵐba]"),
        ("ambba", "[am.ba]"),
        ("lengki", "[leŋ.ki]"),
        ("lenga", "[le.ŋa]"),
        ("lema", "[le.ma]"),
        ("kasta", "[kas.ta]"),
        ("kasa", "[ka.sa]"),
        ("ás", "[aː.s]"),
        ("isma", "[i.s.ma]"),
        ("ës nu.", "[ə.s n\u{32A}u]"),
        ("fwa", "[fwa]"),
        ("gaga", "[ɡa.ɡa]"),
        ("'ama", "[ʔa.ma]"),
        ("tsá", "[t\u{361}saː]"),
        ("hao", "[hao\u{32F}]"),
        ("yë", "[jə]"),
        ("äre", "[ɑː.e]"),
        ("wärm", "[wɑː.m]"),
        ("kärng", "[kɑː.ŋ]"),
        ("ärs", "[ɑː.s]"),
    ];

    for (input, expected) in cases {
        assert_eq!(transcribe(input), expected, "input {input:?}");
    }
}

#[test]
fn prosodic_breaks() {
    // Array of (input, expected)
    let cases = [
        ("ka, ki.", "[ka | ki]"),
        ("ka. ki", "[ka || ki]"),
        ("ka? ki!", "[ka || ki]"),
        ("ka, ki, ku", "[ka | ki | ku]"),
        (", ka", "[ka]"),
        ("ka...", "[ka]"),
    ];

    for (input, expected) in cases {
        assert_eq!(transcribe(input), expected, "input {input:?}");
    }
}

#[test]
fn script_examples() {
    // Array of (input, mode, expected)
    let cases = [
        ("ki", ScriptMode::Merged, "ᨍᨗ"),
        ("ki", ScriptMode::Separate, "ᨍᨔᨗ"),
        ("kí", ScriptMode::Merged, "ᨍᨗ"),
        ("kí", ScriptMode::Separate, "ᨍᨖᨗ"),
        ("ai", ScriptMode::Merged, "ᨔᨔᨗ"),
        ("ki.", ScriptMode::Merged, "ᨍᨗ"),
        ("ka ki", ScriptMode::Merged, "ᨍᨔ\u{3000}ᨍᨗ"),
        ("ka-ta", ScriptMode::Merged, "ᨍᨔᨐᨈᨔ"),
        ("mba", ScriptMode::Separate, "ᨃᨙᨔ"),
        ("ngi", ScriptMode::Merged, "ᨋᨗ"),
        ("tsu", ScriptMode::Merged, "ᨉᨗᨚ"),
    ];

    for (input, mode, expected) in cases {
        assert_eq!(render_script(input, mode), expected, "input {input:?} mode {mode:?}");
    }
}

#[test]
fn sentence_end_yields_single_break() {
    for mode in [ScriptMode::Separate, ScriptMode::Merged] {
        let out = render_script("ka. ki.", mode);
        assert_eq!(out.matches(MAJOR_BREAK).count(), 1, "mode {mode:?}: {out:?}");
        assert!(!out.ends_with(MAJOR_BREAK));

        let out = render_script("ka, ki", mode);
        assert_eq!(out.matches(MINOR_BREAK).count(), 1, "mode {mode:?}: {out:?}");
    }
}
