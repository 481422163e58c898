use std::path::Path;
use std::process::Command as Process;

use ansi_tuner::backends::palette_file::PaletteFile;
use ansi_tuner::backends::ThemeBackend;
use ansi_tuner::color::{Color, Hsl};
use ansi_tuner::model::{Channel, EditState, Palette, PaletteModel};
use ansi_tuner::processor::{Command, CommandProcessor, Outcome};
use ansi_tuner::protocol::{encode_palette, encode_set_color};
use ansi_tuner::store::PaletteStore;
use ansi_tuner::theme::CATPPUCCIN_MOCHA;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn custom_palette() -> Palette {
    std::array::from_fn(|i| {
        let v = (i as u8) * 16;
        Color::new(v, 255 - v, v / 2 + 17)
    })
}

fn write_store(path: &Path, palette: &Palette) {
    std::fs::write(path, PaletteFile.serialize(palette)).unwrap();
}

fn session(dir: &tempfile::TempDir) -> CommandProcessor<Vec<u8>> {
    let store = PaletteStore::new(dir.path().join("palette.txt"));
    let palette = store.load_or_default();
    CommandProcessor::new(EditState::new(PaletteModel::new(&palette)), Vec::new(), store)
}

// ---------------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------------

#[test]
fn loads_sixteen_stored_colors_as_hsl() {
    let dir = tempfile::tempdir().unwrap();
    let palette = custom_palette();
    write_store(&dir.path().join("palette.txt"), &palette);

    let p = session(&dir);
    let colors = p.state().palette().colors();
    for (i, expected) in palette.iter().enumerate() {
        assert_eq!(colors[i], expected.to_hsl(), "slot {i}");
        assert_eq!(colors[i].to_rgb(), *expected, "slot {i}");
    }
}

#[test]
fn absent_store_starts_from_builtin_theme() {
    let dir = tempfile::tempdir().unwrap();
    let p = session(&dir);
    assert_eq!(p.state().palette().effective_palette(), CATPPUCCIN_MOCHA);
}

#[test]
fn malformed_store_starts_from_builtin_theme() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("palette.txt"), "# nothing here\nzzzzzz\n").unwrap();
    let p = session(&dir);
    assert_eq!(p.state().palette().effective_palette(), CATPPUCCIN_MOCHA);
}

#[test]
fn three_small_lightness_nudges() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = PaletteModel::new(&CATPPUCCIN_MOCHA);
    model.set_channel(4, Channel::Lightness, 0.20);
    let store = PaletteStore::new(dir.path().join("palette.txt"));
    let mut p = CommandProcessor::new(EditState::new(model), Vec::new(), store);

    p.process(Command::SelectIndex(4)).unwrap();
    assert_eq!(p.state().selected_channel(), Channel::Lightness);
    for _ in 0..3 {
        p.process(Command::Nudge {
            big: false,
            sign: 1,
        })
        .unwrap();
    }
    let l = p.state().palette().color(4).l;
    assert!((l - 0.26).abs() < 1e-9, "expected L=0.26, got {l}");
}

#[test]
fn lightness_nudges_stop_at_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = PaletteModel::new(&CATPPUCCIN_MOCHA);
    model.set_channel(4, Channel::Lightness, 0.95);
    let store = PaletteStore::new(dir.path().join("palette.txt"));
    let mut p = CommandProcessor::new(EditState::new(model), Vec::new(), store);

    for _ in 0..3 {
        p.process(Command::Nudge {
            big: false,
            sign: 1,
        })
        .unwrap();
    }
    assert_eq!(p.state().palette().color(4).l, 1.0);
}

#[test]
fn linked_bright_green_is_boosted_base_green() {
    let dir = tempfile::tempdir().unwrap();
    let mut p = session(&dir);
    p.process(Command::ToggleLinkBrights).unwrap();

    let Hsl { h, s, l } = p.state().palette().color(2);
    let expected = Hsl::new(h, s, (l + 0.12).clamp(0.0, 1.0)).to_hex();
    let effective = p.state().palette().effective_palette();
    assert_eq!(effective[10].to_hex(), expected);
}

#[test]
fn every_edit_reaches_the_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let mut p = session(&dir);
    let commands = [
        Command::SelectIndex(1),
        Command::PrevChannel,
        Command::Nudge {
            big: true,
            sign: 1,
        },
        Command::ToggleLinkBrights,
        Command::ResetPreset,
    ];
    let mut expected = String::new();
    for command in commands {
        assert_eq!(p.process(command).unwrap(), Outcome::Continue);
        expected.push_str(&encode_palette(&p.state().palette().effective_palette()));
    }
    assert_eq!(String::from_utf8(p.terminal().clone()).unwrap(), expected);
}

#[test]
fn saved_palette_is_the_effective_palette() {
    let dir = tempfile::tempdir().unwrap();
    let mut p = session(&dir);
    p.process(Command::ToggleLinkBrights).unwrap();
    p.process(Command::SavePalette).unwrap();

    let saved = p.store().load().unwrap();
    assert_eq!(saved, p.state().palette().effective_palette());
    assert_ne!(saved, CATPPUCCIN_MOCHA);
}

#[test]
fn set_color_wire_format() {
    let blue = Color::from_hex("89b4fa").unwrap();
    assert_eq!(encode_set_color(4, blue), "\x1b]4;4;rgb:89/b4/fa\x07");
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn hex_round_trip_is_lowercase(s in "#?[0-9a-fA-F]{6}") {
            let color = Color::from_hex(&s).unwrap();
            let digits = s.trim_start_matches('#').to_lowercase();
            prop_assert_eq!(color.to_hex(), digits);
        }

        #[test]
        fn hsl_round_trip_within_one(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let original = Color::new(r, g, b);
            let recovered = original.to_hsl().to_rgb();
            for (a, z) in [(r, recovered.r), (g, recovered.g), (b, recovered.b)] {
                prop_assert!((a as i16 - z as i16).abs() <= 1, "{} -> {}", original, recovered);
            }
        }

        #[test]
        fn nudges_keep_colors_in_range(
            steps in proptest::collection::vec((0usize..3, any::<bool>(), -1i8..=1), 1..64)
        ) {
            let mut state = EditState::new(PaletteModel::new(&CATPPUCCIN_MOCHA));
            for (channel, big, sign) in steps {
                while state.selected_channel().index() != channel {
                    state.next_channel();
                }
                state.nudge_selected(big, sign);
            }
            let hsl = state.selected_color();
            prop_assert!((0.0..1.0).contains(&hsl.h));
            prop_assert!((0.0..=1.0).contains(&hsl.s));
            prop_assert!((0.0..=1.0).contains(&hsl.l));
        }

        #[test]
        fn derive_brights_is_pure(l in 0.0f64..=1.0, boost in 0.0f64..=1.0) {
            let mut model = PaletteModel::new(&CATPPUCCIN_MOCHA);
            model.set_channel(3, Channel::Lightness, l);
            let first = model.derive_brights(boost);
            prop_assert_eq!(first, model.derive_brights(boost));
            prop_assert!(first.iter().all(|c| c.l <= 1.0));
        }

        #[test]
        fn unlinked_effective_palette_is_stored_colors(
            bytes in proptest::collection::vec(any::<u8>(), 48)
        ) {
            let palette: Palette = std::array::from_fn(|i| {
                Color::new(bytes[3 * i], bytes[3 * i + 1], bytes[3 * i + 2])
            });
            let model = PaletteModel::new(&palette);
            let stored: [Hsl; 16] = *model.colors();
            let expected = stored.map(Hsl::to_rgb);
            prop_assert_eq!(model.effective_palette(), expected);
        }
    }
}

// ---------------------------------------------------------------------------
// CLI integration tests (run the actual binary)
// ---------------------------------------------------------------------------

fn bin() -> Process {
    Process::new(env!("CARGO_BIN_EXE_ansi-tuner"))
}

#[test]
fn cli_ghostty_prints_stored_palette() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palette.txt");
    let palette = custom_palette();
    write_store(&path, &palette);

    let output = bin()
        .args(["--palette", path.to_str().unwrap(), "--ghostty"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 22);
    assert_eq!(lines[0], format!("background = {}", palette[0]));
    assert_eq!(lines[6 + 15], format!("palette = 15={}", palette[15]));
}

#[test]
fn cli_apply_writes_osc_sequences() {
    let dir = tempfile::tempdir().unwrap();
    let output = bin()
        .args([
            "--palette",
            dir.path().join("missing.txt").to_str().unwrap(),
            "--apply",
        ])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        encode_palette(&CATPPUCCIN_MOCHA)
    );
}

#[test]
fn cli_help_output() {
    let output = bin().arg("--help").output().expect("failed to run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--palette", "--boost", "--link-brights", "--compact", "--apply", "--ghostty"] {
        assert!(stdout.contains(flag), "help should mention {flag}");
    }
}
