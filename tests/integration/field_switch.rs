//! Integration tests for switching fields against real files

use super::test_utils::{NatroFixture, FIELD_CONFIG, NM_CONFIG};
use fieldswap::error::{ConfigFile, SwitchError};
use fieldswap::switch::{FieldSwitcher, SwitchPaths};

fn switcher(fixture: &NatroFixture) -> FieldSwitcher {
    FieldSwitcher::new(SwitchPaths::from_natro_root(fixture.root()))
}

#[test]
fn test_rose_gets_section_values_and_fallbacks() {
    let fixture = NatroFixture::new();

    let outcome = switcher(&fixture).switch("Rose").unwrap();
    assert_eq!(outcome.field, "Rose");
    assert_eq!(outcome.keys_patched, 14);
    assert!(outcome.unmatched_keys.is_empty());

    assert_eq!(
        fixture.nm_config(),
        "[Settings]\r\n\
         GuiTheme=MacLion3\r\n\
         ; gather slots\r\n\
         [Gather]\r\n\
         CurrentFieldNum=1\r\n\
         FieldName1=Rose\r\n\
         FieldName2=Pepper\r\n\
         FieldPattern1=Snake\r\n\
         FieldPattern2=Lines\r\n\
         FieldPatternSize1=M\r\n\
         FieldReturnType1=Walk\r\n\
         FieldRotateDirection1=None\r\n\
         FieldRotateTimes1=1\r\n\
         FieldSprinklerLoc1=Center\r\n\
         FieldSprinklerDist1=1\r\n\
         FieldPatternInvertFB1=0\r\n\
         FieldPatternInvertLR1=0\r\n\
         FieldUntilPack1=95\r\n\
         FieldPatternShift1=0\r\n\
         FieldPatternReps1=10\r\n"
    );
}

#[test]
fn test_fully_specified_section_overrides_every_key() {
    let fixture = NatroFixture::new();
    switcher(&fixture).switch("Pine Tree").unwrap();

    let text = fixture.nm_config();
    for line in [
        "FieldName1=Pine Tree\r\n",
        "FieldPattern1=Lines\r\n",
        "FieldPatternSize1=L\r\n",
        "FieldReturnType1=Rejoin\r\n",
        "FieldRotateDirection1=Right\r\n",
        "FieldRotateTimes1=2\r\n",
        "FieldSprinklerLoc1=Lower Right\r\n",
        "FieldSprinklerDist1=6\r\n",
        "FieldPatternInvertFB1=1\r\n",
        "FieldPatternInvertLR1=0\r\n",
        "FieldUntilPack1=100\r\n",
        "FieldPatternShift1=1\r\n",
        "FieldPatternReps1=20\r\n",
    ] {
        assert!(text.contains(line), "missing {:?} in:\n{}", line, text);
    }
    assert!(text.contains("FieldPattern2=Lines\r\n"));
}

#[test]
fn test_switching_twice_is_stable() {
    let fixture = NatroFixture::new();
    let switcher = switcher(&fixture);

    switcher.switch("Rose").unwrap();
    let first = fixture.nm_config();
    switcher.switch("Rose").unwrap();
    assert_eq!(fixture.nm_config(), first);
}

#[test]
fn test_unknown_or_miscased_field_leaves_file_untouched() {
    let fixture = NatroFixture::new();
    for requested in ["rose", "Lake", "Pine tree"] {
        let err = switcher(&fixture).switch(requested).unwrap_err();
        assert!(matches!(err, SwitchError::UnknownField { .. }), "{requested}");
    }
    assert_eq!(fixture.nm_config(), NM_CONFIG);
}

#[test]
fn test_missing_section_leaves_file_untouched() {
    let fixture = NatroFixture::new();
    let err = switcher(&fixture).switch("Sunflower").unwrap_err();
    match err {
        SwitchError::MissingFieldSection { field, path } => {
            assert_eq!(field, "Sunflower");
            assert_eq!(path, fixture.field_config_path());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(fixture.nm_config(), NM_CONFIG);
}

#[test]
fn test_missing_field_config_is_a_read_error() {
    let fixture = NatroFixture::new();
    std::fs::remove_file(fixture.field_config_path()).unwrap();

    let err = switcher(&fixture).switch("Rose").unwrap_err();
    assert!(matches!(
        err,
        SwitchError::FileRead {
            file: ConfigFile::FieldDefaults,
            ..
        }
    ));
    assert_eq!(err.kind(), "file_read");
    assert_eq!(fixture.nm_config(), NM_CONFIG);
}

#[test]
fn test_missing_nm_config_is_a_read_error() {
    let fixture = NatroFixture::new();
    std::fs::remove_file(fixture.nm_config_path()).unwrap();

    let err = switcher(&fixture).switch("Rose").unwrap_err();
    assert!(matches!(
        err,
        SwitchError::FileRead {
            file: ConfigFile::Current,
            ..
        }
    ));
    assert!(!fixture.nm_config_path().exists(), "no file should be created");
}

#[test]
fn test_keys_missing_from_nm_config_are_not_inserted() {
    let nm_config = "[Gather]\nCurrentFieldNum=2\nFieldName1=Clover\nFieldPattern1=Circle\n";
    let fixture = NatroFixture::with(nm_config, FIELD_CONFIG);

    let outcome = switcher(&fixture).switch("Rose").unwrap();
    assert_eq!(outcome.unmatched_keys.len(), 11);
    assert_eq!(outcome.keys_patched, 3);
    assert!(outcome
        .unmatched_keys
        .contains(&"FieldPatternSize1".to_string()));
    assert_eq!(
        fixture.nm_config(),
        "[Gather]\nCurrentFieldNum=1\nFieldName1=Rose\nFieldPattern1=Snake\n"
    );
}

#[test]
fn test_dry_run_plan_does_not_write() {
    let fixture = NatroFixture::new();
    let plan = switcher(&fixture).plan("Rose").unwrap();
    assert!(plan.patched_text.contains("FieldName1=Rose\r\n"));
    assert_eq!(fixture.nm_config(), NM_CONFIG);
}
