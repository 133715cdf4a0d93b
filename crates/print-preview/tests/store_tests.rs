use print_preview::*;

#[test]
fn test_new_store_has_defaults() {
    let store = SettingsStore::new();
    assert_eq!(*store.settings(), PrintSettings::default());
    assert!(store.presets().is_empty());
}

#[test]
fn test_update_only_touches_named_fields() {
    let mut store = SettingsStore::new();
    let before = store.settings().clone();

    let after = store
        .update(SettingsUpdate {
            dpi: Some(450),
            ..Default::default()
        })
        .unwrap()
        .clone();

    assert_eq!(after.dpi, 450);
    assert_eq!(
        after,
        PrintSettings {
            dpi: 450,
            ..before
        }
    );
}

#[test]
fn test_update_merges_several_fields() {
    let mut store = SettingsStore::new();
    store
        .update(SettingsUpdate {
            page_size: Some(PageSize::Custom),
            custom_width: Some(100.0),
            custom_height: Some(50.0),
            orientation: Some(Orientation::Landscape),
            color_profile: Some(ColorProfile::Fogra39),
            ..Default::default()
        })
        .unwrap();

    let settings = store.settings();
    assert_eq!(settings.color_profile, ColorProfile::Fogra39);
    assert_eq!(resolve_dimensions(settings).as_tuple(), (50.0, 100.0));
}

#[test]
fn test_empty_update_is_noop() {
    let mut store = SettingsStore::new();
    let update = SettingsUpdate::default();
    assert!(update.is_empty());
    store.update(update).unwrap();
    assert_eq!(*store.settings(), PrintSettings::default());
}

#[test]
fn test_dpi_is_clamped() {
    let mut store = SettingsStore::new();

    store
        .update(SettingsUpdate {
            dpi: Some(10),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(store.settings().dpi, 72);

    store
        .update(SettingsUpdate {
            dpi: Some(5000),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(store.settings().dpi, 1200);

    store
        .update(SettingsUpdate {
            dpi: Some(1200),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(store.settings().dpi, 1200);
}

#[test]
fn test_compression_quality_is_clamped() {
    let mut store = SettingsStore::new();
    store
        .update(SettingsUpdate {
            compression_quality: Some(150),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(store.settings().compression_quality, 100);
}

#[test]
fn test_invalid_dimensions_rejected_whole() {
    let mut store = SettingsStore::new();

    for bad in [0.0, -10.0, f32::NAN, f32::INFINITY] {
        let result = store.update(SettingsUpdate {
            page_size: Some(PageSize::Custom),
            custom_width: Some(bad),
            dpi: Some(600),
            ..Default::default()
        });
        match result {
            Err(SettingsError::InvalidDimension { field, .. }) => {
                assert_eq!(field, "custom_width")
            }
            other => panic!("Expected InvalidDimension, got {:?}", other),
        }
    }

    // Nothing from the rejected updates leaked through
    assert_eq!(*store.settings(), PrintSettings::default());
}

#[test]
fn test_negative_margins_rejected() {
    let mut store = SettingsStore::new();

    let result = store.update(SettingsUpdate {
        bleed_size: Some(-1.0),
        ..Default::default()
    });
    assert!(matches!(
        result,
        Err(SettingsError::InvalidMargin {
            field: "bleed_size",
            ..
        })
    ));

    let result = store.update(SettingsUpdate {
        safe_area_size: Some(-0.5),
        ..Default::default()
    });
    assert!(matches!(
        result,
        Err(SettingsError::InvalidMargin {
            field: "safe_area_size",
            ..
        })
    ));

    // Zero margins are fine
    store
        .update(SettingsUpdate {
            bleed_size: Some(0.0),
            safe_area_size: Some(0.0),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(store.settings().bleed_size, 0.0);
}

#[test]
fn test_zero_page_selection_rejected() {
    let mut store = SettingsStore::new();
    let result = store.update(SettingsUpdate {
        export_type: Some(ExportType::Pages),
        selected_pages: Some(vec![1, 0, 3]),
        ..Default::default()
    });
    assert!(matches!(result, Err(SettingsError::InvalidPageSelection)));
    assert_eq!(store.settings().export_type, ExportType::Full);
}

#[test]
fn test_reset_restores_defaults_and_keeps_presets() {
    let mut store = SettingsStore::new();
    store
        .add_preset(
            "Poster",
            SettingsUpdate {
                page_size: Some(PageSize::Tabloid),
                ..Default::default()
            },
        )
        .unwrap();
    store
        .update(SettingsUpdate {
            dpi: Some(600),
            ..Default::default()
        })
        .unwrap();

    store.reset();
    assert_eq!(*store.settings(), PrintSettings::default());
    assert_eq!(store.presets().len(), 1);
}

#[test]
fn test_presets_newest_first_with_unique_ids() {
    let mut store = SettingsStore::new();
    let first = store.add_preset("First", SettingsUpdate::default()).unwrap();
    let second = store
        .add_preset("Second", SettingsUpdate::default())
        .unwrap();

    assert_ne!(first, second);
    let names: Vec<_> = store.presets().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Second", "First"]);
}

#[test]
fn test_load_preset_applies_partial_settings() {
    let mut store = SettingsStore::new();
    let id = store
        .add_preset(
            "Letter proof",
            SettingsUpdate {
                page_size: Some(PageSize::Letter),
                orientation: Some(Orientation::Landscape),
                dpi: Some(150),
                ..Default::default()
            },
        )
        .unwrap();

    store
        .update(SettingsUpdate {
            color_profile: Some(ColorProfile::Swop),
            ..Default::default()
        })
        .unwrap();

    let settings = store.load_preset(id).unwrap();
    assert_eq!(settings.page_size, PageSize::Letter);
    assert_eq!(settings.orientation, Orientation::Landscape);
    assert_eq!(settings.dpi, 150);
    // Fields the preset does not name are kept
    assert_eq!(settings.color_profile, ColorProfile::Swop);
}

#[test]
fn test_invalid_preset_rejected() {
    let mut store = SettingsStore::new();
    let result = store.add_preset(
        "Broken",
        SettingsUpdate {
            custom_height: Some(-5.0),
            ..Default::default()
        },
    );
    assert!(result.is_err());
    assert!(store.presets().is_empty());
}

#[test]
fn test_remove_and_unknown_preset() {
    let mut store = SettingsStore::new();
    let id = store.add_preset("Temp", SettingsUpdate::default()).unwrap();

    assert!(store.remove_preset(id));
    assert!(!store.remove_preset(id));

    match store.load_preset(id) {
        Err(SettingsError::UnknownPreset(missing)) => assert_eq!(missing, id),
        other => panic!("Expected UnknownPreset, got {:?}", other),
    }
}

#[test]
fn test_with_settings_keeps_valid_record() {
    let settings = PrintSettings {
        page_size: PageSize::Custom,
        custom_width: 90.0,
        custom_height: 55.0,
        dpi: 600,
        ..Default::default()
    };
    let store = SettingsStore::with_settings(settings.clone()).unwrap();
    assert_eq!(*store.settings(), settings);
}

#[test]
fn test_with_settings_clamps_dpi() {
    let store = SettingsStore::with_settings(PrintSettings {
        dpi: 5,
        compression_quality: 200,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(store.settings().dpi, 72);
    assert_eq!(store.settings().compression_quality, 100);
}

#[test]
fn test_with_settings_rejects_invalid_record() {
    let result = SettingsStore::with_settings(PrintSettings {
        page_size: PageSize::Custom,
        custom_width: -50.0,
        dpi: 5,
        safe_area_size: -20.0,
        show_crop_marks: false,
        ..Default::default()
    });
    assert!(matches!(
        result,
        Err(SettingsError::InvalidDimension {
            field: "custom_width",
            ..
        })
    ));

    let result = SettingsStore::with_settings(PrintSettings {
        safe_area_size: -20.0,
        ..Default::default()
    });
    assert!(matches!(
        result,
        Err(SettingsError::InvalidMargin {
            field: "safe_area_size",
            ..
        })
    ));
}

#[test]
fn test_store_built_from_record_previews_non_negative() {
    let store = SettingsStore::with_settings(PrintSettings {
        page_size: PageSize::Custom,
        custom_width: 50.0,
        custom_height: 40.0,
        safe_area_size: 30.0,
        show_crop_marks: false,
        ..Default::default()
    })
    .unwrap();

    let layout = compute_preview(
        store.settings(),
        Viewport::new(800.0, 600.0),
        &PreviewConfig::default(),
    );
    let safe = layout.safe_area.unwrap();
    for rect in [layout.page, layout.bleed, safe] {
        assert!(rect.x >= 0.0 && rect.y >= 0.0, "{:?}", rect);
        assert!(rect.width >= 0.0 && rect.height >= 0.0, "{:?}", rect);
    }
}
