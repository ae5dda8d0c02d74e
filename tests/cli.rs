//! 명령행 치수 입력 → 세션 구성 테스트.
use tile_area_calculator::app::session_from_specs;
use tile_area_calculator::config::Config;
use tile_area_calculator::ui_cli::render_totals;
use tile_area_calculator::units::LengthUnit;

#[test]
fn entries_without_unit_use_configured_default() {
    let cfg = Config {
        default_unit: LengthUnit::Meter,
        ..Config::default()
    };
    let mut session = session_from_specs(&cfg, &["2x3".to_string()], Some(0)).unwrap();
    assert_eq!(session.entries.entries()[0].unit, LengthUnit::Meter);
    assert!((session.total().m2 - 6.0).abs() < 1e-12);
}

#[test]
fn totals_text_for_sample_sheet() {
    let cfg = Config::default();
    let mut session = session_from_specs(&cfg, &["2400x1200mm".to_string()], None).unwrap();
    let text = render_totals(&session.total());
    assert!(text.contains("3.312 m²"), "{text}");
    assert!(text.contains("33,120 cm²"), "{text}");
    assert!(text.contains("3,312,000 mm²"), "{text}");
}
