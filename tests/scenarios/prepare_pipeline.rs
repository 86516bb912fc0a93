//! Scenario: a mapper drops screenshots, an icon and a description into a
//! folder and prepares them for an addon.

use std::cell::RefCell;

use mapprep::application::MapInfoOutcome;
use mapprep::domain::ports::NoopEventSink;
use mapprep::infrastructure::{LocalFs, PngCropConverter};
use mapprep::{
    ContentLayout, MapName, PrepError, PrepareEvent, PrepareEventSink, PrepareOptions,
    PrepareUseCase,
};

use crate::assert_exists;
use crate::common::*;

#[derive(Default)]
struct RecordingSink {
    events: RefCell<Vec<PrepareEvent>>,
}

impl PrepareEventSink for RecordingSink {
    fn on_event(&self, event: PrepareEvent) {
        self.events.borrow_mut().push(event);
    }
}

fn use_case() -> PrepareUseCase<LocalFs, PngCropConverter> {
    PrepareUseCase::new(LocalFs::new(), PngCropConverter::new())
}

fn options(env: &TestEnv) -> PrepareOptions {
    PrepareOptions::new(
        MapName::parse("kz_test").unwrap(),
        env.source(),
        ContentLayout::new(env.content_root(), env.game_root()),
    )
}

const SHOTS: &str = "panorama/images/map_icons/screenshots/1080p";

#[test]
fn scenario_full_source_directory() {
    let env = TestEnv::new();
    write_standard_source(&env.source(), "kz_test");

    let result = use_case().execute(&options(&env), &NoopEventSink).unwrap();

    assert!(result.is_success(), "errors: {:?}", result.errors);
    assert_eq!(result.converted.len(), 2);

    // Wide image loses its sides, square image loses top and bottom
    let first = env.content_path(&format!("{SHOTS}/kz_test_1_png.png"));
    let second = env.content_path(&format!("{SHOTS}/kz_test_2_png.png"));
    assert_exists!(env.content_root(), &first);
    assert_exists!(env.content_root(), &second);
    assert_eq!(image_dimensions(&first), (1778, 1000));
    assert_eq!(image_dimensions(&second), (1000, 562));

    let vmat = std::fs::read_to_string(env.content_path(&format!("{SHOTS}/kz_test_2_png.vmat")))
        .unwrap();
    assert!(vmat.contains(&format!("{SHOTS}/kz_test_2_png.png")));
    assert!(vmat.contains("csgo_composite_generic.vfx"));

    let icon = env.content_path("panorama/images/map_icons/map_icon_kz_test.svg");
    assert_eq!(std::fs::read_to_string(icon).unwrap(), ICON_SVG);

    let info = env.game_path("maps/kz_test.txt");
    assert_eq!(std::fs::read_to_string(&info).unwrap(), MAP_INFO);
    assert!(!env.source().join("kz_test.txt").exists(), "text is moved, not copied");
    assert!(matches!(result.map_info, Some(MapInfoOutcome::Moved { .. })));
}

#[test]
fn scenario_source_images_are_left_in_place() {
    let env = TestEnv::new();
    write_standard_source(&env.source(), "kz_test");

    use_case().execute(&options(&env), &NoopEventSink).unwrap();

    assert!(env.source().join("a.png").exists());
    assert!(env.source().join("b.jpg").exists());
    assert!(env.source().join("icon.svg").exists());
}

#[test]
fn scenario_corrupt_image_keeps_numbering() {
    let env = TestEnv::new();
    write_image(&env.source().join("a.png"), 1920, 1080, image::ImageFormat::Png);
    std::fs::write(env.source().join("b.png"), b"not an image").unwrap();
    write_image(&env.source().join("c.png"), 1920, 1080, image::ImageFormat::Png);

    let result = use_case().execute(&options(&env), &NoopEventSink).unwrap();

    assert!(!result.is_success());
    assert_eq!(result.failed.len(), 1);
    assert_eq!(result.failed[0].index, 2);

    // Numbers follow the sorted listing, the gap stays a gap
    assert!(env.content_path(&format!("{SHOTS}/kz_test_1_png.png")).exists());
    assert!(!env.content_path(&format!("{SHOTS}/kz_test_2_png.png")).exists());
    assert!(env.content_path(&format!("{SHOTS}/kz_test_3_png.png")).exists());

    // Already 16:9, so nothing is cropped
    assert_eq!(
        image_dimensions(&env.content_path(&format!("{SHOTS}/kz_test_3_png.png"))),
        (1920, 1080)
    );

    let compilable: Vec<usize> = result.compilable().iter().map(|d| d.name().index()).collect();
    assert_eq!(compilable, vec![1, 3]);
}

#[test]
fn scenario_missing_text_creates_empty_map_info() {
    let env = TestEnv::new();
    write_image(&env.source().join("a.png"), 1600, 900, image::ImageFormat::Png);
    std::fs::write(env.source().join("readme.txt"), "not the description").unwrap();

    let sink = RecordingSink::default();
    let result = use_case().execute(&options(&env), &sink).unwrap();

    let info = env.game_path("maps/kz_test.txt");
    assert_eq!(std::fs::read_to_string(&info).unwrap(), "");
    assert!(matches!(result.map_info, Some(MapInfoOutcome::Created(_))));
    assert!(result.icon.is_none());

    let events = sink.events.borrow();
    assert!(events.contains(&PrepareEvent::IconMissing));
    assert!(matches!(events.first(), Some(PrepareEvent::Started { image_count: 1, .. })));
}

#[test]
fn scenario_rerun_keeps_existing_map_info() {
    let env = TestEnv::new();
    write_standard_source(&env.source(), "kz_test");

    use_case().execute(&options(&env), &NoopEventSink).unwrap();
    let second = use_case().execute(&options(&env), &NoopEventSink).unwrap();

    // The text was moved by the first run, the second keeps it
    assert!(matches!(second.map_info, Some(MapInfoOutcome::Kept(_))));
    assert_eq!(
        std::fs::read_to_string(env.game_path("maps/kz_test.txt")).unwrap(),
        MAP_INFO
    );
    assert!(second.created_dirs.is_empty());
}

#[test]
fn scenario_missing_source_is_fatal() {
    let env = TestEnv::new();
    let mut opts = options(&env);
    opts.source = env.root().join("does-not-exist");

    let err = use_case().execute(&opts, &NoopEventSink).unwrap_err();
    assert!(matches!(err, PrepError::DirectoryNotFound { .. }));
}
