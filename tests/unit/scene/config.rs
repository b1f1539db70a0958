use super::*;

#[test]
fn default_is_the_six_circle_demo() {
    let cfg = SceneConfig::default();
    cfg.validate().unwrap();

    let radii: Vec<u16> = cfg.circles.iter().map(|c| c.radius).collect();
    let offsets: Vec<u16> = cfg.circles.iter().map(|c| c.angle_offset).collect();
    let freqs: Vec<u16> = cfg.circles.iter().map(|c| c.frequency).collect();
    assert_eq!(radii, vec![120, 100, 80, 60, 40, 20]);
    assert_eq!(offsets, vec![0, 45, 20, 0, 90, 0]);
    assert_eq!(freqs, vec![1, 2, 4, 6, 8, 10]);
    assert_eq!(cfg.fps, Fps { num: 60, den: 1 });
    assert_eq!(cfg.center, [800.0, 450.0]);
}

#[test]
fn build_circles_anchors_every_circle_at_center() {
    let circles = SceneConfig::default().build_circles();
    assert_eq!(circles.len(), 6);
    for c in &circles {
        assert_eq!(c.center, Vec2d::new(800.0, 450.0));
        assert_eq!(c.cycle_dot, Vec2d::new(800.0 + f64::from(c.radius), 450.0));
    }
}

#[test]
fn json_parses_with_defaults() {
    let cfg = SceneConfig::from_json_str(
        r#"{
            "canvas": { "width": 200, "height": 100 },
            "center": [100.0, 50.0],
            "circles": [ { "radius": 30, "frequency": 1 }, { "radius": 10, "angle_offset": 90, "frequency": 3 } ]
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.fps, Fps::default());
    assert_eq!(cfg.circles[0].angle_offset, 0);
    assert_eq!(
        cfg.circles[1],
        CircleDef {
            radius: 10,
            angle_offset: 90,
            frequency: 3
        }
    );
}

#[test]
fn json_survives_serialize_then_parse() {
    let cfg = SceneConfig::default();
    let s = serde_json::to_string(&cfg).unwrap();
    assert_eq!(SceneConfig::from_json_str(&s).unwrap(), cfg);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SceneConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, EpicycleError::Serde(_)));
}

#[test]
fn validation_rejects_unusable_scenes() {
    let mut empty = SceneConfig::default();
    empty.circles.clear();
    assert!(matches!(
        empty.validate(),
        Err(EpicycleError::Validation(_))
    ));

    let mut outside = SceneConfig::default();
    outside.center = [1600.0, 10.0];
    assert!(outside.validate().is_err());

    let mut nan = SceneConfig::default();
    nan.center = [f64::NAN, 10.0];
    assert!(nan.validate().is_err());

    let mut fps = SceneConfig::default();
    fps.fps = Fps { num: 0, den: 1 };
    assert!(fps.validate().is_err());

    let mut canvas = SceneConfig::default();
    canvas.canvas = Canvas {
        width: 0,
        height: 900,
    };
    assert!(canvas.validate().is_err());
}

#[test]
fn from_path_reads_files_and_reports_missing_ones() {
    let dir = std::env::temp_dir().join(format!("epicycles-scene-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("scene.json");
    std::fs::write(&path, serde_json::to_string(&SceneConfig::default()).unwrap()).unwrap();

    assert_eq!(
        SceneConfig::from_path(&path).unwrap(),
        SceneConfig::default()
    );

    let missing = SceneConfig::from_path(dir.join("missing.json")).unwrap_err();
    assert!(matches!(missing, EpicycleError::Other(_)));
    assert!(missing.to_string().contains("missing.json"));

    let _ = std::fs::remove_dir_all(&dir);
}
