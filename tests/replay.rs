//! Panel files and scripted replays loaded from disk

use std::io::Write;

use tactile::config::{self, PanelConfig};
use tactile::control::{ControlKind, Emission};
use tactile::feedback::Direction;
use tactile::replay;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_example_panel_is_valid() {
    let panel: PanelConfig = serde_yaml::from_str(include_str!("../tactile.example.yaml")).unwrap();
    panel.validate().unwrap();

    let controls = panel.build_controls().unwrap();
    assert_eq!(controls.len(), 6);
    assert!(controls.iter().any(|c| c.kind() == ControlKind::TimeAdjuster));
}

#[test]
fn test_replay_dial_script() {
    let panel = write_temp(
        r#"
controls:
  - name: max_position
    kind: metallic_dial
    min: 0
    max: 50
    safe_min: 5
    safe_max: 20
    value: 10
"#,
    );
    let script = write_temp(
        r#"
control: max_position
bounds: { x: 0, y: 0, width: 120, height: 120 }
steps:
  - { op: down, x: 60, y: 0, t: 0 }
  - { op: move, x: 120, y: 60, t: 48 }
  - { op: up, t: 64 }
  - { op: move, x: 0, y: 60, t: 80 }
  - { op: edit }
  - { op: type, text: "18%" }
  - { op: key, key: enter }
  - { op: nudge, direction: up, t: 200 }
"#,
    );

    let panel = config::load_config(panel.path()).unwrap();
    let script = replay::load_script(script.path()).unwrap();
    let mut control = panel.control(&script.control).unwrap().build().unwrap();

    let recorder = replay::run(&script, &mut control);

    // Top of the dial is 25, the right-hand side 41.67 rounds to 42
    assert_eq!(recorder.changes(), vec![25.0, 42.0, 18.0, 19.0]);
    assert_eq!(control.value(), 19.0);
    assert!(control.zone().is_safe());

    let directions: Vec<Direction> = recorder.feedback().iter().map(|f| f.direction).collect();
    assert_eq!(directions, vec![Direction::Up, Direction::Up, Direction::Up]);
}

#[test]
fn test_replay_json_output() {
    let panel = write_temp("controls:\n  - { name: size, kind: horizontal_slider, min: 0, max: 10 }\n");
    let script = write_temp(
        r#"{"control": "size", "bounds": {"x": 0, "y": 0, "width": 10, "height": 2},
            "steps": [{"op": "down", "x": 3, "y": 1, "t": 5}, {"op": "up", "t": 9}]}"#,
    );

    let panel = config::load_config(panel.path()).unwrap();
    let script = replay::load_script(script.path()).unwrap();
    let mut control = panel.control("size").unwrap().build().unwrap();
    let recorder = replay::run(&script, &mut control);

    assert_eq!(
        recorder.emissions,
        vec![
            Emission::Change { value: 3.0 },
            Emission::Feedback {
                direction: Direction::Up,
                kind: ControlKind::HorizontalSlider,
                time_ms: 5,
            },
        ]
    );
    let json = serde_json::to_value(&recorder.emissions).unwrap();
    assert_eq!(json[0]["event"], "change");
    assert_eq!(json[1]["kind"], "horizontal_slider");
}

#[test]
fn test_missing_script_is_an_error() {
    assert!(replay::load_script(std::path::Path::new("/nonexistent/script.yaml")).is_err());
}
