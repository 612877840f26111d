use assert_json_diff::assert_json_eq;
use poi_tools_cli::cli::{export_cmd, flatten_cmd, reverse_cmd};
use serde_json::{json, Value};
use std::path::Path;

const REGIONS: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": { "name": "Windsward" },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[8000.5, 1200.0], [8100.0, 1250.25], [8050.0, 1300.0]]]
            }
        },
        {
            "type": "Feature",
            "properties": {},
            "geometry": { "type": "Point", "coordinates": [10, 20] }
        }
    ]
}"#;

fn read(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_flatten_command_writes_swapped_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.geojson");
    let output = dir.path().join("output.json");
    std::fs::write(&input, REGIONS).unwrap();

    flatten_cmd::run(&flatten_cmd::FlattenArgs {
        input,
        output: output.clone(),
        keep_order: false,
        pretty: false,
    })
    .unwrap();

    assert_json_eq!(
        read(&output),
        json!([
            {
                "name": "Windsward",
                "coordinates": [[1200.0, 8000.5], [1250.25, 8100.0], [1300.0, 8050.0]]
            },
            { "name": null, "coordinates": [[20.0, 10.0]] }
        ])
    );
}

#[test]
fn test_flatten_command_keep_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.geojson");
    let output = dir.path().join("output.json");
    std::fs::write(&input, REGIONS).unwrap();

    flatten_cmd::run(&flatten_cmd::FlattenArgs {
        input,
        output: output.clone(),
        keep_order: true,
        pretty: true,
    })
    .unwrap();

    assert_json_eq!(read(&output)[1], json!({ "name": null, "coordinates": [[10.0, 20.0]] }));
}

#[test]
fn test_export_command_keeps_raw_coordinates() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.geojson");
    let output = dir.path().join("output.json");
    std::fs::write(&input, REGIONS).unwrap();

    export_cmd::run(&export_cmd::ExportArgs {
        input,
        output: output.clone(),
        pretty: false,
    })
    .unwrap();

    assert_json_eq!(
        read(&output),
        json!([
            {
                "name": "Windsward",
                "coordinates": [[[8000.5, 1200.0], [8100.0, 1250.25], [8050.0, 1300.0]]]
            },
            { "name": null, "coordinates": [10, 20] }
        ])
    );
    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains(r#""coordinates":[10,20]"#));
}

#[test]
fn test_reverse_command() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.json");
    let output = dir.path().join("output.json");
    std::fs::write(&input, "[[-43.18, -22.97], [1, 2]]").unwrap();

    reverse_cmd::run(&reverse_cmd::ReverseArgs {
        input,
        output: output.clone(),
        pretty: false,
    })
    .unwrap();

    assert_json_eq!(read(&output), json!([[-22.97, -43.18], [2.0, 1.0]]));
}

#[test]
fn test_reverse_command_rejects_triples() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.json");
    let output = dir.path().join("output.json");
    std::fs::write(&input, "[[1, 2, 3]]").unwrap();

    let err = reverse_cmd::run(&reverse_cmd::ReverseArgs {
        input,
        output: output.clone(),
        pretty: false,
    })
    .unwrap_err();

    assert!(err.to_string().contains("expected an [x, y] pair"));
    assert!(!output.exists());
}

#[test]
fn test_flatten_command_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = flatten_cmd::run(&flatten_cmd::FlattenArgs {
        input: dir.path().join("missing.geojson"),
        output: dir.path().join("output.json"),
        keep_order: false,
        pretty: false,
    })
    .unwrap_err();
    assert!(err.to_string().contains("missing.geojson"));
}
