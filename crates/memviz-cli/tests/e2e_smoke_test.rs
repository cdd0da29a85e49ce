use std::fs;

use tempfile::tempdir;

use memviz::FigureKind;
use memviz_cli::{Args, OutputFormat, run};

fn args_for_all(output: &std::path::Path, format: OutputFormat) -> Args {
    Args {
        figure: None,
        all: true,
        output: Some(output.to_string_lossy().to_string()),
        format,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_all_figures_svg() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    run(&args_for_all(temp_dir.path(), OutputFormat::Svg)).expect("run failed");

    for kind in FigureKind::all() {
        let path = temp_dir.path().join(format!("{}.svg", kind.stem()));
        let metadata = fs::metadata(&path)
            .unwrap_or_else(|_| panic!("missing output for {kind}: {}", path.display()));
        assert!(metadata.len() > 0, "{kind}: empty output file");
    }
}

#[test]
fn e2e_smoke_test_all_figures_png() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    run(&args_for_all(temp_dir.path(), OutputFormat::Png)).expect("run failed");

    for kind in FigureKind::all() {
        let path = temp_dir.path().join(format!("{}.png", kind.stem()));
        let content = fs::read(&path)
            .unwrap_or_else(|_| panic!("missing output for {kind}: {}", path.display()));
        assert_eq!(&content[..8], b"\x89PNG\r\n\x1a\n", "{kind}: not a PNG");
    }
}

#[test]
fn e2e_smoke_test_single_figure_with_output_override() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("layout.svg");

    let args = Args {
        figure: Some(FigureKind::MemoryLayout),
        all: false,
        output: Some(output_path.to_string_lossy().to_string()),
        format: OutputFormat::Svg,
        config: None,
        log_level: "off".to_string(),
    };

    run(&args).expect("run failed");

    let content = fs::read_to_string(&output_path).expect("missing output file");
    assert!(content.contains("C++ 程序内存布局"));
}

#[test]
fn e2e_smoke_test_config_background_applies() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style]\nbackground_color = \"#FAFAFA\"\n").unwrap();

    let output_path = temp_dir.path().join("frame.svg");
    let args = Args {
        figure: Some(FigureKind::StackFrame),
        all: false,
        output: Some(output_path.to_string_lossy().to_string()),
        format: OutputFormat::Svg,
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    run(&args).expect("run failed");

    let content = fs::read_to_string(&output_path).expect("missing output file");
    assert!(!content.contains(r#"fill="white""#));
}
