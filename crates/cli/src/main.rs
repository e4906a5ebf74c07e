use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use facemap_core::detection::infrastructure::recorded_landmark_detector::{
    LandmarkRecording, RecordedLandmarkDetector,
};
use facemap_core::makeup::infrastructure::cpu_overlay_renderer::CpuOverlayRenderer;
use facemap_core::pipeline::analysis_settings::AnalysisSettings;
use facemap_core::pipeline::analysis_summary::AnalysisSummary;
use facemap_core::pipeline::analyze_frame_use_case::{AnalyzeFrameUseCase, FrameAnalysis};
use facemap_core::shared::frame::Frame;
use facemap_core::shared::image_io::{read_frame, write_frame};

/// Facial geometry classification and makeup region mapping over recorded
/// face-mesh landmarks.
#[derive(Parser)]
#[command(name = "facemap")]
struct Cli {
    /// Landmark recording (JSON).
    recording: PathBuf,

    /// Image to use as the pixels of every frame (enables skin tone).
    #[arg(long)]
    image: Option<PathBuf>,

    /// Settings file (defaults to the platform config location).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write one PNG per frame with makeup overlays drawn in.
    #[arg(long)]
    render_dir: Option<PathBuf>,

    /// Consecutive frames before the face-present flag flips.
    #[arg(long)]
    presence_frames: Option<usize>,

    /// Print results as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let mut settings = match &cli.config {
        Some(path) => AnalysisSettings::load_from(path)?,
        None => AnalysisSettings::load(),
    };
    if let Some(n) = cli.presence_frames {
        settings.presence_frames = n;
    }

    let recording = LandmarkRecording::load(&cli.recording)?;
    let detector = RecordedLandmarkDetector::new(&recording)?;
    let image = cli.image.as_deref().map(read_frame).transpose()?;
    if let Some(img) = &image {
        if (img.width(), img.height()) != (recording.width, recording.height) {
            log::warn!(
                "Image is {}x{} but landmarks were recorded at {}x{}",
                img.width(),
                img.height(),
                recording.width,
                recording.height
            );
        }
    }

    let mut use_case = AnalyzeFrameUseCase::new(Box::new(detector), &settings)
        .with_skin_tone_sampling(image.is_some());
    if cli.render_dir.is_some() {
        use_case = use_case.with_renderer(Box::new(CpuOverlayRenderer::new()));
    }

    let mut summary = AnalysisSummary::new();
    let mut analyses = Vec::new();
    for index in recording.frame_indices() {
        let mut frame = match &image {
            Some(img) => img.clone().with_index(index),
            None => Frame::blank(recording.width, recording.height, index),
        };
        let analysis = use_case.execute(&mut frame)?;
        if let Some(dir) = &cli.render_dir {
            write_frame(&render_path(dir, index), &frame)?;
        }
        summary.record(&analysis);
        if !cli.json {
            println!("{}", describe(&analysis));
        }
        analyses.push(analysis);
    }

    if cli.json {
        let out = serde_json::json!({ "frames": analyses, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        match summary.summary_string() {
            Some(line) => println!("Summary: {line}"),
            None => println!("Summary: no face classified in {} frames", summary.frames),
        }
    }

    if let Some(dir) = &cli.render_dir {
        log::info!("Rendered frames written to {}", dir.display());
    }
    Ok(())
}

fn describe(analysis: &FrameAnalysis) -> String {
    let Some(c) = &analysis.classification else {
        let state = if analysis.face_present {
            "face present, landmarks unusable"
        } else {
            "no face"
        };
        return format!("frame {}: {state}", analysis.frame_index);
    };
    let mut line = format!(
        "frame {}: {} face, {} eyes, {} lips, {} jawline",
        analysis.frame_index, c.face_shape, c.eye_shape, c.lip_shape, c.jawline_type
    );
    if let Some(tone) = c.skin_tone {
        line.push_str(&format!(", {tone} skin"));
    }
    if !analysis.overlays.is_empty() {
        line.push_str(&format!(" [{} overlays]", analysis.overlays.len()));
    }
    line
}

fn render_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("frame_{index:05}.png"))
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.recording.exists() {
        return Err(format!("Recording not found: {}", cli.recording.display()).into());
    }
    if let Some(image) = &cli.image {
        if !image.exists() {
            return Err(format!("Image not found: {}", image.display()).into());
        }
    }
    if let Some(config) = &cli.config {
        if !config.exists() {
            return Err(format!("Settings file not found: {}", config.display()).into());
        }
    }
    if cli.presence_frames == Some(0) {
        return Err("Presence frames must be at least 1".into());
    }
    Ok(())
}
