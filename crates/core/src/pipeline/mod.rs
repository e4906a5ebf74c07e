pub mod analysis_settings;
pub mod analysis_summary;
pub mod analyze_frame_use_case;
