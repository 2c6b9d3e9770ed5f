//! One controller implementation per field variant.

mod audio;
mod clip;
mod image;
mod text;

pub use audio::AudioRecordingController;
pub use clip::MediaClipController;
pub use image::ImageController;
pub use text::TextController;
