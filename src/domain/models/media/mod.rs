pub mod media_file;

pub use media_file::MediaFile;
