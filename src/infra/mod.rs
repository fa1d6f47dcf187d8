pub mod archive_fs;
pub mod geocoder_http;
pub mod grid_fs;
