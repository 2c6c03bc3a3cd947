pub mod environment;
pub mod working_dir_file;
